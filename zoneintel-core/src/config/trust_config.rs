use serde::{Deserialize, Serialize};

use super::defaults;

/// Confidence decay and consensus voting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustConfig {
    /// Daily multiplicative decay applied to unverified zones.
    pub decay_factor: f64,
    /// Hard gate: voters below this derived level are rejected outright.
    pub min_voter_level: u32,
    /// Distinct accurate voters needed for consensus auto-verification.
    pub consensus_accurate_votes: usize,
    /// Trust score above which an observation verifies without consensus.
    pub auto_verify_trust: f64,
    /// Cap on the karma-derived vote weight multiplier.
    pub vote_weight_cap: f64,
    /// Karma divisor in the vote weight formula.
    pub karma_weight_divisor: f64,
    /// Trust points per unit of summed vote weight.
    pub trust_step: f64,
    /// Karma paid for an ordinary accepted vote.
    pub vote_karma_reward: u32,
    /// Karma paid for the vote that triggers consensus. Intentionally
    /// higher than the ordinary reward.
    pub consensus_karma_reward: u32,
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            decay_factor: defaults::DEFAULT_DECAY_FACTOR,
            min_voter_level: defaults::MIN_VOTER_LEVEL,
            consensus_accurate_votes: defaults::CONSENSUS_ACCURATE_VOTES,
            auto_verify_trust: defaults::AUTO_VERIFY_TRUST,
            vote_weight_cap: defaults::VOTE_WEIGHT_CAP,
            karma_weight_divisor: defaults::KARMA_WEIGHT_DIVISOR,
            trust_step: defaults::TRUST_STEP,
            vote_karma_reward: defaults::VOTE_KARMA_REWARD,
            consensus_karma_reward: defaults::CONSENSUS_KARMA_REWARD,
        }
    }
}
