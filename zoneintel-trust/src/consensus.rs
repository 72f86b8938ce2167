//! Consensus voting on observations.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use zoneintel_core::config::TrustConfig;
use zoneintel_core::constants::KARMA_PER_LEVEL;
use zoneintel_core::errors::TrustError;
use zoneintel_core::models::{Observation, Vote, VoteChoice};

use crate::ledger::VoteLedger;

/// Derived voter level: `floor(karma / 200) + 1`.
pub fn voter_level(karma: u32) -> u32 {
    karma / KARMA_PER_LEVEL + 1
}

/// Signed, karma-capped vote weight:
/// `(±1) × min(1 + karma/1000, cap)`.
pub fn vote_weight(karma: u32, choice: VoteChoice, config: &TrustConfig) -> f64 {
    let sign = match choice {
        VoteChoice::Accurate => 1.0,
        VoteChoice::Inaccurate => -1.0,
    };
    let magnitude = (1.0 + karma as f64 / config.karma_weight_divisor).min(config.vote_weight_cap);
    sign * magnitude
}

/// Result of an accepted vote, expressed as deltas for the caller to
/// persist with its own transaction semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteOutcome {
    pub observation_id: String,
    pub new_trust: f64,
    pub distinct_accurate: usize,
    pub verified: bool,
    /// True when this vote flipped the observation to verified.
    pub newly_verified: bool,
    /// True when this vote was the one that completed consensus.
    pub consensus_triggered: bool,
    /// Karma to credit the voter. The consensus trigger pays more than an
    /// ordinary vote; the asymmetry is intentional.
    pub voter_karma_reward: u32,
}

#[derive(Debug, Clone)]
struct ObservationRecord {
    observation: Observation,
    /// Trust at registration time; the fold applies on top of this.
    seed_trust: f64,
}

/// Consensus engine: gates voters, stores vote facts, derives trust and
/// verification state. Per-observation mutation serializes on the map
/// entry guard.
#[derive(Debug, Default)]
pub struct ConsensusEngine {
    config: TrustConfig,
    ledger: VoteLedger,
    observations: DashMap<String, ObservationRecord>,
}

impl ConsensusEngine {
    pub fn new(config: TrustConfig) -> Self {
        Self {
            config,
            ledger: VoteLedger::new(),
            observations: DashMap::new(),
        }
    }

    pub fn config(&self) -> &TrustConfig {
        &self.config
    }

    /// Register an observation for voting.
    pub fn register_observation(&self, observation: Observation) {
        let seed_trust = observation.trust_score;
        self.observations.insert(
            observation.id.clone(),
            ObservationRecord {
                observation,
                seed_trust,
            },
        );
    }

    /// Snapshot of an observation's current derived state.
    pub fn observation(&self, id: &str) -> Option<Observation> {
        self.observations.get(id).map(|r| r.observation.clone())
    }

    /// Cast a vote.
    ///
    /// Rejections are deterministic and typed: voters below the minimum
    /// level get `InsufficientClearance` (a hard gate, not a penalty);
    /// a second vote from the same account gets `DuplicateVote`.
    pub fn cast_vote(&self, vote: Vote) -> Result<VoteOutcome, TrustError> {
        let level = voter_level(vote.voter_karma);
        if level < self.config.min_voter_level {
            debug!(voter = %vote.voter_id, level, "vote rejected: insufficient clearance");
            return Err(TrustError::InsufficientClearance {
                required: self.config.min_voter_level,
                actual: level,
            });
        }

        // Entry guard held for the whole derivation: one writer per
        // observation at a time.
        let mut record = self.observations.get_mut(&vote.observation_id).ok_or_else(|| {
            TrustError::UnknownObservation {
                id: vote.observation_id.clone(),
            }
        })?;

        let cast_at = vote.cast_at;
        let choice = vote.choice;
        let before = self.ledger.fold(&vote.observation_id, &self.config);
        self.ledger.record(vote.clone())?;
        let tally = self.ledger.fold(&vote.observation_id, &self.config);

        let new_trust = (record.seed_trust + tally.weight_sum * self.config.trust_step).max(0.0);
        record.observation.trust_score = new_trust;

        let consensus_reached = tally.distinct_accurate >= self.config.consensus_accurate_votes;
        let consensus_triggered = choice == VoteChoice::Accurate
            && consensus_reached
            && before.distinct_accurate < self.config.consensus_accurate_votes;

        let should_verify = consensus_reached || new_trust > self.config.auto_verify_trust;
        let newly_verified = should_verify && !record.observation.verified;
        if newly_verified {
            record.observation.verified = true;
            record.observation.verified_at = Some(cast_at);
            info!(
                observation = %record.observation.id,
                distinct_accurate = tally.distinct_accurate,
                trust = new_trust,
                "observation verified"
            );
        }

        let voter_karma_reward = if consensus_triggered {
            self.config.consensus_karma_reward
        } else {
            self.config.vote_karma_reward
        };

        Ok(VoteOutcome {
            observation_id: record.observation.id.clone(),
            new_trust,
            distinct_accurate: tally.distinct_accurate,
            verified: record.observation.verified,
            newly_verified,
            consensus_triggered,
            voter_karma_reward,
        })
    }
}
