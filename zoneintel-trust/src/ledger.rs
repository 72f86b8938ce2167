//! Event-sourced vote ledger.
//!
//! Votes are immutable facts; trust score and auto-verify status are
//! derived by folding over the fact stream, never from mutable running
//! counters.

use std::collections::HashSet;

use dashmap::DashMap;

use zoneintel_core::config::TrustConfig;
use zoneintel_core::errors::TrustError;
use zoneintel_core::models::{Vote, VoteChoice};

use crate::consensus::vote_weight;

/// Derived state for one observation's vote stream.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteTally {
    /// Sum of signed, karma-capped vote weights.
    pub weight_sum: f64,
    /// Distinct voters who voted accurate. The same account never counts
    /// twice, whatever it attempts.
    pub distinct_accurate: usize,
    pub total_votes: usize,
}

/// Append-only vote facts, keyed by observation.
#[derive(Debug, Default)]
pub struct VoteLedger {
    votes: DashMap<String, Vec<Vote>>,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a vote fact. One vote per (observation, voter) pair:
    /// duplicates are rejected deterministically, never merged.
    pub fn record(&self, vote: Vote) -> Result<(), TrustError> {
        let mut entry = self.votes.entry(vote.observation_id.clone()).or_default();
        if entry.iter().any(|v| v.voter_id == vote.voter_id) {
            return Err(TrustError::DuplicateVote {
                observation_id: vote.observation_id,
                voter_id: vote.voter_id,
            });
        }
        entry.push(vote);
        Ok(())
    }

    /// Fold the fact stream for one observation into a tally.
    pub fn fold(&self, observation_id: &str, config: &TrustConfig) -> VoteTally {
        let Some(votes) = self.votes.get(observation_id) else {
            return VoteTally {
                weight_sum: 0.0,
                distinct_accurate: 0,
                total_votes: 0,
            };
        };

        let mut accurate_voters: HashSet<&str> = HashSet::new();
        let mut weight_sum = 0.0;
        for vote in votes.iter() {
            weight_sum += vote_weight(vote.voter_karma, vote.choice, config);
            if vote.choice == VoteChoice::Accurate {
                accurate_voters.insert(vote.voter_id.as_str());
            }
        }

        VoteTally {
            weight_sum,
            distinct_accurate: accurate_voters.len(),
            total_votes: votes.len(),
        }
    }
}
