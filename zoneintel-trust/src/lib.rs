//! # zoneintel-trust
//!
//! The only stateful engine component: per-zone confidence records with
//! daily multiplicative decay, and per-observation consensus voting over
//! an event-sourced vote ledger. Every mutation goes through a per-key
//! entry lock, giving at-most-one-writer semantics per zone/observation;
//! reads are eventually consistent snapshots.

pub mod confidence;
pub mod consensus;
pub mod decay;
pub mod ledger;

pub use confidence::initial_confidence;
pub use consensus::{vote_weight, voter_level, ConsensusEngine, VoteOutcome};
pub use decay::{ConfidenceStore, DecayDelta};
pub use ledger::{VoteLedger, VoteTally};
