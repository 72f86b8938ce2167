use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-submitted field report on a zone.
///
/// `trust_score` is adjusted only by weighted consensus votes. Once
/// `verified` is set it is never unset by the engine (moderation is out
/// of scope).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub id: String,
    pub zone_id: String,
    pub author_id: String,
    pub text: String,
    pub trust_score: f64,
    pub verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
}

impl Observation {
    pub fn new(
        id: impl Into<String>,
        zone_id: impl Into<String>,
        author_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            zone_id: zone_id.into(),
            author_id: author_id.into(),
            text: text.into(),
            trust_score: 0.0,
            verified: false,
            verified_at: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteChoice {
    Accurate,
    Inaccurate,
}

/// An immutable vote fact. One vote per (observation, voter) pair;
/// duplicates are rejected, never overwritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub observation_id: String,
    pub voter_id: String,
    pub voter_karma: u32,
    pub choice: VoteChoice,
    pub cast_at: DateTime<Utc>,
}
