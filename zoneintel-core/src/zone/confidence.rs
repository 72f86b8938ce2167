use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence level, bucketed from the 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
    Degraded,
    Unknown,
}

impl ConfidenceLevel {
    /// Ordered (threshold, level) table, evaluated top-to-bottom.
    /// First row whose threshold the score meets wins.
    pub const BUCKETS: [(f64, ConfidenceLevel); 4] = [
        (80.0, ConfidenceLevel::High),
        (60.0, ConfidenceLevel::Medium),
        (40.0, ConfidenceLevel::Low),
        (20.0, ConfidenceLevel::Degraded),
    ];

    /// Deterministic bucket of a score. Monotonic in `score`.
    pub fn bucket(score: f64) -> Self {
        for (threshold, level) in Self::BUCKETS {
            if score >= threshold {
                return level;
            }
        }
        ConfidenceLevel::Unknown
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConfidenceLevel::High => "HIGH",
            ConfidenceLevel::Medium => "MEDIUM",
            ConfidenceLevel::Low => "LOW",
            ConfidenceLevel::Degraded => "DEGRADED",
            ConfidenceLevel::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// Decaying, crowd-verified confidence in a zone's data.
///
/// Invariant: `level` is always `ConfidenceLevel::bucket(score)`. All
/// mutation goes through [`Confidence::set_score`] to keep it that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confidence {
    score: f64,
    level: ConfidenceLevel,
    pub last_verified_at: Option<DateTime<Utc>>,
    pub verification_count: u32,
    /// Daily multiplicative decay (default 0.98).
    pub decay_factor: f64,
    pub anomaly_detected: bool,
    pub anomaly_reason: Option<String>,
}

impl Confidence {
    pub const MAX_SCORE: f64 = 100.0;
    pub const DEFAULT_DECAY_FACTOR: f64 = 0.98;

    /// Create with a clamped score; level is derived, never supplied.
    pub fn new(score: f64) -> Self {
        let score = score.clamp(0.0, Self::MAX_SCORE);
        Self {
            score,
            level: ConfidenceLevel::bucket(score),
            last_verified_at: None,
            verification_count: 0,
            decay_factor: Self::DEFAULT_DECAY_FACTOR,
            anomaly_detected: false,
            anomaly_reason: None,
        }
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn level(&self) -> ConfidenceLevel {
        self.level
    }

    /// Set a new score, re-deriving the level bucket.
    pub fn set_score(&mut self, score: f64) {
        self.score = score.clamp(0.0, Self::MAX_SCORE);
        self.level = ConfidenceLevel::bucket(self.score);
    }

    /// Record a successful verification event.
    pub fn record_verification(&mut self, at: DateTime<Utc>, boost: f64) {
        self.set_score(self.score + boost);
        self.last_verified_at = Some(at);
        self.verification_count += 1;
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} ({})", self.score, self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_thresholds() {
        assert_eq!(ConfidenceLevel::bucket(100.0), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::bucket(80.0), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::bucket(79.9), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::bucket(60.0), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::bucket(40.0), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::bucket(20.0), ConfidenceLevel::Degraded);
        assert_eq!(ConfidenceLevel::bucket(19.9), ConfidenceLevel::Unknown);
        assert_eq!(ConfidenceLevel::bucket(0.0), ConfidenceLevel::Unknown);
    }

    #[test]
    fn level_tracks_score_through_mutation() {
        let mut c = Confidence::new(85.0);
        assert_eq!(c.level(), ConfidenceLevel::High);
        c.set_score(45.0);
        assert_eq!(c.level(), ConfidenceLevel::Low);
        c.set_score(-10.0);
        assert_eq!(c.score(), 0.0);
        assert_eq!(c.level(), ConfidenceLevel::Unknown);
    }
}
