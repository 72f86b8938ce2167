use crate::candidate::Candidate;

/// Extension point for road/transit-graph density signals in anchor
/// scoring. No concrete graph source ships with the engine; the default
/// provider contributes nothing.
pub trait ConnectivityProvider: Send + Sync {
    /// Connectivity signal for a candidate, 0.0–1.0.
    fn connectivity_score(&self, candidate: &Candidate) -> f64;
}

/// Default provider: no connectivity signal available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoConnectivity;

impl ConnectivityProvider for NoConnectivity {
    fn connectivity_score(&self, _candidate: &Candidate) -> f64 {
        0.0
    }
}
