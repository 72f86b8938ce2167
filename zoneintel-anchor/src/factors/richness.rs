use zoneintel_core::candidate::Candidate;

/// Tag richness factor: `min(len(tags), capacity) / capacity`, saturating
/// once a candidate carries `capacity` tags.
pub fn calculate(candidate: &Candidate, capacity: usize) -> f64 {
    if capacity == 0 {
        return 0.0;
    }
    candidate.tags.len().min(capacity) as f64 / capacity as f64
}
