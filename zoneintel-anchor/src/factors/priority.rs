use zoneintel_core::candidate::Candidate;
use zoneintel_core::config::AnchorConfig;

/// Priority factor: 1.0 if any tag value matches the configured priority
/// tags for its category, else 0.0.
pub fn calculate(candidate: &Candidate, cfg: &AnchorConfig) -> f64 {
    if matching_tag(candidate, cfg).is_some() {
        1.0
    } else {
        0.0
    }
}

/// The (category, value) pair that made this candidate a priority match.
pub fn matching_tag<'a>(candidate: &'a Candidate, cfg: &AnchorConfig) -> Option<(&'a str, &'a str)> {
    candidate.tags.iter().find(|(key, value)| {
        cfg.priority_tags
            .get(*key)
            .is_some_and(|values| values.iter().any(|v| v == value))
    })
}

/// Hard exclusion: true if any tag value matches the configured negative
/// tags for its category. Excluded candidates are discarded, never merely
/// penalized.
pub fn is_excluded(candidate: &Candidate, cfg: &AnchorConfig) -> bool {
    candidate.tags.iter().any(|(key, value)| {
        cfg.negative_tags
            .get(key)
            .is_some_and(|values| values.iter().any(|v| v == value))
    })
}
