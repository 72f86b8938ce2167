use proptest::prelude::*;

use zoneintel_core::zone::{Confidence, ConfidenceLevel};
use zoneintel_core::TagMap;

fn level_rank(level: ConfidenceLevel) -> u8 {
    match level {
        ConfidenceLevel::Unknown => 0,
        ConfidenceLevel::Degraded => 1,
        ConfidenceLevel::Low => 2,
        ConfidenceLevel::Medium => 3,
        ConfidenceLevel::High => 4,
    }
}

proptest! {
    // Bucketing is monotonic: a higher score never lands in a lower level.
    #[test]
    fn bucket_is_monotonic(a in 0.0f64..100.0, b in 0.0f64..100.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            level_rank(ConfidenceLevel::bucket(low)) <= level_rank(ConfidenceLevel::bucket(high))
        );
    }

    // The level invariant holds through any sequence of score mutations,
    // including out-of-range inputs that get clamped.
    #[test]
    fn level_tracks_score_through_any_mutation(
        initial in -50.0f64..150.0,
        updates in prop::collection::vec(-50.0f64..150.0, 0..20),
    ) {
        let mut confidence = Confidence::new(initial);
        prop_assert_eq!(confidence.level(), ConfidenceLevel::bucket(confidence.score()));
        for score in updates {
            confidence.set_score(score);
            prop_assert!((0.0..=100.0).contains(&confidence.score()));
            prop_assert_eq!(confidence.level(), ConfidenceLevel::bucket(confidence.score()));
        }
    }

    // Tag lookup is insertion-order independent.
    #[test]
    fn tag_map_ignores_insertion_order(
        tags in prop::collection::btree_map("[a-z]{1,8}", "[a-z]{1,8}", 0..10),
    ) {
        let mut pairs: Vec<(String, String)> = tags.into_iter().collect();
        let forward: TagMap = pairs.iter().cloned().collect();
        pairs.reverse();
        let backward: TagMap = pairs.into_iter().collect();
        prop_assert_eq!(forward, backward);
    }
}
