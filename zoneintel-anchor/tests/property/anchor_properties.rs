use proptest::prelude::*;

use test_fixtures::square_polygon;
use zoneintel_anchor::AnchorSelector;
use zoneintel_core::candidate::{Candidate, TagMap};
use zoneintel_core::config::AnchorConfig;
use zoneintel_core::geo::Point;

const LAT: f64 = 13.75;
const LON: f64 = 100.50;

fn arb_candidates() -> impl Strategy<Value = Vec<Candidate>> {
    let tag = prop_oneof![
        Just(("tourism", "monument")),
        Just(("tourism", "attraction")),
        Just(("amenity", "cafe")),
        Just(("amenity", "toilets")),
        Just(("shop", "convenience")),
        Just(("landuse", "industrial")),
    ];
    let one = (
        -0.004f64..0.004,
        -0.004f64..0.004,
        prop::collection::vec(tag, 0..4),
    );
    // Ids assigned by index so they are unique within a generated set.
    prop::collection::vec(one, 0..16).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (dlat, dlon, tags))| {
                let tags: TagMap = tags.into_iter().collect();
                Candidate::new(
                    format!("c{i:02}"),
                    Point::new(LAT + dlat, LON + dlon),
                    tags,
                )
            })
            .collect()
    })
}

fn has_negative_tag(c: &Candidate) -> bool {
    c.tags.has("amenity", "toilets") || c.tags.has("landuse", "industrial")
}

proptest! {
    // Identical input always yields the identical anchor.
    #[test]
    fn selection_is_deterministic(candidates in arb_candidates()) {
        let selector = AnchorSelector::new(AnchorConfig::default());
        let polygon = square_polygon(LAT, LON);

        let first = selector.select(&polygon, &candidates);
        let second = selector.select(&polygon, &candidates);
        prop_assert_eq!(first, second);
    }

    // Input order never changes the winner.
    #[test]
    fn selection_is_order_insensitive(candidates in arb_candidates()) {
        let selector = AnchorSelector::new(AnchorConfig::default());
        let polygon = square_polygon(LAT, LON);

        let forward = selector.select(&polygon, &candidates);
        let mut reversed = candidates.clone();
        reversed.reverse();
        let backward = selector.select(&polygon, &reversed);
        prop_assert_eq!(forward.candidate_id, backward.candidate_id);
    }

    // A candidate carrying any negative tag is never selected, whatever
    // its other factors score.
    #[test]
    fn negative_tags_always_excluded(candidates in arb_candidates()) {
        let selector = AnchorSelector::new(AnchorConfig::default());
        let anchor = selector.select(&square_polygon(LAT, LON), &candidates);

        if let Some(id) = &anchor.candidate_id {
            let winner = candidates.iter().find(|c| &c.id == id);
            if let Some(winner) = winner {
                prop_assert!(!has_negative_tag(winner));
            }
        }
    }

    // The selector never panics and always produces an anchor.
    #[test]
    fn always_produces_an_anchor(candidates in arb_candidates()) {
        let selector = AnchorSelector::new(AnchorConfig::default());
        let anchor = selector.select(&square_polygon(LAT, LON), &candidates);
        prop_assert!(anchor.candidate_id.is_some() || anchor.is_synthetic());
    }
}
