use std::collections::HashSet;

use proptest::prelude::*;

use test_fixtures::{corridor, zone};
use zoneintel_core::config::RankingConfig;
use zoneintel_core::geo::Point;
use zoneintel_core::models::SafeCorridor;
use zoneintel_core::zone::Zone;
use zoneintel_ranking::{CorridorRouter, RouteConstraints, SearchFilters, SearchQuery, SearchRanker};

fn arb_zones() -> impl Strategy<Value = Vec<Zone>> {
    prop::collection::vec(
        (
            13.0f64..14.5,
            100.0f64..101.5,
            0.0f64..100.0,
            0.0f64..10.0,
            0.0f64..1.0,
        ),
        1..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (lat, lon, anchor_score, hassle, local))| {
                let mut z = zone(&format!("z{i:02}"), &format!("Zone {i}"), lat, lon);
                z.selected_anchor.score = anchor_score;
                z.hazard.hassle_penalty = hassle;
                z.intel_aggregate.local_ratio = local;
                z
            })
            .collect()
    })
}

fn arb_corridors() -> impl Strategy<Value = Vec<SafeCorridor>> {
    prop::collection::vec(
        (
            13.0f64..14.0,
            100.0f64..101.0,
            0.0f64..1.0,
            0.0f64..1.0,
            0.0f64..1.0,
        ),
        0..10,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (lat, lon, v, l, f))| {
                corridor(
                    &format!("c{i:02}"),
                    &format!("zone-{}", i % 3),
                    &[(lat, lon), (lat + 0.002, lon + 0.002)],
                    v,
                    l,
                    f,
                )
            })
            .collect()
    })
}

proptest! {
    // Ranking is always descending by score.
    #[test]
    fn ranking_is_descending(zones in arb_zones()) {
        let ranked = SearchRanker::default().rank(&SearchQuery::new("zone"), &zones);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    // The radius filter is a hard cut: every survivor is within range.
    #[test]
    fn radius_filter_is_a_hard_cut(zones in arb_zones(), radius in 1.0f64..100.0) {
        let query = SearchQuery::new("zone")
            .with_location(Point::new(13.75, 100.50))
            .with_filters(SearchFilters { radius_km: Some(radius), ..SearchFilters::default() });
        let ranked = SearchRanker::default().rank(&query, &zones);
        for s in &ranked {
            prop_assert!(s.distance_km.is_some_and(|km| km <= radius));
        }
    }

    // Every routed path starts at the caller's position, threads at most
    // three corridor midpoints, and its ETA follows from its distance.
    #[test]
    fn route_shape_and_eta_are_consistent(
        corridors in arb_corridors(),
        vitality in 0.0f64..100.0,
    ) {
        let from = Point::new(13.75, 100.50);
        let to = Point::new(13.76, 100.51);
        let path = CorridorRouter::default().route(
            from,
            Some(to),
            vitality,
            &RouteConstraints::default(),
            &corridors,
            &HashSet::new(),
        );

        prop_assert_eq!(path.waypoints[0], from);
        prop_assert_eq!(*path.waypoints.last().unwrap(), to);
        // start + ≤3 midpoints + destination
        prop_assert!(path.waypoints.len() <= 5);
        let expected_minutes = path.total_distance_m / 1000.0 / 4.5 * 60.0;
        prop_assert!((path.estimated_minutes - expected_minutes).abs() < 1e-9);
    }

    // The selected corridors are the top ones by combined score: no
    // unselected survivor outscores a selected one.
    #[test]
    fn selected_corridors_dominate(corridors in arb_corridors()) {
        let router = CorridorRouter::default();
        let from = Point::new(13.75, 100.50);
        let path = router.route(
            from,
            Some(Point::new(13.76, 100.51)),
            50.0,
            &RouteConstraints::default(),
            &corridors,
            &HashSet::new(),
        );

        let selected: Vec<Point> = path.waypoints[1..path.waypoints.len() - 1].to_vec();
        let mut scores: Vec<f64> = corridors.iter().map(|c| router.combined_score(c)).collect();
        scores.sort_by(|a, b| b.partial_cmp(a).unwrap());
        let cutoff = scores.get(selected.len().saturating_sub(1)).copied();

        for (c, score) in corridors.iter().zip(corridors.iter().map(|c| router.combined_score(c))) {
            let mid = c.geometry[c.geometry.len() / 2];
            if !selected.contains(&mid) {
                if let Some(cutoff) = cutoff {
                    prop_assert!(score <= cutoff + 1e-9);
                }
            }
        }
    }

    // Low vitality always yields a warning unless the threshold is met.
    #[test]
    fn low_vitality_always_warns(vitality in 0.0f64..100.0) {
        let path = CorridorRouter::default().route(
            Point::new(13.75, 100.50),
            Some(Point::new(13.76, 100.51)),
            vitality,
            &RouteConstraints::default(),
            &[],
            &HashSet::new(),
        );
        let warned = path.warnings.iter().any(|w| w.contains("vitality is low"));
        prop_assert_eq!(warned, vitality < 30.0);
    }
}
