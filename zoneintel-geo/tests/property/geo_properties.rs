use proptest::prelude::*;
use zoneintel_core::geo::{Point, Polygon};
use zoneintel_geo::{bounding_box, centroid, haversine_km, haversine_meters};

fn arb_point() -> impl Strategy<Value = Point> {
    (-85.0f64..85.0, -180.0f64..180.0).prop_map(|(lat, lon)| Point::new(lat, lon))
}

proptest! {
    // Centroid of any non-empty polygon lies within its bounding box.
    #[test]
    fn centroid_within_bounding_box(vertices in prop::collection::vec(arb_point(), 1..32)) {
        let poly = Polygon::new(vertices);
        let c = centroid(&poly);
        let bbox = bounding_box(&poly).unwrap();
        prop_assert!(bbox.contains(c), "centroid {c} outside bbox {bbox:?}");
    }

    // Haversine is symmetric and non-negative.
    #[test]
    fn haversine_symmetric(a in arb_point(), b in arb_point()) {
        let ab = haversine_meters(a, b);
        let ba = haversine_meters(b, a);
        prop_assert!(ab >= 0.0);
        prop_assert!((ab - ba).abs() < 1e-6);
    }

    // Meters and kilometers come from the same formula: ratio is exactly
    // the radius ratio.
    #[test]
    fn meters_match_km_scaled(a in arb_point(), b in arb_point()) {
        let m = haversine_meters(a, b);
        let km = haversine_km(a, b);
        prop_assert!((m - km * 1000.0).abs() <= 1e-6 * m.max(1.0));
    }
}
