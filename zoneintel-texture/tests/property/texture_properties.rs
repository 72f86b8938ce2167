use chrono::Weekday;
use proptest::prelude::*;

use test_fixtures::{baseline, candidate};
use zoneintel_core::config::TextureConfig;
use zoneintel_core::zone::SpectrumTexture;
use zoneintel_core::Candidate;
use zoneintel_texture::{
    calculate_texture_shift, calculate_vitality, classify_texture, ShiftContext, VitalityContext,
};

fn arb_pois() -> impl Strategy<Value = Vec<Candidate>> {
    let tag = prop_oneof![
        Just(("amenity", "cafe")),
        Just(("amenity", "bar")),
        Just(("amenity", "marketplace")),
        Just(("amenity", "place_of_worship")),
        Just(("leisure", "park")),
        Just(("highway", "bus_stop")),
        Just(("tourism", "hotel")),
        Just(("office", "misc")),
    ];
    prop::collection::vec(tag, 0..40).prop_map(|tags| {
        tags.into_iter()
            .enumerate()
            .map(|(i, (k, v))| candidate(&format!("p{i}"), 13.75, 100.50, &[(k, v)]))
            .collect()
    })
}

fn arb_spectrum() -> impl Strategy<Value = SpectrumTexture> {
    prop_oneof![
        Just(SpectrumTexture::Silence),
        Just(SpectrumTexture::Analog),
        Just(SpectrumTexture::Neon),
        Just(SpectrumTexture::Chaos),
    ]
}

fn arb_weekday() -> impl Strategy<Value = Weekday> {
    (0u8..7).prop_map(|d| match d {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    })
}

proptest! {
    // Classification is a pure function of the POI histogram.
    #[test]
    fn classification_is_deterministic(
        pois in arb_pois(),
        poi_density in 0.0f64..200.0,
    ) {
        let cfg = TextureConfig::default();
        let stats = baseline(poi_density, 0.5, 50.0, 50.0);
        let a = classify_texture(&pois, Some(&stats), &cfg);
        let b = classify_texture(&pois, Some(&stats), &cfg);
        prop_assert_eq!(a.primary, b.primary);
        prop_assert_eq!(a.secondary, b.secondary);
    }

    // Secondary is never the primary.
    #[test]
    fn secondary_differs_from_primary(pois in arb_pois()) {
        let cfg = TextureConfig::default();
        let stats = baseline(50.0, 0.5, 50.0, 50.0);
        let t = classify_texture(&pois, Some(&stats), &cfg);
        if let Some(secondary) = t.secondary {
            prop_assert_ne!(secondary, t.primary);
        }
    }

    // Vitality is bounded for any input, however extreme.
    #[test]
    fn vitality_always_in_range(
        texture in arb_spectrum(),
        hour in 0u32..24,
        reports in -1000i64..10_000,
        crowd in -5.0f64..50.0,
    ) {
        let v = calculate_vitality(texture, &VitalityContext {
            hour,
            recent_reports: reports,
            crowd_density: crowd,
        });
        prop_assert!((0.0..=10.0).contains(&v), "vitality out of range: {v}");
    }

    // A shift moves at most two spectrum steps and stays on the spectrum.
    #[test]
    fn shift_bounded_to_two_steps(
        base in arb_spectrum(),
        hour in 0u32..24,
        day in arb_weekday(),
        reports in 0u32..1000,
    ) {
        let cfg = TextureConfig::default();
        let dynamic = calculate_texture_shift(base, &ShiftContext {
            hour,
            day_of_week: day,
            recent_reports: reports,
        }, &cfg);
        prop_assert!(base.distance(dynamic.current_texture) <= 2);
    }
}
