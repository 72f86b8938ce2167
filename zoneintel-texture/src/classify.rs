//! Static texture classification.
//!
//! The cascade is an explicit ordered rule list evaluated top-to-bottom;
//! first match wins. The order is part of the contract, not an
//! implementation detail.

use zoneintel_core::config::TextureConfig;
use zoneintel_core::zone::{BaselineStats, TextureKind, ZoneTexture};
use zoneintel_core::Candidate;

use crate::histogram::{Histogram, PoiCategory};
use crate::profile;
use crate::scores;

type RulePredicate = fn(&Histogram, &BaselineStats, &TextureConfig) -> bool;

/// The ordered cascade. Evaluated top-to-bottom; the first predicate
/// that fires decides the primary texture.
const CASCADE: [(TextureKind, RulePredicate); 9] = [
    (TextureKind::MarketChaos, |h, _, cfg| {
        h.ratio(PoiCategory::Market) > cfg.market_ratio
    }),
    (TextureKind::NightlifeElectric, |h, _, cfg| {
        h.ratio(PoiCategory::Bar) > cfg.bar_ratio
    }),
    (TextureKind::CafeCulture, |h, _, cfg| {
        h.ratio(PoiCategory::Cafe) > cfg.cafe_ratio
    }),
    (TextureKind::TemplePeace, |h, _, cfg| {
        h.ratio(PoiCategory::Temple) > cfg.temple_ratio
    }),
    (TextureKind::ParkRefuge, |h, _, cfg| {
        h.ratio(PoiCategory::Park) > cfg.park_ratio
    }),
    (TextureKind::TransitHub, |h, _, cfg| {
        h.ratio(PoiCategory::Transit) > cfg.transit_ratio
    }),
    (TextureKind::TouristDense, |h, _, cfg| {
        h.ratio(PoiCategory::Tourist) > cfg.tourist_ratio
    }),
    (TextureKind::Residential, |_, baseline, cfg| {
        baseline.poi_density < cfg.residential_poi_density
    }),
    (TextureKind::LocalAuthentic, |_, _, _| true),
];

/// Classify a zone's texture from its POI mix and baseline snapshot.
///
/// Pure function of the inputs: identical input yields identical
/// primary/secondary. `Mixed` appears only when no baseline is available
/// at all.
pub fn classify_texture(
    pois: &[Candidate],
    baseline: Option<&BaselineStats>,
    cfg: &TextureConfig,
) -> ZoneTexture {
    let histogram = Histogram::from_candidates(pois);

    let primary = match baseline {
        Some(stats) => {
            CASCADE
                .iter()
                .find(|(_, applies)| applies(&histogram, stats, cfg))
                .map(|(kind, _)| *kind)
                // The cascade terminates with an always-true rule.
                .unwrap_or(TextureKind::LocalAuthentic)
        }
        None => TextureKind::Mixed,
    };

    let secondary = secondary_texture(&histogram, primary, cfg);
    let stats = baseline.copied().unwrap_or_default();
    let texture_profile = profile::profile(primary);

    ZoneTexture {
        primary,
        secondary,
        tags: texture_profile.tags.iter().map(|t| t.to_string()).collect(),
        walkability: scores::walkability(&stats),
        safety_score: scores::safety(&stats),
        vibe_keywords: texture_profile
            .vibe_keywords
            .iter()
            .map(|k| k.to_string())
            .collect(),
    }
}

/// First of cafe/nightlife/market (excluding the primary) whose ratio
/// exceeds its lower secondary threshold.
fn secondary_texture(
    histogram: &Histogram,
    primary: TextureKind,
    cfg: &TextureConfig,
) -> Option<TextureKind> {
    let candidates = [
        (
            TextureKind::CafeCulture,
            PoiCategory::Cafe,
            cfg.secondary_cafe_ratio,
        ),
        (
            TextureKind::NightlifeElectric,
            PoiCategory::Bar,
            cfg.secondary_nightlife_ratio,
        ),
        (
            TextureKind::MarketChaos,
            PoiCategory::Market,
            cfg.secondary_market_ratio,
        ),
    ];
    candidates
        .iter()
        .find(|(kind, category, threshold)| {
            *kind != primary && histogram.ratio(*category) > *threshold
        })
        .map(|(kind, _, _)| *kind)
}
