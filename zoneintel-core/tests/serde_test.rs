//! Wire-shape tests: the presentation layer consumes these types as
//! plain JSON, so the rename casing and round-trip fidelity are part of
//! the contract.

use serde_json::json;

use zoneintel_core::models::{Observation, SafeReturnPath, Vote, VoteChoice};
use zoneintel_core::zone::{
    Confidence, ConfidenceLevel, DynamicTexture, SpectrumTexture, TextureKind, ZoneTexture,
};
use zoneintel_core::{Candidate, Point, TagMap};

// ── Enum casing ──────────────────────────────────────────────────────────

#[test]
fn texture_kinds_serialize_screaming_snake() {
    assert_eq!(
        serde_json::to_value(TextureKind::MarketChaos).unwrap(),
        json!("MARKET_CHAOS")
    );
    assert_eq!(
        serde_json::to_value(SpectrumTexture::Neon).unwrap(),
        json!("NEON")
    );
    assert_eq!(
        serde_json::to_value(ConfidenceLevel::Degraded).unwrap(),
        json!("DEGRADED")
    );
}

#[test]
fn vote_choice_serializes_snake_case() {
    assert_eq!(
        serde_json::to_value(VoteChoice::Inaccurate).unwrap(),
        json!("inaccurate")
    );
    let parsed: VoteChoice = serde_json::from_value(json!("accurate")).unwrap();
    assert_eq!(parsed, VoteChoice::Accurate);
}

// ── Round trips ──────────────────────────────────────────────────────────

#[test]
fn zone_texture_round_trips() {
    let texture = ZoneTexture {
        primary: TextureKind::CafeCulture,
        secondary: Some(TextureKind::MarketChaos),
        tags: vec!["coffee".to_string(), "brunch".to_string()],
        walkability: 72.5,
        safety_score: 64.0,
        vibe_keywords: vec!["laptop-friendly".to_string()],
    };
    let round: ZoneTexture =
        serde_json::from_str(&serde_json::to_string(&texture).unwrap()).unwrap();
    assert_eq!(round, texture);
}

#[test]
fn confidence_round_trip_preserves_derived_level() {
    let mut confidence = Confidence::new(85.0);
    confidence.set_score(45.0);
    let round: Confidence =
        serde_json::from_str(&serde_json::to_string(&confidence).unwrap()).unwrap();
    assert_eq!(round.score(), 45.0);
    assert_eq!(round.level(), ConfidenceLevel::Low);
}

#[test]
fn candidate_tags_round_trip_as_a_plain_object() {
    let tags: TagMap = [("amenity", "cafe"), ("name", "Blue Door")]
        .into_iter()
        .collect();
    let candidate = Candidate::new("poi-1", Point::new(13.75, 100.49), tags);

    let value = serde_json::to_value(&candidate).unwrap();
    assert_eq!(value["tags"]["amenity"], json!("cafe"));

    let round: Candidate = serde_json::from_value(value).unwrap();
    assert_eq!(round, candidate);
    assert_eq!(round.name(), "Blue Door");
}

#[test]
fn observation_and_vote_round_trip() {
    let observation = Observation::new("obs-1", "zone-1", "author-1", "quiet after 22:00");
    let round: Observation =
        serde_json::from_str(&serde_json::to_string(&observation).unwrap()).unwrap();
    assert_eq!(round, observation);

    let vote = Vote {
        observation_id: "obs-1".to_string(),
        voter_id: "voter-1".to_string(),
        voter_karma: 450,
        choice: VoteChoice::Accurate,
        cast_at: chrono::Utc::now(),
    };
    let round: Vote = serde_json::from_str(&serde_json::to_string(&vote).unwrap()).unwrap();
    assert_eq!(round, vote);
}

#[test]
fn safe_return_path_round_trips_with_warnings() {
    let path = SafeReturnPath {
        waypoints: vec![Point::new(13.75, 100.49), Point::new(13.76, 100.50)],
        total_distance_m: 1520.0,
        estimated_minutes: 20.3,
        vitality_safe: false,
        warnings: vec!["no safe corridors available; routing direct".to_string()],
    };
    let round: SafeReturnPath =
        serde_json::from_str(&serde_json::to_string(&path).unwrap()).unwrap();
    assert_eq!(round, path);
}

#[test]
fn dynamic_texture_exposes_each_modifier() {
    let texture = DynamicTexture {
        current_texture: SpectrumTexture::Chaos,
        time_modifier: 0.3,
        day_modifier: 0.5,
        incident_modifier: 1.0,
        shift_magnitude: 1.8,
    };
    let value = serde_json::to_value(texture).unwrap();
    assert_eq!(value["current_texture"], json!("CHAOS"));
    assert_eq!(value["incident_modifier"], json!(1.0));
}
