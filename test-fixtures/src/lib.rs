//! Shared test builders for the zoneintel workspace.
//!
//! Every crate's integration and property tests build zones, candidates,
//! and corridors through these helpers so fixtures stay consistent.

use chrono::Utc;

use zoneintel_core::candidate::{Candidate, TagMap};
use zoneintel_core::geo::{Point, Polygon};
use zoneintel_core::models::{Observation, SafeCorridor, Vote, VoteChoice};
use zoneintel_core::zone::{Anchor, BaselineStats, Confidence, TextureKind, Zone, ZoneTexture};

/// A small square polygon centered on (lat, lon), roughly city-block sized.
pub fn square_polygon(lat: f64, lon: f64) -> Polygon {
    let d = 0.005;
    Polygon::new(vec![
        Point::new(lat - d, lon - d),
        Point::new(lat - d, lon + d),
        Point::new(lat + d, lon + d),
        Point::new(lat + d, lon - d),
    ])
}

/// Build a candidate with the given tag pairs.
pub fn candidate(id: &str, lat: f64, lon: f64, tags: &[(&str, &str)]) -> Candidate {
    let tags: TagMap = tags.iter().copied().collect();
    Candidate::new(id, Point::new(lat, lon), tags)
}

pub fn baseline(poi_density: f64, lighting: f64, pedestrian: f64, transit: f64) -> BaselineStats {
    BaselineStats {
        poi_density,
        lighting_density: lighting,
        pedestrian_score: pedestrian,
        transit_access: transit,
        has_pharmacy_or_convenience: false,
    }
}

/// A minimal but complete zone for ranking tests.
pub fn zone(id: &str, name: &str, lat: f64, lon: f64) -> Zone {
    let polygon = square_polygon(lat, lon);
    let centroid = Point::new(lat, lon);
    Zone {
        id: id.to_string(),
        city: "bangkok".to_string(),
        name: name.to_string(),
        polygon,
        centroid,
        selected_anchor: Anchor {
            candidate_id: Some(format!("{id}-anchor")),
            point: centroid,
            name: format!("{name} anchor"),
            tags: TagMap::new(),
            score: 50.0,
            selection_reason: "Best weighted score, 10m from centroid".to_string(),
        },
        texture: ZoneTexture {
            primary: TextureKind::Mixed,
            secondary: None,
            tags: vec![],
            walkability: 50.0,
            safety_score: 50.0,
            vibe_keywords: vec![],
        },
        confidence: Confidence::new(50.0),
        intel_aggregate: Default::default(),
        pricing: Default::default(),
        hazard: Default::default(),
        baseline: baseline(30.0, 0.5, 50.0, 50.0),
        offline: false,
    }
}

pub fn corridor(
    id: &str,
    zone_id: &str,
    points: &[(f64, f64)],
    vitality: f64,
    lighting: f64,
    foot_traffic: f64,
) -> SafeCorridor {
    SafeCorridor {
        id: id.to_string(),
        zone_id: zone_id.to_string(),
        geometry: points
            .iter()
            .map(|&(lat, lon)| Point::new(lat, lon))
            .collect(),
        vitality_score: vitality,
        lighting_score: lighting,
        foot_traffic_score: foot_traffic,
    }
}

pub fn observation(id: &str, zone_id: &str) -> Observation {
    Observation::new(id, zone_id, uuid::Uuid::new_v4().to_string(), "field report")
}

pub fn vote(observation_id: &str, voter_id: &str, karma: u32, choice: VoteChoice) -> Vote {
    Vote {
        observation_id: observation_id.to_string(),
        voter_id: voter_id.to_string(),
        voter_karma: karma,
        choice,
        cast_at: Utc::now(),
    }
}
