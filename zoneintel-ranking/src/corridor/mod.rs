//! Corridor routing: chains pre-scored safe corridors into a walkable
//! path with distance and time estimates. Degraded inputs produce
//! warnings on the path, never errors.

mod warnings;

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use zoneintel_core::config::RankingConfig;
use zoneintel_core::geo::Point;
use zoneintel_core::models::{SafeCorridor, SafeReturnPath};
use zoneintel_geo::{haversine_meters, midpoint, path_length_meters};

pub use warnings::{
    warn_avoided_offline, warn_eta_over_limit, warn_low_vitality, warn_no_corridors,
};

/// Caller preferences for a route.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteConstraints {
    /// Drop corridors in zones currently marked offline.
    pub avoid_offline_zones: bool,
    /// Drop corridors below the minimum lighting score.
    pub prefer_lit_routes: bool,
    /// Warn when the estimated walk exceeds this many minutes.
    pub max_minutes: Option<f64>,
}

/// Routes safe walking paths over pre-scored corridors. Stateless.
#[derive(Debug, Clone, Default)]
pub struct CorridorRouter {
    config: RankingConfig,
}

impl CorridorRouter {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    /// Combined corridor score: weighted vitality, lighting, foot traffic.
    pub fn combined_score(&self, corridor: &SafeCorridor) -> f64 {
        let w = &self.config.corridor;
        w.vitality * corridor.vitality_score
            + w.lighting * corridor.lighting_score
            + w.foot_traffic * corridor.foot_traffic_score
    }

    /// Build a safe walking path from `from` toward `to`, threading the
    /// best-scored corridors.
    ///
    /// Without a destination, the path ends at the nearest point of a
    /// corridor vital enough to wait in. Every degraded condition appends
    /// a warning; conditions may co-occur.
    pub fn route(
        &self,
        from: Point,
        to: Option<Point>,
        current_vitality: f64,
        constraints: &RouteConstraints,
        corridors: &[SafeCorridor],
        offline_zone_ids: &HashSet<String>,
    ) -> SafeReturnPath {
        let mut warnings = Vec::new();

        let (surviving, avoided_offline) = self.filter(constraints, corridors, offline_zone_ids);
        if avoided_offline > 0 {
            warnings.push(warn_avoided_offline(avoided_offline));
        }
        if surviving.is_empty() {
            warnings.push(warn_no_corridors());
        }

        // Survivors by combined score, best first; only the top few
        // contribute waypoints.
        let mut ranked: Vec<&SafeCorridor> = surviving;
        ranked.sort_by(|a, b| {
            self.combined_score(b)
                .partial_cmp(&self.combined_score(a))
                .unwrap_or(Ordering::Equal)
        });
        let top = &ranked[..ranked.len().min(self.config.max_waypoint_corridors)];

        let mut waypoints = vec![from];
        for corridor in top {
            if let Some(mid) = midpoint(&corridor.geometry) {
                waypoints.push(mid);
            }
        }
        match to {
            Some(destination) => waypoints.push(destination),
            None => {
                if let Some(refuge) = self.nearest_refuge(from, &ranked) {
                    waypoints.push(refuge);
                }
            }
        }

        let total_distance_m = path_length_meters(&waypoints);
        let estimated_minutes =
            total_distance_m / 1000.0 / self.config.walking_speed_kmh * 60.0;

        if current_vitality < self.config.low_vitality_threshold {
            warnings.push(warn_low_vitality(current_vitality));
        }
        if let Some(limit) = constraints.max_minutes {
            if estimated_minutes > limit {
                warnings.push(warn_eta_over_limit(estimated_minutes, limit));
            }
        }

        let vitality_safe = current_vitality >= self.config.low_vitality_threshold
            || total_distance_m < self.config.short_path_m;

        debug!(
            corridors = top.len(),
            distance_m = total_distance_m,
            minutes = estimated_minutes,
            warnings = warnings.len(),
            "route built"
        );

        SafeReturnPath {
            waypoints,
            total_distance_m,
            estimated_minutes,
            vitality_safe,
            warnings,
        }
    }

    /// Apply the constraint filters; returns survivors and the count of
    /// corridors dropped for being in offline zones.
    fn filter<'a>(
        &self,
        constraints: &RouteConstraints,
        corridors: &'a [SafeCorridor],
        offline_zone_ids: &HashSet<String>,
    ) -> (Vec<&'a SafeCorridor>, usize) {
        let mut avoided_offline = 0usize;
        let surviving = corridors
            .iter()
            .filter(|c| {
                if constraints.avoid_offline_zones && offline_zone_ids.contains(&c.zone_id) {
                    avoided_offline += 1;
                    return false;
                }
                if constraints.prefer_lit_routes
                    && c.lighting_score < self.config.min_lit_route_lighting
                {
                    return false;
                }
                true
            })
            .collect();
        (surviving, avoided_offline)
    }

    /// The geometry point closest to `from` among all surviving corridors
    /// vital enough to serve as a destination, not just the ones threaded
    /// into the waypoint chain.
    fn nearest_refuge(&self, from: Point, surviving: &[&SafeCorridor]) -> Option<Point> {
        surviving
            .iter()
            .filter(|c| c.vitality_score >= self.config.min_destination_vitality)
            .flat_map(|c| c.geometry.iter().copied())
            .min_by(|a, b| {
                haversine_meters(from, *a)
                    .partial_cmp(&haversine_meters(from, *b))
                    .unwrap_or(Ordering::Equal)
            })
    }
}
