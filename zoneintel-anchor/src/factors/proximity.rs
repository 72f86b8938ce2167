/// Proximity factor: linear falloff from the centroid out to the largest
/// configured radius. `1 - distance/maxRadius`, in [0, 1] for candidates
/// that survived the radius cut.
pub fn calculate(distance_m: f64, max_radius_m: f64) -> f64 {
    if max_radius_m <= 0.0 {
        return 0.0;
    }
    1.0 - distance_m / max_radius_m
}
