//! Great-circle distance and bearing.

use zoneintel_core::geo::Point;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
/// Mean Earth radius in kilometers. Kilometer-scale callers swap this
/// constant into the same formula; there is no second implementation.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

fn haversine(a: Point, b: Point, radius: f64) -> f64 {
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();
    let h = (dlat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    2.0 * radius * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Great-circle distance in meters.
pub fn haversine_meters(a: Point, b: Point) -> f64 {
    haversine(a, b, EARTH_RADIUS_M)
}

/// Great-circle distance in kilometers.
pub fn haversine_km(a: Point, b: Point) -> f64 {
    haversine(a, b, EARTH_RADIUS_KM)
}

/// Initial bearing from `a` to `b` in degrees, normalized to [0, 360).
pub fn initial_bearing_deg(a: Point, b: Point) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlon = (b.lon - a.lon).to_radians();
    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    (y.atan2(x).to_degrees() + 360.0) % 360.0
}
