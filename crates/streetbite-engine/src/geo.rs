//! Great-circle distance on a spherical Earth.

use streetbite_core::Coordinate;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometers.
///
/// Symmetric in its arguments and exactly `0.0` when `a == b`. Inputs are
/// assumed to be within valid WGS84 ranges; out-of-range values do not
/// panic but the result is not meaningful.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    if a == b {
        return 0.0;
    }

    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h past 1.0 for near-antipodal points, which would
    // make the (1 - h) sqrt NaN; clamp before taking roots.
    let h = h.min(1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
