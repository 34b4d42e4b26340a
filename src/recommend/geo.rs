//! Great-circle distance between two points.
//!
//! Straight-line proxy for transit distance. Equipment does not travel
//! along great circles, but no routing data is available.

use crate::model::Coordinates;

/// Mean earth radius, matching the kilometre output of common
/// geospatial libraries.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Haversine distance in kilometres.
///
/// Symmetric bit for bit: the operands are put in a fixed order before
/// evaluation, so `distance_km(a, b) == distance_km(b, a)` holds exactly.
/// Identical points are 0 km apart.
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let (a, b) = if (a.lat, a.lng) <= (b.lat, b.lng) {
        (a, b)
    } else {
        (b, a)
    };

    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();
    let h = (dlat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (dlng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
