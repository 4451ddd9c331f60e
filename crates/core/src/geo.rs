//! Great-circle distances for derived track lengths.

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two `(lat, lon)` points given in
/// decimal degrees.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Total length of a track: the sum of great-circle distances between
/// consecutive fixes. Zero for an empty or single-fix track.
pub fn track_length(fixes: &[(f64, f64)]) -> f64 {
    fixes
        .windows(2)
        .map(|pair| haversine_distance(pair[0].0, pair[0].1, pair[1].0, pair[1].1))
        .sum()
}
