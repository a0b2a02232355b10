//! Great-circle distance between stop coordinates.
//!
//! Uses the Haversine formula over the mean Earth radius.

use geo::HaversineDistance;

use crate::models::types::Coordinates;

/// Great-circle distance between two positions in meters
pub fn great_circle_distance(from: Coordinates, to: Coordinates) -> f64 {
    from.to_point().haversine_distance(&to.to_point())
}
