//! Facing direction inferred from a waypoint's two neighbours.

use super::neighbors::neighbor_indices;
use crate::angle::{angular_distance, antipode, bearing};
use crate::error::TrackError;
use crate::types::Waypoint;

/// Mean of the incoming and outgoing segment bearings at `curr`.
///
/// The scalar mean `(in + out) / 2` lands on the wrong side of the circle
/// when the two bearings straddle the ±π seam. Its antipode is used instead
/// whenever it is strictly closer to the outgoing bearing. The result is not
/// wrapped into `(-π, π]`.
///
/// With `sign(0) = 0` a mean of exactly zero is its own antipode, so it is
/// never flipped.
pub fn average_heading(prev: &Waypoint, curr: &Waypoint, next: &Waypoint) -> f64 {
    let angle_in = bearing(&prev.translation, &curr.translation);
    let angle_out = bearing(&curr.translation, &next.translation);
    let avg = 0.5 * (angle_in + angle_out);
    let avg_prime = antipode(avg);

    if angular_distance(avg_prime, angle_out) < angular_distance(avg, angle_out) {
        avg_prime
    } else {
        avg
    }
}

/// [`average_heading`] for waypoint `i` of a closed loop.
pub fn average_heading_at(waypoints: &[Waypoint], i: usize) -> Result<f64, TrackError> {
    let (prev, next) = neighbor_indices(i, waypoints.len()).ok_or(TrackError::IndexOutOfRange {
        index: i,
        len: waypoints.len(),
    })?;
    Ok(average_heading(&waypoints[prev], &waypoints[i], &waypoints[next]))
}
