//! Single-waypoint rotation edits. Both return a new waypoint vector.

use super::rotation::average_heading_at;
use crate::error::TrackError;
use crate::heading::{quaternion_of, quaternion_of_degrees};
use crate::types::{Quaternion, Waypoint};

fn replace_rotation(waypoints: &[Waypoint], index: usize, rotation: Quaternion) -> Vec<Waypoint> {
    let mut out = waypoints.to_vec();
    out[index] = out[index].with_rotation(rotation);
    out
}

fn check_index(waypoints: &[Waypoint], index: usize) -> Result<(), TrackError> {
    if waypoints.is_empty() {
        return Err(TrackError::EmptyTrack);
    }
    if index >= waypoints.len() {
        return Err(TrackError::IndexOutOfRange {
            index,
            len: waypoints.len(),
        });
    }
    Ok(())
}

/// Sets waypoint `index` to face `yaw_deg` degrees.
pub fn with_yaw_degrees(
    waypoints: &[Waypoint],
    index: usize,
    yaw_deg: f64,
) -> Result<Vec<Waypoint>, TrackError> {
    check_index(waypoints, index)?;
    let rotation = quaternion_of_degrees(yaw_deg)?;
    Ok(replace_rotation(waypoints, index, rotation))
}

/// Points waypoint `index` along the mean of its two neighbouring segments.
pub fn auto_rotate(waypoints: &[Waypoint], index: usize) -> Result<Vec<Waypoint>, TrackError> {
    check_index(waypoints, index)?;
    let heading = average_heading_at(waypoints, index)?;
    let rotation = quaternion_of(heading)?;
    Ok(replace_rotation(waypoints, index, rotation))
}
