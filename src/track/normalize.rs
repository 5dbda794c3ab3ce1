//! Batch correction of yaw values that point against the direction of travel.
//!
//! Some stored yaws are off by exactly π. For every waypoint the stored yaw
//! and its antipode are compared against the neighbour-averaged heading and
//! the bearing to the successor; the antipode wins if it is strictly closer
//! to the averaged heading, or if it is strictly closer to the successor
//! bearing than the stored yaw is to the averaged heading.

use super::neighbors::neighbor_indices;
use super::rotation::average_heading;
use crate::angle::{angular_distance, antipode, bearing};
use crate::error::TrackError;
use crate::heading::{checked_yaw_of, quaternion_of, yaw_of};
use crate::types::Waypoint;
use log::debug;
use serde::Serialize;

/// Per-waypoint outcome of the orientation pass.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WaypointCorrection {
    pub index: usize,
    pub yaw_before: f64,
    pub yaw_after: f64,
    pub average_heading: f64,
    pub next_bearing: f64,
    pub flipped: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NormalizationReport {
    pub corrections: Vec<WaypointCorrection>,
}

impl NormalizationReport {
    pub fn flipped_indices(&self) -> Vec<usize> {
        self.corrections
            .iter()
            .filter(|c| c.flipped)
            .map(|c| c.index)
            .collect()
    }

    pub fn flipped_count(&self) -> usize {
        self.corrections.iter().filter(|c| c.flipped).count()
    }
}

/// Returns a corrected copy of `waypoints`. Translation and scale are kept;
/// every rotation is rebuilt from its (possibly flipped) yaw.
///
/// Fails with [`TrackError::InvalidAngle`] if a stored rotation yields a
/// non-finite yaw.
pub fn normalize_all(waypoints: &[Waypoint]) -> Result<Vec<Waypoint>, TrackError> {
    normalize_all_with_report(waypoints).map(|(out, _)| out)
}

pub fn normalize_all_with_report(
    waypoints: &[Waypoint],
) -> Result<(Vec<Waypoint>, NormalizationReport), TrackError> {
    let n = waypoints.len();
    let mut out = Vec::with_capacity(n);
    let mut report = NormalizationReport {
        corrections: Vec::with_capacity(n),
    };

    for (i, wp) in waypoints.iter().enumerate() {
        let (prev, next) = neighbor_indices(i, n).ok_or(TrackError::IndexOutOfRange {
            index: i,
            len: n,
        })?;
        let correction = correct_yaw(i, &waypoints[prev], wp, &waypoints[next]);
        if correction.flipped {
            debug!(
                "normalize_all: flipping waypoint {i} yaw {:.4} -> {:.4} (avg={:.4}, next={:.4})",
                correction.yaw_before,
                correction.yaw_after,
                correction.average_heading,
                correction.next_bearing
            );
        }
        out.push(wp.with_rotation(quaternion_of(correction.yaw_after)?));
        report.corrections.push(correction);
    }

    Ok((out, report))
}

/// Rejects tracks whose rotations tilt about X or Y, naming the first
/// offending waypoint. The correction pass itself only looks at yaw.
pub fn check_yaw_only(waypoints: &[Waypoint]) -> Result<(), TrackError> {
    for (i, wp) in waypoints.iter().enumerate() {
        checked_yaw_of(&wp.rotation).map_err(|err| TrackError::InvalidTrack {
            reason: format!("waypoint at index {i}: {err}"),
        })?;
    }
    Ok(())
}

fn correct_yaw(
    index: usize,
    prev: &Waypoint,
    curr: &Waypoint,
    next: &Waypoint,
) -> WaypointCorrection {
    let yaw = yaw_of(&curr.rotation);
    let next_bearing = bearing(&curr.translation, &next.translation);
    let avg = average_heading(prev, curr, next);
    let yaw_prime = antipode(yaw);

    let prime_to_avg = angular_distance(yaw_prime, avg);
    let curr_to_avg = angular_distance(yaw, avg);
    let prime_to_next = angular_distance(yaw_prime, next_bearing);

    // Either test alone is enough to flip; near sharp turns this can disagree
    // with the averaged heading. A yaw of exactly zero is its own antipode.
    let flipped =
        (prime_to_avg < curr_to_avg || prime_to_next < curr_to_avg) && yaw_prime != yaw;
    WaypointCorrection {
        index,
        yaw_before: yaw,
        yaw_after: if flipped { yaw_prime } else { yaw },
        average_heading: avg,
        next_bearing,
        flipped,
    }
}
