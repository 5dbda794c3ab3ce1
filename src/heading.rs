//! Yaw <-> quaternion conversion for rotations about the vertical axis.

use crate::angle::{to_degrees, to_radians};
use crate::error::TrackError;
use crate::types::Quaternion;

/// Largest |x| or |y| still accepted as a yaw-only rotation.
pub const YAW_ONLY_TOL: f64 = 1e-6;

/// Signed yaw in radians, `2·atan2(z, w)`. Pitch/roll components are ignored.
#[inline]
pub fn yaw_of(rotation: &Quaternion) -> f64 {
    2.0 * rotation.z.atan2(rotation.w)
}

/// Like [`yaw_of`], but rejects quaternions that rotate about X or Y.
pub fn checked_yaw_of(rotation: &Quaternion) -> Result<f64, TrackError> {
    if rotation.x.abs() > YAW_ONLY_TOL || rotation.y.abs() > YAW_ONLY_TOL {
        return Err(TrackError::NotYawOnly {
            x: rotation.x,
            y: rotation.y,
        });
    }
    Ok(yaw_of(rotation))
}

#[inline]
pub fn yaw_degrees_of(rotation: &Quaternion) -> f64 {
    to_degrees(yaw_of(rotation))
}

/// Builds `{0, 0, sin(yaw/2), cos(yaw/2)}`.
pub fn quaternion_of(yaw: f64) -> Result<Quaternion, TrackError> {
    if !yaw.is_finite() {
        return Err(TrackError::InvalidAngle { value: yaw });
    }
    let half = 0.5 * yaw;
    Ok(Quaternion {
        x: 0.0,
        y: 0.0,
        z: half.sin(),
        w: half.cos(),
    })
}

/// Degree-valued variant of [`quaternion_of`], as typed into the editor.
pub fn quaternion_of_degrees(yaw_deg: f64) -> Result<Quaternion, TrackError> {
    if !yaw_deg.is_finite() {
        return Err(TrackError::InvalidAngle { value: yaw_deg });
    }
    quaternion_of(to_radians(yaw_deg))
}
