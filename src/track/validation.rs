//! Structural validation of raw track JSON before it is deserialized.

use crate::error::TrackError;
use serde_json::Value;

const VECTOR3_KEYS: [&str; 3] = ["x", "y", "z"];
const QUATERNION_KEYS: [&str; 4] = ["x", "y", "z", "w"];

fn invalid(reason: String) -> TrackError {
    TrackError::InvalidTrack { reason }
}

fn check_numbers(
    waypoint: &Value,
    index: usize,
    field: &str,
    keys: &[&str],
) -> Result<(), TrackError> {
    let obj = match waypoint.get(field) {
        Some(v) if v.is_object() => v,
        _ => {
            return Err(invalid(format!(
                "waypoint at index {index} is missing {field} data"
            )))
        }
    };
    for key in keys {
        if !obj.get(*key).is_some_and(Value::is_number) {
            return Err(invalid(format!(
                "waypoint at index {index} {field}.{key} must be a number"
            )));
        }
    }
    Ok(())
}

/// Reports the first structural problem in a track document.
pub fn validate_track_value(data: &Value) -> Result<(), TrackError> {
    let root = data
        .as_object()
        .ok_or_else(|| invalid("data must be a non-null object".to_string()))?;

    if let Some(name) = root.get("routeName") {
        if !name.is_null() && !name.is_string() {
            return Err(invalid("routeName must be a string".to_string()));
        }
    }

    let waypoints = root
        .get("waypoints")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("waypoints must be an array".to_string()))?;

    for (i, wp) in waypoints.iter().enumerate() {
        if !wp.is_object() {
            return Err(invalid(format!(
                "waypoint at index {i} must be a non-null object"
            )));
        }
        check_numbers(wp, i, "rotation", &QUATERNION_KEYS)?;
        check_numbers(wp, i, "translation", &VECTOR3_KEYS)?;
        check_numbers(wp, i, "scale3D", &VECTOR3_KEYS)?;
    }
    Ok(())
}
