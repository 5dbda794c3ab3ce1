//! Failure modes of the alignment and heading routines.

/// Errors reported by the core computations and the track editing helpers.
#[derive(Clone, Debug, PartialEq)]
pub enum TrackError {
    /// The point correspondences do not determine a homography
    /// (collinear or coincident points, or a pivot below threshold).
    SingularMatrix { column: usize, pivot: f64 },
    /// A yaw value was NaN or infinite.
    InvalidAngle { value: f64 },
    /// The quaternion carries pitch/roll components.
    NotYawOnly { x: f64, y: f64 },
    IndexOutOfRange { index: usize, len: usize },
    EmptyTrack,
    /// Track JSON failed structural validation.
    InvalidTrack { reason: String },
}

impl std::fmt::Display for TrackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackError::SingularMatrix { column, pivot } => write!(
                f,
                "matrix is singular or nearly singular (column {column}, pivot {pivot:.3e})"
            ),
            TrackError::InvalidAngle { value } => write!(f, "invalid angle: {value}"),
            TrackError::NotYawOnly { x, y } => write!(
                f,
                "rotation is not yaw-only (x={x:.6}, y={y:.6})"
            ),
            TrackError::IndexOutOfRange { index, len } => {
                write!(f, "waypoint index {index} out of range (len {len})")
            }
            TrackError::EmptyTrack => write!(f, "track has no waypoints"),
            TrackError::InvalidTrack { reason } => write!(f, "invalid track data: {reason}"),
        }
    }
}

impl std::error::Error for TrackError {}
