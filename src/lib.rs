#![doc = include_str!("../README.md")]

// Core computations
pub mod angle;
pub mod error;
pub mod heading;
pub mod homography;
pub mod track;
pub mod types;

// Map alignment state and tooling around the core.
pub mod config;
pub mod io;
pub mod picking;
pub mod reference;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::TrackError;
pub use crate::types::{Matrix3x3, Quaternion, TrackData, Vector2, Vector3, Waypoint};

pub use crate::angle::{bearing, normalize_angle};
pub use crate::heading::{quaternion_of, yaw_of};
pub use crate::homography::{project, solve};
pub use crate::reference::{CanvasSize, MapReference, MapTransform};
pub use crate::track::{average_heading, neighbor_indices, normalize_all};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use track_align::prelude::*;
///
/// let dst = [
///     Vector2::new(0.0, 0.0),
///     Vector2::new(100.0, 0.0),
///     Vector2::new(100.0, 100.0),
///     Vector2::new(0.0, 100.0),
/// ];
/// let src = [
///     Vector2::new(0.0, 0.0),
///     Vector2::new(1.0, 0.0),
///     Vector2::new(1.0, 1.0),
///     Vector2::new(0.0, 1.0),
/// ];
/// let h = solve(&src, &dst).unwrap_or_else(|_| Matrix3x3::identity());
/// let p = project(&h, &Vector2::new(0.5, 0.5));
/// assert!((p.x - 50.0).abs() < 1e-9 && (p.y - 50.0).abs() < 1e-9);
/// ```
pub mod prelude {
    pub use crate::track::{average_heading, normalize_all};
    pub use crate::{
        normalize_angle, project, quaternion_of, solve, yaw_of, Matrix3x3, TrackData, Vector2,
        Vector3, Waypoint,
    };
}
