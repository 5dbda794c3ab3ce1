//! Operations over the closed-loop waypoint sequence.
//!
//! Every waypoint has a predecessor and a successor; the first and last
//! waypoints are neighbours of each other.

pub mod edit;
pub mod neighbors;
pub mod normalize;
pub mod rotation;
pub mod validation;

pub use edit::{auto_rotate, with_yaw_degrees};
pub use neighbors::neighbor_indices;
pub use normalize::{
    check_yaw_only, normalize_all, normalize_all_with_report, NormalizationReport,
    WaypointCorrection,
};
pub use rotation::{average_heading, average_heading_at};
pub use validation::validate_track_value;
