use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

/// Row-major projective transform in homogeneous coordinates (world -> canvas).
pub type Matrix3x3 = Matrix3<f64>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Drops the vertical component.
    pub fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}

/// Unit rotation quaternion. Only yaw (rotation about +Z) is modelled, so
/// `x` and `y` are expected to be zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// One track checkpoint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub rotation: Quaternion,
    pub translation: Vector3,
    #[serde(rename = "scale3D")]
    pub scale_3d: Vector3,
}

impl Waypoint {
    /// Copy of this waypoint with a different rotation.
    pub fn with_rotation(&self, rotation: Quaternion) -> Self {
        Self {
            rotation,
            translation: self.translation,
            scale_3d: self.scale_3d,
        }
    }
}

/// Closed-loop route: the last waypoint connects back to the first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackData {
    #[serde(rename = "routeName", default, skip_serializing_if = "Option::is_none")]
    pub route_name: Option<String>,
    pub waypoints: Vec<Waypoint>,
}
