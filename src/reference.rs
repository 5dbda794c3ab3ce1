//! Map reference correspondences and the caller-owned world->canvas transform.
//!
//! The reference map image covers a fixed world rectangle. Its four corners
//! (clockwise from top-left) are paired with the corners of the current
//! canvas; whenever the canvas is resized the homography is solved again
//! from scratch.

use crate::error::TrackError;
use crate::homography::{self, project};
use crate::types::{Matrix3x3, Vector2};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// World-space corners of the bundled reference map, clockwise from top-left.
pub const DEFAULT_WORLD_CORNERS: [Vector2; 4] = [
    Vector2::new(-1277708.2965454245, -317662.26182056009),
    Vector2::new(917131.48374835111, -315379.30946399376),
    Vector2::new(917957.0844781138, 1877914.3470450507),
    Vector2::new(-1279574.7736519347, 1879092.599622732),
];

/// Logical canvas size plus the device pixel ratio of the render surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
            device_pixel_ratio: 1.0,
        }
    }
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio: 1.0,
        }
    }

    /// Size of the backing store in physical pixels.
    pub fn physical(&self) -> (f64, f64) {
        let dpr = if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        };
        (self.width * dpr, self.height * dpr)
    }
}

/// Four world reference points, clockwise from the top-left map corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapReference {
    pub world_corners: [Vector2; 4],
}

impl Default for MapReference {
    fn default() -> Self {
        Self {
            world_corners: DEFAULT_WORLD_CORNERS,
        }
    }
}

impl MapReference {
    /// Destination points for `canvas`, in the same order as the world corners.
    pub fn canvas_points(&self, canvas: &CanvasSize) -> [Vector2; 4] {
        let (w, h) = canvas.physical();
        [
            Vector2::new(0.0, 0.0),
            Vector2::new(w, 0.0),
            Vector2::new(w, h),
            Vector2::new(0.0, h),
        ]
    }

    pub fn solve(&self, canvas: &CanvasSize) -> Result<Matrix3x3, TrackError> {
        homography::solve(&self.world_corners, &self.canvas_points(canvas))
    }
}

/// The current world->canvas transform.
///
/// Falls back to the identity matrix when the correspondences are
/// degenerate; [`MapTransform::is_degraded`] reports that state.
#[derive(Clone, Debug)]
pub struct MapTransform {
    reference: MapReference,
    canvas: CanvasSize,
    matrix: Matrix3x3,
    degraded: bool,
}

impl MapTransform {
    pub fn new(reference: MapReference, canvas: CanvasSize) -> Self {
        let mut transform = Self {
            reference,
            canvas,
            matrix: Matrix3x3::identity(),
            degraded: true,
        };
        transform.rebuild();
        transform
    }

    /// Re-solves the homography for a new canvas size.
    pub fn resize(&mut self, canvas: CanvasSize) {
        self.canvas = canvas;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        match self.reference.solve(&self.canvas) {
            Ok(h) => {
                debug!(
                    "MapTransform::rebuild canvas={}x{} dpr={}",
                    self.canvas.width, self.canvas.height, self.canvas.device_pixel_ratio
                );
                self.matrix = h;
                self.degraded = false;
            }
            Err(err) => {
                warn!("Homography computation failed: {err}; using identity transform");
                self.matrix = Matrix3x3::identity();
                self.degraded = true;
            }
        }
    }

    pub fn matrix(&self) -> &Matrix3x3 {
        &self.matrix
    }

    pub fn canvas(&self) -> &CanvasSize {
        &self.canvas
    }

    pub fn reference(&self) -> &MapReference {
        &self.reference
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// World XY -> canvas coordinates. May be non-finite; see [`project`].
    pub fn to_canvas(&self, world: &Vector2) -> Vector2 {
        project(&self.matrix, world)
    }
}

impl Default for MapTransform {
    fn default() -> Self {
        Self::new(MapReference::default(), CanvasSize::default())
    }
}
