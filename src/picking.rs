//! Canvas-space projection of a whole track and nearest-waypoint picking.

use crate::homography::project;
use crate::types::{Matrix3x3, Vector2, Waypoint};
use rayon::prelude::*;

/// Default hit radius in canvas units.
pub const DEFAULT_PICK_RADIUS: f64 = 10.0;

/// Projects every waypoint's XY position onto the canvas.
///
/// Entries are `None` where the projection is not finite, so callers can
/// skip them when drawing or hit-testing.
pub fn project_waypoints(h: &Matrix3x3, waypoints: &[Waypoint]) -> Vec<Option<Vector2>> {
    waypoints
        .par_iter()
        .map(|wp| {
            let p = project(h, &wp.translation.xy());
            p.is_finite().then_some(p)
        })
        .collect()
}

/// Index of the projected waypoint closest to `click`, if it lies strictly
/// within `radius`. Ties resolve to the lower index.
pub fn pick_waypoint(
    h: &Matrix3x3,
    waypoints: &[Waypoint],
    click: &Vector2,
    radius: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in project_waypoints(h, waypoints).into_iter().enumerate() {
        let Some(p) = p else { continue };
        let dist = (click.x - p.x).hypot(click.y - p.y);
        if best.map_or(true, |(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }
    best.filter(|&(_, d)| d < radius).map(|(i, _)| i)
}
