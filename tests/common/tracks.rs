use std::f64::consts::{PI, TAU};
use track_align::{quaternion_of, Vector3, Waypoint};

pub fn waypoint(x: f64, y: f64, yaw: f64) -> Waypoint {
    Waypoint {
        rotation: quaternion_of(yaw).expect("finite yaw"),
        translation: Vector3::new(x, y, 0.0),
        scale_3d: Vector3::new(1.0, 1.0, 1.0),
    }
}

/// Direction of travel (counter-clockwise) at sample `i` of [`oval`].
pub fn oval_tangent(i: usize, n: usize, rx: f64, ry: f64) -> f64 {
    let t = TAU * i as f64 / n as f64;
    (ry * t.cos()).atan2(-rx * t.sin())
}

/// Counter-clockwise elliptical loop. Every third waypoint faces backwards
/// and the rest carry a small yaw offset from the tangent.
pub fn oval(n: usize, rx: f64, ry: f64) -> Vec<Waypoint> {
    assert!(n >= 3, "a loop needs at least three waypoints");
    (0..n)
        .map(|i| {
            let t = TAU * i as f64 / n as f64;
            let mut yaw = oval_tangent(i, n, rx, ry) + 0.05 * ((i % 5) as f64 - 2.0);
            if i % 3 == 0 {
                yaw += PI;
            }
            waypoint(rx * t.cos(), ry * t.sin(), track_align::normalize_angle(yaw))
        })
        .collect()
}
