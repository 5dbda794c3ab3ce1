//! Angle utilities shared by the heading and averaging routines.
//!
//! All angles are radians on the XY plane, measured counter-clockwise from +X.

use crate::types::Vector3;
use std::f64::consts::{PI, TAU};

/// Wraps an angle into `(-π, π]`.
///
/// Uses the sign-preserving remainder, then shifts once by `2π` if the
/// remainder lies outside the range.
#[inline]
pub fn normalize_angle(rad: f64) -> f64 {
    let r = rad % TAU;
    if r < -PI {
        r + TAU
    } else if r > PI {
        r - TAU
    } else if r == -PI {
        PI
    } else {
        r
    }
}

/// Shortest-arc distance between two angles, in `[0, π]`.
#[inline]
pub fn angular_distance(a: f64, b: f64) -> f64 {
    normalize_angle(a - b).abs()
}

/// Direction of travel from `from` to `to` on the XY plane. Z is ignored.
#[inline]
pub fn bearing(from: &Vector3, to: &Vector3) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Sign with `sign(0) = 0` (and `sign(NaN) = NaN`), unlike `f64::signum`
/// which returns `±1` for signed zeros.
#[inline]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x * 0.0
    }
}

/// The opposite direction, `x - sign(x)·π`. Zero maps to itself.
#[inline]
pub fn antipode(x: f64) -> f64 {
    x - sign(x) * PI
}

#[inline]
pub fn to_degrees(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

#[inline]
pub fn to_radians(deg: f64) -> f64 {
    deg * PI / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn normalize_angle_basic() {
        assert!(approx_eq(normalize_angle(0.5), 0.5));
        assert!(approx_eq(normalize_angle(3.0 * FRAC_PI_2), -FRAC_PI_2));
        assert!(approx_eq(normalize_angle(-3.0 * FRAC_PI_2), FRAC_PI_2));
        assert!(approx_eq(normalize_angle(PI), PI));
        assert!(approx_eq(normalize_angle(-PI), PI));
        assert!(approx_eq(normalize_angle(TAU), 0.0));
    }

    #[test]
    fn normalize_angle_stays_in_range() {
        let mut x = -50.0;
        while x < 50.0 {
            let n = normalize_angle(x);
            assert!(n > -PI && n <= PI, "normalize({x}) = {n}");
            assert!(approx_eq(normalize_angle(n), n));
            x += 0.173;
        }
    }

    #[test]
    fn normalize_angle_ignores_full_turns() {
        let x = 0.8;
        for k in -5..=5 {
            let shifted = x + TAU * k as f64;
            assert!((normalize_angle(shifted) - normalize_angle(x)).abs() < 1e-9);
        }
    }

    #[test]
    fn angular_distance_handles_wrap() {
        assert!(approx_eq(angular_distance(PI - 0.1, -PI + 0.1), 0.2));
        assert!(approx_eq(angular_distance(0.0, FRAC_PI_2), FRAC_PI_2));
        assert!(approx_eq(angular_distance(0.25, 1.7), angular_distance(1.7, 0.25)));
    }

    #[test]
    fn bearing_ignores_height() {
        let a = Vector3::new(0.0, 0.0, 5.0);
        let b = Vector3::new(0.0, 3.0, -40.0);
        assert!(approx_eq(bearing(&a, &b), FRAC_PI_2));
        let c = Vector3::new(-2.0, 0.0, 0.0);
        assert!(approx_eq(bearing(&a, &c), PI));
    }

    #[test]
    fn antipode_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(antipode(0.0), 0.0);
        assert!(approx_eq(antipode(0.5), 0.5 - PI));
        assert!(approx_eq(antipode(-0.5), PI - 0.5));
    }

    #[test]
    fn degree_conversion() {
        assert!(approx_eq(to_radians(180.0), PI));
        assert!(approx_eq(to_degrees(-FRAC_PI_2), -90.0));
    }
}
