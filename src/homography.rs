//! Four-point homography estimation and projection.
//!
//! - `solve`: exact DLT from four correspondences with `h22 = 1`.
//! - `project`: forward perspective transform of a single point.
//!
//! The matrix is never adjusted incrementally: a new canvas size means a new
//! set of correspondences and a fresh `solve`.

use crate::error::TrackError;
use crate::types::{Matrix3x3, Vector2};
use log::debug;
use nalgebra::{SMatrix, Vector3};

/// Pivots with smaller magnitude mark the system as singular.
pub const PIVOT_EPS: f64 = 1e-10;

type Augmented = SMatrix<f64, 8, 9>;

/// Solves for the projective transform mapping each `world[i]` onto `canvas[i]`.
///
/// Each correspondence `(x, y) -> (x', y')` contributes the rows
/// `[x, y, 1, 0, 0, 0, -x'x, -x'y | x']` and `[0, 0, 0, x, y, 1, -y'x, -y'y | y']`.
/// The 8x8 system is reduced with partial pivoting.
pub fn solve(world: &[Vector2; 4], canvas: &[Vector2; 4]) -> Result<Matrix3x3, TrackError> {
    let mut a = Augmented::zeros();
    for (i, (src, dst)) in world.iter().zip(canvas.iter()).enumerate() {
        let (x, y) = (src.x, src.y);
        let (xp, yp) = (dst.x, dst.y);
        let r = 2 * i;
        a[(r, 0)] = x;
        a[(r, 1)] = y;
        a[(r, 2)] = 1.0;
        a[(r, 6)] = -xp * x;
        a[(r, 7)] = -xp * y;
        a[(r, 8)] = xp;

        a[(r + 1, 3)] = x;
        a[(r + 1, 4)] = y;
        a[(r + 1, 5)] = 1.0;
        a[(r + 1, 6)] = -yp * x;
        a[(r + 1, 7)] = -yp * y;
        a[(r + 1, 8)] = yp;
    }

    let h = solve_augmented(a)?;
    Ok(Matrix3x3::new(
        h[0], h[1], h[2], //
        h[3], h[4], h[5], //
        h[6], h[7], 1.0,
    ))
}

/// Gaussian elimination with partial pivoting on an `[A | b]` system.
fn solve_augmented(mut a: Augmented) -> Result<[f64; 8], TrackError> {
    const N: usize = 8;
    for col in 0..N {
        let mut max_row = col;
        for row in col + 1..N {
            if a[(row, col)].abs() > a[(max_row, col)].abs() {
                max_row = row;
            }
        }
        if max_row != col {
            a.swap_rows(col, max_row);
        }

        let pivot = a[(col, col)];
        if pivot.is_nan() || pivot.abs() < PIVOT_EPS {
            debug!("homography::solve singular at column {col} (pivot={pivot:e})");
            return Err(TrackError::SingularMatrix { column: col, pivot });
        }

        for k in col..=N {
            a[(col, k)] /= pivot;
        }
        for row in col + 1..N {
            let factor = a[(row, col)];
            if factor == 0.0 {
                continue;
            }
            for k in col..=N {
                a[(row, k)] -= factor * a[(col, k)];
            }
        }
    }

    let mut x = [0.0f64; N];
    for i in (0..N).rev() {
        let mut acc = a[(i, N)];
        for j in i + 1..N {
            acc -= a[(i, j)] * x[j];
        }
        x[i] = acc;
    }
    Ok(x)
}

/// Maps `point` through `h`. No guard against `w ≈ 0`: degenerate
/// projections come back as infinities or NaN.
#[inline]
pub fn project(h: &Matrix3x3, point: &Vector2) -> Vector2 {
    let v = h * Vector3::new(point.x, point.y, 1.0);
    Vector2::new(v[0] / v[2], v[1] / v[2])
}
