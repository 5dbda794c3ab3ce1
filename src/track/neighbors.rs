/// Indices of the previous and next waypoint in a loop of `n` waypoints.
///
/// Returns `None` when `n == 0` or `i >= n`. A single-waypoint loop is its
/// own neighbour on both sides.
#[inline]
pub fn neighbor_indices(i: usize, n: usize) -> Option<(usize, usize)> {
    if i >= n {
        return None;
    }
    let prev = (i + n - 1) % n;
    let next = (i + 1) % n;
    Some((prev, next))
}
