//! Binary search on the answer.

use crate::{oracle::is_reachable_with, Elevation, Grid, Traversal};
use log::{debug, trace};
use num_traits::{PrimInt, Unsigned};

/// Returns the smallest value in `lo..=hi` for which `feasible` holds.
///
/// `feasible` must be monotone over the range: once it holds for some
/// value it holds for every larger one. Returns `None` if it holds for
/// no value in the range, including when `lo > hi`.
pub fn lowest_feasible<T, F>(mut lo: T, mut hi: T, mut feasible: F) -> Option<T>
where
    T: PrimInt + Unsigned,
    F: FnMut(T) -> bool,
{
    let two = T::one() + T::one();
    let mut best = None;
    while lo <= hi {
        let mid = lo + (hi - lo) / two;
        if feasible(mid) {
            best = Some(mid);
            if mid == T::zero() {
                break;
            }
            hi = mid - T::one();
        } else {
            if mid == T::max_value() {
                break;
            }
            lo = mid + T::one();
        }
    }
    best
}

/// Returns the smallest tolerance at which the bottom-right cell of
/// `grid` is reachable from the top-left cell.
pub fn minimal_effort<T>(grid: &Grid<T>) -> T
where
    T: Elevation,
{
    minimal_effort_with(grid, Traversal::default())
}

/// Same as [minimal_effort], with the oracle expanding cells in
/// `traversal` order.
pub fn minimal_effort_with<T>(grid: &Grid<T>, traversal: Traversal) -> T
where
    T: Elevation,
{
    let relief = grid.relief();
    let now = std::time::Instant::now();
    let mut probes = 0_usize;

    // `relief` admits every step, so the range always has a feasible
    // value.
    let effort = lowest_feasible(T::zero(), relief, |tolerance| {
        probes += 1;
        let reachable = is_reachable_with(grid, tolerance, traversal);
        trace!("probe; tolerance: {tolerance}, reachable: {reachable}");
        reachable
    })
    .unwrap_or(relief);

    debug!(
        "minimal effort; dims: {:?}, relief: {relief}, effort: {effort}, probes: {probes}, exec: {:?}",
        grid.dimensions(),
        now.elapsed()
    );

    effort
}
