//! Tolerance-bounded reachability between the corners of a [Grid].

use crate::{Elevation, Grid};
use std::collections::VecDeque;

/// Order in which the oracle expands cells.
///
/// Both orders visit the same reachable region, so they always agree
/// on the answer and differ only in how many cells they touch before
/// finding the goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Traversal {
    /// Expand the most recently discovered cell first (explicit stack).
    #[default]
    DepthFirst,

    /// Expand cells in discovery order (explicit queue).
    BreadthFirst,
}

/// Returns `true` if a path from the top-left cell to the bottom-right
/// cell exists where no step changes elevation by more than
/// `tolerance`.
pub fn is_reachable<T>(grid: &Grid<T>, tolerance: T) -> bool
where
    T: Elevation,
{
    is_reachable_with(grid, tolerance, Traversal::default())
}

/// Same as [is_reachable], expanding cells in `traversal` order.
pub fn is_reachable_with<T>(grid: &Grid<T>, tolerance: T, traversal: Traversal) -> bool
where
    T: Elevation,
{
    let start = Grid::<T>::START;
    let goal = grid.goal();
    if start == goal {
        return true;
    }

    let mut visited = vec![false; grid.len()];
    let mut frontier = Frontier::new(traversal);
    visited[start] = true;
    frontier.push(start);

    while let Some(current) = frontier.pop() {
        for next in grid.neighbors(current) {
            if visited[next] || grid.step(current, next) > tolerance {
                continue;
            }
            if next == goal {
                return true;
            }
            visited[next] = true;
            frontier.push(next);
        }
    }

    false
}

/// Work list of discovered but not yet expanded cells.
enum Frontier {
    Stack(Vec<usize>),
    Queue(VecDeque<usize>),
}

impl Frontier {
    fn new(traversal: Traversal) -> Self {
        match traversal {
            Traversal::DepthFirst => Self::Stack(Vec::new()),
            Traversal::BreadthFirst => Self::Queue(VecDeque::new()),
        }
    }

    fn push(&mut self, idx: usize) {
        match self {
            Self::Stack(stack) => stack.push(idx),
            Self::Queue(queue) => queue.push_back(idx),
        }
    }

    fn pop(&mut self) -> Option<usize> {
        match self {
            Self::Stack(stack) => stack.pop(),
            Self::Queue(queue) => queue.pop_front(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{is_reachable, is_reachable_with, Traversal};
    use crate::Grid;

    const BOTH: [Traversal; 2] = [Traversal::DepthFirst, Traversal::BreadthFirst];

    fn grid(rows: &[&[u32]]) -> Grid {
        Grid::new(rows.iter().map(|row| row.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_single_cell_ignores_tolerance() {
        let g = grid(&[&[5]]);
        for traversal in BOTH {
            assert!(is_reachable_with(&g, 0, traversal));
        }
    }

    #[test]
    fn test_two_cells() {
        let g = grid(&[&[1, 4]]);
        assert!(!is_reachable(&g, 2));
        assert!(is_reachable(&g, 3));

        let g = grid(&[&[4], &[1]]);
        assert!(!is_reachable(&g, 2));
        assert!(is_reachable(&g, 3));
    }

    #[test]
    fn test_detour_around_peak() {
        let g = grid(&[&[1, 2, 2], &[3, 8, 2], &[5, 3, 5]]);
        for traversal in BOTH {
            assert!(!is_reachable_with(&g, 0, traversal));
            assert!(!is_reachable_with(&g, 1, traversal));
            assert!(is_reachable_with(&g, 2, traversal));
            assert!(is_reachable_with(&g, 3, traversal));
        }
    }

    #[test]
    fn test_winding_path() {
        // Only the serpentine route of 1s connects the corners at
        // tolerance 0.
        let g = grid(&[
            &[1, 1, 1, 1],
            &[9, 9, 9, 1],
            &[1, 1, 1, 1],
            &[1, 9, 9, 9],
            &[1, 1, 1, 1],
        ]);
        for traversal in BOTH {
            assert!(is_reachable_with(&g, 0, traversal));
        }
    }

    #[test]
    fn test_walled_goal() {
        let g = grid(&[&[0, 0, 0], &[0, 0, 50], &[0, 50, 0]]);
        for traversal in BOTH {
            assert!(!is_reachable_with(&g, 49, traversal));
            assert!(is_reachable_with(&g, 50, traversal));
        }
    }

    #[test]
    fn test_grid_unmodified() {
        let g = grid(&[&[1, 2, 3], &[3, 8, 4], &[5, 3, 5]]);
        let before = g.clone();
        is_reachable(&g, 1);
        assert_eq!(g, before);
    }

    #[test]
    fn test_large_serpentine_does_not_recurse() {
        // A single-file corridor through a 299x300 grid forces a path
        // through tens of thousands of cells.
        let (rows, cols) = (299, 300);
        let mut samples = vec![100_u32; rows * cols];
        for row in (0..rows).step_by(2) {
            for col in 0..cols {
                samples[row * cols + col] = 0;
            }
            if row + 1 < rows {
                let col = if (row / 2) % 2 == 0 { cols - 1 } else { 0 };
                samples[(row + 1) * cols + col] = 0;
            }
        }
        let g = Grid::from_samples(rows, cols, samples).unwrap();
        for traversal in BOTH {
            assert!(is_reachable_with(&g, 0, traversal));
            assert!(is_reachable_with(&g, 99, traversal));
        }
    }
}
