//! Rectangular elevation grid.

use crate::{EffortError, Elevation};

/// An immutable, rectangular grid of non-negative elevation samples.
///
/// A `Grid` can only be built through its validating constructors, so
/// every value of this type has at least one row, at least one column,
/// and rows of equal length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T = u32> {
    /// Number of (rows, columns) in this grid.
    dimensions: (usize, usize),

    /// Lowest elevation sample in this grid.
    min_elevation: T,

    /// Highest elevation sample in this grid.
    max_elevation: T,

    /// Elevation samples, row-major.
    samples: Box<[T]>,
}

impl<T> Grid<T>
where
    T: Elevation,
{
    /// Returns a grid built from a sequence of equal-length rows.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, EffortError> {
        let expected = rows.first().ok_or(EffortError::NoRows)?.len();
        if expected == 0 {
            return Err(EffortError::NoColumns);
        }

        let mut samples = Vec::with_capacity(rows.len() * expected);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != expected {
                return Err(EffortError::Jagged {
                    row,
                    expected,
                    actual: values.len(),
                });
            }
            samples.extend_from_slice(values);
        }

        Self::from_samples(rows.len(), expected, samples)
    }

    /// Returns a grid of `rows` x `cols` using the row-major `samples`.
    pub fn from_samples(rows: usize, cols: usize, samples: Vec<T>) -> Result<Self, EffortError> {
        if rows == 0 {
            return Err(EffortError::NoRows);
        }
        if cols == 0 {
            return Err(EffortError::NoColumns);
        }
        if rows.checked_mul(cols) != Some(samples.len()) {
            return Err(EffortError::SampleCount {
                rows,
                cols,
                actual: samples.len(),
            });
        }

        let (min_elevation, max_elevation) = samples.iter().fold(
            (T::max_value(), T::min_value()),
            |(min, max), &sample| (min.min(sample), max.max(sample)),
        );

        Ok(Self {
            dimensions: (rows, cols),
            min_elevation,
            max_elevation,
            samples: samples.into_boxed_slice(),
        })
    }

    pub fn rows(&self) -> usize {
        self.dimensions.0
    }

    pub fn cols(&self) -> usize {
        self.dimensions.1
    }

    /// Returns (rows, columns).
    pub fn dimensions(&self) -> (usize, usize) {
        self.dimensions
    }

    /// Returns the number of samples in this grid.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns the sample at (`row`, `col`), if it lies inside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        let (rows, cols) = self.dimensions;
        if row < rows && col < cols {
            Some(self.samples[self.linear_index((row, col))])
        } else {
            None
        }
    }

    /// Returns the lowest elevation sample in this grid.
    pub fn min_elevation(&self) -> T {
        self.min_elevation
    }

    /// Returns the highest elevation sample in this grid.
    pub fn max_elevation(&self) -> T {
        self.max_elevation
    }

    /// Returns the difference between the highest and lowest samples.
    ///
    /// No two cells, adjacent or not, differ by more than this.
    pub fn relief(&self) -> T {
        self.max_elevation - self.min_elevation
    }

    /// Returns an iterator over samples in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.samples.iter().copied()
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Grid<T>
where
    T: Elevation,
{
    type Error = EffortError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, EffortError> {
        Self::new(rows)
    }
}

/// Crate API
impl<T> Grid<T>
where
    T: Elevation,
{
    /// Linear index of the top-left cell.
    pub(crate) const START: usize = 0;

    /// Linear index of the bottom-right cell.
    pub(crate) fn goal(&self) -> usize {
        self.samples.len() - 1
    }

    /// Absolute elevation difference between two cells.
    pub(crate) fn step(&self, from: usize, to: usize) -> T {
        let (a, b) = (self.samples[from], self.samples[to]);
        if a > b {
            a - b
        } else {
            b - a
        }
    }

    /// Returns the in-bounds cardinal neighbors of `idx`.
    pub(crate) fn neighbors(&self, idx: usize) -> impl Iterator<Item = usize> {
        const DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        let (rows, cols) = self.dimensions;
        let (row, col) = self.position(idx);
        DIRS.into_iter().filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr).filter(|&r| r < rows)?;
            let c = col.checked_add_signed(dc).filter(|&c| c < cols)?;
            Some(r * cols + c)
        })
    }
}

/// Private API
impl<T> Grid<T> {
    fn linear_index(&self, (row, col): (usize, usize)) -> usize {
        self.dimensions.1 * row + col
    }

    fn position(&self, idx: usize) -> (usize, usize) {
        (idx / self.dimensions.1, idx % self.dimensions.1)
    }
}
