//! # Minimum path effort
//!
//! `effort` finds the smallest tolerance `E` such that a rectangular
//! elevation [Grid] can be crossed from its top-left cell to its
//! bottom-right cell using four-way steps that never change elevation
//! by more than `E`.
//!
//! The answer is found by a binary search ([search::lowest_feasible])
//! over a reachability predicate ([is_reachable]), which is monotone in
//! the tolerance.

mod error;
mod grid;
mod oracle;
pub mod search;

pub use crate::{
    error::EffortError,
    grid::Grid,
    oracle::{is_reachable, is_reachable_with, Traversal},
    search::{minimal_effort, minimal_effort_with},
};
use num_traits::{PrimInt, Unsigned};
use std::fmt::{Debug, Display};

/// Element type of a [Grid].
///
/// Implemented for every unsigned primitive integer.
pub trait Elevation: PrimInt + Unsigned + Debug + Display {}

impl<T> Elevation for T where T: PrimInt + Unsigned + Debug + Display {}

/// Validates `rows` as a [Grid] and returns its minimal effort.
pub fn try_minimal_effort<T>(rows: Vec<Vec<T>>) -> Result<T, EffortError>
where
    T: Elevation,
{
    let grid = Grid::new(rows)?;
    Ok(minimal_effort(&grid))
}
