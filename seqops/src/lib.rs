//! # Sequence utilities
//!
//! `seqops` provides two single-pass, stack-based routines over
//! integer slices.

pub mod bowl;
mod error;
pub mod merge;

pub use crate::{bowl::bowl_subarrays, error::SeqError, merge::replace_non_coprimes};
