//! Binning and rank statistics.
//!
//! - [`binning`]: Half-open bin edges and membership lookup
//! - [`marks`]: Within-bin rank normalisation (`normalised_marks`)

pub mod binning;
pub mod marks;

pub use binning::BinEdges;
pub use marks::{normalised_marks, normalised_marks_slice};
