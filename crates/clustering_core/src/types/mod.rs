//! Core numeric types.
//!
//! This module provides:
//! - `error`: The `ClusterError` taxonomy shared by every crate in the workspace
//! - `precision`: The `Precision` tag and the `Real` trait implemented by `f32`/`f64`
//! - `array`: `NumArray`, a shaped array whose element kind is known only at runtime
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`ClusterError`], [`Result`] from `error`
//! - [`Precision`], [`Real`] from `precision`
//! - [`NumArray`], [`ArrayData`], [`ElementKind`] from `array`

pub mod array;
pub mod error;
pub mod precision;

pub use array::{ArrayData, ElementKind, NumArray};
pub use error::{ClusterError, Result};
pub use precision::{Precision, Real};
