//! # clustering_core: Foundation Types for Clustering Analysis
//!
//! ## Layer Role
//!
//! clustering_core is the bottom layer of the workspace, providing:
//! - Error taxonomy: `ClusterError` and the crate `Result` alias (`types::error`)
//! - Floating-point precision tag and the `Real` element trait (`types::precision`)
//! - Dynamically typed numeric arrays: `NumArray` (`types::array`)
//! - Half-open bin edges: `BinEdges` (`math::binning`)
//! - Binned rank normalisation: `normalised_marks` (`math::marks`)
//!
//! ## Minimal Dependencies
//!
//! - num-traits: Traits for generic f32/f64 computation
//! - thiserror: Error derive
//! - tracing: Diagnostic events (no subscriber is installed here)
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use clustering_core::math::marks::normalised_marks_slice;
//!
//! let x = [0.0, 0.0, 0.0, 1.0, 1.0];
//! let y = [3.0, 1.0, 2.0, 5.0, 4.0];
//! let bins = [0.0, 1.0, 2.0];
//!
//! let marks = normalised_marks_slice(&x, &y, &bins).unwrap();
//! assert_eq!(marks, vec![1.0, 0.0, 0.5, 1.0, 0.0]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Precision` and `ElementKind`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
