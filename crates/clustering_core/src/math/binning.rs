//! Half-open bin edges over a covariate.
//!
//! `B + 1` edges define `B` bins `[edges[i], edges[i + 1])`. The upper edge
//! is exclusive for every bin including the last, so a value equal to the
//! topmost edge belongs to no bin.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::types::{ClusterError, Result};

/// Sorted bin edges.
///
/// # Examples
/// ```
/// use clustering_core::math::BinEdges;
///
/// let bins = BinEdges::new(vec![0.0, 1.0, 2.0]).unwrap();
/// assert_eq!(bins.n_bins(), 2);
/// assert_eq!(bins.locate(0.5), Some(0));
/// assert_eq!(bins.locate(1.0), Some(1));
/// assert_eq!(bins.locate(2.0), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BinEdges<X> {
    edges: Vec<X>,
}

impl<X: PartialOrd + Copy + Debug> BinEdges<X> {
    /// Creates bin edges.
    ///
    /// # Errors
    /// Returns `ClusterError::Validation` if fewer than two edges are given,
    /// or if the edges are not non-decreasing (an unordered NaN edge counts
    /// as a violation).
    pub fn new(edges: Vec<X>) -> Result<Self> {
        if edges.len() < 2 {
            return Err(ClusterError::Validation(format!(
                "at least 2 bin edges are required, got {}",
                edges.len()
            )));
        }
        if let Some(i) = edges.windows(2).position(|w| {
            !matches!(
                w[0].partial_cmp(&w[1]),
                Some(Ordering::Less | Ordering::Equal)
            )
        }) {
            return Err(ClusterError::Validation(format!(
                "bin edges must be non-decreasing: edges[{}] = {:?} > edges[{}] = {:?}",
                i,
                edges[i],
                i + 1,
                edges[i + 1]
            )));
        }
        Ok(Self { edges })
    }

    /// Creates bin edges from a slice.
    pub fn from_slice(edges: &[X]) -> Result<Self> {
        Self::new(edges.to_vec())
    }

    /// Number of bins (`edges.len() - 1`).
    #[inline]
    pub fn n_bins(&self) -> usize {
        self.edges.len() - 1
    }

    /// The edges.
    #[inline]
    pub fn edges(&self) -> &[X] {
        &self.edges
    }

    /// Lower and upper edge of bin `i`.
    pub fn bounds(&self, i: usize) -> Option<(X, X)> {
        if i < self.n_bins() {
            Some((self.edges[i], self.edges[i + 1]))
        } else {
            None
        }
    }

    /// Index of the bin containing `x`, if any.
    ///
    /// Values below the first edge, at or above the last edge, and values
    /// that do not compare (NaN) are in no bin.
    pub fn locate(&self, x: X) -> Option<usize> {
        // Number of edges <= x; the containing bin starts at the last of them.
        let above = self.edges.partition_point(|e| *e <= x);
        if above == 0 || above > self.n_bins() {
            None
        } else {
            Some(above - 1)
        }
    }

    /// Indices of `x` grouped by bin, in ascending index order.
    pub fn bin_members(&self, x: &[X]) -> Vec<Vec<usize>> {
        let mut members = vec![Vec::new(); self.n_bins()];
        for (idx, &value) in x.iter().enumerate() {
            if let Some(bin) = self.locate(value) {
                members[bin].push(idx);
            }
        }
        members
    }

    /// Number of `x` values falling in each bin.
    pub fn counts(&self, x: &[X]) -> Vec<usize> {
        let mut counts = vec![0; self.n_bins()];
        for &value in x {
            if let Some(bin) = self.locate(value) {
                counts[bin] += 1;
            }
        }
        counts
    }
}
