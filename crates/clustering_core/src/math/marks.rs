//! Normalised within-bin rank marks.
//!
//! Given a covariate `x`, a target `y` and bin edges over `x`, each element
//! receives the rank of its `y` among the elements sharing its bin, divided
//! by the largest rank in that bin. A mark of 0.5 therefore corresponds to
//! the median `y` of the bin.
//!
//! # Edge Cases
//!
//! - Elements whose `x` is in no bin (below the first edge, at or above the
//!   last edge, or NaN) keep a NaN mark.
//! - A bin with a single element yields `0 / 0 = NaN`.
//! - Ties in `y` are ordered by a stable sort, so equal values receive
//!   distinct ranks in index order.
//! - NaN values of `y` sort after every number.

use std::cmp::Ordering;
use std::fmt::Debug;

use tracing::{debug, trace};

use super::binning::BinEdges;
use crate::types::{ArrayData, ClusterError, NumArray, Real, Result};

/// Computes normalised marks of `y` binned by `x` for typed slices.
///
/// # Errors
/// - `ClusterError::Validation` if `x` and `y` differ in length, or `bins`
///   has fewer than two edges or is not sorted.
///
/// # Examples
/// ```
/// use clustering_core::math::normalised_marks_slice;
///
/// let x = [0.0_f32, 0.0, 5.0];
/// let marks = normalised_marks_slice(&x, &[2.0, 1.0, 0.0], &[0.0, 1.0]).unwrap();
/// assert_eq!(marks[0], 1.0);
/// assert_eq!(marks[1], 0.0);
/// assert!(marks[2].is_nan());
/// ```
pub fn normalised_marks_slice<T: Real>(x: &[T], y: &[T], bins: &[T]) -> Result<Vec<T>> {
    check_lengths(x.len(), y.len())?;
    let edges = BinEdges::from_slice(bins)?;
    marks_by_bin(x, y, &edges)
}

/// Computes normalised marks of `y` binned by `x` for runtime-typed arrays.
///
/// `x` and `bins` may be of any numeric kind and are compared in `f64`.
/// The output has the shape and element kind of `y`.
///
/// # Errors
/// - `ClusterError::Validation` if any input is not 1-dimensional, `x` and
///   `y` differ in length, or `bins` is not a valid set of edges.
/// - `ClusterError::NotSupported` if `y` has an integer kind.
///
/// # Examples
/// ```
/// use clustering_core::math::normalised_marks;
/// use clustering_core::types::NumArray;
///
/// let x = NumArray::from(vec![0_i64, 0, 0, 1, 1]);
/// let y = NumArray::from(vec![3.0_f64, 1.0, 2.0, 5.0, 4.0]);
/// let bins = NumArray::from(vec![0_i64, 1, 2]);
///
/// let marks = normalised_marks(&x, &y, &bins).unwrap();
/// assert_eq!(marks.as_slice::<f64>().unwrap(), &[1.0, 0.0, 0.5, 1.0, 0.0]);
/// ```
pub fn normalised_marks(x: &NumArray, y: &NumArray, bins: &NumArray) -> Result<NumArray> {
    bins.ensure_1d("bins")?;
    x.ensure_1d("x")?;
    y.ensure_1d("y")?;

    if !y.kind().is_float() {
        return Err(ClusterError::NotSupported(format!(
            "marks of kind {} are not supported; y must be floating point",
            y.kind()
        )));
    }
    check_lengths(x.len(), y.len())?;

    let xs = x.to_f64_vec();
    let edges = BinEdges::new(bins.to_f64_vec())?;

    let data = match y.data() {
        ArrayData::F32(values) => ArrayData::F32(marks_by_bin(&xs, values, &edges)?),
        ArrayData::F64(values) => ArrayData::F64(marks_by_bin(&xs, values, &edges)?),
        other => {
            return Err(ClusterError::NotSupported(format!(
                "marks of kind {} are not supported",
                other.kind()
            )))
        }
    };
    NumArray::new(y.shape().to_vec(), data)
}

/// Assigns normalised ranks of `y` within each bin of `x`.
///
/// Elements in no bin are NaN.
///
/// # Errors
/// Returns `ClusterError::Validation` if `x` and `y` differ in length.
pub fn marks_by_bin<X, T>(x: &[X], y: &[T], edges: &BinEdges<X>) -> Result<Vec<T>>
where
    X: PartialOrd + Copy + Debug,
    T: Real,
{
    check_lengths(x.len(), y.len())?;
    debug!(n = y.len(), n_bins = edges.n_bins(), "computing normalised marks");

    let mut marks = vec![T::nan(); y.len()];
    for (bin, members) in edges.bin_members(x).into_iter().enumerate() {
        if members.is_empty() {
            continue;
        }
        trace!(bin, count = members.len(), "ranking bin");

        let order = argsort(&members, y);
        // A single member gives 0 / 0 = NaN.
        let max_rank = T::cast_f64((members.len() - 1) as f64);
        for (rank, &local) in order.iter().enumerate() {
            marks[members[local]] = T::cast_f64(rank as f64) / max_rank;
        }
    }
    Ok(marks)
}

/// Positions into `members`, ordered by ascending `y`.
fn argsort<T: Real>(members: &[usize], y: &[T]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..members.len()).collect();
    order.sort_by(|&a, &b| nan_last(y[members[a]], y[members[b]]));
    order
}

fn nan_last<T: Real>(a: T, b: T) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

fn check_lengths(nx: usize, ny: usize) -> Result<()> {
    if nx != ny {
        return Err(ClusterError::Validation(format!(
            "x and y must have the same length, got {nx} and {ny}"
        )));
    }
    Ok(())
}
