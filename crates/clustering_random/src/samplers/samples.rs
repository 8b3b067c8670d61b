//! Row-major sample sets.

use std::slice::ChunksExact;

use clustering_core::types::{ClusterError, NumArray, Real, Result};

/// A set of points with a fixed number of coordinates, stored row-major.
///
/// # Examples
/// ```
/// use clustering_random::samplers::Samples;
///
/// let s = Samples::new(2, vec![0.0_f64, 1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(s.len(), 2);
/// assert_eq!(s.row(1), Some(&[2.0, 3.0][..]));
/// assert_eq!(s.column(0), vec![0.0, 2.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Samples<T> {
    ndim: usize,
    data: Vec<T>,
}

impl<T: Real> Samples<T> {
    /// Wraps a row-major buffer of `ndim`-coordinate points.
    ///
    /// # Errors
    /// Returns `ClusterError::Validation` if `ndim == 0` or the buffer length
    /// is not a multiple of `ndim`.
    pub fn new(ndim: usize, data: Vec<T>) -> Result<Self> {
        if ndim == 0 || data.len() % ndim != 0 {
            return Err(ClusterError::Validation(format!(
                "buffer of {} elements cannot hold points of dimension {}",
                data.len(),
                ndim
            )));
        }
        Ok(Self { ndim, data })
    }

    /// Interleaves equally long coordinate columns into rows.
    pub(crate) fn from_columns<const D: usize>(columns: [Vec<T>; D]) -> Result<Self> {
        let n = columns.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n * D);
        for i in 0..n {
            for column in &columns {
                data.push(column[i]);
            }
        }
        Self::new(D, data)
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / self.ndim
    }

    /// Returns `true` if there are no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of coordinates per point.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Coordinates of point `i`.
    pub fn row(&self, i: usize) -> Option<&[T]> {
        let start = i.checked_mul(self.ndim)?;
        let end = start.checked_add(self.ndim)?;
        self.data.get(start..end)
    }

    /// Iterator over the points.
    pub fn rows(&self) -> ChunksExact<'_, T> {
        self.data.chunks_exact(self.ndim)
    }

    /// Copies coordinate `j` of every point.
    ///
    /// # Panics
    /// Panics if `j >= ndim`.
    pub fn column(&self, j: usize) -> Vec<T> {
        assert!(j < self.ndim, "column {j} out of range for ndim {}", self.ndim);
        self.rows().map(|row| row[j]).collect()
    }

    /// Row-major flat buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the set and returns the flat buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Converts into a runtime-typed array of shape `[len, ndim]`.
    pub fn into_num_array(self) -> Result<NumArray> {
        let shape = vec![self.len(), self.ndim];
        NumArray::from_real(shape, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clustering_core::types::ElementKind;

    #[test]
    fn test_new_validates_dimension() {
        assert!(Samples::new(0, Vec::<f64>::new()).is_err());
        assert!(Samples::new(3, vec![0.0_f64; 4]).is_err());
        assert!(Samples::new(3, vec![0.0_f64; 6]).is_ok());
    }

    #[test]
    fn test_from_columns_interleaves() {
        let columns = [vec![1.0_f32, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let s = Samples::from_columns(columns).unwrap();
        assert_eq!(s.as_slice(), &[1.0, 3.0, 5.0, 2.0, 4.0, 6.0]);
        assert_eq!(s.column(2), vec![5.0, 6.0]);
    }

    #[test]
    fn test_row_bounds() {
        let s = Samples::new(2, vec![1.0_f64, 2.0]).unwrap();
        assert_eq!(s.row(0), Some(&[1.0, 2.0][..]));
        assert_eq!(s.row(1), None);
        assert_eq!(s.rows().count(), 1);
    }

    #[test]
    fn test_row_far_out_of_range_is_none() {
        let s = Samples::new(3, vec![0.0_f64; 6]).unwrap();
        assert_eq!(s.row(usize::MAX / 3), None);
        assert_eq!(s.row(usize::MAX), None);
    }

    #[test]
    fn test_into_num_array_shape() {
        let s = Samples::new(2, vec![0.0_f32; 10]).unwrap();
        let a = s.into_num_array().unwrap();
        assert_eq!(a.shape(), &[5, 2]);
        assert_eq!(a.kind(), ElementKind::F32);
    }
}
