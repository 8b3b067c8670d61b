//! Capability traits shared by the sampler variants.
//!
//! Each variant implements only the capabilities it needs: the in-sphere
//! sampler has a radius and a box size, the in-box sampler a box size, and
//! the on-sphere sampler neither.

use clustering_core::types::{ClusterError, NumArray, Precision, Result};

use super::samples::Samples;
use crate::rng::UniformFloat;

/// Sampler with a configurable sphere radius.
pub trait HasRadius {
    /// Returns the radius.
    ///
    /// # Errors
    /// Returns `ClusterError::State` if the radius has not been set.
    fn radius(&self) -> Result<f64>;

    /// Sets the radius.
    ///
    /// # Errors
    /// - `ClusterError::Validation` if `radius` is not positive and finite.
    /// - `ClusterError::State` if a different radius is already set.
    fn set_radius(&mut self, radius: f64) -> Result<()>;
}

/// Sampler with a configurable box side length.
pub trait HasBoxsize {
    /// Returns the box size.
    ///
    /// # Errors
    /// Returns `ClusterError::State` if the box size has not been set.
    fn boxsize(&self) -> Result<f64>;

    /// Sets the box size.
    ///
    /// # Errors
    /// - `ClusterError::Validation` if `boxsize` is not positive and finite.
    /// - `ClusterError::State` if a different box size is already set.
    fn set_boxsize(&mut self, boxsize: f64) -> Result<()>;
}

/// Generator of random variate samples.
pub trait RandomVariates {
    /// Number of coordinates per point.
    fn ndim(&self) -> usize;

    /// Draws `n` points with the given seed in precision `T`.
    ///
    /// # Errors
    /// - `ClusterError::Validation` if `n == 0`.
    /// - `ClusterError::State` if a required parameter is not set.
    fn sample<T: UniformFloat>(&self, n: usize, seed: u64) -> Result<Samples<T>>;

    /// Draws `n` points in a precision chosen at runtime.
    ///
    /// The result has shape `[n, ndim]`.
    fn sample_with_precision(&self, n: usize, seed: u64, precision: Precision) -> Result<NumArray> {
        match precision {
            Precision::Single => self.sample::<f32>(n, seed)?.into_num_array(),
            Precision::Double => self.sample::<f64>(n, seed)?.into_num_array(),
        }
    }
}

pub(crate) fn check_count(n: usize) -> Result<()> {
    if n == 0 {
        return Err(ClusterError::Validation(
            "number of samples must be positive".to_string(),
        ));
    }
    Ok(())
}
