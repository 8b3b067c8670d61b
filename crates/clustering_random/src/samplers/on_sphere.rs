//! Uniform points on the surface of the unit sphere.
//!
//! Points are returned as `(azimuth, elevation)` with azimuth in
//! `[0, 2π)` and elevation in `[-π/2, π/2]`. Elevation is
//! `arcsin(2v - 1)`, so `sin(elevation)` is uniform on `[-1, 1]` and
//! points concentrate toward the equator in angle while staying uniform
//! per unit solid angle.

use clustering_core::types::Result;
use rand::Rng;
use rand_distr::Distribution;
use tracing::debug;

use super::samples::Samples;
use super::traits::{check_count, RandomVariates};
use crate::rng::{ClusterRng, UniformFloat};

/// Generator of uniform (azimuth, elevation) pairs on the unit sphere.
///
/// Needs no configuration.
///
/// # Examples
/// ```
/// use clustering_random::samplers::{OnSphere, RandomVariates};
///
/// let points = OnSphere.sample::<f64>(100, 42).unwrap();
/// assert_eq!(points.ndim(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OnSphere;

impl OnSphere {
    /// Per-point distribution; always available.
    pub fn distribution(&self) -> UniformSphereSurface {
        UniformSphereSurface
    }
}

impl RandomVariates for OnSphere {
    fn ndim(&self) -> usize {
        2
    }

    fn sample<T: UniformFloat>(&self, n: usize, seed: u64) -> Result<Samples<T>> {
        check_count(n)?;
        let precision = T::PRECISION;
        debug!(n, seed, %precision, "sampling points on sphere");

        let mut rng = ClusterRng::from_seed(seed);
        let u: Vec<T> = rng.uniform_vec(n);
        let v: Vec<T> = rng.uniform_vec(n);

        let mut data = Vec::with_capacity(2 * n);
        for (&ui, &vi) in u.iter().zip(&v) {
            data.extend_from_slice(&UniformSphereSurface::point(ui, vi));
        }
        Samples::new(2, data)
    }
}

/// Uniform distribution on the unit sphere as `[azimuth, elevation]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UniformSphereSurface;

impl UniformSphereSurface {
    /// Maps two unit uniforms to `[azimuth, elevation]`.
    pub fn point<T: UniformFloat>(u: T, v: T) -> [T; 2] {
        let one = T::one();
        let two = one + one;
        let half = one / two;
        [two * T::PI() * u, (two * (v - half)).asin()]
    }
}

impl<T: UniformFloat> Distribution<[T; 2]> for UniformSphereSurface {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [T; 2] {
        let u = T::draw(rng);
        let v = T::draw(rng);
        Self::point(u, v)
    }
}
