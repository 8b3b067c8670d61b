//! Uniform points inside a box `[0, boxsize]^3`.

use clustering_core::types::Result;
use rand::Rng;
use rand_distr::Distribution;
use tracing::debug;

use super::param::PositiveParam;
use super::samples::Samples;
use super::traits::{check_count, HasBoxsize, RandomVariates};
use crate::rng::{ClusterRng, UniformFloat};

/// Generator of uniform points in a cube of side `boxsize` with one corner
/// at the origin.
///
/// # Examples
/// ```
/// use clustering_random::samplers::{InBox, RandomVariates};
///
/// let sampler = InBox::with_boxsize(100.0).unwrap();
/// let points = sampler.sample::<f64>(500, 3).unwrap();
/// assert!(points.as_slice().iter().all(|&c| (0.0..=100.0).contains(&c)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct InBox {
    boxsize: PositiveParam,
}

impl Default for InBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InBox {
    /// Creates an unconfigured sampler.
    pub fn new() -> Self {
        Self {
            boxsize: PositiveParam::unset("boxsize"),
        }
    }

    /// Creates a sampler with the box size set.
    ///
    /// # Errors
    /// Returns `ClusterError::Validation` if `boxsize` is not positive.
    pub fn with_boxsize(boxsize: f64) -> Result<Self> {
        let mut sampler = Self::new();
        sampler.set_boxsize(boxsize)?;
        Ok(sampler)
    }

    /// Returns `true` once the box size is set.
    pub fn is_configured(&self) -> bool {
        self.boxsize.is_set()
    }

    /// Per-point distribution in precision `T`.
    ///
    /// # Errors
    /// Returns `ClusterError::State` if the box size is unset.
    pub fn distribution<T: UniformFloat>(&self) -> Result<UniformCube<T>> {
        Ok(UniformCube {
            side: T::cast_f64(self.boxsize()?),
        })
    }
}

impl HasBoxsize for InBox {
    fn boxsize(&self) -> Result<f64> {
        self.boxsize.get()
    }

    fn set_boxsize(&mut self, boxsize: f64) -> Result<()> {
        self.boxsize.set(boxsize)
    }
}

impl RandomVariates for InBox {
    fn ndim(&self) -> usize {
        3
    }

    fn sample<T: UniformFloat>(&self, n: usize, seed: u64) -> Result<Samples<T>> {
        check_count(n)?;
        let cube = self.distribution::<T>()?;
        let precision = T::PRECISION;
        debug!(n, seed, %precision, "sampling points in box");

        let mut rng = ClusterRng::from_seed(seed);
        let columns: [Vec<T>; 3] = [
            rng.uniform_vec(n),
            rng.uniform_vec(n),
            rng.uniform_vec(n),
        ];
        let scaled: [Vec<T>; 3] =
            columns.map(|column| column.into_iter().map(|u| u * cube.side).collect());
        Samples::from_columns(scaled)
    }
}

/// Uniform distribution over `[0, side]^3`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformCube<T> {
    side: T,
}

impl<T: UniformFloat> UniformCube<T> {
    /// Side length of the cube.
    pub fn side(&self) -> T {
        self.side
    }
}

impl<T: UniformFloat> Distribution<[T; 3]> for UniformCube<T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [T; 3] {
        [
            T::draw(rng) * self.side,
            T::draw(rng) * self.side,
            T::draw(rng) * self.side,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_is_state_error() {
        let sampler = InBox::new();
        assert!(!sampler.is_configured());
        assert!(sampler.boxsize().unwrap_err().is_state());
        assert!(sampler.sample::<f32>(3, 0).unwrap_err().is_state());
    }

    #[test]
    fn test_invalid_boxsize() {
        assert!(InBox::with_boxsize(0.0).unwrap_err().is_validation());
        assert!(InBox::with_boxsize(-10.0).unwrap_err().is_validation());
    }

    #[test]
    fn test_coordinates_in_box() {
        let sampler = InBox::with_boxsize(250.0).unwrap();
        let points = sampler.sample::<f32>(10_000, 42).unwrap();
        assert_eq!(points.len(), 10_000);
        assert_eq!(points.ndim(), 3);
        assert!(points.as_slice().iter().all(|&c| (0.0..=250.0).contains(&c)));
    }

    #[test]
    fn test_columns_drawn_in_order() {
        let sampler = InBox::with_boxsize(1.0).unwrap();
        let points = sampler.sample::<f64>(4, 9).unwrap();

        let mut rng = ClusterRng::from_seed(9);
        let first: Vec<f64> = rng.uniform_vec(4);
        let second: Vec<f64> = rng.uniform_vec(4);
        assert_eq!(points.column(0), first);
        assert_eq!(points.column(1), second);
    }

    #[test]
    fn test_each_axis_mean_is_half_box() {
        let sampler = InBox::with_boxsize(10.0).unwrap();
        let points = sampler.sample::<f64>(100_000, 5).unwrap();
        for j in 0..3 {
            let col = points.column(j);
            let mean = col.iter().sum::<f64>() / col.len() as f64;
            assert!((mean - 5.0).abs() < 0.05, "axis {j} mean = {mean}");
        }
    }

    #[test]
    fn test_distribution_draws_inside_cube() {
        let cube = InBox::with_boxsize(2.0).unwrap().distribution::<f64>().unwrap();
        let mut rng = ClusterRng::from_seed(4);
        for _ in 0..1000 {
            let p: [f64; 3] = cube.sample(&mut rng);
            assert!(p.iter().all(|&c| (0.0..=2.0).contains(&c)));
        }
    }
}
