//! Uniform points inside a sphere centred in a box.
//!
//! # Algorithm
//!
//! Inverse-transform sampling in spherical coordinates with
//! `u, v, w ~ U[0, 1)`:
//!
//! ```text
//! r     = R * u^(1/3)        uniform in volume, not in radius
//! theta = arccos(1 - 2v)     uniform on the sphere, not in angle
//! phi   = 2 * pi * w
//! ```
//!
//! The Cartesian point `(r sin θ cos φ, r sin θ sin φ, r cos θ)` is then
//! shifted by `boxsize / 2` on every axis.

use clustering_core::types::Result;
use rand::Rng;
use rand_distr::Distribution;
use tracing::debug;

use super::param::PositiveParam;
use super::samples::Samples;
use super::traits::{check_count, HasBoxsize, HasRadius, RandomVariates};
use crate::rng::{ClusterRng, UniformFloat};

/// Generator of uniform points inside a sphere of `radius`, centred in a
/// cube of side `boxsize`.
///
/// # Examples
/// ```
/// use clustering_random::samplers::{HasRadius, InSphere, RandomVariates};
///
/// let sampler = InSphere::new();
/// assert!(sampler.sample::<f32>(10, 0).is_err()); // not configured
///
/// let sampler = InSphere::with_params(1.0, 4.0).unwrap();
/// assert_eq!(sampler.radius().unwrap(), 1.0);
/// let points = sampler.sample::<f32>(10, 0).unwrap();
/// assert_eq!(points.ndim(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct InSphere {
    radius: PositiveParam,
    boxsize: PositiveParam,
}

impl Default for InSphere {
    fn default() -> Self {
        Self::new()
    }
}

impl InSphere {
    /// Creates an unconfigured sampler.
    pub fn new() -> Self {
        Self {
            radius: PositiveParam::unset("radius"),
            boxsize: PositiveParam::unset("boxsize"),
        }
    }

    /// Creates a sampler with both parameters set.
    ///
    /// # Errors
    /// Returns `ClusterError::Validation` if either value is not positive.
    pub fn with_params(radius: f64, boxsize: f64) -> Result<Self> {
        let mut sampler = Self::new();
        sampler.set_radius(radius)?;
        sampler.set_boxsize(boxsize)?;
        Ok(sampler)
    }

    /// Returns `true` once both the radius and the box size are set.
    pub fn is_configured(&self) -> bool {
        self.radius.is_set() && self.boxsize.is_set()
    }

    /// Per-point distribution in precision `T`.
    ///
    /// # Errors
    /// Returns `ClusterError::State` if either parameter is unset.
    pub fn distribution<T: UniformFloat>(&self) -> Result<UniformBall<T>> {
        Ok(UniformBall {
            radius: T::cast_f64(self.radius()?),
            centre: T::cast_f64(self.boxsize()? / 2.0),
        })
    }
}

impl HasRadius for InSphere {
    fn radius(&self) -> Result<f64> {
        self.radius.get()
    }

    fn set_radius(&mut self, radius: f64) -> Result<()> {
        self.radius.set(radius)
    }
}

impl HasBoxsize for InSphere {
    fn boxsize(&self) -> Result<f64> {
        self.boxsize.get()
    }

    fn set_boxsize(&mut self, boxsize: f64) -> Result<()> {
        self.boxsize.set(boxsize)
    }
}

impl RandomVariates for InSphere {
    fn ndim(&self) -> usize {
        3
    }

    fn sample<T: UniformFloat>(&self, n: usize, seed: u64) -> Result<Samples<T>> {
        check_count(n)?;
        let ball = self.distribution::<T>()?;
        let precision = T::PRECISION;
        debug!(n, seed, %precision, "sampling points in sphere");

        // One full column per variate, in the order r, theta, phi.
        let mut rng = ClusterRng::from_seed(seed);
        let u: Vec<T> = rng.uniform_vec(n);
        let v: Vec<T> = rng.uniform_vec(n);
        let w: Vec<T> = rng.uniform_vec(n);

        let mut data = Vec::with_capacity(3 * n);
        for i in 0..n {
            data.extend_from_slice(&ball.point(u[i], v[i], w[i]));
        }
        Samples::new(3, data)
    }
}

/// Uniform distribution over a ball, in Cartesian coordinates.
///
/// Obtained from [`InSphere::distribution`]; usable with any `rand` RNG.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformBall<T> {
    radius: T,
    centre: T,
}

impl<T: UniformFloat> UniformBall<T> {
    /// Ball radius.
    pub fn radius(&self) -> T {
        self.radius
    }

    /// Coordinate of the centre on every axis.
    pub fn centre(&self) -> T {
        self.centre
    }

    /// Maps three unit uniforms to a point in the ball.
    pub fn point(&self, u: T, v: T, w: T) -> [T; 3] {
        let one = T::one();
        let two = one + one;
        let third = one / (two + one);

        let r = u.powf(third) * self.radius;
        let theta = (one - two * v).acos();
        let phi = two * T::PI() * w;

        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        [
            r * sin_theta * cos_phi + self.centre,
            r * sin_theta * sin_phi + self.centre,
            r * cos_theta + self.centre,
        ]
    }
}

impl<T: UniformFloat> Distribution<[T; 3]> for UniformBall<T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [T; 3] {
        let u = T::draw(rng);
        let v = T::draw(rng);
        let w = T::draw(rng);
        self.point(u, v, w)
    }
}
