//! # Point Samplers
//!
//! Three fixed sampler variants share one sampling signature through
//! [`RandomVariates`]:
//!
//! | Variant | Parameters | Output per point |
//! |---|---|---|
//! | [`InSphere`] | radius, boxsize | `(x, y, z)` within `radius` of the box centre |
//! | [`InBox`] | boxsize | `(x, y, z)` in `[0, boxsize]^3` |
//! | [`OnSphere`] | none | `(azimuth, elevation)` on the unit sphere |
//!
//! Parameters are validated when set ([`HasRadius`], [`HasBoxsize`]);
//! reading an unset parameter is a state error. [`Sampler`] is the closed
//! sum of the three variants and dispatches statically.
//!
//! ## Usage Example
//!
//! ```rust
//! use clustering_core::types::Precision;
//! use clustering_random::samplers::{RandomVariates, Sampler};
//!
//! let sampler = Sampler::in_box(10.0).unwrap();
//! let points = sampler.sample_with_precision(100, 42, Precision::Double).unwrap();
//! assert_eq!(points.shape(), &[100, 3]);
//! ```

mod config;
mod in_box;
mod in_sphere;
mod on_sphere;
mod param;
mod samples;
mod traits;

pub use config::{SamplerConfig, SamplerConfigBuilder, SamplerKind, DEFAULT_SEED};
pub use in_box::{InBox, UniformCube};
pub use in_sphere::{InSphere, UniformBall};
pub use on_sphere::{OnSphere, UniformSphereSurface};
pub use samples::Samples;
pub use traits::{HasBoxsize, HasRadius, RandomVariates};

use clustering_core::types::{ClusterError, Result};
use tracing::debug;

use crate::rng::UniformFloat;

/// Any of the three sampler variants.
#[derive(Clone, Debug, PartialEq)]
pub enum Sampler {
    /// Uniform points inside a sphere centred in a box.
    InSphere(InSphere),
    /// Uniform points inside a box.
    InBox(InBox),
    /// Uniform points on the unit sphere.
    OnSphere(OnSphere),
}

impl Sampler {
    /// Configured in-sphere sampler.
    ///
    /// # Errors
    /// Returns `ClusterError::Validation` if either value is not positive.
    pub fn in_sphere(radius: f64, boxsize: f64) -> Result<Self> {
        InSphere::with_params(radius, boxsize).map(Sampler::InSphere)
    }

    /// Configured in-box sampler.
    ///
    /// # Errors
    /// Returns `ClusterError::Validation` if `boxsize` is not positive.
    pub fn in_box(boxsize: f64) -> Result<Self> {
        InBox::with_boxsize(boxsize).map(Sampler::InBox)
    }

    /// On-sphere sampler.
    pub fn on_sphere() -> Self {
        Sampler::OnSphere(OnSphere)
    }

    /// Builds a configured sampler from a [`SamplerConfig`].
    ///
    /// # Errors
    /// Returns `ClusterError::Validation` if the configuration is invalid.
    pub fn from_config(config: &SamplerConfig) -> Result<Self> {
        config.check_params()?;
        debug!(kind = %config.kind(), "building sampler from config");

        let missing = |name: &str| {
            ClusterError::Validation(format!("{} sampler requires a {name}", config.kind()))
        };
        match config.kind() {
            SamplerKind::InSphere => Self::in_sphere(
                config.radius().ok_or_else(|| missing("radius"))?,
                config.boxsize().ok_or_else(|| missing("boxsize"))?,
            ),
            SamplerKind::InBox => Self::in_box(config.boxsize().ok_or_else(|| missing("boxsize"))?),
            SamplerKind::OnSphere => Ok(Self::on_sphere()),
        }
    }

    /// Returns `true` if every parameter the variant needs is set.
    pub fn is_configured(&self) -> bool {
        match self {
            Sampler::InSphere(s) => s.is_configured(),
            Sampler::InBox(s) => s.is_configured(),
            Sampler::OnSphere(_) => true,
        }
    }

    /// Variant of this sampler.
    pub fn kind(&self) -> SamplerKind {
        match self {
            Sampler::InSphere(_) => SamplerKind::InSphere,
            Sampler::InBox(_) => SamplerKind::InBox,
            Sampler::OnSphere(_) => SamplerKind::OnSphere,
        }
    }
}

impl From<InSphere> for Sampler {
    fn from(sampler: InSphere) -> Self {
        Sampler::InSphere(sampler)
    }
}

impl From<InBox> for Sampler {
    fn from(sampler: InBox) -> Self {
        Sampler::InBox(sampler)
    }
}

impl From<OnSphere> for Sampler {
    fn from(sampler: OnSphere) -> Self {
        Sampler::OnSphere(sampler)
    }
}

impl RandomVariates for Sampler {
    fn ndim(&self) -> usize {
        match self {
            Sampler::InSphere(s) => s.ndim(),
            Sampler::InBox(s) => s.ndim(),
            Sampler::OnSphere(s) => s.ndim(),
        }
    }

    fn sample<T: UniformFloat>(&self, n: usize, seed: u64) -> Result<Samples<T>> {
        match self {
            Sampler::InSphere(s) => s.sample(n, seed),
            Sampler::InBox(s) => s.sample(n, seed),
            Sampler::OnSphere(s) => s.sample(n, seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clustering_core::types::{ElementKind, Precision};

    #[test]
    fn test_sampler_delegates() {
        let direct = InSphere::with_params(2.0, 8.0).unwrap().sample::<f64>(50, 3).unwrap();
        let wrapped = Sampler::in_sphere(2.0, 8.0).unwrap().sample::<f64>(50, 3).unwrap();
        assert_eq!(direct, wrapped);
    }

    #[test]
    fn test_ndim_per_kind() {
        assert_eq!(Sampler::in_sphere(1.0, 2.0).unwrap().ndim(), 3);
        assert_eq!(Sampler::in_box(1.0).unwrap().ndim(), 3);
        assert_eq!(Sampler::on_sphere().ndim(), 2);
    }

    #[test]
    fn test_unconfigured_variant_via_from() {
        let sampler: Sampler = InBox::new().into();
        assert_eq!(sampler.kind(), SamplerKind::InBox);
        assert!(!sampler.is_configured());
        assert!(Sampler::on_sphere().is_configured());
        assert!(Sampler::in_box(2.0).unwrap().is_configured());
        assert!(sampler.sample::<f32>(1, 0).unwrap_err().is_state());
    }

    #[test]
    fn test_from_config() {
        let config = SamplerConfig::builder()
            .kind(SamplerKind::InSphere)
            .radius(1.0)
            .boxsize(4.0)
            .build()
            .unwrap();
        let sampler = Sampler::from_config(&config).unwrap();
        assert_eq!(sampler.kind(), SamplerKind::InSphere);
        match sampler {
            Sampler::InSphere(s) => {
                assert_eq!(s.radius().unwrap(), 1.0);
                assert_eq!(s.boxsize().unwrap(), 4.0);
            }
            other => panic!("unexpected sampler {other:?}"),
        }
    }

    #[test]
    fn test_sample_with_precision_kinds() {
        let sampler = Sampler::on_sphere();
        let single = sampler.sample_with_precision(10, 1, Precision::Single).unwrap();
        let double = sampler.sample_with_precision(10, 1, Precision::Double).unwrap();
        assert_eq!(single.kind(), ElementKind::F32);
        assert_eq!(double.kind(), ElementKind::F64);
        assert_eq!(single.shape(), &[10, 2]);
        assert_eq!(double.shape(), &[10, 2]);
    }
}
