//! Declarative sampler configuration.
//!
//! [`SamplerConfig`] names a sampler variant together with its parameters,
//! the seed and the output precision. [`SamplerConfigBuilder::build`] runs
//! [`SamplerConfig::validate`], which also warns about ignored parameters.
//! [`Sampler::from_config`](super::Sampler::from_config) repeats only the
//! hard checks, so a deserialised configuration is checked before any
//! sampling takes place without repeating the warnings.

use std::fmt;
use std::str::FromStr;

use clustering_core::types::{ClusterError, NumArray, Precision, Result};
use tracing::warn;

use super::Sampler;
use super::traits::RandomVariates;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// Sampler variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SamplerKind {
    /// Uniform points inside a sphere centred in a box.
    InSphere,
    /// Uniform points inside a box.
    InBox,
    /// Uniform points on the unit sphere.
    OnSphere,
}

impl SamplerKind {
    /// Returns `true` if this variant needs a radius.
    pub fn requires_radius(&self) -> bool {
        matches!(self, SamplerKind::InSphere)
    }

    /// Returns `true` if this variant needs a box size.
    pub fn requires_boxsize(&self) -> bool {
        matches!(self, SamplerKind::InSphere | SamplerKind::InBox)
    }

    /// Number of coordinates per point.
    pub fn ndim(&self) -> usize {
        match self {
            SamplerKind::InSphere | SamplerKind::InBox => 3,
            SamplerKind::OnSphere => 2,
        }
    }

    /// Configuration name of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            SamplerKind::InSphere => "in_sphere",
            SamplerKind::InBox => "in_box",
            SamplerKind::OnSphere => "on_sphere",
        }
    }
}

impl fmt::Display for SamplerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SamplerKind {
    type Err = ClusterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "in_sphere" => Ok(SamplerKind::InSphere),
            "in_box" => Ok(SamplerKind::InBox),
            "on_sphere" => Ok(SamplerKind::OnSphere),
            _ => Err(ClusterError::Validation(format!(
                "unknown sampler kind '{s}': expected in_sphere, in_box or on_sphere"
            ))),
        }
    }
}

#[cfg(feature = "serde")]
fn default_seed() -> u64 {
    DEFAULT_SEED
}

/// Sampler configuration.
///
/// Use [`SamplerConfigBuilder`] to construct validated instances.
///
/// # Examples
///
/// ```rust
/// use clustering_core::types::Precision;
/// use clustering_random::samplers::{SamplerConfig, SamplerKind};
///
/// let config = SamplerConfig::builder()
///     .kind(SamplerKind::InSphere)
///     .radius(50.0)
///     .boxsize(500.0)
///     .precision(Precision::Double)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.seed(), 42);
/// let points = config.sample(1000).unwrap();
/// assert_eq!(points.shape(), &[1000, 3]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerConfig {
    kind: SamplerKind,
    #[cfg_attr(feature = "serde", serde(default))]
    radius: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    boxsize: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default = "default_seed"))]
    seed: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    precision: Precision,
}

impl SamplerConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Sampler variant.
    #[inline]
    pub fn kind(&self) -> SamplerKind {
        self.kind
    }

    /// Sphere radius, if given.
    #[inline]
    pub fn radius(&self) -> Option<f64> {
        self.radius
    }

    /// Box size, if given.
    #[inline]
    pub fn boxsize(&self) -> Option<f64> {
        self.boxsize
    }

    /// Seed for the generator.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Output precision.
    #[inline]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Validates the configuration.
    ///
    /// Parameters the variant does not use are accepted and ignored with a
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns `ClusterError::Validation` if:
    /// - `radius` or `boxsize` is given but not positive and finite
    /// - the variant requires a parameter that is missing
    pub fn validate(&self) -> Result<()> {
        self.check_params()?;
        if !self.kind.requires_radius() && self.radius.is_some() {
            warn!(kind = %self.kind, "radius is ignored by this sampler");
        }
        if !self.kind.requires_boxsize() && self.boxsize.is_some() {
            warn!(kind = %self.kind, "boxsize is ignored by this sampler");
        }
        Ok(())
    }

    /// Positivity and required-parameter checks, without diagnostics.
    pub(crate) fn check_params(&self) -> Result<()> {
        check_positive("radius", self.radius)?;
        check_positive("boxsize", self.boxsize)?;

        if self.kind.requires_radius() && self.radius.is_none() {
            return Err(ClusterError::Validation(format!(
                "{} sampler requires a radius",
                self.kind
            )));
        }
        if self.kind.requires_boxsize() && self.boxsize.is_none() {
            return Err(ClusterError::Validation(format!(
                "{} sampler requires a boxsize",
                self.kind
            )));
        }
        Ok(())
    }

    /// Builds the configured sampler and draws `n` points with the
    /// configured seed and precision.
    ///
    /// # Errors
    /// Propagates validation and sampling errors.
    pub fn sample(&self, n: usize) -> Result<NumArray> {
        Sampler::from_config(self)?.sample_with_precision(n, self.seed, self.precision)
    }
}

fn check_positive(name: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => Err(ClusterError::non_positive(name, v)),
        _ => Ok(()),
    }
}

/// Builder for [`SamplerConfig`].
///
/// # Examples
///
/// ```rust
/// use clustering_random::samplers::{SamplerConfig, SamplerKind};
///
/// let config = SamplerConfig::builder()
///     .kind(SamplerKind::InBox)
///     .boxsize(100.0)
///     .seed(7)
///     .build()
///     .expect("valid config");
/// assert_eq!(config.seed(), 7);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SamplerConfigBuilder {
    kind: Option<SamplerKind>,
    radius: Option<f64>,
    boxsize: Option<f64>,
    seed: Option<u64>,
    precision: Precision,
}

impl SamplerConfigBuilder {
    /// Sets the sampler variant.
    #[inline]
    pub fn kind(mut self, kind: SamplerKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the sphere radius.
    #[inline]
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Sets the box size.
    #[inline]
    pub fn boxsize(mut self, boxsize: f64) -> Self {
        self.boxsize = Some(boxsize);
        self
    }

    /// Sets the seed (defaults to [`DEFAULT_SEED`]).
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the output precision (defaults to single).
    #[inline]
    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ClusterError::Validation` if the kind is missing or
    /// [`SamplerConfig::validate`] fails.
    pub fn build(self) -> Result<SamplerConfig> {
        let kind = self.kind.ok_or_else(|| {
            ClusterError::Validation("sampler kind is required".to_string())
        })?;
        let config = SamplerConfig {
            kind,
            radius: self.radius,
            boxsize: self.boxsize,
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            precision: self.precision,
        };
        config.validate()?;
        Ok(config)
    }
}
