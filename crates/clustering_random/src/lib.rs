//! # clustering_random: Random Point Generators
//!
//! ## Layer Role
//!
//! clustering_random sits on top of `clustering_core` and provides seeded
//! generators of uniformly distributed points:
//! - Inside a sphere centred in a box: [`samplers::InSphere`]
//! - Inside a box `[0, boxsize]^3`: [`samplers::InBox`]
//! - On the surface of the unit sphere as (azimuth, elevation): [`samplers::OnSphere`]
//!
//! The closed [`samplers::Sampler`] enum wraps the three variants, and
//! [`samplers::SamplerConfig`] describes one declaratively.
//!
//! ## Reproducibility
//!
//! Every sampling call builds its own [`rng::ClusterRng`] from the supplied
//! seed, so identical `(n, seed, precision)` always yield identical output.
//!
//! ## Usage Examples
//!
//! ```rust
//! use clustering_random::samplers::{InSphere, RandomVariates};
//!
//! let sampler = InSphere::with_params(10.0, 100.0).unwrap();
//! let points = sampler.sample::<f64>(1000, 42).unwrap();
//!
//! assert_eq!(points.len(), 1000);
//! for p in points.rows() {
//!     let d2: f64 = p.iter().map(|c| (c - 50.0).powi(2)).sum();
//!     assert!(d2.sqrt() <= 10.0 + 1e-9);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable deserialisation of `SamplerConfig`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod rng;
pub mod samplers;
