//! # Random Number Generation
//!
//! Seeded pseudo-random number generation for the point samplers.
//!
//! - **Reproducibility**: Every generator is built from an explicit seed
//! - **Precision**: Uniform variates are drawn directly in `f32` or `f64`
//!   through [`UniformFloat`]
//! - **Static dispatch**: Generic over element type, no trait objects
//!
//! ## Usage Example
//!
//! ```rust
//! use clustering_random::rng::ClusterRng;
//!
//! let mut rng = ClusterRng::from_seed(12345);
//!
//! let u: f64 = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let column: Vec<f32> = rng.uniform_vec(100);
//! assert_eq!(column.len(), 100);
//! ```

mod prng;

pub use prng::{ClusterRng, UniformFloat};
