//! Deserialisation of sampler configurations.

#![cfg(feature = "serde")]

use clustering_core::types::{ElementKind, Precision};
use clustering_random::samplers::{
    RandomVariates, Sampler, SamplerConfig, SamplerKind, DEFAULT_SEED,
};

#[test]
fn test_deserialise_with_defaults() {
    let config: SamplerConfig =
        serde_json::from_str(r#"{ "kind": "in_sphere", "radius": 10.0, "boxsize": 100.0 }"#)
            .unwrap();
    assert_eq!(config.kind(), SamplerKind::InSphere);
    assert_eq!(config.seed(), DEFAULT_SEED);
    assert_eq!(config.precision(), Precision::Single);

    let points = config.sample(32).unwrap();
    assert_eq!(points.kind(), ElementKind::F32);
    assert_eq!(points.shape(), &[32, 3]);
}

#[test]
fn test_deserialise_explicit_fields() {
    let config: SamplerConfig = serde_json::from_str(
        r#"{ "kind": "on_sphere", "seed": 7, "precision": "double" }"#,
    )
    .unwrap();
    let sampler = Sampler::from_config(&config).unwrap();
    assert_eq!(sampler.ndim(), 2);
    assert_eq!(config.sample(5).unwrap().kind(), ElementKind::F64);
}

#[test]
fn test_deserialised_config_is_validated_before_use() {
    let config: SamplerConfig =
        serde_json::from_str(r#"{ "kind": "in_box", "boxsize": -1.0 }"#).unwrap();
    assert!(Sampler::from_config(&config).unwrap_err().is_validation());

    let config: SamplerConfig = serde_json::from_str(r#"{ "kind": "in_sphere" }"#).unwrap();
    assert!(config.sample(1).unwrap_err().is_validation());
}

#[test]
fn test_unknown_kind_rejected() {
    let result: Result<SamplerConfig, _> = serde_json::from_str(r#"{ "kind": "in_torus" }"#);
    assert!(result.is_err());
}
