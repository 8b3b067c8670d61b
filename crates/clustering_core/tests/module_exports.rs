//! Integration tests for module exports and the public marks contract.

use clustering_core::math::{normalised_marks, normalised_marks_slice, BinEdges};
use clustering_core::types::{ArrayData, ClusterError, ElementKind, NumArray, Precision, Real};

/// Test that the math module is accessible via absolute paths.
#[test]
fn test_math_module_exports() {
    use clustering_core::math::marks::marks_by_bin;

    let edges = BinEdges::new(vec![0.0, 10.0]).unwrap();
    let marks = marks_by_bin(&[1.0, 2.0], &[0.5_f64, 0.25], &edges).unwrap();
    assert_eq!(marks, vec![1.0, 0.0]);

    let err = marks_by_bin(&[1.0, 2.0, 3.0], &[0.5_f64], &edges).unwrap_err();
    assert!(err.is_validation());
}

/// Test that the types module is accessible via absolute paths.
#[test]
fn test_types_module_exports() {
    let a = NumArray::from_real(vec![2, 1], vec![1.0_f32, 2.0]).unwrap();
    assert_eq!(a.kind(), ElementKind::F32);
    assert_eq!(<f32 as Real>::PRECISION, Precision::Single);
    assert!(matches!(a.data(), ArrayData::F32(_)));
}

/// Covariate and edges given as integers, marks as doubles.
#[test]
fn test_mixed_kinds_two_bin_example() {
    let x = NumArray::from(vec![0_i32, 0, 0, 1, 1]);
    let y = NumArray::from(vec![3.0_f64, 1.0, 2.0, 5.0, 4.0]);
    let bins = NumArray::from(vec![0_i32, 1, 2]);

    let marks = normalised_marks(&x, &y, &bins).unwrap();
    assert_eq!(marks.shape(), &[5]);
    assert_eq!(
        marks.as_slice::<f64>().unwrap(),
        &[1.0, 0.0, 0.5, 1.0, 0.0]
    );
}

/// Many bins over a realistic covariate: each populated bin spans [0, 1].
#[test]
fn test_marks_span_unit_interval_per_bin() {
    let n = 1000;
    let x: Vec<f64> = (0..n).map(|i| (i % 97) as f64 / 97.0 * 10.0).collect();
    let y: Vec<f64> = (0..n).map(|i| ((i * 7919) % 1009) as f64).collect();
    let bins: Vec<f64> = (0..=10).map(|i| i as f64).collect();

    let marks = normalised_marks_slice(&x, &y, &bins).unwrap();
    let edges = BinEdges::new(bins).unwrap();

    for members in edges.bin_members(&x) {
        assert!(members.len() > 1);
        let lo = members.iter().map(|&i| marks[i]).fold(f64::INFINITY, f64::min);
        let hi = members.iter().map(|&i| marks[i]).fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(lo, 0.0);
        assert_eq!(hi, 1.0);
    }
}

#[test]
fn test_error_taxonomy() {
    let x = NumArray::from(vec![0.0_f64]);
    let bins = NumArray::from(vec![0.0_f64, 1.0]);

    let err = normalised_marks(&x, &NumArray::from(vec![1_i64]), &bins).unwrap_err();
    assert!(matches!(err, ClusterError::NotSupported(_)));

    let err = normalised_marks(&x, &NumArray::from(vec![1.0_f64, 2.0]), &bins).unwrap_err();
    assert!(matches!(err, ClusterError::Validation(_)));
}
