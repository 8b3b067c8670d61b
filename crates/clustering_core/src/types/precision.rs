//! Floating-point precision of generated and derived arrays.
//!
//! [`Precision`] is the runtime tag callers pass to select the element type
//! of an output array; [`Real`] is the compile-time counterpart implemented
//! by `f32` and `f64`.

use std::fmt;
use std::str::FromStr;

use num_traits::{Float, FloatConst};

use super::array::ArrayData;
use super::error::ClusterError;

/// Element precision of a floating-point output array.
///
/// Defaults to `Single`: generated catalogues are stored in single precision.
///
/// # Examples
/// ```
/// use clustering_core::types::Precision;
///
/// let p: Precision = "f64".parse().unwrap();
/// assert_eq!(p, Precision::Double);
/// assert_eq!(Precision::default(), Precision::Single);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Precision {
    /// 32-bit IEEE 754 (`f32`).
    #[default]
    Single,
    /// 64-bit IEEE 754 (`f64`).
    Double,
}

impl Precision {
    /// Returns the size of one element in bytes.
    #[inline]
    pub fn size_of(&self) -> usize {
        match self {
            Precision::Single => std::mem::size_of::<f32>(),
            Precision::Double => std::mem::size_of::<f64>(),
        }
    }

    /// Returns the short type name (`"f32"` or `"f64"`).
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Precision::Single => "f32",
            Precision::Double => "f64",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Precision {
    type Err = ClusterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "f32" | "float32" | "single" => Ok(Precision::Single),
            "f64" | "float64" | "double" => Ok(Precision::Double),
            _ => Err(ClusterError::Validation(format!(
                "unknown precision '{s}': expected f32 or f64"
            ))),
        }
    }
}

/// Floating-point element type usable in sample sets and marks.
///
/// Implemented for `f32` and `f64` only. Bridges generic numerical code
/// (`num_traits::Float`) with the runtime-typed [`ArrayData`] buffers.
pub trait Real: Float + FloatConst + fmt::Debug + Default + Send + Sync + 'static {
    /// Runtime precision tag of this type.
    const PRECISION: Precision;

    /// Converts an `f64` parameter into this type, rounding if needed.
    fn cast_f64(value: f64) -> Self;

    /// Widens this value to `f64`.
    fn as_f64(self) -> f64;

    /// Wraps an owned buffer of this type.
    fn into_array_data(values: Vec<Self>) -> ArrayData;

    /// Borrows the buffer if it holds elements of this type.
    fn slice_from(data: &ArrayData) -> Option<&[Self]>;
}

impl Real for f32 {
    const PRECISION: Precision = Precision::Single;

    #[inline]
    fn cast_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }

    fn into_array_data(values: Vec<Self>) -> ArrayData {
        ArrayData::F32(values)
    }

    fn slice_from(data: &ArrayData) -> Option<&[Self]> {
        match data {
            ArrayData::F32(v) => Some(v),
            _ => None,
        }
    }
}

impl Real for f64 {
    const PRECISION: Precision = Precision::Double;

    #[inline]
    fn cast_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }

    fn into_array_data(values: Vec<Self>) -> ArrayData {
        ArrayData::F64(values)
    }

    fn slice_from(data: &ArrayData) -> Option<&[Self]> {
        match data {
            ArrayData::F64(v) => Some(v),
            _ => None,
        }
    }
}
