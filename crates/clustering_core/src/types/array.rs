//! Shaped numeric arrays with a runtime element kind.
//!
//! Most of the workspace is generic over [`Real`](super::Real), but some
//! contracts are defined over the *kind* of the data: `normalised_marks`
//! rejects integer marks, and samplers may be asked for a precision chosen
//! at runtime. [`NumArray`] carries the shape and a typed buffer so these
//! checks can be made explicitly.

use std::fmt;

use super::error::{ClusterError, Result};
use super::precision::Real;

/// Element kind of an [`ArrayData`] buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ElementKind {
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
}

impl ElementKind {
    /// Returns `true` for the floating-point kinds.
    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, ElementKind::F32 | ElementKind::F64)
    }

    /// Returns the short type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
            ElementKind::I32 => "i32",
            ElementKind::I64 => "i64",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat, typed element buffer.
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayData {
    /// `f32` elements.
    F32(Vec<f32>),
    /// `f64` elements.
    F64(Vec<f64>),
    /// `i32` elements.
    I32(Vec<i32>),
    /// `i64` elements.
    I64(Vec<i64>),
}

impl ArrayData {
    /// Number of elements in the buffer.
    pub fn len(&self) -> usize {
        match self {
            ArrayData::F32(v) => v.len(),
            ArrayData::F64(v) => v.len(),
            ArrayData::I32(v) => v.len(),
            ArrayData::I64(v) => v.len(),
        }
    }

    /// Returns `true` if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element kind of the buffer.
    pub fn kind(&self) -> ElementKind {
        match self {
            ArrayData::F32(_) => ElementKind::F32,
            ArrayData::F64(_) => ElementKind::F64,
            ArrayData::I32(_) => ElementKind::I32,
            ArrayData::I64(_) => ElementKind::I64,
        }
    }

    /// Copies the buffer into `f64`. Integers beyond 2^53 lose precision.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            ArrayData::F32(v) => v.iter().map(|&x| x as f64).collect(),
            ArrayData::F64(v) => v.clone(),
            ArrayData::I32(v) => v.iter().map(|&x| x as f64).collect(),
            ArrayData::I64(v) => v.iter().map(|&x| x as f64).collect(),
        }
    }
}

macro_rules! impl_from_vec {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$ty>> for ArrayData {
                fn from(values: Vec<$ty>) -> Self {
                    ArrayData::$variant(values)
                }
            }

            impl From<Vec<$ty>> for NumArray {
                fn from(values: Vec<$ty>) -> Self {
                    NumArray {
                        shape: vec![values.len()],
                        data: ArrayData::$variant(values),
                    }
                }
            }
        )*
    };
}

impl_from_vec!(f32 => F32, f64 => F64, i32 => I32, i64 => I64);

/// Row-major array with an explicit shape.
///
/// # Examples
/// ```
/// use clustering_core::types::{ArrayData, ElementKind, NumArray};
///
/// let a = NumArray::new(vec![2, 3], ArrayData::F64(vec![0.0; 6])).unwrap();
/// assert_eq!(a.ndim(), 2);
/// assert_eq!(a.kind(), ElementKind::F64);
///
/// let v = NumArray::from(vec![1_i64, 2, 3]);
/// assert_eq!(v.shape(), &[3]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NumArray {
    shape: Vec<usize>,
    data: ArrayData,
}

impl NumArray {
    /// Creates an array, checking that `shape` matches the buffer length.
    ///
    /// # Errors
    /// Returns `ClusterError::Validation` if the product of `shape` overflows
    /// or differs from the number of elements.
    pub fn new(shape: Vec<usize>, data: ArrayData) -> Result<Self> {
        let expected = shape
            .iter()
            .try_fold(1_usize, |acc, &dim| acc.checked_mul(dim))
            .ok_or_else(|| {
                ClusterError::Validation(format!("shape {shape:?} overflows the element count"))
            })?;
        if expected != data.len() {
            return Err(ClusterError::Validation(format!(
                "shape {:?} requires {} elements, buffer holds {}",
                shape,
                expected,
                data.len()
            )));
        }
        Ok(Self { shape, data })
    }

    /// Wraps a typed float buffer with the given shape.
    pub fn from_real<T: Real>(shape: Vec<usize>, values: Vec<T>) -> Result<Self> {
        Self::new(shape, T::into_array_data(values))
    }

    /// Shape of the array.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of dimensions.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element kind.
    #[inline]
    pub fn kind(&self) -> ElementKind {
        self.data.kind()
    }

    /// Borrows the underlying buffer.
    #[inline]
    pub fn data(&self) -> &ArrayData {
        &self.data
    }

    /// Consumes the array and returns the buffer.
    pub fn into_data(self) -> ArrayData {
        self.data
    }

    /// Borrows the elements as `&[T]` if the element kind matches `T`.
    pub fn as_slice<T: Real>(&self) -> Option<&[T]> {
        T::slice_from(&self.data)
    }

    /// Copies the elements into `f64`.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.data.to_f64_vec()
    }

    /// Returns the same buffer under a new shape.
    ///
    /// # Errors
    /// Returns `ClusterError::Validation` if the element count differs.
    pub fn reshape(self, shape: Vec<usize>) -> Result<Self> {
        Self::new(shape, self.data)
    }

    /// Checks that the array is one-dimensional.
    ///
    /// # Errors
    /// Returns `ClusterError::Validation` naming `what` otherwise.
    pub fn ensure_1d(&self, what: &str) -> Result<()> {
        if self.ndim() != 1 {
            return Err(ClusterError::Validation(format!(
                "{what} must be 1-dimensional, got shape {:?}",
                self.shape
            )));
        }
        Ok(())
    }
}
