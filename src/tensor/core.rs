//! Core Tensor type

use super::{contiguous_strides, Shape, Strides};
use crate::element::Element;
use crate::error::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// N-dimensional array with contiguous, reference-counted storage
///
/// `Tensor` is the value type flowing through the convolution pipeline. It
/// consists of:
/// - **Storage**: `Arc`-shared, contiguous, row-major element buffer
/// - **Shape / Strides**: dimensions and element offsets of the view
///
/// Tensors are immutable once constructed; `clone()` is cheap and aliases the
/// same storage. This is what makes `Valid` padding a zero-copy operation and
/// lets the parallel coordinate map share the padded input and filter across
/// workers without locking.
pub struct Tensor<T: Element> {
    storage: Arc<Vec<T>>,
    shape: Shape,
    strides: Strides,
}

impl<T: Element> Tensor<T> {
    /// Create a tensor from a slice of data
    ///
    /// Returns [`Error::ShapeMismatch`] if `data.len()` does not equal the
    /// product of the `shape` dimensions.
    ///
    /// # Example
    ///
    /// ```
    /// use convr::tensor::Tensor;
    /// let t = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2])?;
    /// assert_eq!(t.shape(), &[2, 2]);
    /// # Ok::<(), convr::error::Error>(())
    /// ```
    pub fn from_slice(data: &[T], shape: &[usize]) -> Result<Self> {
        Self::from_vec(data.to_vec(), shape)
    }

    /// Create a tensor taking ownership of a buffer
    ///
    /// Returns [`Error::ShapeMismatch`] if `data.len()` does not equal the
    /// product of the `shape` dimensions.
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let expected_len: usize = shape.iter().product();
        if data.len() != expected_len {
            return Err(Error::shape_mismatch(shape, &[data.len()]));
        }
        Ok(Self {
            storage: Arc::new(data),
            shape: shape.iter().copied().collect(),
            strides: contiguous_strides(shape),
        })
    }

    /// Create a tensor filled with zeros
    pub fn zeros(shape: &[usize]) -> Self {
        Self::full(shape, T::zero())
    }

    /// Create a tensor filled with ones
    pub fn ones(shape: &[usize]) -> Self {
        Self::full(shape, T::one())
    }

    /// Create a tensor filled with a scalar value
    pub fn full(shape: &[usize], value: T) -> Self {
        let len: usize = shape.iter().product();
        Self {
            storage: Arc::new(vec![value; len]),
            shape: shape.iter().copied().collect(),
            strides: contiguous_strides(shape),
        }
    }

    /// Shape: size along each dimension
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Strides in elements along each dimension
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of dimensions
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the tensor holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// View the underlying storage as a flat row-major slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// Copy the elements out into a `Vec`
    pub fn to_vec(&self) -> Vec<T> {
        self.storage.as_ref().clone()
    }
}

impl<T: Element> Clone for Tensor<T> {
    /// Cheap clone: the new tensor aliases the same storage.
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            shape: self.shape.clone(),
            strides: self.strides.clone(),
        }
    }
}

impl<T: Element> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape.as_slice())
            .field("len", &self.storage.len())
            .finish()
    }
}
