//! Tensor types: shapes, strides, and the core [`Tensor`] container

mod core;

pub use core::Tensor;

use smallvec::SmallVec;

/// Stack allocation threshold for dimensions
/// Every tensor in this crate has 4 or fewer dimensions, so dimension
/// vectors are stack-allocated up to 4
pub(crate) const STACK_DIMS: usize = 4;

/// Shape type: size along each dimension
pub type Shape = SmallVec<[usize; STACK_DIMS]>;

/// Strides type: element offsets between consecutive elements along each
/// dimension. Strides are in ELEMENTS, not bytes.
pub type Strides = SmallVec<[usize; STACK_DIMS]>;

/// Compute row-major (C-order) strides for a contiguous shape
pub(crate) fn contiguous_strides(shape: &[usize]) -> Strides {
    let mut strides: Strides = SmallVec::with_capacity(shape.len());
    let mut acc = 1usize;
    for &dim in shape.iter().rev() {
        strides.push(acc);
        acc *= dim;
    }
    strides.reverse();
    strides
}
