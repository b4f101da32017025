//! Typed inner-loop kernels
//!
//! Kernels operate on flat row-major slices with explicit dimensions; all
//! shape validation happens in the [`crate::ops`] layer before a kernel runs.

pub mod direct;
pub mod matmul;
pub mod pad;
pub mod winograd;
