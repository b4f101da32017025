//! Tensor-level operations
//!
//! Operations validate shapes and arguments, resolve padding, and dispatch to
//! the typed kernels in [`crate::kernels`]. Every operation is a pure
//! function from tensors to a tensor: either the full output is produced or a
//! typed error is returned before any output is built.

mod conv;
mod conv_common;
mod pad;

pub use conv::{direct_conv2d, winograd_conv2d};
pub use conv_common::Conv2dParams;
pub use pad::{pad2d, PaddingMode};

pub(crate) use conv_common::{validate_4d_tensor, validate_conv2d};
