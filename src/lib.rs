//! # convr
//!
//! **Winograd minimal-filtering 2D convolution for batched NHWC tensors.**
//!
//! convr computes `output = conv2d(input, filter)` by transforming 3×3 input
//! tiles and filter slices into the Winograd domain with fixed small matrices,
//! combining them elementwise there, and reducing back to output pixels. This
//! trades multiplications for additions versus direct convolution while
//! producing the same result (up to floating-point rounding).
//!
//! ## Layout
//!
//! - Input: `(batch, height, width, in_channels)`
//! - Filter: `(filter_h, filter_w, in_channels, out_channels)`
//! - Output: `(batch, out_h, out_w, out_channels)`
//!
//! ## Quick Start
//!
//! ```
//! use convr::prelude::*;
//!
//! let input = Tensor::from_slice(&[1.0f32; 25], &[1, 5, 5, 1])?;
//! let filter = Tensor::from_slice(&[1.0f32; 9], &[3, 3, 1, 1])?;
//!
//! let output = winograd_conv2d(&input, &filter, (1, 1), PaddingMode::Valid)?;
//! assert_eq!(output.shape(), &[1, 3, 3, 1]);
//! assert!((output.as_slice()[0] - 9.0).abs() < 1e-6);
//! # Ok::<(), convr::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): parallelize the per-pixel coordinate map across
//!   threads. Every output pixel is an independent computation, so this is a
//!   plain data-parallel `for_each` with no synchronization.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod element;
pub mod error;
pub mod kernels;
pub mod ops;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::element::Element;
    pub use crate::error::{Error, Result};
    pub use crate::ops::{direct_conv2d, pad2d, winograd_conv2d, PaddingMode};
    pub use crate::tensor::Tensor;
}
