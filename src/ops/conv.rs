//! 2D convolution drivers
//!
//! Both entry points share the same pipeline: validate shapes, apply the
//! padding stage, resolve output dimensions, then run a kernel over the
//! padded input. `winograd_conv2d` maps the per-pixel Winograd kernel over
//! every `(batch, row, col)` coordinate; `direct_conv2d` is the brute-force
//! reference with identical semantics.

use crate::element::Element;
use crate::error::Result;
use crate::kernels::direct;
use crate::kernels::winograd::{self, WinogradTransform};
use crate::ops::{pad2d, validate_conv2d, PaddingMode};
use crate::tensor::Tensor;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Winograd 2D convolution.
///
/// Computes the convolution of `input` `(batch, h, w, c_in)` against `filter`
/// `(filter_h, filter_w, c_in, c_out)` and returns a
/// `(batch, out_h, out_w, c_out)` tensor, where
/// `out_h = (padded_h - filter_h) / stride_h + 1` and likewise for width.
///
/// Only 3×3 filters are supported: the transform matrices are derived for
/// that geometry. Use [`direct_conv2d`] for other filter sizes.
///
/// # Errors
///
/// - [`crate::error::Error::InvalidArgument`]: non-4D tensors, zero strides.
/// - [`crate::error::Error::ShapeMismatch`]: in-channel disagreement between
///   input and filter, or a non-3×3 filter (the fixed tile reads would fall
///   out of bounds of the output-size arithmetic).
///
/// # Example
///
/// ```
/// use convr::prelude::*;
///
/// let input = Tensor::<f32>::ones(&[1, 5, 5, 1]);
/// let filter = Tensor::<f32>::ones(&[3, 3, 1, 1]);
/// let output = winograd_conv2d(&input, &filter, (1, 1), PaddingMode::Valid)?;
/// assert_eq!(output.shape(), &[1, 3, 3, 1]);
/// # Ok::<(), convr::error::Error>(())
/// ```
pub fn winograd_conv2d<T: Element>(
    input: &Tensor<T>,
    filter: &Tensor<T>,
    strides: (usize, usize),
    padding: PaddingMode,
) -> Result<Tensor<T>> {
    // Validate against the raw shapes so errors are reported before any
    // padded copy is allocated.
    validate_conv2d(input.shape(), filter.shape(), strides, "winograd_conv2d")?;
    let transform = WinogradTransform::for_filter(filter.shape()[0], filter.shape()[1])?;

    let padded = pad2d(input, padding)?;
    let params = validate_conv2d(padded.shape(), filter.shape(), strides, "winograd_conv2d")?;
    if params.is_empty() {
        return Ok(Tensor::zeros(&params.output_shape()));
    }

    let tables = transform.tables::<T>();
    let padded_data = padded.as_slice();
    let filter_data = filter.as_slice();
    let plane = params.out_h * params.out_w;

    // Every pixel's out-channel row is a disjoint slice of the output, so the
    // coordinate map needs no synchronization.
    let fill = |idx: usize, row: &mut [T]| {
        let b = idx / plane;
        let rem = idx % plane;
        let (i, j) = (rem / params.out_w, rem % params.out_w);
        winograd::compute_pixel(padded_data, filter_data, &params, &tables, b, i, j, row);
    };

    let mut output = vec![T::zero(); params.output_len()];

    #[cfg(feature = "rayon")]
    output
        .par_chunks_mut(params.c_out)
        .enumerate()
        .for_each(|(idx, row)| fill(idx, row));

    #[cfg(not(feature = "rayon"))]
    for (idx, row) in output.chunks_mut(params.c_out).enumerate() {
        fill(idx, row);
    }

    Tensor::from_vec(output, &params.output_shape())
}

/// Direct (brute-force) 2D convolution.
///
/// Same signature, layout, padding policy, and error taxonomy as
/// [`winograd_conv2d`], but computed as a plain sum-of-products loop nest and
/// without the 3×3 filter restriction. The two paths agree within
/// floating-point rounding for every valid 3×3 configuration.
pub fn direct_conv2d<T: Element>(
    input: &Tensor<T>,
    filter: &Tensor<T>,
    strides: (usize, usize),
    padding: PaddingMode,
) -> Result<Tensor<T>> {
    validate_conv2d(input.shape(), filter.shape(), strides, "direct_conv2d")?;

    let padded = pad2d(input, padding)?;
    let params = validate_conv2d(padded.shape(), filter.shape(), strides, "direct_conv2d")?;
    if params.is_empty() {
        return Ok(Tensor::zeros(&params.output_shape()));
    }

    let mut output = vec![T::zero(); params.output_len()];
    direct::conv2d_kernel(padded.as_slice(), filter.as_slice(), &params, &mut output);
    Tensor::from_vec(output, &params.output_shape())
}
