//! Shared validation and shape arithmetic for convolution operations

use crate::error::{Error, Result};

/// Validates that a tensor is 4-dimensional.
#[inline]
pub(crate) fn validate_4d_tensor(
    shape: &[usize],
    arg_name: &'static str,
    op: &'static str,
) -> Result<()> {
    if shape.len() != 4 {
        return Err(Error::InvalidArgument {
            arg: arg_name,
            reason: format!("{} expects 4D tensor, got {}D", op, shape.len()),
        });
    }
    Ok(())
}

/// Validates that a stride is non-zero.
#[inline]
pub(crate) fn validate_positive(value: usize, name: &'static str, op: &'static str) -> Result<()> {
    if value == 0 {
        return Err(Error::InvalidArgument {
            arg: name,
            reason: format!("{} requires {} > 0, got 0", op, name),
        });
    }
    Ok(())
}

/// Computes output size for a single spatial dimension.
///
/// `output_size = (input_size - filter_size) / stride + 1`, floor division,
/// clamped to 0 when the filter does not fit.
#[inline]
pub(crate) fn compute_output_size(input_size: usize, filter_size: usize, stride: usize) -> usize {
    if input_size < filter_size {
        0
    } else {
        (input_size - filter_size) / stride + 1
    }
}

/// Resolved dimensions for one conv2d call, after validation and padding.
///
/// `in_h`/`in_w` are the PADDED spatial dimensions; the kernels never see the
/// unpadded input.
#[derive(Debug, Clone, Copy)]
pub struct Conv2dParams {
    /// Batch size
    pub batch: usize,
    /// Padded input height
    pub in_h: usize,
    /// Padded input width
    pub in_w: usize,
    /// Input channels
    pub c_in: usize,
    /// Output channels
    pub c_out: usize,
    /// Filter height
    pub filter_h: usize,
    /// Filter width
    pub filter_w: usize,
    /// Stride along height
    pub stride_h: usize,
    /// Stride along width
    pub stride_w: usize,
    /// Output height
    pub out_h: usize,
    /// Output width
    pub out_w: usize,
}

impl Conv2dParams {
    /// Output tensor shape `(batch, out_h, out_w, c_out)`.
    pub fn output_shape(&self) -> [usize; 4] {
        [self.batch, self.out_h, self.out_w, self.c_out]
    }

    /// Total number of output elements.
    pub fn output_len(&self) -> usize {
        self.batch * self.out_h * self.out_w * self.c_out
    }

    /// Whether any output dimension is empty.
    pub fn is_empty(&self) -> bool {
        self.output_len() == 0
    }
}

/// Validates shapes and strides, then resolves the dimensions of one conv2d
/// call against the padded input shape.
///
/// Input layout `(batch, h, w, c_in)`, filter layout
/// `(filter_h, filter_w, c_in, c_out)`. The in-channel counts of input and
/// filter must agree; strides must be non-zero.
pub(crate) fn validate_conv2d(
    padded_shape: &[usize],
    filter_shape: &[usize],
    strides: (usize, usize),
    op: &'static str,
) -> Result<Conv2dParams> {
    validate_4d_tensor(padded_shape, "input", op)?;
    validate_4d_tensor(filter_shape, "filter", op)?;
    validate_positive(strides.0, "stride_h", op)?;
    validate_positive(strides.1, "stride_w", op)?;

    let (batch, in_h, in_w, c_in) = (
        padded_shape[0],
        padded_shape[1],
        padded_shape[2],
        padded_shape[3],
    );
    let (filter_h, filter_w, filter_c_in, c_out) = (
        filter_shape[0],
        filter_shape[1],
        filter_shape[2],
        filter_shape[3],
    );

    if filter_c_in != c_in {
        return Err(Error::shape_mismatch(
            &[filter_h, filter_w, c_in, c_out],
            filter_shape,
        ));
    }

    Ok(Conv2dParams {
        batch,
        in_h,
        in_w,
        c_in,
        c_out,
        filter_h,
        filter_w,
        stride_h: strides.0,
        stride_w: strides.1,
        out_h: compute_output_size(in_h, filter_h, strides.0),
        out_w: compute_output_size(in_w, filter_w, strides.1),
    })
}
