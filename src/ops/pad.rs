//! Padding stage for NHWC input tensors

use crate::element::Element;
use crate::error::{Error, Result};
use crate::kernels::pad::zero_pad2d_kernel;
use crate::ops::validate_4d_tensor;
use crate::tensor::Tensor;
use std::str::FromStr;

/// Selects how the input tensor is padded before convolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingMode {
    /// No padding - output is smaller than input.
    #[default]
    Valid,
    /// One row/column of zeros on each side of the height and width axes.
    Same,
}

impl FromStr for PaddingMode {
    type Err = Error;

    /// Parse the conventional padding-mode names, case-insensitively.
    ///
    /// Anything other than `"SAME"` or `"VALID"` is an invalid argument.
    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("same") {
            Ok(PaddingMode::Same)
        } else if s.eq_ignore_ascii_case("valid") {
            Ok(PaddingMode::Valid)
        } else {
            Err(Error::InvalidArgument {
                arg: "padding",
                reason: format!("expected SAME or VALID, got '{}'", s),
            })
        }
    }
}

/// Apply the fixed symmetric zero-pad policy to a `(batch, h, w, c)` tensor.
///
/// - [`PaddingMode::Same`] returns a new `(batch, h + 2, w + 2, c)` tensor
///   with a single zero border on the spatial axes; batch and channel axes
///   are untouched.
/// - [`PaddingMode::Valid`] returns a zero-copy view of the input.
///
/// Returns [`Error::InvalidArgument`] for non-4D inputs.
pub fn pad2d<T: Element>(input: &Tensor<T>, mode: PaddingMode) -> Result<Tensor<T>> {
    validate_4d_tensor(input.shape(), "input", "pad2d")?;

    match mode {
        PaddingMode::Valid => Ok(input.clone()),
        PaddingMode::Same => {
            let (batch, h, w, c) = (
                input.shape()[0],
                input.shape()[1],
                input.shape()[2],
                input.shape()[3],
            );
            let mut output = vec![T::zero(); batch * (h + 2) * (w + 2) * c];
            zero_pad2d_kernel(input.as_slice(), batch, h, w, c, &mut output);
            Tensor::from_vec(output, &[batch, h + 2, w + 2, c])
        }
    }
}
