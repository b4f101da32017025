//! Zero-padding kernel for NHWC tensors

use crate::element::Element;

/// Copy `input` into the interior of a zero-initialized padded buffer.
///
/// Pads the height and width axes by one element of zeros on each side; the
/// batch and channel axes are untouched. `output` must already be
/// zero-initialized with shape `(batch, h + 2, w + 2, c)` flattened row-major.
///
/// Rows are contiguous in NHWC, so each `(batch, row)` pair is a single
/// `copy_from_slice` of `w * c` elements.
pub(crate) fn zero_pad2d_kernel<T: Element>(
    input: &[T],
    batch: usize,
    h: usize,
    w: usize,
    c: usize,
    output: &mut [T],
) {
    let (out_h, out_w) = (h + 2, w + 2);
    debug_assert_eq!(input.len(), batch * h * w * c);
    debug_assert_eq!(output.len(), batch * out_h * out_w * c);

    let row_len = w * c;
    for b in 0..batch {
        for y in 0..h {
            let src = (b * h + y) * row_len;
            let dst = ((b * out_h + y + 1) * out_w + 1) * c;
            output[dst..dst + row_len].copy_from_slice(&input[src..src + row_len]);
        }
    }
}
