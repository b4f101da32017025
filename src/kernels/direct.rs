//! Direct (brute-force) convolution kernel
//!
//! Reference path with the same semantics as the Winograd kernel: a plain
//! sum-of-products loop nest over already-padded NHWC input. Used as the
//! correctness oracle in tests and exposed through
//! [`crate::ops::direct_conv2d`] for callers that need arbitrary filter
//! sizes.

use crate::element::Element;
use crate::ops::Conv2dParams;

/// Direct 2D convolution over a padded input.
///
/// Input layout `(batch, in_h, in_w, c_in)`, filter layout
/// `(filter_h, filter_w, c_in, c_out)`, output layout
/// `(batch, out_h, out_w, c_out)`, all flat row-major. Every output element
/// is written exactly once. Accumulation runs over `(ky, kx, ic)` in
/// ascending order.
pub(crate) fn conv2d_kernel<T: Element>(
    padded: &[T],
    filter: &[T],
    params: &Conv2dParams,
    output: &mut [T],
) {
    let Conv2dParams {
        batch,
        in_h,
        in_w,
        c_in,
        c_out,
        filter_h,
        filter_w,
        stride_h,
        stride_w,
        out_h,
        out_w,
    } = *params;
    debug_assert_eq!(output.len(), batch * out_h * out_w * c_out);

    for b in 0..batch {
        for oy in 0..out_h {
            for ox in 0..out_w {
                for k in 0..c_out {
                    let mut sum = T::zero();
                    for ky in 0..filter_h {
                        for kx in 0..filter_w {
                            let iy = oy * stride_h + ky;
                            let ix = ox * stride_w + kx;
                            for ic in 0..c_in {
                                let in_val = padded[((b * in_h + iy) * in_w + ix) * c_in + ic];
                                let w_val =
                                    filter[((ky * filter_w + kx) * c_in + ic) * c_out + k];
                                sum = sum + in_val * w_val;
                            }
                        }
                    }
                    output[((b * out_h + oy) * out_w + ox) * c_out + k] = sum;
                }
            }
        }
    }
}
