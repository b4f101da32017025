//! Winograd minimal-filtering transform constants and per-pixel kernel
//!
//! The supported geometry is the F(2,3)-derived set for 3×3 filters: a 3×3
//! input tile is lifted into a 4×4 Winograd-domain tile, the 3×3 filter slice
//! likewise, and their elementwise product summed over both spatial axes
//! yields exactly the direct convolution of tile and filter. The pair of
//! transforms is constructed so that `Gᵀ · B = I₃`, which is the identity
//! making that reduction exact (see `test_transform_reconstruction_identity`).

use crate::element::Element;
use crate::error::{Error, Result};
use crate::kernels::matmul::matmul;
use crate::ops::Conv2dParams;

/// Spatial side of an input tile
pub const TILE: usize = 3;
/// Spatial side of a transformed (Winograd-domain) tile
pub const TRANSFORMED: usize = 4;

/// A fixed set of Winograd transform matrices for one filter geometry
///
/// Holds the four process-wide constants: the filter transform `G` (4×3) with
/// its transpose, and the input transform `B` (4×3) with its transpose. The
/// matrices are defined once per supported filter size and never recomputed;
/// selection is keyed on filter size so future geometries can be added
/// without touching the tile/accumulate loop.
#[derive(Debug)]
pub struct WinogradTransform {
    /// Supported filter size (height, width)
    pub filter_size: (usize, usize),
    filter: [f64; 12],
    filter_t: [f64; 12],
    input: [f64; 12],
    input_t: [f64; 12],
}

/// Transform set for 3×3 filters.
///
/// `G` is the classic Winograd F(2,3) filter transform; `B` is the matching
/// input transform satisfying `Gᵀ · B = I₃`.
static F2X3: WinogradTransform = WinogradTransform {
    filter_size: (3, 3),
    // G, 4x3
    #[rustfmt::skip]
    filter: [
        1.0,  0.0, 0.0,
        0.5,  0.5, 0.5,
        0.5, -0.5, 0.5,
        0.0,  0.0, 1.0,
    ],
    // Gᵀ, 3x4
    #[rustfmt::skip]
    filter_t: [
        1.0, 0.5,  0.5, 0.0,
        0.0, 0.5, -0.5, 0.0,
        0.0, 0.5,  0.5, 1.0,
    ],
    // B, 4x3
    #[rustfmt::skip]
    input: [
         0.5,  0.0, -0.5,
         0.5,  1.0,  0.5,
         0.5, -1.0,  0.5,
        -0.5,  0.0,  0.5,
    ],
    // Bᵀ, 3x4
    #[rustfmt::skip]
    input_t: [
         0.5, 0.5,  0.5, -0.5,
         0.0, 1.0, -1.0,  0.0,
        -0.5, 0.5,  0.5,  0.5,
    ],
};

impl WinogradTransform {
    /// Select the transform set for a filter size.
    ///
    /// Only 3×3 filters have a derived matrix set; any other size would make
    /// the fixed 3×3 tile reads disagree with the output-size arithmetic, so
    /// it is rejected as a shape mismatch.
    pub fn for_filter(filter_h: usize, filter_w: usize) -> Result<&'static WinogradTransform> {
        if (filter_h, filter_w) == F2X3.filter_size {
            Ok(&F2X3)
        } else {
            Err(Error::shape_mismatch(&[TILE, TILE], &[filter_h, filter_w]))
        }
    }

    /// Convert the constants to the element type used by one convolution call.
    pub fn tables<T: Element>(&self) -> TransformTables<T> {
        fn convert<T: Element>(src: &[f64; 12]) -> [T; 12] {
            let mut out = [T::zero(); 12];
            for (dst, &v) in out.iter_mut().zip(src.iter()) {
                *dst = T::from_f64(v);
            }
            out
        }
        TransformTables {
            filter: convert(&self.filter),
            filter_t: convert(&self.filter_t),
            input: convert(&self.input),
            input_t: convert(&self.input_t),
        }
    }
}

/// The transform constants converted to a concrete element type
///
/// Built once per convolution call and shared read-only by every worker.
pub struct TransformTables<T: Element> {
    /// Filter transform `G` (4×3), row-major
    pub filter: [T; 12],
    /// `Gᵀ` (3×4), row-major
    pub filter_t: [T; 12],
    /// Input transform `B` (4×3), row-major
    pub input: [T; 12],
    /// `Bᵀ` (3×4), row-major
    pub input_t: [T; 12],
}

/// Compute one output pixel: the out-channel vector at `(b, i, j)`.
///
/// Steps, per the transform-tile-accumulate pipeline:
/// 1. Extract the 3×3×c_in tile at `(i * stride_h, j * stride_w)` from the
///    padded input (the caller guarantees the tile is in bounds).
/// 2. Per in-channel plane `d`: `V = B · d · Bᵀ`, a 4×4 transformed tile.
/// 3. Per out-channel `k`, per in-channel slice `g = filter[:, :, ic, k]`:
///    `U = G · g · Gᵀ`.
/// 4. Accumulate `Σ (U ⊙ V)` over both spatial axes and over in-channels in
///    ascending order, yielding one scalar per out-channel.
///
/// Pure function of its inputs; writes only `out_row` (length `c_out`).
#[allow(clippy::too_many_arguments)]
pub(crate) fn compute_pixel<T: Element>(
    padded: &[T],
    filter: &[T],
    params: &Conv2dParams,
    tables: &TransformTables<T>,
    b: usize,
    i: usize,
    j: usize,
    out_row: &mut [T],
) {
    let Conv2dParams {
        in_h,
        in_w,
        c_in,
        c_out,
        stride_h,
        stride_w,
        ..
    } = *params;
    debug_assert_eq!(out_row.len(), c_out);

    let row0 = i * stride_h;
    let col0 = j * stride_w;

    // Transformed input tiles, one 4x4 plane per in-channel. The tile's
    // channel axis survives the transform; channels are reduced only in the
    // accumulation below.
    let mut v_tiles = vec![T::zero(); c_in * TRANSFORMED * TRANSFORMED];
    let mut plane = [T::zero(); TILE * TILE];
    let mut tmp = [T::zero(); TRANSFORMED * TILE];
    for ic in 0..c_in {
        for r in 0..TILE {
            for c in 0..TILE {
                plane[r * TILE + c] =
                    padded[((b * in_h + row0 + r) * in_w + col0 + c) * c_in + ic];
            }
        }
        let v = &mut v_tiles[ic * 16..(ic + 1) * 16];
        matmul(&tables.input, &plane, &mut tmp, 4, 3, 3);
        matmul(&tmp, &tables.input_t, v, 4, 4, 3);
    }

    let mut u = [T::zero(); TRANSFORMED * TRANSFORMED];
    for (k, out) in out_row.iter_mut().enumerate() {
        let mut acc = T::zero();
        for ic in 0..c_in {
            // Filter layout (fh, fw, c_in, c_out), sliced at [:, :, ic, k]
            for r in 0..TILE {
                for c in 0..TILE {
                    plane[r * TILE + c] = filter[((r * TILE + c) * c_in + ic) * c_out + k];
                }
            }
            matmul(&tables.filter, &plane, &mut tmp, 4, 3, 3);
            matmul(&tmp, &tables.filter_t, &mut u, 4, 4, 3);

            let v = &v_tiles[ic * 16..(ic + 1) * 16];
            for e in 0..16 {
                acc = acc + u[e] * v[e];
            }
        }
        *out = acc;
    }
}
