//! Integration tests for the convolution pipeline.
//!
//! The core correctness law: winograd_conv2d and direct_conv2d agree within
//! floating tolerance for every valid 3x3 configuration, across padding
//! modes, strides, batches, and channel counts.

use convr::error::Error;
use convr::ops::{direct_conv2d, pad2d, winograd_conv2d, PaddingMode};
use convr::tensor::Tensor;

/// Deterministic non-trivial test data in roughly [-1, 1].
fn ramp_f32(n: usize) -> Vec<f32> {
    (0..n)
        .map(|i| ((i * 31 + 7) % 1000) as f32 / 500.0 - 1.0)
        .collect()
}

fn ramp_f64(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| ((i * 31 + 7) % 1000) as f64 / 500.0 - 1.0)
        .collect()
}

fn assert_close_f32(got: &[f32], want: &[f32]) {
    assert_eq!(got.len(), want.len());
    for (idx, (g, w)) in got.iter().zip(want.iter()).enumerate() {
        let tol = 1e-5 * (1.0 + w.abs());
        assert!((g - w).abs() <= tol, "index {idx}: got {g}, want {w}");
    }
}

// ============================================================================
// Output-shape laws
// ============================================================================

#[test]
fn test_valid_output_shape() {
    let input = Tensor::from_vec(ramp_f32(2 * 7 * 6 * 3), &[2, 7, 6, 3]).unwrap();
    let filter = Tensor::from_vec(ramp_f32(3 * 3 * 3 * 4), &[3, 3, 3, 4]).unwrap();

    let output = winograd_conv2d(&input, &filter, (2, 1), PaddingMode::Valid).unwrap();
    // (7-3)/2+1 = 3, (6-3)/1+1 = 4
    assert_eq!(output.shape(), &[2, 3, 4, 4]);
}

#[test]
fn test_same_output_shape() {
    let input = Tensor::from_vec(ramp_f32(5 * 5), &[1, 5, 5, 1]).unwrap();
    let filter = Tensor::from_vec(ramp_f32(9), &[3, 3, 1, 1]).unwrap();

    // SAME pads each spatial axis by 2 before the floor formula applies:
    // (7-3)/1+1 = 5
    let output = winograd_conv2d(&input, &filter, (1, 1), PaddingMode::Same).unwrap();
    assert_eq!(output.shape(), &[1, 5, 5, 1]);
}

#[test]
fn test_padding_valid_is_identity() {
    let input = Tensor::from_vec(ramp_f32(2 * 4 * 4 * 2), &[2, 4, 4, 2]).unwrap();
    let out = pad2d(&input, PaddingMode::Valid).unwrap();
    assert_eq!(out.shape(), input.shape());
    assert_eq!(out.to_vec(), input.to_vec());
}

// ============================================================================
// Winograd == direct convolution
// ============================================================================

#[test]
fn test_winograd_matches_direct_multichannel() {
    let input = Tensor::from_vec(ramp_f32(2 * 6 * 5 * 3), &[2, 6, 5, 3]).unwrap();
    let filter = Tensor::from_vec(ramp_f32(3 * 3 * 3 * 4), &[3, 3, 3, 4]).unwrap();

    let fast = winograd_conv2d(&input, &filter, (1, 1), PaddingMode::Valid).unwrap();
    let slow = direct_conv2d(&input, &filter, (1, 1), PaddingMode::Valid).unwrap();

    assert_eq!(fast.shape(), slow.shape());
    assert_close_f32(fast.as_slice(), slow.as_slice());
}

#[test]
fn test_winograd_matches_direct_same_padding() {
    let input = Tensor::from_vec(ramp_f32(1 * 5 * 7 * 2), &[1, 5, 7, 2]).unwrap();
    let filter = Tensor::from_vec(ramp_f32(3 * 3 * 2 * 3), &[3, 3, 2, 3]).unwrap();

    let fast = winograd_conv2d(&input, &filter, (1, 1), PaddingMode::Same).unwrap();
    let slow = direct_conv2d(&input, &filter, (1, 1), PaddingMode::Same).unwrap();

    assert_eq!(fast.shape(), &[1, 5, 7, 3]);
    assert_close_f32(fast.as_slice(), slow.as_slice());
}

#[test]
fn test_winograd_matches_direct_strided() {
    let input = Tensor::from_vec(ramp_f32(3 * 9 * 8 * 2), &[3, 9, 8, 2]).unwrap();
    let filter = Tensor::from_vec(ramp_f32(3 * 3 * 2 * 2), &[3, 3, 2, 2]).unwrap();

    for strides in [(2, 2), (2, 1), (3, 2)] {
        let fast = winograd_conv2d(&input, &filter, strides, PaddingMode::Valid).unwrap();
        let slow = direct_conv2d(&input, &filter, strides, PaddingMode::Valid).unwrap();
        assert_eq!(fast.shape(), slow.shape());
        assert_close_f32(fast.as_slice(), slow.as_slice());
    }
}

#[test]
fn test_winograd_matches_direct_f64() {
    let input = Tensor::from_vec(ramp_f64(1 * 6 * 6 * 2), &[1, 6, 6, 2]).unwrap();
    let filter = Tensor::from_vec(ramp_f64(3 * 3 * 2 * 2), &[3, 3, 2, 2]).unwrap();

    let fast = winograd_conv2d(&input, &filter, (1, 1), PaddingMode::Same).unwrap();
    let slow = direct_conv2d(&input, &filter, (1, 1), PaddingMode::Same).unwrap();

    for (g, w) in fast.as_slice().iter().zip(slow.as_slice().iter()) {
        assert!((g - w).abs() <= 1e-12 * (1.0 + w.abs()), "got {g}, want {w}");
    }
}

// ============================================================================
// Degenerate inputs
// ============================================================================

#[test]
fn test_zero_input_gives_zero_output() {
    let input = Tensor::<f32>::zeros(&[1, 5, 5, 2]);
    let filter = Tensor::from_vec(ramp_f32(3 * 3 * 2 * 3), &[3, 3, 2, 3]).unwrap();

    let output = winograd_conv2d(&input, &filter, (1, 1), PaddingMode::Same).unwrap();
    assert!(output.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn test_zero_filter_gives_zero_output() {
    let input = Tensor::from_vec(ramp_f32(1 * 5 * 5 * 2), &[1, 5, 5, 2]).unwrap();
    let filter = Tensor::<f32>::zeros(&[3, 3, 2, 3]);

    let output = winograd_conv2d(&input, &filter, (1, 1), PaddingMode::Valid).unwrap();
    assert!(output.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn test_all_ones_scenario() {
    // Input (1,5,5,1) of ones, filter (3,3,1,1) of ones, VALID:
    // every output pixel is the sum of a 3x3 tile of ones, i.e. 9.
    let input = Tensor::<f32>::ones(&[1, 5, 5, 1]);
    let filter = Tensor::<f32>::ones(&[3, 3, 1, 1]);

    let output = winograd_conv2d(&input, &filter, (1, 1), PaddingMode::Valid).unwrap();
    assert_eq!(output.shape(), &[1, 3, 3, 1]);
    for &v in output.as_slice() {
        assert!((v - 9.0).abs() < 1e-6, "got {v}");
    }
}

#[test]
fn test_empty_batch() {
    let input = Tensor::<f32>::zeros(&[0, 5, 5, 1]);
    let filter = Tensor::<f32>::ones(&[3, 3, 1, 1]);

    let output = winograd_conv2d(&input, &filter, (1, 1), PaddingMode::Valid).unwrap();
    assert_eq!(output.shape(), &[0, 3, 3, 1]);
    assert!(output.is_empty());
}

// ============================================================================
// Error taxonomy
// ============================================================================

#[test]
fn test_invalid_padding_string() {
    let result = "SOME".parse::<PaddingMode>();
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

#[test]
fn test_channel_mismatch() {
    // Input has 3 in-channels, filter expects 4
    let input = Tensor::<f32>::ones(&[1, 5, 5, 3]);
    let filter = Tensor::<f32>::ones(&[3, 3, 4, 2]);

    let result = winograd_conv2d(&input, &filter, (1, 1), PaddingMode::Valid);
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
}

#[test]
fn test_zero_stride_rejected() {
    let input = Tensor::<f32>::ones(&[1, 5, 5, 1]);
    let filter = Tensor::<f32>::ones(&[3, 3, 1, 1]);

    let result = winograd_conv2d(&input, &filter, (0, 0), PaddingMode::Valid);
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

#[test]
fn test_non_3x3_filter_rejected_by_winograd_only() {
    let input = Tensor::from_vec(ramp_f32(1 * 6 * 6 * 1), &[1, 6, 6, 1]).unwrap();
    let filter = Tensor::from_vec(ramp_f32(4 * 4), &[4, 4, 1, 1]).unwrap();

    let result = winograd_conv2d(&input, &filter, (1, 1), PaddingMode::Valid);
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));

    // The direct path is not tied to the 3x3 transform geometry
    let output = direct_conv2d(&input, &filter, (1, 1), PaddingMode::Valid).unwrap();
    assert_eq!(output.shape(), &[1, 3, 3, 1]);
}
