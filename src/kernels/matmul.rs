//! Dense matrix multiplication kernel
//!
//! The Winograd transforms are plain matrix congruences, so all they need is
//! an exact-semantics dense matmul over small row-major matrices. Summation
//! runs in ascending `k` order; no rounding or re-association is applied
//! beyond standard floating-point addition.

use crate::element::Element;

/// Matrix multiplication: `out = a @ b`
///
/// # Arguments
/// * `a` - matrix A (`m` × `k`), row-major
/// * `b` - matrix B (`k` × `n`), row-major
/// * `out` - output matrix C (`m` × `n`), row-major, fully overwritten
/// * `m`, `n`, `k` - matrix dimensions
///
/// # Panics
///
/// Debug-asserts that the slice lengths match the dimensions. `out` must not
/// alias `a` or `b`, which the borrow checker already guarantees.
pub fn matmul<T: Element>(a: &[T], b: &[T], out: &mut [T], m: usize, n: usize, k: usize) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(out.len(), m * n);

    for i in 0..m {
        for j in 0..n {
            let mut sum = T::zero();
            for p in 0..k {
                sum = sum + a[i * k + p] * b[p * n + j];
            }
            out[i * n + j] = sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matmul_2x2() {
        // [[1, 2], [3, 4]] @ [[5, 6], [7, 8]] = [[19, 22], [43, 50]]
        let a = [1.0f32, 2.0, 3.0, 4.0];
        let b = [5.0f32, 6.0, 7.0, 8.0];
        let mut out = [0.0f32; 4];
        matmul(&a, &b, &mut out, 2, 2, 2);
        assert_eq!(out, [19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_matmul_rectangular() {
        // (2x3) @ (3x2) = (2x2)
        let a = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = [7.0f64, 8.0, 9.0, 10.0, 11.0, 12.0];
        let mut out = [0.0f64; 4];
        matmul(&a, &b, &mut out, 2, 2, 3);
        assert_eq!(out, [58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn test_matmul_identity() {
        let eye = [1.0f32, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        let a = [2.0f32, -1.0, 0.5, 3.0, 0.0, 1.0, -2.0, 4.0, 0.25];
        let mut out = [0.0f32; 9];
        matmul(&eye, &a, &mut out, 3, 3, 3);
        assert_eq!(out, a);
    }
}
