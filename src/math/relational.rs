//! Tolerance-based comparisons for scalars and fixed-size vectors.

use nalgebra::SMatrix;

use super::{Real, Vector3};

/// Returns `true` if `|lhs - rhs| <= max(abs_tolerance, rel_tolerance * max(|lhs|, |rhs|))`.
#[must_use]
pub fn almost_equal_with<T: Real>(lhs: T, rhs: T, rel_tolerance: T, abs_tolerance: T) -> bool {
    (lhs - rhs).abs() <= abs_tolerance.max(rel_tolerance * lhs.abs().max(rhs.abs()))
}

/// Returns `true` if `|lhs - rhs| <= tolerance * max(1, |lhs|, |rhs|)`.
///
/// The bound is absolute for values below one and relative above.
#[must_use]
pub fn almost_equal<T: Real>(lhs: T, rhs: T, tolerance: T) -> bool {
    let scale = T::one().max(lhs.abs().max(rhs.abs()));
    (lhs - rhs).abs() <= tolerance * scale
}

/// Returns `true` if `|x| <= tolerance`.
#[must_use]
pub fn almost_zero<T: Real>(x: T, tolerance: T) -> bool {
    x.abs() <= tolerance
}

/// Component-wise [`almost_equal_with`]; every component must pass.
#[must_use]
pub fn vec_almost_equal_with<T: Real, const R: usize, const C: usize>(
    lhs: &SMatrix<T, R, C>,
    rhs: &SMatrix<T, R, C>,
    rel_tolerance: T,
    abs_tolerance: T,
) -> bool {
    lhs.iter()
        .zip(rhs.iter())
        .all(|(&a, &b)| almost_equal_with(a, b, rel_tolerance, abs_tolerance))
}

/// Component-wise [`almost_equal`]; every component must pass.
#[must_use]
pub fn vec_almost_equal<T: Real, const R: usize, const C: usize>(
    lhs: &SMatrix<T, R, C>,
    rhs: &SMatrix<T, R, C>,
    tolerance: T,
) -> bool {
    lhs.iter()
        .zip(rhs.iter())
        .all(|(&a, &b)| almost_equal(a, b, tolerance))
}

/// Component-wise [`almost_zero`]; every component must pass.
#[must_use]
pub fn vec_almost_zero<T: Real, const R: usize, const C: usize>(
    x: &SMatrix<T, R, C>,
    tolerance: T,
) -> bool {
    x.iter().all(|&v| almost_zero(v, tolerance))
}

/// Returns `true` if `v1 × v2` vanishes within tolerance.
#[must_use]
pub fn are_parallel_vectors<T: Real>(v1: &Vector3<T>, v2: &Vector3<T>, tolerance: T) -> bool {
    almost_zero(v1.cross(v2).norm(), tolerance)
}

/// Returns `true` if `v1 · v2` vanishes within tolerance.
#[must_use]
pub fn are_perpendicular_vectors<T: Real>(
    v1: &Vector3<T>,
    v2: &Vector3<T>,
    tolerance: T,
) -> bool {
    almost_zero(v1.dot(v2), tolerance)
}
