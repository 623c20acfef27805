//! Normalisation and distance formulas.

use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::{Plane, Plucker};
use crate::math::relational::almost_zero;
use crate::math::{Real, Vector3, Vector4};

use super::common::closest_point;
use super::query::{are_parallel, line_contains_point};

/// Rescales a line to a unit-length direction.
///
/// A line at infinity (`l = 0`) yields non-finite coordinates; use
/// [`try_normalize`] when that can happen.
#[must_use]
pub fn normalize<T: Real>(line: &Plucker<T>) -> Plucker<T> {
    Plucker::from_coord(line.coord() / line.l().norm())
}

/// Rescales a line to a unit-length direction.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if the direction vanishes within
/// `tolerance`.
pub fn try_normalize<T: Real>(line: &Plucker<T>, tolerance: T) -> Result<Plucker<T>> {
    let len = line.l().norm();
    if almost_zero(len, tolerance) {
        debug!("cannot normalize a line at infinity");
        return Err(GeometryError::ZeroVector);
    }
    Ok(Plucker::from_coord(line.coord() / len))
}

/// Squared distance from the origin to a line, `|m|² / |l|²`.
#[must_use]
pub fn squared_distance_from_origin<T: Real>(line: &Plucker<T>) -> T {
    line.m().norm_squared() / line.l().norm_squared()
}

/// Distance from the origin to a line.
#[must_use]
pub fn distance_from_origin<T: Real>(line: &Plucker<T>) -> T {
    squared_distance_from_origin(line).sqrt()
}

/// Distance between two skew lines, `|p1 · p2| / |l1 × l2|`.
///
/// Undefined for parallel lines (the denominator vanishes).
#[must_use]
pub fn distance_between_skew_lines<T: Real>(p1: &Plucker<T>, p2: &Plucker<T>) -> T {
    p1.reciprocal_product(p2).abs() / p1.l().cross(&p2.l()).norm()
}

/// Distance between two parallel lines.
///
/// `p2` is first rescaled so its direction matches `p1` in length and
/// orientation; the moments then differ by `l1 × (offset)`.
#[must_use]
pub fn distance_between_parallel_lines<T: Real>(p1: &Plucker<T>, p2: &Plucker<T>) -> T {
    let (l1, l2) = (p1.l(), p2.l());
    let ratio = l2.norm() / l1.norm();
    let s = if l1.dot(&l2) < T::zero() { -ratio } else { ratio };
    l1.cross(&(p1.m() - p2.m() / s)).norm() / l1.norm_squared()
}

/// Shortest distance between two lines of any configuration.
#[must_use]
pub fn distance_between_lines<T: Real>(p1: &Plucker<T>, p2: &Plucker<T>, tolerance: T) -> T {
    if are_parallel(p1, p2, tolerance) {
        distance_between_parallel_lines(p1, p2)
    } else {
        distance_between_skew_lines(p1, p2)
    }
}

/// Shortest distance from a homogeneous point to a line.
///
/// Measured against the plane through the line that is perpendicular to
/// the common plane of the line and the point.
#[must_use]
pub fn distance_to_point<T: Real>(line: &Plucker<T>, point: &Vector4<T>, tolerance: T) -> T {
    if line_contains_point(line, point, tolerance) {
        return T::zero();
    }

    let (l, m) = (line.l(), line.m());
    let n1 = l.cross(&point.xyz()) + m * point.w;
    let n2 = l.cross(&n1);
    let plane = Plane::from_normal(n2, -m.dot(&n1));
    (plane.evaluate(point) / (n2.norm() * point.w)).abs()
}

/// Shortest distance from an affine point to a normalized line.
#[must_use]
pub fn distance_to_point_normalized<T: Real>(line: &Plucker<T>, point: &Vector3<T>) -> T {
    (closest_point(line, point) - point).norm()
}
