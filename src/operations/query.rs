//! Boolean predicates over lines, planes and homogeneous points.

use crate::geometry::{Plane, Plucker};
use crate::math::relational::{
    almost_equal, almost_zero, are_parallel_vectors, are_perpendicular_vectors, vec_almost_equal,
    vec_almost_zero,
};
use crate::math::{homogeneous, Real, Vector4};

/// Returns `true` if the direction of a line vanishes.
#[must_use]
pub fn is_at_infinity<T: Real>(line: &Plucker<T>, tolerance: T) -> bool {
    vec_almost_zero(&line.l(), tolerance)
}

/// Returns `true` if the moment of a line vanishes.
#[must_use]
pub fn passes_through_origin<T: Real>(line: &Plucker<T>, tolerance: T) -> bool {
    vec_almost_zero(&line.m(), tolerance)
}

/// Returns `true` if two coordinate sets describe the same line.
///
/// The lines may differ by a common non-zero factor, including a negative
/// one (opposite orientation), but not by separate factors for `l` and `m`.
#[must_use]
pub fn are_same<T: Real>(p1: &Plucker<T>, p2: &Plucker<T>, tolerance: T) -> bool {
    let (l1, m1) = (p1.l(), p1.m());
    let (l2, m2) = (p2.l(), p2.m());

    if !are_parallel_vectors(&l1, &l2, tolerance) || !are_parallel_vectors(&m1, &m2, tolerance) {
        return false;
    }

    // Lines through the origin carry no moment scale to compare.
    if vec_almost_zero(&m1, tolerance) && vec_almost_zero(&m2, tolerance) {
        return true;
    }

    if l1.dot(&l2).is_sign_negative() != m1.dot(&m2).is_sign_negative() {
        return false;
    }

    // |l2| / |l1| == |m2| / |m1|, cross-multiplied so a vanishing norm is safe.
    almost_equal(l2.norm() * m1.norm(), l1.norm() * m2.norm(), tolerance)
}

/// Returns `true` if the directions of two lines are perpendicular.
#[must_use]
pub fn are_perpendicular<T: Real>(p1: &Plucker<T>, p2: &Plucker<T>, tolerance: T) -> bool {
    almost_zero(p1.l().dot(&p2.l()), tolerance)
}

/// Returns `true` if the directions of two lines are parallel.
#[must_use]
pub fn are_parallel<T: Real>(p1: &Plucker<T>, p2: &Plucker<T>, tolerance: T) -> bool {
    are_parallel_vectors(&p1.l(), &p2.l(), tolerance)
}

/// Returns `true` if two lines lie in a common plane.
#[must_use]
pub fn are_coplanar<T: Real>(p1: &Plucker<T>, p2: &Plucker<T>, tolerance: T) -> bool {
    almost_zero(p1.reciprocal_product(p2), tolerance)
}

/// Returns `true` if two lines share no common plane.
#[must_use]
pub fn are_skew<T: Real>(p1: &Plucker<T>, p2: &Plucker<T>, tolerance: T) -> bool {
    !are_coplanar(p1, p2, tolerance)
}

/// Returns `true` if two lines meet in exactly one point.
///
/// Parallel and coincident lines are coplanar but do not count.
#[must_use]
pub fn has_intersection<T: Real>(p1: &Plucker<T>, p2: &Plucker<T>, tolerance: T) -> bool {
    are_coplanar(p1, p2, tolerance) && !are_parallel(p1, p2, tolerance)
}

/// Returns `true` if a line passes through a homogeneous point,
/// `xyz × l ≈ w·m`.
#[must_use]
pub fn line_contains_point<T: Real>(line: &Plucker<T>, point: &Vector4<T>, tolerance: T) -> bool {
    let v = point.xyz().cross(&line.l());
    vec_almost_equal(&v, &(line.m() * point.w), tolerance)
}

/// Returns `true` if a homogeneous point satisfies the plane equation.
#[must_use]
pub fn plane_contains_point<T: Real>(plane: &Plane<T>, point: &Vector4<T>, tolerance: T) -> bool {
    almost_zero(plane.evaluate(point), tolerance)
}

/// Returns `true` if a line lies in a plane.
#[must_use]
pub fn plane_contains_line<T: Real>(plane: &Plane<T>, line: &Plucker<T>, tolerance: T) -> bool {
    let l = line.l();
    if !are_perpendicular_vectors(&plane.normal(), &l, tolerance) {
        return false;
    }

    let point = homogeneous(&l.cross(&line.m()), l.norm_squared());
    plane_contains_point(plane, &point, tolerance)
}

/// Relationship between two lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePairRelation {
    /// Both coordinate sets describe the same line.
    Coincident,
    /// Distinct lines with parallel directions.
    Parallel,
    /// Lines meeting in a single point.
    Intersecting,
    /// Lines that share no plane.
    Skew,
}

/// Classifies how two lines relate to one another.
#[must_use]
pub fn classify_lines<T: Real>(p1: &Plucker<T>, p2: &Plucker<T>, tolerance: T) -> LinePairRelation {
    if are_same(p1, p2, tolerance) {
        LinePairRelation::Coincident
    } else if are_parallel(p1, p2, tolerance) {
        LinePairRelation::Parallel
    } else if are_coplanar(p1, p2, tolerance) {
        LinePairRelation::Intersecting
    } else {
        LinePairRelation::Skew
    }
}
