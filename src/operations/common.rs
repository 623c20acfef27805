//! Moments and points on lines.

use crate::geometry::Plucker;
use crate::math::{homogeneous, Real, Vector3, Vector4};

/// Moment of one line about another, the reciprocal product.
///
/// Only meaningful as a physical moment for normalized lines.
#[must_use]
pub fn moment<T: Real>(p1: &Plucker<T>, p2: &Plucker<T>) -> T {
    p1.reciprocal_product(p2)
}

/// Moment of a line about a point, `m - point × l`.
///
/// Needs a normalized line.
#[must_use]
pub fn moment_about_point<T: Real>(line: &Plucker<T>, point: &Vector3<T>) -> Vector3<T> {
    line.m() - point.cross(&line.l())
}

/// Closest point on a normalized line to `point`.
#[must_use]
pub fn closest_point<T: Real>(line: &Plucker<T>, point: &Vector3<T>) -> Vector3<T> {
    let m = moment_about_point(line, point);
    point + line.l().cross(&m)
}

/// Closest point on a line to the origin, `(l × m : |l|²)`.
#[must_use]
pub fn closest_point_to_origin<T: Real>(line: &Plucker<T>) -> Vector4<T> {
    let l = line.l();
    homogeneous(&l.cross(&line.m()), l.norm_squared())
}

/// Point at parameter `t` along a line, `(l × m + t·l : |l|²)`.
///
/// `t = 0` is the point closest to the origin.
#[must_use]
pub fn point_on_line<T: Real>(line: &Plucker<T>, t: T) -> Vector4<T> {
    let l = line.l();
    homogeneous(&(l.cross(&line.m()) + l * t), l.norm_squared())
}
