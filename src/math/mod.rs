pub mod relational;

use nalgebra::RealField;

/// Scalar type accepted by every geometric type in this crate.
///
/// Implemented for `f32` and `f64`. The associated tolerances are the
/// values recommended for absolute and relative comparisons at that
/// precision; every function still takes its tolerance explicitly.
pub trait Real: RealField + Copy {
    /// Recommended absolute tolerance.
    const DEFAULT_TOLERANCE: Self;
    /// Recommended relative tolerance.
    const DEFAULT_RELATIVE_TOLERANCE: Self;

    /// Widens the value for error reporting.
    fn to_f64(self) -> f64;
}

impl Real for f32 {
    const DEFAULT_TOLERANCE: f32 = 1e-4;
    const DEFAULT_RELATIVE_TOLERANCE: f32 = 1e-5;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Real for f64 {
    const DEFAULT_TOLERANCE: f64 = 1e-8;
    const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-5;

    fn to_f64(self) -> f64 {
        self
    }
}

/// 3D point type.
pub type Point3<T = f64> = nalgebra::Point3<T>;

/// 3D vector type.
pub type Vector3<T = f64> = nalgebra::Vector3<T>;

/// Homogeneous point or plane coordinates.
pub type Vector4<T = f64> = nalgebra::Vector4<T>;

/// Packed Plücker coordinates `(l, m)`.
pub type Vector6<T = f64> = nalgebra::Vector6<T>;

/// Appends a homogeneous weight to a 3-vector.
#[must_use]
pub fn homogeneous<T: Real>(v: &Vector3<T>, w: T) -> Vector4<T> {
    Vector4::new(v.x, v.y, v.z, w)
}

/// Divides a homogeneous point through by its weight.
///
/// Returns `None` for points at infinity (`w == 0`).
#[must_use]
pub fn hnormalized<T: Real>(v: Vector4<T>) -> Option<Point3<T>> {
    Point3::from_homogeneous(v)
}

/// Converts an `f64` literal into the scalar type under test.
#[cfg(test)]
pub(crate) fn lit<T: Real>(x: f64) -> T {
    nalgebra::convert(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homogeneous_round_trip() {
        let v = homogeneous(&Vector3::new(1.0, 2.0, 3.0), 2.0);
        assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 2.0));
        assert_eq!(hnormalized(v), Some(Point3::new(0.5, 1.0, 1.5)));
    }

    #[test]
    fn point_at_infinity_has_no_affine_form() {
        assert_eq!(hnormalized(Vector4::new(1.0_f32, 0.0, 0.0, 0.0)), None);
    }
}
