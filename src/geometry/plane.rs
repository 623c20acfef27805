use std::ops::{Mul, MulAssign, Neg};

use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::relational::almost_zero;
use crate::math::{Point3, Real, Vector3, Vector4};

/// A plane in homogeneous coordinates.
///
/// Stores the coefficients `(a, b, c, d)` of the implicit equation
/// `a·x + b·y + c·z + d = 0`. The normal `(a, b, c)` is not required to be
/// unit length, and a zero normal (a degenerate plane) is representable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane<T = f64> {
    coord: Vector4<T>,
}

impl<T: Real> Plane<T> {
    /// Creates a plane from its four coefficients.
    #[must_use]
    pub fn new(a: T, b: T, c: T, d: T) -> Self {
        Self::from_coord(Vector4::new(a, b, c, d))
    }

    /// Creates a plane from a normal vector and the signed offset `d`.
    #[must_use]
    pub fn from_normal(normal: Vector3<T>, d: T) -> Self {
        Self::new(normal.x, normal.y, normal.z, d)
    }

    /// Creates a plane from its packed homogeneous coordinates.
    #[must_use]
    pub fn from_coord(coord: Vector4<T>) -> Self {
        Self { coord }
    }

    /// Creates the plane through `point` with the given `normal`.
    #[must_use]
    pub fn from_point_normal(point: &Point3<T>, normal: Vector3<T>) -> Self {
        let d = -normal.dot(&point.coords);
        Self::from_normal(normal, d)
    }

    /// Returns the x coefficient of the normal.
    #[must_use]
    pub fn a(&self) -> T {
        self.coord.x
    }

    /// Returns the y coefficient of the normal.
    #[must_use]
    pub fn b(&self) -> T {
        self.coord.y
    }

    /// Returns the z coefficient of the normal.
    #[must_use]
    pub fn c(&self) -> T {
        self.coord.z
    }

    /// Returns the constant term of the plane equation.
    #[must_use]
    pub fn d(&self) -> T {
        self.coord.w
    }

    /// Sets the x coefficient of the normal.
    pub fn set_a(&mut self, a: T) {
        self.coord.x = a;
    }

    /// Sets the y coefficient of the normal.
    pub fn set_b(&mut self, b: T) {
        self.coord.y = b;
    }

    /// Sets the z coefficient of the normal.
    pub fn set_c(&mut self, c: T) {
        self.coord.z = c;
    }

    /// Sets the constant term of the plane equation.
    pub fn set_d(&mut self, d: T) {
        self.coord.w = d;
    }

    /// Returns the normal `(a, b, c)`.
    #[must_use]
    pub fn normal(&self) -> Vector3<T> {
        self.coord.xyz()
    }

    /// Replaces the normal, keeping `d`.
    pub fn set_normal(&mut self, normal: &Vector3<T>) {
        self.coord.fixed_rows_mut::<3>(0).copy_from(normal);
    }

    /// Returns the packed coefficients `(a, b, c, d)`.
    #[must_use]
    pub fn coord(&self) -> &Vector4<T> {
        &self.coord
    }

    /// Returns the packed coefficients for in-place editing.
    pub fn coord_mut(&mut self) -> &mut Vector4<T> {
        &mut self.coord
    }

    /// Evaluates the implicit equation at a homogeneous point.
    ///
    /// Zero on the plane; the sign tells the side for points with `w > 0`.
    #[must_use]
    pub fn evaluate(&self, point: &Vector4<T>) -> T {
        self.coord.dot(point)
    }

    /// Signed distance from an affine point, positive on the normal side.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3<T>) -> T {
        (self.normal().dot(&point.coords) + self.d()) / self.normal().norm()
    }

    /// Returns the same plane scaled to a unit normal.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the normal vanishes within
    /// `tolerance`.
    pub fn try_normalize(&self, tolerance: T) -> Result<Self> {
        let len = self.normal().norm();
        if almost_zero(len, tolerance) {
            debug!("cannot normalize a plane with a zero normal");
            return Err(GeometryError::ZeroVector);
        }
        Ok(self.scale(T::one() / len))
    }

    /// Multiplies every coefficient by `factor`.
    #[must_use]
    pub fn scale(&self, factor: T) -> Self {
        Self::from_coord(self.coord * factor)
    }

    /// Flips the sign of every coefficient (same plane, opposite normal).
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::from_coord(-self.coord)
    }
}

impl<T: Real> Default for Plane<T> {
    fn default() -> Self {
        Self::from_coord(Vector4::zeros())
    }
}

impl<T: Real> Mul<T> for Plane<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

impl<T: Real> MulAssign<T> for Plane<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.coord *= rhs;
    }
}

impl<T: Real> Neg for Plane<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

macro_rules! impl_scalar_mul_plane {
    ($($t:ty),*) => {$(
        impl Mul<Plane<$t>> for $t {
            type Output = Plane<$t>;

            fn mul(self, rhs: Plane<$t>) -> Plane<$t> {
                rhs.scale(self)
            }
        }
    )*};
}

impl_scalar_mul_plane!(f32, f64);
