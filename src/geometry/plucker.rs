use std::ops::{Mul, MulAssign, Neg};

use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::relational::{almost_zero, vec_almost_zero};
use crate::math::{Point3, Real, Vector3, Vector4, Vector6};

/// A line in 3D space in Plücker coordinates.
///
/// The six coordinates are packed as `(l, m)`: `l` is the direction of the
/// line and `m = p × l` its moment for any point `p` on the line. Valid
/// lines satisfy `l · m = 0`, and `(l, m)` and `(k·l, k·m)` describe the
/// same line for every `k != 0`. Neither property is enforced by the
/// unchecked constructors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plucker<T = f64> {
    coord: Vector6<T>,
}

impl<T: Real> Plucker<T> {
    /// Creates a line from its direction and moment.
    #[must_use]
    pub fn new(l: Vector3<T>, m: Vector3<T>) -> Self {
        Self::from_coord(Vector6::new(l.x, l.y, l.z, m.x, m.y, m.z))
    }

    /// Creates a line from its packed coordinates `(l, m)`.
    #[must_use]
    pub fn from_coord(coord: Vector6<T>) -> Self {
        Self { coord }
    }

    /// Creates the line directed from one homogeneous point to another.
    ///
    /// Swapping `from` and `to` negates both halves, so the result
    /// describes the same line with the opposite orientation.
    #[must_use]
    pub fn from_points(from: &Vector4<T>, to: &Vector4<T>) -> Self {
        let from_xyz = from.xyz();
        let to_xyz = to.xyz();
        Self::new(
            to_xyz * from.w - from_xyz * to.w,
            from_xyz.cross(&to_xyz),
        )
    }

    /// Creates the line directed from one affine point to another.
    #[must_use]
    pub fn through_points(from: &Point3<T>, to: &Point3<T>) -> Self {
        Self::from_points(&from.to_homogeneous(), &to.to_homogeneous())
    }

    /// Creates the line through `point` along `direction`.
    #[must_use]
    pub fn from_point_direction(point: &Point3<T>, direction: Vector3<T>) -> Self {
        let m = point.coords.cross(&direction);
        Self::new(direction, m)
    }

    /// Creates a line, checking the Plücker relation `l · m = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotALine`] if `|l · m|` exceeds `tolerance`.
    pub fn try_new(l: Vector3<T>, m: Vector3<T>, tolerance: T) -> Result<Self> {
        let line = Self::new(l, m);
        let residual = line.plucker_residual();
        if !almost_zero(residual, tolerance) {
            debug!(residual = residual.to_f64(), "rejected coordinates off the Klein quadric");
            return Err(GeometryError::NotALine {
                residual: residual.to_f64(),
            });
        }
        Ok(line)
    }

    /// Creates the line through two homogeneous points, rejecting points
    /// that coincide within `tolerance`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CoincidentPoints`] if the resulting
    /// direction vanishes.
    pub fn try_from_points(from: &Vector4<T>, to: &Vector4<T>, tolerance: T) -> Result<Self> {
        let line = Self::from_points(from, to);
        if vec_almost_zero(&line.l(), tolerance) {
            debug!("rejected line through coincident points");
            return Err(GeometryError::CoincidentPoints);
        }
        Ok(line)
    }

    /// Returns the direction `l`.
    #[must_use]
    pub fn l(&self) -> Vector3<T> {
        self.coord.fixed_rows::<3>(0).into_owned()
    }

    /// Returns the moment `m`.
    #[must_use]
    pub fn m(&self) -> Vector3<T> {
        self.coord.fixed_rows::<3>(3).into_owned()
    }

    /// Replaces the direction, keeping the moment.
    pub fn set_l(&mut self, l: &Vector3<T>) {
        self.coord.fixed_rows_mut::<3>(0).copy_from(l);
    }

    /// Replaces the moment, keeping the direction.
    pub fn set_m(&mut self, m: &Vector3<T>) {
        self.coord.fixed_rows_mut::<3>(3).copy_from(m);
    }

    /// Returns the packed coordinates `(l, m)`.
    #[must_use]
    pub fn coord(&self) -> &Vector6<T> {
        &self.coord
    }

    /// Returns the packed coordinates for in-place editing.
    pub fn coord_mut(&mut self) -> &mut Vector6<T> {
        &mut self.coord
    }

    /// Reciprocal product `l1 · m2 + l2 · m1`.
    ///
    /// Symmetric, and zero exactly when the two lines are coplanar.
    #[must_use]
    pub fn reciprocal_product(&self, other: &Self) -> T {
        self.l().dot(&other.m()) + other.l().dot(&self.m())
    }

    /// Returns `l · m`, which vanishes for every valid line.
    #[must_use]
    pub fn plucker_residual(&self) -> T {
        self.l().dot(&self.m())
    }

    /// Returns `true` if `|l · m|` is within `tolerance`.
    #[must_use]
    pub fn satisfies_plucker_relation(&self, tolerance: T) -> bool {
        almost_zero(self.plucker_residual(), tolerance)
    }

    /// Multiplies both halves by `factor`; the line itself is unchanged.
    #[must_use]
    pub fn scale(&self, factor: T) -> Self {
        Self::from_coord(self.coord * factor)
    }

    /// Reverses the orientation of the line.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::from_coord(-self.coord)
    }
}

impl<T: Real> Default for Plucker<T> {
    fn default() -> Self {
        Self::from_coord(Vector6::zeros())
    }
}

impl<T: Real> Mul<T> for Plucker<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

impl<T: Real> MulAssign<T> for Plucker<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.coord *= rhs;
    }
}

impl<T: Real> Neg for Plucker<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

macro_rules! impl_scalar_mul_plucker {
    ($($t:ty),*) => {$(
        impl Mul<Plucker<$t>> for $t {
            type Output = Plucker<$t>;

            fn mul(self, rhs: Plucker<$t>) -> Plucker<$t> {
                rhs.scale(self)
            }
        }
    )*};
}

impl_scalar_mul_plucker!(f32, f64);
