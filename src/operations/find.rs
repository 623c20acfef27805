//! Intersections and plane constructions.
//!
//! Every function returns `None` when the configuration is degenerate for
//! that construction (parallel lines, a line through the origin, ...).
//! Points are returned in homogeneous form; use
//! [`hnormalized`](crate::math::hnormalized) for the affine point.

use tracing::trace;

use crate::geometry::{Plane, Plucker};
use crate::math::relational::{are_parallel_vectors, are_perpendicular_vectors};
use crate::math::{homogeneous, Real, Vector3, Vector4};

use super::query::{are_coplanar, are_parallel, line_contains_point, passes_through_origin};

/// Intersection point of two lines.
///
/// `None` unless the lines are coplanar and not parallel.
#[must_use]
pub fn find_line_intersection<T: Real>(
    p1: &Plucker<T>,
    p2: &Plucker<T>,
    tolerance: T,
) -> Option<Vector4<T>> {
    if !are_coplanar(p1, p2, tolerance) {
        trace!("lines are skew");
        return None;
    }
    if are_parallel(p1, p2, tolerance) {
        trace!("lines are parallel");
        return None;
    }

    let n = p1.l().cross(&p2.l());
    Some(point_nearest_to(p1, p2, &n))
}

/// Intersection point of a line and a plane.
///
/// `None` if the line is parallel to (or lies in) the plane.
#[must_use]
pub fn find_line_plane_intersection<T: Real>(
    line: &Plucker<T>,
    plane: &Plane<T>,
    tolerance: T,
) -> Option<Vector4<T>> {
    let n = plane.normal();
    let l = line.l();
    if are_perpendicular_vectors(&l, &n, tolerance) {
        trace!("line is parallel to plane");
        return None;
    }

    Some(homogeneous(&(n.cross(&line.m()) - l * plane.d()), l.dot(&n)))
}

/// Line along which two planes meet, `(n1 × n2, d1·n2 - d2·n1)`.
///
/// The moment sign follows `m = p × l` for points `p` on both planes, which
/// is the negation of the `d2·n1 - d1·n2` form sometimes quoted for this
/// construction.
///
/// `None` if the planes are parallel or coincident.
#[must_use]
pub fn find_plane_intersection<T: Real>(
    plane1: &Plane<T>,
    plane2: &Plane<T>,
    tolerance: T,
) -> Option<Plucker<T>> {
    let n1 = plane1.normal();
    let n2 = plane2.normal();
    if are_parallel_vectors(&n1, &n2, tolerance) {
        trace!("planes are parallel");
        return None;
    }

    Some(Plucker::new(n1.cross(&n2), n2 * plane1.d() - n1 * plane2.d()))
}

/// Points on two lines closest to one another, one on each line.
///
/// Intersecting lines yield the same point twice. `None` for parallel
/// lines, where the closest pair is not unique.
#[must_use]
pub fn find_closest_points<T: Real>(
    p1: &Plucker<T>,
    p2: &Plucker<T>,
    tolerance: T,
) -> Option<(Vector4<T>, Vector4<T>)> {
    if are_parallel(p1, p2, tolerance) {
        trace!("lines are parallel");
        return None;
    }

    let n = p1.l().cross(&p2.l());
    Some((point_nearest_to(p1, p2, &n), point_nearest_to(p2, p1, &-n)))
}

/// Point on `on` closest to `other`, given `n = l_on × l_other`.
fn point_nearest_to<T: Real>(on: &Plucker<T>, other: &Plucker<T>, n: &Vector3<T>) -> Vector4<T> {
    let xyz = -on.m().cross(&other.l().cross(n)) + on.l() * other.m().dot(n);
    homogeneous(&xyz, n.norm_squared())
}

/// Plane through the origin containing a line, `(m : 0)`.
///
/// `None` if the line passes through the origin.
#[must_use]
pub fn find_origin_plane_through_line<T: Real>(line: &Plucker<T>, tolerance: T) -> Option<Plane<T>> {
    if passes_through_origin(line, tolerance) {
        trace!("line passes through the origin");
        return None;
    }

    Some(Plane::from_normal(line.m(), T::zero()))
}

/// Plane containing a line and perpendicular to its origin plane,
/// `(m × l : |m|²)`.
///
/// `None` if the line passes through the origin.
#[must_use]
pub fn find_plane_through_line<T: Real>(line: &Plucker<T>, tolerance: T) -> Option<Plane<T>> {
    if passes_through_origin(line, tolerance) {
        trace!("line passes through the origin");
        return None;
    }

    let m = line.m();
    Some(Plane::from_normal(m.cross(&line.l()), m.norm_squared()))
}

/// Plane containing a line and a homogeneous point.
///
/// `None` if the point lies on the line.
#[must_use]
pub fn find_common_plane_with_point<T: Real>(
    line: &Plucker<T>,
    point: &Vector4<T>,
    tolerance: T,
) -> Option<Plane<T>> {
    if line_contains_point(line, point, tolerance) {
        trace!("point lies on line");
        return None;
    }

    let p = point.xyz();
    let m = line.m();
    Some(Plane::from_normal(line.l().cross(&p) + m * point.w, -m.dot(&p)))
}

/// Plane containing a line and parallel to `vector`.
///
/// `None` if `vector` is parallel to the line.
#[must_use]
pub fn find_common_plane_with_vector<T: Real>(
    line: &Plucker<T>,
    vector: &Vector3<T>,
    tolerance: T,
) -> Option<Plane<T>> {
    let l = line.l();
    if are_parallel_vectors(&l, vector, tolerance) {
        trace!("vector is parallel to line");
        return None;
    }

    Some(Plane::from_normal(l.cross(vector), -line.m().dot(vector)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::{hnormalized, lit, Point3};
    use crate::operations::query::{plane_contains_line, plane_contains_point};

    fn pt<T: Real>(x: f64, y: f64, z: f64) -> Point3<T> {
        Point3::new(lit(x), lit(y), lit(z))
    }

    fn line<T: Real>(from: (f64, f64, f64), to: (f64, f64, f64)) -> Plucker<T> {
        Plucker::through_points(&pt(from.0, from.1, from.2), &pt(to.0, to.1, to.2))
    }

    fn plane<T: Real>(a: f64, b: f64, c: f64, d: f64) -> Plane<T> {
        Plane::new(lit(a), lit(b), lit(c), lit(d))
    }

    fn check_line_intersection<T: Real>() {
        let atol = T::DEFAULT_TOLERANCE;
        let line1 = line::<T>((0.0, 2.0, 6.0), (0.0, 2.0, 4.0));

        let crossing = line((0.0, 2.0, 0.0), (2.0, 2.0, 0.0));
        let hit = find_line_intersection(&line1, &crossing, atol).unwrap();
        assert_abs_diff_eq!(pt::<T>(0.0, 2.0, 0.0), hnormalized(hit).unwrap(), epsilon = atol);

        let skew = line((0.0, 0.0, 0.0), (2.0, 0.0, 0.0));
        assert!(find_line_intersection(&line1, &skew, atol).is_none());

        let parallel = line((2.0, 0.0, 6.0), (2.0, 0.0, 4.0));
        assert!(find_line_intersection(&line1, &parallel, atol).is_none());
    }

    fn check_line_plane_intersection<T: Real>() {
        let atol = T::DEFAULT_TOLERANCE;
        let l = line::<T>((0.0, 2.0, 6.0), (0.0, 2.0, 4.0));

        let hit = find_line_plane_intersection(&l, &plane(0.0, 0.0, 1.0, 1.0), atol).unwrap();
        assert_abs_diff_eq!(pt::<T>(0.0, 2.0, -1.0), hnormalized(hit).unwrap(), epsilon = atol);

        assert!(find_line_plane_intersection(&l, &plane(1.0, 0.0, 0.0, 0.0), atol).is_none());
    }

    fn check_plane_intersection<T: Real>() {
        let atol = T::DEFAULT_TOLERANCE;
        let z_axis = line::<T>((0.0, 0.0, 6.0), (0.0, 0.0, 4.0));

        let res = find_plane_intersection(&plane(-1.0, -1.0, 0.0, 0.0), &plane(1.0, -1.0, 0.0, 0.0), atol)
            .unwrap();
        assert!(are_parallel_vectors(&z_axis.l(), &res.l(), atol));
        assert!(are_parallel_vectors(&z_axis.m(), &res.m(), atol));

        assert!(
            find_plane_intersection(&plane::<T>(-1.0, 0.0, 0.0, 0.0), &plane(1.0, 0.0, 0.0, 0.0), atol)
                .is_none()
        );
    }

    fn check_closest_points<T: Real>() {
        let atol = T::DEFAULT_TOLERANCE;
        let line1 = line::<T>((0.0, 2.0, 6.0), (0.0, 2.0, 4.0));

        let skew = line((0.0, 0.0, 0.0), (2.0, 0.0, 0.0));
        let (a, b) = find_closest_points(&line1, &skew, atol).unwrap();
        assert_abs_diff_eq!(pt::<T>(0.0, 2.0, 0.0), hnormalized(a).unwrap(), epsilon = atol);
        assert_abs_diff_eq!(pt::<T>(0.0, 0.0, 0.0), hnormalized(b).unwrap(), epsilon = atol);

        let crossing = line((0.0, 2.0, 0.0), (2.0, 2.0, 0.0));
        let (a, b) = find_closest_points(&line1, &crossing, atol).unwrap();
        assert_abs_diff_eq!(hnormalized(a).unwrap(), hnormalized(b).unwrap(), epsilon = atol);

        let parallel = line((2.0, 0.0, 6.0), (2.0, 0.0, 4.0));
        assert!(find_closest_points(&line1, &parallel, atol).is_none());
    }

    fn check_origin_plane_through_line<T: Real>() {
        let atol = T::DEFAULT_TOLERANCE;
        let l = line::<T>((0.0, 2.0, 6.0), (0.0, 2.0, 4.0));
        let expected = homogeneous(&l.m(), T::zero());
        let res = find_origin_plane_through_line(&l, atol).unwrap();
        assert_abs_diff_eq!(expected, *res.coord(), epsilon = atol);

        let through_origin = line::<T>((0.0, 0.0, 6.0), (0.0, 0.0, 4.0));
        assert!(find_origin_plane_through_line(&through_origin, atol).is_none());
    }

    fn check_plane_through_line<T: Real>() {
        let atol = T::DEFAULT_TOLERANCE;
        let l = line::<T>((0.0, 2.0, 6.0), (0.0, 2.0, 4.0));
        let expected = homogeneous(&l.m().cross(&l.l()), l.m().norm_squared());
        let res = find_plane_through_line(&l, atol).unwrap();
        assert_abs_diff_eq!(expected, *res.coord(), epsilon = atol);

        let through_origin = line::<T>((0.0, 0.0, 6.0), (0.0, 0.0, 4.0));
        assert!(find_plane_through_line(&through_origin, atol).is_none());
    }

    fn check_common_plane_with_point<T: Real>() {
        let atol = T::DEFAULT_TOLERANCE;
        let l = line::<T>((0.0, 2.0, 6.0), (0.0, 2.0, 4.0));

        let point = Vector4::new(lit(2.0), lit(0.0), lit(0.0), T::one());
        let p = point.xyz();
        let expected = homogeneous(&(l.l().cross(&p) + l.m() * point.w), -l.m().dot(&p));
        let res = find_common_plane_with_point(&l, &point, atol).unwrap();
        assert_abs_diff_eq!(expected, *res.coord(), epsilon = atol);

        let on_line = Vector4::new(lit(0.0), lit(2.0), lit(0.0), T::one());
        assert!(find_common_plane_with_point(&l, &on_line, atol).is_none());
    }

    fn check_common_plane_with_vector<T: Real>() {
        let atol = T::DEFAULT_TOLERANCE;
        let l = line::<T>((0.0, 2.0, 6.0), (0.0, 2.0, 4.0));

        let vector = Vector3::new(T::one(), T::zero(), T::zero());
        let expected = homogeneous(&l.l().cross(&vector), -l.m().dot(&vector));
        let res = find_common_plane_with_vector(&l, &vector, atol).unwrap();
        assert_abs_diff_eq!(expected, *res.coord(), epsilon = atol);

        let along = Vector3::new(T::zero(), T::zero(), T::one());
        assert!(find_common_plane_with_vector(&l, &along, atol).is_none());
    }

    #[test]
    fn line_intersection_f32() {
        check_line_intersection::<f32>();
    }

    #[test]
    fn line_intersection_f64() {
        check_line_intersection::<f64>();
    }

    #[test]
    fn line_plane_intersection_f32() {
        check_line_plane_intersection::<f32>();
    }

    #[test]
    fn line_plane_intersection_f64() {
        check_line_plane_intersection::<f64>();
    }

    #[test]
    fn plane_intersection_f32() {
        check_plane_intersection::<f32>();
    }

    #[test]
    fn plane_intersection_f64() {
        check_plane_intersection::<f64>();
    }

    #[test]
    fn closest_points_f32() {
        check_closest_points::<f32>();
    }

    #[test]
    fn closest_points_f64() {
        check_closest_points::<f64>();
    }

    #[test]
    fn origin_plane_through_line_f32() {
        check_origin_plane_through_line::<f32>();
    }

    #[test]
    fn origin_plane_through_line_f64() {
        check_origin_plane_through_line::<f64>();
    }

    #[test]
    fn plane_through_line_f32() {
        check_plane_through_line::<f32>();
    }

    #[test]
    fn plane_through_line_f64() {
        check_plane_through_line::<f64>();
    }

    #[test]
    fn common_plane_with_point_f32() {
        check_common_plane_with_point::<f32>();
    }

    #[test]
    fn common_plane_with_point_f64() {
        check_common_plane_with_point::<f64>();
    }

    #[test]
    fn common_plane_with_vector_f32() {
        check_common_plane_with_vector::<f32>();
    }

    #[test]
    fn common_plane_with_vector_f64() {
        check_common_plane_with_vector::<f64>();
    }

    #[test]
    fn constructed_planes_contain_their_inputs() {
        let tol = 1e-8;
        let l = line::<f64>((1.0, -1.0, 2.0), (3.0, 0.5, -1.0));
        let point = Vector4::new(4.0, 4.0, 4.0, 1.0);

        for plane in [
            find_origin_plane_through_line(&l, tol).unwrap(),
            find_plane_through_line(&l, tol).unwrap(),
            find_common_plane_with_point(&l, &point, tol).unwrap(),
            find_common_plane_with_vector(&l, &Vector3::new(0.0, 0.0, 1.0), tol).unwrap(),
        ] {
            assert!(plane_contains_line(&plane, &l, tol), "{plane:?} misses the line");
        }

        let common = find_common_plane_with_point(&l, &point, tol).unwrap();
        assert!(plane_contains_point(&common, &point, tol));

        let origin = Vector4::new(0.0, 0.0, 0.0, 1.0);
        let through_origin = find_origin_plane_through_line(&l, tol).unwrap();
        assert!(plane_contains_point(&through_origin, &origin, tol));
    }

    #[test]
    fn plane_intersection_lies_in_both_planes() {
        let a = Plane::new(1.0, 0.0, 0.0, -1.0);
        let b = Plane::new(0.0, 1.0, 0.0, -2.0);
        let l = find_plane_intersection(&a, &b, 1e-8).unwrap();
        assert!(plane_contains_line(&a, &l, 1e-8));
        assert!(plane_contains_line(&b, &l, 1e-8));
    }
}
