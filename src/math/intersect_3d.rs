use nalgebra::Matrix3;

use crate::geometry::Plane;

use super::tolerance::Tolerance;
use super::{Point3, Vector3};

/// A ray hit: the intersection point and the parameter `t` along the ray.
///
/// `point == origin + dir * t`. `t` is a true distance only when `dir` has
/// unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Point3,
    pub t: f64,
}

/// Intersects the line `origin + t * dir` with a plane.
///
/// Returns `None` when `normal · dir` is within `tol` of zero (the ray is
/// parallel to the plane, or the plane normal is zero). Hits behind the
/// origin are returned with a negative `t`.
#[must_use]
pub fn ray_plane_intersect(
    plane: &Plane,
    origin: &Point3,
    dir: &Vector3,
    tol: Tolerance,
) -> Option<RayHit> {
    let denom = plane.normal().dot(dir);
    if tol.is_near_zero(denom) {
        return None;
    }
    let t = -plane.signed_distance(origin) / denom;
    Some(RayHit {
        point: origin + dir * t,
        t,
    })
}

/// Drops `origin` vertically onto a plane.
///
/// Returns the point with the same `x` and `z` as `origin` that lies on the
/// plane, solving `a·x + b·y + c·z + d = 0` for `y`. Returns `None` when the
/// normal's `y` component is within `tol` of zero (a vertical plane has no
/// unique height).
#[must_use]
pub fn ray_plane_intersect_xz(plane: &Plane, origin: &Point3, tol: Tolerance) -> Option<Point3> {
    let n = plane.normal();
    if tol.is_near_zero(n.y) {
        return None;
    }
    let y = -(n.x * origin.x + n.z * origin.z + plane.d()) / n.y;
    Some(Point3::new(origin.x, y, origin.z))
}

/// One-sided ray/triangle intersection.
///
/// Solves `p1 + u * edge1 + v * edge2 = origin + t * dir` by Cramer's rule.
/// The system determinant `|edge1 edge2 -dir|` must be strictly positive:
/// rays hitting the back face (clockwise winding seen from the origin) are
/// rejected. Hits behind the origin (`t < 0`) are still reported.
#[must_use]
pub fn ray_triangle_intersect(
    origin: &Point3,
    dir: &Vector3,
    p1: &Point3,
    p2: &Point3,
    p3: &Point3,
) -> Option<RayHit> {
    let edge1 = p2 - p1;
    let edge2 = p3 - p1;
    let neg_dir = -dir;

    let det = Matrix3::from_columns(&[edge1, edge2, neg_dir]).determinant();
    if det <= 0.0 {
        return None;
    }

    let to_p1 = origin - p1;

    let u = Matrix3::from_columns(&[to_p1, edge2, neg_dir]).determinant() / det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let v = Matrix3::from_columns(&[edge1, to_p1, neg_dir]).determinant() / det;
    if !(0.0..=1.0).contains(&v) || u + v > 1.0 {
        return None;
    }

    let t = Matrix3::from_columns(&[edge1, edge2, to_p1]).determinant() / det;
    Some(RayHit {
        point: origin + dir * t,
        t,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const TOL: Tolerance = Tolerance::DEFAULT;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    fn unit_triangle() -> (Point3, Point3, Point3) {
        (p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0))
    }

    // ── ray_plane_intersect ──

    #[test]
    fn ray_hits_plane() {
        let plane = Plane::new(v(0.0, 0.0, 1.0), -5.0);
        let hit = ray_plane_intersect(&plane, &p(0.0, 0.0, 0.0), &v(0.0, 0.0, 1.0), TOL).unwrap();
        assert_relative_eq!(hit.t, 5.0);
        assert_relative_eq!(hit.point, p(0.0, 0.0, 5.0));
    }

    #[test]
    fn ray_hit_behind_origin_has_negative_t() {
        let plane = Plane::new(v(0.0, 0.0, 1.0), 0.0);
        let hit = ray_plane_intersect(&plane, &p(1.0, 2.0, 3.0), &v(0.0, 0.0, 1.0), TOL).unwrap();
        assert_relative_eq!(hit.t, -3.0);
        assert_relative_eq!(hit.point, p(1.0, 2.0, 0.0));
    }

    #[test]
    fn ray_parallel_to_plane() {
        let plane = Plane::new(v(0.0, 0.0, 1.0), -5.0);
        assert!(ray_plane_intersect(&plane, &p(0.0, 0.0, 0.0), &v(1.0, 0.0, 0.0), TOL).is_none());
    }

    #[test]
    fn ray_nearly_parallel_to_plane() {
        let plane = Plane::new(v(0.0, 0.0, 1.0), -5.0);
        let dir = v(1.0, 0.0, 0.000_5);
        assert!(ray_plane_intersect(&plane, &p(0.0, 0.0, 0.0), &dir, TOL).is_none());
    }

    #[test]
    fn oblique_hit_lies_on_plane() {
        let plane = Plane::from_points(&p(1.0, 0.0, 0.0), &p(0.0, 1.0, 0.0), &p(0.0, 0.0, 1.0), TOL)
            .unwrap();
        let origin = p(-2.0, 0.5, 3.0);
        let dir = v(1.0, 0.25, -0.5).normalize();
        let hit = ray_plane_intersect(&plane, &origin, &dir, TOL).unwrap();
        assert!(plane.contains_point(&hit.point, TOL));
        assert_relative_eq!(hit.point, origin + dir * hit.t, epsilon = 1e-12);
    }

    #[test]
    fn zero_normal_plane_never_hit() {
        let plane = Plane::new(Vector3::zeros(), 1.0);
        assert!(ray_plane_intersect(&plane, &p(0.0, 0.0, 0.0), &v(0.0, 0.0, 1.0), TOL).is_none());
    }

    // ── ray_plane_intersect_xz ──

    #[test]
    fn drop_onto_horizontal_plane() {
        let plane = Plane::new(v(0.0, 1.0, 0.0), -2.0);
        let hit = ray_plane_intersect_xz(&plane, &p(3.0, 10.0, -4.0), TOL).unwrap();
        assert_relative_eq!(hit, p(3.0, 2.0, -4.0));
    }

    #[test]
    fn drop_onto_slope() {
        // y = x, normal (-1, 1, 0) / sqrt(2)
        let plane = Plane::from_points(&p(0.0, 0.0, 0.0), &p(0.0, 0.0, 1.0), &p(1.0, 1.0, 0.0), TOL)
            .unwrap();
        let hit = ray_plane_intersect_xz(&plane, &p(2.5, -7.0, 9.0), TOL).unwrap();
        assert_relative_eq!(hit, p(2.5, 2.5, 9.0), epsilon = 1e-12);
        assert!(plane.contains_point(&hit, TOL));
    }

    #[test]
    fn drop_onto_vertical_wall_fails() {
        let plane = Plane::new(v(1.0, 0.0, 0.0), -1.0);
        assert!(ray_plane_intersect_xz(&plane, &p(0.0, 0.0, 0.0), TOL).is_none());
    }

    // ── ray_triangle_intersect ──

    #[test]
    fn ray_hits_triangle_front() {
        let (a, b, c) = unit_triangle();
        let hit = ray_triangle_intersect(&p(0.25, 0.25, 1.0), &v(0.0, 0.0, -1.0), &a, &b, &c)
            .unwrap();
        assert_relative_eq!(hit.point, p(0.25, 0.25, 0.0), epsilon = 1e-12);
        assert_relative_eq!(hit.t, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn ray_misses_triangle() {
        let (a, b, c) = unit_triangle();
        assert!(
            ray_triangle_intersect(&p(2.0, 2.0, 1.0), &v(0.0, 0.0, -1.0), &a, &b, &c).is_none()
        );
    }

    #[test]
    fn ray_outside_hypotenuse_misses() {
        let (a, b, c) = unit_triangle();
        // u = v = 0.6, inside the bounding square but u + v > 1
        assert!(
            ray_triangle_intersect(&p(0.6, 0.6, 1.0), &v(0.0, 0.0, -1.0), &a, &b, &c).is_none()
        );
    }

    #[test]
    fn back_face_is_culled() {
        let (a, b, c) = unit_triangle();
        assert!(
            ray_triangle_intersect(&p(0.25, 0.25, -1.0), &v(0.0, 0.0, 1.0), &a, &b, &c).is_none()
        );
        // Same ray hits once the winding is flipped.
        let hit =
            ray_triangle_intersect(&p(0.25, 0.25, -1.0), &v(0.0, 0.0, 1.0), &a, &c, &b).unwrap();
        assert_relative_eq!(hit.t, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn ray_parallel_to_triangle_misses() {
        let (a, b, c) = unit_triangle();
        assert!(
            ray_triangle_intersect(&p(0.25, 0.25, 1.0), &v(1.0, 0.0, 0.0), &a, &b, &c).is_none()
        );
    }

    #[test]
    fn ray_hits_vertex() {
        let (a, b, c) = unit_triangle();
        let hit =
            ray_triangle_intersect(&p(0.0, 0.0, 2.0), &v(0.0, 0.0, -1.0), &a, &b, &c).unwrap();
        assert_relative_eq!(hit.point, a, epsilon = 1e-12);
        assert_relative_eq!(hit.t, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn triangle_behind_origin_reports_negative_t() {
        let (a, b, c) = unit_triangle();
        // Ray points away from the front face; the hit lies behind the origin.
        let hit =
            ray_triangle_intersect(&p(0.25, 0.25, -1.0), &v(0.0, 0.0, -1.0), &a, &b, &c).unwrap();
        assert_relative_eq!(hit.t, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn unnormalized_direction_scales_t() {
        let (a, b, c) = unit_triangle();
        let hit = ray_triangle_intersect(&p(0.25, 0.25, 4.0), &v(0.0, 0.0, -2.0), &a, &b, &c)
            .unwrap();
        assert_relative_eq!(hit.t, 2.0, epsilon = 1e-12);
        assert_relative_eq!(hit.point, p(0.25, 0.25, 0.0), epsilon = 1e-12);
    }
}
