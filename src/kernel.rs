use crate::error::Result;
use crate::geometry::{Plane, PointPlaneClassification};
use crate::math::intersect_3d::{self, RayHit};
use crate::math::tolerance::Tolerance;
use crate::math::{nearest_3d, triangle_3d, Point3, Vector3};

/// Geometry operations bound to one [`Tolerance`].
///
/// Every near-zero comparison made through a kernel uses the same epsilon.
/// The kernel is a `Copy` value; build one per precision requirement and
/// share it freely across threads.
///
/// ```
/// use geokernel::{GeometryKernel, Point3, Vector3};
///
/// let kernel = GeometryKernel::default();
/// let hit = kernel
///     .ray_triangle_intersect(
///         &Point3::new(0.25, 0.25, 1.0),
///         &Vector3::new(0.0, 0.0, -1.0),
///         &Point3::new(0.0, 0.0, 0.0),
///         &Point3::new(1.0, 0.0, 0.0),
///         &Point3::new(0.0, 1.0, 0.0),
///     )
///     .map(|hit| hit.t);
/// assert!(hit.is_some_and(|t| (t - 1.0).abs() < 1e-12));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeometryKernel {
    tolerance: Tolerance,
}

impl GeometryKernel {
    /// Creates a kernel using `tolerance`.
    #[must_use]
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    /// Creates a kernel from a raw epsilon.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is not finite and strictly positive.
    pub fn with_tolerance(eps: f64) -> Result<Self> {
        Ok(Self::new(Tolerance::new(eps)?))
    }

    /// Returns the kernel's tolerance.
    #[must_use]
    pub fn tolerance(self) -> Tolerance {
        self.tolerance
    }

    /// Returns `true` if `x` lies strictly within the tolerance band around zero.
    #[must_use]
    pub fn is_near_zero(self, x: f64) -> bool {
        self.tolerance.is_near_zero(x)
    }

    /// Returns `true` if the squared distance between `a` and `b` is near zero.
    #[must_use]
    pub fn is_near_equal(self, a: &Point3, b: &Point3) -> bool {
        self.tolerance.is_near_equal(a, b)
    }

    /// Builds the plane through three points.
    ///
    /// # Errors
    ///
    /// Returns an error if the points are collinear.
    pub fn build_plane(self, p1: &Point3, p2: &Point3, p3: &Point3) -> Result<Plane> {
        Plane::from_points(p1, p2, p3, self.tolerance)
    }

    /// Returns `true` if `point` lies on `plane`.
    #[must_use]
    pub fn is_point_on_plane(self, plane: &Plane, point: &Point3) -> bool {
        plane.contains_point(point, self.tolerance)
    }

    /// Classifies `point` as in front of, behind, or on `plane`.
    #[must_use]
    pub fn classify_point(self, plane: &Plane, point: &Point3) -> PointPlaneClassification {
        plane.classify_point(point, self.tolerance)
    }

    /// See [`intersect_3d::ray_plane_intersect`].
    #[must_use]
    pub fn ray_plane_intersect(
        self,
        plane: &Plane,
        origin: &Point3,
        dir: &Vector3,
    ) -> Option<RayHit> {
        intersect_3d::ray_plane_intersect(plane, origin, dir, self.tolerance)
    }

    /// See [`intersect_3d::ray_plane_intersect_xz`].
    #[must_use]
    pub fn ray_plane_intersect_xz(self, plane: &Plane, origin: &Point3) -> Option<Point3> {
        intersect_3d::ray_plane_intersect_xz(plane, origin, self.tolerance)
    }

    /// See [`intersect_3d::ray_triangle_intersect`].
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn ray_triangle_intersect(
        self,
        origin: &Point3,
        dir: &Vector3,
        p1: &Point3,
        p2: &Point3,
        p3: &Point3,
    ) -> Option<RayHit> {
        intersect_3d::ray_triangle_intersect(origin, dir, p1, p2, p3)
    }

    /// See [`triangle_3d::point_in_triangle`].
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn point_in_triangle(self, src: &Point3, p1: &Point3, p2: &Point3, p3: &Point3) -> bool {
        triangle_3d::point_in_triangle(src, p1, p2, p3)
    }

    /// See [`triangle_3d::point_in_triangle_xz`].
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn point_in_triangle_xz(
        self,
        src: &Point3,
        p1: &Point3,
        p2: &Point3,
        p3: &Point3,
    ) -> bool {
        triangle_3d::point_in_triangle_xz(src, p1, p2, p3)
    }

    /// See [`nearest_3d::nearest_point_on_line`].
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` has zero length.
    #[allow(clippy::unused_self)]
    pub fn nearest_point_on_line(
        self,
        src: &Point3,
        origin: &Point3,
        dir: &Vector3,
    ) -> Result<Point3> {
        nearest_3d::nearest_point_on_line(src, origin, dir)
    }

    /// See [`nearest_3d::nearest_point_on_unit_line`].
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn nearest_point_on_unit_line(
        self,
        src: &Point3,
        origin: &Point3,
        dir: &Vector3,
    ) -> Point3 {
        nearest_3d::nearest_point_on_unit_line(src, origin, dir)
    }

    /// See [`nearest_3d::nearest_point_on_segment`].
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn nearest_point_on_segment(self, src: &Point3, p1: &Point3, p2: &Point3) -> Point3 {
        nearest_3d::nearest_point_on_segment(src, p1, p2)
    }
}
