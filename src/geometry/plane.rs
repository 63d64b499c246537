use crate::error::{GeometryError, Result};
use crate::math::tolerance::Tolerance;
use crate::math::{Point3, Vector3, Vector4};

/// An infinite plane in implicit form `normal · p + d = 0`.
///
/// Planes built with [`Plane::from_points`] always carry a unit normal.
/// [`Plane::new`] stores whatever it is given; signed distances are only
/// true distances when the normal is unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vector3,
    d: f64,
}

/// Classification of a point relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointPlaneClassification {
    /// Point is on the positive side (in the direction of the normal).
    Front,
    /// Point is on the negative side (opposite the normal).
    Back,
    /// Point lies on the plane (within tolerance).
    On,
}

impl Plane {
    /// Creates a plane from a raw normal and offset without normalizing.
    #[must_use]
    pub fn new(normal: Vector3, d: f64) -> Self {
        Self { normal, d }
    }

    /// Builds the plane through three points.
    ///
    /// The normal is `(p2 - p1) × (p3 - p1)` normalized, so the winding
    /// `p1 → p2 → p3` is counter-clockwise seen from the front side.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the points are coincident or
    /// collinear, i.e. the sine of the angle between the two edges at `p1` is
    /// within `tol` of zero. The test does not depend on the triangle's size.
    pub fn from_points(p1: &Point3, p2: &Point3, p3: &Point3, tol: Tolerance) -> Result<Self> {
        let e1 = p2 - p1;
        let e2 = p3 - p1;
        let cross = e1.cross(&e2);
        let len = cross.norm();

        // |e1 × e2| = |e1| |e2| sin(angle)
        if len.is_nan() || len <= tol.value() * e1.norm() * e2.norm() {
            tracing::debug!(?p1, ?p2, ?p3, "plane points are collinear");
            return Err(GeometryError::Degenerate("plane points are collinear".into()).into());
        }
        let normal = cross / len;
        let d = -normal.dot(&p1.coords);
        Ok(Self { normal, d })
    }

    /// Returns the normal vector of the plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the signed offset `d`.
    #[must_use]
    pub fn d(&self) -> f64 {
        self.d
    }

    /// Returns the plane as `(nx, ny, nz, d)`.
    #[must_use]
    pub fn to_vector4(&self) -> Vector4 {
        Vector4::new(self.normal.x, self.normal.y, self.normal.z, self.d)
    }

    /// Evaluates `normal · point + d`.
    /// Positive = on the normal side, negative = opposite.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        self.normal.dot(&point.coords) + self.d
    }

    /// Returns `true` if `point` lies on the plane within `tol`.
    #[must_use]
    pub fn contains_point(&self, point: &Point3, tol: Tolerance) -> bool {
        tol.is_near_zero(self.signed_distance(point))
    }

    /// Classifies a point relative to the plane.
    #[must_use]
    pub fn classify_point(&self, point: &Point3, tol: Tolerance) -> PointPlaneClassification {
        let dist = self.signed_distance(point);
        if dist >= tol.value() {
            PointPlaneClassification::Front
        } else if dist <= -tol.value() {
            PointPlaneClassification::Back
        } else {
            PointPlaneClassification::On
        }
    }
}

impl From<Vector4> for Plane {
    fn from(v: Vector4) -> Self {
        Self::new(Vector3::new(v.x, v.y, v.z), v.w)
    }
}

impl From<Plane> for Vector4 {
    fn from(plane: Plane) -> Self {
        plane.to_vector4()
    }
}
