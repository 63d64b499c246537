//! Stateless 3D geometry primitives.
//!
//! Plane construction and classification, ray casts against planes and
//! triangles, nearest-point projections onto lines and segments, and
//! point-in-triangle tests. All comparisons share one near-zero
//! [`Tolerance`]; [`GeometryKernel`] binds a tolerance to the whole API.

pub mod error;
pub mod geometry;
pub mod kernel;
pub mod math;

pub use error::{GeoKernelError, Result};
pub use geometry::{Plane, PointPlaneClassification};
pub use kernel::GeometryKernel;
pub use math::intersect_3d::{
    ray_plane_intersect, ray_plane_intersect_xz, ray_triangle_intersect, RayHit,
};
pub use math::nearest_3d::{
    nearest_point_on_line, nearest_point_on_segment, nearest_point_on_unit_line,
};
pub use math::tolerance::{is_near_equal, is_near_equal_zero, Tolerance};
pub use math::triangle_3d::{point_in_triangle, point_in_triangle_xz};
pub use math::{Point3, Vector3, Vector4, TOLERANCE};
