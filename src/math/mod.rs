pub mod intersect_3d;
pub mod nearest_3d;
pub mod tolerance;
pub mod triangle_3d;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4-component vector, used for the `(nx, ny, nz, d)` plane representation.
pub type Vector4 = nalgebra::Vector4<f64>;

/// Default tolerance for near-zero comparisons.
pub const TOLERANCE: f64 = 1e-3;
