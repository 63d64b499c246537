use super::{Point3, Vector3};

/// Containment test for a point assumed coplanar with triangle `p1 p2 p3`.
///
/// Takes the cross product of each edge with the vector from its start vertex
/// to `src`, then requires consecutive cross products to agree in sign on
/// every axis. The comparison is exact (no tolerance): a zero component agrees
/// with either sign, so points on an edge count as inside.
#[must_use]
pub fn point_in_triangle(src: &Point3, p1: &Point3, p2: &Point3, p3: &Point3) -> bool {
    let c1 = (p2 - p1).cross(&(src - p1));
    let c2 = (p3 - p2).cross(&(src - p2));
    let c3 = (p1 - p3).cross(&(src - p3));

    same_direction(&c1, &c2) && same_direction(&c2, &c3) && same_direction(&c3, &c1)
}

/// Containment test on the XZ projection (the `y` axis is dropped).
///
/// Same scheme as [`point_in_triangle`], with the 2D cross product
/// `a.x * b.z - a.z * b.x` in place of the 3D one.
#[must_use]
pub fn point_in_triangle_xz(src: &Point3, p1: &Point3, p2: &Point3, p3: &Point3) -> bool {
    let c1 = cross_xz(&(p2 - p1), &(src - p1));
    let c2 = cross_xz(&(p3 - p2), &(src - p2));
    let c3 = cross_xz(&(p1 - p3), &(src - p3));

    same_sign(c1, c2) && same_sign(c2, c3) && same_sign(c3, c1)
}

/// No axis where one vector is strictly positive and the other strictly negative.
fn same_direction(a: &Vector3, b: &Vector3) -> bool {
    a.iter().zip(b.iter()).all(|(&x, &y)| same_sign(x, y))
}

#[inline]
fn same_sign(a: f64, b: f64) -> bool {
    !((a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0))
}

/// 2D cross product on the `(x, z)` components.
#[inline]
fn cross_xz(a: &Vector3, b: &Vector3) -> f64 {
    a.x * b.z - a.z * b.x
}
