use crate::error::{GeometryError, Result};

use super::{Point3, Vector3};

/// Returns the point on the infinite line through `origin` along `dir` that is
/// closest to `src`.
///
/// `dir` need not be unit length; it is normalized here. Callers that already
/// hold a unit direction should use [`nearest_point_on_unit_line`].
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `dir` has zero length or a
/// non-finite component.
pub fn nearest_point_on_line(src: &Point3, origin: &Point3, dir: &Vector3) -> Result<Point3> {
    let Some(unit) = dir
        .try_normalize(0.0)
        .filter(|unit| unit.iter().all(|c| c.is_finite()))
    else {
        tracing::debug!(?dir, "cannot project onto a zero-length direction");
        return Err(GeometryError::ZeroVector.into());
    };
    Ok(nearest_point_on_unit_line(src, origin, &unit))
}

/// Same as [`nearest_point_on_line`] but trusts `dir` to be unit length.
///
/// A non-unit `dir` scales the projection by `|dir|²`.
#[must_use]
#[inline]
pub fn nearest_point_on_unit_line(src: &Point3, origin: &Point3, dir: &Vector3) -> Point3 {
    origin + dir * (src - origin).dot(dir)
}

/// Returns the point on segment `[p1, p2]` closest to `src`.
///
/// Projections falling before `p1` or past `p2` return that endpoint exactly.
/// A zero-length segment collapses to `p1`; short segments are projected
/// normally.
#[must_use]
pub fn nearest_point_on_segment(src: &Point3, p1: &Point3, p2: &Point3) -> Point3 {
    let seg = p2 - p1;
    let len_sq = seg.norm_squared();
    if len_sq <= 0.0 {
        return *p1;
    }
    let dir = seg / len_sq.sqrt();

    // Scalar projection along the unit direction.
    let param = (src - p1).dot(&dir);
    if param <= 0.0 {
        return *p1;
    }
    if param * param >= len_sq {
        return *p2;
    }
    p1 + dir * param
}
