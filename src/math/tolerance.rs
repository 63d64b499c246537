use crate::error::{ConfigError, Result};

use super::{Point3, TOLERANCE};

/// Near-zero threshold shared by every comparison of one kernel.
///
/// A scalar `x` is treated as zero when `-eps < x < eps` (both bounds
/// exclusive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance(f64);

impl Tolerance {
    /// The default tolerance, [`TOLERANCE`].
    pub const DEFAULT: Self = Self(TOLERANCE);

    /// Creates a tolerance of `eps`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTolerance`] if `eps` is not finite or not
    /// strictly positive.
    pub fn new(eps: f64) -> Result<Self> {
        if !eps.is_finite() || eps <= 0.0 {
            tracing::debug!(eps, "rejected tolerance");
            return Err(ConfigError::InvalidTolerance(eps).into());
        }
        Ok(Self(eps))
    }

    /// Returns the raw epsilon.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns `true` if `x` lies strictly within `(-eps, eps)`.
    #[must_use]
    #[inline]
    pub fn is_near_zero(self, x: f64) -> bool {
        -self.0 < x && x < self.0
    }

    /// Returns `true` if the squared distance between `a` and `b` is near zero.
    ///
    /// The comparison is on the *squared* distance, so two points are equal
    /// when they are closer than `sqrt(eps)`.
    #[must_use]
    #[inline]
    pub fn is_near_equal(self, a: &Point3, b: &Point3) -> bool {
        self.is_near_zero((b - a).norm_squared())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// [`Tolerance::is_near_zero`] with the default tolerance.
#[must_use]
pub fn is_near_equal_zero(x: f64) -> bool {
    Tolerance::DEFAULT.is_near_zero(x)
}

/// [`Tolerance::is_near_equal`] with the default tolerance.
#[must_use]
pub fn is_near_equal(a: &Point3, b: &Point3) -> bool {
    Tolerance::DEFAULT.is_near_equal(a, b)
}
