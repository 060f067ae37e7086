//! Numeric tolerances used by the inertia solvers.

use crate::scalar::Scalar;

/// Default relative tolerance for principal moments, principal axes and equality.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Squared length below which a 2-vector is considered to have no direction.
pub const DEFAULT_ANGLE_TOLERANCE_SQ: f64 = 1e-12;

/// Numeric tolerances shared by the principal moment and principal axis solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertiaTol<T> {
    /// Relative tolerance for branch selection, scaled by the largest diagonal moment.
    pub principal: T,
    /// Tolerance used when comparing two mass matrices for equality.
    pub equality: T,
    /// Squared-length threshold of the two-argument arctangent helper.
    pub angle_sq: T,
}

impl<T: Scalar> InertiaTol<T> {
    /// Tolerances with a custom `principal` value and defaults elsewhere.
    pub fn with_principal(principal: T) -> Self {
        Self {
            principal,
            ..Self::default()
        }
    }

    /// Absolute tolerance for a tensor whose largest diagonal moment is `max_diagonal`.
    #[inline]
    pub fn scaled(&self, max_diagonal: T) -> T {
        self.principal * max_diagonal
    }
}

impl<T: Scalar> Default for InertiaTol<T> {
    fn default() -> Self {
        Self {
            principal: T::from_f64(DEFAULT_TOLERANCE),
            equality: T::from_f64(DEFAULT_TOLERANCE),
            angle_sq: T::from_f64(DEFAULT_ANGLE_TOLERANCE_SQ),
        }
    }
}
