//! Errors reported by the checked inertia APIs.

use thiserror::Error;

/// Error types for inertia validation and principal axes computation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InertiaError {
    /// The mass is zero, negative or NaN.
    #[error("mass must be strictly positive, got {0}")]
    NonPositiveMass(f64),

    /// A leading principal minor of the moment of inertia matrix is not positive.
    #[error("moment of inertia matrix is not positive definite")]
    NotPositiveDefinite,

    /// The principal moments violate the triangle inequality.
    #[error("principal moments {0:?} violate the triangle inequality")]
    TriangleInequality([f64; 3]),

    /// The repeated-moment configuration could not be resolved into a rotation.
    #[error("principal axes are inconsistent with the principal moments")]
    InconsistentPrincipalAxes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InertiaError::NonPositiveMass(-1.0).to_string(),
            "mass must be strictly positive, got -1"
        );
        assert_eq!(
            InertiaError::TriangleInequality([1.0, 1.0, 3.0]).to_string(),
            "principal moments [1.0, 1.0, 3.0] violate the triangle inequality"
        );
    }
}
