#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Kornia Inertia
//!
//! Mass and moment of inertia of a rigid body, with closed-form principal
//! moments and principal axes.
//!
//! ## Key Features
//!
//! - **Mass matrix**: `f32` and `f64` types over `glam`, with advisory validity checks
//! - **Principal moments**: trigonometric solution of the characteristic cubic
//! - **Principal axes**: the rotation that diagonalizes the moment of inertia matrix
//! - **Solids**: boxes, spheres and cylinders of uniform density
//!
//! ## Example
//!
//! ```rust
//! use glam::{DMat3, DVec3};
//! use kornia_inertia::MassMatrix3;
//!
//! let m = MassMatrix3::new(1.0, DVec3::new(2.0, 2.0, 3.0), DVec3::new(0.0, 0.0, 0.5));
//! assert!(m.is_valid());
//!
//! let (moments, offset) = m.principal_axes();
//! let r = DMat3::from_quat(offset);
//! let moi = r * DMat3::from_diagonal(moments) * r.transpose();
//! assert!(moi.abs_diff_eq(m.moment_of_inertia_matrix(), 1e-6));
//! ```

/// Small angle helpers shared by the solvers.
pub mod angle;

/// Closed-form principal axes of a symmetric 3x3 tensor.
pub mod axes;

/// Closed-form principal moments and validity checks.
pub mod eigen;

/// Error types for the inertia module.
pub mod error;

/// Mass and moment of inertia of a rigid body.
pub mod mass_matrix;

/// Scalar trait the solvers are generic over.
pub mod scalar;

/// Uniformly dense solids.
pub mod shapes;

/// Numeric tolerances.
pub mod tol;

pub use axes::{EulerAngles, PrincipalAxes};
pub use error::InertiaError;
pub use mass_matrix::{MassMatrix3F32, MassMatrix3F64};
pub use scalar::Scalar;
pub use tol::{InertiaTol, DEFAULT_TOLERANCE};

/// Double precision mass matrix.
pub type MassMatrix3 = MassMatrix3F64;
