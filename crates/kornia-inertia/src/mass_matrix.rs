//! Mass and moment of inertia of a rigid body.
//!
//! The types are generated by `define_mass_matrix_type!` for single and
//! double precision, on top of the matching `glam` vector, matrix and
//! quaternion types. All numerics are delegated to the precision-generic
//! kernels in [`crate::eigen`] and [`crate::axes`].
//!
//! Validity is advisory: setters store whatever they are given and report
//! whether the result is physically valid, so an invalid inertia can be
//! represented on purpose.

use crate::axes::{self, PrincipalAxes};
use crate::eigen;
use crate::error::InertiaError;
use crate::scalar::approx_eq;
use crate::tol::InertiaTol;

/// Macro to define a mass matrix type.
///
/// # Arguments
///
/// * `name`   - The name of the mass matrix type.
/// * `scalar` - The scalar type.
/// * `vec3`   - The `glam` 3-vector type.
/// * `mat3`   - The `glam` 3x3 matrix type.
/// * `quat`   - The `glam` quaternion type.
macro_rules! define_mass_matrix_type {
    (
        $(#[$meta:meta])*
        $name:ident,
        $scalar:ty,
        $vec3:ty,
        $mat3:ty,
        $quat:ty
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name {
            mass: $scalar,
            diagonal: $vec3,
            off_diagonal: $vec3,
        }

        impl $name {
            /// The zero-norm orientation returned when the principal axes cannot
            /// be resolved. It is never a valid rotation.
            pub const INVALID_ORIENTATION: $quat = <$quat>::from_xyzw(0.0, 0.0, 0.0, 0.0);

            /// Create a mass matrix from its mass, diagonal moments `(Ixx, Iyy, Izz)`
            /// and off-diagonal moments `(Ixy, Ixz, Iyz)`.
            ///
            /// The values are stored unchecked; see [`Self::is_valid`].
            #[inline]
            pub fn new(mass: $scalar, diagonal: $vec3, off_diagonal: $vec3) -> Self {
                Self {
                    mass,
                    diagonal,
                    off_diagonal,
                }
            }

            /// Create a mass matrix, rejecting physically invalid input.
            pub fn try_new(
                mass: $scalar,
                diagonal: $vec3,
                off_diagonal: $vec3,
            ) -> Result<Self, InertiaError> {
                let m = Self::new(mass, diagonal, off_diagonal);
                m.validate()?;
                Ok(m)
            }

            /// Create a mass matrix from a full moment of inertia matrix.
            ///
            /// Off-diagonal entries are symmetrized, see [`Self::set_moment_of_inertia_matrix`].
            pub fn from_moment_of_inertia_matrix(mass: $scalar, moi: &$mat3) -> Self {
                let mut m = Self {
                    mass,
                    ..Default::default()
                };
                m.set_moment_of_inertia_matrix(moi);
                m
            }

            /// Create a mass matrix from principal moments and the principal axes
            /// offset, the inverse of [`Self::principal_axes`].
            ///
            /// The moment of inertia matrix is `R * diag(moments) * R^T` with
            /// `R` the rotation matrix of `offset`.
            pub fn from_principal(mass: $scalar, moments: $vec3, offset: $quat) -> Self {
                let r = <$mat3>::from_quat(offset);
                let moi = r * <$mat3>::from_diagonal(moments) * r.transpose();
                Self::from_moment_of_inertia_matrix(mass, &moi)
            }

            /// The mass.
            #[inline]
            pub fn mass(&self) -> $scalar {
                self.mass
            }

            /// Set the mass. Returns whether the mass matrix is valid afterwards.
            pub fn set_mass(&mut self, mass: $scalar) -> bool {
                self.mass = mass;
                self.is_valid()
            }

            /// The diagonal moments `(Ixx, Iyy, Izz)`.
            #[inline]
            pub fn diagonal_moments(&self) -> $vec3 {
                self.diagonal
            }

            /// Set the diagonal moments. Returns whether the mass matrix is valid afterwards.
            pub fn set_diagonal_moments(&mut self, diagonal: $vec3) -> bool {
                self.diagonal = diagonal;
                self.is_valid()
            }

            /// The off-diagonal moments `(Ixy, Ixz, Iyz)`.
            #[inline]
            pub fn off_diagonal_moments(&self) -> $vec3 {
                self.off_diagonal
            }

            /// Set the off-diagonal moments. Returns whether the mass matrix is valid afterwards.
            pub fn set_off_diagonal_moments(&mut self, off_diagonal: $vec3) -> bool {
                self.off_diagonal = off_diagonal;
                self.is_valid()
            }

            /// Set all six independent entries at once.
            /// Returns whether the mass matrix is valid afterwards.
            pub fn set_inertia_matrix(
                &mut self,
                ixx: $scalar,
                iyy: $scalar,
                izz: $scalar,
                ixy: $scalar,
                ixz: $scalar,
                iyz: $scalar,
            ) -> bool {
                self.diagonal = <$vec3>::new(ixx, iyy, izz);
                self.off_diagonal = <$vec3>::new(ixy, ixz, iyz);
                self.is_valid()
            }

            /// The moment about x.
            #[inline]
            pub fn ixx(&self) -> $scalar {
                self.diagonal.x
            }

            /// The moment about y.
            #[inline]
            pub fn iyy(&self) -> $scalar {
                self.diagonal.y
            }

            /// The moment about z.
            #[inline]
            pub fn izz(&self) -> $scalar {
                self.diagonal.z
            }

            /// The xy product of inertia.
            #[inline]
            pub fn ixy(&self) -> $scalar {
                self.off_diagonal.x
            }

            /// The xz product of inertia.
            #[inline]
            pub fn ixz(&self) -> $scalar {
                self.off_diagonal.y
            }

            /// The yz product of inertia.
            #[inline]
            pub fn iyz(&self) -> $scalar {
                self.off_diagonal.z
            }

            /// Set `ixx`. Returns whether the mass matrix is valid afterwards.
            pub fn set_ixx(&mut self, v: $scalar) -> bool {
                self.diagonal.x = v;
                self.is_valid()
            }

            /// Set `iyy`. Returns whether the mass matrix is valid afterwards.
            pub fn set_iyy(&mut self, v: $scalar) -> bool {
                self.diagonal.y = v;
                self.is_valid()
            }

            /// Set `izz`. Returns whether the mass matrix is valid afterwards.
            pub fn set_izz(&mut self, v: $scalar) -> bool {
                self.diagonal.z = v;
                self.is_valid()
            }

            /// Set `ixy`. Returns whether the mass matrix is valid afterwards.
            pub fn set_ixy(&mut self, v: $scalar) -> bool {
                self.off_diagonal.x = v;
                self.is_valid()
            }

            /// Set `ixz`. Returns whether the mass matrix is valid afterwards.
            pub fn set_ixz(&mut self, v: $scalar) -> bool {
                self.off_diagonal.y = v;
                self.is_valid()
            }

            /// Set `iyz`. Returns whether the mass matrix is valid afterwards.
            pub fn set_iyz(&mut self, v: $scalar) -> bool {
                self.off_diagonal.z = v;
                self.is_valid()
            }

            /// The symmetric moment of inertia matrix.
            pub fn moment_of_inertia_matrix(&self) -> $mat3 {
                let [ixx, iyy, izz] = self.diagonal.to_array();
                let [ixy, ixz, iyz] = self.off_diagonal.to_array();
                <$mat3>::from_cols(
                    <$vec3>::new(ixx, ixy, ixz),
                    <$vec3>::new(ixy, iyy, iyz),
                    <$vec3>::new(ixz, iyz, izz),
                )
            }

            /// Set the moment of inertia matrix.
            ///
            /// `moi` need not be symmetric: each off-diagonal moment is the
            /// mean of the `(i, j)` and `(j, i)` entries.
            /// Returns whether the mass matrix is valid afterwards.
            pub fn set_moment_of_inertia_matrix(&mut self, moi: &$mat3) -> bool {
                // glam is column major: moi.col(j)[i] is row i, column j
                let at = |i: usize, j: usize| moi.col(j)[i];
                self.diagonal = <$vec3>::new(at(0, 0), at(1, 1), at(2, 2));
                self.off_diagonal = <$vec3>::new(
                    0.5 * (at(0, 1) + at(1, 0)),
                    0.5 * (at(0, 2) + at(2, 0)),
                    0.5 * (at(1, 2) + at(2, 1)),
                );
                self.is_valid()
            }

            /// Whether the mass and the leading principal minors of the moment of
            /// inertia matrix are all strictly positive.
            ///
            /// Much cheaper than [`Self::is_valid`], which also solves for the
            /// principal moments.
            pub fn is_positive(&self) -> bool {
                self.mass > 0.0
                    && eigen::is_positive_definite(
                        self.diagonal.to_array(),
                        self.off_diagonal.to_array(),
                    )
            }

            /// Whether the mass matrix is positive and its principal moments
            /// satisfy the triangle inequality.
            pub fn is_valid(&self) -> bool {
                self.is_positive() && Self::valid_moments(self.principal_moments())
            }

            /// Like [`Self::is_valid`], but reports which check failed.
            pub fn validate(&self) -> Result<(), InertiaError> {
                if self.mass.is_nan() || self.mass <= 0.0 {
                    return Err(InertiaError::NonPositiveMass(f64::from(self.mass)));
                }
                if !self.is_positive() {
                    return Err(InertiaError::NotPositiveDefinite);
                }
                let moments = self.principal_moments();
                if !Self::valid_moments(moments) {
                    let [m0, m1, m2] = moments.to_array();
                    return Err(InertiaError::TriangleInequality([
                        f64::from(m0),
                        f64::from(m1),
                        f64::from(m2),
                    ]));
                }
                Ok(())
            }

            /// Whether `moments` are strictly positive and satisfy the strict
            /// triangle inequality.
            #[inline]
            pub fn valid_moments(moments: $vec3) -> bool {
                eigen::valid_moments(moments.to_array())
            }

            /// The principal moments, with the default tolerance.
            ///
            /// NOTE: sorted ascending, except when the off-diagonal moments are
            /// all zero, in which case the diagonal is returned as is.
            #[inline]
            pub fn principal_moments(&self) -> $vec3 {
                self.principal_moments_with_tol(InertiaTol::<$scalar>::default().principal)
            }

            /// The principal moments with a relative tolerance `tol`.
            pub fn principal_moments_with_tol(&self, tol: $scalar) -> $vec3 {
                <$vec3>::from_array(eigen::principal_moments(
                    self.diagonal.to_array(),
                    self.off_diagonal.to_array(),
                    tol,
                ))
            }

            /// The rotation from the body frame to the principal axes, with the
            /// default tolerance.
            #[inline]
            pub fn principal_axes_offset(&self) -> $quat {
                self.principal_axes_offset_with_tol(InertiaTol::<$scalar>::default().principal)
            }

            /// The rotation `q` from the body frame to the principal axes.
            ///
            /// With `R` the rotation matrix of `q` and `L` the diagonal matrix
            /// of sorted principal moments, the moment of inertia matrix is
            /// `R * L * R^T`.
            ///
            /// Returns [`Self::INVALID_ORIENTATION`] if the axes cannot be
            /// resolved, which should not happen for finite input.
            pub fn principal_axes_offset_with_tol(&self, tol: $scalar) -> $quat {
                Self::offset_from_axes(self.solve_axes(tol))
            }

            /// Like [`Self::principal_axes_offset_with_tol`], but reports the
            /// unresolved case as an error.
            pub fn try_principal_axes_offset(&self, tol: $scalar) -> Result<$quat, InertiaError> {
                match self.solve_axes(tol) {
                    PrincipalAxes::Inconsistent => Err(InertiaError::InconsistentPrincipalAxes),
                    axes => Ok(Self::offset_from_axes(axes)),
                }
            }

            /// The principal moments and the principal axes offset, with the
            /// default tolerance.
            pub fn principal_axes(&self) -> ($vec3, $quat) {
                (self.principal_moments(), self.principal_axes_offset())
            }

            /// The principal moments and the principal axes offset with a
            /// relative tolerance `tol`.
            pub fn principal_axes_with_tol(&self, tol: $scalar) -> ($vec3, $quat) {
                (
                    self.principal_moments_with_tol(tol),
                    self.principal_axes_offset_with_tol(tol),
                )
            }

            fn solve_axes(&self, tol: $scalar) -> PrincipalAxes<$scalar> {
                let defaults = InertiaTol::<$scalar>::default();
                // the moments always use the default tolerance, `tol` only
                // drives the choice of branch below
                let moments = eigen::principal_moments(
                    self.diagonal.to_array(),
                    self.off_diagonal.to_array(),
                    defaults.principal,
                );
                axes::principal_axes(
                    self.diagonal.to_array(),
                    self.off_diagonal.to_array(),
                    moments,
                    tol,
                    defaults.angle_sq,
                )
            }

            fn offset_from_axes(axes: PrincipalAxes<$scalar>) -> $quat {
                match axes {
                    PrincipalAxes::Aligned => <$quat>::IDENTITY,
                    PrincipalAxes::Rotated {
                        angles,
                        swap_extremes,
                    } => {
                        let inverse = <$quat>::from_rotation_z(angles.yaw)
                            * <$quat>::from_rotation_y(angles.pitch)
                            * <$quat>::from_rotation_x(angles.roll);
                        let offset = inverse.inverse();
                        if swap_extremes {
                            // quarter turn about y exchanges the x and z axes
                            offset * <$quat>::from_rotation_y(
                                <$scalar as num_traits::FloatConst>::FRAC_PI_2(),
                            )
                        } else {
                            offset
                        }
                    }
                    PrincipalAxes::Inconsistent => Self::INVALID_ORIENTATION,
                }
            }
        }

        // Equality within the default tolerance, not exact.
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                let tol = InertiaTol::<$scalar>::default().equality;
                let a = self.diagonal.to_array().into_iter().chain(self.off_diagonal.to_array());
                let b = other.diagonal.to_array().into_iter().chain(other.off_diagonal.to_array());
                approx_eq(self.mass, other.mass, tol)
                    && a.zip(b).all(|(x, y)| approx_eq(x, y, tol))
            }
        }

        #[cfg(feature = "approx")]
        impl approx::AbsDiffEq for $name {
            type Epsilon = $scalar;

            #[inline]
            fn default_epsilon() -> Self::Epsilon {
                <$scalar as approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                <$scalar as approx::AbsDiffEq>::abs_diff_eq(&self.mass, &other.mass, epsilon)
                    && self.diagonal.abs_diff_eq(other.diagonal, epsilon)
                    && self.off_diagonal.abs_diff_eq(other.off_diagonal, epsilon)
            }
        }

        #[cfg(feature = "approx")]
        impl approx::RelativeEq for $name {
            #[inline]
            fn default_max_relative() -> Self::Epsilon {
                <$scalar as approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let a = [self.mass]
                    .into_iter()
                    .chain(self.diagonal.to_array())
                    .chain(self.off_diagonal.to_array());
                let b = [other.mass]
                    .into_iter()
                    .chain(other.diagonal.to_array())
                    .chain(other.off_diagonal.to_array());
                a.zip(b).all(|(x, y)| {
                    <$scalar as approx::RelativeEq>::relative_eq(&x, &y, epsilon, max_relative)
                })
            }
        }
    };
}

define_mass_matrix_type!(
    /// Mass and moment of inertia of a rigid body (single precision).
    MassMatrix3F32,
    f32,
    glam::Vec3,
    glam::Mat3,
    glam::Quat
);

define_mass_matrix_type!(
    /// Mass and moment of inertia of a rigid body (double precision).
    MassMatrix3F64,
    f64,
    glam::DVec3,
    glam::DMat3,
    glam::DQuat
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::{DMat3, DQuat, DVec3, Quat, Vec3};

    const EPSILON: f64 = 1e-6;

    fn assert_mat3_eq(a: &DMat3, b: &DMat3, epsilon: f64) {
        for (x, y) in a.to_cols_array().iter().zip(b.to_cols_array().iter()) {
            assert_relative_eq!(x, y, epsilon = epsilon);
        }
    }

    // moment of inertia matrix rebuilt from its principal moments and axes
    fn reconstruct(m: &MassMatrix3F64) -> DMat3 {
        let r = DMat3::from_quat(m.principal_axes_offset());
        let mut moments = m.principal_moments().to_array();
        moments.sort_by(|a, b| a.total_cmp(b));
        r * DMat3::from_diagonal(DVec3::from_array(moments)) * r.transpose()
    }

    #[test]
    fn test_default() {
        let m = MassMatrix3F64::default();
        assert_eq!(m.mass(), 0.0);
        assert_eq!(m.diagonal_moments(), DVec3::ZERO);
        assert_eq!(m.off_diagonal_moments(), DVec3::ZERO);
        assert!(!m.is_positive());
        assert!(!m.is_valid());
    }

    #[test]
    fn test_accessors() {
        let mut m = MassMatrix3F64::new(
            1.0,
            DVec3::new(2.0, 3.0, 4.0),
            DVec3::new(0.1, 0.2, 0.3),
        );
        assert_eq!(m.mass(), 1.0);
        assert_eq!(m.ixx(), 2.0);
        assert_eq!(m.iyy(), 3.0);
        assert_eq!(m.izz(), 4.0);
        assert_eq!(m.ixy(), 0.1);
        assert_eq!(m.ixz(), 0.2);
        assert_eq!(m.iyz(), 0.3);

        assert!(m.set_ixx(2.5));
        assert!(m.set_iyy(3.5));
        assert!(m.set_izz(4.5));
        assert!(m.set_ixy(-0.1));
        assert!(m.set_ixz(-0.2));
        assert!(m.set_iyz(-0.3));
        assert_eq!(m.diagonal_moments(), DVec3::new(2.5, 3.5, 4.5));
        assert_eq!(m.off_diagonal_moments(), DVec3::new(-0.1, -0.2, -0.3));

        assert!(m.set_inertia_matrix(2.0, 2.0, 2.0, 0.0, 0.0, 0.0));
        assert_eq!(m.diagonal_moments(), DVec3::splat(2.0));
        assert_eq!(m.off_diagonal_moments(), DVec3::ZERO);
    }

    #[test]
    fn test_setters_store_invalid_values() {
        let mut m = MassMatrix3F64::new(1.0, DVec3::ONE, DVec3::ZERO);
        assert!(m.is_valid());

        assert!(!m.set_mass(-1.0));
        assert_eq!(m.mass(), -1.0);
        assert!(m.set_mass(1.0));

        // triangle inequality violated: 1 + 1 < 3
        assert!(!m.set_izz(3.0));
        assert_eq!(m.izz(), 3.0);
        assert!(m.is_positive());
        assert!(!m.is_valid());

        assert!(!m.set_diagonal_moments(DVec3::new(-1.0, 1.0, 1.0)));
        assert_eq!(m.diagonal_moments(), DVec3::new(-1.0, 1.0, 1.0));

        assert!(!m.set_off_diagonal_moments(DVec3::new(2.0, 0.0, 0.0)));
        assert_eq!(m.off_diagonal_moments(), DVec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_moment_of_inertia_matrix() {
        let m = MassMatrix3F64::new(1.0, DVec3::new(2.0, 3.0, 4.0), DVec3::new(0.1, 0.2, 0.3));
        let moi = m.moment_of_inertia_matrix();
        let expected = DMat3::from_cols_array(&[2.0, 0.1, 0.2, 0.1, 3.0, 0.3, 0.2, 0.3, 4.0]);
        assert_eq!(moi, expected);
        assert_eq!(moi, moi.transpose());
    }

    #[test]
    fn test_set_moment_of_inertia_matrix_symmetrizes() {
        // columns of a non-symmetric matrix
        let a = DMat3::from_cols(
            DVec3::new(2.0, 0.2, -0.4),
            DVec3::new(0.0, 3.0, 0.1),
            DVec3::new(0.2, 0.5, 4.0),
        );
        let mut m = MassMatrix3F64::new(1.0, DVec3::ZERO, DVec3::ZERO);
        assert!(m.set_moment_of_inertia_matrix(&a));

        let moi = m.moment_of_inertia_matrix();
        assert_eq!(moi, moi.transpose());
        assert_eq!(m.diagonal_moments(), DVec3::new(2.0, 3.0, 4.0));
        assert_relative_eq!(m.ixy(), 0.5 * (0.0 + 0.2), epsilon = 1e-15);
        assert_relative_eq!(m.ixz(), 0.5 * (0.2 - 0.4), epsilon = 1e-15);
        assert_relative_eq!(m.iyz(), 0.5 * (0.5 + 0.1), epsilon = 1e-15);
    }

    #[test]
    fn test_is_positive() {
        let m = MassMatrix3F64::new(0.0, DVec3::ONE, DVec3::ZERO);
        assert!(!m.is_positive());
        let m = MassMatrix3F64::new(-1.0, DVec3::ONE, DVec3::ZERO);
        assert!(!m.is_positive());
        let m = MassMatrix3F64::new(1.0, DVec3::new(0.0, 1.0, 1.0), DVec3::ZERO);
        assert!(!m.is_positive());
        let m = MassMatrix3F64::new(1.0, DVec3::ONE, DVec3::new(2.0, 0.0, 0.0));
        assert!(!m.is_positive());
        let m = MassMatrix3F64::new(1.0, DVec3::ONE, DVec3::new(0.0, 0.0, 2.0));
        assert!(!m.is_positive());
        let m = MassMatrix3F64::new(1.0, DVec3::new(3.0, 2.0, 1.0), DVec3::new(0.1, 0.2, 0.3));
        assert!(m.is_positive());
    }

    #[test]
    fn test_valid_moments() {
        assert!(MassMatrix3F64::valid_moments(DVec3::new(1.0, 1.0, 1.0)));
        assert!(MassMatrix3F64::valid_moments(DVec3::new(2.0, 3.0, 4.0)));
        assert!(!MassMatrix3F64::valid_moments(DVec3::new(1.0, 1.0, 2.0)));
        assert!(!MassMatrix3F64::valid_moments(DVec3::new(0.0, 1.0, 1.0)));
        assert!(MassMatrix3F32::valid_moments(Vec3::new(2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_validate() {
        let m = MassMatrix3F64::new(0.0, DVec3::ONE, DVec3::ZERO);
        assert_eq!(m.validate(), Err(InertiaError::NonPositiveMass(0.0)));

        let m = MassMatrix3F64::new(1.0, DVec3::new(-1.0, 1.0, 1.0), DVec3::ZERO);
        assert_eq!(m.validate(), Err(InertiaError::NotPositiveDefinite));

        let m = MassMatrix3F64::new(1.0, DVec3::new(1.0, 1.0, 3.0), DVec3::ZERO);
        assert_eq!(
            m.validate(),
            Err(InertiaError::TriangleInequality([1.0, 1.0, 3.0]))
        );

        let m = MassMatrix3F64::new(1.0, DVec3::ONE, DVec3::ZERO);
        assert_eq!(m.validate(), Ok(()));
    }

    #[test]
    fn test_try_new() {
        assert!(MassMatrix3F64::try_new(1.0, DVec3::ONE, DVec3::ZERO).is_ok());
        assert_eq!(
            MassMatrix3F64::try_new(-2.0, DVec3::ONE, DVec3::ZERO).unwrap_err(),
            InertiaError::NonPositiveMass(-2.0)
        );
    }

    #[test]
    fn test_equality_within_tolerance() {
        let a = MassMatrix3F64::new(1.0, DVec3::new(2.0, 3.0, 4.0), DVec3::new(0.1, 0.2, 0.3));
        let mut b = a;
        assert_eq!(a, b);

        b.set_ixy(0.1 + 1e-8);
        assert_eq!(a, b);

        b.set_ixy(0.1 + 1e-3);
        assert_ne!(a, b);

        let c = MassMatrix3F64::new(1.0 + 1e-3, a.diagonal_moments(), a.off_diagonal_moments());
        assert_ne!(a, c);
    }

    #[test]
    fn test_unit_sphere_like() {
        let m = MassMatrix3F64::new(1.0, DVec3::ONE, DVec3::ZERO);
        assert_eq!(m.principal_moments(), DVec3::ONE);
        assert_eq!(m.principal_axes_offset(), DQuat::IDENTITY);
        assert!(m.is_valid());
    }

    #[test]
    fn test_diagonal_is_identity_and_unsorted() {
        let m = MassMatrix3F64::new(1.0, DVec3::new(4.0, 2.0, 3.0), DVec3::ZERO);
        assert_eq!(m.principal_moments(), DVec3::new(4.0, 2.0, 3.0));
        assert_eq!(m.principal_axes_offset(), DQuat::IDENTITY);
    }

    #[test]
    fn test_round_trip_general() {
        let m = MassMatrix3F64::new(1.0, DVec3::new(3.0, 2.0, 1.0), DVec3::new(0.1, 0.2, 0.3));
        let moments = m.principal_moments();
        assert!(moments.x <= moments.y && moments.y <= moments.z);
        let q = m.principal_axes_offset();
        assert_relative_eq!(q.length(), 1.0, epsilon = 1e-12);
        assert_mat3_eq(&reconstruct(&m), &m.moment_of_inertia_matrix(), EPSILON);
    }

    #[test]
    fn test_round_trip_single_product() {
        let m = MassMatrix3F64::new(1.0, DVec3::new(2.0, 2.0, 3.0), DVec3::new(0.0, 0.0, 0.5));
        assert_mat3_eq(&reconstruct(&m), &m.moment_of_inertia_matrix(), EPSILON);
    }

    #[test]
    fn test_round_trip_repeated() {
        for off in [0.25, -0.25] {
            let m = MassMatrix3F64::new(1.0, DVec3::splat(3.0), DVec3::splat(off));
            assert_mat3_eq(&reconstruct(&m), &m.moment_of_inertia_matrix(), EPSILON);
        }
    }

    #[test]
    fn test_invalid_orientation() {
        let m = MassMatrix3F64::new(1.0, DVec3::new(5.0, 4.0, 4.0), DVec3::new(1e-3, 0.0, 0.0));
        let q = m.principal_axes_offset_with_tol(1e-2);
        assert_eq!(q, MassMatrix3F64::INVALID_ORIENTATION);
        assert_eq!(q.length_squared(), 0.0);
        assert_eq!(
            m.try_principal_axes_offset(1e-2),
            Err(InertiaError::InconsistentPrincipalAxes)
        );
        // the default tolerance resolves the same tensor
        assert!(m.try_principal_axes_offset(1e-6).is_ok());
    }

    #[test]
    fn test_from_principal() {
        let offset = DQuat::from_axis_angle(DVec3::new(1.0, 2.0, 3.0).normalize(), 0.7);
        let moments = DVec3::new(1.0, 2.0, 2.5);
        let m = MassMatrix3F64::from_principal(2.0, moments, offset);
        assert_eq!(m.mass(), 2.0);
        let solved = m.principal_moments();
        assert_relative_eq!(solved.x, 1.0, epsilon = EPSILON);
        assert_relative_eq!(solved.y, 2.0, epsilon = EPSILON);
        assert_relative_eq!(solved.z, 2.5, epsilon = EPSILON);
        assert_mat3_eq(&reconstruct(&m), &m.moment_of_inertia_matrix(), EPSILON);
    }

    #[test]
    fn test_f32() {
        let m = MassMatrix3F32::new(1.0, Vec3::new(3.0, 2.0, 1.0), Vec3::new(0.1, 0.2, 0.3));
        assert!(m.is_valid());
        let (moments, q) = m.principal_axes();
        let r = glam::Mat3::from_quat(q);
        let moi = r * glam::Mat3::from_diagonal(moments) * r.transpose();
        for (x, y) in moi
            .to_cols_array()
            .iter()
            .zip(m.moment_of_inertia_matrix().to_cols_array().iter())
        {
            assert_relative_eq!(x, y, epsilon = 1e-3);
        }

        let m = MassMatrix3F32::new(1.0, Vec3::ONE, Vec3::ZERO);
        assert_eq!(m.principal_axes_offset(), Quat::IDENTITY);
    }
}
