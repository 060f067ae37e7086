//! Mass matrices of uniformly dense solids centered at the origin.

use crate::mass_matrix::{MassMatrix3F32, MassMatrix3F64};

macro_rules! impl_mass_matrix_shapes {
    ($name:ident, $scalar:ty, $vec3:ty, $quat:ty) => {
        impl $name {
            /// Solid box with edge lengths `size`, edges aligned with the axes.
            pub fn from_box(mass: $scalar, size: $vec3) -> Self {
                Self::new(mass, Self::box_moments(mass, size), <$vec3>::ZERO)
            }

            /// Solid box with edge lengths `size`, rotated by `orientation`.
            pub fn from_box_rotated(mass: $scalar, size: $vec3, orientation: $quat) -> Self {
                Self::from_principal(mass, Self::box_moments(mass, size), orientation)
            }

            /// Solid sphere of the given radius.
            pub fn from_sphere(mass: $scalar, radius: $scalar) -> Self {
                let moment = 0.4 * mass * radius * radius;
                Self::new(mass, <$vec3>::splat(moment), <$vec3>::ZERO)
            }

            /// Solid cylinder of the given radius and length, with its axis along z.
            pub fn from_cylinder_z(mass: $scalar, radius: $scalar, length: $scalar) -> Self {
                let r2 = radius * radius;
                let radial = mass * (3.0 * r2 + length * length) / 12.0;
                let axial = 0.5 * mass * r2;
                Self::new(mass, <$vec3>::new(radial, radial, axial), <$vec3>::ZERO)
            }

            fn box_moments(mass: $scalar, size: $vec3) -> $vec3 {
                let sq = size * size;
                <$vec3>::new(sq.y + sq.z, sq.x + sq.z, sq.x + sq.y) * (mass / 12.0)
            }
        }
    };
}

impl_mass_matrix_shapes!(MassMatrix3F32, f32, glam::Vec3, glam::Quat);
impl_mass_matrix_shapes!(MassMatrix3F64, f64, glam::DVec3, glam::DQuat);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::{DQuat, DVec3, Vec3};

    #[test]
    fn test_cube() {
        let m = MassMatrix3F64::from_box(12.0, DVec3::splat(1.0));
        assert_eq!(m.mass(), 12.0);
        assert_eq!(m.diagonal_moments(), DVec3::splat(2.0));
        assert_eq!(m.off_diagonal_moments(), DVec3::ZERO);
        assert!(m.is_valid());
    }

    #[test]
    fn test_box() {
        let m = MassMatrix3F64::from_box(12.0, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.diagonal_moments(), DVec3::new(13.0, 10.0, 5.0));
        assert!(m.is_valid());
        // already in its principal frame
        assert_eq!(m.principal_axes_offset(), DQuat::IDENTITY);
    }

    #[test]
    fn test_box_rotated() {
        let orientation = DQuat::from_rotation_z(0.3) * DQuat::from_rotation_x(-0.2);
        let m = MassMatrix3F64::from_box_rotated(12.0, DVec3::new(1.0, 2.0, 3.0), orientation);
        assert!(m.is_valid());
        assert_ne!(m.off_diagonal_moments(), DVec3::ZERO);

        // the trace is invariant under rotation
        let diagonal = m.diagonal_moments();
        assert_relative_eq!(diagonal.x + diagonal.y + diagonal.z, 28.0, epsilon = 1e-12);

        let moments = m.principal_moments();
        assert_relative_eq!(moments.x, 5.0, epsilon = 1e-6);
        assert_relative_eq!(moments.y, 10.0, epsilon = 1e-6);
        assert_relative_eq!(moments.z, 13.0, epsilon = 1e-6);
    }

    #[test]
    fn test_sphere() {
        let m = MassMatrix3F64::from_sphere(5.0, 2.0);
        assert_relative_eq!(m.ixx(), 8.0, epsilon = 1e-12);
        assert_eq!(m.ixx(), m.iyy());
        assert_eq!(m.iyy(), m.izz());
        assert!(m.is_valid());
    }

    #[test]
    fn test_cylinder() {
        let m = MassMatrix3F64::from_cylinder_z(2.0, 1.0, 3.0);
        assert_relative_eq!(m.ixx(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(m.iyy(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(m.izz(), 1.0, epsilon = 1e-12);
        assert!(m.is_valid());
    }

    #[test]
    fn test_shapes_f32() {
        let m = MassMatrix3F32::from_box(12.0, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.diagonal_moments(), Vec3::new(13.0, 10.0, 5.0));
        assert!(MassMatrix3F32::from_sphere(1.0, 1.0).is_valid());
        assert!(MassMatrix3F32::from_cylinder_z(1.0, 0.5, 2.0).is_valid());
    }
}
