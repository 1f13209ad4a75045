use glam::Mat4;

/// Modelview + projection pair uploaded to the shader every frame.
///
/// Both start from identity each frame; there is no persistent camera.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transforms {
    pub modelview: Mat4,
    pub projection: Mat4,
}

impl Transforms {
    pub const IDENTITY: Self = Self {
        modelview: Mat4::IDENTITY,
        projection: Mat4::IDENTITY,
    };

    /// Identity modelview rotated about z by `degrees`; identity projection.
    pub fn rotated_z(degrees: f64) -> Self {
        Self {
            modelview: Mat4::IDENTITY * Mat4::from_rotation_z(degrees.to_radians() as f32),
            projection: Mat4::IDENTITY,
        }
    }

    /// Column-major modelview, as the shader expects it.
    #[inline]
    pub fn modelview_cols(&self) -> [f32; 16] {
        self.modelview.to_cols_array()
    }

    /// Column-major projection, as the shader expects it.
    #[inline]
    pub fn projection_cols(&self) -> [f32; 16] {
        self.projection.to_cols_array()
    }
}

impl Default for Transforms {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Position, BASE_POSITIONS};
    use glam::Vec4;

    /// Clip-space position, as the vertex shader computes it.
    fn apply(t: &Transforms, p: Position) -> Vec4 {
        t.projection * t.modelview * Vec4::new(p[0], p[1], p[2], 1.0)
    }

    fn close(a: Vec4, b: Vec4) -> bool {
        (a - b).abs().max_element() < 1e-6
    }

    #[test]
    fn zero_rotation_is_identity() {
        assert_eq!(Transforms::rotated_z(0.0), Transforms::IDENTITY);
    }

    #[test]
    fn quarter_turn_maps_x_to_y() {
        let t = Transforms::rotated_z(90.0);
        assert!(close(apply(&t, [1.0, 0.0, 0.0]), Vec4::new(0.0, 1.0, 0.0, 1.0)));
        assert!(close(apply(&t, [0.0, 1.0, 0.0]), Vec4::new(-1.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn rotation_preserves_distance_from_origin() {
        let t = Transforms::rotated_z(-37.5);
        for p in BASE_POSITIONS {
            let before = (p[0] * p[0] + p[1] * p[1]).sqrt();
            let q = apply(&t, p);
            let after = (q.x * q.x + q.y * q.y).sqrt();
            assert!((before - after).abs() < 1e-6);
            assert_eq!(q.z, 0.0);
        }
    }

    #[test]
    fn projection_stays_identity() {
        let t = Transforms::rotated_z(45.0);
        assert_eq!(t.projection_cols(), Mat4::IDENTITY.to_cols_array());
        assert_ne!(t.modelview_cols(), Mat4::IDENTITY.to_cols_array());
    }
}
