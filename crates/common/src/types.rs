use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Direction of a keyboard-driven camera move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Spatial transform: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Translation and uniform scale, no rotation.
    pub fn from_translation_scale(position: Vec3, scale: f32) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            scale: Vec3::splat(scale),
        }
    }

    /// Model matrix: scale first, then rotate, then translate.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
        assert_eq!(t.to_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn translate_then_scale_matches_manual_product() {
        let position = Vec3::new(0.5, -1.1, 1.0);
        let t = Transform::from_translation_scale(position, 0.3);
        let expected = Mat4::from_translation(position) * Mat4::from_scale(Vec3::splat(0.3));
        assert!(t.to_matrix().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn scale_applies_before_translation() {
        let t = Transform::from_translation_scale(Vec3::new(1.0, 0.0, 0.0), 2.0);
        let p = t.to_matrix().transform_point3(Vec3::new(1.0, 1.0, 1.0));
        assert!(p.abs_diff_eq(Vec3::new(3.0, 2.0, 2.0), 1e-6));
    }
}
