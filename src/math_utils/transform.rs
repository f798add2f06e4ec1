use glam::{Mat3A, Vec2, Vec3Swizzles, vec3a};

/// Rigid placement of a local shape in world space: rotation about the local
/// origin followed by a translation.
#[derive(Copy, Clone, Debug)]
pub struct Transform {
    matrix: Mat3A,
    inverse: Mat3A
}

impl Transform {
    pub fn from_angle_and_translation(angle: f32, translation: Vec2) -> Self {
        Self {
            matrix: Mat3A::from_translation(translation) * Mat3A::from_angle(angle),
            // rigid motion: undo the translation, then rotate back
            inverse: Mat3A::from_angle(-angle) * Mat3A::from_translation(-translation)
        }
    }

    /// Local point to world space.
    pub fn to_world(&self, point: Vec2) -> Vec2 {
        (self.matrix * vec3a(point.x, point.y, 1.0)).xy()
    }

    /// World point to local space.
    pub fn to_local(&self, point: Vec2) -> Vec2 {
        (self.inverse * vec3a(point.x, point.y, 1.0)).xy()
    }
}
