pub mod collision_queries;
pub mod transform;
pub mod wrapping;

use std::f32::consts::TAU;
use glam::Vec2;

pub trait CrossProduct2 where Self: Copy {
    fn cross2(self, other: Self) -> f32;
}

impl CrossProduct2 for Vec2 {
    fn cross2(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }
}

/// Planar helpers on top of what glam already gives us through operators
/// (add, subtract and scale).
pub trait VectorMath2 where Self: Copy {
    /// Unit vector pointing along `angle` (radians, measured from +x towards +y).
    fn from_heading(angle: f32) -> Self;
    fn rotated(self, angle: f32) -> Self;
    /// Scales the vector down to `max` if it is longer, otherwise returns it unchanged.
    fn clamp_magnitude(self, max: f32) -> Self;
}

impl VectorMath2 for Vec2 {
    fn from_heading(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(cos, sin)
    }

    fn rotated(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos
        )
    }

    fn clamp_magnitude(self, max: f32) -> Self {
        let length_squared = self.length_squared();
        if length_squared > max * max {
            self * (max / length_squared.sqrt())
        } else {
            self
        }
    }
}

/// Brings any finite angle into `[0, 2π)`.
pub fn normalize_angle(angle: f32) -> f32 {
    let normalized = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if normalized >= TAU {
        0.0
    } else {
        normalized
    }
}
