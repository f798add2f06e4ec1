use glam::Vec2;
use crate::{
    components::*,
    math_utils::{normalize_angle, VectorMath2},
    Game
};

impl Game {
    /// Applies thrust and turning. Returns the heading the frame started with,
    /// which is also the direction bullets fired this frame travel in.
    pub fn update_player_controls(&mut self, controls: ControlState, dt: f32) -> Vec2 {
        let heading = Vec2::from_heading(self.player.direction);

        let mut velocity_change = 0.0;
        if controls.forward {
            velocity_change += dt * self.config.player_accel;
        }
        if controls.back {
            velocity_change -= dt * self.config.player_accel;
        }
        self.player.velocity += heading * velocity_change;

        let mut angle_change = 0.0;
        if controls.turn_right {
            angle_change += dt * self.config.player_turn_speed;
        }
        if controls.turn_left {
            angle_change -= dt * self.config.player_turn_speed;
        }
        self.player.direction = normalize_angle(self.player.direction + angle_change);

        heading
    }

    pub fn update_player_fire(&mut self, controls: ControlState, heading: Vec2, dt: f32) {
        if controls.fire && self.player.bullet_cooldown <= 0.0 {
            self.spawn_bullet(heading);
            self.player.bullet_cooldown = self.config.bullet_cooldown_s;
        }

        // no decay while idle: letting go of the trigger re-arms it at once
        if !controls.fire {
            self.player.bullet_cooldown = 0.0;
        }
        if self.player.bullet_cooldown > 0.0 {
            self.player.bullet_cooldown -= dt;
        }
    }
}
