//! Startup configuration of the simulation.
//!
//! [`SimConfig`] mirrors every constant in [`crate::constants`], which stay the
//! authoritative defaults. A TOML document may override any subset of them:
//!
//! ```toml
//! screen_width = 800.0
//! screen_height = 600.0
//! bullet_lifetime_s = 1.0
//! ```
//!
//! Missing keys keep their default. The config is consumed when a
//! [`crate::Game`] is built and cannot be changed afterwards.

use std::path::Path;
use serde::Deserialize;
use crate::constants::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // playfield
    pub screen_width: f32,
    pub screen_height: f32,

    // player
    pub player_accel: f32,
    pub player_max_speed: f32,
    pub player_turn_speed: f32,
    pub player_radius: f32,
    pub player_shield_s: f32,
    pub player_start_direction: f32,
    pub player_rear_corner_degrees: f32,

    // bullets
    pub bullet_radius: f32,
    pub bullet_speed: f32,
    pub bullet_cooldown_s: f32,
    pub bullet_lifetime_s: f32,

    // asteroids
    pub initial_asteroid_count: usize,
    pub asteroid_radius_small: f32,
    pub asteroid_radius_medium: f32,
    pub asteroid_radius_large: f32,
    pub asteroid_min_vertex_count: usize,
    pub asteroid_max_vertex_count: usize,
    pub asteroid_deviation: f32,
    pub asteroid_speed: f32,
    pub asteroid_angular_speed: f32,
    pub asteroid_split_angle_degrees: f32,
    pub asteroid_split_speedup: f32
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            player_accel: PLAYER_ACCEL,
            player_max_speed: PLAYER_MAX_SPEED,
            player_turn_speed: PLAYER_TURN_SPEED,
            player_radius: PLAYER_RADIUS,
            player_shield_s: PLAYER_SHIELD_S,
            player_start_direction: PLAYER_START_DIRECTION,
            player_rear_corner_degrees: PLAYER_REAR_CORNER_DEGREES,
            bullet_radius: BULLET_RADIUS,
            bullet_speed: BULLET_SPEED,
            bullet_cooldown_s: BULLET_COOLDOWN_S,
            bullet_lifetime_s: BULLET_LIFETIME_S,
            initial_asteroid_count: INITIAL_ASTEROID_COUNT,
            asteroid_radius_small: ASTEROID_RADIUS_SMALL,
            asteroid_radius_medium: ASTEROID_RADIUS_MEDIUM,
            asteroid_radius_large: ASTEROID_RADIUS_LARGE,
            asteroid_min_vertex_count: ASTEROID_MIN_VERTEX_COUNT,
            asteroid_max_vertex_count: ASTEROID_MAX_VERTEX_COUNT,
            asteroid_deviation: ASTEROID_DEVIATION,
            asteroid_speed: ASTEROID_SPEED,
            asteroid_angular_speed: ASTEROID_ANGULAR_SPEED,
            asteroid_split_angle_degrees: ASTEROID_SPLIT_ANGLE_DEGREES,
            asteroid_split_speedup: ASTEROID_SPLIT_SPEEDUP
        }
    }
}

impl SimConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let strictly_positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("player_radius", self.player_radius),
            ("bullet_radius", self.bullet_radius),
            ("bullet_lifetime_s", self.bullet_lifetime_s),
            ("asteroid_radius_small", self.asteroid_radius_small),
            ("asteroid_radius_medium", self.asteroid_radius_medium),
            ("asteroid_radius_large", self.asteroid_radius_large)
        ];
        for (name, value) in strictly_positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue { name, value, expected: "a finite value > 0" });
            }
        }

        let non_negative = [
            ("player_accel", self.player_accel),
            ("player_max_speed", self.player_max_speed),
            ("player_turn_speed", self.player_turn_speed),
            ("player_shield_s", self.player_shield_s),
            ("bullet_speed", self.bullet_speed),
            ("bullet_cooldown_s", self.bullet_cooldown_s),
            ("asteroid_speed", self.asteroid_speed),
            ("asteroid_angular_speed", self.asteroid_angular_speed),
            ("asteroid_split_angle_degrees", self.asteroid_split_angle_degrees),
            ("asteroid_split_speedup", self.asteroid_split_speedup)
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { name, value, expected: "a finite value >= 0" });
            }
        }

        if !(0.0..1.0).contains(&self.asteroid_deviation) {
            return Err(ConfigError::InvalidValue {
                name: "asteroid_deviation",
                value: self.asteroid_deviation,
                expected: "a fraction in [0, 1)"
            });
        }

        if self.asteroid_min_vertex_count < 3 ||
            self.asteroid_min_vertex_count > self.asteroid_max_vertex_count
        {
            return Err(ConfigError::InvalidVertexRange {
                min: self.asteroid_min_vertex_count,
                max: self.asteroid_max_vertex_count
            });
        }

        Ok(())
    }
}
