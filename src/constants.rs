use std::f32::consts::PI;

// playfield
pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

pub const PLAYER_ACCEL: f32 = 640.0;
pub const PLAYER_MAX_SPEED: f32 = 400.0;
pub const PLAYER_TURN_SPEED: f32 = PI;
pub const PLAYER_RADIUS: f32 = 15.0;
pub const PLAYER_SHIELD_S: f32 = 3.0;
/// Facing straight up the screen (y grows downwards).
pub const PLAYER_START_DIRECTION: f32 = 1.5 * PI;
/// Angle between the nose and each rear corner of the ship hull.
pub const PLAYER_REAR_CORNER_DEGREES: f32 = 140.0;

pub const BULLET_RADIUS: f32 = 2.0;
pub const BULLET_SPEED: f32 = 500.0;
pub const BULLET_COOLDOWN_S: f32 = 0.2;
pub const BULLET_LIFETIME_S: f32 = 1.5;

pub const INITIAL_ASTEROID_COUNT: usize = 3;
pub const ASTEROID_RADIUS_SMALL: f32 = 16.0;
pub const ASTEROID_RADIUS_MEDIUM: f32 = 32.0;
pub const ASTEROID_RADIUS_LARGE: f32 = 64.0;
pub const ASTEROID_MIN_VERTEX_COUNT: usize = 8;
pub const ASTEROID_MAX_VERTEX_COUNT: usize = 14;
/// Per-vertex radius jitter as a fraction of the base radius.
pub const ASTEROID_DEVIATION: f32 = 0.25;
pub const ASTEROID_SPEED: f32 = 60.0;
pub const ASTEROID_ANGULAR_SPEED: f32 = 0.6;
pub const ASTEROID_SPLIT_ANGLE_DEGREES: f32 = 35.0;
pub const ASTEROID_SPLIT_SPEEDUP: f32 = 1.4;
pub const ASTEROID_FRAGMENT_COUNT: usize = 2;
