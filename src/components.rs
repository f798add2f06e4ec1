use glam::Vec2;
use crate::config::SimConfig;
use crate::math_utils::VectorMath2;
use crate::math_utils::transform::Transform;

/// Controls held during a frame, sampled once by whoever drives the simulation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlState {
    pub forward: bool,
    pub back: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub fire: bool
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    pub direction: f32,
    pub bullet_cooldown: f32,
    /// Seconds of invulnerability left.
    pub shield: f32
}

impl Player {
    pub fn spawn(config: &SimConfig) -> Self {
        Self {
            position: Vec2::new(config.screen_width * 0.5, config.screen_height * 0.5),
            velocity: Vec2::ZERO,
            direction: config.player_start_direction,
            bullet_cooldown: 0.0,
            shield: config.player_shield_s
        }
    }

    /// Only once the shield has gone strictly negative; a shield of exactly
    /// zero still protects.
    pub fn is_damage_eligible(&self) -> bool {
        self.shield < 0.0
    }

    /// Nose and both rear corners of the ship hull, in world space.
    pub fn silhouette(&self, radius: f32, rear_corner_angle: f32) -> [Vec2; 3] {
        let nose = Vec2::new(radius, 0.0);
        [
            self.position + nose.rotated(self.direction),
            self.position + nose.rotated(self.direction - rear_corner_angle),
            self.position + nose.rotated(self.direction + rear_corner_angle)
        ]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bullet {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Seconds left to live.
    pub timer: f32
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AsteroidSize {
    Small,
    Medium,
    Large
}

impl AsteroidSize {
    /// Size of the pieces this asteroid breaks into, if it breaks at all.
    pub fn next_smaller(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None
        }
    }

    pub fn base_radius(self, config: &SimConfig) -> f32 {
        match self {
            AsteroidSize::Small => config.asteroid_radius_small,
            AsteroidSize::Medium => config.asteroid_radius_medium,
            AsteroidSize::Large => config.asteroid_radius_large
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Asteroid {
    pub size: AsteroidSize,
    pub position: Vec2,
    pub velocity: Vec2,
    pub angle: f32,
    pub angular_velocity: f32,
    /// Distance of the farthest vertex from the center.
    pub max_radius: f32,
    /// Outline in the unrotated local frame; the last vertex connects back to the first.
    pub vertices: Vec<Vec2>
}

impl Asteroid {
    pub fn transform(&self) -> Transform {
        Transform::from_angle_and_translation(self.angle, self.position)
    }

    pub fn world_vertices(&self) -> impl Iterator<Item=Vec2> + '_ {
        let transform = self.transform();
        self.vertices.iter().map(move |&vertex| transform.to_world(vertex))
    }
}
