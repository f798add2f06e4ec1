use std::f32::consts::TAU;
use glam::Vec2;
use rand::Rng;
use crate::{
    components::*,
    config::SimConfig,
    constants::ASTEROID_FRAGMENT_COUNT,
    math_utils::VectorMath2,
    Game
};

/// The starting population: large asteroids scattered over the whole screen,
/// drifting in random directions.
pub fn spawn_initial<R: Rng>(config: &SimConfig, rng: &mut R) -> Vec<Asteroid> {
    let asteroids: Vec<Asteroid> = (0..config.initial_asteroid_count)
        .map(|_| {
            let position = Vec2::new(
                rng.gen_range(0.0..config.screen_width),
                rng.gen_range(0.0..config.screen_height)
            );
            let velocity = Vec2::from_heading(rng.gen_range(0.0..TAU)) * config.asteroid_speed;
            let angular_velocity = if rng.gen::<bool>() {
                config.asteroid_angular_speed
            } else {
                -config.asteroid_angular_speed
            };
            new_asteroid(config, rng, AsteroidSize::Large, position, velocity, angular_velocity)
        })
        .collect();
    tracing::debug!(count = asteroids.len(), "spawned initial asteroids");
    asteroids
}

/// Pieces left behind by a destroyed asteroid. Small asteroids leave nothing.
pub fn fragment<R: Rng>(config: &SimConfig, rng: &mut R, parent: &Asteroid) -> Vec<Asteroid> {
    let child_size = match parent.size.next_smaller() {
        Some(size) => size,
        None => return Vec::new()
    };
    let split_angle = config.asteroid_split_angle_degrees.to_radians();
    let children: Vec<Asteroid> = (0..ASTEROID_FRAGMENT_COUNT)
        .map(|_| {
            let deflection = rng.gen_range(-split_angle..=split_angle);
            let velocity = parent.velocity.rotated(deflection) * config.asteroid_split_speedup;
            new_asteroid(config, rng, child_size, parent.position, velocity, parent.angular_velocity)
        })
        .collect();
    tracing::debug!(
        parent = ?parent.size,
        children = children.len(),
        x = parent.position.x,
        y = parent.position.y,
        "asteroid fragmented"
    );
    children
}

/// Builds an asteroid with a freshly rolled outline: vertices at equal angular
/// steps going clockwise, each pushed in or out by up to the configured
/// deviation.
pub fn new_asteroid<R: Rng>(
    config: &SimConfig,
    rng: &mut R,
    size: AsteroidSize,
    position: Vec2,
    velocity: Vec2,
    angular_velocity: f32
) -> Asteroid {
    let base_radius = size.base_radius(config);
    let deviation = base_radius * config.asteroid_deviation;
    let vertex_count = rng.gen_range(
        config.asteroid_min_vertex_count..=config.asteroid_max_vertex_count
    );
    let angle_step = TAU / vertex_count as f32;

    let vertices: Vec<Vec2> = (0..vertex_count)
        .map(|ix| {
            let radius = base_radius + rng.gen_range(-deviation..=deviation);
            Vec2::from_heading(-(ix as f32) * angle_step) * radius
        })
        .collect();
    let max_radius = vertices.iter()
        .map(|vertex| vertex.length())
        .fold(0.0, f32::max);

    Asteroid {
        size,
        position,
        velocity,
        angle: 0.0,
        angular_velocity,
        max_radius,
        vertices
    }
}

impl Game {
    pub fn spawn_bullet(&mut self, heading: Vec2) {
        let bullet = Bullet {
            position: self.player.position,
            velocity: heading * self.config.bullet_speed + self.player.velocity,
            timer: self.config.bullet_lifetime_s
        };
        tracing::trace!(x = bullet.position.x, y = bullet.position.y, "bullet fired");
        self.bullets.push(bullet);
    }

    pub fn respawn_player(&mut self) {
        self.player = Player::spawn(&self.config);
        tracing::info!("player destroyed, respawning");
    }

    pub fn new_asteroid(
        &mut self,
        size: AsteroidSize,
        position: Vec2,
        velocity: Vec2,
        angular_velocity: f32
    ) -> Asteroid {
        new_asteroid(&self.config, &mut self.rng, size, position, velocity, angular_velocity)
    }

    pub fn fragment(&mut self, parent: &Asteroid) -> Vec<Asteroid> {
        fragment(&self.config, &mut self.rng, parent)
    }
}
