use rand::SeedableRng;
use rand::rngs::StdRng;
use crate::components::*;
use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::subsystems::entity_spawning;
use crate::utility::StopWatch;

/// Everything a renderer needs after a step.
#[derive(Copy, Clone, Debug)]
pub struct Entities<'a> {
    pub player: Player,
    pub bullets: &'a [Bullet],
    pub asteroids: &'a [Asteroid]
}

/// The whole simulation state. Collections are dense and unordered: removals
/// swap the last element into the freed slot.
pub struct Game {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub asteroids: Vec<Asteroid>,
    pub(crate) config: SimConfig,
    pub(crate) rng: StdRng,
    pub(crate) bump_allocator: bumpalo::Bump
}

impl Game {
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// Same seed and same inputs give the same game.
    pub fn with_seed(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: SimConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let player = Player::spawn(&config);
        let asteroids = entity_spawning::spawn_initial(&config, &mut rng);
        tracing::debug!(asteroids = asteroids.len(), "new game");
        Ok(Self {
            player,
            bullets: Vec::new(),
            asteroids,
            config,
            rng,
            bump_allocator: bumpalo::Bump::new()
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn restart(&mut self) {
        self.player = Player::spawn(&self.config);
        self.bullets.clear();
        self.asteroids = entity_spawning::spawn_initial(&self.config, &mut self.rng);
        tracing::info!(asteroids = self.asteroids.len(), "game restarted");
    }

    pub fn entities(&self) -> Entities<'_> {
        Entities {
            player: self.player,
            bullets: &self.bullets,
            asteroids: &self.asteroids
        }
    }

    /// The player only ever respawns, so the game never ends.
    pub fn is_game_over(&self) -> bool {
        false
    }

    /// Advances the simulation by `dt` seconds. Stage order matters.
    pub fn step(&mut self, dt: f32, controls: ControlState) {
        let _stop_watch = StopWatch::traced("step");
        self.bump_allocator.reset();

        let heading = self.update_player_controls(controls, dt);
        self.update_player_fire(controls, heading, dt);
        self.update_shield(dt);
        self.update_player_position(dt);
        self.update_object_positions(dt);
        self.update_player_collisions();
        self.update_bullet_collisions();
        self.update_life_spans(dt);
    }
}
