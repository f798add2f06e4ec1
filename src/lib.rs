//! Simulation core of a top-down asteroids shooter.
//!
//! A [`Game`] owns the player ship, its bullets and the asteroid field. The
//! caller drives it one frame at a time with [`Game::step`], passing the
//! elapsed time and the [`ControlState`] held during the frame, and reads the
//! result back through [`Game::entities`] to draw it. Windowing, input polling
//! and rendering live outside this crate.
//!
//! ```no_run
//! use rasteroids::{ControlState, Game, SimConfig};
//!
//! let mut game = Game::new(SimConfig::default()).unwrap();
//! let controls = ControlState { forward: true, fire: true, ..Default::default() };
//! game.step(1.0 / 60.0, controls);
//! for asteroid in game.entities().asteroids {
//!     let _outline: Vec<_> = asteroid.world_vertices().collect();
//! }
//! ```

pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod math_utils;
pub mod subsystems;
pub mod utility;

pub use components::{Asteroid, AsteroidSize, Bullet, ControlState, Player};
pub use config::SimConfig;
pub use error::ConfigError;
pub use game::{Entities, Game};
