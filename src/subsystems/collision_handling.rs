use glam::Vec2;
use crate::{
    math_utils::collision_queries::{PointInPolyQuery, SampledPolyIntersectionQuery},
    subsystems::{entity_spawning::fragment, swap_remove_marked},
    Game
};

impl Game {
    /// A vulnerable player breaks the first asteroid its hull touches and
    /// respawns. The fresh shield keeps it from hitting anything else this frame.
    pub fn update_player_collisions(&mut self) {
        if !self.player.is_damage_eligible() {
            return;
        }

        let samples = self.player.silhouette(
            self.config.player_radius,
            self.config.player_rear_corner_degrees.to_radians()
        );
        let hit = self.asteroids
            .iter()
            .position(|asteroid| {
                Vec2::is_intersect(&samples, Some(asteroid.transform()), &asteroid.vertices)
            });

        if let Some(asteroid_ix) = hit {
            let children = fragment(&self.config, &mut self.rng, &self.asteroids[asteroid_ix]);
            self.asteroids.swap_remove(asteroid_ix);
            self.asteroids.extend(children);
            self.respawn_player();
        }
    }

    /// Every bullet takes out at most one asteroid. Pieces of broken asteroids
    /// only join the field after all bullets have been checked.
    pub fn update_bullet_collisions(&mut self) {
        let bump_allocator = std::mem::take(&mut self.bump_allocator);
        self.bump_allocator = {
            {
                let mut hit_asteroids = bumpalo::collections::Vec::new_in(&bump_allocator);
                let mut hit_bullets = bumpalo::collections::Vec::new_in(&bump_allocator);
                for (bullet_ix, bullet) in self.bullets.iter().enumerate() {
                    let hit = self.asteroids
                        .iter()
                        .enumerate()
                        .filter(|(asteroid_ix, _)| !hit_asteroids.contains(asteroid_ix))
                        .find(|(_, asteroid)| {
                            bullet.position.is_in_poly(Some(asteroid.transform()), &asteroid.vertices)
                        })
                        .map(|(asteroid_ix, _)| asteroid_ix);
                    if let Some(asteroid_ix) = hit {
                        hit_asteroids.push(asteroid_ix);
                        hit_bullets.push(bullet_ix);
                    }
                }

                let mut children = Vec::new();
                for &asteroid_ix in hit_asteroids.iter() {
                    children.extend(fragment(&self.config, &mut self.rng, &self.asteroids[asteroid_ix]));
                }
                swap_remove_marked(&mut self.asteroids, &mut hit_asteroids);
                swap_remove_marked(&mut self.bullets, &mut hit_bullets);
                self.asteroids.extend(children);
            }
            bump_allocator
        };
    }
}

#[cfg(test)]
mod tests {
    use crate::components::*;
    use crate::config::SimConfig;
    use super::*;

    fn square_asteroid(size: AsteroidSize, position: Vec2, half_extent: f32) -> Asteroid {
        Asteroid {
            size,
            position,
            velocity: Vec2::ZERO,
            angle: 0.0,
            angular_velocity: 0.0,
            max_radius: half_extent * std::f32::consts::SQRT_2,
            vertices: vec![
                Vec2::new(-half_extent, -half_extent),
                Vec2::new(-half_extent, half_extent),
                Vec2::new(half_extent, half_extent),
                Vec2::new(half_extent, -half_extent)
            ]
        }
    }

    fn bullet_at(position: Vec2) -> Bullet {
        Bullet { position, velocity: Vec2::ZERO, timer: 1.0 }
    }

    fn empty_game() -> Game {
        let mut game = Game::with_seed(SimConfig::default(), 17).unwrap();
        game.asteroids.clear();
        game
    }

    #[test]
    fn bullet_breaks_exactly_one_asteroid() {
        let mut game = empty_game();
        // two overlapping rocks, one bullet inside both
        game.asteroids.push(square_asteroid(AsteroidSize::Small, Vec2::new(100.0, 100.0), 20.0));
        game.asteroids.push(square_asteroid(AsteroidSize::Small, Vec2::new(110.0, 100.0), 20.0));
        game.bullets.push(bullet_at(Vec2::new(105.0, 100.0)));

        game.update_bullet_collisions();

        assert!(game.bullets.is_empty());
        assert_eq!(game.asteroids.len(), 1);
    }

    #[test]
    fn two_bullets_in_one_asteroid_break_it_once() {
        let mut game = empty_game();
        game.asteroids.push(square_asteroid(AsteroidSize::Large, Vec2::new(100.0, 100.0), 20.0));
        game.bullets.push(bullet_at(Vec2::new(100.0, 100.0)));
        game.bullets.push(bullet_at(Vec2::new(105.0, 105.0)));

        game.update_bullet_collisions();

        // the second bullet finds nothing left to hit and flies on
        assert_eq!(game.bullets.len(), 1);
        assert_eq!(game.asteroids.len(), 2);
        assert!(game.asteroids.iter().all(|it| it.size == AsteroidSize::Medium));
    }

    #[test]
    fn missing_bullets_survive() {
        let mut game = empty_game();
        game.asteroids.push(square_asteroid(AsteroidSize::Medium, Vec2::new(100.0, 100.0), 20.0));
        game.bullets.push(bullet_at(Vec2::new(300.0, 100.0)));

        game.update_bullet_collisions();

        assert_eq!(game.bullets.len(), 1);
        assert_eq!(game.asteroids.len(), 1);
    }

    #[test]
    fn rotation_is_honored_for_bullets() {
        let mut game = empty_game();
        let mut asteroid = square_asteroid(AsteroidSize::Small, Vec2::new(100.0, 100.0), 20.0);
        asteroid.angle = std::f32::consts::FRAC_PI_4;
        game.asteroids.push(asteroid);
        // inside the unrotated square's corner, outside the rotated diamond
        game.bullets.push(bullet_at(Vec2::new(118.0, 118.0)));

        game.update_bullet_collisions();
        assert_eq!(game.bullets.len(), 1);

        // on the diamond's tip axis
        game.bullets[0].position = Vec2::new(126.0, 100.0);
        game.update_bullet_collisions();
        assert!(game.bullets.is_empty());
        assert!(game.asteroids.is_empty());
    }

    #[test]
    fn shielded_player_passes_through() {
        let mut game = empty_game();
        game.player.shield = 0.5;
        let position = game.player.position;
        game.asteroids.push(square_asteroid(AsteroidSize::Large, position, 40.0));

        game.update_player_collisions();

        assert_eq!(game.asteroids.len(), 1);
        assert_eq!(game.player.shield, 0.5);
    }

    #[test]
    fn vulnerable_player_respawns_and_breaks_one_asteroid() {
        let mut game = empty_game();
        game.player.shield = -0.1;
        game.player.position = Vec2::new(200.0, 200.0);
        game.player.velocity = Vec2::new(30.0, 0.0);
        game.player.direction = 1.0;
        game.asteroids.push(square_asteroid(AsteroidSize::Large, Vec2::new(200.0, 200.0), 40.0));
        game.asteroids.push(square_asteroid(AsteroidSize::Large, Vec2::new(205.0, 200.0), 40.0));

        game.update_player_collisions();

        assert_eq!(game.player, Player::spawn(game.config()));
        let large = game.asteroids.iter().filter(|it| it.size == AsteroidSize::Large).count();
        let medium = game.asteroids.iter().filter(|it| it.size == AsteroidSize::Medium).count();
        assert_eq!((large, medium), (1, 2));
    }

    #[test]
    fn only_sampled_points_count_for_the_player() {
        let mut game = empty_game();
        game.player.shield = -0.1;
        game.player.position = Vec2::new(200.0, 200.0);
        game.player.direction = 0.0;
        // a thin sliver crossing the hull between the nose and the rear corners
        game.asteroids.push(Asteroid {
            vertices: vec![
                Vec2::new(-1.0, -30.0),
                Vec2::new(-1.0, 30.0),
                Vec2::new(1.0, 30.0),
                Vec2::new(1.0, -30.0)
            ],
            ..square_asteroid(AsteroidSize::Small, Vec2::new(200.0, 200.0), 1.0)
        });

        game.update_player_collisions();

        assert_eq!(game.asteroids.len(), 1);
        assert_eq!(game.player.position, Vec2::new(200.0, 200.0));
    }
}
