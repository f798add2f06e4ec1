use crate::{
    math_utils::{normalize_angle, wrapping::wrap, VectorMath2},
    Game
};

impl Game {
    pub fn update_player_position(&mut self, dt: f32) {
        let (width, height) = (self.config.screen_width, self.config.screen_height);
        let player = &mut self.player;
        player.velocity = player.velocity.clamp_magnitude(self.config.player_max_speed);
        player.position = wrap(
            player.position + player.velocity * dt,
            self.config.player_radius,
            width,
            height
        );
    }

    /// Moves asteroids and bullets.
    pub fn update_object_positions(&mut self, dt: f32) {
        let (width, height) = (self.config.screen_width, self.config.screen_height);

        for asteroid in self.asteroids.iter_mut() {
            asteroid.position = wrap(
                asteroid.position + asteroid.velocity * dt,
                asteroid.max_radius,
                width,
                height
            );
            asteroid.angle = normalize_angle(asteroid.angle + asteroid.angular_velocity * dt);
        }

        let bullet_radius = self.config.bullet_radius;
        for bullet in self.bullets.iter_mut() {
            bullet.position = wrap(
                bullet.position + bullet.velocity * dt,
                bullet_radius,
                width,
                height
            );
        }
    }
}
