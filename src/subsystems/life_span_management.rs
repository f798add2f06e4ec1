use crate::{
    subsystems::swap_remove_marked,
    Game
};

// fraction of the full lifetime that still counts as run out; repeated f32
// subtraction leaves remainders of this order behind
const EXPIRY_TOLERANCE: f32 = 1e-4;

impl Game {
    pub fn update_life_spans(&mut self, dt: f32) {
        let expiry_threshold = self.config.bullet_lifetime_s * EXPIRY_TOLERANCE;
        let bump_allocator = std::mem::take(&mut self.bump_allocator);
        self.bump_allocator = {
            {
                let mut dead_bullets = bumpalo::collections::Vec::new_in(&bump_allocator);
                for (ix, bullet) in self.bullets.iter_mut().enumerate() {
                    bullet.timer -= dt;
                    if bullet.timer <= expiry_threshold {
                        dead_bullets.push(ix);
                    }
                }
                if !dead_bullets.is_empty() {
                    tracing::trace!(count = dead_bullets.len(), "bullets expired");
                }
                swap_remove_marked(&mut self.bullets, &mut dead_bullets);
            }
            bump_allocator
        };
    }
}
