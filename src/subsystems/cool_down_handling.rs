use crate::Game;

impl Game {
    /// Counts the shield down while it is positive. Protection ends only once
    /// it goes negative, so a shield that lands exactly on `0.0` stays up for
    /// good; with the default 3 s shield that takes a `dt` dividing 3 exactly
    /// in binary, e.g. `0.25`.
    pub fn update_shield(&mut self, dt: f32) {
        if self.player.shield > 0.0 {
            self.player.shield -= dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SimConfig;
    use super::*;

    #[test]
    fn shield_runs_out_past_zero() {
        let mut game = Game::with_seed(SimConfig::default(), 5).unwrap();
        game.player.shield = 0.5;
        game.update_shield(0.3);
        assert!(!game.player.is_damage_eligible());
        game.update_shield(0.3);
        assert!(game.player.shield < 0.0);
        assert!(game.player.is_damage_eligible());

        let spent = game.player.shield;
        game.update_shield(0.3);
        assert_eq!(game.player.shield, spent);
    }

    #[test]
    fn shield_parked_at_zero_never_decays() {
        let mut game = Game::with_seed(SimConfig::default(), 5).unwrap();
        game.player.shield = 0.0;
        game.update_shield(1.0);
        assert_eq!(game.player.shield, 0.0);
        assert!(!game.player.is_damage_eligible());
    }

    #[test]
    fn shield_landing_exactly_on_zero_keeps_protecting() {
        let mut game = Game::with_seed(SimConfig::default(), 5).unwrap();
        game.player.shield = 3.0;
        for _ in 0..12 {
            game.update_shield(0.25);
        }
        assert_eq!(game.player.shield, 0.0);
        game.update_shield(0.25);
        assert!(!game.player.is_damage_eligible());
    }
}
