use glam::Vec2;

/// Wraps `position` across the playfield edge it has crossed.
///
/// An object is only moved once it has fully left the view (it is more than
/// `radius` past the edge) and it reappears the same margin off the opposite
/// edge, so there is no visible pop.
pub fn wrap(position: Vec2, radius: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        wrap_axis(position.x, radius, width),
        wrap_axis(position.y, radius, height)
    )
}

fn wrap_axis(mut value: f32, radius: f32, extent: f32) -> f32 {
    if value > extent + radius {
        value -= extent + 2.0 * radius;
    }
    if value < -radius {
        value += extent + 2.0 * radius;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 1280.0;
    const HEIGHT: f32 = 720.0;
    const RADIUS: f32 = 15.0;

    #[test]
    fn inside_the_margin_is_left_alone() {
        let probes = [
            Vec2::new(-RADIUS, -RADIUS),
            Vec2::new(0.0, 0.0),
            Vec2::new(640.0, 360.0),
            Vec2::new(WIDTH + RADIUS - 0.01, HEIGHT + RADIUS - 0.01),
            Vec2::new(-RADIUS + 0.5, HEIGHT)
        ];
        for p in probes {
            assert_eq!(wrap(p, RADIUS, WIDTH, HEIGHT), p);
        }
    }

    #[test]
    fn crossing_each_edge_reappears_on_the_opposite_one() {
        let eps = 2.0;

        let right = wrap(Vec2::new(WIDTH + RADIUS + eps, 100.0), RADIUS, WIDTH, HEIGHT);
        assert!((right.x - (eps - RADIUS)).abs() < 1e-3);
        assert_eq!(right.y, 100.0);

        let left = wrap(Vec2::new(-RADIUS - eps, 100.0), RADIUS, WIDTH, HEIGHT);
        assert!((left.x - (WIDTH + RADIUS - eps)).abs() < 1e-3);

        let bottom = wrap(Vec2::new(100.0, HEIGHT + RADIUS + eps), RADIUS, WIDTH, HEIGHT);
        assert!((bottom.y - (eps - RADIUS)).abs() < 1e-3);
        assert_eq!(bottom.x, 100.0);

        let top = wrap(Vec2::new(100.0, -RADIUS - eps), RADIUS, WIDTH, HEIGHT);
        assert!((top.y - (HEIGHT + RADIUS - eps)).abs() < 1e-3);
    }

    #[test]
    fn corners_wrap_on_both_axes() {
        let wrapped = wrap(Vec2::new(WIDTH + 20.0, -20.0), 5.0, WIDTH, HEIGHT);
        assert!((wrapped.x - 10.0).abs() < 1e-3);
        assert!((wrapped.y - (HEIGHT - 10.0)).abs() < 1e-3);
    }
}
