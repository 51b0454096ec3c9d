//! One horizontal stream of glyphs per animation row.

use rand::Rng;

use super::RainConfig;
use crate::config::animation::{SPEED_MIN, SPEED_SPREAD};

#[derive(Clone, Debug, PartialEq)]
pub struct RainStream {
    /// Head position in CSS pixels; negative while off-screen to the left.
    pub x: f64,
    /// Pixels advanced per frame, always positive.
    pub speed: f64,
    pub row: usize,
}

impl RainStream {
    /// A stream starting somewhere up to one surface width off the left edge.
    pub fn spawn(row: usize, width: f64, speed_multiplier: f64, rng: &mut impl Rng) -> Self {
        Self {
            x: -rng.r#gen::<f64>() * width,
            speed: random_speed(speed_multiplier, rng),
            row,
        }
    }

    /// Move one frame to the right, wrapping back off-screen with a fresh
    /// speed once past the far edge plus the margin. Returns whether it wrapped.
    pub fn advance(
        &mut self,
        width: f64,
        speed_multiplier: f64,
        config: &RainConfig,
        rng: &mut impl Rng,
    ) -> bool {
        self.x += self.speed;
        if self.x > width + config.wrap_margin {
            self.x = -config.wrap_margin - rng.r#gen::<f64>() * config.respawn_spread;
            self.speed = random_speed(speed_multiplier, rng);
            true
        } else {
            false
        }
    }
}

fn random_speed(multiplier: f64, rng: &mut impl Rng) -> f64 {
    (SPEED_MIN + rng.r#gen::<f64>() * SPEED_SPREAD) * multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_spawn_is_off_screen_with_positive_speed() {
        let mut rng = SmallRng::seed_from_u64(7);
        for row in 0..50 {
            let stream = RainStream::spawn(row, 300.0, 1.0, &mut rng);
            assert!(stream.x <= 0.0 && stream.x >= -300.0);
            assert!(stream.speed >= SPEED_MIN && stream.speed <= SPEED_MIN + SPEED_SPREAD);
            assert_eq!(stream.row, row);
        }
    }

    #[test]
    fn test_speed_multiplier_scales_speed() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let stream = RainStream::spawn(0, 300.0, 2.0, &mut rng);
            assert!(stream.speed >= 2.0 * SPEED_MIN);
        }
    }

    #[test]
    fn test_advance_moves_right() {
        let mut rng = SmallRng::seed_from_u64(1);
        let config = RainConfig::default();
        let mut stream = RainStream { x: 10.0, speed: 2.5, row: 0 };
        assert!(!stream.advance(300.0, 1.0, &config, &mut rng));
        assert_eq!(stream.x, 12.5);
        assert_eq!(stream.speed, 2.5);
    }

    #[test]
    fn test_advance_wraps_past_margin() {
        let mut rng = SmallRng::seed_from_u64(1);
        let config = RainConfig::default();
        let mut stream = RainStream {
            x: 300.0 + config.wrap_margin,
            speed: 1.0,
            row: 3,
        };
        assert!(stream.advance(300.0, 1.0, &config, &mut rng));
        assert!(stream.x <= -config.wrap_margin);
        assert!(stream.x >= -config.wrap_margin - config.respawn_spread);
        assert!(stream.speed > 0.0);
        assert_eq!(stream.row, 3);
    }

    #[test]
    fn test_no_wrap_exactly_at_margin() {
        let mut rng = SmallRng::seed_from_u64(1);
        let config = RainConfig::default();
        let mut stream = RainStream {
            x: 300.0 + config.wrap_margin - 1.0,
            speed: 1.0,
            row: 0,
        };
        assert!(!stream.advance(300.0, 1.0, &config, &mut rng));
    }
}
