//! The seeking player

use glam::Vec2;

use crate::consts::*;

/// Unit direction from `from` toward `to`, or zero once within `threshold`.
///
/// A zero-length (or non-finite) delta yields `Vec2::ZERO` rather than NaN.
#[inline]
pub fn seek_velocity(from: Vec2, to: Vec2, threshold: f32) -> Vec2 {
    let delta = to - from;
    let distance = delta.length();
    if distance > threshold {
        delta.try_normalize().unwrap_or(Vec2::ZERO)
    } else {
        Vec2::ZERO
    }
}

/// The player circle
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    /// Unit direction of the last step (zero when resting)
    pub vel: Vec2,
    /// Collision radius (drawn, never collided)
    pub radius: f32,
    /// Step length per frame; also the stopping distance
    pub speed_modifier: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: PLAYER_RADIUS,
            speed_modifier: SPEED_MODIFIER,
        }
    }

    pub fn with_params(pos: Vec2, radius: f32, speed_modifier: f32) -> Self {
        Self {
            radius,
            speed_modifier,
            ..Self::new(pos)
        }
    }

    /// Advance one step toward `target`
    pub fn update(&mut self, target: Vec2) {
        self.vel = seek_velocity(self.pos, target, self.speed_modifier);
        self.pos += self.vel * self.speed_modifier;
    }

    /// Whether the last update left the player at rest
    pub fn is_resting(&self) -> bool {
        self.vel == Vec2::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_same_point_stays_put() {
        let p = Vec2::new(640.0, 360.0);
        let mut player = Player::new(p);
        player.update(p);
        assert_eq!(player.vel, Vec2::ZERO);
        assert_eq!(player.pos, p);
    }

    #[test]
    fn test_first_step_toward_target() {
        let mut player = Player::with_params(Vec2::ZERO, 50.0, 5.0);
        player.update(Vec2::new(100.0, 0.0));
        assert_eq!(player.vel, Vec2::new(1.0, 0.0));
        assert_eq!(player.pos, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_zero_distance_is_not_nan() {
        let v = seek_velocity(Vec2::new(3.0, 4.0), Vec2::new(3.0, 4.0), 0.0);
        assert_eq!(v, Vec2::ZERO);
        assert!(v.is_finite());
    }

    #[test]
    fn test_within_threshold_rests() {
        let mut player = Player::with_params(Vec2::ZERO, 50.0, 5.0);
        player.update(Vec2::new(3.0, 4.0)); // distance exactly 5
        assert!(player.is_resting());
        assert_eq!(player.pos, Vec2::ZERO);
    }

    fn coord() -> impl Strategy<Value = Vec2> {
        (0.0f32..1280.0, 0.0f32..720.0).prop_map(|(x, y)| Vec2::new(x, y))
    }

    proptest! {
        #[test]
        fn prop_step_reduces_distance(e in coord(), p in coord(), speed in 0.5f32..20.0) {
            let before = e.distance(p);
            prop_assume!(before > speed);

            let mut player = Player::with_params(e, 50.0, speed);
            player.update(p);
            prop_assert!(player.pos.distance(p) < before);
            prop_assert!((player.vel.length() - 1.0).abs() < 1e-4);
        }

        #[test]
        fn prop_within_threshold_no_move(e in coord(), offset in (-1.0f32..1.0, -1.0f32..1.0), speed in 0.5f32..20.0) {
            // Scale offset so the target lands inside the stopping distance
            let p = e + Vec2::new(offset.0, offset.1) * speed * std::f32::consts::FRAC_1_SQRT_2;
            prop_assume!(e.distance(p) <= speed);

            let mut player = Player::with_params(e, 50.0, speed);
            player.update(p);
            prop_assert_eq!(player.vel, Vec2::ZERO);
            prop_assert_eq!(player.pos, e);
        }

        #[test]
        fn prop_converges(e in coord(), p in coord(), speed in 0.5f32..20.0) {
            let mut player = Player::with_params(e, 50.0, speed);
            let bound = (e.distance(p) / speed).ceil() as u32 + 2;

            let mut steps = 0;
            loop {
                player.update(p);
                if player.is_resting() {
                    break;
                }
                steps += 1;
                prop_assert!(steps <= bound, "no convergence after {} steps", steps);
            }
            prop_assert!(player.pos.distance(p) <= speed);
        }
    }
}
