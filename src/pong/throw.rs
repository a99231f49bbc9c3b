use egui::{Pos2, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pong::algebra_2d::unit_vector_towards;
use crate::pong::rules::{BALL_CENTER_X, DIRECTION_NUDGE, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Screen half a throw aims at, or the horizontal travel side of the ball
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    /// neither - no horizontal movement
    Center,
}

impl Side {
    pub fn of_target_x(target_x: f32) -> Self {
        if target_x > BALL_CENTER_X {
            Side::Right
        } else {
            Side::Left
        }
    }

    pub fn of_direction(direction: Vec2) -> Self {
        if direction.x > 0.0 {
            Side::Right
        } else if direction.x < 0.0 {
            Side::Left
        } else {
            Side::Center
        }
    }
}

/// Produces ball throw directions.
///
/// Each throw aims at a random point on the screen, and two consecutive throws never aim at the same
/// screen half. The random generator is seeded once and reused for all throws.
#[derive(Clone, Debug)]
pub struct Thrower {
    rng: StdRng,
    last_side: Side,
}

impl Thrower {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            // so the very first throw goes right
            last_side: Side::Left,
        }
    }

    pub fn last_side(&self) -> Side {
        self.last_side
    }

    /// Normalized direction from `ball_pos` towards a fresh random target on the other screen half.
    pub fn throw_from(&mut self, ball_pos: Pos2) -> Vec2 {
        self.throw_at_targets(ball_pos, Thrower::choose_target)
    }

    fn throw_at_targets(&mut self, ball_pos: Pos2, mut next_target: impl FnMut(&mut Self) -> Pos2) -> Vec2 {
        loop {
            let target = next_target(self);
            // a target right on the ball gives no direction; aim again
            if let Some(direction) = unit_vector_towards(ball_pos, target) {
                self.last_side = Side::of_target_x(target.x);
                log::debug!("throw towards {:?} ({:?}), direction: {:?}", target, self.last_side, direction);
                return direction;
            }
        }
    }

    fn choose_target(&mut self) -> Pos2 {
        loop {
            let target_x = self.rng.gen_range(0..SCREEN_WIDTH as u32) as f32;
            let target_y = self.rng.gen_range(0..SCREEN_HEIGHT as u32) as f32;
            if Side::of_target_x(target_x) != self.last_side {
                return Pos2::new(target_x, target_y);
            }
        }
    }

    /// 50/50 left or right nudge for a ball without horizontal movement
    pub fn random_nudge_x(&mut self) -> f32 {
        if self.rng.gen_bool(0.5) {
            DIRECTION_NUDGE
        } else {
            -DIRECTION_NUDGE
        }
    }
}

impl Default for Thrower {
    fn default() -> Self {
        Self::new()
    }
}
