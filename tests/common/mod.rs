#![allow(dead_code)]

use std::collections::VecDeque;

use catch_the_circle::compute::Movement;
use catch_the_circle::consts::CIRCLE_SIZE;
use catch_the_circle::entities::{Circle, GameState, PowerUp, PowerUpKind};
use catch_the_circle::geometry::Rect;
use catch_the_circle::spawn::reset_player;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Paddle centred at (210, 360); circle parked in the top-left corner, well
/// away from the paddle.
pub fn make_state() -> GameState {
    GameState {
        player: reset_player(),
        score: 0,
        missed: 0,
        lives: 3,
        level: 0,
        paused: false,
        slow_timer: 0,
        circle: Circle {
            rect: Rect::new(0, 0, CIRCLE_SIZE, CIRCLE_SIZE),
            speed: 3,
        },
        powerups: Vec::new(),
    }
}

pub fn powerup_at(x: i32, y: i32, kind: PowerUpKind) -> PowerUp {
    PowerUp {
        rect: Rect::new(x, y, 30, 30),
        kind,
        speed: 4,
    }
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

pub const IDLE: Movement = Movement {
    left: false,
    right: false,
};

/// RNG double with scripted coin flips.
///
/// `gen_bool` compares one `u64` against the probability threshold, so a
/// queued `true` yields 0 (always below) and `false` yields `u64::MAX`
/// (never below).  An empty queue answers `false`.  `u32` draws are always
/// 0, which makes every `gen_range` over `i32` return its lower bound.
pub struct ScriptedRng {
    flips: VecDeque<bool>,
}

impl ScriptedRng {
    pub fn new(flips: &[bool]) -> Self {
        Self {
            flips: flips.iter().copied().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.flips.len()
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        match self.flips.pop_front() {
            Some(true) => 0,
            _ => u64::MAX,
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
