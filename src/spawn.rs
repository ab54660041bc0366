/// Entity factories.
///
/// Every function that needs randomness takes the RNG as a parameter so
/// callers decide between a seeded generator (tests, `--seed`) and entropy.

use rand::Rng;

use crate::consts::*;
use crate::entities::{Circle, GameState, PowerUp, PowerUpKind};
use crate::geometry::Rect;

/// A fresh circle just above the play area. Higher levels fall faster.
pub fn reset_circle(level: u32, rng: &mut impl Rng) -> Circle {
    let x = rng.gen_range(0..=WIDTH - CIRCLE_SIZE);
    Circle {
        rect: Rect::new(x, -CIRCLE_SIZE, CIRCLE_SIZE, CIRCLE_SIZE),
        speed: BASE_CIRCLE_SPEED + level as i32,
    }
}

/// A fresh power-up just above the play area, Life or Slow with equal odds.
pub fn reset_powerup(rng: &mut impl Rng) -> PowerUp {
    let x = rng.gen_range(0..=WIDTH - POWERUP_SIZE);
    let kind = if rng.gen_bool(0.5) {
        PowerUpKind::Life
    } else {
        PowerUpKind::Slow
    };
    PowerUp {
        rect: Rect::new(x, -POWERUP_SIZE, POWERUP_SIZE, POWERUP_SIZE),
        kind,
        speed: POWERUP_SPEED,
    }
}

/// The paddle, centred horizontally near the bottom edge.
pub fn reset_player() -> Rect {
    Rect::new(
        WIDTH / 2 - RECT_W / 2,
        HEIGHT - PLAYER_BOTTOM_GAP,
        RECT_W,
        RECT_H,
    )
}

/// Build the state for a brand-new session.
pub fn reset_game(rng: &mut impl Rng) -> GameState {
    GameState {
        player: reset_player(),
        score: 0,
        missed: 0,
        lives: MAX_LIVES,
        level: 0,
        paused: false,
        slow_timer: 0,
        circle: reset_circle(0, rng),
        powerups: Vec::new(),
    }
}
