/// Pure game-logic functions.
///
/// `update` takes an immutable reference to the current `GameState` (and an
/// RNG handle) and returns a brand-new `GameState`.  Side effects are limited
/// to the injected RNG and log output.

use rand::Rng;

use crate::consts::*;
use crate::entities::{GameState, PowerUpKind};
use crate::spawn::{reset_circle, reset_powerup};

/// Movement keys held during this frame.  Both may be held at once; each
/// applies independently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Movement {
    pub left: bool,
    pub right: bool,
}

/// Whether the session survived the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    /// Lives ran out during this frame.
    Ended,
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Pixels the circle falls this frame.  The slow effect takes one pixel off,
/// but the circle never stops.
pub fn effective_circle_speed(state: &GameState) -> i32 {
    let slow = if state.slow_timer > 0 { 1 } else { 0 };
    (state.circle.speed - slow).max(1)
}

/// Whole seconds left on the slow effect at `fps` frames per second,
/// rounded up.  `None` when the effect is off.
pub fn slow_seconds_left(state: &GameState, fps: u32) -> Option<u32> {
    if state.slow_timer == 0 {
        return None;
    }
    let fps = fps.max(1);
    Some((state.slow_timer + fps - 1) / fps)
}

fn clamp_player_x(x: i32) -> i32 {
    x.clamp(0, WIDTH - RECT_W)
}

// ── Per-frame update (nearly pure — RNG is injected) ─────────────────────────

/// Advance a Playing session by one frame.  All randomness comes through
/// `rng` so callers control determinism.
pub fn update(
    state: &GameState,
    moves: Movement,
    rng: &mut impl Rng,
) -> (GameState, SessionStatus) {
    let mut next = state.clone();

    // ── 1. Move the paddle ───────────────────────────────────────────────────
    if moves.left {
        next.player.x -= RECT_SPEED;
    }
    if moves.right {
        next.player.x += RECT_SPEED;
    }
    next.player.x = clamp_player_x(next.player.x);

    // ── 2. Advance the circle ────────────────────────────────────────────────
    next.circle.rect.y += effective_circle_speed(&next);

    // ── 3. Catch or miss ─────────────────────────────────────────────────────
    if next.player.intersects(&next.circle.rect) {
        next.score += 1;
        if next.score % LEVEL_STEP == 0 {
            next.level += 1;
            log::info!("level up: {} (score {})", next.level, next.score);
        }
        log::debug!("caught circle, score {}", next.score);
        next.circle = reset_circle(next.level, rng);
    } else if next.circle.rect.top() > HEIGHT {
        next.missed += 1;
        next.lives -= 1;
        log::debug!("missed circle, {} lives left", next.lives);
        next.circle = reset_circle(next.level, rng);

        if next.powerups.len() < POWERUP_LIMIT && rng.gen_bool(POWERUP_CHANCE) {
            let powerup = reset_powerup(rng);
            log::debug!("power-up dropped: {:?}", powerup.kind);
            next.powerups.push(powerup);
        }

        if next.lives <= 0 {
            log::info!(
                "session over: score {}, missed {}",
                next.score,
                next.missed
            );
            return (next, SessionStatus::Ended);
        }
    }

    // ── 4. Power-ups ─────────────────────────────────────────────────────────
    let falling = std::mem::take(&mut next.powerups);
    for mut powerup in falling {
        powerup.rect.y += powerup.speed;

        if next.player.intersects(&powerup.rect) {
            match powerup.kind {
                PowerUpKind::Life => next.lives += 1,
                PowerUpKind::Slow => next.slow_timer = SLOW_DURATION,
            }
            log::debug!("collected power-up: {:?}", powerup.kind);
        } else if powerup.rect.top() <= HEIGHT {
            next.powerups.push(powerup);
        }
    }

    debug_assert!(
        next.powerups.len() <= POWERUP_LIMIT,
        "power-up collection over its limit"
    );
    next.powerups.truncate(POWERUP_LIMIT);

    // ── 5. Timers ────────────────────────────────────────────────────────────
    next.slow_timer = next.slow_timer.saturating_sub(1);

    (next, SessionStatus::Running)
}
