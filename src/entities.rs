/// All game entity types — pure data, no logic.

use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Instantly adds one life.
    Life,
    /// Slows the circle by one pixel per frame for SLOW_DURATION frames.
    Slow,
}

// ── Falling objects ───────────────────────────────────────────────────────────

/// The target the player has to catch.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub rect: Rect,
    /// Base descent in pixels per frame, before the slow effect.
    pub speed: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub rect: Rect,
    pub kind: PowerUpKind,
    pub speed: i32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything that belongs to one play session.  Cloneable so the update
/// engine can return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// The paddle. Its position is the only player state.
    pub player: Rect,
    pub score: u32,
    pub missed: u32,
    /// Signed so a miss on the last life reads as `0`, never wraps.
    pub lives: i32,
    pub level: u32,
    pub paused: bool,
    /// Frames left on the slow effect.
    pub slow_timer: u32,
    pub circle: Circle,
    /// Falling power-ups in spawn order, at most POWERUP_LIMIT.
    pub powerups: Vec<PowerUp>,
}
