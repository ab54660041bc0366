//! Catch The Circle — a single-screen falling-circle arcade game.
//!
//! - `geometry`: rectangles and collision
//! - `entities`: pure game data
//! - `spawn`: entity factories
//! - `compute`: per-frame update engine
//! - `screen`: Start / Playing / Paused / GameOver state machine
//! - `input`: terminal key events to per-frame input snapshots
//! - `config`: runtime settings
//! - `term`: terminal setup and restore

pub mod compute;
pub mod config;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod screen;
pub mod spawn;
pub mod term;

/// Gameplay constants. Distances are pixels of the virtual play area,
/// speeds are pixels per frame, durations are frames.
pub mod consts {
    /// Play area dimensions
    pub const WIDTH: i32 = 500;
    pub const HEIGHT: i32 = 400;

    /// Frame rates for active play and for the text screens
    pub const PLAY_FPS: u32 = 60;
    pub const MENU_FPS: u32 = 30;

    pub const MAX_LIVES: i32 = 3;

    /// Paddle
    pub const RECT_W: i32 = 80;
    pub const RECT_H: i32 = 20;
    pub const RECT_SPEED: i32 = 7;
    /// Distance from the paddle's top edge to the bottom of the play area
    pub const PLAYER_BOTTOM_GAP: i32 = 40;

    /// Falling circle
    pub const CIRCLE_SIZE: i32 = 30;
    pub const BASE_CIRCLE_SPEED: i32 = 3;
    /// Score interval between level increases
    pub const LEVEL_STEP: u32 = 5;

    /// Power-ups
    pub const POWERUP_SIZE: i32 = 30;
    pub const POWERUP_SPEED: i32 = 4;
    pub const POWERUP_LIMIT: usize = 2;
    /// Chance of a power-up dropping after a miss
    pub const POWERUP_CHANCE: f64 = 0.4;
    /// ~3 seconds at PLAY_FPS
    pub const SLOW_DURATION: u32 = 180;
}
