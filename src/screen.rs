/// Screen state machine: Start → Playing ⇄ Paused → GameOver → Playing.
///
/// `tick` is the single per-frame entry point.  It consumes the current
/// state and screen and returns the next pair, or `Tick::Exit` when the
/// player quits.

use std::time::Duration;

use rand::Rng;

use crate::compute::{update, SessionStatus};
use crate::config::Settings;
use crate::entities::GameState;
use crate::input::InputSnapshot;
use crate::spawn::reset_game;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Start,
    Playing,
    Paused,
    /// Final numbers of the session that just ended.
    GameOver { score: u32, missed: u32 },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tick {
    Next(GameState, Screen),
    Exit,
}

impl Screen {
    /// Playing and Paused run at the full rate; the text screens only need
    /// to stay responsive.
    pub fn frame_rate(&self, settings: &Settings) -> u32 {
        match self {
            Screen::Playing | Screen::Paused => settings.play_fps,
            Screen::Start | Screen::GameOver { .. } => settings.menu_fps,
        }
    }

    pub fn frame_duration(&self, settings: &Settings) -> Duration {
        Duration::from_secs(1) / self.frame_rate(settings).max(1)
    }
}

fn start_session(rng: &mut impl Rng) -> Tick {
    log::info!("new session");
    Tick::Next(reset_game(rng), Screen::Playing)
}

fn play_frame(state: &GameState, input: &InputSnapshot, rng: &mut impl Rng) -> Tick {
    let (next, status) = update(state, input.movement(), rng);
    match status {
        SessionStatus::Running => Tick::Next(next, Screen::Playing),
        SessionStatus::Ended => {
            let screen = Screen::GameOver {
                score: next.score,
                missed: next.missed,
            };
            Tick::Next(next, screen)
        }
    }
}

/// Advance the whole game by one frame.
pub fn tick(
    state: &GameState,
    screen: &Screen,
    input: &InputSnapshot,
    rng: &mut impl Rng,
) -> Tick {
    if input.quit {
        log::info!("quit requested on {:?}", screen);
        return Tick::Exit;
    }

    match screen {
        Screen::Start if input.confirm => start_session(rng),
        Screen::Playing if input.pause_toggle => {
            log::debug!("paused");
            let mut paused = state.clone();
            paused.paused = true;
            Tick::Next(paused, Screen::Paused)
        }
        Screen::Playing => play_frame(state, input, rng),
        // Resuming plays the frame straight away
        Screen::Paused if input.pause_toggle => {
            log::debug!("resumed");
            let mut resumed = state.clone();
            resumed.paused = false;
            play_frame(&resumed, input, rng)
        }
        Screen::GameOver { .. } if input.restart => start_session(rng),
        _ => Tick::Next(state.clone(), *screen),
    }
}
