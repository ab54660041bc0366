/// Turns raw terminal key events into one `InputSnapshot` per frame.
///
/// Terminals report keys as a stream of press / repeat / release events, and
/// many of them never send a release.  `KeyTracker` records the frame each
/// key was last seen and treats it as held while that frame is recent
/// (within `HOLD_WINDOW`).  One-shot actions such as pause or restart are
/// taken from `Press` events only, so holding a key never fires them twice.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::compute::Movement;

/// A key counts as held if its last press/repeat arrived within this many
/// frames.  OS key-repeat runs at 15 Hz or faster, which refreshes the key
/// before it expires.
pub const HOLD_WINDOW: u64 = 4;

/// Input for a single frame.  `left`/`right` are level-triggered (held);
/// every other field is edge-triggered (newly pressed this frame).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub pause_toggle: bool,
    pub confirm: bool,
    pub restart: bool,
    pub quit: bool,
}

impl InputSnapshot {
    pub fn movement(&self) -> Movement {
        Movement {
            left: self.left,
            right: self.right,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Action {
    Left,
    Right,
    Pause,
    Confirm,
    Restart,
    Quit,
}

fn action_for(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    match code {
        KeyCode::Left => Some(Action::Left),
        KeyCode::Right => Some(Action::Right),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'c' if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
            'a' => Some(Action::Left),
            'd' => Some(Action::Right),
            'p' => Some(Action::Pause),
            ' ' => Some(Action::Confirm),
            'r' => Some(Action::Restart),
            'q' => Some(Action::Quit),
            _ => None,
        },
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct KeyTracker {
    /// Held action → the frame its key was last seen (press or repeat).
    held: HashMap<Action, u64>,
    /// Edge-triggered flags collected since the last snapshot.
    edges: InputSnapshot,
    frame: u64,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, event: KeyEvent) {
        let Some(action) = action_for(event.code, event.modifiers) else {
            return;
        };
        match event.kind {
            // Classic terminals report OS key-repeat as more presses, so a
            // press of a key that is still held is not a new edge
            KeyEventKind::Press => {
                let newly_pressed = !self.is_held(action);
                self.held.insert(action, self.frame);
                if !newly_pressed {
                    return;
                }
                match action {
                    Action::Pause => self.edges.pause_toggle = true,
                    Action::Confirm => self.edges.confirm = true,
                    Action::Restart => self.edges.restart = true,
                    Action::Quit => self.edges.quit = true,
                    Action::Left | Action::Right => {}
                }
            }
            // Repeat only keeps the key alive
            KeyEventKind::Repeat => {
                self.held.insert(action, self.frame);
            }
            // Keyboard-enhancement terminals tell us exactly when a key goes up
            KeyEventKind::Release => {
                self.held.remove(&action);
            }
        }
    }

    /// Signal a quit that did not come from a key, e.g. the event source
    /// closing.
    pub fn request_quit(&mut self) {
        self.edges.quit = true;
    }

    fn is_held(&self, action: Action) -> bool {
        self.held
            .get(&action)
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// Input for the current frame.  Clears the edge flags and moves on to
    /// the next frame.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            left: self.is_held(Action::Left),
            right: self.is_held(Action::Right),
            ..std::mem::take(&mut self.edges)
        };
        self.frame += 1;
        snapshot
    }
}
