//! Terminal session setup and teardown.
//!
//! Raw mode is switched on by the caller; everything after it goes through
//! `with_terminal`, which restores the screen on every exit path.

use std::io::Write;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};

/// Switch to the alternate screen, hide the cursor and ask for key-release
/// events.  Returns whether the terminal accepted the enhancement flags.
fn enter<W: Write>(out: &mut W) -> Result<bool> {
    out.execute(terminal::EnterAlternateScreen)
        .context("enter alternate screen")?;
    out.execute(cursor::Hide).context("hide cursor")?;

    // Kitty-protocol terminals support this; others fall back to the hold window.
    Ok(out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok())
}

/// Best effort: every step runs even if an earlier one fails.
fn leave<W: Write>(out: &mut W, keyboard_enhanced: bool) {
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
}

/// Run `body` on the prepared screen.  The screen is restored whether setup,
/// `body`, or nothing at all fails.
pub fn with_terminal<W, F>(out: &mut W, body: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> Result<()>,
{
    let mut keyboard_enhanced = false;
    let result = enter(out).and_then(|enhanced| {
        keyboard_enhanced = enhanced;
        body(out)
    });
    leave(out, keyboard_enhanced);
    result
}
