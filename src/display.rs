/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.  The 500×400 play area is scaled onto
/// whatever grid the terminal offers.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use catch_the_circle::compute::slow_seconds_left;
use catch_the_circle::consts::{HEIGHT, WIDTH};
use catch_the_circle::entities::{GameState, PowerUp, PowerUpKind};
use catch_the_circle::geometry::Rect;
use catch_the_circle::screen::Screen;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::White;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::Blue;
const C_CIRCLE: Color = Color::White;
const C_POWERUP_LIFE: Color = Color::Green;
const C_POWERUP_SLOW: Color = Color::Yellow;
const C_SLOW_ACTIVE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

/// Terminal grid size in cells.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn current() -> std::io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self { cols, rows })
    }

    /// Columns inside the side walls.
    fn play_cols(&self) -> i64 {
        self.cols.saturating_sub(2).max(1) as i64
    }

    /// Rows between the top border (row 1) and the bottom border (rows - 2).
    fn play_rows(&self) -> i64 {
        self.rows.saturating_sub(4).max(1) as i64
    }

    /// Map a play-area rectangle to a half-open cell range
    /// `(col0, col1, row0, row1)`.  Parts outside the play area are clipped;
    /// `None` when nothing is visible.
    fn project(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        let left = rect.left().max(0) as i64;
        let right = rect.right().min(WIDTH) as i64;
        let top = rect.top().max(0) as i64;
        let bottom = rect.bottom().min(HEIGHT) as i64;
        if left >= right || top >= bottom {
            return None;
        }

        let (pc, pr) = (self.play_cols(), self.play_rows());
        let (w, h) = (WIDTH as i64, HEIGHT as i64);
        let col0 = left * pc / w;
        let col1 = ((right * pc + w - 1) / w).max(col0 + 1).min(pc);
        let row0 = top * pr / h;
        let row1 = ((bottom * pr + h - 1) / h).max(row0 + 1).min(pr);
        if col0 >= col1 || row0 >= row1 {
            return None;
        }
        Some((
            (col0 + 1) as u16,
            (col1 + 1) as u16,
            (row0 + 2) as u16,
            (row1 + 2) as u16,
        ))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame for the given screen.
pub fn render<W: Write>(
    out: &mut W,
    screen: &Screen,
    state: &GameState,
    view: Viewport,
    play_fps: u32,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match screen {
        Screen::Start => draw_start(out, view)?,
        Screen::Playing => draw_play(out, state, view, play_fps)?,
        Screen::Paused => draw_paused(out, view)?,
        Screen::GameOver { score, missed } => draw_game_over(out, *score, *missed, view)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn draw_play<W: Write>(
    out: &mut W,
    state: &GameState,
    view: Viewport,
    play_fps: u32,
) -> std::io::Result<()> {
    draw_border(out, view)?;
    draw_hud(out, state, view, play_fps)?;

    for powerup in &state.powerups {
        draw_powerup(out, powerup, view)?;
    }
    fill_rect(out, &state.circle.rect, "●", C_CIRCLE, view)?;
    fill_rect(out, &state.player, "█", C_PLAYER, view)?;

    draw_controls_hint(out, view)?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    state: &GameState,
    view: Viewport,
    play_fps: u32,
) -> std::io::Result<()> {
    // Score, missed and level — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "Score: {}  Missed: {}  Level: {}  ",
        state.score, state.missed, state.level
    )))?;

    // Lives never show below zero
    let hearts = "♥".repeat(state.lives.max(0) as usize);
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(format!("Lives: {}", hearts)))?;

    // Slow indicator + pause hint — right
    let slow_tag = match slow_seconds_left(state, play_fps) {
        Some(secs) => format!("[SLOW {}s] ", secs),
        None => String::new(),
    };
    let pause_hint = "P = Pause";
    let right_len = (slow_tag.chars().count() + pause_hint.len()) as u16;
    out.queue(cursor::MoveTo(view.cols.saturating_sub(right_len + 1), 0))?;
    if !slow_tag.is_empty() {
        out.queue(style::SetForegroundColor(C_SLOW_ACTIVE))?;
        out.queue(Print(&slow_tag))?;
    }
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(pause_hint))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn fill_rect<W: Write>(
    out: &mut W,
    rect: &Rect,
    glyph: &str,
    color: Color,
    view: Viewport,
) -> std::io::Result<()> {
    let Some((col0, col1, row0, row1)) = view.project(rect) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(color))?;
    let run = glyph.repeat((col1 - col0) as usize);
    for row in row0..row1 {
        out.queue(cursor::MoveTo(col0, row))?;
        out.queue(Print(&run))?;
    }
    Ok(())
}

/// Life drops are green, Slow drops yellow.
fn draw_powerup<W: Write>(out: &mut W, powerup: &PowerUp, view: Viewport) -> std::io::Result<()> {
    let color = match powerup.kind {
        PowerUpKind::Life => C_POWERUP_LIFE,
        PowerUpKind::Slow => C_POWERUP_SLOW,
    };
    fill_rect(out, &powerup.rect, "■", color, view)
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   P : Pause   Q : Quit"))?;
    Ok(())
}

// ── Text screens ──────────────────────────────────────────────────────────────

/// Print lines centred on the screen, one row apart.
fn draw_centered<W: Write>(
    out: &mut W,
    lines: &[(&str, Color)],
    view: Viewport,
) -> std::io::Result<()> {
    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

fn draw_start<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    draw_centered(
        out,
        &[
            ("●  CATCH THE CIRCLE  ●", Color::Cyan),
            ("", Color::White),
            ("Press SPACE to Start", Color::White),
            ("", Color::White),
            ("Power-ups:", Color::DarkGrey),
            ("■ Life  +1 life", C_POWERUP_LIFE),
            ("■ Slow  slower circle", C_POWERUP_SLOW),
            ("", Color::White),
            ("← → / A D : Move   P : Pause   Q : Quit", C_HINT),
        ],
        view,
    )
}

fn draw_paused<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    draw_centered(
        out,
        &[
            ("PAUSED", Color::White),
            ("", Color::White),
            ("Press P to Resume", Color::DarkGrey),
        ],
        view,
    )
}

fn draw_game_over<W: Write>(
    out: &mut W,
    score: u32,
    missed: u32,
    view: Viewport,
) -> std::io::Result<()> {
    let score_line = format!("Score: {}", score);
    let missed_line = format!("Missed: {}", missed);
    draw_centered(
        out,
        &[
            ("╔══════════════════╗", Color::Red),
            ("║    GAME  OVER    ║", Color::Red),
            ("╚══════════════════╝", Color::Red),
            (score_line.as_str(), Color::Yellow),
            (missed_line.as_str(), Color::Yellow),
            ("", Color::White),
            ("R = Restart   Q = Quit", Color::White),
        ],
        view,
    )
}
