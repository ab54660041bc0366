mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    terminal,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use catch_the_circle::config::Settings;
use catch_the_circle::input::KeyTracker;
use catch_the_circle::screen::{tick, Screen, Tick};
use catch_the_circle::spawn::reset_game;
use catch_the_circle::term::with_terminal;

use display::Viewport;

#[derive(Parser, Debug)]
#[command(author, version, about = "Catch The Circle — terminal arcade game", long_about = None)]
struct Args {
    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
    /// Write logs to this file (logging is off otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Log filter, e.g. "debug"
    #[arg(long)]
    log_level: Option<String>,
    /// Frame rate while playing
    #[arg(long)]
    fps: Option<u32>,
}

impl Args {
    /// File settings first, then command-line overrides.
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load_from_file(path)?,
            None => Settings::default(),
        };
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(path) = &self.log_file {
            settings.log_file = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            settings.log_level = level.clone();
        }
        if let Some(fps) = self.fps {
            settings.play_fps = fps;
        }
        settings.validate()?;
        Ok(settings)
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// The game owns the terminal, so logs only go to a file.
fn init_logging(settings: &Settings) -> Result<()> {
    let Some(path) = &settings.log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("create log file {:?}", path))?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .target(env_logger::Target::Pipe(Box::new(file)))
    .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Drive the screen state machine until the player quits.
fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    settings: &Settings,
    rng: &mut StdRng,
) -> Result<()> {
    let mut tracker = KeyTracker::new();
    let mut screen = Screen::Start;
    let mut state = reset_game(rng);

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        loop {
            match rx.try_recv() {
                Ok(Event::Key(key)) => tracker.handle_key(key),
                Ok(_) => {}
                Err(TryRecvError::Empty) => break,
                // Reader thread is gone, nothing can reach us any more
                Err(TryRecvError::Disconnected) => {
                    tracker.request_quit();
                    break;
                }
            }
        }

        let input = tracker.snapshot();
        match tick(&state, &screen, &input, rng) {
            Tick::Exit => return Ok(()),
            Tick::Next(next_state, next_screen) => {
                if next_screen != screen {
                    log::info!("screen {:?} -> {:?}", screen, next_screen);
                }
                state = next_state;
                screen = next_screen;
            }
        }

        display::render(out, &screen, &state, Viewport::current()?, settings.play_fps)
            .context("render frame")?;

        let frame = screen.frame_duration(settings);
        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = args.settings()?;
    init_logging(&settings)?;

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Catch The Circle starting with seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enable raw mode")?;

    let result = with_terminal(&mut out, |out| {
        // Dedicate a thread exclusively to blocking event reads, sending them
        // through a channel so the game loop never has to block on I/O.
        let (tx, rx) = mpsc::channel::<Event>();
        thread::spawn(move || loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(err) => {
                    log::warn!("input reader stopped: {}", err);
                    break;
                }
            }
        });

        run(out, &rx, &settings, &mut rng)
    });

    // Raw mode goes last, whatever happened above
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("exiting on error: {:#}", err);
    }
    log::info!("Catch The Circle exiting");
    result
}
