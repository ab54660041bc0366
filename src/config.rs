//! Runtime settings, read from an optional TOML file.
//!
//! Every field has a default, so a partial file (or no file) is fine.
//! Gameplay tuning is fixed in `consts`; only presentation and session
//! options live here.

use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::consts::{MENU_FPS, PLAY_FPS};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Frame rate while playing or paused
    pub play_fps: u32,
    /// Frame rate on the start and game-over screens
    pub menu_fps: u32,
    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,
    /// `env_logger` filter, e.g. "info" or "catch_the_circle=debug"
    pub log_level: String,
    /// Log destination.  Logging is off without one, since the game owns
    /// the terminal.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            play_fps: PLAY_FPS,
            menu_fps: MENU_FPS,
            seed: None,
            log_level: "info".into(),
            log_file: None,
        }
    }
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text).context("parse settings TOML")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("read settings {:?}", path))?;
        Self::from_toml_str(&text).with_context(|| format!("load settings {:?}", path))
    }

    pub fn validate(&self) -> Result<()> {
        if self.play_fps == 0 || self.menu_fps == 0 {
            anyhow::bail!("frame rates must be positive");
        }
        Ok(())
    }
}
