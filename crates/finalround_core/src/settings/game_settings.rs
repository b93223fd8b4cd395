//! Game settings model and JSON persistence.
//!
//! # Responsibility
//! - Hold the user-facing game options consumed by the screens.
//! - Load/save settings as JSON for the app shell.
//!
//! # Invariants
//! - Missing fields fall back to shipped defaults.
//! - Sound identifiers are never empty.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

use super::SettingsProvider;

const DEFAULT_BOMB_SOUND: &str = "bomb_explosion_1";
const DEFAULT_BACKGROUND_TRACK: &str = "background_melody_1";

/// Round length choice shown in the "game time" selection section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameDuration {
    Short,
    #[default]
    Medium,
    Long,
    /// Bomb timer picked at random when the round starts.
    Random,
}

impl GameDuration {
    pub const ALL: [GameDuration; 4] = [Self::Short, Self::Medium, Self::Long, Self::Random];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
            Self::Random => "random",
        }
    }

    /// Display label for the selection row.
    pub fn label(self) -> &'static str {
        match self {
            Self::Short => "Short (10 s)",
            Self::Medium => "Medium (20 s)",
            Self::Long => "Long (45 s)",
            Self::Random => "Random (10-45 s)",
        }
    }
}

/// Persisted game options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub game_duration: GameDuration,
    pub background_music: bool,
    pub vibration: bool,
    pub tasks_mode: bool,
    pub bomb_sound: String,
    pub background_track: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            game_duration: GameDuration::default(),
            background_music: true,
            vibration: true,
            tasks_mode: true,
            bomb_sound: DEFAULT_BOMB_SOUND.to_string(),
            background_track: DEFAULT_BACKGROUND_TRACK.to_string(),
        }
    }
}

impl GameSettings {
    /// Parses settings JSON and validates field invariants.
    ///
    /// # Errors
    /// - `SettingsError::Parse` for malformed JSON or unknown enum values.
    /// - `SettingsError::EmptySoundId` when a sound identifier is blank.
    pub fn from_json_str(raw: &str) -> Result<Self, SettingsError> {
        let settings: GameSettings = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json_string(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads settings from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "event=settings_load module=settings status=default reason=missing path={}",
                    path.display()
                );
                return Ok(Self::default());
            }
            Err(err) => {
                warn!(
                    "event=settings_load module=settings status=error path={} error={err}",
                    path.display()
                );
                return Err(err.into());
            }
        };
        let settings = Self::from_json_str(&raw)?;
        info!(
            "event=settings_load module=settings status=ok path={}",
            path.display()
        );
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        self.validate()?;
        std::fs::write(path, self.to_json_string()?)?;
        info!(
            "event=settings_save module=settings status=ok path={}",
            path.display()
        );
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.bomb_sound.trim().is_empty() {
            return Err(SettingsError::EmptySoundId("bomb_sound"));
        }
        if self.background_track.trim().is_empty() {
            return Err(SettingsError::EmptySoundId("background_track"));
        }
        Ok(())
    }
}

impl SettingsProvider for GameSettings {
    fn tasks_mode_enabled(&self) -> bool {
        self.tasks_mode
    }

    fn vibration_enabled(&self) -> bool {
        self.vibration
    }

    fn sound_identifier(&self) -> String {
        self.bomb_sound.clone()
    }
}

/// Settings load/save/validation failures.
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// Names the blank field.
    EmptySoundId(&'static str),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "settings file access failed: {err}"),
            Self::Parse(err) => write!(f, "settings JSON is invalid: {err}"),
            Self::EmptySoundId(field) => write!(f, "settings field `{field}` must not be empty"),
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::EmptySoundId(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
