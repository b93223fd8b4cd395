//! Screen controllers and the host collaborators they drive.
//!
//! # Responsibility
//! - Define navigation and media/haptics contracts implemented by the shell.
//! - Host screen controllers that combine settings with core selection.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod final_round;

/// Receives navigation requests from screens.
pub trait NavigationHost {
    /// Starts a new game from the final-round screen.
    fn restart(&self);
}

/// Sound playback and haptics.
pub trait MediaHost {
    fn play_sound(&self, sound_id: &str) -> Result<(), MediaError>;
    fn vibrate(&self) -> Result<(), MediaError>;
}

/// Playback/haptics failures reported by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    AssetNotFound(String),
    Playback(String),
    HapticsUnavailable,
}

impl Display for MediaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AssetNotFound(id) => write!(f, "sound asset not found: {id}"),
            Self::Playback(message) => write!(f, "sound playback failed: {message}"),
            Self::HapticsUnavailable => write!(f, "haptics are unavailable on this device"),
        }
    }
}

impl Error for MediaError {}
