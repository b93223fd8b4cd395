//! Settings table rendering adapter.
//!
//! # Responsibility
//! - Bridge declarative `SettingsSection` lists to a host list widget.
//! - Report missing cell registrations as fatal configuration errors.
//!
//! # Invariants
//! - All queries are synchronous and UI-thread affine.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::section::CellKind;

pub mod section_renderer;

pub type RenderResult<T> = Result<T, ConfigurationError>;

/// Renderer misconfiguration detected at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Row content requested before any host was attached.
    NotAttached,
    /// The attached host widget no longer exists.
    HostReleased,
    /// The host cannot instantiate the cell kind a section needs.
    UnregisteredCell(CellKind),
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAttached => write!(f, "section renderer is not attached to a host widget"),
            Self::HostReleased => write!(f, "host widget was released"),
            Self::UnregisteredCell(kind) => write!(
                f,
                "cell `{}` is not registered with the host widget",
                kind.reuse_identifier()
            ),
        }
    }
}

impl Error for ConfigurationError {}
