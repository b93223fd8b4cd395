//! Task selection for the final-round screen.
//!
//! # Responsibility
//! - Own the per-session selection state.
//! - Surface degenerate decks as explicit errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod task_selector;

pub type SelectorResult<T> = Result<T, SelectorError>;

/// Task selection failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// The deck has no entries to choose from.
    EmptyList,
    /// `select_other` cannot avoid repetition with a single entry.
    SingleElement,
}

impl Display for SelectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyList => write!(f, "task list is empty"),
            Self::SingleElement => {
                write!(f, "cannot pick another task from a single-entry task list")
            }
        }
    }
}

impl Error for SelectorError {}
