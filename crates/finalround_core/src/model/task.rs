//! Task deck model.
//!
//! # Responsibility
//! - Hold the ordered list of round modifiers shown on the final screen.
//! - Reject empty decks at construction time.
//!
//! # Invariants
//! - A `TaskList` is never empty.
//! - Entry order is stable; indices stay valid for the list lifetime.

use serde::{Deserialize, Serialize};

use crate::selector::SelectorError;

const DEFAULT_TASKS: [&str; 10] = [
    "Whisper for the whole next round",
    "Answer with your eyes closed in the next round",
    "Clap your hands after every answer in the next round",
    "Talk like a robot in the next round",
    "Sing your answers in the next round",
    "No saying 'yes' or 'no' in the next round",
    "Talk as fast as an auctioneer in the next round",
    "Answer only with questions in the next round",
    "Act out every word with a gesture in the next round",
    "Answer only in one-syllable words in the next round",
];

/// Immutable, non-empty ordered deck of task modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<String>,
}

impl TaskList {
    /// Builds a deck from caller-provided entries.
    ///
    /// # Errors
    /// - Returns `SelectorError::EmptyList` when `tasks` yields nothing.
    pub fn new<I, S>(tasks: I) -> Result<Self, SelectorError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tasks = tasks.into_iter().map(Into::into).collect::<Vec<_>>();
        if tasks.is_empty() {
            return Err(SelectorError::EmptyList);
        }
        Ok(Self { tasks })
    }

    /// The ten modifiers shipped with the game.
    pub fn default_deck() -> Self {
        Self {
            tasks: DEFAULT_TASKS.iter().map(|task| task.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Always `false`: decks are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tasks.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(String::as_str)
    }
}

impl<'de> Deserialize<'de> for TaskList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tasks = Vec::<String>::deserialize(deserializer)?;
        TaskList::new(tasks).map_err(serde::de::Error::custom)
    }
}

/// One selection result: the deck index plus the text to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPick {
    pub index: usize,
    pub text: String,
}
