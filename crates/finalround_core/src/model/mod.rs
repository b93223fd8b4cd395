//! Domain model for the final-round screen and the settings table.
//!
//! # Responsibility
//! - Define the task deck and selection result shapes.
//! - Define declarative settings sections and their row view-models.
//!
//! # Invariants
//! - Task decks are non-empty.
//! - Every settings section maps to exactly one cell kind and row height.

pub mod section;
pub mod task;
