//! Game settings and the settings-provider contract.
//!
//! # Responsibility
//! - Define what screens may ask of settings (`SettingsProvider`).
//! - Model persisted options and build the settings table sections.
//!
//! # Invariants
//! - Screens receive settings through constructor injection, never through
//!   process-wide state.

pub mod game_settings;
pub mod sections;

/// Read-only settings queries used by the final-round screen.
pub trait SettingsProvider {
    /// Whether task modifiers are part of the game.
    fn tasks_mode_enabled(&self) -> bool;
    fn vibration_enabled(&self) -> bool;
    /// Identifier of the explosion sound asset.
    fn sound_identifier(&self) -> String;
}
