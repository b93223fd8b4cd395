//! Core logic for the final-round party game screens.
//! UI shells (Flutter/native) call into this crate for task selection,
//! settings and settings-table layout.

pub mod logging;
pub mod model;
pub mod render;
pub mod screen;
pub mod selector;
pub mod settings;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::section::{CellKind, RowAccessory, RowViewModel, SettingsSection};
pub use model::task::{TaskList, TaskPick};
pub use render::section_renderer::{
    HeaderView, HostWidget, RendererState, RowContent, SectionRenderer, SECTION_HEADER_HEIGHT,
};
pub use render::{ConfigurationError, RenderResult};
pub use screen::final_round::{FinalRoundScreen, FinalRoundView, FINAL_ROUND_TITLE};
pub use screen::{MediaError, MediaHost, NavigationHost};
pub use selector::task_selector::{SelectionState, TaskSelector};
pub use selector::{SelectorError, SelectorResult};
pub use settings::game_settings::{GameDuration, GameSettings, SettingsError};
pub use settings::sections::settings_sections;
pub use settings::SettingsProvider;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
