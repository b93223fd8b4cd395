//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Drive the final-round screen controller and the settings table renderer
//!   on behalf of the Dart shell via FRB.
//! - Flatten core errors into message strings inside response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One final-round session exists per UI thread; `final_round_start`
//!   replaces it.
//! - Media and navigation requests are queued for the shell, never executed
//!   in Rust.

use finalround_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    settings_sections, CellKind, FinalRoundScreen, GameSettings, HostWidget, MediaError,
    MediaHost, NavigationHost, RowContent, RowViewModel, SectionRenderer, SettingsSection,
    TaskList, TaskPick,
};
use log::warn;
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::OnceLock;

const SETTINGS_PATH_ENV: &str = "FINALROUND_SETTINGS_PATH";
static SETTINGS_PATH: OnceLock<Option<PathBuf>> = OnceLock::new();

thread_local! {
    static FINAL_ROUND_SESSION: RefCell<Option<FinalRoundSession>> = const { RefCell::new(None) };
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Task selection response for the final-round screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPickResponse {
    pub ok: bool,
    /// Whether the shell should show the task label and "other task" button.
    pub tasks_mode: bool,
    pub index: Option<u32>,
    pub text: Option<String>,
    pub message: String,
}

impl TaskPickResponse {
    fn picked(pick: TaskPick) -> Self {
        Self {
            ok: true,
            tasks_mode: true,
            index: u32::try_from(pick.index).ok(),
            text: Some(pick.text),
            message: String::new(),
        }
    }

    fn tasks_off() -> Self {
        Self {
            ok: true,
            tasks_mode: false,
            index: None,
            text: None,
            message: "Tasks mode is off.".to_string(),
        }
    }

    fn failure(tasks_mode: bool, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            tasks_mode,
            index: None,
            text: None,
            message: message.into(),
        }
    }
}

/// Media requests the shell must perform when the final screen appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppearResponse {
    pub ok: bool,
    /// Sound asset to play, if any was requested.
    pub sound_id: Option<String>,
    pub vibrate: bool,
    pub message: String,
}

/// Row layout entry for the settings table.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayoutItem {
    /// Cell reuse identifier the shell instantiates.
    pub cell: String,
    pub row_height: f64,
    pub header_height: f64,
    /// Row view-models encoded as JSON for the cell to decode.
    pub items_json: String,
    /// Only set for title-selection sections.
    pub title: Option<String>,
}

/// Settings table layout response.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsLayoutResponse {
    pub ok: bool,
    pub sections: Vec<SectionLayoutItem>,
    pub message: String,
}

/// Starts a new final-round session and loads the screen.
///
/// # FFI contract
/// - Sync call; reads settings from `FINALROUND_SETTINGS_PATH` when set.
/// - Returns `tasks_mode=false` without a task when tasks mode is off.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn final_round_start() -> TaskPickResponse {
    start_session(load_settings())
}

/// Picks another task, never repeating the one currently shown.
///
/// # FFI contract
/// - Requires a prior `final_round_start`.
/// - Returns `tasks_mode=false` without a task when the session started with
///   tasks mode off.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn final_round_other_task() -> TaskPickResponse {
    with_session(|session| match session {
        Some(session) => match session.screen.on_other_task() {
            Ok(Some(pick)) => TaskPickResponse::picked(pick),
            Ok(None) => TaskPickResponse::tasks_off(),
            Err(err) => {
                TaskPickResponse::failure(true, format!("final_round_other_task failed: {err}"))
            }
        },
        None => TaskPickResponse::failure(
            false,
            "final_round_other_task failed: no active task session",
        ),
    })
}

/// Runs the screen-appear step and returns the media requests it produced.
///
/// # FFI contract
/// - Requires a prior `final_round_start`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn final_round_appear() -> AppearResponse {
    with_session(|session| match session {
        Some(session) => {
            session.screen.on_appear();
            let (sound_id, vibrate) = session.media.drain();
            AppearResponse {
                ok: true,
                sound_id,
                vibrate,
                message: String::new(),
            }
        }
        None => AppearResponse {
            ok: false,
            sound_id: None,
            vibrate: false,
            message: "final_round_appear failed: no active task session".to_string(),
        },
    })
}

/// Handles the "restart" tap and ends the session.
///
/// Returns `true` when the shell should navigate back to a new game.
#[flutter_rust_bridge::frb(sync)]
pub fn final_round_restart() -> bool {
    with_session(|session| {
        let Some(active) = session.take() else {
            return false;
        };
        active.screen.on_restart();
        active.navigation.restart_requested.get()
    })
}

/// Builds the settings table layout from the supplied settings JSON.
///
/// Empty `settings_json` falls back to persisted/default settings.
#[flutter_rust_bridge::frb(sync)]
pub fn settings_layout(settings_json: String) -> SettingsLayoutResponse {
    let settings = if settings_json.trim().is_empty() {
        load_settings()
    } else {
        match GameSettings::from_json_str(settings_json.as_str()) {
            Ok(settings) => settings,
            Err(err) => return layout_failure(format!("settings_layout failed: {err}")),
        }
    };

    match render_layout(settings_sections(&settings)) {
        Ok(sections) => SettingsLayoutResponse {
            ok: true,
            message: format!("{} section(s).", sections.len()),
            sections,
        },
        Err(message) => layout_failure(message),
    }
}

struct FinalRoundSession {
    screen: FinalRoundScreen,
    media: Rc<QueuedMedia>,
    navigation: Rc<QueuedNavigation>,
}

/// Records media requests so the shell can execute them.
#[derive(Default)]
struct QueuedMedia {
    sound_id: RefCell<Option<String>>,
    vibrate: Cell<bool>,
}

impl QueuedMedia {
    fn drain(&self) -> (Option<String>, bool) {
        (self.sound_id.take(), self.vibrate.replace(false))
    }
}

impl MediaHost for QueuedMedia {
    fn play_sound(&self, sound_id: &str) -> Result<(), MediaError> {
        *self.sound_id.borrow_mut() = Some(sound_id.to_string());
        Ok(())
    }

    fn vibrate(&self) -> Result<(), MediaError> {
        self.vibrate.set(true);
        Ok(())
    }
}

#[derive(Default)]
struct QueuedNavigation {
    restart_requested: Cell<bool>,
}

impl NavigationHost for QueuedNavigation {
    fn restart(&self) {
        self.restart_requested.set(true);
    }
}

/// Collects cell registrations for one layout pass.
#[derive(Default)]
struct LayoutTable {
    registered: RefCell<BTreeSet<CellKind>>,
}

impl HostWidget for LayoutTable {
    fn register_cell(&self, kind: CellKind) {
        self.registered.borrow_mut().insert(kind);
    }

    fn has_cell(&self, kind: CellKind) -> bool {
        self.registered.borrow().contains(&kind)
    }

    fn reload_data(&self) {}
}

fn start_session(settings: GameSettings) -> TaskPickResponse {
    let media = Rc::new(QueuedMedia::default());
    let navigation = Rc::new(QueuedNavigation::default());
    let mut screen = FinalRoundScreen::new(
        Rc::new(settings),
        navigation.clone(),
        media.clone(),
        TaskList::default_deck(),
    );

    let response = match screen.on_load() {
        Ok(view) if !view.shows_other_task_button => TaskPickResponse::tasks_off(),
        Ok(_) => match screen.selector().current() {
            Some(pick) => TaskPickResponse::picked(pick),
            None => TaskPickResponse::failure(true, "final_round_start failed: no task selected"),
        },
        Err(err) => TaskPickResponse::failure(true, format!("final_round_start failed: {err}")),
    };

    with_session(|session| {
        *session = Some(FinalRoundSession {
            screen,
            media,
            navigation,
        });
    });
    response
}

fn with_session<T>(f: impl FnOnce(&mut Option<FinalRoundSession>) -> T) -> T {
    FINAL_ROUND_SESSION.with(|cell| f(&mut cell.borrow_mut()))
}

fn render_layout(sections: Vec<SettingsSection>) -> Result<Vec<SectionLayoutItem>, String> {
    let table = Rc::new(LayoutTable::default());
    let mut renderer = SectionRenderer::new();
    renderer.attach(&table);
    renderer.reload(sections);

    (0..renderer.section_count())
        .map(|index| {
            let content = renderer
                .row_content(index)
                .map_err(|err| format!("settings_layout failed: {err}"))?;
            to_layout_item(
                content,
                renderer.row_height(index),
                renderer.header_height(index),
            )
        })
        .collect()
}

fn to_layout_item(
    content: RowContent<'_>,
    row_height: f64,
    header_height: f64,
) -> Result<SectionLayoutItem, String> {
    let (title, items): (Option<String>, &[RowViewModel]) = match content {
        RowContent::TitleSelection { title, items } => (Some(title.to_string()), items),
        RowContent::Disclosure { items } | RowContent::Toggle { items } => (None, items),
        RowContent::Placeholder => (None, &[][..]),
    };
    let cell = content
        .cell_kind()
        .map(CellKind::reuse_identifier)
        .unwrap_or_default();
    Ok(SectionLayoutItem {
        cell: cell.to_string(),
        row_height,
        header_height,
        items_json: encode_items(items)?,
        title,
    })
}

fn encode_items(items: &[RowViewModel]) -> Result<String, String> {
    serde_json::to_string(items)
        .map_err(|err| format!("settings_layout failed: cannot encode rows: {err}"))
}

fn layout_failure(message: String) -> SettingsLayoutResponse {
    SettingsLayoutResponse {
        ok: false,
        sections: Vec::new(),
        message,
    }
}

fn load_settings() -> GameSettings {
    let Some(path) = resolve_settings_path() else {
        return GameSettings::default();
    };
    GameSettings::load_or_default(&path).unwrap_or_else(|err| {
        warn!(
            "event=settings_load module=ffi status=fallback path={} error={err}",
            path.display()
        );
        GameSettings::default()
    })
}

fn resolve_settings_path() -> Option<PathBuf> {
    SETTINGS_PATH
        .get_or_init(|| {
            let raw = std::env::var(SETTINGS_PATH_ENV).ok()?;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return None;
            }
            Some(PathBuf::from(trimmed))
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, final_round_appear, final_round_other_task, final_round_restart,
        init_logging, ping, settings_layout, start_session,
    };
    use finalround_core::GameSettings;

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn task_session_never_repeats_consecutive_tasks() {
        let start = start_session(GameSettings::default());
        assert!(start.ok, "{}", start.message);
        assert!(start.tasks_mode);
        let mut previous = start.index.expect("start should pick a task");

        for _ in 0..20 {
            let other = final_round_other_task();
            assert!(other.ok, "{}", other.message);
            let index = other.index.expect("other should pick a task");
            assert_ne!(index, previous);
            previous = index;
        }
    }

    #[test]
    fn tasks_off_session_keeps_other_task_off() {
        let start = start_session(GameSettings {
            tasks_mode: false,
            ..GameSettings::default()
        });
        assert!(start.ok, "{}", start.message);
        assert!(!start.tasks_mode);

        let other = final_round_other_task();
        assert!(other.ok, "{}", other.message);
        assert!(!other.tasks_mode);
        assert_eq!(other.index, None);
    }

    #[test]
    fn other_task_without_session_fails() {
        final_round_restart();
        let other = final_round_other_task();
        assert!(!other.ok);
        assert!(other.message.contains("no active task session"));
    }

    #[test]
    fn appear_queues_sound_and_vibration_from_settings() {
        start_session(GameSettings {
            vibration: false,
            bomb_sound: "bomb_explosion_2".to_string(),
            ..GameSettings::default()
        });

        let appear = final_round_appear();
        assert!(appear.ok, "{}", appear.message);
        assert_eq!(appear.sound_id.as_deref(), Some("bomb_explosion_2"));
        assert!(!appear.vibrate);
    }

    #[test]
    fn restart_ends_the_session() {
        start_session(GameSettings::default());
        assert!(final_round_restart());
        assert!(!final_round_restart());
        assert!(!final_round_other_task().ok);
    }

    #[test]
    fn settings_layout_uses_fixed_heights() {
        let response = settings_layout(r#"{"tasks_mode": false}"#.to_string());
        assert!(response.ok, "{}", response.message);
        let heights = response
            .sections
            .iter()
            .map(|item| item.row_height)
            .collect::<Vec<_>>();
        assert_eq!(heights, vec![183.0, 151.0, 235.0]);
        assert!(response
            .sections
            .iter()
            .all(|item| item.header_height == 16.0));
        assert_eq!(response.sections[0].cell, "selection_title_cell");
        assert_eq!(response.sections[0].title.as_deref(), Some("Game time"));
        assert!(response.sections[1].items_json.contains("\"tasks_mode\""));
    }

    #[test]
    fn settings_layout_rejects_invalid_json() {
        let response = settings_layout("{not json".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("settings_layout failed"));
    }
}
