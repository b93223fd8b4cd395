//! End-of-game screen controller.
//!
//! # Responsibility
//! - Gate task selection on the tasks-mode setting.
//! - Trigger explosion sound and optional vibration when the screen appears.
//! - Forward "restart" to navigation.
//!
//! # Invariants
//! - Media failures are logged and never surface to the caller.
//! - The tasks-mode gate is captured on load and stays fixed for the screen
//!   lifetime.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::Rng;
use std::rc::Rc;

use super::{MediaHost, NavigationHost};
use crate::model::task::{TaskList, TaskPick};
use crate::selector::task_selector::TaskSelector;
use crate::selector::SelectorResult;
use crate::settings::SettingsProvider;

pub const FINAL_ROUND_TITLE: &str = "Game over";

/// Snapshot of what the screen should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalRoundView {
    pub title: &'static str,
    /// `None` when tasks mode is off or nothing was selected yet.
    pub task_text: Option<String>,
    pub shows_other_task_button: bool,
}

/// Controller for the final-round screen.
pub struct FinalRoundScreen<R: Rng = StdRng> {
    settings: Rc<dyn SettingsProvider>,
    navigation: Rc<dyn NavigationHost>,
    media: Rc<dyn MediaHost>,
    selector: TaskSelector<R>,
    tasks_mode: bool,
}

impl FinalRoundScreen<StdRng> {
    pub fn new(
        settings: Rc<dyn SettingsProvider>,
        navigation: Rc<dyn NavigationHost>,
        media: Rc<dyn MediaHost>,
        tasks: TaskList,
    ) -> Self {
        Self::with_selector(settings, navigation, media, TaskSelector::new(tasks))
    }
}

impl<R: Rng> FinalRoundScreen<R> {
    pub fn with_selector(
        settings: Rc<dyn SettingsProvider>,
        navigation: Rc<dyn NavigationHost>,
        media: Rc<dyn MediaHost>,
        selector: TaskSelector<R>,
    ) -> Self {
        Self {
            settings,
            navigation,
            media,
            selector,
            tasks_mode: false,
        }
    }

    /// Screen load: reads the tasks-mode gate and shows the first task.
    pub fn on_load(&mut self) -> SelectorResult<FinalRoundView> {
        self.tasks_mode = self.settings.tasks_mode_enabled();
        if self.tasks_mode {
            let pick = self.selector.select_initial()?;
            info!(
                "event=final_round_load module=screen status=ok tasks_mode=true index={}",
                pick.index
            );
        } else {
            info!("event=final_round_load module=screen status=ok tasks_mode=false");
        }
        Ok(self.view())
    }

    /// Screen appear: fire-and-forget vibration and explosion sound.
    pub fn on_appear(&self) {
        if self.settings.vibration_enabled() {
            if let Err(err) = self.media.vibrate() {
                warn!("event=final_round_vibrate module=screen status=error error={err}");
            }
        }

        let sound_id = self.settings.sound_identifier();
        if let Err(err) = self.media.play_sound(sound_id.as_str()) {
            warn!(
                "event=final_round_sound module=screen status=error sound={sound_id} error={err}"
            );
        }
    }

    /// "Other task" tap. Returns `Ok(None)` when tasks mode is off, since
    /// the button is not shown in that case.
    pub fn on_other_task(&mut self) -> SelectorResult<Option<TaskPick>> {
        if !self.tasks_mode {
            debug!("event=final_round_other_task module=screen status=skipped reason=tasks_mode_off");
            return Ok(None);
        }
        self.selector.select_other().map(Some)
    }

    pub fn on_restart(&self) {
        info!("event=final_round_restart module=screen status=ok");
        self.navigation.restart();
    }

    pub fn view(&self) -> FinalRoundView {
        let task_text = if self.tasks_mode {
            self.selector.current().map(|pick| pick.text)
        } else {
            None
        };
        FinalRoundView {
            title: FINAL_ROUND_TITLE,
            task_text,
            shows_other_task_button: self.tasks_mode,
        }
    }

    pub fn selector(&self) -> &TaskSelector<R> {
        &self.selector
    }
}
