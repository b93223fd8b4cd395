//! Builds the settings table section list from current settings.

use crate::model::section::{RowAccessory, RowViewModel, SettingsSection};

use super::game_settings::{GameDuration, GameSettings};

pub const ROW_ID_BACKGROUND_MUSIC: &str = "background_music";
pub const ROW_ID_VIBRATION: &str = "vibration";
pub const ROW_ID_TASKS_MODE: &str = "tasks_mode";
pub const ROW_ID_BACKGROUND_TRACK: &str = "background_track";
pub const ROW_ID_BOMB_SOUND: &str = "bomb_sound";

/// Row id prefix for game duration choices; suffixed with
/// `GameDuration::as_str`.
pub const ROW_ID_DURATION_PREFIX: &str = "game_duration.";

/// Returns sections in display order: game time, toggles, sound pickers.
pub fn settings_sections(settings: &GameSettings) -> Vec<SettingsSection> {
    vec![
        duration_section(settings.game_duration),
        SettingsSection::ToggleSection {
            items: vec![
                RowViewModel::new(
                    ROW_ID_BACKGROUND_MUSIC,
                    "Background music",
                    RowAccessory::Toggle(settings.background_music),
                ),
                RowViewModel::new(
                    ROW_ID_VIBRATION,
                    "Vibration",
                    RowAccessory::Toggle(settings.vibration),
                ),
                RowViewModel::new(
                    ROW_ID_TASKS_MODE,
                    "Game with tasks",
                    RowAccessory::Toggle(settings.tasks_mode),
                ),
            ],
        },
        SettingsSection::DisclosureSection {
            items: vec![
                RowViewModel::new(
                    ROW_ID_BACKGROUND_TRACK,
                    "Background music",
                    RowAccessory::Disclosure(settings.background_track.clone()),
                ),
                RowViewModel::new(
                    ROW_ID_BOMB_SOUND,
                    "Explosion sound",
                    RowAccessory::Disclosure(settings.bomb_sound.clone()),
                ),
            ],
        },
    ]
}

fn duration_section(selected: GameDuration) -> SettingsSection {
    let items = GameDuration::ALL
        .into_iter()
        .map(|duration| {
            RowViewModel::new(
                format!("{ROW_ID_DURATION_PREFIX}{}", duration.as_str()),
                duration.label(),
                RowAccessory::Checkmark(duration == selected),
            )
        })
        .collect();
    SettingsSection::TitleSelection {
        title: "Game time".to_string(),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::{settings_sections, ROW_ID_BOMB_SOUND, ROW_ID_VIBRATION};
    use crate::model::section::{CellKind, RowAccessory};
    use crate::settings::game_settings::{GameDuration, GameSettings};

    #[test]
    fn sections_follow_display_order() {
        let sections = settings_sections(&GameSettings::default());
        let kinds = sections
            .iter()
            .map(|section| section.cell_kind())
            .collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![CellKind::TitleSelection, CellKind::Toggle, CellKind::Disclosure]
        );
    }

    #[test]
    fn exactly_one_duration_is_checked() {
        let settings = GameSettings {
            game_duration: GameDuration::Long,
            ..GameSettings::default()
        };
        let sections = settings_sections(&settings);
        let checked = sections[0]
            .items()
            .iter()
            .filter(|row| row.accessory == RowAccessory::Checkmark(true))
            .map(|row| row.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(checked, vec!["game_duration.long"]);
    }

    #[test]
    fn rows_reflect_current_values() {
        let settings = GameSettings {
            vibration: false,
            bomb_sound: "bomb_explosion_2".to_string(),
            ..GameSettings::default()
        };
        let sections = settings_sections(&settings);

        let vibration = sections[1]
            .items()
            .iter()
            .find(|row| row.id == ROW_ID_VIBRATION)
            .expect("vibration row");
        assert_eq!(vibration.accessory, RowAccessory::Toggle(false));

        let bomb = sections[2]
            .items()
            .iter()
            .find(|row| row.id == ROW_ID_BOMB_SOUND)
            .expect("bomb sound row");
        assert_eq!(
            bomb.accessory,
            RowAccessory::Disclosure("bomb_explosion_2".to_string())
        );
    }
}
