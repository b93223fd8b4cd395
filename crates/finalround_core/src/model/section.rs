//! Declarative settings-table section descriptors.
//!
//! # Responsibility
//! - Describe one settings group as a closed, tagged variant.
//! - Map every variant to its cell kind and fixed row height.
//!
//! # Invariants
//! - Each section renders exactly one row.
//! - Row heights are fixed per variant: 183 / 235 / 151.

use serde::{Deserialize, Serialize};

/// Fixed row height for `SettingsSection::TitleSelection`.
pub const TITLE_SELECTION_ROW_HEIGHT: f64 = 183.0;
/// Fixed row height for `SettingsSection::DisclosureSection`.
pub const DISCLOSURE_ROW_HEIGHT: f64 = 235.0;
/// Fixed row height for `SettingsSection::ToggleSection`.
pub const TOGGLE_ROW_HEIGHT: f64 = 151.0;

/// Trailing control shown by a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RowAccessory {
    Plain,
    /// Radio-style choice; `true` when this option is the active one.
    Checkmark(bool),
    Toggle(bool),
    /// Navigates to a detail picker; carries the current value label.
    Disclosure(String),
}

/// Per-row data owned by the concrete cell renderer.
///
/// The section renderer forwards these untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowViewModel {
    /// Stable identifier the shell uses to route taps back to settings.
    pub id: String,
    pub title: String,
    pub accessory: RowAccessory,
}

impl RowViewModel {
    pub fn new(id: impl Into<String>, title: impl Into<String>, accessory: RowAccessory) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            accessory,
        }
    }
}

/// One settings group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SettingsSection {
    TitleSelection {
        title: String,
        items: Vec<RowViewModel>,
    },
    DisclosureSection {
        items: Vec<RowViewModel>,
    },
    ToggleSection {
        items: Vec<RowViewModel>,
    },
}

impl SettingsSection {
    pub fn cell_kind(&self) -> CellKind {
        match self {
            Self::TitleSelection { .. } => CellKind::TitleSelection,
            Self::DisclosureSection { .. } => CellKind::Disclosure,
            Self::ToggleSection { .. } => CellKind::Toggle,
        }
    }

    pub fn row_height(&self) -> f64 {
        self.cell_kind().row_height()
    }

    pub fn items(&self) -> &[RowViewModel] {
        match self {
            Self::TitleSelection { items, .. }
            | Self::DisclosureSection { items }
            | Self::ToggleSection { items } => items,
        }
    }
}

/// Concrete cell renderer type a host widget must be able to instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellKind {
    TitleSelection,
    Disclosure,
    Toggle,
}

impl CellKind {
    pub const ALL: [CellKind; 3] = [Self::TitleSelection, Self::Disclosure, Self::Toggle];

    /// Stable reuse identifier used as the host widget registration key.
    pub fn reuse_identifier(self) -> &'static str {
        match self {
            Self::TitleSelection => "selection_title_cell",
            Self::Disclosure => "disclosure_settings_cell",
            Self::Toggle => "toggle_settings_cell",
        }
    }

    pub fn row_height(self) -> f64 {
        match self {
            Self::TitleSelection => TITLE_SELECTION_ROW_HEIGHT,
            Self::Disclosure => DISCLOSURE_ROW_HEIGHT,
            Self::Toggle => TOGGLE_ROW_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CellKind, RowAccessory, RowViewModel, SettingsSection};

    #[test]
    fn variants_map_to_fixed_heights() {
        let title = SettingsSection::TitleSelection {
            title: "Game time".to_string(),
            items: vec![],
        };
        let disclosure = SettingsSection::DisclosureSection { items: vec![] };
        let toggle = SettingsSection::ToggleSection { items: vec![] };

        assert_eq!(title.row_height(), 183.0);
        assert_eq!(disclosure.row_height(), 235.0);
        assert_eq!(toggle.row_height(), 151.0);
    }

    #[test]
    fn reuse_identifiers_are_unique() {
        let mut ids = CellKind::ALL
            .iter()
            .map(|kind| kind.reuse_identifier())
            .collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CellKind::ALL.len());
    }

    #[test]
    fn section_serializes_with_type_tag() {
        let section = SettingsSection::ToggleSection {
            items: vec![RowViewModel::new(
                "vibration",
                "Vibration",
                RowAccessory::Toggle(true),
            )],
        };

        let json = serde_json::to_value(&section).expect("serialize section");
        assert_eq!(json["type"], "toggle_section");
        assert_eq!(json["items"][0]["accessory"]["kind"], "toggle");
        assert_eq!(json["items"][0]["accessory"]["value"], true);
    }
}
