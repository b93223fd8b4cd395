//! Section-driven table adapter.
//!
//! # Responsibility
//! - Answer a host list widget's row/height/content queries from a
//!   `SettingsSection` list.
//! - Register every cell kind with the host before rows are requested.
//!
//! # Invariants
//! - The renderer holds only a weak handle to its host; the host owns the
//!   renderer lifetime.
//! - `reload` swaps the whole section list in one step.
//! - Out-of-range indices yield zero/placeholder values, never errors.

use log::{debug, error};
use std::rc::{Rc, Weak};

use super::{ConfigurationError, RenderResult};
use crate::model::section::{CellKind, RowViewModel, SettingsSection};

/// Header height used for every valid section.
pub const SECTION_HEADER_HEIGHT: f64 = 16.0;

/// Host list/grid widget contract.
///
/// Implementations are UI-thread objects and use interior mutability.
pub trait HostWidget {
    /// Makes `kind` instantiable under its reuse identifier.
    fn register_cell(&self, kind: CellKind);
    /// Whether `kind` has been registered.
    fn has_cell(&self, kind: CellKind) -> bool;
    /// Requests a full re-query of every section and row.
    fn reload_data(&self);
}

/// Lifecycle of a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererState {
    Unattached,
    Attached,
    HoldsData,
}

/// Empty header placeholder; the host only reserves `header_height`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderView;

/// Content handed to the host for one row, keyed by cell kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowContent<'a> {
    TitleSelection {
        title: &'a str,
        items: &'a [RowViewModel],
    },
    Disclosure {
        items: &'a [RowViewModel],
    },
    Toggle {
        items: &'a [RowViewModel],
    },
    /// Returned for indices that do not address a section.
    Placeholder,
}

impl RowContent<'_> {
    pub fn cell_kind(&self) -> Option<CellKind> {
        match self {
            Self::TitleSelection { .. } => Some(CellKind::TitleSelection),
            Self::Disclosure { .. } => Some(CellKind::Disclosure),
            Self::Toggle { .. } => Some(CellKind::Toggle),
            Self::Placeholder => None,
        }
    }
}

/// Adapts a section list to the host widget query protocol.
pub struct SectionRenderer {
    host: Option<Weak<dyn HostWidget>>,
    sections: Vec<SettingsSection>,
    state: RendererState,
}

impl Default for SectionRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionRenderer {
    pub fn new() -> Self {
        Self {
            host: None,
            sections: Vec::new(),
            state: RendererState::Unattached,
        }
    }

    pub fn state(&self) -> RendererState {
        self.state
    }

    /// Registers this renderer as `host`'s data source and registers all cell
    /// kinds. Re-attaching replaces the previous host handle.
    pub fn attach<H: HostWidget + 'static>(&mut self, host: &Rc<H>) {
        for kind in CellKind::ALL {
            host.register_cell(kind);
        }
        let weak: Weak<H> = Rc::downgrade(host);
        self.host = Some(weak);
        if self.state == RendererState::Unattached {
            self.state = RendererState::Attached;
        }
        debug!(
            "event=renderer_attach module=render status=ok cell_kinds={}",
            CellKind::ALL.len()
        );
    }

    /// Replaces the held sections and asks the host to redraw.
    pub fn reload(&mut self, sections: Vec<SettingsSection>) {
        self.sections = sections;
        if self.state != RendererState::Unattached {
            self.state = RendererState::HoldsData;
        }
        match self.host.as_ref().and_then(Weak::upgrade) {
            Some(host) => host.reload_data(),
            None => debug!(
                "event=renderer_reload module=render status=skipped reason=no_host sections={}",
                self.sections.len()
            ),
        }
        debug!(
            "event=renderer_reload module=render status=ok sections={}",
            self.sections.len()
        );
    }

    pub fn sections(&self) -> &[SettingsSection] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// `1` for every valid section, `0` past the end.
    pub fn row_count(&self, section_index: usize) -> usize {
        usize::from(section_index < self.sections.len())
    }

    pub fn row_height(&self, section_index: usize) -> f64 {
        self.sections
            .get(section_index)
            .map_or(0.0, SettingsSection::row_height)
    }

    pub fn header_height(&self, section_index: usize) -> f64 {
        if section_index < self.sections.len() {
            SECTION_HEADER_HEIGHT
        } else {
            0.0
        }
    }

    pub fn header_view(&self, _section_index: usize) -> HeaderView {
        HeaderView
    }

    /// Returns the row content for `section_index`.
    ///
    /// # Errors
    /// - `ConfigurationError::NotAttached` when no host was ever attached.
    /// - `ConfigurationError::HostReleased` when the host has been dropped.
    /// - `ConfigurationError::UnregisteredCell` when the host cannot
    ///   instantiate the cell kind this section needs.
    pub fn row_content(&self, section_index: usize) -> RenderResult<RowContent<'_>> {
        let Some(section) = self.sections.get(section_index) else {
            return Ok(RowContent::Placeholder);
        };

        let kind = section.cell_kind();
        if let Err(err) = self.ensure_registered(kind) {
            error!(
                "event=row_content module=render status=error section={section_index} cell={} error={err}",
                kind.reuse_identifier()
            );
            return Err(err);
        }

        Ok(match section {
            SettingsSection::TitleSelection { title, items } => RowContent::TitleSelection {
                title: title.as_str(),
                items: items.as_slice(),
            },
            SettingsSection::DisclosureSection { items } => RowContent::Disclosure {
                items: items.as_slice(),
            },
            SettingsSection::ToggleSection { items } => RowContent::Toggle {
                items: items.as_slice(),
            },
        })
    }

    fn ensure_registered(&self, kind: CellKind) -> RenderResult<()> {
        let handle = self.host.as_ref().ok_or(ConfigurationError::NotAttached)?;
        let host = handle.upgrade().ok_or(ConfigurationError::HostReleased)?;
        if !host.has_cell(kind) {
            return Err(ConfigurationError::UnregisteredCell(kind));
        }
        Ok(())
    }
}
