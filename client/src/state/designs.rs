//! Saved-design list, the design-name field, and persistence errors.
//!
//! DESIGN
//! ======
//! The list is whatever the last `GET /list-designs/` returned. Overwrite
//! prompts and export id resolution both read from it, so a stale list is
//! possible after another tab saves; the server upserts by name regardless.

#[cfg(test)]
#[path = "designs_test.rs"]
mod designs_test;

use canvas::export::ExportError;

use crate::net::types::DesignSummary;

/// Label of the placeholder option that means "nothing selected".
pub const SENTINEL_LABEL: &str = "-- select a design --";

/// Errors surfaced by save, load, and export flows.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DesignError {
    #[error("Please enter a design name")]
    EmptyName,
    #[error("save cancelled")]
    Cancelled,
    #[error("network error: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Server(u16),
    #[error("could not read design: {0}")]
    Decode(String),
    #[error("Select a saved design, or enter a name and save it once first.")]
    NoDesignSelected,
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

impl DesignError {
    /// Text for the blocking alert, or `None` when the user already knows
    /// (they declined the overwrite prompt).
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Cancelled => None,
            Self::Export(ExportError::NoContent) => Some("Nothing to export: every layer is empty".to_owned()),
            other => Some(other.to_string()),
        }
    }
}

/// One `<option>` of the design select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DesignOption {
    pub value: String,
    pub label: String,
}

/// Design list and form fields of the design panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DesignsState {
    pub designs: Vec<DesignSummary>,
    pub selected: Option<i64>,
    pub name: String,
    pub floor_height: u32,
    pub busy: bool,
}

/// Floor height the server export uses when the field is left alone.
pub const DEFAULT_FLOOR_HEIGHT: u32 = 3;

impl Default for DesignsState {
    fn default() -> Self {
        Self { designs: Vec::new(), selected: None, name: String::new(), floor_height: DEFAULT_FLOOR_HEIGHT, busy: false }
    }
}

impl DesignsState {
    /// Replace the list. A selection that no longer exists is cleared.
    pub fn set_designs(&mut self, designs: Vec<DesignSummary>) {
        if let Some(id) = self.selected {
            if !designs.iter().any(|d| d.id == id) {
                self.selected = None;
            }
        }
        self.designs = designs;
    }

    /// Select options: the sentinel first, then every design in server order.
    #[must_use]
    pub fn options(&self) -> Vec<DesignOption> {
        std::iter::once(DesignOption { value: String::new(), label: SENTINEL_LABEL.to_owned() })
            .chain(self.designs.iter().map(|d| DesignOption { value: d.id.to_string(), label: d.name.clone() }))
            .collect()
    }

    /// Apply the select's `value`. The sentinel (or anything unparsable) clears the selection.
    pub fn select_value(&mut self, value: &str) {
        self.selected = value.trim().parse::<i64>().ok().filter(|id| self.designs.iter().any(|d| d.id == *id));
    }

    /// Value attribute for the select, `""` when nothing is selected.
    #[must_use]
    pub fn selected_value(&self) -> String {
        self.selected.map(|id| id.to_string()).unwrap_or_default()
    }

    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&DesignSummary> {
        find_by_name(&self.designs, name)
    }

    /// Apply the floor-height field. Non-numeric or zero input is ignored.
    pub fn set_floor_height(&mut self, raw: &str) {
        if let Some(height) = parse_floor_height(raw) {
            self.floor_height = height;
        }
    }
}

/// Exact-name lookup, matching how the select shows names.
#[must_use]
pub fn find_by_name<'a>(designs: &'a [DesignSummary], name: &str) -> Option<&'a DesignSummary> {
    designs.iter().find(|d| d.name == name)
}

#[must_use]
pub fn parse_floor_height(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|h| *h > 0)
}
