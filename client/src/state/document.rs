//! Mirror of the engine's grid for the save flow.
//!
//! The engine owns the authoritative grid inside the canvas host. Save needs
//! the cells outside that host, so every paint/erase action is replayed here.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use canvas::engine::Action;
use canvas::grid::{GridStore, WireCells};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentState {
    pub grid: GridStore,
    /// Bumped on every change; lets views react without diffing the grid.
    pub revision: u64,
}

impl DocumentState {
    /// Replay one engine action. Returns whether the mirror changed.
    pub fn apply(&mut self, action: &Action) -> bool {
        let changed = match *action {
            Action::CellPainted { layer, x, y, block } => self.grid.set_cell(layer, x, y, block),
            Action::CellErased { layer, x, y } => self.grid.erase_cell(layer, x, y),
            _ => false,
        };
        if changed {
            self.revision += 1;
        }
        changed
    }

    /// Replace the mirror after a design load.
    pub fn replace(&mut self, grid: GridStore) {
        self.grid = grid;
        self.revision += 1;
    }

    #[must_use]
    pub fn to_wire(&self) -> WireCells {
        self.grid.to_wire()
    }
}
