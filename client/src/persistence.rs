//! Save, list, and load designs through a [`DesignBackend`].
//!
//! Flows are plain async functions over a backend so they run against the
//! gloo-net client in the browser and an in-memory store in tests. None of
//! them touch Leptos state; callers fold the returned values into signals.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use canvas::grid::GridStore;

use crate::net::types::{DesignSummary, LoadDesignResponse, SaveDesignRequest};
use crate::state::designs::{DesignError, find_by_name};

/// Transport for the design endpoints.
#[allow(async_fn_in_trait)]
pub trait DesignBackend {
    /// `GET /list-designs/`.
    async fn list_designs(&self) -> Result<Vec<DesignSummary>, DesignError>;
    /// `POST /save-design/`; the server upserts by name.
    async fn save_design(&self, request: &SaveDesignRequest) -> Result<(), DesignError>;
    /// `GET /load-design/{id}/`.
    async fn load_design(&self, id: i64) -> Result<LoadDesignResponse, DesignError>;
}

/// Prompt shown before saving over an existing design.
#[must_use]
pub fn overwrite_prompt(name: &str) -> String {
    format!("A design named \"{name}\" already exists. Overwrite it?")
}

/// Design id the server-side PDF export should use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportTarget {
    pub id: i64,
    /// Fresh list when resolving required a save, for the caller to publish.
    pub refreshed: Option<Vec<DesignSummary>>,
}

/// Outcome of a save that reached the server.
///
/// The save itself succeeded; `designs` is the follow-up list fetch, which
/// can fail on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedDesign {
    pub name: String,
    pub designs: Result<Vec<DesignSummary>, DesignError>,
}

#[derive(Clone, Debug)]
pub struct Persistence<B> {
    backend: B,
}

impl<B: DesignBackend> Persistence<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Fetch the current design list.
    ///
    /// # Errors
    ///
    /// Propagates the backend's transport, status, or decode error.
    pub async fn refresh(&self) -> Result<Vec<DesignSummary>, DesignError> {
        let designs = self.backend.list_designs().await?;
        log::debug!("fetched {} design(s)", designs.len());
        Ok(designs)
    }

    /// Save `grid` under `name`, then re-fetch the list.
    ///
    /// `known` is the last-fetched list; a name already in it triggers
    /// `confirm(overwrite_prompt(name))` first.
    ///
    /// # Errors
    ///
    /// [`DesignError::EmptyName`] for a blank name, [`DesignError::Cancelled`]
    /// when the overwrite is declined, otherwise the backend's save error. A
    /// failed list fetch after a good save lands in [`SavedDesign::designs`].
    pub async fn save(
        &self,
        name: &str,
        grid: &GridStore,
        known: &[DesignSummary],
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<SavedDesign, DesignError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DesignError::EmptyName);
        }
        if find_by_name(known, name).is_some() && !confirm(&overwrite_prompt(name)) {
            return Err(DesignError::Cancelled);
        }

        let request = SaveDesignRequest { name: name.to_owned(), cells: grid.to_wire() };
        self.backend.save_design(&request).await?;
        log::info!("saved design {name:?} with {} cell(s)", grid.cell_count());
        let designs = self.refresh().await;
        if let Err(err) = &designs {
            log::warn!("design list refresh after save failed: {err}");
        }
        Ok(SavedDesign { name: name.to_owned(), designs })
    }

    /// Load design `id` and decode its cells.
    ///
    /// # Errors
    ///
    /// [`DesignError::Decode`] when the cell keys are malformed, otherwise the
    /// backend's error.
    pub async fn load(&self, id: i64) -> Result<GridStore, DesignError> {
        let response = self.backend.load_design(id).await?;
        let grid = GridStore::from_wire(&response.cells).map_err(|e| DesignError::Decode(e.to_string()))?;
        log::info!("loaded design {id} with {} cell(s)", grid.cell_count());
        Ok(grid)
    }

    /// Pick the design the server export should render.
    ///
    /// A selected design wins. Otherwise the typed name is saved (declining the
    /// overwrite keeps the stored version), the list is re-fetched, and the id
    /// is looked up by name.
    ///
    /// # Errors
    ///
    /// [`DesignError::NoDesignSelected`] when nothing is selected and no id can
    /// be resolved from the name; save errors other than a declined overwrite.
    pub async fn resolve_export_target(
        &self,
        selected: Option<i64>,
        name: &str,
        grid: &GridStore,
        known: &[DesignSummary],
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<ExportTarget, DesignError> {
        if let Some(id) = selected {
            return Ok(ExportTarget { id, refreshed: None });
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(DesignError::NoDesignSelected);
        }

        let designs = match self.save(name, grid, known, confirm).await {
            Ok(saved) => saved.designs?,
            Err(DesignError::Cancelled) => self.refresh().await?,
            Err(err) => return Err(err),
        };
        let id = find_by_name(&designs, name).map(|d| d.id).ok_or(DesignError::NoDesignSelected)?;
        Ok(ExportTarget { id, refreshed: Some(designs) })
    }
}
