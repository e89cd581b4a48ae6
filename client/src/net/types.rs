//! Request and response bodies for the design REST endpoints.
//!
//! Cells travel in the nested `{"<layer>": {"<x>": {"<y>": "<tag>"}}}` shape;
//! `canvas::grid::GridStore` converts to and from it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use canvas::grid::WireCells;

/// One row of `GET /list-designs/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSummary {
    pub id: i64,
    pub name: String,
}

/// Body of `POST /save-design/`. The server upserts by name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveDesignRequest {
    pub name: String,
    pub cells: WireCells,
}

/// Body of `GET /load-design/{id}/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadDesignResponse {
    #[serde(default)]
    pub cells: WireCells,
    /// Layer the design was saved on. The editor always reopens on layer 0.
    #[serde(default)]
    pub current_layer: Option<u32>,
}
