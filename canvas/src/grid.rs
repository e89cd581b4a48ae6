//! Grid model: the sparse layer → x → y store of placed blocks.
//!
//! A cell is addressed by `(layer, x, y)`. Absence of an entry means the cell
//! is empty; there is no explicit "empty" marker. Erasing the last block of a
//! column or layer prunes the now-empty parent map, so a layer key exists iff
//! that layer has at least one block.
//!
//! Data flows into this layer from the input engine (paint/erase) and from the
//! network (`from_wire` on design load). The renderer reads via
//! `layer_entries`; persistence writes via `to_wire`.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use std::collections::BTreeMap;

use crate::block::BlockKind;

/// Layer index (Z level). Layer 0 is the ground floor.
pub type Layer = u32;

/// Serialized grid as exchanged with the server:
/// `{"<layer>": {"<x>": {"<y>": "<tag>"}}}`.
pub type WireCells = BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>;

/// Errors raised while decoding [`WireCells`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("invalid layer key: {0:?}")]
    InvalidLayer(String),
    #[error("invalid x key {key:?} in layer {layer}")]
    InvalidX { layer: Layer, key: String },
    #[error("invalid y key {key:?} in layer {layer}, x {x}")]
    InvalidY { layer: Layer, x: i32, key: String },
}

type Column = BTreeMap<i32, BlockKind>;
type Plane = BTreeMap<i32, Column>;

/// Sparse storage of every placed block across all layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridStore {
    layers: BTreeMap<Layer, Plane>,
}

impl GridStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `block` at `(layer, x, y)`. Returns `true` if the cell changed.
    pub fn set_cell(&mut self, layer: Layer, x: i32, y: i32, block: BlockKind) -> bool {
        let column = self.layers.entry(layer).or_default().entry(x).or_default();
        column.insert(y, block) != Some(block)
    }

    /// Clear `(layer, x, y)`. Returns `true` if a block was removed.
    pub fn erase_cell(&mut self, layer: Layer, x: i32, y: i32) -> bool {
        let Some(plane) = self.layers.get_mut(&layer) else {
            return false;
        };
        let Some(column) = plane.get_mut(&x) else {
            return false;
        };
        if column.remove(&y).is_none() {
            return false;
        }
        if column.is_empty() {
            plane.remove(&x);
        }
        if plane.is_empty() {
            self.layers.remove(&layer);
        }
        true
    }

    #[must_use]
    pub fn get(&self, layer: Layer, x: i32, y: i32) -> Option<BlockKind> {
        self.layers.get(&layer)?.get(&x)?.get(&y).copied()
    }

    /// All populated cells of `layer` as `(x, y, block)`, ascending by x then y.
    pub fn layer_entries(&self, layer: Layer) -> impl Iterator<Item = (i32, i32, BlockKind)> + '_ {
        self.layers
            .get(&layer)
            .into_iter()
            .flat_map(|plane| plane.iter())
            .flat_map(|(&x, column)| column.iter().map(move |(&y, &block)| (x, y, block)))
    }

    /// Layers holding at least one block, ascending.
    pub fn populated_layers(&self) -> impl Iterator<Item = Layer> + '_ {
        self.layers.keys().copied()
    }

    #[must_use]
    pub fn is_layer_empty(&self, layer: Layer) -> bool {
        !self.layers.contains_key(&layer)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Total number of placed blocks across every layer.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.layers.values().flat_map(BTreeMap::values).map(BTreeMap::len).sum()
    }

    /// Encode into the nested string-keyed wire form.
    #[must_use]
    pub fn to_wire(&self) -> WireCells {
        self.layers
            .iter()
            .map(|(layer, plane)| {
                let xs = plane
                    .iter()
                    .map(|(x, column)| {
                        let ys = column
                            .iter()
                            .map(|(y, block)| (y.to_string(), block.tag().to_owned()))
                            .collect();
                        (x.to_string(), ys)
                    })
                    .collect();
                (layer.to_string(), xs)
            })
            .collect()
    }

    /// Decode the nested wire form.
    ///
    /// Unknown block tags are skipped (and logged) so a design saved by a newer
    /// palette still loads. Empty nested maps are accepted and dropped.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] when a layer key is not a non-negative integer or
    /// an x/y key is not an integer.
    pub fn from_wire(wire: &WireCells) -> Result<Self, GridError> {
        let mut store = Self::new();
        for (layer_key, xs) in wire {
            let layer: Layer = layer_key
                .trim()
                .parse()
                .map_err(|_| GridError::InvalidLayer(layer_key.clone()))?;
            for (x_key, ys) in xs {
                let x: i32 = x_key
                    .trim()
                    .parse()
                    .map_err(|_| GridError::InvalidX { layer, key: x_key.clone() })?;
                for (y_key, tag) in ys {
                    let y: i32 = y_key
                        .trim()
                        .parse()
                        .map_err(|_| GridError::InvalidY { layer, x, key: y_key.clone() })?;
                    match tag.parse::<BlockKind>() {
                        Ok(block) => {
                            store.set_cell(layer, x, y, block);
                        }
                        Err(err) => log::warn!("skipping cell ({layer}, {x}, {y}): {err}"),
                    }
                }
            }
        }
        Ok(store)
    }
}
