//! Block kinds that can occupy a grid cell, and the brush used to paint them.
//!
//! `BlockKind` is the closed set of tags stored in the grid and sent over the
//! wire (lowercase strings). Each kind carries the display label and fill color
//! shared by the palette controls and the renderer so the two never disagree.

#[cfg(test)]
#[path = "block_test.rs"]
mod block_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Content type of a populated cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Wall,
    Floor,
    Stairs,
    Roof,
    Ladder,
}

impl BlockKind {
    /// Every kind in palette order.
    pub const ALL: [Self; 5] = [Self::Wall, Self::Floor, Self::Stairs, Self::Roof, Self::Ladder];

    /// Wire tag, as stored in serialized designs.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Floor => "floor",
            Self::Stairs => "stairs",
            Self::Roof => "roof",
            Self::Ladder => "ladder",
        }
    }

    /// Human-readable label for palette buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Wall => "Wall",
            Self::Floor => "Floor",
            Self::Stairs => "Stairs",
            Self::Roof => "Roof",
            Self::Ladder => "Ladder",
        }
    }

    /// Fill color used for cells and palette swatches.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Wall => "#333333",
            Self::Floor => "#b29966",
            Self::Stairs => "#996633",
            Self::Roof => "#cc3333",
            Self::Ladder => "#ffcc33",
        }
    }

    /// Text color readable on top of [`Self::color`].
    #[must_use]
    pub fn text_color(self) -> &'static str {
        match self {
            Self::Ladder => "black",
            _ => "white",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when a string is not a known block tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown block tag: {0}")]
pub struct UnknownBlock(pub String);

impl FromStr for BlockKind {
    type Err = UnknownBlock;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| UnknownBlock(s.to_owned()))
    }
}

/// What a paint action writes into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brush {
    /// Set the cell to this block kind.
    Block(BlockKind),
    /// Remove whatever occupies the cell.
    Eraser,
}

impl Default for Brush {
    fn default() -> Self {
        Self::Block(BlockKind::Wall)
    }
}

impl Brush {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Block(kind) => kind.label(),
            Self::Eraser => "Eraser",
        }
    }

    /// Accent color for the "selected brush" indicator.
    #[must_use]
    pub fn indicator_color(self) -> &'static str {
        match self {
            Self::Block(_) => "#00ffcc",
            Self::Eraser => "#ff4444",
        }
    }
}
