//! Curated per-position metadata for ranking tables (dividers and tags).
//!
//! Entries are keyed by 1-based rank position, not by player. When the ranking order
//! changes, an entry stays on its position and so may end up describing a different
//! player than the one it was written for.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata attached to one rank position of a category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RankPositionMetadata {
    /// 1-based rank position.
    pub position: usize,
    #[serde(default)]
    pub is_divider_after: bool,
    #[serde(default)]
    pub tag_text: Option<String>,
    /// Hex background colour for the tag.
    #[serde(default)]
    pub tag_color: Option<String>,
}

/// Lookup table for one category, passed explicitly into the ranking renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RankMetadata {
    by_position: HashMap<usize, RankPositionMetadata>,
}

impl RankMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from rows; a later row for the same position replaces an earlier one.
    pub fn from_entries(entries: impl IntoIterator<Item = RankPositionMetadata>) -> Self {
        let by_position = entries.into_iter().map(|e| (e.position, e)).collect();
        Self { by_position }
    }

    pub fn insert(&mut self, entry: RankPositionMetadata) {
        self.by_position.insert(entry.position, entry);
    }

    pub fn at(&self, position: usize) -> Option<&RankPositionMetadata> {
        self.by_position.get(&position)
    }

    pub fn is_empty(&self) -> bool {
        self.by_position.is_empty()
    }
}
