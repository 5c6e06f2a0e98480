//! Gear item definitions
//!
//! These records are loaded from RON or JSON files and describe one
//! piece of cosmetic gear each. The registry treats them as opaque
//! metadata; game rules that consume the catalog interpret the fields.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A table of gear items keyed by item key
pub type GearTable = HashMap<String, BackItem>;

/// Stat bonuses granted by a piece of gear
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearStats {
    #[serde(default)]
    pub strength: i32,
    #[serde(default)]
    pub intelligence: i32,
    #[serde(default)]
    pub perception: i32,
    #[serde(default)]
    pub constitution: i32,
}

/// One gear-back definition from external data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackItem {
    /// Unique item key, matching its key in the owning table
    pub key: String,
    /// Display name
    pub text: String,
    /// Flavor/description text
    pub notes: String,
    /// Shop value in gold
    pub value: u32,
    /// Stat bonuses (cosmetic gear is usually all zero)
    #[serde(default)]
    pub stats: GearStats,
    /// Armoire set this piece belongs to, if any
    #[serde(default)]
    pub set: Option<String>,
    /// Subscriber series this piece shipped in (e.g. "202311")
    #[serde(default)]
    pub mystery: Option<String>,
}

impl BackItem {
    /// Create a plain cosmetic item with no stats or grouping
    pub fn cosmetic(key: &str, text: &str, notes: &str, value: u32) -> Self {
        Self {
            key: key.to_string(),
            text: text.to_string(),
            notes: notes.to_string(),
            value,
            stats: GearStats::default(),
            set: None,
            mystery: None,
        }
    }

    /// True if the item grants any stat bonus
    pub fn has_stats(&self) -> bool {
        self.stats != GearStats::default()
    }
}

/// Build a `GearTable` from a list of items, keyed by each item's key
pub fn table_from_items(items: Vec<BackItem>) -> GearTable {
    items.into_iter().map(|i| (i.key.clone(), i)).collect()
}
