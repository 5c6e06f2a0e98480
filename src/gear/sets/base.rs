//! Base gear-back set
//!
//! The baseline table holds only the empty-slot entry every character
//! starts with.

use crate::gear::item::{table_from_items, BackItem, GearTable};

/// Create the default base back table (hardcoded fallback)
pub fn default_base_back() -> GearTable {
    table_from_items(vec![BackItem::cosmetic(
        "base",
        "No Back Gear",
        "No back gear equipped.",
        0,
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_contains_empty_slot_entry() {
        let table = default_base_back();
        let base = table.get("base").expect("base entry missing");
        assert_eq!(base.value, 0);
        assert!(!base.has_stats());
    }
}
