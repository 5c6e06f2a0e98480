//! Mystery gear-back set
//!
//! Subscriber items shipped in monthly series. Each item records the
//! series it belongs to in its `mystery` field.

use crate::gear::item::{table_from_items, BackItem, GearStats, GearTable};

fn mystery_item(key: &str, text: &str, notes: &str, series: &str) -> BackItem {
    BackItem {
        key: key.to_string(),
        text: text.to_string(),
        notes: notes.to_string(),
        value: 0,
        stats: GearStats::default(),
        set: None,
        mystery: Some(series.to_string()),
    }
}

/// Create the default mystery back table (hardcoded fallback)
pub fn default_mystery_back() -> GearTable {
    table_from_items(vec![
        mystery_item(
            "mystery_202311",
            "Tattered Wings",
            "Moth-eaten wings that still remember how to fly.",
            "202311",
        ),
        mystery_item(
            "mystery_202402",
            "Frostwoven Cloak",
            "A cloak spun from the first frost of winter.",
            "202402",
        ),
        mystery_item(
            "mystery_202407",
            "Tidecaller Fins",
            "Glistening fins that hum with the pull of the sea.",
            "202407",
        ),
        mystery_item(
            "mystery_202410",
            "Harvest Moon Mantle",
            "A mantle dyed in the amber of the harvest moon.",
            "202410",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mystery_items_carry_series() {
        let table = default_mystery_back();
        assert!(!table.is_empty());
        for item in table.values() {
            assert!(item.mystery.is_some(), "{} has no series", item.key);
            assert_eq!(item.value, 0, "subscriber items are not sold");
        }
    }
}
