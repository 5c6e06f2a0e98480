//! Special gear-back set
//!
//! Event and promotional items. Unlike mystery items these can carry
//! stats and a gold value.

use crate::gear::item::{table_from_items, BackItem, GearStats, GearTable};

/// Create the default special back table (hardcoded fallback)
pub fn default_special_back() -> GearTable {
    table_from_items(vec![
        BackItem {
            key: "special_snowdownCape".to_string(),
            text: "Snowdown Cape".to_string(),
            notes: "Awarded during the Snowdown festival. Perception +6.".to_string(),
            value: 90,
            stats: GearStats {
                perception: 6,
                ..GearStats::default()
            },
            set: None,
            mystery: None,
        },
        BackItem {
            key: "special_emberWings".to_string(),
            text: "Ember Wings".to_string(),
            notes: "Won at the Midsummer bonfire. Strength +6.".to_string(),
            value: 90,
            stats: GearStats {
                strength: 6,
                ..GearStats::default()
            },
            set: None,
            mystery: None,
        },
        BackItem::cosmetic(
            "special_foundersBanner",
            "Founder's Banner",
            "Carried by those who were here at the very beginning.",
            0,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_defaults_nonempty() {
        let table = default_special_back();
        assert!(!table.is_empty());
        // Keys are self-consistent with map keys
        for (key, item) in &table {
            assert_eq!(key, &item.key);
        }
    }
}
