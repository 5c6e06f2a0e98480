//! Enchanted armoire gear collection
//!
//! The armoire is an independently-owned collection that grows over
//! time as new pieces are released. Consumers hold a `SharedArmoire`
//! handle and see updates without re-registering, so registries must
//! read through the handle on every access rather than copying a table
//! out at construction time.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::gear::item::{table_from_items, BackItem, GearStats, GearTable};

/// Per-slot gear tables released through the enchanted armoire.
///
/// Every table defaults to empty so a slot missing from a data file
/// deserializes silently instead of erroring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArmoireSet {
    #[serde(default)]
    pub back: GearTable,
    #[serde(default)]
    pub head: GearTable,
    #[serde(default)]
    pub armor: GearTable,
    #[serde(default)]
    pub shield: GearTable,
}

/// Shared handle to the armoire collection.
///
/// The lock lives on the provider side; readers take it only for the
/// duration of a single table lookup.
pub type SharedArmoire = Arc<RwLock<ArmoireSet>>;

/// Wrap an armoire set in a shared handle
pub fn shared(set: ArmoireSet) -> SharedArmoire {
    Arc::new(RwLock::new(set))
}

fn armoire_item(key: &str, text: &str, notes: &str, set: &str, stats: GearStats) -> BackItem {
    BackItem {
        key: key.to_string(),
        text: text.to_string(),
        notes: notes.to_string(),
        value: 100,
        stats,
        set: Some(set.to_string()),
        mystery: None,
    }
}

/// Create the default armoire collection (hardcoded fallback)
pub fn default_armoire() -> ArmoireSet {
    ArmoireSet {
        back: table_from_items(vec![
            armoire_item(
                "armoire_foxTail",
                "Fox Tail",
                "A russet tail that twitches when treasure is near. Perception +8.",
                "animalTails",
                GearStats {
                    perception: 8,
                    ..GearStats::default()
                },
            ),
            armoire_item(
                "armoire_heraldsCape",
                "Herald's Cape",
                "Announces your arrival before you do. Constitution +7.",
                "heraldOfSpring",
                GearStats {
                    constitution: 7,
                    ..GearStats::default()
                },
            ),
        ]),
        head: table_from_items(vec![armoire_item(
            "armoire_heraldsCap",
            "Herald's Cap",
            "A jaunty cap trimmed with spring bells. Intelligence +5.",
            "heraldOfSpring",
            GearStats {
                intelligence: 5,
                ..GearStats::default()
            },
        )]),
        armor: table_from_items(vec![armoire_item(
            "armoire_heraldsTunic",
            "Herald's Tunic",
            "Bright livery for bearers of good news. Constitution +9.",
            "heraldOfSpring",
            GearStats {
                constitution: 9,
                ..GearStats::default()
            },
        )]),
        shield: GearTable::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_armoire_populates_back() {
        let set = default_armoire();
        assert!(!set.back.is_empty());
        for item in set.back.values() {
            assert!(item.set.is_some(), "{} has no armoire set", item.key);
        }
    }

    #[test]
    fn test_missing_slots_deserialize_empty() {
        // A file that only lists back items is still a valid armoire
        let set: ArmoireSet = ron::from_str("(back: {})").expect("parse failed");
        assert!(set.back.is_empty());
        assert!(set.shield.is_empty());
    }

    #[test]
    fn test_shared_handle_observes_writes() {
        let handle = shared(ArmoireSet::default());
        handle.write().back.insert(
            "armoire_testCape".to_string(),
            BackItem::cosmetic("armoire_testCape", "Test Cape", "", 100),
        );
        assert!(handle.read().back.contains_key("armoire_testCape"));
    }
}
