//! Gear data loader
//!
//! Loads gear tables from external RON or JSON files, with fallback to
//! hardcoded defaults.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ContentError;
use crate::gear::back::BackRegistry;
use crate::gear::item::GearTable;
use crate::gear::sets::armoire::{self, ArmoireSet, SharedArmoire};
use crate::gear::sets::{base, mystery, special};

/// Default on-disk location for catalog data files
pub const DATA_DIR: &str = "assets/data";

/// Manages the external gear content collections
#[derive(Debug, Clone)]
pub struct ContentManager {
    /// Base gear-back table
    pub base: GearTable,
    /// Mystery (subscriber) gear-back table
    pub mystery: GearTable,
    /// Special (event) gear-back table
    pub special: GearTable,
    /// Shared armoire collection
    pub armoire: SharedArmoire,
}

impl ContentManager {
    /// Create a new ContentManager, loading from `assets/data/` or
    /// using defaults
    pub fn new() -> Self {
        Self::load_from(Path::new(DATA_DIR))
    }

    /// Load catalog data from a directory, falling back per-file to
    /// the hardcoded default tables
    pub fn load_from(base_path: &Path) -> Self {
        Self {
            base: load_or_default(base_path, "back_base", base::default_base_back),
            mystery: load_or_default(base_path, "back_mystery", mystery::default_mystery_back),
            special: load_or_default(base_path, "back_special", special::default_special_back),
            armoire: armoire::shared(load_or_default(
                base_path,
                "armoire",
                armoire::default_armoire,
            )),
        }
    }

    /// Build the back-slot registry from the loaded collections.
    ///
    /// The three static tables are bound by value; the armoire is
    /// passed as a shared handle so later writes to it are seen by the
    /// registry's armoire accessor.
    pub fn back_registry(&self) -> BackRegistry {
        BackRegistry::new(
            self.base.clone(),
            self.mystery.clone(),
            self.special.clone(),
            self.armoire.clone(),
        )
    }
}

impl Default for ContentManager {
    fn default() -> Self {
        Self {
            base: base::default_base_back(),
            mystery: mystery::default_mystery_back(),
            special: special::default_special_back(),
            armoire: armoire::shared(armoire::default_armoire()),
        }
    }
}

/// Load one collection from `<stem>.ron` or `<stem>.json`, falling
/// back to the given default on any failure
fn load_or_default<T, F>(base_path: &Path, stem: &str, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let ron_path = base_path.join(format!("{}.ron", stem));
    if ron_path.exists() {
        match fs::read_to_string(&ron_path) {
            Ok(content) => match ron::from_str(&content) {
                Ok(value) => return value,
                Err(e) => log::warn!("Failed to parse {}: {}", ron_path.display(), e),
            },
            Err(e) => log::warn!("Failed to read {}: {}", ron_path.display(), e),
        }
    }

    let json_path = base_path.join(format!("{}.json", stem));
    if json_path.exists() {
        match fs::read_to_string(&json_path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(value) => return value,
                Err(e) => log::warn!("Failed to parse {}: {}", json_path.display(), e),
            },
            Err(e) => log::warn!("Failed to read {}: {}", json_path.display(), e),
        }
    }

    default()
}

/// Export all default data to RON files for easy editing
pub fn export_default_data(base_path: &Path) -> Result<(), ContentError> {
    if !base_path.exists() {
        fs::create_dir_all(base_path).map_err(|e| ContentError::io(base_path, e))?;
    }

    write_ron(base_path, "back_base", &base::default_base_back())?;
    write_ron(base_path, "back_mystery", &mystery::default_mystery_back())?;
    write_ron(base_path, "back_special", &special::default_special_back())?;
    write_ron(base_path, "armoire", &armoire::default_armoire())?;

    Ok(())
}

fn write_ron<T: Serialize>(base_path: &Path, stem: &str, value: &T) -> Result<(), ContentError> {
    let pretty = ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())?;
    let path = base_path.join(format!("{}.ron", stem));
    fs::write(&path, pretty).map_err(|e| ContentError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("gear-catalog-tests").join(name);
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let manager = ContentManager::load_from(&scratch_dir("missing"));
        assert!(manager.base.contains_key("base"));
        assert!(!manager.mystery.is_empty());
        assert!(!manager.special.is_empty());
        assert!(!manager.armoire.read().back.is_empty());
    }

    #[test]
    fn test_export_then_load_round_trip() {
        let dir = scratch_dir("round-trip");
        export_default_data(&dir).expect("export failed");

        assert!(dir.join("back_base.ron").exists());
        assert!(dir.join("back_mystery.ron").exists());
        assert!(dir.join("back_special.ron").exists());
        assert!(dir.join("armoire.ron").exists());

        let manager = ContentManager::load_from(&dir);
        assert_eq!(manager.base, base::default_base_back());
        assert_eq!(manager.mystery, mystery::default_mystery_back());
        assert_eq!(manager.special, special::default_special_back());
    }

    #[test]
    fn test_json_alternate_parses() {
        let dir = scratch_dir("json");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("back_base.json"),
            r#"{"cape": {"key": "cape", "text": "Cape", "notes": "", "value": 5}}"#,
        )
        .unwrap();

        let manager = ContentManager::load_from(&dir);
        assert_eq!(manager.base.get("cape").map(|i| i.value), Some(5));
        // Other collections still fall back to defaults
        assert!(!manager.mystery.is_empty());
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = scratch_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("back_special.ron"), "(not valid ron").unwrap();

        let manager = ContentManager::load_from(&dir);
        assert_eq!(manager.special, special::default_special_back());
    }

    #[test]
    fn test_registry_shares_armoire_with_manager() {
        let manager = ContentManager::default();
        let registry = manager.back_registry();
        let before = registry.armoire().len();

        manager.armoire.write().back.insert(
            "armoire_newCape".to_string(),
            crate::gear::item::BackItem::cosmetic("armoire_newCape", "New Cape", "", 100),
        );

        assert_eq!(registry.armoire().len(), before + 1);
    }
}
