//! Back-slot gear registry
//!
//! Composes the four category tables for the back slot into one
//! read-only lookup. The base, mystery and special tables are bound
//! once at construction; the armoire entry is resolved through the
//! shared armoire handle on every read, so newly released armoire
//! pieces show up without rebuilding the registry.

use parking_lot::{MappedRwLockReadGuard, RwLockReadGuard};

use crate::gear::item::{BackItem, GearTable};
use crate::gear::sets::armoire::SharedArmoire;

/// Gear-back category names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackCategory {
    Base,
    Mystery,
    Special,
    Armoire,
}

impl BackCategory {
    pub fn name(&self) -> &'static str {
        match self {
            BackCategory::Base => "base",
            BackCategory::Mystery => "mystery",
            BackCategory::Special => "special",
            BackCategory::Armoire => "armoire",
        }
    }

    /// Get all categories in display order
    pub fn all() -> &'static [BackCategory] {
        &[
            BackCategory::Base,
            BackCategory::Mystery,
            BackCategory::Special,
            BackCategory::Armoire,
        ]
    }
}

/// Read-only registry of back-slot gear by category.
///
/// Construct one at startup via [`BackRegistry::new`] (or
/// [`ContentManager::back_registry`](crate::data::ContentManager::back_registry))
/// and pass it by reference to consumers. The category set is fixed;
/// nothing is added, removed or renamed after construction.
#[derive(Debug, Clone)]
pub struct BackRegistry {
    base: GearTable,
    mystery: GearTable,
    special: GearTable,
    armoire: SharedArmoire,
}

impl BackRegistry {
    pub fn new(
        base: GearTable,
        mystery: GearTable,
        special: GearTable,
        armoire: SharedArmoire,
    ) -> Self {
        Self {
            base,
            mystery,
            special,
            armoire,
        }
    }

    /// The base gear-back table, unchanged since construction
    pub fn base(&self) -> &GearTable {
        &self.base
    }

    /// The mystery gear-back table, unchanged since construction
    pub fn mystery(&self) -> &GearTable {
        &self.mystery
    }

    /// The special gear-back table, unchanged since construction
    pub fn special(&self) -> &GearTable {
        &self.special
    }

    /// The armoire's current back table.
    ///
    /// Every call re-reads the shared armoire collection; nothing is
    /// cached, so writes to the armoire between calls are observed.
    /// The returned guard holds the armoire read lock until dropped.
    pub fn armoire(&self) -> MappedRwLockReadGuard<'_, GearTable> {
        RwLockReadGuard::map(self.armoire.read(), |set| &set.back)
    }

    /// Look up a single item by category and key
    pub fn item(&self, category: BackCategory, key: &str) -> Option<BackItem> {
        match category {
            BackCategory::Base => self.base.get(key).cloned(),
            BackCategory::Mystery => self.mystery.get(key).cloned(),
            BackCategory::Special => self.special.get(key).cloned(),
            BackCategory::Armoire => self.armoire().get(key).cloned(),
        }
    }

    /// Number of items in a category at the time of the call
    pub fn len(&self, category: BackCategory) -> usize {
        match category {
            BackCategory::Base => self.base.len(),
            BackCategory::Mystery => self.mystery.len(),
            BackCategory::Special => self.special.len(),
            BackCategory::Armoire => self.armoire().len(),
        }
    }
}
