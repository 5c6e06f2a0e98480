//! Gear content types and registries

pub mod back;
pub mod item;
pub mod sets;

pub use back::{BackCategory, BackRegistry};
pub use item::{BackItem, GearStats, GearTable};
pub use sets::armoire::{ArmoireSet, SharedArmoire};
