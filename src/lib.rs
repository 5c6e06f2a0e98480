//! Gear Catalog - data-driven cosmetic gear content for an RPG
//!
//! Composes the per-category gear tables (base, mystery, special,
//! armoire) into read-only registries that the wider game imports.

pub mod data;
pub mod error;
pub mod gear;

// Re-export commonly used types
pub use data::ContentManager;
pub use error::ContentError;
pub use gear::{BackCategory, BackItem, BackRegistry, GearStats, GearTable};
