//! Default gear-set tables, one module per provider
//!
//! These are the hardcoded fallbacks used when no external data files
//! are present. Each provider owns its own table; the registries in
//! `gear::back` only compose them.

pub mod armoire;
pub mod base;
pub mod mystery;
pub mod special;
