//! Catalog loading and external gear content
//!
//! This module handles loading gear tables from external RON or JSON
//! files, allowing for data-driven content and easy editing.

pub mod loader;

pub use loader::{export_default_data, ContentManager};
