//! Feature modules - Alternative ways to build tables
//!
//! - Construction from an ordered key → column mapping
//! - Loading tables from JSON, YAML, TOML and CSV (feature `data-loading`)

pub mod mapping;

#[cfg(feature = "data-loading")]
pub mod loading;

#[cfg(feature = "data-loading")]
pub use loading::{load_csv, load_json, load_toml, load_yaml, DataFormat};
