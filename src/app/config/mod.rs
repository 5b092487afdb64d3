//! Data-directory-backed configuration loading.
//!
//! Schema and validation live in `domain::configuration`.

mod load_config;

pub use load_config::{CONFIG_FILE_NAME, load_config};
