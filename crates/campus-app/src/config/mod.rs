//! Configuration file parsing for UniCode Campus
//!
//! Reads `<config_dir>/unicode-campus/config.toml`. Command-line flags
//! override file values.

pub mod settings;
pub mod types;

pub use settings::{apply_overrides, default_config_path, load_settings, read_settings};
pub use types::*;
