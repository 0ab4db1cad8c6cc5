//! Configuration types for UniCode Campus
//!
//! Defines `Settings` (the `config.toml` root) and its sections.

use std::time::Duration;

use campus_core::exercise::{clamp_run_delay_ms, DEFAULT_RUN_DELAY_MS};
use campus_core::{Page, Role};
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub session: SessionSettings,

    #[serde(default)]
    pub exercise: ExerciseSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the session starts
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionSettings {
    /// Initial role
    #[serde(default)]
    pub role: Role,

    /// Initial page
    #[serde(default)]
    pub page: Page,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExerciseSettings {
    /// Simulated code run delay in milliseconds
    #[serde(default = "default_run_delay_ms")]
    pub run_delay_ms: u64,
}

impl Default for ExerciseSettings {
    fn default() -> Self {
        Self {
            run_delay_ms: default_run_delay_ms(),
        }
    }
}

impl ExerciseSettings {
    /// Run delay with the minimum applied
    pub fn run_delay(&self) -> Duration {
        Duration::from_millis(clamp_run_delay_ms(self.run_delay_ms))
    }
}

fn default_run_delay_ms() -> u64 {
    DEFAULT_RUN_DELAY_MS
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Render the per-page action hint line
    #[serde(default = "default_true")]
    pub show_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_hints: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}
