//! campus-app - Application state and orchestration for UniCode Campus
//!
//! This crate implements the TEA (The Elm Architecture) pattern: a single
//! [`AppState`] owns the current page and role, [`Message`]s describe every
//! event, and [`handler::update`] is the only place state changes. Timed work
//! (the simulated code run) is returned as an [`UpdateAction`] and executed by
//! [`process::process_message`].

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
#[cfg(feature = "dev-overlays")]
pub mod overlays;
pub mod pages;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use actions::CodeRunSlot;
pub use config::Settings;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use pages::PageView;
pub use process::process_message;
pub use signals::spawn_signal_handler;
pub use state::{AppPhase, AppState, UiMode};
