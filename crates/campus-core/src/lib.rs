//! # campus-core - Core Domain Types
//!
//! Foundation crate for UniCode Campus. Provides the closed page and role
//! sets, the static navigation tables, every mock domain record shown by the
//! pages, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Page`] - One of the ten full-screen views
//! - [`Role`] - Viewer persona (Student, Lecturer, Admin)
//!
//! ### Navigation (`navigation`)
//! - [`role_chrome()`] - Nav items, call-to-action and badge per role
//! - [`page_links()`] - Designated navigation actions per page
//!
//! ### Page Data
//! - `catalog` - Course list and [`CatalogFilter`]
//! - `quiz` - Questions and the [`QuizState`] machine
//! - `exercise`, `lesson`, `course`, `dashboard`, `account`, `home` - Literals
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use campus_core::prelude::*;
//! ```

pub mod account;
pub mod catalog;
pub mod course;
pub mod dashboard;
pub mod error;
pub mod exercise;
pub mod home;
pub mod lesson;
pub mod logging;
pub mod navigation;
pub mod quiz;
pub mod tabs;
pub mod types;

/// Prelude for common imports used throughout all campus crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use account::{PaymentMethod, ProfileTab};
pub use catalog::{CatalogFilter, Course, Language, Level, COURSES};
pub use course::CourseTab;
pub use dashboard::{AdminTab, LecturerTab};
pub use error::{Error, Result, ResultExt};
pub use exercise::OutputTab;
pub use lesson::LessonTab;
pub use navigation::{
    page_links, role_chrome, NavItem, PageLink, RoleChrome, FOOTER_LINKS, HOME_LINK,
    PROFILE_LINK,
};
pub use quiz::{Question, QuizPhase, QuizState, QUESTIONS};
pub use tabs::TabSet;
pub use types::{Page, Role};
