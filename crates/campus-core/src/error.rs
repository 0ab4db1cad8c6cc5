//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
///
/// The UI itself has no failure states; these cover the ambient plumbing
/// around it (terminal, config files, CLI values, the message channel).
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown page '{value}' (expected one of: {expected})")]
    UnknownPage { value: String, expected: String },

    #[error("Unknown role '{value}' (expected one of: student, lecturer, admin)")]
    UnknownRole { value: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }

    pub fn unknown_page(value: impl Into<String>) -> Self {
        let expected = crate::types::Page::ALL
            .iter()
            .map(|p| p.id())
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnknownPage {
            value: value.into(),
            expected,
        }
    }

    pub fn unknown_role(value: impl Into<String>) -> Self {
        Self::UnknownRole {
            value: value.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Terminal { .. } | Error::UnknownPage { .. } | Error::UnknownRole { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::config("bad value");
        assert_eq!(err.to_string(), "Configuration error: bad value");

        let err = Error::unknown_role("guest");
        assert!(err.to_string().contains("guest"));
        assert!(err.to_string().contains("lecturer"));
    }

    #[test]
    fn test_unknown_page_lists_every_page_id() {
        let err = Error::unknown_page("checkout");
        let text = err.to_string();
        assert!(text.contains("checkout"));
        assert!(text.contains("course-detail"));
        assert!(text.contains("code-editor"));
        assert!(text.contains("security"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_config_parse_error_keeps_path() {
        let source = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        let err = Error::config_parse("/tmp/config.toml", source);
        assert!(err.to_string().contains("/tmp/config.toml"));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::terminal("no tty").is_fatal());
        assert!(Error::unknown_page("nope").is_fatal());
        assert!(!Error::config("test").is_fatal());
    }

    #[test]
    fn test_context_passes_error_through() {
        let io: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"));
        let err = io.context("Failed to draw frame").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!Error::channel_send("closed").is_fatal());
    }
}
