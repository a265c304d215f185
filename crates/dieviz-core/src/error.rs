//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
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

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    #[error("Failed to restore terminal: {0}")]
    TerminalRestore(String),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // CLI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown architecture: {name} (expected 'hopper' or 'blackwell')")]
    UnknownArchitecture { name: String },

    #[error("Unknown view: {name} (expected 'full-die', 'processing-block', 'single-sm', or 'specs')")]
    UnknownView { name: String },
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

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn unknown_architecture(name: impl Into<String>) -> Self {
        Self::UnknownArchitecture { name: name.into() }
    }

    pub fn unknown_view(name: impl Into<String>) -> Self {
        Self::UnknownView { name: name.into() }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Config { .. } | Error::ConfigNotFound { .. } | Error::ConfigInvalid { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::TerminalInit(_)
                | Error::UnknownArchitecture { .. }
                | Error::UnknownView { .. }
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

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::config("missing [ui] section");
        assert_eq!(err.to_string(), "Configuration error: missing [ui] section");

        let err = Error::unknown_architecture("volta");
        assert!(err.to_string().contains("volta"));
        assert!(err.to_string().contains("hopper"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::TerminalInit("no tty".to_string()).is_fatal());
        assert!(Error::unknown_architecture("volta").is_fatal());
        assert!(!Error::config("test").is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::config("test").is_recoverable());
        assert!(Error::config_invalid("bad toml").is_recoverable());
        assert!(Error::ConfigNotFound {
            path: PathBuf::from("/test")
        }
        .is_recoverable());
        assert!(!Error::TerminalInit("no tty".to_string()).is_recoverable());
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::terminal("test");
        let _ = Error::config("test");
        let _ = Error::config_invalid("test");
        let _ = Error::unknown_view("die");
    }
}
