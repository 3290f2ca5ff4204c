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

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

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

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Catalog Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid catalog: {message}")]
    CatalogInvalid { message: String },

    #[error("Unknown {kind} reference '{id}' in {owner}")]
    UnknownReference {
        kind: &'static str,
        id: String,
        owner: String,
    },
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

    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    pub fn catalog_invalid(message: impl Into<String>) -> Self {
        Self::CatalogInvalid {
            message: message.into(),
        }
    }

    pub fn unknown_reference(
        kind: &'static str,
        id: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self::UnknownReference {
            kind,
            id: id.into(),
            owner: owner.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Config { .. } | Error::Terminal { .. })
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::ConfigNotFound { .. }
                | Error::CatalogInvalid { .. }
                | Error::UnknownReference { .. }
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
        let err = Error::config("bad icons value");
        assert_eq!(err.to_string(), "Configuration error: bad icons value");

        let err = Error::catalog_invalid("no projects");
        assert!(err.to_string().contains("no projects"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_unknown_reference_message() {
        let err = Error::unknown_reference("app", "app_missing", "project prj_001");
        let msg = err.to_string();
        assert!(msg.contains("app_missing"));
        assert!(msg.contains("project prj_001"));
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::unknown_reference("app", "app_x", "project p1").is_fatal());
        assert!(Error::config_not_found("/tmp/missing.toml").is_fatal());
        assert!(Error::catalog_invalid("empty").is_fatal());
        assert!(!Error::config("test").is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::config("test").is_recoverable());
        assert!(Error::terminal("resize").is_recoverable());
        assert!(!Error::catalog_invalid("empty").is_recoverable());
    }

    #[test]
    fn test_result_ext_preserves_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("reading catalog").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
