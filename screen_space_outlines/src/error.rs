//! Error types for the screen-space outline passes
//!
//! Unset or unconfigured dependencies (missing materials, empty targets)
//! are never errors: the passes degrade to no-ops. Errors only come from
//! the host pipeline, from configuration parsing, or from misuse of the
//! material library.

use std::fmt;

/// Result type for outline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Outline errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Error reported by the host pipeline backend
    BackendError(String),

    /// Misuse of a plugin-owned resource (duplicate material name)
    InvalidResource(String),

    /// Configuration could not be parsed
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidConfig(err.to_string())
    }
}

// ===== ERROR MACROS =====

/// Log an error and build an `Error::BackendError` from the same message
///
/// # Example
///
/// ```no_run
/// use screen_space_outlines::outline_err;
///
/// let err = outline_err!("outlines::Recorder", "Target '{}' not allocated", "_TemporaryBuffer");
/// ```
#[macro_export]
macro_rules! outline_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::outline_error!($source, "{}", message);
        $crate::Error::BackendError(message)
    }};
}

/// Log an error and return it from the enclosing function
///
/// # Example
///
/// ```no_run
/// use screen_space_outlines::{outline_bail, Result};
///
/// fn check(allocated: bool) -> Result<()> {
///     if !allocated {
///         outline_bail!("outlines::Recorder", "Target not allocated");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! outline_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::outline_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
