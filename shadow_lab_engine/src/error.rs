//! Error types for the Shadow Lab engine
//!
//! This module defines the error type shared by the graphics device layer,
//! the shadow techniques and the frame compositor.

use std::fmt;

/// Result type for Shadow Lab engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Shadow Lab engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (program compilation, binding, draw submission)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (mesh, texture, buffer, program, etc.)
    InvalidResource(String),

    /// Initialization failed (technique, compositor, device)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR message and build an `Error::BackendError` from it
///
/// # Example
///
/// ```no_run
/// # use shadow_lab_engine::engine_err;
/// let err = engine_err!("shadowlab::Device", "Program '{}' failed to link", "shadow_map");
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::shadowlab::Error::BackendError(message)
    }};
}

/// Log an ERROR message and return early with an `Error::BackendError`
///
/// # Example
///
/// ```no_run
/// # use shadow_lab_engine::engine_bail;
/// # fn check(count: usize) -> shadow_lab_engine::shadowlab::Result<()> {
/// if count == 0 {
///     engine_bail!("shadowlab::Mesh", "Mesh has no vertices");
/// }
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
