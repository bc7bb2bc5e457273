//! Kernel error types.

use thiserror::Error;

/// Kernel errors.
///
/// An empty query result is never an error; it is reported through
/// [`crate::gather::GatherResult::is_empty`].
#[derive(Debug, Error)]
pub enum KernelError {
    #[error("failed to decode {name} content")]
    Content {
        name: &'static str,
        #[source]
        source: serde_yml::Error,
    },

    #[error("batch fetch failed: {0}")]
    Fetch(String),
}

/// Result type alias using KernelError.
pub type AppResult<T> = Result<T, KernelError>;
