//! # CLI Error Types

use microtpl_core::error::{BufferError, RenderError, SettingsError, VaultError};
use thiserror::Error;

/// CLI operation result type
pub(crate) type CtlResult<T> = Result<T, CtlError>;

#[derive(Debug, Error)]
pub(crate) enum CtlError {
    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("cannot insert at that position: {0}")]
    Buffer(#[from] BufferError),

    #[error("failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: String,
        source: std::io::Error,
    },
}

impl CtlError {
    pub(crate) fn io(action: &'static str, path: impl std::fmt::Display, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.to_string(),
            source,
        }
    }
}
