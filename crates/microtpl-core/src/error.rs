//! # Error Types
//!
//! One error enum per concern. The marker inserter has none of its own: it
//! returns whatever its buffer reports.

use std::path::PathBuf;

use thiserror::Error;

use crate::position::Position;

/// Range errors from [`TextBuffer`](crate::buffer::TextBuffer).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("line {line} is out of range (buffer has {line_count} lines)")]
    LineOutOfRange { line: usize, line_count: usize },

    #[error("column {} is out of range for line {} ({line_len} characters)", .position.ch, .position.line)]
    ColumnOutOfRange { position: Position, line_len: usize },

    #[error("range end {to} is before start {from}")]
    InvertedRange { from: Position, to: Position },
}

/// Errors from enumerating or reading vault files.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("vault root {0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("template '{name}' not found in '{dir}'")]
    TemplateNotFound { name: String, dir: String },
}

/// Errors from template rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to parse template '{template}': {source}")]
    Parse {
        template: String,
        source: tera::Error,
    },

    #[error("render error for '{template}': {source}")]
    Render {
        template: String,
        source: tera::Error,
    },
}

/// Errors from loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
