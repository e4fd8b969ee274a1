//! Core of micro-templates: render a template from a folder of notes and drop it
//! at the cursor of a document, moving the cursor to a `$cur` marker.
//!
//! This crate is consumed by `microtpl-ctl` (CLI). It has no terminal or process
//! concerns of its own.
//!
//! # Modules
//!
//! - [`marker`] — Cursor-marker insertion (insert text, find `$cur`, move cursor, strip marker)
//! - [`buffer`] — The editor buffer interface and an in-memory line buffer
//! - [`position`] — Line/character positions in a buffer
//! - [`vault`] — File and folder enumeration under a notes root
//! - [`picker`] — Generic fuzzy suggestion prompt for folders and templates
//! - [`template_engine`] — Tera-based rendering with a date helper and case filters
//! - [`settings`] — Persisted tool settings (`templates-dir`, marker column policy)
//! - [`error`] — Error types for each of the above

pub mod buffer;
pub mod error;
pub mod marker;
pub mod picker;
pub mod position;
pub mod settings;
pub mod template_engine;
pub mod vault;

pub use buffer::{EditorBuffer, TextBuffer};
pub use marker::{CursorMarkerInserter, InsertOutcome, MarkerColumn, CURSOR_MARKER};
pub use position::Position;
