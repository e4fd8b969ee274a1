//! Editor buffer interface.
//!
//! [`EditorBuffer`] is the only surface the marker inserter touches: read and
//! move the cursor, replace a range. Hosts that own a real document implement
//! it over their own storage; [`TextBuffer`] is the in-memory version used by
//! the CLI and tests.

mod text;

pub use text::TextBuffer;

use crate::position::Position;

/// Cursor and range primitives exposed by a document editor.
pub trait EditorBuffer {
    /// Error the host reports when it rejects a position or range.
    type Error: std::error::Error;

    fn get_cursor(&self) -> Position;

    /// Move the cursor. Hosts may clamp out-of-range values.
    fn set_cursor(&mut self, line: usize, ch: usize);

    /// Replace the text between `from` and `to` with `text`.
    ///
    /// With `to = None` this is a plain insertion at `from`.
    fn replace_range(
        &mut self,
        text: &str,
        from: Position,
        to: Option<Position>,
    ) -> Result<(), Self::Error>;
}
