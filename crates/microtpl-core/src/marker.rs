//! Cursor-marker insertion.
//!
//! Rendered template text is inserted verbatim at the cursor. If any line of it
//! contains the `$cur` marker, the cursor is moved to the first occurrence and
//! the four marker characters are deleted, so the user continues typing where
//! the template author put the marker.
//!
//! # Marker column on the first line
//!
//! The marker column is measured from the start of the line it sits on. For
//! every line but the first that is also its column in the document. On the
//! first inserted line the text actually starts at the original cursor column,
//! so a template inserted mid-line puts the cursor `cursor.ch` characters too
//! far left. [`MarkerColumn::LineRelative`] keeps that behaviour (and logs a
//! warning when it applies); [`MarkerColumn::CursorAdjusted`] adds the offset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::buffer::EditorBuffer;
use crate::position::Position;

/// Literal token marking where the cursor should land.
pub const CURSOR_MARKER: &str = "$cur";

/// Line separator used to split rendered text when locating the marker.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

const MARKER_LEN: usize = CURSOR_MARKER.len();

/// How the marker column is computed when the marker is on the first inserted line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerColumn {
    /// Column within the marker's own line, never offset by the insertion column.
    #[default]
    LineRelative,
    /// First-line markers are offset by the column insertion started at.
    CursorAdjusted,
}

impl fmt::Display for MarkerColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LineRelative => "line-relative",
            Self::CursorAdjusted => "cursor-adjusted",
        })
    }
}

impl FromStr for MarkerColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line-relative" => Ok(Self::LineRelative),
            "cursor-adjusted" => Ok(Self::CursorAdjusted),
            other => Err(format!(
                "unknown marker column policy '{other}' (expected line-relative or cursor-adjusted)"
            )),
        }
    }
}

/// What [`CursorMarkerInserter::insert`] did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    /// Where the marker was found and removed, if the text had one.
    pub marker: Option<Position>,
    /// Buffer cursor after the operation.
    pub cursor: Position,
}

/// Inserts rendered text and resolves the `$cur` marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorMarkerInserter {
    column: MarkerColumn,
}

impl CursorMarkerInserter {
    pub fn new(column: MarkerColumn) -> Self {
        Self { column }
    }

    pub fn column(&self) -> MarkerColumn {
        self.column
    }

    /// Insert `rendered` at `cursor` and move the cursor to the first `$cur`,
    /// removing it.
    ///
    /// `cursor` must be captured before any mutation. Without a marker the cursor
    /// is left wherever the buffer put it after the insertion. Buffer errors are
    /// returned unchanged.
    pub fn insert<B>(
        &self,
        buffer: &mut B,
        cursor: Position,
        rendered: &str,
    ) -> Result<InsertOutcome, B::Error>
    where
        B: EditorBuffer + ?Sized,
    {
        let marker = self.locate(cursor, rendered);

        buffer.replace_range(rendered, cursor, None)?;

        let Some(marker) = marker else {
            return Ok(InsertOutcome {
                marker: None,
                cursor: buffer.get_cursor(),
            });
        };

        buffer.set_cursor(marker.line, marker.ch);
        let at = buffer.get_cursor();
        buffer.replace_range("", at, Some(at.advance(MARKER_LEN)))?;
        buffer.set_cursor(at.line, at.ch);

        tracing::debug!(marker = %at, "Moved cursor to template marker");

        Ok(InsertOutcome {
            marker: Some(at),
            cursor: buffer.get_cursor(),
        })
    }

    /// Document position of the first marker in `rendered` once it is inserted
    /// at `cursor`, under this inserter's column policy.
    pub fn locate(&self, cursor: Position, rendered: &str) -> Option<Position> {
        let (line_idx, col) = rendered
            .split(LINE_SEPARATOR)
            .enumerate()
            .find_map(|(idx, line)| {
                line.find(CURSOR_MARKER)
                    .map(|byte| (idx, line[..byte].chars().count()))
            })?;

        let ch = match (self.column, line_idx) {
            (MarkerColumn::CursorAdjusted, 0) => cursor.ch + col,
            (MarkerColumn::LineRelative, 0) if cursor.ch > 0 => {
                tracing::warn!(
                    %cursor,
                    marker_col = col,
                    "Marker is on the first inserted line; column is not offset by the insertion column (use cursor-adjusted to offset it)"
                );
                col
            }
            _ => col,
        };

        Some(Position::new(cursor.line + line_idx, ch))
    }
}

/// [`CursorMarkerInserter::insert`] with the default column policy.
pub fn insert<B>(buffer: &mut B, cursor: Position, rendered: &str) -> Result<InsertOutcome, B::Error>
where
    B: EditorBuffer + ?Sized,
{
    CursorMarkerInserter::default().insert(buffer, cursor, rendered)
}
