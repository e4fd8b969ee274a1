//! Line-vector text buffer.

use super::EditorBuffer;
use crate::error::BufferError;
use crate::position::Position;

/// An in-memory document stored as a vector of lines plus a cursor.
///
/// Each line keeps the terminator it was read or inserted with (`"\n"`,
/// `"\r\n"`, or none for the last line), so `text()` reproduces the input
/// exactly and a document keeps its line endings across edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<Line>,
    cursor: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    text: String,
    ending: &'static str,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self {
            lines: vec![Line {
                text: String::new(),
                ending: "",
            }],
            cursor: Position::default(),
        }
    }
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a buffer from document text, with the cursor at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: split_lines(text)
                .map(|(text, ending)| Line {
                    text: text.to_string(),
                    ending,
                })
                .collect(),
            cursor: Position::default(),
        }
    }

    /// The full document, each line followed by its own terminator.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .flat_map(|line| [line.text.as_str(), line.ending])
            .collect()
    }

    /// Line content without its terminator.
    pub fn line(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(|l| l.text.as_str())
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Byte offset of `pos` within its line, or the reason it is out of range.
    fn byte_offset(&self, pos: Position) -> Result<usize, BufferError> {
        let line = self
            .line(pos.line)
            .ok_or(BufferError::LineOutOfRange {
                line: pos.line,
                line_count: self.lines.len(),
            })?;

        line.char_indices()
            .map(|(idx, _)| idx)
            .chain(std::iter::once(line.len()))
            .nth(pos.ch)
            .ok_or_else(|| BufferError::ColumnOutOfRange {
                position: pos,
                line_len: line.chars().count(),
            })
    }
}

impl EditorBuffer for TextBuffer {
    type Error = BufferError;

    fn get_cursor(&self) -> Position {
        self.cursor
    }

    fn set_cursor(&mut self, line: usize, ch: usize) {
        let line = line.min(self.lines.len().saturating_sub(1));
        let max_ch = self.line(line).map_or(0, |l| l.chars().count());
        self.cursor = Position::new(line, ch.min(max_ch));
    }

    fn replace_range(
        &mut self,
        text: &str,
        from: Position,
        to: Option<Position>,
    ) -> Result<(), BufferError> {
        let to = to.unwrap_or(from);
        if to < from {
            return Err(BufferError::InvertedRange { from, to });
        }
        let from_byte = self.byte_offset(from)?;
        let to_byte = self.byte_offset(to)?;

        let head = &self.lines[from.line].text[..from_byte];
        let tail = &self.lines[to.line].text[to_byte..];
        let tail_ending = self.lines[to.line].ending;

        let mut replacement: Vec<Line> = split_lines(text)
            .map(|(piece, ending)| Line {
                text: piece.to_string(),
                ending,
            })
            .collect();
        replacement[0].text.insert_str(0, head);

        // Cursor lands at the end of the inserted text, before the old tail.
        let last = replacement.len() - 1;
        let end_ch = replacement[last].text.chars().count();
        replacement[last].text.push_str(tail);
        replacement[last].ending = tail_ending;

        self.lines.splice(from.line..=to.line, replacement);
        self.cursor = Position::new(from.line + last, end_ch);

        tracing::trace!(%from, %to, inserted = text.len(), "Replaced buffer range");
        Ok(())
    }
}

/// Split into `(content, terminator)` pairs on `'\n'`, treating a preceding
/// `'\r'` as part of the terminator. Always yields at least one line; the last
/// has an empty terminator.
fn split_lines(text: &str) -> impl Iterator<Item = (&str, &'static str)> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.split_once('\n') {
            Some((line, remainder)) => {
                rest = Some(remainder);
                Some(match line.strip_suffix('\r') {
                    Some(line) => (line, "\r\n"),
                    None => (line, "\n"),
                })
            }
            None => {
                rest = None;
                Some((current, ""))
            }
        }
    })
}
