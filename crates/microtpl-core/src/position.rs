//! Buffer positions.

use std::fmt;

/// A location in a text buffer.
///
/// Both fields are zero-indexed. `ch` counts characters (Unicode scalar values)
/// from the start of the line, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    pub const fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }

    /// The position `count` characters further along the same line.
    pub const fn advance(self, count: usize) -> Self {
        Self {
            line: self.line,
            ch: self.ch + count,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_line_major() {
        assert!(Position::new(0, 10) < Position::new(1, 0));
        assert!(Position::new(2, 3) < Position::new(2, 4));
    }

    #[test]
    fn test_advance_and_display() {
        let pos = Position::new(4, 2).advance(4);
        assert_eq!(pos, Position::new(4, 6));
        assert_eq!(pos.to_string(), "4:6");
    }
}
