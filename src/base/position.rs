/// Position tracking for inline value anchors
///
/// Stores source locations (line/character) as reported by the host editor.
/// Lines and characters are 0-indexed for LSP/DAP compatibility; characters
/// count Unicode scalar values within the line.
/// A position in source code (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

/// A half-open range in source code (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl Span {
    /// Create a span, swapping the endpoints if they are given out of order.
    pub fn new(start: Position, end: Position) -> Self {
        if end < start {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    /// Create a span from line/character coordinates
    pub fn from_coords(
        start_line: u32,
        start_character: u32,
        end_line: u32,
        end_character: u32,
    ) -> Self {
        Self::new(
            Position::new(start_line, start_character),
            Position::new(end_line, end_character),
        )
    }

    /// Create a span covering `start..end` on a single line
    pub fn on_line(line: u32, start: u32, end: u32) -> Self {
        Self::from_coords(line, start, line, end)
    }

    /// Check if a line falls within this span
    pub fn contains_line(&self, line: u32) -> bool {
        self.start.line <= line && line <= self.end.line
    }
}
