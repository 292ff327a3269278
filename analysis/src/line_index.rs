//! Offset ↔ line/character translation.
//!
//! Offsets and characters are UTF-16 code units, the unit both the editor and
//! the engine index document text by.

use tsassist_types::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// UTF-16 offset of the start of each line.
    line_starts: Vec<u32>,
    /// UTF-16 offset of the end of each line's content, before `\n` or `\r\n`.
    line_ends: Vec<u32>,
    /// UTF-16 length of the whole text.
    len: u32,
}

impl LineIndex {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut line_ends = Vec::new();
        let mut offset: u32 = 0;
        let mut prev = None;
        for ch in text.chars() {
            if ch == '\n' {
                line_ends.push(if prev == Some('\r') { offset - 1 } else { offset });
                line_starts.push(offset + 1);
            }
            offset += ch.len_utf16() as u32;
            prev = Some(ch);
        }
        line_ends.push(offset);
        Self {
            line_starts,
            line_ends,
            len: offset,
        }
    }

    /// Number of lines (always at least one).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Total length in UTF-16 code units.
    #[must_use]
    pub fn len(&self) -> u32 {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of a position. A character past the line end clamps to the end
    /// of that line; a line past the last line returns `None`.
    #[must_use]
    pub fn offset(&self, pos: Position) -> Option<u32> {
        let line = pos.line as usize;
        let start = *self.line_starts.get(line)?;
        let end = self.line_ends[line];
        Some(start.saturating_add(pos.character).min(end))
    }

    /// Position of an offset, clamped to the end of the text.
    #[must_use]
    pub fn position(&self, offset: u32) -> Position {
        let offset = offset.min(self.len);
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        Position::new(line as u32, offset - self.line_starts[line])
    }
}

/// Byte index in `text` of a UTF-16 offset, clamped to the end of the text.
///
/// An offset falling inside a surrogate pair resolves to the start of that
/// character.
#[must_use]
pub fn utf16_to_byte(text: &str, offset: u32) -> usize {
    let mut units: u32 = 0;
    for (byte, ch) in text.char_indices() {
        let next = units + ch.len_utf16() as u32;
        if next > offset {
            return byte;
        }
        units = next;
    }
    text.len()
}

/// UTF-16 length of `text`.
#[must_use]
pub fn utf16_len(text: &str) -> u32 {
    text.chars().map(|ch| ch.len_utf16() as u32).sum()
}
