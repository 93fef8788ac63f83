//! Byte-position cursor over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! A cursor is a borrowed slice plus a `u32` offset, so it is `Copy` and
//! a backtracking snapshot is just the offset. Primitives move it one
//! UTF-8 scalar at a time; [`bump_byte`](Cursor::bump_byte) exists for
//! callers that know they are looking at ASCII.
//!
//! EOF is `pos == source_len`. The byte there is the buffer's zero
//! padding, which is what [`byte`](Cursor::byte) reports at EOF; a NUL
//! before `source_len` is input like any other scalar.

use crate::{Backtrack, Scan};

/// Position in a [`SourceBuffer`](crate::SourceBuffer), moved by the
/// [`Scan`] primitives and rewound through [`Backtrack`].
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Text plus zero padding; `bytes[source_len]` always exists.
    bytes: &'a [u8],
    pos: u32,
    source_len: u32,
}

/// Offset captured by [`Backtrack::mark`] on a [`Cursor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CursorMark(u32);

impl CursorMark {
    /// Byte offset of the mark.
    #[inline]
    pub fn pos(self) -> u32 {
        self.0
    }
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(bytes: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            bytes.get(source_len as usize) == Some(&0),
            "buffer must carry a zero byte at source_len"
        );
        Self {
            bytes,
            pos: 0,
            source_len,
        }
    }

    /// Raw byte under the cursor; `0` at EOF.
    #[inline]
    pub fn byte(&self) -> u8 {
        self.bytes[self.pos as usize]
    }

    /// Step one byte. Stops at EOF.
    #[inline]
    pub fn bump_byte(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Whether every byte of the text has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Byte offset from the start of the text.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Text length in bytes.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Encoded length implied by a UTF-8 lead byte. Continuation and
    /// invalid bytes count as 1 so a cursor can always make progress.
    #[inline]
    pub fn scalar_width(lead: u8) -> u32 {
        match lead {
            0xF0..=0xF7 => 4,
            0xE0..=0xEF => 3,
            0xC0..=0xDF => 2,
            _ => 1,
        }
    }

    /// The scalar under the cursor.
    ///
    /// `None` at EOF, and also on a malformed sequence (which a `&str`
    /// source cannot produce).
    pub fn peek_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        let lead = self.byte();
        if lead.is_ascii() {
            return Some(char::from(lead));
        }
        let end = (self.pos + Self::scalar_width(lead)).min(self.source_len);
        self.slice(self.pos, end).chars().next()
    }

    /// Step over one scalar. Stops at EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        if !self.is_eof() {
            self.pos = (self.pos + Self::scalar_width(self.byte())).min(self.source_len);
        }
    }

    /// Text between two offsets.
    ///
    /// Returns `""` when `start..end` is reversed, runs past the text, or
    /// splits a scalar. Offsets taken from this cursor's own positions and
    /// marks, in order, are always valid.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        if end > self.source_len {
            return "";
        }
        self.bytes
            .get(start as usize..end as usize)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .unwrap_or_default()
    }

    /// Text from `start` up to the cursor; `""` if the cursor is before
    /// `start` (see [`slice`](Self::slice)).
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Text consumed since `mark`.
    ///
    /// `""` if the cursor has been rewound to before `mark`.
    pub fn since(&self, mark: CursorMark) -> &'a str {
        self.slice_from(mark.0)
    }

    /// Text not yet consumed.
    pub fn rest(&self) -> &'a str {
        self.slice(self.pos, self.source_len)
    }
}

impl Backtrack for Cursor<'_> {
    type Marker = CursorMark;

    #[inline]
    fn mark(&self) -> CursorMark {
        CursorMark(self.pos)
    }

    #[inline]
    fn reset_to(&mut self, mark: CursorMark) {
        debug_assert!(mark.0 <= self.source_len, "mark {} is past EOF", mark.0);
        self.pos = mark.0.min(self.source_len);
    }
}

impl Scan for Cursor<'_> {
    #[inline]
    fn peek(&self) -> Option<char> {
        self.peek_char()
    }

    /// EOF by position, so a cursor left mid-scalar by
    /// [`bump_byte`](Cursor::bump_byte) is not at EOF.
    #[inline]
    fn match_eof(&mut self) -> bool {
        self.is_eof()
    }

    #[allow(clippy::cast_possible_truncation, reason = "len_utf8() is at most 4")]
    #[inline]
    fn bump(&mut self, c: char) {
        debug_assert_eq!(self.peek_char(), Some(c), "bump must follow peek");
        self.pos = (self.pos + c.len_utf8() as u32).min(self.source_len);
    }
}

#[cfg(test)]
mod tests;
