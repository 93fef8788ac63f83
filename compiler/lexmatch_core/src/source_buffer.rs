//! Owned input for a [`Cursor`].
//!
//! Matching reads one byte past the last scalar all the time (every
//! failed `match_*` at the end of input does). Rather than bounds-check
//! each of those reads, the text is copied into a zero-filled buffer with
//! at least one trailing `0x00`, and the cursor treats that byte at
//! `source_len` as EOF. Interior NULs are still ordinary content because
//! EOF is decided by position, not by the byte value.

use crate::Cursor;

/// Buffers grow in whole blocks of this many bytes.
const BLOCK: usize = 64;

/// Matchable text followed by zero padding.
///
/// ```text
/// | text (len bytes) | 0x00 | 0x00 ... up to a multiple of 64 |
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
    len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a padded buffer.
    ///
    /// Positions are `u32`; text beyond `u32::MAX` bytes is dropped at the
    /// last scalar boundary that still fits.
    pub fn new(source: &str) -> Self {
        let text = clamp_len(source).as_bytes();
        let mut bytes = vec![0u8; (text.len() + 1).next_multiple_of(BLOCK)];
        bytes[..text.len()].copy_from_slice(text);
        let len = u32::try_from(text.len()).unwrap_or(u32::MAX);
        Self { bytes, len }
    }

    /// The text, without padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Text length in bytes.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Whether there is no text at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// A cursor at offset 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.bytes, self.len)
    }
}

fn clamp_len(source: &str) -> &str {
    let mut end = source.len().min(u32::MAX as usize);
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    &source[..end]
}
