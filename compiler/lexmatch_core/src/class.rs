//! Character classes: what a primitive is allowed to consume.
//!
//! A [`CharClass`] is a membership test over Unicode scalars. The cursor
//! never inspects a class beyond calling [`CharClass::contains`], so any
//! set representation works:
//!
//! - [`ByteSet`]: 256-bit bitmap, only ever contains scalars below 256.
//! - [`RuneSet`]: sorted list of arbitrary scalars.
//! - [`RuneRange`]: inclusive scalar range.
//! - `char`, `[char]`, `[char; N]` and `str`: literal members.
//! - [`Predicate`]: any `Fn(char) -> bool`.

use std::ops::RangeInclusive;

/// Membership test used by every [`Scan`](crate::Scan) primitive.
pub trait CharClass {
    /// Returns `true` if `c` belongs to this class.
    fn contains(&self, c: char) -> bool;
}

impl<T: CharClass + ?Sized> CharClass for &T {
    #[inline]
    fn contains(&self, c: char) -> bool {
        (**self).contains(c)
    }
}

impl CharClass for char {
    #[inline]
    fn contains(&self, c: char) -> bool {
        *self == c
    }
}

impl CharClass for [char] {
    #[inline]
    fn contains(&self, c: char) -> bool {
        self.iter().any(|&m| m == c)
    }
}

impl<const N: usize> CharClass for [char; N] {
    #[inline]
    fn contains(&self, c: char) -> bool {
        self.iter().any(|&m| m == c)
    }
}

impl CharClass for str {
    #[inline]
    fn contains(&self, c: char) -> bool {
        self.chars().any(|m| m == c)
    }
}

/// Error from [`ByteSet::from_ranges`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ByteRangeError {
    /// A range whose start is above its end, e.g. `9-0`.
    #[error("byte range {start:?}-{end:?} is reversed")]
    Reversed { start: char, end: char },
    /// A character that does not fit in a byte.
    #[error("{0:?} does not fit in a byte set")]
    NotAByte(char),
}

/// Set of byte values, stored as a 256-bit bitmap.
///
/// Matches a scalar iff its code point is below 256 and the corresponding
/// bit is set. Construction is `const`, so sets are usually statics:
///
/// ```text
/// const DIGITS: ByteSet = ByteSet::from_range(b'0', b'9');
/// const HEX: ByteSet = DIGITS.with_range(b'a', b'f').with_range(b'A', b'F');
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ByteSet {
    bits: [u64; 4],
}

impl ByteSet {
    /// The empty set.
    pub const EMPTY: ByteSet = ByteSet { bits: [0; 4] };

    /// Create an empty set.
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Set containing exactly the given bytes.
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        let mut set = Self::EMPTY;
        let mut i = 0;
        while i < bytes.len() {
            set = set.with(bytes[i]);
            i += 1;
        }
        set
    }

    /// Set containing the inclusive range `lo..=hi` (empty if `lo > hi`).
    pub const fn from_range(lo: u8, hi: u8) -> Self {
        Self::EMPTY.with_range(lo, hi)
    }

    /// Parse range notation such as `"0-9a-fA-F"` or `"+-"`.
    ///
    /// A `-` between two characters forms an inclusive range; a `-` at the
    /// start or end of the string is a literal.
    pub fn from_ranges(notation: &str) -> Result<Self, ByteRangeError> {
        let chars: Vec<char> = notation.chars().collect();
        let mut set = Self::EMPTY;
        let mut i = 0;
        while i < chars.len() {
            let start = chars[i];
            if i + 2 < chars.len() && chars[i + 1] == '-' {
                let end = chars[i + 2];
                let (lo, hi) = (to_byte(start)?, to_byte(end)?);
                if lo > hi {
                    return Err(ByteRangeError::Reversed { start, end });
                }
                set = set.with_range(lo, hi);
                i += 3;
            } else {
                set = set.with(to_byte(start)?);
                i += 1;
            }
        }
        Ok(set)
    }

    /// Copy of this set with `byte` added.
    #[must_use]
    pub const fn with(mut self, byte: u8) -> Self {
        self.bits[(byte >> 6) as usize] |= 1u64 << (byte & 63);
        self
    }

    /// Copy of this set with the inclusive range `lo..=hi` added.
    #[must_use]
    pub const fn with_range(mut self, lo: u8, hi: u8) -> Self {
        if lo > hi {
            return self;
        }
        let mut b = lo;
        loop {
            self = self.with(b);
            if b == hi {
                break;
            }
            b += 1;
        }
        self
    }

    /// Union of two sets.
    #[must_use]
    pub const fn union(mut self, other: ByteSet) -> Self {
        let mut i = 0;
        while i < 4 {
            self.bits[i] |= other.bits[i];
            i += 1;
        }
        self
    }

    /// Returns `true` if `byte` is in the set.
    #[inline]
    pub const fn contains_byte(&self, byte: u8) -> bool {
        self.bits[(byte >> 6) as usize] & (1u64 << (byte & 63)) != 0
    }

    /// Number of bytes in the set.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.bits == [0; 4]
    }
}

fn to_byte(c: char) -> Result<u8, ByteRangeError> {
    u8::try_from(u32::from(c)).map_err(|_| ByteRangeError::NotAByte(c))
}

impl CharClass for ByteSet {
    #[inline]
    fn contains(&self, c: char) -> bool {
        u8::try_from(u32::from(c)).is_ok_and(|b| self.contains_byte(b))
    }
}

impl std::fmt::Debug for ByteSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries((0..=255u8).filter(|&b| self.contains_byte(b)).map(char::from))
            .finish()
    }
}

/// Sorted set of arbitrary scalars.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RuneSet {
    runes: Vec<char>,
}

impl RuneSet {
    /// Build a set from any scalars; duplicates are removed.
    pub fn new(runes: impl IntoIterator<Item = char>) -> Self {
        let mut runes: Vec<char> = runes.into_iter().collect();
        runes.sort_unstable();
        runes.dedup();
        Self { runes }
    }

    /// Number of distinct scalars.
    pub fn len(&self) -> usize {
        self.runes.len()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }
}

impl FromIterator<char> for RuneSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl CharClass for RuneSet {
    #[inline]
    fn contains(&self, c: char) -> bool {
        self.runes.binary_search(&c).is_ok()
    }
}

/// Inclusive range of scalars, e.g. `RuneRange::new('α', 'ω')`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RuneRange(RangeInclusive<char>);

impl RuneRange {
    /// The scalars `lo..=hi`.
    pub const fn new(lo: char, hi: char) -> Self {
        Self(lo..=hi)
    }
}

impl From<RangeInclusive<char>> for RuneRange {
    fn from(range: RangeInclusive<char>) -> Self {
        Self(range)
    }
}

impl CharClass for RuneRange {
    #[inline]
    fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }
}

/// Custom membership test wrapping a closure.
///
/// ```text
/// cursor.match_one_or_more(&Predicate(char::is_alphabetic));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Predicate<F>(pub F);

impl<F: Fn(char) -> bool> CharClass for Predicate<F> {
    #[inline]
    fn contains(&self, c: char) -> bool {
        (self.0)(c)
    }
}
