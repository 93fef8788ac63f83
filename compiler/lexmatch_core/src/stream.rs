//! The stream contract consumed by the expression engine.
//!
//! [`Backtrack`] is the only thing the engine needs to undo partial
//! consumption. [`Scan`] is the primitive family an engine can fold into
//! expressions; every primitive is built on two required methods
//! ([`Scan::peek`] and [`Scan::bump`]) so a new stream type only has to
//! say how to look at and step over one scalar.
//!
//! # Primitive Contract
//!
//! Each primitive returns whether it matched and advances the stream only
//! when it does. The `zero_or_*` shapes always match (possibly consuming
//! nothing). `non_match_*` shapes accept any scalar *not* in the class,
//! but never EOF.

use crate::CharClass;

/// Capture and restore stream positions.
///
/// `reset_to` must accept any marker previously produced by `mark` on the
/// same stream, and restoring the same marker twice is the same as
/// restoring it once.
pub trait Backtrack {
    /// Opaque position snapshot.
    type Marker: Copy + Eq + std::fmt::Debug;

    /// Snapshot the current position. Never changes the stream.
    fn mark(&self) -> Self::Marker;

    /// Rewind (or advance) to a previously captured position.
    fn reset_to(&mut self, mark: Self::Marker);
}

/// Consume-if-matches primitives over a stream of Unicode scalars.
pub trait Scan: Backtrack {
    /// The next scalar, or `None` at EOF.
    fn peek(&self) -> Option<char>;

    /// Step over `c`, which must be the scalar returned by [`peek`](Self::peek).
    fn bump(&mut self, c: char);

    /// Matches only at EOF. Consumes nothing.
    fn match_eof(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Consume one scalar in `class`.
    fn match_one<K: CharClass + ?Sized>(&mut self, class: &K) -> bool {
        eat_one(self, |c| class.contains(c))
    }

    /// Consume one scalar in `class` if present. Always matches.
    fn match_zero_or_one<K: CharClass + ?Sized>(&mut self, class: &K) -> bool {
        eat_one(self, |c| class.contains(c));
        true
    }

    /// Consume the longest run of scalars in `class`. Always matches.
    fn match_zero_or_more<K: CharClass + ?Sized>(&mut self, class: &K) -> bool {
        eat_run(self, |c| class.contains(c), 0);
        true
    }

    /// Consume the longest run of scalars in `class`; matches if the run
    /// is non-empty.
    fn match_one_or_more<K: CharClass + ?Sized>(&mut self, class: &K) -> bool {
        eat_run(self, |c| class.contains(c), 0) > 0
    }

    /// Consume between `min` and `max` scalars in `class`, as many as
    /// possible. `max == 0` means no upper bound.
    ///
    /// If fewer than `min` are available the stream is left untouched.
    fn match_min_max<K: CharClass + ?Sized>(&mut self, class: &K, min: usize, max: usize) -> bool {
        eat_bounded(self, |c| class.contains(c), min, max)
    }

    /// Consume one scalar not in `class`.
    fn non_match_one<K: CharClass + ?Sized>(&mut self, class: &K) -> bool {
        eat_one(self, |c| !class.contains(c))
    }

    /// Consume one scalar not in `class` if present. Always matches.
    fn non_match_zero_or_one<K: CharClass + ?Sized>(&mut self, class: &K) -> bool {
        eat_one(self, |c| !class.contains(c));
        true
    }

    /// Consume the longest run of scalars not in `class`. Always matches.
    fn non_match_zero_or_more<K: CharClass + ?Sized>(&mut self, class: &K) -> bool {
        eat_run(self, |c| !class.contains(c), 0);
        true
    }

    /// Consume the longest run of scalars not in `class`; matches if the
    /// run is non-empty.
    fn non_match_one_or_more<K: CharClass + ?Sized>(&mut self, class: &K) -> bool {
        eat_run(self, |c| !class.contains(c), 0) > 0
    }

    /// Negated form of [`match_min_max`](Self::match_min_max).
    fn non_match_min_max<K: CharClass + ?Sized>(
        &mut self,
        class: &K,
        min: usize,
        max: usize,
    ) -> bool {
        eat_bounded(self, |c| !class.contains(c), min, max)
    }
}

fn eat_one<S: Scan + ?Sized>(stream: &mut S, accept: impl Fn(char) -> bool) -> bool {
    match stream.peek() {
        Some(c) if accept(c) => {
            stream.bump(c);
            true
        }
        _ => false,
    }
}

/// Returns the number of scalars consumed. `max == 0` is unbounded.
fn eat_run<S: Scan + ?Sized>(stream: &mut S, accept: impl Fn(char) -> bool, max: usize) -> usize {
    let mut count = 0;
    while max == 0 || count < max {
        match stream.peek() {
            Some(c) if accept(c) => {
                stream.bump(c);
                count += 1;
            }
            _ => break,
        }
    }
    count
}

fn eat_bounded<S: Scan + ?Sized>(
    stream: &mut S,
    accept: impl Fn(char) -> bool,
    min: usize,
    max: usize,
) -> bool {
    if max != 0 && min > max {
        return false;
    }
    let start = stream.mark();
    if eat_run(stream, accept, max) < min {
        stream.reset_to(start);
        return false;
    }
    true
}

impl<T: Backtrack + ?Sized> Backtrack for &mut T {
    type Marker = T::Marker;

    #[inline]
    fn mark(&self) -> Self::Marker {
        (**self).mark()
    }

    #[inline]
    fn reset_to(&mut self, mark: Self::Marker) {
        (**self).reset_to(mark);
    }
}

impl<T: Scan> Scan for &mut T {
    #[inline]
    fn peek(&self) -> Option<char> {
        (**self).peek()
    }

    #[inline]
    fn bump(&mut self, c: char) {
        (**self).bump(c);
    }

    fn match_eof(&mut self) -> bool {
        (**self).match_eof()
    }

    fn match_one<K: CharClass + ?Sized>(&mut self, class: &K) -> bool {
        (**self).match_one(class)
    }

    fn match_zero_or_one<K: CharClass + ?Sized>(&mut self, class: &K) -> bool {
        (**self).match_zero_or_one(class)
    }

    fn match_zero_or_more<K: CharClass + ?Sized>(&mut self, class: &K) -> bool {
        (**self).match_zero_or_more(class)
    }

    fn match_one_or_more<K: CharClass + ?Sized>(&mut self, class: &K) -> bool {
        (**self).match_one_or_more(class)
    }

    fn match_min_max<K: CharClass + ?Sized>(&mut self, class: &K, min: usize, max: usize) -> bool {
        (**self).match_min_max(class, min, max)
    }

    fn non_match_one<K: CharClass + ?Sized>(&mut self, class: &K) -> bool {
        (**self).non_match_one(class)
    }

    fn non_match_zero_or_one<K: CharClass + ?Sized>(&mut self, class: &K) -> bool {
        (**self).non_match_zero_or_one(class)
    }

    fn non_match_zero_or_more<K: CharClass + ?Sized>(&mut self, class: &K) -> bool {
        (**self).non_match_zero_or_more(class)
    }

    fn non_match_one_or_more<K: CharClass + ?Sized>(&mut self, class: &K) -> bool {
        (**self).non_match_one_or_more(class)
    }

    fn non_match_min_max<K: CharClass + ?Sized>(
        &mut self,
        class: &K,
        min: usize,
        max: usize,
    ) -> bool {
        (**self).non_match_min_max(class, min, max)
    }
}
