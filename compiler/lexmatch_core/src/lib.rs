//! Low-level scanning primitives for lexmatch.
//!
//! This crate is the stream side of the matcher: a sentinel-terminated
//! [`SourceBuffer`], a cheap [`Cursor`] over it, the [`CharClass`] family
//! used to describe what a primitive may consume, and the two contract
//! traits an expression engine drives:
//!
//! - [`Backtrack`] captures and restores stream positions.
//! - [`Scan`] is the family of consume-if-matches primitives.
//!
//! Every primitive advances the cursor only on success, so a failed
//! primitive never needs cleanup. Composite expressions that can fail
//! half way through are the engine's problem, solved with [`Backtrack`].

mod class;
mod cursor;
mod source_buffer;
mod stream;

pub use class::{ByteRangeError, ByteSet, CharClass, Predicate, RuneRange, RuneSet};
pub use cursor::{Cursor, CursorMark};
pub use source_buffer::SourceBuffer;
pub use stream::{Backtrack, Scan};
