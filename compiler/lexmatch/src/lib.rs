//! Fluent, backtracking match expressions over lexer primitives.
//!
//! A [`Matcher`] sits between a cursor's consume-if-matches primitives and
//! the tokenizer code deciding what to emit. It folds primitive outcomes
//! into regex-like expressions with grouping, alternation, conjunction and
//! optional groups, and guarantees all-or-nothing consumption: a failed
//! expression (or failed group) leaves the cursor exactly where it began.
//!
//! # Example
//!
//! The JSON number grammar `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][-+]?[0-9]+)?`
//! maps one call per regex atom:
//!
//! ```text
//! let matched = matcher.expr()
//!     .match_zero_or_one(&'-')              // -?
//!     .and_begin()                          // (
//!         .match_one(&'0')                  //   0
//!         .or_begin()                       //   |(
//!             .match_one(&ONE_TO_NINE)      //     [1-9]
//!             .and().match_zero_or_more(&DIGITS) // [0-9]*
//!         .end_match_one()                  //   )
//!     .end_match_one()                      // )
//!     .and_begin()                          // (
//!         .match_one(&'.')                  //   \.
//!         .and().match_one_or_more(&DIGITS) //   [0-9]+
//!     .end_match_zero_or_one()              // )?
//!     .result();
//! ```
//!
//! # Two Surfaces
//!
//! - [`Matcher::expr`] starts a typed chain ([`Operand`], [`Operator`],
//!   [`End`]); illegal sequences such as an operator with no operand, an
//!   operator followed by `end`, an unbalanced `end`, or `result` inside
//!   an open group do not compile.
//! - The methods on [`Matcher`] itself form a runtime-checked surface for
//!   callers that assemble expressions dynamically; misuse is reported as
//!   a [`MatchError`].

mod engine;
mod error;
mod fluent;
mod group;

pub use engine::{Matcher, DEFAULT_DEPTH};
pub use error::MatchError;
pub use fluent::{End, Fresh, Joined, Nested, Operand, Operator, Top};
pub use group::{Combinator, Group, GroupStack, Quantifier};

pub use lexmatch_core::{
    Backtrack, ByteRangeError, ByteSet, CharClass, Cursor, CursorMark, Predicate, RuneRange,
    RuneSet, Scan, SourceBuffer,
};
