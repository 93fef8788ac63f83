//! The expression engine.
//!
//! [`Matcher`] owns a cursor, the current [`Group`] and a stack of
//! suspended parents. Every operand is folded into the current group by
//! [`Group::fold`]; groups capture a cursor marker on entry and rewind to
//! it when they close with a false result, and so does the whole
//! expression when [`Matcher::result`] sees a false result.
//!
//! The methods here are the runtime-checked surface. The typed chain
//! ([`Operand`], [`Operator`](crate::Operator), [`End`](crate::End)) drives
//! the same private operations after the type system has already ruled out
//! misuse.

use lexmatch_core::{Backtrack, CharClass, Scan};
use tracing::{debug, trace};

use crate::fluent::{Fresh, Operand, Top};
use crate::group::{Combinator, Group, GroupStack, Quantifier};
use crate::MatchError;

/// Inline nesting depth reserved by [`Matcher::new`].
pub const DEFAULT_DEPTH: usize = 4;

/// Fluent match-expression engine bound to one cursor.
///
/// A matcher is reusable: [`result`](Self::result) and
/// [`reset`](Self::reset) return it to a fresh state anchored at the
/// cursor's current position.
pub struct Matcher<C: Backtrack> {
    cursor: C,
    stack: GroupStack<C::Marker>,
    current: Group<C::Marker>,
    has_attempted: bool,
}

impl<C: Backtrack> Matcher<C> {
    /// Create a matcher anchored at the cursor's current position.
    pub fn new(cursor: C) -> Self {
        Self::with_capacity(cursor, DEFAULT_DEPTH)
    }

    /// Create a matcher with room for `depth` nested groups before the
    /// group stack reallocates.
    pub fn with_capacity(cursor: C, depth: usize) -> Self {
        let current = Group::root(cursor.mark());
        Self {
            cursor,
            stack: GroupStack::with_capacity(depth),
            current,
            has_attempted: false,
        }
    }

    /// Start a typed expression chain.
    ///
    /// Abandons any expression in progress and anchors the new one at the
    /// cursor's current position.
    pub fn expr(&mut self) -> Operand<'_, C, Top, Fresh> {
        self.reset();
        Operand::new(self)
    }

    /// The cursor being matched against.
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Mutable access to the cursor.
    ///
    /// Moving the cursor while an expression is in progress does not move
    /// the anchors already captured; call [`reset`](Self::reset) first to
    /// start an expression from the new position.
    pub fn cursor_mut(&mut self) -> &mut C {
        &mut self.cursor
    }

    /// Consume the matcher, returning the cursor.
    pub fn into_inner(self) -> C {
        self.cursor
    }

    /// Number of currently open groups.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Whether anything has been attempted since the last reset.
    pub fn has_attempted(&self) -> bool {
        self.has_attempted
    }

    /// The group currently receiving operands.
    pub fn current(&self) -> &Group<C::Marker> {
        &self.current
    }

    /// Fold a custom predicate.
    ///
    /// The predicate is not called at all when the operand is
    /// short-circuited. It must not consume on failure; the primitives of
    /// [`Scan`] all honor that.
    pub fn attempt(&mut self, predicate: impl FnOnce(&mut C) -> bool) -> &mut Self {
        self.fold(predicate);
        self
    }

    /// AND the running result with the next operand.
    pub fn and(&mut self) -> Result<&mut Self, MatchError> {
        self.operator(Combinator::And)
    }

    /// OR the running result with the next operand.
    pub fn or(&mut self) -> Result<&mut Self, MatchError> {
        self.operator(Combinator::Or)
    }

    /// [`and`](Self::and) followed by [`begin`](Self::begin).
    pub fn and_begin(&mut self) -> Result<&mut Self, MatchError> {
        self.and()?;
        Ok(self.begin())
    }

    /// [`or`](Self::or) followed by [`begin`](Self::begin).
    pub fn or_begin(&mut self) -> Result<&mut Self, MatchError> {
        self.or()?;
        Ok(self.begin())
    }

    /// Open a nested group.
    pub fn begin(&mut self) -> &mut Self {
        self.open_group();
        self
    }

    /// Close the innermost group, folding its result into the parent
    /// according to `quantifier`.
    pub fn end(&mut self, quantifier: Quantifier) -> Result<&mut Self, MatchError> {
        if self.stack.is_empty() {
            return Err(misuse(MatchError::UnbalancedEnd));
        }
        self.close_group(quantifier);
        Ok(self)
    }

    /// `end(Quantifier::MatchOne)`.
    pub fn end_match_one(&mut self) -> Result<&mut Self, MatchError> {
        self.end(Quantifier::MatchOne)
    }

    /// `end(Quantifier::MatchZeroOrOne)`.
    pub fn end_match_zero_or_one(&mut self) -> Result<&mut Self, MatchError> {
        self.end(Quantifier::MatchZeroOrOne)
    }

    /// Finish the expression.
    ///
    /// On a false result the cursor is rewound to where the expression
    /// began. Either way the matcher is reset and ready for the next
    /// expression.
    pub fn result(&mut self) -> Result<bool, MatchError> {
        if !self.has_attempted {
            return Err(misuse(MatchError::UnstartedResult));
        }
        if !self.stack.is_empty() {
            return Err(misuse(MatchError::UnclosedGroup {
                depth: self.stack.depth(),
            }));
        }
        Ok(self.conclude())
    }

    /// Abandon the current expression without touching the cursor.
    pub fn reset(&mut self) -> &mut Self {
        self.stack.clear();
        self.current = Group::root(self.cursor.mark());
        self.has_attempted = false;
        self
    }

    fn operator(&mut self, combinator: Combinator) -> Result<&mut Self, MatchError> {
        if !self.current.attempted() {
            return Err(misuse(MatchError::UnstartedOperator));
        }
        self.set_operator(combinator);
        Ok(self)
    }

    pub(crate) fn fold(&mut self, predicate: impl FnOnce(&mut C) -> bool) {
        let cursor = &mut self.cursor;
        self.current.fold(|| predicate(cursor));
        self.has_attempted = true;
    }

    pub(crate) fn set_operator(&mut self, combinator: Combinator) {
        self.current.set_operator(combinator);
    }

    pub(crate) fn open_group(&mut self) {
        let skipped = self.current.child_skipped();
        let parent = std::mem::replace(
            &mut self.current,
            Group::nested(self.cursor.mark(), skipped),
        );
        self.stack.push(parent);
        trace!(depth = self.stack.depth(), skipped, "group opened");
    }

    /// Close the innermost group. With no open group the exit value is
    /// folded into the root group itself; the checked surface rejects that
    /// case before getting here.
    pub(crate) fn close_group(&mut self, quantifier: Quantifier) {
        let inner = self.current;
        if !inner.result() {
            self.cursor.reset_to(inner.entry());
        }
        let exit = quantifier.exit(inner.result());
        trace!(
            depth = self.stack.depth(),
            ?quantifier,
            inner = inner.result(),
            exit,
            rewound = !inner.result(),
            "group closed"
        );
        if let Some(parent) = self.stack.pop() {
            self.current = parent;
        }
        self.fold(|_| exit);
    }

    pub(crate) fn conclude(&mut self) -> bool {
        let matched = self.current.result();
        if !matched {
            self.cursor.reset_to(self.current.entry());
        }
        trace!(matched, "expression concluded");
        self.reset();
        matched
    }
}

fn misuse(error: MatchError) -> MatchError {
    debug!(%error, "matcher misuse");
    error
}

/// Generates one method per class-parameterized [`Scan`] primitive.
macro_rules! class_primitives {
    ($($(#[$doc:meta])* $name:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name<K: CharClass + ?Sized>(&mut self, class: &K) -> &mut Self {
                self.attempt(|cursor| cursor.$name(class))
            }
        )*
    };
}

impl<C: Scan> Matcher<C> {
    class_primitives! {
        /// Fold [`Scan::match_one`].
        match_one;
        /// Fold [`Scan::match_zero_or_one`].
        match_zero_or_one;
        /// Fold [`Scan::match_zero_or_more`].
        match_zero_or_more;
        /// Fold [`Scan::match_one_or_more`].
        match_one_or_more;
        /// Fold [`Scan::non_match_one`].
        non_match_one;
        /// Fold [`Scan::non_match_zero_or_one`].
        non_match_zero_or_one;
        /// Fold [`Scan::non_match_zero_or_more`].
        non_match_zero_or_more;
        /// Fold [`Scan::non_match_one_or_more`].
        non_match_one_or_more;
    }

    /// Fold [`Scan::match_min_max`].
    pub fn match_min_max<K: CharClass + ?Sized>(
        &mut self,
        class: &K,
        min: usize,
        max: usize,
    ) -> &mut Self {
        self.attempt(|cursor| cursor.match_min_max(class, min, max))
    }

    /// Fold [`Scan::non_match_min_max`].
    pub fn non_match_min_max<K: CharClass + ?Sized>(
        &mut self,
        class: &K,
        min: usize,
        max: usize,
    ) -> &mut Self {
        self.attempt(|cursor| cursor.non_match_min_max(class, min, max))
    }

    /// Fold [`Scan::match_eof`].
    pub fn match_eof(&mut self) -> &mut Self {
        self.attempt(|cursor| cursor.match_eof())
    }
}

impl<C: Backtrack + std::fmt::Debug> std::fmt::Debug for Matcher<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("cursor", &self.cursor)
            .field("depth", &self.stack.depth())
            .field("current", &self.current)
            .field("has_attempted", &self.has_attempted)
            .finish()
    }
}
