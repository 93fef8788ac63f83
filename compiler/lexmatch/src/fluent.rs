//! Typed expression chains.
//!
//! A chain alternates between two phases, and a third appears when a
//! group closes:
//!
//! - [`Operand`]: an operand (primitive, predicate or `begin`) is next.
//! - [`Operator`]: an operator, `end` or `result` is next.
//! - [`End`]: a quantifier must be chosen for the group being closed.
//!
//! The depth parameter `D` is [`Top`] at the outermost level and
//! [`Nested<P>`] inside a group whose parent depth is `P`. `end` exists
//! only on nested phases and `result` only on [`Operator<Top>`], so every
//! chain that compiles is balanced.
//!
//! An operand phase also records whether it directly follows `begin`
//! ([`Fresh`]) or an operator ([`Joined`]). Only a fresh nested operand
//! may close its group (as an empty group); an operator must always be
//! followed by an operand.
//!
//! Each phase holds the matcher mutably; dropping a chain part way leaves
//! the expression in progress until the next [`Matcher::expr`] or
//! [`Matcher::reset`].

use std::marker::PhantomData;

use lexmatch_core::{Backtrack, CharClass, Scan};

use crate::group::{Combinator, Quantifier};
use crate::Matcher;

/// Depth marker for the outermost level of an expression.
#[derive(Debug)]
pub struct Top;

/// Depth marker for a group nested inside depth `P`.
#[derive(Debug)]
pub struct Nested<P>(PhantomData<P>);

/// Operand phase marker: nothing has been folded into the group yet.
#[derive(Debug)]
pub struct Fresh;

/// Operand phase marker: the previous call was `and()` or `or()`.
#[derive(Debug)]
pub struct Joined;

/// An operand is expected next.
///
/// `S` is [`Fresh`] right after `begin` (or at the start of a chain) and
/// [`Joined`] after an operator. Only the fresh phase can `end` a group:
///
/// ```
/// use lexmatch::{Matcher, SourceBuffer};
///
/// let buf = SourceBuffer::new("a");
/// let mut m = Matcher::new(buf.cursor());
/// assert!(!m.expr().begin().end().match_one().result());
/// ```
///
/// An operator followed directly by `end` is rejected:
///
/// ```compile_fail
/// use lexmatch::{Matcher, SourceBuffer};
///
/// let buf = SourceBuffer::new("a");
/// let mut m = Matcher::new(buf.cursor());
/// let _ = m.expr().begin().match_one(&'a').and().end();
/// ```
#[must_use = "an expression chain does nothing until `result()` is called"]
pub struct Operand<'m, C: Backtrack, D = Top, S = Joined> {
    matcher: &'m mut Matcher<C>,
    depth: PhantomData<(D, S)>,
}

/// An operator, `end` or `result` is expected next.
#[must_use = "an expression chain does nothing until `result()` is called"]
pub struct Operator<'m, C: Backtrack, D = Top> {
    matcher: &'m mut Matcher<C>,
    depth: PhantomData<D>,
}

/// A group is being closed; choose its quantifier.
///
/// `P` is the depth the chain returns to.
#[must_use = "a closed group needs `match_one()` or `match_zero_or_one()`"]
pub struct End<'m, C: Backtrack, P> {
    matcher: &'m mut Matcher<C>,
    depth: PhantomData<P>,
}

impl<'m, C: Backtrack, D, S> Operand<'m, C, D, S> {
    pub(crate) fn new(matcher: &'m mut Matcher<C>) -> Self {
        Self {
            matcher,
            depth: PhantomData,
        }
    }

    /// Fold a custom predicate.
    pub fn attempt(self, predicate: impl FnOnce(&mut C) -> bool) -> Operator<'m, C, D> {
        self.matcher.fold(predicate);
        Operator::new(self.matcher)
    }

    /// Open a nested group.
    pub fn begin(self) -> Operand<'m, C, Nested<D>, Fresh> {
        self.matcher.open_group();
        Operand::new(self.matcher)
    }
}

impl<'m, C: Backtrack, P> Operand<'m, C, Nested<P>, Fresh> {
    /// Close an empty group. Its result is `false`.
    pub fn end(self) -> End<'m, C, P> {
        End::new(self.matcher)
    }
}

impl<'m, C: Backtrack, D> Operator<'m, C, D> {
    fn new(matcher: &'m mut Matcher<C>) -> Self {
        Self {
            matcher,
            depth: PhantomData,
        }
    }

    /// AND the running result with the next operand.
    pub fn and(self) -> Operand<'m, C, D> {
        self.matcher.set_operator(Combinator::And);
        Operand::new(self.matcher)
    }

    /// OR the running result with the next operand.
    pub fn or(self) -> Operand<'m, C, D> {
        self.matcher.set_operator(Combinator::Or);
        Operand::new(self.matcher)
    }

    /// `and().begin()`.
    pub fn and_begin(self) -> Operand<'m, C, Nested<D>, Fresh> {
        self.and().begin()
    }

    /// `or().begin()`.
    pub fn or_begin(self) -> Operand<'m, C, Nested<D>, Fresh> {
        self.or().begin()
    }

    /// Abandon the expression and start over at the cursor's position.
    pub fn reset(self) -> Operand<'m, C, Top, Fresh> {
        self.matcher.reset();
        Operand::new(self.matcher)
    }
}

impl<'m, C: Backtrack> Operator<'m, C, Top> {
    /// Finish the expression, rewinding the cursor if it did not match.
    pub fn result(self) -> bool {
        self.matcher.conclude()
    }
}

impl<'m, C: Backtrack, P> Operator<'m, C, Nested<P>> {
    /// Close the innermost group.
    pub fn end(self) -> End<'m, C, P> {
        End::new(self.matcher)
    }

    /// `end().match_one()`.
    pub fn end_match_one(self) -> Operator<'m, C, P> {
        self.end().match_one()
    }

    /// `end().match_zero_or_one()`.
    pub fn end_match_zero_or_one(self) -> Operator<'m, C, P> {
        self.end().match_zero_or_one()
    }
}

impl<'m, C: Backtrack, P> End<'m, C, P> {
    fn new(matcher: &'m mut Matcher<C>) -> Self {
        Self {
            matcher,
            depth: PhantomData,
        }
    }

    /// The group is required.
    pub fn match_one(self) -> Operator<'m, C, P> {
        self.close(Quantifier::MatchOne)
    }

    /// The group is optional.
    pub fn match_zero_or_one(self) -> Operator<'m, C, P> {
        self.close(Quantifier::MatchZeroOrOne)
    }

    fn close(self, quantifier: Quantifier) -> Operator<'m, C, P> {
        self.matcher.close_group(quantifier);
        Operator::new(self.matcher)
    }
}

macro_rules! class_primitives {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Fold [`Scan::", stringify!($name), "`].")]
            pub fn $name<K: CharClass + ?Sized>(self, class: &K) -> Operator<'m, C, D> {
                self.attempt(|cursor| cursor.$name(class))
            }
        )*
    };
}

impl<'m, C: Scan, D, S> Operand<'m, C, D, S> {
    class_primitives! {
        match_one,
        match_zero_or_one,
        match_zero_or_more,
        match_one_or_more,
        non_match_one,
        non_match_zero_or_one,
        non_match_zero_or_more,
        non_match_one_or_more,
    }

    /// Fold [`Scan::match_min_max`].
    pub fn match_min_max<K: CharClass + ?Sized>(
        self,
        class: &K,
        min: usize,
        max: usize,
    ) -> Operator<'m, C, D> {
        self.attempt(|cursor| cursor.match_min_max(class, min, max))
    }

    /// Fold [`Scan::non_match_min_max`].
    pub fn non_match_min_max<K: CharClass + ?Sized>(
        self,
        class: &K,
        min: usize,
        max: usize,
    ) -> Operator<'m, C, D> {
        self.attempt(|cursor| cursor.non_match_min_max(class, min, max))
    }

    /// Fold [`Scan::match_eof`].
    pub fn match_eof(self) -> Operator<'m, C, D> {
        self.attempt(|cursor| cursor.match_eof())
    }
}

#[cfg(test)]
mod tests;
