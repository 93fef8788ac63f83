//! Per-nesting-level bookkeeping.
//!
//! A [`Group`] holds one level's running boolean, the pending
//! [`Combinator`] and the skip state that implements short-circuiting.
//! Suspended parents live on a [`GroupStack`]; groups are strictly nested
//! and short-lived, so the stack is a flat, reused buffer.

use smallvec::SmallVec;

/// How the next operand's outcome is folded into the running result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Combinator {
    /// Take the next outcome as-is, discarding the running result.
    #[default]
    Identity,
    /// Running result AND next outcome.
    And,
    /// Running result OR next outcome.
    Or,
}

impl Combinator {
    /// Fold `next` into `acc`.
    #[inline]
    pub fn apply(self, acc: bool, next: bool) -> bool {
        match self {
            Combinator::Identity => next,
            Combinator::And => acc && next,
            Combinator::Or => acc || next,
        }
    }

    /// Whether the next operand is unable to change `acc`.
    #[inline]
    fn settles(self, acc: bool) -> bool {
        match self {
            Combinator::Identity => false,
            Combinator::And => !acc,
            Combinator::Or => acc,
        }
    }
}

/// How a closed group's result reaches its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quantifier {
    /// Required: the group's result is passed through.
    MatchOne,
    /// Optional: the parent always sees `true`.
    MatchZeroOrOne,
}

impl Quantifier {
    /// The value folded into the parent for a group that evaluated to `inner`.
    #[inline]
    pub fn exit(self, inner: bool) -> bool {
        match self {
            Quantifier::MatchOne => inner,
            Quantifier::MatchZeroOrOne => true,
        }
    }
}

/// One nesting level of an expression.
///
/// # Invariants
///
/// - `entry` is captured once, when the group is created.
/// - `skip_all` is fixed at creation from the parent's effective skip state.
/// - `skip_next` is recomputed by every operator and decays back to
///   `skip_all` after every folded operand.
/// - `combinator` is `Identity` except between an operator and the next
///   operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Group<M> {
    result: bool,
    skip_all: bool,
    skip_next: bool,
    combinator: Combinator,
    attempted: bool,
    entry: M,
}

impl<M: Copy> Group<M> {
    /// Top-level group for an expression starting at `entry`.
    pub fn root(entry: M) -> Self {
        Self::nested(entry, false)
    }

    /// Group opened inside a parent whose effective skip state is `skipped`.
    pub fn nested(entry: M, skipped: bool) -> Self {
        Self {
            result: false,
            skip_all: skipped,
            skip_next: skipped,
            combinator: Combinator::Identity,
            attempted: false,
            entry,
        }
    }

    /// Running result.
    #[inline]
    pub fn result(&self) -> bool {
        self.result
    }

    /// Position snapshot taken when the group was created.
    #[inline]
    pub fn entry(&self) -> M {
        self.entry
    }

    /// Whether every operand of this group is skipped.
    #[inline]
    pub fn skip_all(&self) -> bool {
        self.skip_all
    }

    /// Whether the next operand will be skipped.
    #[inline]
    pub fn skip_next(&self) -> bool {
        self.skip_next
    }

    /// Combinator waiting for the next operand.
    #[inline]
    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// Whether any operand has been folded (or skipped) in this group.
    #[inline]
    pub fn attempted(&self) -> bool {
        self.attempted
    }

    /// Skip state a child group opened now would inherit.
    #[inline]
    pub fn child_skipped(&self) -> bool {
        self.skip_all || self.skip_next
    }

    /// Set the pending combinator and decide whether the next operand is
    /// short-circuited.
    pub fn set_operator(&mut self, combinator: Combinator) {
        self.skip_next = self.skip_all || combinator.settles(self.result);
        self.combinator = combinator;
    }

    /// Fold one operand.
    ///
    /// `operand` is only invoked when the operand is not skipped; a skipped
    /// operand leaves the result untouched. Either way the combinator
    /// decays to `Identity` and `skip_next` to `skip_all`.
    pub fn fold(&mut self, operand: impl FnOnce() -> bool) {
        if !self.skip_next {
            self.result = self.combinator.apply(self.result, operand());
        }
        self.attempted = true;
        self.skip_next = self.skip_all;
        self.combinator = Combinator::Identity;
    }
}

/// LIFO stack of suspended parent groups.
///
/// Four levels are stored inline; deeper nesting spills to the heap once
/// and the allocation is reused across expressions.
#[derive(Clone, Debug)]
pub struct GroupStack<M> {
    groups: SmallVec<[Group<M>; 4]>,
}

impl<M> Default for GroupStack<M> {
    fn default() -> Self {
        Self {
            groups: SmallVec::new(),
        }
    }
}

impl<M> GroupStack<M> {
    /// Empty stack with the default inline capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stack pre-sized for `depth` levels of nesting.
    pub fn with_capacity(depth: usize) -> Self {
        Self {
            groups: SmallVec::with_capacity(depth),
        }
    }

    /// Suspend `group` as the parent of a new one.
    #[inline]
    pub fn push(&mut self, group: Group<M>) {
        self.groups.push(group);
    }

    /// Resume the most recently suspended group.
    #[inline]
    pub fn pop(&mut self) -> Option<Group<M>> {
        self.groups.pop()
    }

    /// Current nesting depth (number of suspended parents).
    #[inline]
    pub fn depth(&self) -> usize {
        self.groups.len()
    }

    /// Whether the expression is at top level.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Drop every suspended group, keeping the allocation.
    pub fn clear(&mut self) {
        self.groups.clear();
    }
}
