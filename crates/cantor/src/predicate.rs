//! Predicates over sequences.
//!
//! A [`Predicate`] is a shared, type-erased `Fn(&Sequence) -> bool`. The
//! search composes a fresh predicate at every level of its recursion, so
//! predicates are erased once at construction instead of growing a new
//! closure type per level.
//!
//! Every predicate handed to the quantifiers must be *continuous*: on any
//! input it terminates on, its answer depends only on a finite prefix of
//! that input. This is never checked. A predicate that inspects unboundedly
//! many indices makes the quantifiers diverge.
//!
//! Predicates are compared by behaviour with [`crate::equal`], never by
//! identity: two handles built from different closures may be extensionally
//! identical.

use std::fmt;
use std::rc::Rc;

use crate::sequence::Sequence;

/// A pure, continuous test on sequences.
///
/// # Example
///
/// ```
/// use cantor::{Predicate, Sequence};
///
/// let first = Predicate::new(|s| s[0]);
/// let second = Predicate::new(|s| s[1]);
/// let both = first.and(&second);
///
/// let seq = Sequence::prepend(&[true, true], &Sequence::constant(false));
/// assert!(both.test(&seq));
/// assert!(!both.negate().test(&seq));
/// ```
#[derive(Clone)]
pub struct Predicate {
    test: Rc<dyn Fn(&Sequence) -> bool>,
}

impl Predicate {
    /// Wraps a closure as a predicate.
    #[must_use]
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Sequence) -> bool + 'static,
    {
        Self { test: Rc::new(f) }
    }

    /// The predicate that ignores its input and returns `value`.
    #[must_use]
    pub fn constant(value: bool) -> Self {
        Self::new(move |_| value)
    }

    /// Evaluates the predicate on `seq`.
    #[inline]
    #[must_use]
    pub fn test(&self, seq: &Sequence) -> bool {
        (self.test)(seq)
    }

    /// Returns `s => !self(s)`.
    #[must_use]
    pub fn negate(&self) -> Self {
        let p = self.clone();
        Self::new(move |s| !p.test(s))
    }

    /// Returns `c => self(prefix ++ c)`: the predicate restricted to
    /// sequences that start with `prefix`, seen from the first index after
    /// it.
    #[must_use]
    pub fn after(&self, prefix: &[bool]) -> Self {
        let p = self.clone();
        let prefix: Rc<[bool]> = Rc::from(prefix);
        Self::new(move |c| p.test(&Sequence::prepend(&prefix, c)))
    }

    /// Returns `s => self(s) == other(s)`.
    #[must_use]
    pub fn agrees_with(&self, other: &Predicate) -> Self {
        let (p, q) = (self.clone(), other.clone());
        Self::new(move |s| p.test(s) == q.test(s))
    }

    /// Returns `s => self(s) && other(s)`.
    #[must_use]
    pub fn and(&self, other: &Predicate) -> Self {
        let (p, q) = (self.clone(), other.clone());
        Self::new(move |s| p.test(s) && q.test(s))
    }

    /// Returns `s => self(s) || other(s)`.
    #[must_use]
    pub fn or(&self, other: &Predicate) -> Self {
        let (p, q) = (self.clone(), other.clone());
        Self::new(move |s| p.test(s) || q.test(s))
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}
