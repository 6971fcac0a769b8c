//! Witness construction.
//!
//! [`find`] builds a sequence bit by bit, lowest index first. Bit 0 is
//! `false` if some sequence starting with `false` satisfies the predicate,
//! and `true` otherwise. Every later bit is found the same way on the
//! predicate narrowed to the chosen prefix, and only when it is queried.
//!
//! `find` is only meaningful on a satisfiable predicate. On one with no
//! witness it still returns a sequence (the `true` branch is taken at every
//! bit), but that sequence does not satisfy the predicate. [`search`] checks
//! first and returns `None` instead.

use crate::error::SearchError;
use crate::guard::{self, with_depth_limit};
use crate::predicate::Predicate;
use crate::quantifier::for_some;
use crate::sequence::Sequence;

/// Returns a sequence satisfying `pred`, provided one exists.
///
/// Deciding bit 0 happens here. Each higher bit is decided lazily when the
/// returned sequence is queried, and is recomputed on every query.
///
/// If no sequence satisfies `pred` the result is well defined but is not a
/// witness. Use [`search`] when satisfiability is not already known.
///
/// # Example
///
/// ```
/// use cantor::{find, Predicate};
///
/// let p = Predicate::new(|s| s[3] && !s[4] && s[9]);
/// let w = find(&p);
/// assert!(w[3] && !w[4] && w[9]);
/// assert!(p.test(&w));
/// ```
#[must_use]
pub fn find(pred: &Predicate) -> Sequence {
    let _frame = guard::enter();
    let bit = !for_some(&pred.after(&[false]));
    let narrowed = pred.after(&[bit]);
    let tail = Sequence::new(move |i| {
        let _frame = guard::enter();
        find(&narrowed).bit(i)
    });
    Sequence::cons(bit, &tail)
}

/// Returns a sequence satisfying `pred`, or `None` if there is none.
///
/// # Example
///
/// ```
/// use cantor::{search, Predicate};
///
/// let w = search(&Predicate::new(|s| !s[0] && s[1])).unwrap();
/// assert_eq!(w.take(2), vec![false, true]);
///
/// assert!(search(&Predicate::new(|s| s[0] && !s[0])).is_none());
/// ```
#[must_use]
pub fn search(pred: &Predicate) -> Option<Sequence> {
    for_some(pred).then(|| find(pred))
}

/// [`search`] under a diagnostic depth limit.
///
/// Only the satisfiability check and bit 0 run under the guard. Later
/// queries on the returned witness run unguarded; wrap them in
/// [`with_depth_limit`] to bound them too.
///
/// # Errors
///
/// Returns [`SearchError::DepthExceeded`] if the search nests deeper than
/// `limit` frames.
pub fn try_search(pred: &Predicate, limit: usize) -> Result<Option<Sequence>, SearchError> {
    with_depth_limit(limit, || search(pred))
}
