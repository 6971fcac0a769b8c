//! Existential and universal quantifiers over Cantor space.
//!
//! [`for_some`] and [`crate::find`] are defined in terms of each other.
//! `for_some(p)` evaluates `p` on the sequence that `find(p)` is building,
//! and `find(p)` decides each bit by asking `for_some` about a narrower
//! predicate. The recursion bottoms out because a continuous predicate only
//! ever asks for finitely many bits of its input, and each bit is produced
//! lazily, on demand.

use crate::error::SearchError;
use crate::guard::with_depth_limit;
use crate::predicate::Predicate;
use crate::search::find;
use crate::sequence::Sequence;

/// Returns true iff some sequence satisfies `pred`.
///
/// # Example
///
/// ```
/// use cantor::{for_some, Predicate};
///
/// assert!(for_some(&Predicate::new(|s| s[2] && !s[5])));
/// assert!(!for_some(&Predicate::new(|s| s[2] && !s[2])));
/// ```
#[must_use]
pub fn for_some(pred: &Predicate) -> bool {
    let p = pred.clone();
    let candidate = Sequence::new(move |i| find(&p).bit(i));
    pred.test(&candidate)
}

/// Returns true iff every sequence satisfies `pred`.
///
/// # Example
///
/// ```
/// use cantor::{for_every, Predicate};
///
/// assert!(for_every(&Predicate::new(|s| s[0] || !s[0])));
/// assert!(!for_every(&Predicate::new(|s| s[0])));
/// ```
#[must_use]
pub fn for_every(pred: &Predicate) -> bool {
    !for_some(&pred.negate())
}

/// [`for_some`] under a diagnostic depth limit.
///
/// # Errors
///
/// Returns [`SearchError::DepthExceeded`] if the search nests deeper than
/// `limit` frames.
pub fn try_for_some(pred: &Predicate, limit: usize) -> Result<bool, SearchError> {
    with_depth_limit(limit, || for_some(pred))
}

/// [`for_every`] under a diagnostic depth limit.
///
/// # Errors
///
/// Returns [`SearchError::DepthExceeded`] if the search nests deeper than
/// `limit` frames.
pub fn try_for_every(pred: &Predicate, limit: usize) -> Result<bool, SearchError> {
    with_depth_limit(limit, || for_every(pred))
}
