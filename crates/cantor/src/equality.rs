//! Extensional equality of predicates.

use crate::error::SearchError;
use crate::guard::with_depth_limit;
use crate::predicate::Predicate;
use crate::quantifier::for_every;

/// Returns true iff `p` and `q` give the same answer on every sequence.
///
/// Two predicates built from different closures are equal whenever they
/// agree everywhere, so this is the only sound way to compare them.
///
/// # Example
///
/// ```
/// use cantor::{equal, Predicate};
///
/// let p = Predicate::new(|s| s[0] && s[1]);
/// let q = Predicate::new(|s| !(!s[1] || !s[0]));
/// assert!(equal(&p, &q));
/// assert!(!equal(&p, &Predicate::new(|s| s[0])));
/// ```
#[must_use]
pub fn equal(p: &Predicate, q: &Predicate) -> bool {
    for_every(&p.agrees_with(q))
}

/// [`equal`] under a diagnostic depth limit.
///
/// # Errors
///
/// Returns [`SearchError::DepthExceeded`] if the search nests deeper than
/// `limit` frames.
pub fn try_equal(p: &Predicate, q: &Predicate, limit: usize) -> Result<bool, SearchError> {
    with_depth_limit(limit, || equal(p, q))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_reflexive_through_wrapper() {
        let p = Predicate::new(|s| s[2] != s[6]);
        let inner = p.clone();
        let wrapped = Predicate::new(move |s| inner.test(s));
        assert!(equal(&p, &p));
        assert!(equal(&p, &wrapped));
    }

    #[test]
    fn test_de_morgan() {
        let p = Predicate::new(|s| !(s[0] || s[4]));
        let q = Predicate::new(|s| !s[0] && !s[4]);
        assert!(equal(&p, &q));
    }

    #[test]
    fn test_symmetric_on_difference() {
        let p = Predicate::new(|s| s[1]);
        let q = Predicate::new(|s| s[1] && s[2]);
        assert!(!equal(&p, &q));
        assert!(!equal(&q, &p));
    }

    #[test]
    fn test_transitive_chain() {
        let p = catalog::medium();
        let q = catalog::medium_reformulated();
        let inner = p.clone();
        let r = Predicate::new(move |s| inner.test(s));
        assert!(equal(&p, &q));
        assert!(equal(&q, &r));
        assert!(equal(&p, &r));

        // A broken link breaks the chain.
        let simple = catalog::simple();
        assert!(!equal(&q, &simple));
        assert!(!equal(&p, &simple));
    }

    #[test]
    fn test_constants() {
        let t = Predicate::constant(true);
        let f = Predicate::constant(false);
        assert!(equal(&t, &Predicate::new(|s| s[3] || !s[3])));
        assert!(equal(&f, &Predicate::new(|s| s[3] && !s[3])));
        assert!(!equal(&t, &f));
    }

    #[test]
    fn test_try_equal() {
        let p = Predicate::new(|s| s[0]);
        assert_eq!(try_equal(&p, &p, 64), Ok(true));

        let q = Predicate::new(|s| (0..).all(|i| s[i]));
        assert_eq!(
            try_equal(&q, &Predicate::constant(false), 16),
            Err(SearchError::DepthExceeded { limit: 16 })
        );
    }
}
