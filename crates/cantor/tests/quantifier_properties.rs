//! Property-based tests for sequences and the quantifiers.
//!
//! Random predicates are conjunctions or disjunctions of literals over a
//! handful of low indices, so satisfiability has a closed form to check the
//! search against.

use cantor::{equal, find, for_every, for_some, search, Predicate, Sequence};
use proptest::collection::vec;
use proptest::prelude::*;

/// Highest index a generated literal may mention.
const WIDTH: usize = 6;

/// `(index, polarity)`: the literal `s[index] == polarity`.
type Literal = (usize, bool);

fn literals() -> impl Strategy<Value = Vec<Literal>> {
    vec((0..WIDTH, any::<bool>()), 0..5)
}

fn conjunction(lits: &[Literal]) -> Predicate {
    let lits = lits.to_vec();
    Predicate::new(move |s| lits.iter().all(|&(i, b)| s[i] == b))
}

fn disjunction(lits: &[Literal]) -> Predicate {
    let lits = lits.to_vec();
    Predicate::new(move |s| lits.iter().any(|&(i, b)| s[i] == b))
}

/// A conjunction is satisfiable iff no index is required both ways.
fn consistent(lits: &[Literal]) -> bool {
    lits.iter()
        .all(|&(i, b)| lits.iter().all(|&(j, c)| i != j || b == c))
}

// =============================================================================
// Prefix properties
// =============================================================================

proptest! {
    /// prepend answers from the prefix, then from the shifted continuation
    #[test]
    fn prop_prepend_prefix_then_continuation(
        prefix in vec(any::<bool>(), 0..16),
        tail in vec(any::<bool>(), 1..16),
        i in 0usize..48,
    ) {
        let period = tail.clone();
        let continuation = Sequence::new(move |k| period[k % period.len()]);
        let seq = Sequence::prepend(&prefix, &continuation);

        let expected = if i < prefix.len() {
            prefix[i]
        } else {
            continuation[i - prefix.len()]
        };
        prop_assert_eq!(seq[i], expected);
    }

    /// prepending twice is prepending the concatenation
    #[test]
    fn prop_prepend_associative(
        a in vec(any::<bool>(), 0..8),
        b in vec(any::<bool>(), 0..8),
    ) {
        let tail = Sequence::new(|k| k % 3 == 1);
        let nested = Sequence::prepend(&a, &Sequence::prepend(&b, &tail));
        let joined: Vec<bool> = a.iter().chain(&b).copied().collect();
        let flat = Sequence::prepend(&joined, &tail);
        prop_assert_eq!(nested.take(24), flat.take(24));
    }
}

// =============================================================================
// Quantifier properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// for_some on a conjunction matches the closed form
    #[test]
    fn prop_for_some_conjunction(lits in literals()) {
        prop_assert_eq!(for_some(&conjunction(&lits)), consistent(&lits));
    }

    /// for_every on a disjunction holds iff it contains a complementary pair
    #[test]
    fn prop_for_every_disjunction(lits in literals()) {
        let complemented = lits
            .iter()
            .any(|&(i, b)| lits.iter().any(|&(j, c)| i == j && b != c));
        prop_assert_eq!(for_every(&disjunction(&lits)), complemented);
    }

    /// find satisfies every satisfiable predicate
    #[test]
    fn prop_find_is_witness(lits in literals()) {
        prop_assume!(consistent(&lits));
        let p = conjunction(&lits);
        let w = find(&p);
        prop_assert!(p.test(&w));
        for &(i, b) in &lits {
            prop_assert_eq!(w[i], b);
        }
    }

    /// search returns None exactly when for_some is false
    #[test]
    fn prop_search_matches_for_some(lits in literals()) {
        let p = conjunction(&lits);
        prop_assert_eq!(search(&p).is_some(), for_some(&p));
    }

    /// for_every p == !for_some !p
    #[test]
    fn prop_quantifier_duality(lits in literals()) {
        let p = disjunction(&lits);
        prop_assert_eq!(for_every(&p), !for_some(&p.negate()));
    }
}

// =============================================================================
// Equality properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// equal is reflexive, even through a distinct handle
    #[test]
    fn prop_equal_reflexive(lits in literals()) {
        let p = conjunction(&lits);
        let inner = p.clone();
        let wrapped = Predicate::new(move |s| inner.test(s));
        prop_assert!(equal(&p, &wrapped));
    }

    /// equal is symmetric
    #[test]
    fn prop_equal_symmetric(a in literals(), b in literals()) {
        let (p, q) = (conjunction(&a), conjunction(&b));
        prop_assert_eq!(equal(&p, &q), equal(&q, &p));
    }

    /// equal is transitive
    #[test]
    fn prop_equal_transitive(a in literals(), b in literals(), c in literals()) {
        let (p, q, r) = (conjunction(&a), conjunction(&b), conjunction(&c));
        prop_assert!(!(equal(&p, &q) && equal(&q, &r)) || equal(&p, &r));
    }

    /// equal is transitive along a chain whose links all hold
    #[test]
    fn prop_equal_transitive_chain(lits in literals()) {
        let mut reversed = lits.clone();
        reversed.reverse();
        let doubled: Vec<Literal> = lits.iter().chain(&lits).copied().collect();

        let (p, q, r) = (conjunction(&lits), conjunction(&reversed), conjunction(&doubled));
        prop_assert!(equal(&p, &q));
        prop_assert!(equal(&q, &r));
        prop_assert!(equal(&p, &r));
    }

    /// literal order does not matter
    #[test]
    fn prop_equal_permutation(lits in literals()) {
        let mut reversed = lits.clone();
        reversed.reverse();
        prop_assert!(equal(&conjunction(&lits), &conjunction(&reversed)));
    }
}
