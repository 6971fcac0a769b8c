//! A catalogue of named reference predicates.
//!
//! These are the predicates the conformance suite, the benches and the
//! `cantor-explore` client exercise. The six in [`entries`] are pairwise
//! distinct; [`medium_reformulated`] is a rewrite of [`medium`] that is
//! extensionally equal to it.

use std::f64::consts::PI;

use crate::error::CatalogError;
use crate::predicate::Predicate;

/// Number of digits of π that [`pi_parity`] constrains.
pub const PI_DIGITS: usize = 10;

/// A named catalogue predicate.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Lookup name, e.g. `"pi-parity"`.
    pub name: &'static str,
    /// One-line description of the predicate.
    pub description: &'static str,
    /// The predicate itself.
    pub predicate: Predicate,
}

/// Accepts every sequence.
#[must_use]
pub fn always_true() -> Predicate {
    Predicate::constant(true)
}

/// Rejects every sequence.
#[must_use]
pub fn always_false() -> Predicate {
    Predicate::constant(false)
}

/// `s[3] && !s[4] && s[9]`
#[must_use]
pub fn specific() -> Predicate {
    Predicate::new(|s| s[3] && !s[4] && s[9])
}

/// `s[0]`
#[must_use]
pub fn simple() -> Predicate {
    Predicate::new(|s| s[0])
}

/// `if s[3] { s[1 - s[2]] } else { s[5 + s[4]] }`
///
/// The indices it inspects depend on the bits it has already read.
#[must_use]
pub fn medium() -> Predicate {
    Predicate::new(|s| {
        if s[3] {
            s[1 - usize::from(s[2])]
        } else {
            s[5 + usize::from(s[4])]
        }
    })
}

/// [`medium`] with the index arithmetic unfolded into a match on the
/// selector bits.
#[must_use]
pub fn medium_reformulated() -> Predicate {
    Predicate::new(|s| match (s[3], s[2], s[4]) {
        (true, true, _) => s[0],
        (true, false, _) => s[1],
        (false, _, true) => s[6],
        (false, _, false) => s[5],
    })
}

/// Parity of the first [`PI_DIGITS`] decimal digits of π after the point:
/// bit `i` is set iff digit `i` is odd.
///
/// Digits come from the shortest round-trip rendering of [`PI`],
/// `3.141592653589793`.
///
/// ```
/// use cantor::catalog::pi_parity_bits;
///
/// // 1 4 1 5 9 2 6 5 3 5
/// assert_eq!(
///     pi_parity_bits(),
///     [true, false, true, true, true, false, false, true, true, true],
/// );
/// ```
#[must_use]
pub fn pi_parity_bits() -> [bool; PI_DIGITS] {
    let rendered = PI.to_string();
    let digits = rendered
        .split_once('.')
        .map_or("", |(_, fraction)| fraction)
        .chars()
        .filter_map(|c| c.to_digit(10));

    let mut bits = [false; PI_DIGITS];
    let mut filled = 0;
    for (bit, digit) in bits.iter_mut().zip(digits) {
        *bit = digit % 2 == 1;
        filled += 1;
    }
    debug_assert_eq!(filled, PI_DIGITS, "rendered pi {rendered} is too short");
    bits
}

/// Holds iff the first [`PI_DIGITS`] bits equal [`pi_parity_bits`].
///
/// Bits are checked in order and the check stops at the first mismatch.
#[must_use]
pub fn pi_parity() -> Predicate {
    let bits = pi_parity_bits();
    Predicate::new(move |s| bits.iter().enumerate().all(|(i, &bit)| s[i] == bit))
}

/// The pairwise-distinct reference predicates.
#[must_use]
pub fn entries() -> Vec<Entry> {
    vec![
        Entry {
            name: "true",
            description: "accepts every sequence",
            predicate: always_true(),
        },
        Entry {
            name: "false",
            description: "rejects every sequence",
            predicate: always_false(),
        },
        Entry {
            name: "specific",
            description: "s[3] && !s[4] && s[9]",
            predicate: specific(),
        },
        Entry {
            name: "simple",
            description: "s[0]",
            predicate: simple(),
        },
        Entry {
            name: "medium",
            description: "if s[3] { s[1 - s[2]] } else { s[5 + s[4]] }",
            predicate: medium(),
        },
        Entry {
            name: "pi-parity",
            description: "first ten bits match the parity of the digits of pi",
            predicate: pi_parity(),
        },
    ]
}

/// Looks up a predicate by name.
///
/// Accepts every name in [`entries`] plus `"medium-reformulated"`.
///
/// # Errors
///
/// Returns [`CatalogError::UnknownPredicate`] if no predicate has this name.
pub fn by_name(name: &str) -> Result<Predicate, CatalogError> {
    if name == "medium-reformulated" {
        return Ok(medium_reformulated());
    }
    entries()
        .into_iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.predicate)
        .ok_or_else(|| CatalogError::UnknownPredicate {
            name: name.to_string(),
        })
}

/// All names accepted by [`by_name`].
#[must_use]
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = entries().iter().map(|entry| entry.name).collect();
    names.push("medium-reformulated");
    names
}
