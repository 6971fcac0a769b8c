//! Exhaustive search over Cantor space.
//!
//! A predicate on infinite bit sequences that always terminates can only
//! ever look at a finite prefix of its input. That is enough to decide,
//! in finite time, whether *some* sequence satisfies it, whether *every*
//! sequence does, and to construct a satisfying sequence when one exists.
//!
//! # Components
//!
//! | Item | Role |
//! |------|------|
//! | [`Sequence`] | Lazy `index -> bit` function; supports prefixing |
//! | [`Predicate`] | Shared, type-erased test on sequences |
//! | [`for_some`] / [`for_every`] | Existential / universal quantifiers |
//! | [`find`] / [`search`] | Witness construction |
//! | [`equal`] | Extensional equality of predicates |
//! | [`with_depth_limit`] | Diagnostic recursion bound |
//! | [`catalog`] | Named reference predicates |
//!
//! `equal` is `for_every` on agreement, `for_every` is `for_some` on the
//! negation, and `for_some` and `find` are defined in terms of each other:
//! `for_some(p)` runs `p` on the very sequence `find(p)` is building.
//!
//! # Precondition
//!
//! Every predicate must be *continuous*: on each input it terminates on, its
//! answer depends on finitely many bits. This is not checked. A predicate
//! that inspects unboundedly many bits makes the quantifiers recurse until
//! the stack is exhausted; [`with_depth_limit`] turns that into an error
//! while testing.
//!
//! # Example
//!
//! ```
//! use cantor::{equal, find, for_every, for_some, Predicate};
//!
//! let p = Predicate::new(|s| s[3] && !s[4] && s[9]);
//! assert!(for_some(&p));
//! assert!(!for_every(&p));
//!
//! let w = find(&p);
//! assert!(p.test(&w));
//! assert_eq!(w.render(10), "[___X_____X...]");
//!
//! let q = Predicate::new(|s| !(!s[9] || s[4] || !s[3]));
//! assert!(equal(&p, &q));
//! ```
//!
//! # Threading
//!
//! Sequences and predicates are `Rc`-backed and stay on the thread that
//! built them. All evaluation is synchronous recursion.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

// Lazy sequences and prefixing
pub mod sequence;

// Type-erased predicates and their combinators
pub mod predicate;

// for_some / for_every
pub mod quantifier;

// find / search
pub mod search;

// Extensional equality
pub mod equality;

// Diagnostic depth guard
pub mod guard;

// Reference predicates
pub mod catalog;

pub mod error;

pub use equality::{equal, try_equal};
pub use error::{CatalogError, SearchError};
pub use guard::with_depth_limit;
pub use predicate::Predicate;
pub use quantifier::{for_every, for_some, try_for_every, try_for_some};
pub use search::{find, search, try_search};
pub use sequence::Sequence;
