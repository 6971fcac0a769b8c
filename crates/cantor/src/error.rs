//! Error types.
//!
//! The quantifiers themselves never fail: on a continuous predicate they
//! return, on any other they diverge. These errors come from the opt-in
//! diagnostic depth guard and from catalogue lookups.

use thiserror::Error;

/// Error from a guarded search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The search nested more frames deep than the armed limit.
    ///
    /// Either the predicate is not continuous, or it inspects indices
    /// beyond what the limit allows.
    #[error("search nested deeper than {limit} frames (predicate may not be continuous)")]
    DepthExceeded {
        /// The limit that was armed.
        limit: usize,
    },
}

/// Error when looking up a catalogue predicate by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No predicate with this name exists.
    #[error("unknown predicate `{name}`")]
    UnknownPredicate {
        /// The name that was looked up.
        name: String,
    },
}
