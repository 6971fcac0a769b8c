//! Diagnostic recursion-depth guard.
//!
//! The quantifiers carry no depth limit: on a predicate that is not
//! continuous they recurse until the stack runs out. For testing such
//! predicates, [`with_depth_limit`] arms a per-thread limit on the number of
//! simultaneously active search frames. When the limit is hit, evaluation
//! unwinds out of the guarded closure and the call returns
//! [`SearchError::DepthExceeded`].
//!
//! This is a testing aid only. A predicate that loops without ever querying
//! its input is out of reach of any depth guard.
//!
//! # Example
//!
//! ```
//! use cantor::{for_some, with_depth_limit, Predicate, SearchError};
//!
//! // Asks for every index to be set: not continuous.
//! let everywhere = Predicate::new(|s| (0..).all(|i| s[i]));
//! assert_eq!(
//!     with_depth_limit(32, || for_some(&everywhere)),
//!     Err(SearchError::DepthExceeded { limit: 32 }),
//! );
//!
//! let first = Predicate::new(|s| s[0]);
//! assert_eq!(with_depth_limit(32, || for_some(&first)), Ok(true));
//! ```

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use crate::error::SearchError;

#[derive(Clone, Copy)]
struct Depth {
    limit: usize,
    active: usize,
}

/// Unwind payload carried from the tripping frame to [`with_depth_limit`].
struct Tripped {
    limit: usize,
}

thread_local! {
    static DEPTH: Cell<Option<Depth>> = const { Cell::new(None) };
}

/// An active search frame. Released on drop, including while unwinding.
pub(crate) struct Frame {
    counted: bool,
}

/// Enters a search frame.
///
/// With no guard armed this is a single thread-local read. With a guard
/// armed and already at its limit, this unwinds to the guard.
pub(crate) fn enter() -> Frame {
    let state = DEPTH.with(|cell| match cell.get() {
        None => Ok(false),
        Some(depth) if depth.active >= depth.limit => Err(depth.limit),
        Some(depth) => {
            cell.set(Some(Depth {
                active: depth.active + 1,
                ..depth
            }));
            Ok(true)
        }
    });

    match state {
        Ok(counted) => Frame { counted },
        Err(limit) => panic::resume_unwind(Box::new(Tripped { limit })),
    }
}

impl Drop for Frame {
    fn drop(&mut self) {
        if !self.counted {
            return;
        }
        // Counted frames are dropped under the guard that counted them.
        DEPTH.with(|cell| {
            if let Some(depth) = cell.get() {
                cell.set(Some(Depth {
                    active: depth.active - 1,
                    ..depth
                }));
            }
        });
    }
}

/// Restores the previously armed guard (or none) on drop.
struct Rearm(Option<Depth>);

impl Drop for Rearm {
    fn drop(&mut self) {
        DEPTH.with(|cell| cell.set(self.0));
    }
}

/// Runs `f` with at most `limit` search frames active at once.
///
/// Guards nest: the innermost armed limit applies to searches started inside
/// it, and the enclosing guard is restored when `f` returns or unwinds.
/// Panics raised by `f` itself are propagated unchanged.
///
/// Witness sequences returned out of `f` are lazy; queries made on them
/// after this call returns run unguarded.
///
/// # Errors
///
/// Returns [`SearchError::DepthExceeded`] if a search inside `f` nests
/// deeper than `limit`.
pub fn with_depth_limit<T, F>(limit: usize, f: F) -> Result<T, SearchError>
where
    F: FnOnce() -> T,
{
    let previous = DEPTH.with(|cell| cell.replace(Some(Depth { limit, active: 0 })));
    let _rearm = Rearm(previous);
    debug!(limit, "depth guard armed");

    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<Tripped>() {
            Ok(tripped) => {
                debug!(limit = tripped.limit, "depth guard tripped");
                Err(SearchError::DepthExceeded {
                    limit: tripped.limit,
                })
            }
            Err(other) => panic::resume_unwind(other),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active() -> Option<usize> {
        DEPTH.with(|cell| cell.get().map(|d| d.active))
    }

    #[test]
    fn test_unarmed_frames_are_free() {
        assert_eq!(active(), None);
        let frame = enter();
        assert!(!frame.counted);
        drop(frame);
        assert_eq!(active(), None);
    }

    #[test]
    fn test_frames_are_counted_and_released() {
        let result = with_depth_limit(4, || {
            let a = enter();
            let b = enter();
            let during = active();
            drop(b);
            drop(a);
            (during, active())
        });
        assert_eq!(result, Ok((Some(2), Some(0))));
        assert_eq!(active(), None);
    }

    #[test]
    fn test_trips_at_limit() {
        let result = with_depth_limit(3, || {
            let _frames: Vec<Frame> = (0..10).map(|_| enter()).collect();
        });
        assert_eq!(result, Err(SearchError::DepthExceeded { limit: 3 }));
        assert_eq!(active(), None);
    }

    #[test]
    fn test_zero_limit_trips_on_first_frame() {
        let result = with_depth_limit(0, || drop(enter()));
        assert_eq!(result, Err(SearchError::DepthExceeded { limit: 0 }));
    }

    #[test]
    fn test_nested_guard_restores_outer() {
        let result = with_depth_limit(8, || {
            let _outer = enter();
            let inner = with_depth_limit(1, || {
                let _a = enter();
                let _b = enter();
            });
            (inner, active())
        });
        assert_eq!(
            result,
            Ok((Err(SearchError::DepthExceeded { limit: 1 }), Some(1)))
        );
    }

    #[test]
    fn test_outer_frame_released_after_inner_guard() {
        let result = with_depth_limit(8, || {
            let outer = enter();
            let inner = with_depth_limit(4, || {
                let _a = enter();
                active()
            });
            let before = active();
            drop(outer);
            (inner, before, active())
        });
        assert_eq!(result, Ok((Ok(Some(1)), Some(1), Some(0))));
    }

    #[test]
    fn test_foreign_panic_propagates() {
        let caught = panic::catch_unwind(|| {
            let _ = with_depth_limit::<(), _>(8, || panic::resume_unwind(Box::new("boom")));
        });
        let payload = caught.err().and_then(|p| p.downcast::<&str>().ok());
        assert_eq!(payload.as_deref(), Some(&"boom"));
        assert_eq!(active(), None);
    }
}
