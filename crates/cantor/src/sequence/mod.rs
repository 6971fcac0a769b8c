//! Lazy infinite bit sequences.
//!
//! A [`Sequence`] is a point of Cantor space: an infinite list of booleans
//! that is never stored. It is a shared handle to a pure `index -> bit`
//! function, so querying an index runs the function on demand and cloning a
//! sequence only bumps a reference count.
//!
//! Sequences compose by prefixing. `Sequence::prepend(&[b0, .., bn], &c)`
//! answers indices below `n + 1` from the prefix and forwards every higher
//! index to `c`, shifted down. The continuation is referenced, not copied.
//!
//! # Example
//!
//! ```
//! use cantor::Sequence;
//!
//! let ones = Sequence::constant(true);
//! let seq = Sequence::prepend(&[false, true, false], &ones);
//!
//! assert_eq!(seq.take(5), vec![false, true, false, true, true]);
//! assert!(seq[100]);
//! assert_eq!(seq.render(6), "[_X_XXX...]");
//! ```

use std::fmt;
use std::ops::Index;
use std::rc::Rc;

/// An infinite, immutable sequence of bits evaluated on demand.
///
/// Querying the same index twice always yields the same bit, but nothing is
/// memoized: each query re-runs the underlying function.
#[derive(Clone)]
pub struct Sequence {
    bits: Rc<dyn Fn(usize) -> bool>,
}

impl Sequence {
    /// Creates a sequence from an index-to-bit function.
    ///
    /// The function must be pure; callers are free to query any index any
    /// number of times.
    ///
    /// # Example
    ///
    /// ```
    /// use cantor::Sequence;
    ///
    /// let evens = Sequence::new(|i| i % 2 == 0);
    /// assert!(evens.bit(0));
    /// assert!(!evens.bit(7));
    /// ```
    #[must_use]
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(usize) -> bool + 'static,
    {
        Self { bits: Rc::new(f) }
    }

    /// Creates the sequence with `bit` at every index.
    #[must_use]
    pub fn constant(bit: bool) -> Self {
        Self::new(move |_| bit)
    }

    /// Returns the bit at index `i`.
    ///
    /// This is the only way a sequence is ever observed. `seq[i]` is
    /// shorthand for the same query.
    #[inline]
    #[must_use]
    pub fn bit(&self, i: usize) -> bool {
        (self.bits)(i)
    }

    /// Returns the sequence `prefix ++ seq`.
    ///
    /// For `i < prefix.len()` the result is `prefix[i]`, otherwise it is
    /// `seq[i - prefix.len()]`. An empty prefix returns a handle to `seq`
    /// itself.
    ///
    /// # Example
    ///
    /// ```
    /// use cantor::Sequence;
    ///
    /// let zeros = Sequence::constant(false);
    /// let seq = Sequence::prepend(&[true, true], &zeros);
    /// assert_eq!(seq.take(4), vec![true, true, false, false]);
    /// ```
    #[must_use]
    pub fn prepend(prefix: &[bool], seq: &Sequence) -> Self {
        match prefix {
            [] => seq.clone(),
            [bit] => Self::cons(*bit, seq),
            _ => {
                let prefix: Rc<[bool]> = Rc::from(prefix);
                let rest = seq.clone();
                Self::new(move |i| match prefix.get(i) {
                    Some(&bit) => bit,
                    None => rest.bit(i - prefix.len()),
                })
            }
        }
    }

    /// Returns the sequence `[bit] ++ seq`.
    #[must_use]
    pub fn cons(bit: bool, seq: &Sequence) -> Self {
        let rest = seq.clone();
        Self::new(move |i| if i == 0 { bit } else { rest.bit(i - 1) })
    }

    /// Evaluates the first `n` bits.
    #[must_use]
    pub fn take(&self, n: usize) -> Vec<bool> {
        (0..n).map(|i| self.bit(i)).collect()
    }

    /// Renders the first `precision` bits as `X` (set) and `_` (clear).
    ///
    /// ```
    /// use cantor::Sequence;
    ///
    /// let seq = Sequence::new(|i| i % 3 == 0);
    /// assert_eq!(seq.render(7), "[X__X__X...]");
    /// assert_eq!(seq.render(0), "[...]");
    /// ```
    #[must_use]
    pub fn render(&self, precision: usize) -> String {
        let mut out = String::with_capacity(precision + 5);
        out.push('[');
        out.extend((0..precision).map(|i| if self.bit(i) { 'X' } else { '_' }));
        out.push_str("...]");
        out
    }
}

impl Index<usize> for Sequence {
    type Output = bool;

    #[inline]
    fn index(&self, i: usize) -> &bool {
        if self.bit(i) {
            &true
        } else {
            &false
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, ...]", self.bit(0), self.bit(1), self.bit(2))
    }
}

// Debug must not force evaluation: a witness sequence may run a search on
// every query.
impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence").finish_non_exhaustive()
    }
}
