//! Prefix correctness of `Sequence::prepend`.
//!
//! For every prefix `b0..bn-1` and continuation `c`, index `i` of
//! `prepend(b, c)` must be `bi` below `n` and `c[i - n]` from `n` on.

use cantor::Sequence;

use crate::report::{ConformanceReport, TestResult};

/// Validator name for prefix checks.
pub const VALIDATOR: &str = "sequence/prefix";

/// How far past the prefix each check looks.
const LOOKAHEAD: usize = 12;

/// Validates `prepend` against a fixed set of prefixes and continuations.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let prefixes: [&[bool]; 5] = [
        &[],
        &[true],
        &[false, true],
        &[true, true, false, true, false],
        &[false; 9],
    ];
    let continuations = [
        ("zeros", Sequence::constant(false)),
        ("ones", Sequence::constant(true)),
        ("alternating", Sequence::new(|i| i % 2 == 1)),
    ];

    for prefix in prefixes {
        for (name, continuation) in &continuations {
            let seq = Sequence::prepend(prefix, continuation);
            let mismatches: Vec<String> = (0..prefix.len() + LOOKAHEAD)
                .filter_map(|i| {
                    let expected = prefix
                        .get(i)
                        .copied()
                        .unwrap_or_else(|| continuation[i - prefix.len()]);
                    (seq[i] != expected)
                        .then(|| format!("index {i}: got {}, expected {expected}", seq[i]))
                })
                .collect();

            let message = format!("prepend({}) ++ {name}", render_prefix(prefix));
            if mismatches.is_empty() {
                report.push(TestResult::pass(VALIDATOR, message));
            } else {
                report.push(TestResult::fail_with_details(VALIDATOR, message, mismatches));
            }
        }
    }

    report
}

fn render_prefix(prefix: &[bool]) -> String {
    prefix.iter().map(|&b| if b { 'X' } else { '_' }).collect()
}
