//! Catalogue-wide properties.
//!
//! - Reflexivity: every predicate equals a distinct handle wrapping it.
//! - Satisfiability: a predicate not equal to the always-false predicate
//!   is satisfied by `find`; otherwise `for_some` is false.
//! - Discrimination: no two distinct catalogue predicates are equal.

use cantor::catalog::{self, Entry};
use cantor::{equal, find, for_some, Predicate};

use super::expect;
use crate::report::{ConformanceReport, TestResult};
use crate::SuiteConfig;

/// Validator name for reflexivity checks.
pub const REFLEXIVE: &str = "catalog/reflexive";
/// Validator name for satisfiability checks.
pub const SATISFIABLE: &str = "catalog/satisfiable";
/// Validator name for discrimination checks.
pub const DISTINCT: &str = "catalog/distinct";

/// Validates the catalogue properties.
pub fn validate(config: &SuiteConfig) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let entries = catalog::entries();

    for entry in &entries {
        report.push(reflexive(config, entry));
        report.push(satisfiable(config, entry));
    }

    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            let message = format!("{} != {}", a.name, b.name);
            report.push(expect(config, DISTINCT, &message, || {
                !equal(&a.predicate, &b.predicate) && !equal(&b.predicate, &a.predicate)
            }));
        }
    }

    report
}

fn reflexive(config: &SuiteConfig, entry: &Entry) -> TestResult {
    let inner = entry.predicate.clone();
    let wrapped = Predicate::new(move |s| inner.test(s));
    let message = format!("{} equals a wrapped copy of itself", entry.name);
    expect(config, REFLEXIVE, &message, || {
        equal(&entry.predicate, &entry.predicate) && equal(&entry.predicate, &wrapped)
    })
}

fn satisfiable(config: &SuiteConfig, entry: &Entry) -> TestResult {
    let p = &entry.predicate;
    let message = format!("{} has a witness unless always false", entry.name);
    expect(config, SATISFIABLE, &message, || {
        if equal(p, &catalog::always_false()) {
            !for_some(p)
        } else {
            p.test(&find(p))
        }
    })
}
