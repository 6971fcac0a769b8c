//! End-to-end scenarios with known answers.

use cantor::catalog::{self, pi_parity_bits, PI_DIGITS};
use cantor::{equal, find, for_some, Predicate};

use super::{expect, guarded};
use crate::report::{ConformanceReport, TestResult};
use crate::SuiteConfig;

/// Validator name prefix for scenario checks.
pub const VALIDATOR: &str = "scenario";

/// Runs every scenario.
pub fn validate(config: &SuiteConfig) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    constants(config, &mut report);
    first_bit(config, &mut report);
    specific_bits(config, &mut report);
    pi_parity(config, &mut report);
    reformulation(config, &mut report);
    report
}

fn constants(config: &SuiteConfig, report: &mut ConformanceReport) {
    let v = format!("{VALIDATOR}/constants");
    report.push(expect(config, &v, "for_some(true) is true", || {
        for_some(&catalog::always_true())
    }));
    report.push(expect(config, &v, "for_some(false) is false", || {
        !for_some(&catalog::always_false())
    }));
}

fn first_bit(config: &SuiteConfig, report: &mut ConformanceReport) {
    let v = format!("{VALIDATOR}/simple");
    let p = catalog::simple();
    report.push(expect(config, &v, "find(s[0])[0] is true", || find(&p)[0]));
    report.push(expect(config, &v, "simple equals s => s[0]", || {
        equal(&p, &Predicate::new(|s| s[0]))
    }));
}

fn specific_bits(config: &SuiteConfig, report: &mut ConformanceReport) {
    let v = format!("{VALIDATOR}/specific");
    let p = catalog::specific();
    let message = "witness has w[3], !w[4], w[9] and satisfies the predicate";
    let outcome = guarded(config, &v, message, || {
        let w = find(&p);
        let bits = (w[3], w[4], w[9]);
        (bits, p.test(&w))
    });
    report.push(match outcome {
        Ok(((true, false, true), true)) => TestResult::pass(&v, message),
        Ok(((w3, w4, w9), satisfied)) => TestResult::fail_with_details(
            &v,
            message,
            vec![format!(
                "w[3]={w3} w[4]={w4} w[9]={w9}, predicate holds: {satisfied}"
            )],
        ),
        Err(failure) => failure,
    });
}

fn pi_parity(config: &SuiteConfig, report: &mut ConformanceReport) {
    let v = format!("{VALIDATOR}/pi-parity");
    let p = catalog::pi_parity();
    let expected = pi_parity_bits();

    report.push(expect(config, &v, "pi-parity is satisfiable", || for_some(&p)));

    let message = "witness matches the parity bits of pi";
    let outcome = guarded(config, &v, message, || find(&p).take(PI_DIGITS));
    report.push(match outcome {
        Ok(bits) if bits == expected => TestResult::pass(&v, message),
        Ok(bits) => TestResult::fail_with_details(
            &v,
            message,
            vec![format!("got {bits:?}"), format!("expected {expected:?}")],
        ),
        Err(failure) => failure,
    });

    report.push(expect(config, &v, "pi-parity differs from true", || {
        !equal(&p, &catalog::always_true())
    }));
    report.push(expect(config, &v, "pi-parity differs from false", || {
        !equal(&p, &catalog::always_false())
    }));
}

fn reformulation(config: &SuiteConfig, report: &mut ConformanceReport) {
    let v = format!("{VALIDATOR}/medium");
    report.push(expect(
        config,
        &v,
        "medium equals its reformulation",
        || equal(&catalog::medium(), &catalog::medium_reformulated()),
    ));
}
