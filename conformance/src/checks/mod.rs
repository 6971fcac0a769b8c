//! Conformance checks, grouped by what they exercise.

pub mod catalog;
pub mod prefix;
pub mod scenarios;

use cantor::with_depth_limit;
use tracing::trace;

use crate::report::TestResult;
use crate::SuiteConfig;

/// Runs one check under the configured depth limit.
///
/// A tripped limit becomes a failure for `validator` whose detail line
/// carries the search error.
pub(crate) fn guarded<T>(
    config: &SuiteConfig,
    validator: &str,
    message: &str,
    check: impl FnOnce() -> T,
) -> Result<T, TestResult> {
    trace!(validator, message, "running check");
    with_depth_limit(config.depth_limit, check).map_err(|err| {
        TestResult::fail_with_details(
            validator,
            format!("{message}: search aborted"),
            vec![err.to_string()],
        )
    })
}

/// Runs a boolean check under the depth limit and reports pass or fail.
pub(crate) fn expect(
    config: &SuiteConfig,
    validator: &str,
    message: &str,
    check: impl FnOnce() -> bool,
) -> TestResult {
    match guarded(config, validator, message, check) {
        Ok(ok) => TestResult::check(validator, message, ok),
        Err(failure) => failure,
    }
}
