//! Environment-driven tuning for property-test suites.
//!
//! `PROGTEST_CASES` overrides the number of cases per property and
//! `WAYMARK_PBT_FORK` toggles running cases in forked subprocesses. Invalid
//! values are logged and ignored.

use std::env;
use std::num::ParseIntError;

use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const WAYMARK_PBT_FORK_ENV_KEY: &str = "WAYMARK_PBT_FORK";

/// Reason an override was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverrideError {
    /// The case count was not an unsigned integer.
    #[error("invalid case count: {0}")]
    Cases(#[from] ParseIntError),
    /// The case count was zero.
    #[error("case count must be greater than zero")]
    ZeroCases,
    /// The fork flag was not a recognised boolean spelling.
    #[error("expected one of true/false/1/0/yes/no/on/off")]
    Flag,
}

/// Case count and fork setting for one property-test suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads the profile from the environment, falling back to the defaults.
    ///
    /// # Examples
    /// ```
    /// use waymark_test_support::proptest_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: read_override(PROGTEST_CASES_ENV_KEY, parse_cases).unwrap_or(default_cases),
            fork: read_override(WAYMARK_PBT_FORK_ENV_KEY, parse_flag).unwrap_or(default_fork),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cases(&self) -> u32 { self.cases }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub const fn fork(&self) -> bool { self.fork }
}

fn read_override<T>(key: &'static str, parse: fn(&str) -> Result<T, OverrideError>) -> Option<T> {
    let raw = env::var(key).ok()?;
    parse(&raw)
        .inspect_err(|reason| {
            tracing::warn!(
                env = key,
                raw = %raw,
                %reason,
                "ignoring invalid property-test override",
            );
        })
        .ok()
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>()? {
        0 => Err(OverrideError::ZeroCases),
        cases => Ok(cases),
    }
}

fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::Flag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use rstest::rstest;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Sets or clears a variable for the guard's lifetime.
    struct ScopedVar {
        key: &'static str,
        original: Option<String>,
    }

    impl ScopedVar {
        fn new(key: &'static str, value: Option<&str>) -> Self {
            let original = env::var(key).ok();
            // SAFETY: tests serialize access with ENV_LOCK.
            unsafe { apply(key, value) };
            Self { key, original }
        }
    }

    impl Drop for ScopedVar {
        fn drop(&mut self) {
            // SAFETY: tests serialize access with ENV_LOCK.
            unsafe { apply(self.key, self.original.as_deref()) };
        }
    }

    unsafe fn apply(key: &str, value: Option<&str>) {
        // SAFETY: callers hold ENV_LOCK.
        unsafe {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }

    fn load_with(cases: Option<&str>, fork: Option<&str>, default_fork: bool) -> ProptestRunProfile {
        let _lock = ENV_LOCK.lock().expect("env lock");
        let _cases = ScopedVar::new(PROGTEST_CASES_ENV_KEY, cases);
        let _fork = ScopedVar::new(WAYMARK_PBT_FORK_ENV_KEY, fork);
        ProptestRunProfile::load(64, default_fork)
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let profile = load_with(None, None, false);
        assert_eq!(profile.cases(), 64);
        assert!(!profile.fork());
    }

    #[rstest]
    #[case("1", 1)]
    #[case(" 250 ", 250)]
    #[case("25000", 25_000)]
    fn valid_case_overrides_apply(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(load_with(Some(raw), None, false).cases(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("many")]
    fn invalid_case_overrides_fall_back(#[case] raw: &str) {
        assert_eq!(load_with(Some(raw), None, false).cases(), 64);
    }

    #[rstest]
    #[case("true", true)]
    #[case("ON", true)]
    #[case("1", true)]
    #[case("no", false)]
    #[case("False", false)]
    #[case("0", false)]
    fn valid_fork_overrides_apply(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(load_with(None, Some(raw), !expected).fork(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("maybe")]
    #[case("2")]
    fn invalid_fork_overrides_fall_back(#[case] raw: &str) {
        assert!(load_with(None, Some(raw), true).fork());
    }

    #[test]
    fn zero_cases_is_reported_distinctly() {
        assert_eq!(parse_cases("0"), Err(OverrideError::ZeroCases));
    }
}
