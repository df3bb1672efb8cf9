//! Proptest case count and fork settings read from the environment.
//!
//! Invalid overrides are logged with `tracing::warn!` and ignored, so a typo
//! in CI configuration never turns a run into zero cases.

use std::env;

/// Overrides the number of cases per property.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Runs each case in a forked subprocess when truthy.
pub const SPANWOOD_PBT_FORK_ENV_KEY: &str = "SPANWOOD_PBT_FORK";

/// Case count and fork flag for one property suite.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads overrides from the environment, falling back to the suite's
    /// own defaults.
    ///
    /// # Examples
    /// ```
    /// use spanwood_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_from_env(PROGTEST_CASES_ENV_KEY, parse_cases).unwrap_or(default_cases),
            fork: override_from_env(SPANWOOD_PBT_FORK_ENV_KEY, parse_flag).unwrap_or(default_fork),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub fn cases(&self) -> u32 { self.cases }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    #[rustfmt::skip]
    pub fn fork(&self) -> bool { self.fork }
}

fn override_from_env<T>(key: &'static str, parse: fn(&str) -> Result<T, &'static str>) -> Option<T> {
    let raw = env::var(key).ok()?;
    parse(raw.trim())
        .inspect_err(|reason| {
            tracing::warn!(env = key, raw = %raw, reason, "ignoring invalid property-test override");
        })
        .ok()
}

fn parse_cases(raw: &str) -> Result<u32, &'static str> {
    match raw.parse::<u32>() {
        Ok(0) => Err("case count must be positive"),
        Ok(cases) => Ok(cases),
        Err(_) => Err("case count must be a positive integer"),
    }
}

fn parse_flag(raw: &str) -> Result<bool, &'static str> {
    if ["1", "true", "yes", "on"].iter().any(|s| raw.eq_ignore_ascii_case(s)) {
        Ok(true)
    } else if ["0", "false", "no", "off"].iter().any(|s| raw.eq_ignore_ascii_case(s)) {
        Ok(false)
    } else {
        Err("expected 1/0, true/false, yes/no or on/off")
    }
}
