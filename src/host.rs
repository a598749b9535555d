//! Host build information.
//!
//! The running version and build stamp are captured once at startup and
//! injected into the app, rather than read from ambient process state, so
//! tests can substitute their own values.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use semver::Version;

/// Immutable facts about the running binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    /// Version of the running binary.
    pub version: Version,
    /// When (or how) the binary was built.
    pub build: BuildStamp,
}

/// Build-time marker injected by `build.rs`.
///
/// Either a fixed human-readable label (displayed verbatim) or the moment
/// the binary was compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStamp {
    /// Pre-formatted label, e.g. "nightly". Shown as-is.
    Label(String),
    /// Compile time; rendered as a humanized age.
    Timestamp(DateTime<Utc>),
}

impl HostInfo {
    /// Read version and build stamp from the compile-time environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded version or build epoch cannot be
    /// parsed. Both are generated by Cargo and `build.rs`, so this only
    /// fires on a corrupted build.
    pub fn from_build_env() -> Result<Self> {
        let version = Version::parse(env!("CARGO_PKG_VERSION"))
            .context("Failed to parse running upcheck version")?;

        let build = if let Some(label) = option_env!("UPCHECK_BUILD_LABEL") {
            BuildStamp::Label(label.to_string())
        } else {
            let epoch: i64 = env!("UPCHECK_BUILD_EPOCH")
                .parse()
                .context("Failed to parse build epoch")?;
            let stamp = DateTime::from_timestamp(epoch, 0)
                .context("Build epoch out of range")?;
            BuildStamp::Timestamp(stamp)
        };

        Ok(Self { version, build })
    }
}

impl BuildStamp {
    /// Humanized age of the build relative to `now`.
    ///
    /// Labels are returned verbatim. Timestamps render as the largest whole
    /// unit of elapsed time suffixed with "ago", e.g. "3d ago". Clock skew
    /// (a build stamp in the future) clamps to zero.
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> String {
        match self {
            Self::Label(label) => label.clone(),
            Self::Timestamp(built) => {
                let elapsed = (now - *built).max(Duration::zero());
                format!("{} ago", format_short(elapsed))
            }
        }
    }
}

/// Abbreviated single-unit duration: "3d", "2h", "5m" or "12s".
fn format_short(elapsed: Duration) -> String {
    let secs = elapsed.num_seconds().max(0);
    if secs >= 86_400 {
        format!("{}d", secs / 86_400)
    } else if secs >= 3_600 {
        format!("{}h", secs / 3_600)
    } else if secs >= 60 {
        format!("{}m", secs / 60)
    } else {
        format!("{secs}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn at(epoch: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(epoch, 0).unwrap_or_else(Utc::now)
    }

    #[test]
    fn test_from_build_env_parses() {
        let host = HostInfo::from_build_env();
        assert!(host.is_ok());
        if let Ok(host) = host {
            assert!(host.version >= Version::new(0, 1, 0));
        }
    }

    #[test]
    fn test_label_displayed_verbatim() {
        let stamp = BuildStamp::Label("nightly".to_string());
        assert_eq!(stamp.age(at(1_000_000)), "nightly");
    }

    #[rstest]
    #[case(12, "12s ago")]
    #[case(59, "59s ago")]
    #[case(60, "1m ago")]
    #[case(7_200, "2h ago")]
    #[case(86_399, "23h ago")]
    #[case(259_200, "3d ago")]
    fn test_timestamp_age(#[case] elapsed: i64, #[case] expected: &str) {
        let built = at(1_000_000);
        let stamp = BuildStamp::Timestamp(built);
        assert_eq!(stamp.age(at(1_000_000 + elapsed)), expected);
    }

    #[test]
    fn test_future_build_clamps_to_zero() {
        let stamp = BuildStamp::Timestamp(at(2_000_000));
        assert_eq!(stamp.age(at(1_000_000)), "0s ago");
    }

    #[test]
    fn test_sub_second_age() {
        let stamp = BuildStamp::Timestamp(at(1_000_000));
        assert_eq!(stamp.age(at(1_000_000)), "0s ago");
    }
}
