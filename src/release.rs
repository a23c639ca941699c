use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{RelbotError, Result};

/// A release version captured from a `release/<major>.<minor>.<patch>` branch
/// name.
///
/// The value is the literal matched text, never re-parsed into numbers, so any
/// digit sequences (leading zeros included) pass through to the issue title
/// and search query untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion(String);

impl ReleaseVersion {
    /// Extracts the version from a release branch name.
    ///
    /// The branch must be exactly `release/` followed by three dot-separated
    /// digit groups. The captured group is then validated once more against
    /// the standalone version pattern; the two patterns must not drift apart.
    ///
    /// # Example
    /// ```ignore
    /// assert_eq!(ReleaseVersion::from_branch("release/1.2.3")?.as_str(), "1.2.3");
    /// ```
    pub fn from_branch(branch: &str) -> Result<Self> {
        lazy_static! {
            static ref BRANCH_RE: Regex = Regex::new(r"^release/(\d+\.\d+\.\d+)$").unwrap();
            static ref VERSION_RE: Regex = Regex::new(r"^\d+\.\d+\.\d+$").unwrap();
        }

        let captures = BRANCH_RE
            .captures(branch)
            .ok_or_else(|| RelbotError::VersionExtraction(branch.to_string()))?;
        let version = &captures[1];

        if !VERSION_RE.is_match(version) {
            return Err(RelbotError::VersionFormat(version.to_string()));
        }

        Ok(ReleaseVersion(version.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The title the release's bug report issue is expected to carry.
    pub fn bug_report_title(&self) -> String {
        format!("v{} Bug Report", self.0)
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_version_from_release_branch() {
        let version = ReleaseVersion::from_branch("release/1.2.3").unwrap();
        assert_eq!(version.as_str(), "1.2.3");
    }

    #[test]
    fn test_extracts_multi_digit_version() {
        let version = ReleaseVersion::from_branch("release/10.0.22").unwrap();
        assert_eq!(version.as_str(), "10.0.22");
    }

    #[test]
    fn test_accepts_any_digit_sequences() {
        for branch in ["release/0.0.1", "release/10.20.300", "release/01.2.3"] {
            assert!(
                ReleaseVersion::from_branch(branch).is_ok(),
                "expected {branch} to extract"
            );
        }
        // Leading zeros survive as captured.
        let version = ReleaseVersion::from_branch("release/01.2.3").unwrap();
        assert_eq!(version.as_str(), "01.2.3");
    }

    #[test]
    fn test_rejects_non_release_branches() {
        for branch in [
            "",
            "main",
            "feature/add-login",
            "release",
            "release/",
            "hotfix/1.2.3",
            "Release/1.2.3",
            "xrelease/1.2.3",
        ] {
            let err = ReleaseVersion::from_branch(branch).unwrap_err();
            assert!(
                matches!(err, RelbotError::VersionExtraction(_)),
                "expected extraction failure for {branch:?}, got {err}"
            );
        }
    }

    #[test]
    fn test_rejects_malformed_versions() {
        for branch in [
            "release/1.2",
            "release/1.2.3.4",
            "release/v1.2.3",
            "release/1.2.x",
            "release/1.2.3-rc1",
            "release/1.2.3/hotfix",
            "release/1.2.3 ",
        ] {
            assert!(
                ReleaseVersion::from_branch(branch).is_err(),
                "expected {branch:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_bug_report_title() {
        let version = ReleaseVersion::from_branch("release/2.5.0").unwrap();
        assert_eq!(version.bug_report_title(), "v2.5.0 Bug Report");
    }

    #[test]
    fn test_display_is_bare_version() {
        let version = ReleaseVersion::from_branch("release/1.2.3").unwrap();
        assert_eq!(version.to_string(), "1.2.3");
    }
}
