use thiserror::Error;

/// Unified error type for the whole run. Every stage fails through one of
/// these variants and every failure is terminal.
#[derive(Error, Debug)]
pub enum RelbotError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("cannot extract version from branch name '{0}'")]
    VersionExtraction(String),

    #[error("invalid version format '{0}'")]
    VersionFormat(String),

    #[error("no open bug report issue titled '{0}' found")]
    IssueNotFound(String),

    #[error("bug report issue title '{found}' does not match expected '{expected}'")]
    TitleMismatch { expected: String, found: String },

    #[error("GitHub API request failed: {0}")]
    Api(#[from] octocrab::Error),

    #[error("GitHub GraphQL error: {0}")]
    GraphQl(String),
}

/// Convenience type alias for Results in relbot
pub type Result<T> = std::result::Result<T, RelbotError>;

impl RelbotError {
    /// Create a GraphQL error with context
    pub fn graphql(msg: impl Into<String>) -> Self {
        RelbotError::GraphQl(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_extraction_display() {
        let err = RelbotError::VersionExtraction("feature/login".to_string());
        assert_eq!(
            err.to_string(),
            "cannot extract version from branch name 'feature/login'"
        );
    }

    #[test]
    fn test_version_format_display() {
        let err = RelbotError::VersionFormat("1.2".to_string());
        assert_eq!(err.to_string(), "invalid version format '1.2'");
    }

    #[test]
    fn test_issue_not_found_display() {
        let err = RelbotError::IssueNotFound("v1.2.3 Bug Report".to_string());
        assert!(err.to_string().contains("no open bug report issue"));
        assert!(err.to_string().contains("v1.2.3 Bug Report"));
    }

    #[test]
    fn test_title_mismatch_display() {
        let err = RelbotError::TitleMismatch {
            expected: "v1.2.3 Bug Report".to_string(),
            found: "v1.2.4 Bug Report".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("v1.2.4 Bug Report"));
        assert!(msg.contains("v1.2.3 Bug Report"));
    }

    #[test]
    fn test_error_from_config() {
        let cfg_err = config::ConfigError::Message("GITHUB_TOKEN is empty".to_string());
        let err: RelbotError = cfg_err.into();
        assert_eq!(
            err.to_string(),
            "configuration error: GITHUB_TOKEN is empty"
        );
    }

    #[test]
    fn test_graphql_constructor() {
        let err = RelbotError::graphql("search returned no data");
        assert_eq!(
            err.to_string(),
            "GitHub GraphQL error: search returned no data"
        );
    }
}
