use config::{Config, ConfigError, Environment};
use serde_derive::Deserialize;
use tracing::debug;

/// Runtime configuration, resolved once at startup and passed into the flow.
///
/// Everything comes from the environment: CI provides the ambient `GITHUB_*`
/// context, the workflow provides the token and the bug-report repository.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// `GITHUB_TOKEN`: token able to search issues and close them in the
    /// bug-report repository.
    #[serde(default)]
    pub github_token: String,
    /// `BUG_REPORT_REPO`: name of the repository holding the bug report
    /// issues.
    #[serde(default)]
    pub bug_report_repo: String,
    /// `GITHUB_REPOSITORY_OWNER`: owning account or organization.
    #[serde(default)]
    pub github_repository_owner: String,
    /// `GITHUB_HEAD_REF`: head branch of the triggering pull request; empty
    /// when the event carries no branch.
    #[serde(default)]
    pub github_head_ref: String,
    /// `GITHUB_API_URL`: API base URL override for GitHub Enterprise
    /// installs. Defaults to the public endpoint.
    pub github_api_url: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        debug!("loading settings from the environment");

        let config = Config::builder()
            .add_source(Environment::default())
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// The token and the repository name must be present before any network
    /// call is made.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.github_token.is_empty() {
            return Err(ConfigError::Message(
                "GITHUB_TOKEN environment variable is not set or empty".to_string(),
            ));
        }
        if self.bug_report_repo.is_empty() {
            return Err(ConfigError::Message(
                "BUG_REPORT_REPO environment variable is not set or empty".to_string(),
            ));
        }
        Ok(())
    }
}
