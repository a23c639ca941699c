use octocrab::Octocrab;
use tracing::info;

use crate::error::{RelbotError, Result};
use crate::integrations::github;
use crate::release::ReleaseVersion;
use crate::settings::Settings;

/// Outcome of a successful run.
#[derive(Debug)]
pub struct ClosedBugReport {
    pub issue_id: String,
    pub issue_title: String,
    /// Issue id echoed back by the close mutation.
    pub confirmation: String,
}

/// Drives one run end to end: extracts the version from the triggering
/// branch, finds the open bug report issue, checks its title, and closes it.
///
/// Every failed check is terminal. The close mutation is the only mutating
/// call and the last thing that runs.
pub async fn close_bug_report_issue(
    octocrab: &Octocrab,
    settings: &Settings,
) -> Result<ClosedBugReport> {
    let version = ReleaseVersion::from_branch(&settings.github_head_ref)?;
    let expected_title = version.bug_report_title();
    info!(
        "release {version}: looking for open issue '{expected_title}' in {}/{}",
        settings.github_repository_owner, settings.bug_report_repo
    );

    let issue = github::find_open_bug_report_issue(
        octocrab,
        &settings.github_repository_owner,
        &settings.bug_report_repo,
        &version,
    )
    .await?
    .ok_or_else(|| RelbotError::IssueNotFound(expected_title.clone()))?;

    if !issue.title_matches(&expected_title) {
        return Err(RelbotError::TitleMismatch {
            expected: expected_title,
            found: issue.title,
        });
    }

    let confirmation = github::close_issue(octocrab, &issue.id).await?;
    info!(
        "closed bug report issue {} (confirmation {confirmation})",
        issue.id
    );

    Ok(ClosedBugReport {
        issue_id: issue.id,
        issue_title: issue.title,
        confirmation,
    })
}
