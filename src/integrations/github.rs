//! GitHub GraphQL operations: locate the open bug report issue, close it.

use octocrab::Octocrab;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::{RelbotError, Result};
use crate::release::ReleaseVersion;

/// Search document. The whole search expression is bound as one variable;
/// GitHub's `search` field takes it as a single string argument.
const FIND_ISSUE_QUERY: &str = r#"
query FindOpenBugReportIssue($searchQuery: String!) {
    search(query: $searchQuery, type: ISSUE, first: 1) {
        nodes {
            ... on Issue {
                id
                title
            }
        }
    }
}
"#;

const CLOSE_ISSUE_MUTATION: &str = r#"
mutation CloseBugReportIssue($issueId: ID!) {
    updateIssue(input: {id: $issueId, state: CLOSED}) {
        issue {
            id
        }
    }
}
"#;

/// An issue as returned by the search: the opaque node id plus its title.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueRef {
    pub id: String,
    pub title: String,
}

impl IssueRef {
    /// Case-insensitive title comparison, lowercasing both sides.
    pub fn title_matches(&self, expected: &str) -> bool {
        self.title.to_lowercase() == expected.to_lowercase()
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    search: SearchNodes,
}

#[derive(Debug, Deserialize)]
struct SearchNodes {
    nodes: Vec<IssueRef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CloseData {
    update_issue: UpdateIssuePayload,
}

#[derive(Debug, Deserialize)]
struct UpdateIssuePayload {
    issue: ClosedIssueNode,
}

#[derive(Debug, Deserialize)]
struct ClosedIssueNode {
    id: String,
}

/// Find the single open bug report issue for a release, if any.
///
/// Asks for at most one result. The expected title is quoted inside the
/// search expression so it matches as one literal phrase.
pub async fn find_open_bug_report_issue(
    octocrab: &Octocrab,
    owner: &str,
    repo: &str,
    version: &ReleaseVersion,
) -> Result<Option<IssueRef>> {
    let search_query = search_query(owner, repo, &version.bug_report_title());
    debug!("searching for bug report issue: {search_query}");

    let payload = json!({
        "query": FIND_ISSUE_QUERY,
        "variables": { "searchQuery": search_query },
    });

    let response: GraphQlResponse<SearchData> = octocrab.graphql(&payload).await?;
    let data = expect_data(response)?;

    Ok(data.search.nodes.into_iter().next())
}

/// Close the issue and return the id the mutation echoes back.
///
/// The echoed id is the run's confirmation token; it is logged by the caller
/// and not validated further.
pub async fn close_issue(octocrab: &Octocrab, issue_id: &str) -> Result<String> {
    debug!("closing issue {issue_id}");

    let payload = json!({
        "query": CLOSE_ISSUE_MUTATION,
        "variables": { "issueId": issue_id },
    });

    let response: GraphQlResponse<CloseData> = octocrab.graphql(&payload).await?;
    let data = expect_data(response)?;

    Ok(data.update_issue.issue.id)
}

fn search_query(owner: &str, repo: &str, title: &str) -> String {
    format!("repo:{owner}/{repo} is:issue is:open in:title \"{title}\"")
}

/// A response with entries in `errors`, or without `data`, is a failed call
/// even when the transport reported success.
fn expect_data<T>(response: GraphQlResponse<T>) -> Result<T> {
    if !response.errors.is_empty() {
        let messages: Vec<&str> = response
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect();
        return Err(RelbotError::graphql(messages.join("; ")));
    }
    response
        .data
        .ok_or_else(|| RelbotError::graphql("response carried no data"))
}
