//! Wire records returned by the Jira REST API and the run summary

use crate::report::RunCounters;
use serde::{Deserialize, Serialize};

/// An agile board
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Numeric board identifier
    pub id: u64,
    /// Display name
    pub name: String,
}

/// Envelope of `GET /rest/agile/1.0/board`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BoardList {
    /// Boards in server order
    #[serde(default)]
    pub values: Vec<Board>,
}

/// A sprint on a board
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    /// Numeric sprint identifier
    pub id: u64,
    /// Display name
    pub name: String,
}

/// Envelope of `GET /rest/agile/1.0/board/{id}/sprint`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SprintList {
    /// Sprints in server order
    #[serde(default)]
    pub values: Vec<Sprint>,
}

/// Issue type reference embedded in issue fields
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueType {
    /// Type name, e.g. "Task" or "Bug"
    pub name: String,
}

/// A file attached to an issue
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Original filename
    pub filename: String,
    /// URL serving the raw bytes
    #[serde(rename = "content")]
    pub content_url: String,
}

/// The subset of issue fields the pipeline reads
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueFields {
    /// Issue type
    #[serde(rename = "issuetype", default)]
    pub issue_type: IssueType,
    /// Headline used to name downloaded files
    #[serde(default)]
    pub summary: String,
    /// Attachments (only present on the single-issue resource)
    #[serde(rename = "attachment", default)]
    pub attachments: Vec<Attachment>,
}

/// An issue as listed in a sprint page or fetched individually
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue key, e.g. "PROJ-123"
    pub key: String,
    /// Issue fields
    pub fields: IssueFields,
}

/// Detail resource `GET /rest/api/2/issue/{key}`
pub type IssueDetail = Issue;

/// One page of `GET /rest/agile/1.0/sprint/{id}/issue`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct IssuePage {
    /// Offset of the first issue in this page
    #[serde(rename = "startAt", default)]
    pub start_at: usize,
    /// Page size the server applied
    #[serde(rename = "maxResults", default)]
    pub max_results: usize,
    /// Total issues in the sprint, when reported
    #[serde(default)]
    pub total: Option<usize>,
    /// Issues on this page
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// What a finished run did
///
/// Returned by [`crate::SprintDownloader::start`] so callers can tell a clean
/// run from one that skipped work.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Matched-issue and download counts, as written to the report
    pub counters: RunCounters,
    /// Sprint pages requested
    pub pages_fetched: u64,
    /// Pagination stopped on a failed page instead of a short one
    pub pagination_interrupted: bool,
    /// Matching issues whose detail could not be fetched or decoded
    pub issues_skipped: u64,
    /// Matching attachments that were not written
    pub downloads_skipped: u64,
}

impl RunSummary {
    /// True when every page, issue and attachment was processed
    pub fn is_clean(&self) -> bool {
        !self.pagination_interrupted && self.issues_skipped == 0 && self.downloads_skipped == 0
    }
}
