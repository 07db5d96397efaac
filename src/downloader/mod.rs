//! Sprint attachment downloader split into focused submodules.
//!
//! The `SprintDownloader` struct and its methods are organized by stage:
//! - [`resolve`] - Board and active-sprint lookup by name
//! - [`pager`] - Sprint issue pagination and issue-type filtering
//! - [`attachments`] - Issue detail fetch and attachment filtering
//! - [`download`] - Attachment download, naming and report updates
//!
//! Every request is awaited before the next one starts; the run owns its
//! counters and threads them through the stages by `&mut`.

mod attachments;
mod download;
mod pager;
mod resolve;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;

pub use attachments::matching_attachments;
pub use pager::{is_last_page, matches_issue_type};
pub use resolve::{find_board, find_sprint};

use crate::config::Config;
use crate::error::Result;
use crate::http::{HttpFetch, ReqwestFetcher};
use crate::report::ProgressReport;
use crate::types::RunSummary;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Downloads keyword-matching attachments from the issues of an active sprint
///
/// # Examples
///
/// ```no_run
/// use sprint_dl::{Config, SprintDownloader};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config {
///         base_url: "https://your-domain.atlassian.net".to_string(),
///         username: "email@example.com".to_string(),
///         api_token: "api-token".to_string(),
///         board_name: "Team Board".to_string(),
///         sprint_keyword: "alpha".to_string(),
///         issue_type: "Task".to_string(),
///         attachment_keyword: "screenshot".to_string(),
///         ..Default::default()
///     };
///
///     let downloader = SprintDownloader::new(config)?;
///     let summary = downloader.start().await?;
///     println!("downloaded {} attachments", summary.counters.downloaded);
///     Ok(())
/// }
/// ```
pub struct SprintDownloader {
    /// Run configuration (read-only)
    pub(crate) config: Arc<Config>,
    /// Authenticated GET capability
    pub(crate) fetcher: Arc<dyn HttpFetch>,
    /// `report.txt` writer
    pub(crate) report: ProgressReport,
}

impl SprintDownloader {
    /// Create a downloader that talks to Jira over reqwest
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or the HTTP client cannot be created
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let fetcher = ReqwestFetcher::new(&config)?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    /// Create a downloader on top of any [`HttpFetch`] implementation
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn HttpFetch>) -> Self {
        let report = ProgressReport::new(config.report_path());
        Self {
            config: Arc::new(config),
            fetcher,
            report,
        }
    }

    /// The configuration this downloader runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the whole pipeline: resolve board, resolve sprint, page issues,
    /// scan attachments, download matches
    ///
    /// # Errors
    /// Returns [`crate::Error::BoardNotFound`] or [`crate::Error::SprintNotFound`]
    /// when resolution fails. Failures after that point are logged, counted in
    /// the returned [`RunSummary`] and never abort the run.
    pub async fn start(&self) -> Result<RunSummary> {
        let board_id = self.resolve_board(&self.config.board_name).await?;
        tracing::info!(board_id, board = %self.config.board_name, "Resolved board");

        let sprint_id = self
            .resolve_sprint(board_id, &self.config.sprint_keyword)
            .await?;
        tracing::info!(sprint_id, "Resolved active sprint");

        let mut summary = RunSummary::default();
        self.process_sprint_issues(sprint_id, &mut summary).await;

        tracing::info!(
            matched_issues = summary.counters.matched_issues,
            downloaded = summary.counters.downloaded,
            pages = summary.pages_fetched,
            issues_skipped = summary.issues_skipped,
            downloads_skipped = summary.downloads_skipped,
            "Sprint processed"
        );
        Ok(summary)
    }

    /// GET `url`, require a 2xx status and decode the JSON body
    pub(crate) async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.fetcher.get(url).await?.error_for_status()?.json()
    }
}
