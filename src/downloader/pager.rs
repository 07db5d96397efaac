//! Sprint issue pagination and issue-type filtering.

use crate::config::PAGE_SIZE;
use crate::types::{Issue, IssuePage, RunSummary};

use super::SprintDownloader;

/// A page shorter than [`PAGE_SIZE`] is the last one
///
/// A full page is never treated as final, even when none of its issues match.
pub fn is_last_page(returned: usize) -> bool {
    returned < PAGE_SIZE
}

/// Exact, case-sensitive comparison of the issue type name
pub fn matches_issue_type(issue: &Issue, issue_type: &str) -> bool {
    issue.fields.issue_type.name == issue_type
}

impl SprintDownloader {
    /// Walk every page of the sprint's issues, scanning each issue of the
    /// configured type before requesting the next page
    ///
    /// A failed or undecodable page ends pagination early; the run keeps
    /// whatever it already downloaded.
    pub(crate) async fn process_sprint_issues(&self, sprint_id: u64, summary: &mut RunSummary) {
        let mut start_at = 0;

        loop {
            let url = self.config.sprint_issues_url(sprint_id, start_at);
            summary.pages_fetched += 1;

            let page: IssuePage = match self.fetch_json(&url).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(sprint_id, start_at, error = %e, "Failed to fetch sprint issues");
                    summary.pagination_interrupted = true;
                    break;
                }
            };
            tracing::debug!(sprint_id, start_at, count = page.issues.len(), "Fetched issue page");

            for issue in page
                .issues
                .iter()
                .filter(|issue| matches_issue_type(issue, &self.config.issue_type))
            {
                summary.counters.record_match();
                if let Err(e) = self.scan_issue(&issue.key, summary).await {
                    tracing::warn!(issue = %issue.key, error = %e, "Skipping issue");
                    summary.issues_skipped += 1;
                }
            }

            if is_last_page(page.issues.len()) {
                break;
            }
            start_at += PAGE_SIZE;
        }
    }
}
