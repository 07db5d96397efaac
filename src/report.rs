//! Run counters and the plaintext progress report

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Matched-issue and download counts for one run
///
/// Both counters only ever increase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunCounters {
    /// Issues whose type matched the filter
    pub matched_issues: u64,
    /// Attachments written to disk
    pub downloaded: u64,
}

impl RunCounters {
    /// Count one more matching issue
    pub fn record_match(&mut self) {
        self.matched_issues += 1;
    }

    /// Count one more written attachment
    pub fn record_download(&mut self) {
        self.downloaded += 1;
    }

    /// `matched_issues - downloaded`
    ///
    /// Signed: an issue can carry several matching attachments, so this goes
    /// negative when downloads outnumber issues.
    pub fn remaining(&self) -> i64 {
        self.matched_issues as i64 - self.downloaded as i64
    }

    /// The three report lines, newline-joined
    pub fn render(&self) -> String {
        format!(
            "Total JiraTickets Count : {}\nTotal Count Of Downloading Images : {}\nRemaining Count Of Images : {}",
            self.matched_issues,
            self.downloaded,
            self.remaining()
        )
    }
}

/// Writer for `report.txt`
///
/// Each write replaces the whole file.
#[derive(Clone, Debug)]
pub struct ProgressReport {
    path: PathBuf,
}

impl ProgressReport {
    /// Report stored at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where the report is written
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the report with the current counters
    pub async fn write(&self, counters: &RunCounters) -> std::io::Result<()> {
        tokio::fs::write(&self.path, counters.render()).await
    }
}
