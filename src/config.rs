//! Configuration types for sprint-dl

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

/// Number of issues requested per sprint page
pub const PAGE_SIZE: usize = 50;

/// Name of the progress report written next to the downloads
pub const REPORT_FILE_NAME: &str = "report.txt";

/// Run configuration, supplied once at startup and read-only afterwards
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Jira base URL (e.g., "https://your-domain.atlassian.net")
    pub base_url: String,

    /// Account used for basic authentication
    pub username: String,

    /// API token paired with `username`
    #[serde(skip_serializing)]
    pub api_token: String,

    /// Board name, matched case-insensitively
    pub board_name: String,

    /// Keyword contained in the active sprint's name, matched case-insensitively
    pub sprint_keyword: String,

    /// Issue type name to keep (exact, case-sensitive)
    pub issue_type: String,

    /// Substring an attachment filename must contain (case-sensitive)
    pub attachment_keyword: String,

    /// Directory receiving attachments and the report (default: ".")
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Per-request timeout (None = wait indefinitely)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: Option<Duration>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_request_timeout() -> Option<Duration> {
    Some(Duration::from_secs(30))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            username: String::new(),
            api_token: String::new(),
            board_name: String::new(),
            sprint_keyword: String::new(),
            issue_type: String::new(),
            attachment_keyword: String::new(),
            output_dir: default_output_dir(),
            request_timeout: default_request_timeout(),
        }
    }
}

// Hand-written so the token never ends up in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("api_token", &"<redacted>")
            .field("board_name", &self.board_name)
            .field("sprint_keyword", &self.sprint_keyword)
            .field("issue_type", &self.issue_type)
            .field("attachment_keyword", &self.attachment_keyword)
            .field("output_dir", &self.output_dir)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Config {
    /// Check the values a run cannot proceed without
    ///
    /// Sprint and attachment keywords may be empty; an empty keyword matches
    /// everything. An empty issue type is still an exact filter and keeps only
    /// issues whose type name is empty.
    pub fn validate(&self) -> Result<()> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(Error::config("base_url", "base URL must not be empty"));
        }
        let parsed = url::Url::parse(base)
            .map_err(|e| Error::config("base_url", format!("invalid base URL '{}': {}", base, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config(
                "base_url",
                format!("unsupported URL scheme '{}'", parsed.scheme()),
            ));
        }

        for (key, value) in [
            ("username", &self.username),
            ("api_token", &self.api_token),
            ("board_name", &self.board_name),
        ] {
            if value.trim().is_empty() {
                return Err(Error::config(key, format!("{} must not be empty", key)));
            }
        }

        Ok(())
    }

    fn base(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// `GET /rest/agile/1.0/board`
    pub fn boards_url(&self) -> String {
        format!("{}/rest/agile/1.0/board", self.base())
    }

    /// `GET /rest/agile/1.0/board/{id}/sprint?state=active`
    pub fn active_sprints_url(&self, board_id: u64) -> String {
        format!(
            "{}/rest/agile/1.0/board/{}/sprint?state=active",
            self.base(),
            board_id
        )
    }

    /// `GET /rest/agile/1.0/sprint/{id}/issue?startAt={n}&maxResults=50`
    pub fn sprint_issues_url(&self, sprint_id: u64, start_at: usize) -> String {
        format!(
            "{}/rest/agile/1.0/sprint/{}/issue?startAt={}&maxResults={}",
            self.base(),
            sprint_id,
            start_at,
            PAGE_SIZE
        )
    }

    /// `GET /rest/api/2/issue/{key}`
    pub fn issue_url(&self, key: &str) -> String {
        format!("{}/rest/api/2/issue/{}", self.base(), key)
    }

    /// Location of the progress report
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(REPORT_FILE_NAME)
    }
}
