//! # sprint-dl
//!
//! Downloads keyword-matching attachments from the issues of an active Jira sprint.
//!
//! ## Pipeline
//!
//! 1. Resolve the board name to a board id
//! 2. Resolve the sprint keyword to the first matching active sprint
//! 3. Page through the sprint's issues, 50 at a time, keeping one issue type
//! 4. Fetch each kept issue and pick the attachments whose filename contains the keyword
//! 5. Save each attachment as `<issue summary><extension>` and rewrite `report.txt`
//!
//! Every request is awaited before the next one starts.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sprint_dl::{Config, SprintDownloader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         base_url: "https://your-domain.atlassian.net".to_string(),
//!         username: "email@example.com".to_string(),
//!         api_token: "api-token".to_string(),
//!         board_name: "Team Board".to_string(),
//!         sprint_keyword: "Sprint 9".to_string(),
//!         issue_type: "Task".to_string(),
//!         attachment_keyword: "screenshot".to_string(),
//!         ..Default::default()
//!     };
//!
//!     let summary = SprintDownloader::new(config)?.start().await?;
//!     if !summary.is_clean() {
//!         eprintln!("some issues or attachments were skipped: {:?}", summary);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Board, sprint, issue and attachment pipeline
pub mod downloader;
/// Error types
pub mod error;
/// HTTP fetch seam
pub mod http;
/// Run counters and report file
pub mod report;
/// Wire records and run summary
pub mod types;
/// Filename helpers
pub mod utils;

// Re-export commonly used types
pub use config::{Config, PAGE_SIZE, REPORT_FILE_NAME};
pub use downloader::SprintDownloader;
pub use error::{Error, Result};
pub use http::{HttpFetch, HttpResponse, ReqwestFetcher};
pub use report::{ProgressReport, RunCounters};
pub use types::{Attachment, Board, Issue, IssueFields, IssuePage, IssueType, RunSummary, Sprint};
pub use utils::sanitize_filename;
