//! Issue detail fetch and attachment filtering.

use crate::error::{Error, Result};
use crate::types::{Attachment, IssueDetail, RunSummary};

use super::SprintDownloader;

/// Attachments whose filename contains `keyword` (case-sensitive)
pub fn matching_attachments<'a>(
    attachments: &'a [Attachment],
    keyword: &'a str,
) -> impl Iterator<Item = &'a Attachment> + 'a {
    attachments
        .iter()
        .filter(move |a| a.filename.contains(keyword))
}

impl SprintDownloader {
    /// Fetch one issue's detail and download each matching attachment
    ///
    /// Returns an error only when the issue itself could not be fetched or
    /// decoded. A failed attachment download is counted and skipped.
    pub(crate) async fn scan_issue(&self, key: &str, summary: &mut RunSummary) -> Result<()> {
        let url = self.config.issue_url(key);
        let detail: IssueDetail = self.fetch_json(&url).await?;
        let fields = &detail.fields;

        for attachment in matching_attachments(&fields.attachments, &self.config.attachment_keyword)
        {
            let result = self
                .download_attachment(
                    &attachment.content_url,
                    &fields.summary,
                    &attachment.filename,
                    &mut summary.counters,
                )
                .await;

            if let Err(e) = result {
                match &e {
                    Error::HttpStatus { .. } => tracing::debug!(
                        issue = key,
                        filename = %attachment.filename,
                        error = %e,
                        "Attachment not downloaded"
                    ),
                    _ => tracing::warn!(
                        issue = key,
                        filename = %attachment.filename,
                        error = %e,
                        "Failed to download attachment"
                    ),
                }
                summary.downloads_skipped += 1;
            }
        }

        Ok(())
    }
}
