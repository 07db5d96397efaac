//! Attachment download, destination naming and report updates.

use crate::error::Result;
use crate::report::RunCounters;
use crate::utils::destination_file_name;
use std::path::PathBuf;

use super::SprintDownloader;

impl SprintDownloader {
    /// Download one attachment into the output directory
    ///
    /// The file is named after the issue summary plus the attachment's
    /// extension and overwrites any existing file of that name. On success the
    /// download counter is bumped and `report.txt` rewritten.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the counters untouched, if:
    /// - the request fails or answers with a non-success status
    /// - the file cannot be written
    pub(crate) async fn download_attachment(
        &self,
        content_url: &str,
        headline: &str,
        filename: &str,
        counters: &mut RunCounters,
    ) -> Result<PathBuf> {
        let response = self
            .fetcher
            .get_content(content_url)
            .await?
            .error_for_status()?;

        let path = self
            .config
            .output_dir
            .join(destination_file_name(headline, filename));
        tokio::fs::write(&path, &response.body).await?;
        tracing::info!("Downloaded: {}", path.display());

        counters.record_download();
        // A report failure does not undo the saved attachment
        if let Err(e) = self.report.write(counters).await {
            tracing::warn!(
                path = %self.report.path().display(),
                error = %e,
                "Failed to write progress report"
            );
        }

        Ok(path)
    }
}
