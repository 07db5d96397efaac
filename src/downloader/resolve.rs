//! Board and active-sprint resolution.

use crate::error::{Error, Result};
use crate::types::{Board, BoardList, Sprint, SprintList};

use super::SprintDownloader;

/// First board whose name equals `name`, ignoring case
pub fn find_board<'a>(boards: &'a [Board], name: &str) -> Option<&'a Board> {
    let wanted = name.to_lowercase();
    boards.iter().find(|b| b.name.to_lowercase() == wanted)
}

/// First sprint whose name contains `keyword`, ignoring case
///
/// An empty keyword matches the first sprint.
pub fn find_sprint<'a>(sprints: &'a [Sprint], keyword: &str) -> Option<&'a Sprint> {
    let wanted = keyword.to_lowercase();
    sprints
        .iter()
        .find(|s| s.name.to_lowercase().contains(&wanted))
}

impl SprintDownloader {
    /// Resolve a board name to its id
    ///
    /// The board list is fetched in a single request. Any fetch or decode
    /// failure is logged and reported as [`Error::BoardNotFound`].
    pub(crate) async fn resolve_board(&self, name: &str) -> Result<u64> {
        let url = self.config.boards_url();
        let not_found = || Error::BoardNotFound {
            name: name.to_string(),
        };

        let boards: BoardList = match self.fetch_json(&url).await {
            Ok(boards) => boards,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to list boards");
                return Err(not_found());
            }
        };
        tracing::debug!(count = boards.values.len(), "Fetched boards");

        find_board(&boards.values, name)
            .map(|b| b.id)
            .ok_or_else(not_found)
    }

    /// Resolve the first active sprint on `board_id` whose name contains `keyword`
    ///
    /// Same failure policy as [`Self::resolve_board`], reported as
    /// [`Error::SprintNotFound`].
    pub(crate) async fn resolve_sprint(&self, board_id: u64, keyword: &str) -> Result<u64> {
        let url = self.config.active_sprints_url(board_id);
        let not_found = || Error::SprintNotFound {
            board_id,
            keyword: keyword.to_string(),
        };

        let sprints: SprintList = match self.fetch_json(&url).await {
            Ok(sprints) => sprints,
            Err(e) => {
                tracing::warn!(board_id, error = %e, "Failed to list active sprints");
                return Err(not_found());
            }
        };
        tracing::debug!(board_id, count = sprints.values.len(), "Fetched active sprints");

        find_sprint(&sprints.values, keyword)
            .map(|s| s.id)
            .ok_or_else(not_found)
    }
}
