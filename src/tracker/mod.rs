//! Task tracker client
//!
//! Provides the [`TrackerService`] seam the sync flow talks through, and the
//! Notion implementation behind it.

mod notion;

pub use notion::NotionClient;

use crate::error::Result;
use crate::types::Note;
use async_trait::async_trait;

/// Tracker operations used by the sync flow
///
/// Abstracted so the orchestration logic can be exercised against a mock
/// tracker in tests.
#[async_trait]
pub trait TrackerService: Send + Sync {
    /// Fetch a note by its page id
    async fn get_note(&self, page_id: &str) -> Result<Note>;

    /// Find the note whose branch identifier equals `branch_id`
    ///
    /// Zero matches is a valid outcome, not an error: the branch simply has
    /// no tracking note.
    async fn find_by_branch_id(&self, branch_id: &str) -> Result<Option<Note>>;

    /// Record the pull request URL on a note
    async fn set_pull_request_url(&self, page_id: &str, url: &str) -> Result<()>;

    /// Set a note's tech status (see the constants in [`crate::types`])
    async fn set_status(&self, page_id: &str, status: &str) -> Result<()>;
}
