//! Code-host client for pull request operations

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::PullRequestDetails;
use async_trait::async_trait;

/// Pull request operations used by the sync flow
///
/// The flow always fetches the live PR state before merging the description,
/// so the merge never runs against a stale body.
#[async_trait]
pub trait PullRequestService: Send + Sync {
    /// Fetch the current state of a pull request
    async fn get_pull_request(&self, number: u64) -> Result<PullRequestDetails>;

    /// Update a pull request's title and body together
    async fn update_pull_request(&self, number: u64, title: &str, body: &str) -> Result<()>;
}
