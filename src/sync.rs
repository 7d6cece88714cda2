//! The open-pull-request sync flow
//!
//! One strictly sequential pass per branch push: look the note up, patch its
//! fields, then rewrite the PR. Any failing step aborts the run; there are no
//! retries and no partial-failure handling.

use crate::config::Config;
use crate::description::merge_tracking_block;
use crate::error::Result;
use crate::platform::PullRequestService;
use crate::tracker::TrackerService;
use crate::types::STATUS_IN_PROGRESS;
use tracing::{debug, warn};

/// Derive the tracker lookup key from a branch name
///
/// The identifier is the last `-`-separated segment, so `feature/login-T123`
/// yields `T123` and a branch with no `-` is used whole.
pub fn branch_identifier(branch_name: &str) -> &str {
    // Trailing dashes carry no identifier (matches the source's split
    // semantics, which drop trailing empty segments).
    let trimmed = branch_name.trim_end_matches('-');
    trimmed.rsplit('-').next().unwrap_or(trimmed)
}

/// Run the sync flow for the configured branch and pull request
///
/// A branch with no matching tracking note is a successful no-op: the PR is
/// left untouched. Whether that case should fail the CI job instead is owned
/// by the CI contract; we only log it.
pub async fn run(
    config: &Config,
    tracker: &dyn TrackerService,
    platform: &dyn PullRequestService,
) -> Result<()> {
    let branch_id = branch_identifier(&config.branch_name);
    debug!(branch = %config.branch_name, branch_id, "looking up tracking note");

    let Some(note) = tracker.find_by_branch_id(branch_id).await? else {
        warn!(
            branch = %config.branch_name,
            branch_id,
            "no tracking note matches this branch, leaving the PR unannotated"
        );
        return Ok(());
    };

    debug!(note_id = %note.id, title = %note.title, "found tracking note");

    tracker.set_pull_request_url(&note.id, &config.pr_url).await?;
    tracker.set_status(&note.id, STATUS_IN_PROGRESS).await?;

    let pr = platform.get_pull_request(config.pr_number).await?;
    let body = merge_tracking_block(pr.body.as_deref(), &note.url);
    platform
        .update_pull_request(config.pr_number, &note.title, &body)
        .await?;

    Ok(())
}
