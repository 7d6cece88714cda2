//! Core types for notion-pr-sync

use serde::{Deserialize, Serialize};

/// Tracker status written when a pull request is opened for a note
pub const STATUS_IN_PROGRESS: &str = "2 - In progress";

/// Tracker status for shipped work
///
/// Exposed for callers of the tracker client; the open-pull-request flow
/// itself never writes it.
pub const STATUS_SHIPPED: &str = "5 - Shipped";

/// A tracking note in the external task tracker
///
/// The authoritative copy lives in the tracker; this is a read-only snapshot
/// of the fields the sync flow cares about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    /// Tracker page id
    pub id: String,
    /// Human-readable title
    pub title: String,
    /// Priority select value, if set
    pub priority: Option<String>,
    /// Tech status select value, if set
    pub status: Option<String>,
    /// Canonical web URL for the note
    pub url: String,
    /// Branch identifier formula value, used as the lookup key
    pub branch_id: Option<String>,
}

/// Current state of a pull request on the code host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestDetails {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// PR body/description (absent when the PR was opened without one)
    pub body: Option<String>,
    /// Head branch name
    pub head_ref: String,
    /// Web URL for the PR
    pub html_url: String,
}
