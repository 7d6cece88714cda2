//! Mock tracker and pull request services for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use notion_pr_sync::error::{Error, Result};
use notion_pr_sync::platform::PullRequestService;
use notion_pr_sync::tracker::TrackerService;
use notion_pr_sync::types::{Note, PullRequestDetails};
use std::collections::HashMap;
use std::sync::Mutex;

/// Call record for `set_pull_request_url`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetUrlCall {
    pub page_id: String,
    pub url: String,
}

/// Call record for `set_status`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetStatusCall {
    pub page_id: String,
    pub status: String,
}

/// Call record for `update_pull_request`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePrCall {
    pub number: u64,
    pub title: String,
    pub body: String,
}

/// Simple mock tracker with call tracking and error injection
#[derive(Default)]
pub struct MockTracker {
    notes_by_branch: Mutex<HashMap<String, Note>>,
    notes_by_page: Mutex<HashMap<String, Note>>,
    // Call tracking
    find_calls: Mutex<Vec<String>>,
    set_url_calls: Mutex<Vec<SetUrlCall>>,
    set_status_calls: Mutex<Vec<SetStatusCall>>,
    // Error injection
    error_on_find: Mutex<Option<String>>,
    error_on_set_url: Mutex<Option<String>>,
    error_on_set_status: Mutex<Option<String>>,
}

impl MockTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a note findable by its branch identifier and page id
    pub fn add_note(&self, note: Note) {
        if let Some(branch_id) = &note.branch_id {
            self.notes_by_branch
                .lock()
                .unwrap()
                .insert(branch_id.clone(), note.clone());
        }
        self.notes_by_page
            .lock()
            .unwrap()
            .insert(note.id.clone(), note);
    }

    pub fn fail_find(&self, msg: &str) {
        *self.error_on_find.lock().unwrap() = Some(msg.to_string());
    }

    pub fn fail_set_url(&self, msg: &str) {
        *self.error_on_set_url.lock().unwrap() = Some(msg.to_string());
    }

    pub fn fail_set_status(&self, msg: &str) {
        *self.error_on_set_status.lock().unwrap() = Some(msg.to_string());
    }

    pub fn find_calls(&self) -> Vec<String> {
        self.find_calls.lock().unwrap().clone()
    }

    pub fn set_url_calls(&self) -> Vec<SetUrlCall> {
        self.set_url_calls.lock().unwrap().clone()
    }

    pub fn set_status_calls(&self) -> Vec<SetStatusCall> {
        self.set_status_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TrackerService for MockTracker {
    async fn get_note(&self, page_id: &str) -> Result<Note> {
        self.notes_by_page
            .lock()
            .unwrap()
            .get(page_id)
            .cloned()
            .ok_or_else(|| Error::PageNotFound(page_id.to_string()))
    }

    async fn find_by_branch_id(&self, branch_id: &str) -> Result<Option<Note>> {
        self.find_calls
            .lock()
            .unwrap()
            .push(branch_id.to_string());

        if let Some(msg) = self.error_on_find.lock().unwrap().as_ref() {
            return Err(Error::Tracker(msg.clone()));
        }

        Ok(self.notes_by_branch.lock().unwrap().get(branch_id).cloned())
    }

    async fn set_pull_request_url(&self, page_id: &str, url: &str) -> Result<()> {
        self.set_url_calls.lock().unwrap().push(SetUrlCall {
            page_id: page_id.to_string(),
            url: url.to_string(),
        });

        if let Some(msg) = self.error_on_set_url.lock().unwrap().as_ref() {
            return Err(Error::Tracker(msg.clone()));
        }
        Ok(())
    }

    async fn set_status(&self, page_id: &str, status: &str) -> Result<()> {
        self.set_status_calls.lock().unwrap().push(SetStatusCall {
            page_id: page_id.to_string(),
            status: status.to_string(),
        });

        if let Some(msg) = self.error_on_set_status.lock().unwrap().as_ref() {
            return Err(Error::Tracker(msg.clone()));
        }
        Ok(())
    }
}

/// Simple mock pull request service with call tracking and error injection
#[derive(Default)]
pub struct MockPullRequests {
    details: Mutex<HashMap<u64, PullRequestDetails>>,
    // Call tracking
    get_calls: Mutex<Vec<u64>>,
    update_calls: Mutex<Vec<UpdatePrCall>>,
    // Error injection
    error_on_get: Mutex<Option<String>>,
    error_on_update: Mutex<Option<String>>,
}

impl MockPullRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the details returned by `get_pull_request`
    pub fn set_details(&self, details: PullRequestDetails) {
        self.details
            .lock()
            .unwrap()
            .insert(details.number, details);
    }

    pub fn fail_get(&self, msg: &str) {
        *self.error_on_get.lock().unwrap() = Some(msg.to_string());
    }

    pub fn fail_update(&self, msg: &str) {
        *self.error_on_update.lock().unwrap() = Some(msg.to_string());
    }

    pub fn get_calls(&self) -> Vec<u64> {
        self.get_calls.lock().unwrap().clone()
    }

    pub fn update_calls(&self) -> Vec<UpdatePrCall> {
        self.update_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PullRequestService for MockPullRequests {
    async fn get_pull_request(&self, number: u64) -> Result<PullRequestDetails> {
        self.get_calls.lock().unwrap().push(number);

        if let Some(msg) = self.error_on_get.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        self.details
            .lock()
            .unwrap()
            .get(&number)
            .cloned()
            .ok_or_else(|| Error::Platform(format!("no response configured for PR #{number}")))
    }

    async fn update_pull_request(&self, number: u64, title: &str, body: &str) -> Result<()> {
        self.update_calls.lock().unwrap().push(UpdatePrCall {
            number,
            title: title.to_string(),
            body: body.to_string(),
        });

        if let Some(msg) = self.error_on_update.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }
        Ok(())
    }
}
