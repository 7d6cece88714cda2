//! Shared test fixtures and mocks

pub mod mock_services;

use notion_pr_sync::config::{Config, RepoInfo};
use notion_pr_sync::types::{Note, PullRequestDetails};

/// A note whose branch identifier matches `branch_id`
pub fn make_note(branch_id: &str) -> Note {
    Note {
        id: "page-1".to_string(),
        title: "Fix login flow".to_string(),
        priority: Some("High".to_string()),
        status: Some("1 - Todo".to_string()),
        url: format!("https://notion.so/workspace/{branch_id}"),
        branch_id: Some(branch_id.to_string()),
    }
}

/// A pull request with the given number and body
pub fn make_pr(number: u64, body: Option<&str>) -> PullRequestDetails {
    PullRequestDetails {
        number,
        title: "wip".to_string(),
        body: body.map(ToString::to_string),
        head_ref: "feature/login-T123".to_string(),
        html_url: format!("https://github.com/acme/widgets/pull/{number}"),
    }
}

/// A config pointing at PR `number` on branch `branch_name`
pub fn make_config(branch_name: &str, number: u64) -> Config {
    Config {
        notion_secret: "secret".to_string(),
        notion_database_id: "db123".to_string(),
        github_token: "ghtok".to_string(),
        github_repo: RepoInfo {
            owner: "acme".to_string(),
            name: "widgets".to_string(),
        },
        pr_number: number,
        pr_url: format!("https://github.com/acme/widgets/pull/{number}"),
        branch_name: branch_name.to_string(),
    }
}
