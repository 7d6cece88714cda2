//! Run configuration sourced from the CI environment
//!
//! Every credential and identifier the run needs is collected up front into
//! an explicit [`Config`], so each client's required inputs are visible at
//! its constructor instead of hidden behind ad hoc environment reads.

use crate::error::{Error, Result};

/// Environment keys recognized by [`Config::from_env`]
pub mod keys {
    /// Tracker API bearer secret
    pub const NOTION_SECRET: &str = "NOTION_SECRET";
    /// Tracker database id holding the tracking notes
    pub const NOTION_DATABASE_ID: &str = "NOTION_DATABASE_ID";
    /// Code-host API token
    pub const GH_TOKEN: &str = "GH_TOKEN";
    /// Code-host repository in `owner/name` form
    pub const GH_REPO: &str = "GH_REPO";
    /// Pull request number to annotate
    pub const PR_NUMBER: &str = "PR_NUMBER";
    /// Pull request URL written into the note
    pub const PR_URL: &str = "PR_URL";
    /// Branch name that triggered the run
    pub const BRANCH_NAME: &str = "BRANCH_NAME";
}

/// A repository identified by owner and name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoInfo {
    /// Parse an `owner/name` string
    pub fn parse(repo: &str) -> Result<Self> {
        match repo.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(Error::Config(format!(
                "expected repository in owner/name form, got {repo:?}"
            ))),
        }
    }
}

/// Everything a sync run needs, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Tracker API bearer secret
    pub notion_secret: String,
    /// Tracker database id
    pub notion_database_id: String,
    /// Code-host API token
    pub github_token: String,
    /// Target repository
    pub github_repo: RepoInfo,
    /// Pull request number to annotate
    pub pr_number: u64,
    /// Pull request URL written into the note
    pub pr_url: String,
    /// Branch name that triggered the run
    pub branch_name: String,
}

impl Config {
    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    ///
    /// Factored out so tests can supply values without touching the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| Error::Config(format!("missing environment variable {key}")))
        };

        let pr_number = required(keys::PR_NUMBER)?;
        let pr_number = pr_number
            .parse::<u64>()
            .map_err(|_| Error::Config(format!("{} is not a number: {pr_number:?}", keys::PR_NUMBER)))?;

        Ok(Self {
            notion_secret: required(keys::NOTION_SECRET)?,
            notion_database_id: required(keys::NOTION_DATABASE_ID)?,
            github_token: required(keys::GH_TOKEN)?,
            github_repo: RepoInfo::parse(&required(keys::GH_REPO)?)?,
            pr_number,
            pr_url: required(keys::PR_URL)?,
            branch_name: required(keys::BRANCH_NAME)?,
        })
    }
}
