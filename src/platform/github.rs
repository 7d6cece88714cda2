//! GitHub pull request service using octocrab

use crate::error::Result;
use crate::platform::PullRequestService;
use crate::types::PullRequestDetails;
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

/// GitHub service scoped to one repository
pub struct GitHubService {
    client: Octocrab,
    owner: String,
    repo: String,
}

impl GitHubService {
    /// Create a new GitHub service for `owner/repo`
    pub fn new(token: &str, owner: String, repo: String) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .build()?;

        Ok(Self {
            client,
            owner,
            repo,
        })
    }
}

#[async_trait]
impl PullRequestService for GitHubService {
    async fn get_pull_request(&self, number: u64) -> Result<PullRequestDetails> {
        debug!(number, "fetching PR");
        let pr = self.client.pulls(&self.owner, &self.repo).get(number).await?;

        Ok(PullRequestDetails {
            number: pr.number,
            title: pr.title.clone().unwrap_or_default(),
            body: pr.body.clone(),
            head_ref: pr.head.ref_field.clone(),
            html_url: pr
                .html_url
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        })
    }

    async fn update_pull_request(&self, number: u64, title: &str, body: &str) -> Result<()> {
        debug!(number, title, "updating PR");
        self.client
            .pulls(&self.owner, &self.repo)
            .update(number)
            .title(title)
            .body(body)
            .send()
            .await?;

        debug!(number, "updated PR");
        Ok(())
    }
}
