//! notion-pr-sync binary entry point
//!
//! Reads its entire configuration from the CI environment, builds both API
//! clients up front, and runs the sync flow once. Any failure exits non-zero
//! with the error printed; "no tracking note for this branch" is a success.

use anyhow::Context;
use notion_pr_sync::config::Config;
use notion_pr_sync::platform::GitHubService;
use notion_pr_sync::sync;
use notion_pr_sync::tracker::NotionClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("failed to load configuration")?;

    let tracker = NotionClient::new(&config.notion_secret, &config.notion_database_id)
        .context("failed to build tracker client")?;
    let platform = GitHubService::new(
        &config.github_token,
        config.github_repo.owner.clone(),
        config.github_repo.name.clone(),
    )
    .context("failed to build GitHub client")?;

    sync::run(&config, &tracker, &platform)
        .await
        .context("sync failed")?;

    Ok(())
}
