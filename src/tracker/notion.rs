//! Notion implementation of the tracker client
//!
//! Thin wrapper over the Notion REST API: bearer auth plus the
//! `Notion-Version` header, JSON in and out. Property names match the
//! tracking database schema (`Description`, `Priority`, `Statut Tech`,
//! `Branch identifier`, `Pr Github`).

use crate::error::{Error, Result};
use crate::tracker::TrackerService;
use crate::types::Note;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";

// Wire types for the subset of the page object we read

#[derive(Deserialize)]
struct Page {
    object: String,
    id: String,
    url: String,
    properties: PageProperties,
}

#[derive(Deserialize)]
struct PageProperties {
    #[serde(rename = "Description", default)]
    description: Option<TitleProperty>,
    #[serde(rename = "Priority", default)]
    priority: Option<SelectProperty>,
    #[serde(rename = "Statut Tech", default)]
    status: Option<SelectProperty>,
    #[serde(rename = "Branch identifier", default)]
    branch_id: Option<FormulaProperty>,
}

#[derive(Deserialize)]
struct TitleProperty {
    title: Vec<RichText>,
}

#[derive(Deserialize)]
struct RichText {
    plain_text: String,
}

#[derive(Deserialize)]
struct SelectProperty {
    select: Option<SelectValue>,
}

#[derive(Deserialize)]
struct SelectValue {
    name: String,
}

#[derive(Deserialize)]
struct FormulaProperty {
    formula: Option<FormulaValue>,
}

#[derive(Deserialize)]
struct FormulaValue {
    string: Option<String>,
}

#[derive(Deserialize)]
struct QueryResponse {
    results: Vec<Page>,
}

fn note_from_page(page: Page) -> Result<Note> {
    if page.object != "page" {
        return Err(Error::Tracker(format!(
            "expected a page object, got {:?}",
            page.object
        )));
    }

    let title = page
        .properties
        .description
        .as_ref()
        .and_then(|property| property.title.first())
        .map(|text| text.plain_text.clone())
        .ok_or_else(|| Error::Tracker(format!("page {} has no title", page.id)))?;

    let select_name =
        |property: Option<&SelectProperty>| -> Option<String> {
            property
                .and_then(|p| p.select.as_ref())
                .map(|value| value.name.clone())
        };

    Ok(Note {
        id: page.id,
        title,
        priority: select_name(page.properties.priority.as_ref()),
        status: select_name(page.properties.status.as_ref()),
        url: page.url,
        branch_id: page
            .properties
            .branch_id
            .and_then(|property| property.formula)
            .and_then(|formula| formula.string),
    })
}

async fn check_status(response: Response, what: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Tracker(format!("{what} returned {status}: {body}")))
}

/// Notion API client scoped to one tracking database
pub struct NotionClient {
    http: Client,
    base_url: String,
    secret: String,
    database_id: String,
}

impl NotionClient {
    /// Create a client for the given secret and database
    pub fn new(secret: &str, database_id: &str) -> Result<Self> {
        let http = Client::builder().user_agent("notion-pr-sync").build()?;

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            secret: secret.to_string(),
            database_id: database_id.to_string(),
        })
    }

    /// Override the API base URL (tests point this at a local server)
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Fetch the raw database object this client is scoped to
    ///
    /// Not used by the sync flow; exposed for schema inspection alongside
    /// the rest of the consumed API surface.
    pub async fn get_database(&self) -> Result<serde_json::Value> {
        debug!(database_id = %self.database_id, "fetching database");
        let url = format!("{}/databases/{}", self.base_url, self.database_id);
        let response = self.send(self.http.get(&url)).await?;
        let response = check_status(response, "fetch database").await?;
        Ok(response.json().await?)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response> {
        let response = request
            .header("Authorization", format!("Bearer {}", self.secret))
            .header("Notion-Version", NOTION_VERSION)
            .send()
            .await?;
        Ok(response)
    }

    async fn patch_properties(
        &self,
        page_id: &str,
        properties: serde_json::Value,
        what: &str,
    ) -> Result<()> {
        let url = format!("{}/pages/{page_id}", self.base_url);
        let request = self
            .http
            .patch(&url)
            .json(&json!({ "properties": properties }));
        let response = self.send(request).await?;
        check_status(response, what).await?;
        Ok(())
    }
}

#[async_trait]
impl TrackerService for NotionClient {
    async fn get_note(&self, page_id: &str) -> Result<Note> {
        debug!(page_id, "fetching note");
        let url = format!("{}/pages/{page_id}", self.base_url);
        let response = self.send(self.http.get(&url)).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::PageNotFound(page_id.to_string()));
        }

        let response = check_status(response, "fetch page").await?;
        let page: Page = response.json().await?;
        note_from_page(page)
    }

    async fn find_by_branch_id(&self, branch_id: &str) -> Result<Option<Note>> {
        debug!(branch_id, "querying database for note");
        let url = format!("{}/databases/{}/query", self.base_url, self.database_id);
        let filter = json!({
            "filter": {
                "property": "Branch identifier",
                "formula": {
                    "string": { "equals": branch_id }
                }
            }
        });

        let response = self.send(self.http.post(&url).json(&filter)).await?;
        let response = check_status(response, "query database").await?;
        let query: QueryResponse = response.json().await?;

        query
            .results
            .into_iter()
            .next()
            .map(note_from_page)
            .transpose()
    }

    async fn set_pull_request_url(&self, page_id: &str, url: &str) -> Result<()> {
        debug!(page_id, url, "setting PR link on note");
        self.patch_properties(
            page_id,
            json!({ "Pr Github": { "url": url } }),
            "set PR link",
        )
        .await
    }

    async fn set_status(&self, page_id: &str, status: &str) -> Result<()> {
        debug!(page_id, status, "setting note status");
        self.patch_properties(
            page_id,
            json!({ "Statut Tech": { "select": { "name": status } } }),
            "set status",
        )
        .await
    }
}
