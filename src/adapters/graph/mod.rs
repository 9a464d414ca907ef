//! Microsoft Graph planner source
//!
//! Blocking HTTPS client for the Graph planner endpoints. It does not sign
//! in: an already-issued bearer token is read from `PLANEX_GRAPH_TOKEN`.
//! Calls are single-shot, without retries.

use std::env;

use anyhow::{Context, anyhow};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::core::models::{Bucket, Task, TaskDetails};
use crate::core::ports::PlannerSource;

/// Environment variable holding the bearer token
pub const TOKEN_ENV: &str = "PLANEX_GRAPH_TOKEN";

/// Graph API root
pub const DEFAULT_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

/// One page of a Graph collection
#[derive(Debug, Deserialize)]
struct Page<T> {
    value: Vec<T>,
    #[serde(rename = "@odata.nextLink")]
    next_link: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserName {
    display_name: Option<String>,
}

/// `PlannerSource` backed by Microsoft Graph
#[derive(Debug, Clone)]
pub struct GraphSource {
    client: Client,
    base_url: String,
    token: String,
}

impl GraphSource {
    /// Create a client for the given API root and token
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("planex/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Create a client for the public Graph endpoint using `PLANEX_GRAPH_TOKEN`
    pub fn from_env() -> anyhow::Result<Self> {
        let token = env::var(TOKEN_ENV)
            .map_err(|_| anyhow!("not connected: set {TOKEN_ENV} to a Graph access token"))?;
        Self::new(DEFAULT_BASE_URL, token)
    }

    fn get<T: DeserializeOwned>(&self, url: &str) -> anyhow::Result<T> {
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("request to {url} was rejected"))?;
        response.json().with_context(|| format!("unexpected response from {url}"))
    }

    fn get_all<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<Vec<T>> {
        let mut items = Vec::new();
        let mut next = Some(format!("{}{path}", self.base_url));
        while let Some(url) = next {
            let page: Page<T> = self.get(&url)?;
            items.extend(page.value);
            next = page.next_link;
        }
        Ok(items)
    }
}

impl PlannerSource for GraphSource {
    fn list_tasks(&self, plan_id: &str) -> anyhow::Result<Vec<Task>> {
        self.get_all(&format!("/planner/plans/{}/tasks", urlencoding::encode(plan_id)))
    }

    fn list_buckets(&self, plan_id: &str) -> anyhow::Result<Vec<Bucket>> {
        self.get_all(&format!("/planner/plans/{}/buckets", urlencoding::encode(plan_id)))
    }

    fn task_details(&self, task_id: &str) -> anyhow::Result<TaskDetails> {
        self.get(&format!("{}/planner/tasks/{}/details", self.base_url, urlencoding::encode(task_id)))
    }

    fn user_display_name(&self, user_id: &str) -> anyhow::Result<String> {
        let user: UserName = self.get(&format!(
            "{}/users/{}?$select=displayName",
            self.base_url,
            urlencoding::encode(user_id)
        ))?;
        user.display_name.ok_or_else(|| anyhow!("user '{user_id}' has no display name"))
    }
}
