use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::GitLabError;
use super::models::*;
use crate::application::ports::project_source::ProjectSource;

/// Page size used when draining branch, tag and contributor listings.
const LIST_PAGE_SIZE: u32 = 100;

pub struct GitLabClient {
    client: Client,
    api_base: String,
    token: String,
}

impl GitLabClient {
    /// `base_url` is the instance root, already validated by `Settings`.
    pub fn new(base_url: &str, token: String) -> Result<Self, GitLabError> {
        let base_url = base_url.trim_end_matches('/');

        let client = Client::builder()
            .user_agent(concat!("gitlab-ranking/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_base: format!("{}/api/v4", base_url),
            token,
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    async fn send(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<reqwest::Response, GitLabError> {
        let url = format!("{}{}", self.api_base, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("PRIVATE-TOKEN", &self.token)
            .header("Accept", "application/json")
            .send()
            .await?;

        Ok(response)
    }

    /// Decode a success body, or hand status and body to `to_error`.
    async fn decode<T, F>(response: Response, to_error: F) -> Result<T, GitLabError>
    where
        T: DeserializeOwned,
        F: FnOnce(StatusCode, String) -> GitLabError,
    {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(to_error(status, body));
        }

        Ok(response.json().await?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, GitLabError> {
        let response = self.send(path, query).await?;
        Self::decode(response, |status, body| GitLabError::Api {
            status,
            path: path.to_string(),
            body,
        })
        .await
    }

    /// Follow `page` until a short page comes back.
    async fn get_all_pages<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, GitLabError> {
        let mut items = Vec::new();
        let mut page = 1u32;

        loop {
            let batch: Vec<T> = self
                .get_json(
                    path,
                    &[
                        ("page", page.to_string()),
                        ("per_page", LIST_PAGE_SIZE.to_string()),
                    ],
                )
                .await?;
            let received = batch.len();
            items.extend(batch);

            if received < LIST_PAGE_SIZE as usize {
                break;
            }
            page += 1;
        }

        Ok(items)
    }
}

#[async_trait]
impl ProjectSource for GitLabClient {
    async fn authenticate(&self) -> Result<User, GitLabError> {
        let response = self.send("/user", &[]).await?;
        Self::decode(response, |status, body| GitLabError::Authentication { status, body }).await
    }

    async fn list_projects(&self, page: u32, per_page: u32) -> Result<Vec<Project>, GitLabError> {
        self.get_json(
            "/projects",
            &[
                ("statistics", "true".to_string()),
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
            ],
        )
        .await
    }

    async fn list_branches(&self, project_id: u64) -> Result<Vec<Branch>, GitLabError> {
        self.get_all_pages(&format!("/projects/{}/repository/branches", project_id))
            .await
    }

    async fn list_tags(&self, project_id: u64) -> Result<Vec<Tag>, GitLabError> {
        self.get_all_pages(&format!("/projects/{}/repository/tags", project_id))
            .await
    }

    async fn list_contributors(&self, project_id: u64) -> Result<Vec<Contributor>, GitLabError> {
        self.get_all_pages(&format!("/projects/{}/repository/contributors", project_id))
            .await
    }
}
