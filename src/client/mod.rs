//! Typed HTTP client for the portfolio API.
//!
//! Front-ends and integration tests use [`ApiClient`] to call the public
//! endpoints; [`state::Loader`] tracks the lifecycle of those calls.

pub mod state;

use derive_more::Display;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

use crate::entities::{
    blog_post::{BlogListResponse, BlogPostDetailResponse, CategoryListResponse, TagListResponse},
    contact::{ContactForm, ContactResponse},
    project::{Project, ProjectListResponse},
};

pub use state::{FetchState, Loader, RequestToken, Resolution};

#[derive(Debug, Display)]
pub enum ClientError {
    #[display("Request failed: {_0}")]
    Transport(reqwest::Error),

    #[display("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[display("Unexpected response body: {_0}")]
    Decode(String),

    #[display("Invalid request URL: {_0}")]
    InvalidUrl(String),
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err)
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Query for `GET /blog`; unset fields are left to the server defaults.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct PostListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl PostListRequest {
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ApiClient { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `path` plus one percent-encoded segment, so a slug can never
    /// reach another route.
    fn resource_url(&self, path: &str, slug: &str) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.url(path)).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(format!("{} cannot take a path", self.base_url)))?
            .push(slug);
        Ok(url)
    }

    pub async fn list_posts(&self, request: &PostListRequest) -> Result<BlogListResponse, ClientError> {
        let response = self.http.get(self.url("/blog")).query(request).send().await?;
        decode(response).await
    }

    pub async fn get_post(&self, slug: &str) -> Result<BlogPostDetailResponse, ClientError> {
        let response = self.http.get(self.resource_url("/blog", slug)?).send().await?;
        decode(response).await
    }

    pub async fn list_categories(&self) -> Result<CategoryListResponse, ClientError> {
        let response = self.http.get(self.url("/blog/categories")).send().await?;
        decode(response).await
    }

    pub async fn list_tags(&self) -> Result<TagListResponse, ClientError> {
        let response = self.http.get(self.url("/blog/tags")).send().await?;
        decode(response).await
    }

    pub async fn list_projects(&self) -> Result<ProjectListResponse, ClientError> {
        let response = self.http.get(self.url("/projects")).send().await?;
        decode(response).await
    }

    pub async fn get_project(&self, slug: &str) -> Result<Project, ClientError> {
        let response = self.http.get(self.resource_url("/projects", slug)?).send().await?;
        decode(response).await
    }

    pub async fn submit_contact(&self, form: &ContactForm) -> Result<ContactResponse, ClientError> {
        let response = self.http.post(self.url("/contact")).json(form).send().await?;
        decode(response).await
    }
}

/// Decodes a success body, or lifts the server's `{ "error": ... }` message.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let text = response.text().await?;
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = ApiClient::new("http://127.0.0.1:8080/");
        assert_eq!(client.url("/blog"), "http://127.0.0.1:8080/blog");
    }

    #[test]
    fn slugs_are_encoded_as_one_segment() {
        let client = ApiClient::new("http://127.0.0.1:8080");

        let url = client.resource_url("/blog", "a/b?c#d").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/blog/a%2Fb%3Fc%23d");

        let url = client.resource_url("/projects", "weather-dashboard").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/projects/weather-dashboard");
    }

    #[test]
    fn unparsable_base_url_is_reported() {
        let client = ApiClient::new("not a url");
        assert!(matches!(
            client.resource_url("/blog", "x"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn list_request_omits_unset_fields() {
        let request = PostListRequest::default().page(2).search("react");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"page": 2, "search": "react"}));
    }

    #[test]
    fn status_error_display() {
        let err = ClientError::Status {
            status: 400,
            message: "email is required".into(),
        };
        assert_eq!(err.to_string(), "Server returned 400: email is required");
    }
}
