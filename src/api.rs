//! Google Books volumes API client.
//!
//! Thin HTTP wrapper over `GET /volumes`. Pure parsing in `parse_response`
//! for testability; every item field is optional on the wire and defaulted
//! into a normalized [`Book`].

use std::time::Duration;

use serde::Deserialize;

use crate::config::{Config, HttpTimeouts};

/// Fixed ceiling on results requested per search.
pub const RESULT_LIMIT: usize = 20;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_AUTHOR: &str = "Unknown author";
pub const DEFAULT_DESCRIPTION: &str = "No description available.";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to build http client: {0}")]
    HttpClientBuild(String),
    #[error("book search request failed: {0}")]
    Request(String),
    #[error("book search returned HTTP {status}: {body}")]
    Response { status: u16, body: String },
    #[error("failed to parse book search response: {0}")]
    Parse(String),
}

/// One normalized search result, all fields defaulted when absent upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub authors: Vec<String>,
    pub description: String,
    pub thumbnail: Option<String>,
    pub preview_link: Option<String>,
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Clone)]
pub struct BookClient {
    http: reqwest::Client,
    base_url: String,
}

impl BookClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let HttpTimeouts { request_secs, connect_secs } = config.timeouts;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(request_secs))
            .connect_timeout(Duration::from_secs(connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    /// Search volumes by free-text query, capped at [`RESULT_LIMIT`] results.
    pub async fn search(&self, query: &str) -> Result<Vec<Book>, ApiError> {
        let url = format!("{}/volumes", self.base_url);
        let response = self
            .http
            .get(url)
            .query(&search_params(query))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if status != 200 {
            return Err(ApiError::Response { status, body: text });
        }

        parse_response(&text)
    }
}

/// Query pairs sent on every search request.
fn search_params(query: &str) -> [(&'static str, String); 2] {
    [("q", query.to_owned()), ("maxResults", RESULT_LIMIT.to_string())]
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Vec<Volume>,
}

#[derive(Deserialize)]
struct Volume {
    #[serde(rename = "volumeInfo", default)]
    volume_info: VolumeInfo,
}

#[derive(Deserialize, Default)]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    description: Option<String>,
    #[serde(rename = "imageLinks")]
    image_links: Option<ImageLinks>,
    #[serde(rename = "previewLink")]
    preview_link: Option<String>,
    #[serde(rename = "infoLink")]
    info_link: Option<String>,
}

#[derive(Deserialize)]
struct ImageLinks {
    thumbnail: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<Vec<Book>, ApiError> {
    let response: VolumesResponse =
        serde_json::from_str(json).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(response.items.into_iter().map(normalize).collect())
}

fn normalize(volume: Volume) -> Book {
    let info = volume.volume_info;
    let authors = match info.authors {
        Some(authors) if !authors.is_empty() => authors,
        _ => vec![DEFAULT_AUTHOR.to_owned()],
    };

    Book {
        title: info.title.unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
        authors,
        description: info.description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_owned()),
        thumbnail: info.image_links.and_then(|links| links.thumbnail),
        // Prefer the preview link, fall back to the plain info page.
        preview_link: info.preview_link.or(info.info_link),
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
