//! 2ch mobile API HTTP client.

use reqwest::{Client, Response};
use url::Url;

use crate::api::types::ThreadResponse;
use crate::config::ThreadLink;
use crate::error::{Error, Result};

/// HTTP client for the 2ch mobile JSON API.
///
/// Cheap to clone: every clone shares the underlying connection pool, so one
/// client serves all concurrent download jobs.
#[derive(Debug, Clone)]
pub struct DvachApi {
    client: Client,
    base_url: Url,
}

impl DvachApi {
    /// Create a new API client.
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Base URL that relative file paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the full post list for a thread.
    pub async fn get_thread(&self, link: &ThreadLink) -> Result<ThreadResponse> {
        let path = format!(
            "api/mobile/v2/after/{board}/{thread}/{thread}",
            board = link.board,
            thread = link.thread
        );
        let url = self.base_url.join(&path)?;

        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::Api(format!(
                "Thread request failed: HTTP {}",
                status
            )));
        }

        let text = response.text().await?;
        let thread: ThreadResponse = serde_json::from_str(&text).map_err(|e| {
            let preview: String = text.chars().take(300).collect();
            Error::Api(format!(
                "Failed to parse thread response (missing post list?): {} - Response: {}",
                e, preview
            ))
        })?;

        Ok(thread)
    }

    /// Download a file from an absolute URL.
    ///
    /// Checks the response status and hands back the streaming response body.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!("HTTP {}", response.status())));
        }

        Ok(response)
    }
}
