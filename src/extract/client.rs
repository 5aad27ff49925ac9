use crate::{Error, Result};
use bytes::Bytes;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, CONTENT_DISPOSITION, CONTENT_TYPE},
};
use std::time::Duration;
use url::Url;

use super::{ExtractionRequest, ExtractionResult, filename::resolve_filename};

/// Upper bound for a single call to the service or a media host.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Media bytes together with the name they should be delivered under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedMedia {
    pub data: Bytes,
    pub filename: String,
}

/// HTTP client for the extraction service and the media it points at.
#[derive(Clone)]
pub struct ExtractionClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl ExtractionClient {
    pub fn new(base_url: Url, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self::with_client(client, base_url, api_key))
    }

    pub fn with_client(client: Client, base_url: Url, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url,
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    /// Submit a request to the extraction service and parse its answer.
    pub async fn submit(&self, request: &ExtractionRequest) -> Result<ExtractionResult> {
        let payload = serde_json::to_vec(request).map_err(|e| Error::MalformedResponse {
            url: self.base_url.to_string(),
            reason: format!("failed to encode request: {}", e),
        })?;

        let mut http_request = self
            .client
            .post(self.base_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(payload);

        if let Some(key) = &self.api_key {
            http_request = http_request.header(AUTHORIZATION, format!("Api-Key {}", key));
        }

        tracing::debug!("Submitting {} to {}", request.url(), self.base_url);

        let response = http_request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                url: self.base_url.to_string(),
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        ExtractionResult::parse(self.base_url.as_str(), &body)
    }

    /// Download media from `url`, resolving the filename it should be sent as.
    pub async fn fetch(
        &self,
        url: &str,
        suggested_filename: Option<&str>,
    ) -> Result<DownloadedMedia> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().await?;
            return Err(Error::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let content_disposition = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let data = response.bytes().await?;
        let filename = resolve_filename(suggested_filename, content_disposition.as_deref(), url);

        tracing::debug!("Fetched {} bytes from {} as {}", data.len(), url, filename);

        Ok(DownloadedMedia { data, filename })
    }
}
