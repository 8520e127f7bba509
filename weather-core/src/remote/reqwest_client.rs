use async_trait::async_trait;
use reqwest::{Client, Url};

use super::{HttpClient, HttpClientError, HttpResponse};

/// [`HttpClient`] backed by `reqwest`. Any status is passed through; only
/// failures to connect or to read the body are reported as errors.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    http: Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, HttpClientError> {
        // The query string carries the API key; keep it out of error messages.
        let res = self.http.get(url.clone()).send().await.map_err(|err| {
            HttpClientError::new(format!("Failed to send forecast request: {}", err.without_url()))
        })?;

        let status = res.status().as_u16();
        let body = res.bytes().await.map_err(|err| {
            HttpClientError::new(format!(
                "Failed to read forecast response body: {}",
                err.without_url()
            ))
        })?;

        tracing::trace!(status, bytes = body.len(), "forecast response received");

        Ok(HttpResponse { status, body: body.to_vec() })
    }
}
