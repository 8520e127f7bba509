use async_trait::async_trait;
use reqwest::Url;
use thiserror::Error;

use crate::model::WeatherForecast;

pub mod api;
pub mod reqwest_client;

pub use reqwest_client::ReqwestHttpClient;

/// Raw transport result: the status line and the unread body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The transport failed before a response was available.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct HttpClientError {
    message: String,
}

impl HttpClientError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Issues a single GET. Status codes are not interpreted here.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &Url) -> Result<HttpResponse, HttpClientError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("could not reach the forecast service")]
    Connectivity,
    #[error("the forecast service returned invalid data")]
    InvalidData,
}

#[async_trait]
pub trait WeatherLoader: Send + Sync {
    async fn load(&self) -> Result<WeatherForecast, LoadError>;
}

/// Loads the forecast behind one fixed URL.
///
/// Every call to [`WeatherLoader::load`] issues its own request. The returned
/// future borrows the loader, so a result can only be observed while the
/// loader is alive; dropping the future (or the task polling it) before the
/// transport completes discards the outcome without touching the loader.
#[derive(Debug, Clone)]
pub struct RemoteWeatherLoader<C> {
    url: Url,
    client: C,
}

impl<C: HttpClient> RemoteWeatherLoader<C> {
    pub fn new(url: Url, client: C) -> Self {
        Self { url, client }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl<C: HttpClient> WeatherLoader for RemoteWeatherLoader<C> {
    async fn load(&self) -> Result<WeatherForecast, LoadError> {
        tracing::debug!(host = self.url.host_str().unwrap_or_default(), "requesting forecast");

        let response = self.client.get(&self.url).await.map_err(|err| {
            tracing::debug!(error = %err, "forecast request failed");
            LoadError::Connectivity
        })?;

        let forecast = api::map(&response.body, response.status)?;
        tracing::debug!(
            location = %forecast.location.name,
            local_time = %forecast.location.local_time,
            days = forecast.forecast.days.len(),
            "forecast decoded"
        );
        Ok(forecast)
    }
}
