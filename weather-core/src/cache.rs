//! Replacing the cached forecast snapshot.

use std::convert::Infallible;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::model::{CurrentWeather, Forecast, Location, WeatherForecast};

/// Storage-side twin of [`WeatherForecast`].
///
/// Same shape and the same narrow equality (by `location.local_time`), kept as
/// its own type so store implementations never depend on the loader-facing one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalWeatherForecast {
    pub location: Location,
    pub current: CurrentWeather,
    pub forecast: Forecast,
}

impl PartialEq for LocalWeatherForecast {
    fn eq(&self, other: &Self) -> bool {
        self.location.local_time == other.location.local_time
    }
}

impl Eq for LocalWeatherForecast {}

impl From<WeatherForecast> for LocalWeatherForecast {
    fn from(f: WeatherForecast) -> Self {
        Self { location: f.location, current: f.current, forecast: f.forecast }
    }
}

impl From<LocalWeatherForecast> for WeatherForecast {
    fn from(f: LocalWeatherForecast) -> Self {
        Self { location: f.location, current: f.current, forecast: f.forecast }
    }
}

/// Persistence for the single cached snapshot.
///
/// Each call resolves once the operation has been applied or has failed.
#[async_trait]
pub trait WeatherForecastStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn delete_cached_forecast(&self) -> Result<(), Self::Error>;

    async fn insert(
        &self,
        forecast: LocalWeatherForecast,
        timestamp: DateTime<Utc>,
    ) -> Result<(), Self::Error>;
}

/// Which stage of [`LocalWeatherLoader::save`] failed, with the store's own error.
#[derive(Debug, PartialEq, Error)]
pub enum SaveError<E: std::error::Error + 'static> {
    #[error("failed to delete the cached forecast")]
    Deletion(#[source] E),
    #[error("failed to insert the forecast into the cache")]
    Insertion(#[source] E),
}

impl<E: std::error::Error + 'static> SaveError<E> {
    /// The error exactly as the store reported it.
    pub fn into_inner(self) -> E {
        match self {
            SaveError::Deletion(e) | SaveError::Insertion(e) => e,
        }
    }
}

/// Writes forecasts to a [`WeatherForecastStore`] with delete-then-insert semantics.
#[derive(Debug)]
pub struct LocalWeatherLoader<S, F> {
    store: S,
    current_date: F,
}

impl<S, F> LocalWeatherLoader<S, F>
where
    S: WeatherForecastStore,
    F: Fn() -> DateTime<Utc> + Send + Sync,
{
    pub fn new(store: S, current_date: F) -> Self {
        Self { store, current_date }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replaces the cached snapshot with `forecast`.
    ///
    /// Insertion is only attempted after deletion succeeded. The timestamp is
    /// read from the clock immediately before the insert is issued. Dropping
    /// the returned future abandons the save and nothing is reported.
    pub async fn save(&self, forecast: WeatherForecast) -> Result<(), SaveError<S::Error>> {
        self.store.delete_cached_forecast().await.map_err(|err| {
            tracing::debug!(error = %err, "cache deletion failed");
            SaveError::Deletion(err)
        })?;

        self.cache(forecast).await
    }

    async fn cache(&self, forecast: WeatherForecast) -> Result<(), SaveError<S::Error>> {
        let timestamp = (self.current_date)();
        self.store.insert(forecast.into(), timestamp).await.map_err(|err| {
            tracing::debug!(error = %err, "cache insertion failed");
            SaveError::Insertion(err)
        })?;

        tracing::debug!(%timestamp, "forecast cached");
        Ok(())
    }
}

/// One stored snapshot and when it was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedForecast {
    pub forecast: LocalWeatherForecast,
    pub timestamp: DateTime<Utc>,
}

/// Process-local store; holds at most one snapshot.
#[derive(Debug, Default)]
pub struct InMemoryForecastStore {
    cached: RwLock<Option<CachedForecast>>,
}

impl InMemoryForecastStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn retrieve(&self) -> Option<CachedForecast> {
        self.cached.read().await.clone()
    }
}

#[async_trait]
impl WeatherForecastStore for InMemoryForecastStore {
    type Error = Infallible;

    async fn delete_cached_forecast(&self) -> Result<(), Self::Error> {
        *self.cached.write().await = None;
        Ok(())
    }

    async fn insert(
        &self,
        forecast: LocalWeatherForecast,
        timestamp: DateTime<Utc>,
    ) -> Result<(), Self::Error> {
        *self.cached.write().await = Some(CachedForecast { forecast, timestamp });
        Ok(())
    }
}
