use std::{io, path::PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::fs;
use weather_core::{CachedForecast, LocalWeatherForecast, WeatherForecastStore};

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("Cache file I/O failed for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cache file {} is not valid: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Keeps the cached snapshot as a single JSON document on disk.
#[derive(Debug, Clone)]
pub struct FileForecastStore {
    path: PathBuf,
}

impl FileForecastStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub async fn retrieve(&self) -> Result<Option<CachedForecast>, FileStoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| FileStoreError::Json { path: self.path.clone(), source })
    }

    fn io_error(&self, source: io::Error) -> FileStoreError {
        FileStoreError::Io { path: self.path.clone(), source }
    }
}

#[async_trait]
impl WeatherForecastStore for FileForecastStore {
    type Error = FileStoreError;

    async fn delete_cached_forecast(&self) -> Result<(), Self::Error> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.io_error(err)),
        }
    }

    async fn insert(
        &self,
        forecast: LocalWeatherForecast,
        timestamp: DateTime<Utc>,
    ) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|err| self.io_error(err))?;
        }

        let entry = CachedForecast { forecast, timestamp };
        let bytes = serde_json::to_vec_pretty(&entry)
            .map_err(|source| FileStoreError::Json { path: self.path.clone(), source })?;

        // Write next to the target and rename so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, bytes).await.map_err(|err| self.io_error(err))?;
        fs::rename(&tmp, &self.path).await.map_err(|err| self.io_error(err))?;

        tracing::debug!(path = %self.path.display(), "forecast written to cache file");
        Ok(())
    }
}
