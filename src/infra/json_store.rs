use crate::error::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

#[derive(Debug)]
pub enum JsonStoreError {
    IoError,
}

impl IServiceError for JsonStoreError {
    fn error_type(&self) -> String {
        use JsonStoreError::*;

        match self {
            IoError => "io_error",
        }
        .to_string()
    }

    fn status_code(&self) -> http::StatusCode {
        use JsonStoreError::*;

        match self {
            IoError => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> ServiceError {
        ServiceError::new(JsonStoreError::IoError, err)
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> ServiceError {
        ServiceError::new(RepositoryError::SerializationError, err)
    }
}

/// Typed JSON file access. serde_json writes non-ASCII characters as literal
/// UTF-8, so archived tweet text survives byte-for-byte.
#[derive(Clone, Default)]
pub struct JsonStore;

impl JsonStore {
    pub fn new() -> JsonStore {
        JsonStore
    }

    pub async fn read<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let raw = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub async fn write<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        tokio::fs::write(path, raw).await?;
        Ok(())
    }
}
