use crate::error::*;

#[derive(Debug)]
pub enum RepositoryError {
    InvalidRecord,
    SerializationError,
}

impl IServiceError for RepositoryError {
    fn error_type(&self) -> String {
        use RepositoryError::*;

        match self {
            InvalidRecord => "invalid_record",
            SerializationError => "serialization_error",
        }
        .to_string()
    }

    fn status_code(&self) -> http::StatusCode {
        use RepositoryError::*;

        match self {
            InvalidRecord => http::StatusCode::INTERNAL_SERVER_ERROR,
            SerializationError => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
