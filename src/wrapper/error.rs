pub use crate::repository::RepositoryError;
use anyhow::Error;
use std::any::Any;

pub trait IServiceError: Any {
    fn error_type(&self) -> String {
        "internal_server_error".to_string()
    }

    fn status_code(&self) -> http::StatusCode {
        http::StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[derive(Debug)]
pub struct ServiceError {
    type_id: std::any::TypeId,
    error_type: String,
    status_code: http::StatusCode,
    inner: Error,
}

pub type Result<T> = std::result::Result<T, ServiceError>;

impl ServiceError {
    pub fn new<E>(err: impl IServiceError, detail: E) -> ServiceError
    where
        Error: From<E>,
    {
        ServiceError {
            type_id: err.type_id(),
            error_type: err.error_type(),
            status_code: err.status_code(),
            inner: From::from(detail),
        }
    }

    pub fn only(err: impl IServiceError) -> ServiceError {
        ServiceError {
            type_id: err.type_id(),
            error_type: err.error_type(),
            status_code: err.status_code(),
            inner: Error::msg("error"),
        }
    }

    pub fn into_inner(self) -> Error {
        self.inner
    }

    pub fn status_code(&self) -> http::StatusCode {
        self.status_code
    }

    pub fn error_type(&self) -> String {
        self.error_type.clone()
    }

    pub fn is_error_of(&self, err: impl IServiceError) -> bool {
        self.type_id == err.type_id() && self.error_type() == err.error_type()
    }
}

// anyhow::Error can be treated as ServiceError
impl IServiceError for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum E {
        E1,
        E2,
    }

    impl IServiceError for E {
        fn error_type(&self) -> String {
            use E::*;

            match self {
                E1 => "e1",
                E2 => "e2",
            }
            .to_string()
        }

        fn status_code(&self) -> http::StatusCode {
            use E::*;

            match self {
                E1 => http::StatusCode::INTERNAL_SERVER_ERROR,
                E2 => http::StatusCode::BAD_REQUEST,
            }
        }
    }

    #[test]
    fn it_should_handle_errors() {
        let err = ServiceError::only(E::E1);
        assert_eq!(err.error_type(), "e1".to_string());
        assert!(err.is_error_of(E::E1));
        assert!(!err.is_error_of(E::E2));
    }

    #[derive(PartialEq, Debug)]
    enum F {
        E1,
    }

    impl IServiceError for F {
        fn error_type(&self) -> String {
            use F::*;

            match self {
                E1 => "e1",
            }
            .to_string()
        }

        fn status_code(&self) -> http::StatusCode {
            use F::*;

            match self {
                E1 => http::StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
    }

    #[test]
    fn it_should_distinguish_between_different_types_with_same_name() {
        let e1 = ServiceError::only(E::E1);
        let e2 = ServiceError::only(F::E1);

        assert!(!e1.is_error_of(F::E1));
        assert!(!e2.is_error_of(E::E1));
    }
}
