use crate::domain::interface::*;
use crate::error::*;
use async_trait::async_trait;

#[derive(Debug)]
pub enum HttpClientError {
    HttpError,
}

impl IServiceError for HttpClientError {
    fn error_type(&self) -> String {
        use HttpClientError::*;

        match self {
            HttpError => "http_error",
        }
        .to_string()
    }

    fn status_code(&self) -> http::StatusCode {
        use HttpClientError::*;

        match self {
            HttpError => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> ServiceError {
        ServiceError::new(HttpClientError::HttpError, err)
    }
}

/// One shared client for the whole run; connections are reused across the
/// concurrent lookups and HTTP/2 is negotiated via ALPN when the CDN offers it.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> HttpClient {
        HttpClient {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl IHttpClient for HttpClient {
    async fn get(
        &self,
        url: &str,
        header: Option<reqwest::header::HeaderMap>,
    ) -> Result<reqwest::Response> {
        let mut req = self.client.get(url);
        if let Some(h) = header {
            req = req.headers(h);
        }
        let resp = req.send().await?;

        Ok(resp)
    }
}
