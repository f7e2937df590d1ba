use crate::domain::interface::*;
use crate::domain::model::*;
use crate::error::*;
use crate::infra::JsonStore;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

const SYNDICATION_URL: &str = "https://cdn.syndication.twimg.com/tweet-result";

/// Fetches syndicated tweets from the CDN and persists the run's results
/// as JSON files.
pub struct TweetRepository {
    store: JsonStore,
    http_client: Arc<dyn IHttpClient + Sync + Send>,
    ids_path: PathBuf,
    archive_path: PathBuf,
    failed_path: PathBuf,
}

impl TweetRepository {
    pub fn new(
        store: JsonStore,
        http_client: Arc<dyn IHttpClient + Sync + Send>,
        ids_path: PathBuf,
        archive_path: PathBuf,
        failed_path: PathBuf,
    ) -> Self {
        Self {
            store,
            http_client,
            ids_path,
            archive_path,
            failed_path,
        }
    }
}

#[async_trait]
impl ITweetRepository for TweetRepository {
    async fn load_ids(&self) -> Result<Vec<TweetID>> {
        self.store.read(&self.ids_path).await
    }

    async fn fetch_by_id(&self, id: &TweetID) -> Result<FetchOutcome> {
        let url = format!("{}?id={}", SYNDICATION_URL, id);
        let response = self.http_client.get(&url, None).await?;

        if response.status() != reqwest::StatusCode::OK {
            return Ok(FetchOutcome::Rejected);
        }

        let body = response.text().await?;
        let record = serde_json::from_str::<TweetRecord>(&body)
            .map_err(|err| ServiceError::new(RepositoryError::InvalidRecord, err))?;

        Ok(FetchOutcome::Fetched(record))
    }

    async fn save_archive(&self, archive: &TweetArchive) -> Result<()> {
        self.store.write(&self.archive_path, archive).await
    }

    async fn save_failed(&self, failed: &[TweetID]) -> Result<()> {
        self.store.write(&self.failed_path, failed).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockHttpClient {
        status: reqwest::StatusCode,
        body: String,
        requested: Mutex<Vec<String>>,
    }

    impl MockHttpClient {
        fn new(status: reqwest::StatusCode, body: &str) -> Self {
            MockHttpClient {
                status,
                body: body.to_string(),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl IHttpClient for MockHttpClient {
        async fn get(
            &self,
            url: &str,
            _header: Option<reqwest::header::HeaderMap>,
        ) -> Result<reqwest::Response> {
            self.requested.lock().unwrap().push(url.to_string());
            let response = http::Response::builder()
                .status(self.status)
                .body(self.body.clone())
                .unwrap();
            Ok(response.into())
        }
    }

    fn repo(http_client: Arc<MockHttpClient>) -> TweetRepository {
        TweetRepository::new(
            JsonStore::new(),
            http_client,
            PathBuf::from("server/ids.json"),
            PathBuf::from("server/db.json"),
            PathBuf::from("server/failed_ids.json"),
        )
    }

    #[tokio::test]
    async fn it_should_fetch_a_record_from_the_tweet_result_endpoint() {
        let client = Arc::new(MockHttpClient::new(
            reqwest::StatusCode::OK,
            r#"{"id_str": "20", "text": "just setting up my twttr"}"#,
        ));
        let repo = repo(client.clone());

        let outcome = repo.fetch_by_id(&TweetID(20)).await.unwrap();

        let requested = client.requested.lock().unwrap();
        assert_eq!(requested.len(), 1);
        assert_eq!(
            requested[0],
            "https://cdn.syndication.twimg.com/tweet-result?id=20"
        );
        match outcome {
            FetchOutcome::Fetched(record) => assert_eq!(record.id_str(), Some("20")),
            other => panic!("expected a fetched record, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn it_should_reject_on_a_non_200_status() {
        let client = Arc::new(MockHttpClient::new(
            reqwest::StatusCode::NOT_FOUND,
            "not found",
        ));
        let repo = repo(client);

        let outcome = repo.fetch_by_id(&TweetID(404)).await.unwrap();

        assert_eq!(outcome, FetchOutcome::Rejected);
    }

    #[tokio::test]
    async fn it_should_report_an_undecodable_body_as_invalid_record() {
        let client = Arc::new(MockHttpClient::new(reqwest::StatusCode::OK, "<html>"));
        let repo = repo(client);

        let err = repo.fetch_by_id(&TweetID(1)).await.unwrap_err();

        assert!(err.is_error_of(RepositoryError::InvalidRecord));
    }
}
