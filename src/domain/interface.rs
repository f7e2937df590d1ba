use crate::domain::model::*;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ITweetRepository {
    async fn load_ids(&self) -> Result<Vec<TweetID>>;
    async fn fetch_by_id(&self, id: &TweetID) -> Result<FetchOutcome>;
    async fn save_archive(&self, archive: &TweetArchive) -> Result<()>;
    async fn save_failed(&self, failed: &[TweetID]) -> Result<()>;
}

#[async_trait]
pub trait IHttpClient {
    async fn get(
        &self,
        url: &str,
        header: Option<reqwest::header::HeaderMap>,
    ) -> Result<reqwest::Response>;
}
