use crate::domain::interface::*;
use crate::domain::model::*;
use crate::error::*;
use futures::stream::{self, StreamExt};
use std::sync::Arc;

#[derive(Clone)]
pub struct BatchService {
    tweet_repo: Arc<dyn ITweetRepository + Send + Sync>,
    concurrency: usize,
}

impl BatchService {
    pub fn new(tweet_repo: Arc<dyn ITweetRepository + Send + Sync>, concurrency: usize) -> Self {
        Self {
            tweet_repo,
            concurrency: concurrency.max(1),
        }
    }

    /// Load the id list, fetch everything, persist the archive and the
    /// failed ids. Output is written once, after the whole batch settled.
    pub async fn run(&self) -> Result<BatchReport> {
        let ids = self.tweet_repo.load_ids().await?;
        let report = self.fetch_all(ids).await;

        self.tweet_repo.save_archive(&report.archive).await?;
        self.tweet_repo.save_failed(&report.failed).await?;

        Ok(report)
    }

    /// Fan out one lookup per id, at most `concurrency` in flight. Ids whose
    /// lookup was rejected or errored land in the failure list instead of
    /// aborting the batch; completion order decides the failure list order
    /// and which record wins a colliding `id_str` key.
    pub async fn fetch_all(&self, ids: Vec<TweetID>) -> BatchReport {
        let mut report = BatchReport::default();

        let mut outcomes = stream::iter(ids)
            .map(|id| {
                let repo = self.tweet_repo.clone();
                async move { (id, repo.fetch_by_id(&id).await) }
            })
            .buffer_unordered(self.concurrency);

        while let Some((id, outcome)) = outcomes.next().await {
            match outcome {
                Ok(FetchOutcome::Fetched(record)) => match record.id_str() {
                    Some(id_str) => {
                        report.archive.insert(id_str.to_string(), record);
                    }
                    None => {
                        log::warn!("tweet {} has no id_str, recording as failed", id);
                        report.failed.push(id);
                    }
                },
                Ok(FetchOutcome::Rejected) => {
                    report.failed.push(id);
                }
                Err(err) => {
                    log::warn!("fetch for {} failed: {}", id, err.error_type());
                    report.failed.push(id);
                }
            }
        }

        report
    }
}
