use crate::domain::model::{TweetArchive, TweetID, TweetRecord};

/// Outcome of a single syndication lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// 200 response with a decodable JSON body.
    Fetched(TweetRecord),
    /// The CDN answered with a non-200 status.
    Rejected,
}

/// Everything a batch run produced: the archive keyed by `id_str` and the
/// ids that could not be fetched, in completion order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub archive: TweetArchive,
    pub failed: Vec<TweetID>,
}
