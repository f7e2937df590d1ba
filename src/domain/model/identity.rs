use serde::*;
use std::fmt;
use std::hash::Hash;

/// Numeric tweet id as supplied by the caller, distinct from the canonical
/// `id_str` embedded in the syndication response.
#[derive(Clone, Copy, Debug, PartialEq, Default, Eq, Hash, PartialOrd, Ord)]
pub struct TweetID(pub u64);

derive_newtype_serde!(TweetID, u64);

impl fmt::Display for TweetID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// TweetID to u64
impl From<TweetID> for u64 {
    fn from(tweet_id: TweetID) -> Self {
        tweet_id.0
    }
}

// u64 to TweetID
impl From<u64> for TweetID {
    fn from(tweet_id: u64) -> Self {
        TweetID(tweet_id)
    }
}
