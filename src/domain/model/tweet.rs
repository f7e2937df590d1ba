use indexmap::IndexMap;
use serde::*;

/// Raw syndication payload for a single tweet, kept opaque and stored as
/// received. The only field the archiver relies on is `id_str`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TweetRecord(pub serde_json::Map<String, serde_json::Value>);

impl TweetRecord {
    pub fn id_str(&self) -> Option<&str> {
        self.0.get("id_str").and_then(|value| value.as_str())
    }
}

/// Archive of fetched tweets keyed by the canonical `id_str`.
pub type TweetArchive = IndexMap<String, TweetRecord>;
