use serde::{Deserialize, Serialize};

/// One row of the static ticker table: a short uppercase symbol and the
/// display name it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockEntry {
    pub symbol: String,
    pub company_name: String,
}

/// A single video as returned by the search endpoint, typed at the fetch
/// boundary. Immutable once created; carries no identity beyond its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub published_at: String,
    pub title: String,
    pub description: String,
    pub channel_name: String,
}

/// Classifier output for one text: an opaque model-defined label and a
/// confidence score in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: String,
    pub score: f64,
}

/// A video that passed the mention filter, with its sentiment attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMention {
    pub video: VideoRecord,
    pub label: String,
    pub score: f64,
}
