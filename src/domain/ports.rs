use crate::domain::model::{ScoredMention, Sentiment, StockEntry, VideoRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// External video platform: resolves a video URL to its owning channel and
/// lists a channel's recent uploads.
#[async_trait]
pub trait VideoPlatform: Send + Sync {
    async fn resolve_channel(&self, video_url: &str) -> Result<String>;

    async fn channel_videos(
        &self,
        channel_id: &str,
        published_after: Option<DateTime<Utc>>,
    ) -> Result<Vec<VideoRecord>>;
}

/// Pre-trained text classifier. Stateless per call; labels are opaque tokens.
#[async_trait]
pub trait SentimentModel: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Sentiment>;
}

pub trait ConfigProvider: Send + Sync {
    fn seed_videos(&self) -> &[String];
    fn window_days(&self) -> u32;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<Vec<VideoRecord>>;
    fn filter(&self, records: Vec<VideoRecord>, stock: &StockEntry) -> Vec<VideoRecord>;
    async fn score(&self, records: Vec<VideoRecord>) -> Result<Vec<ScoredMention>>;
}
