use crate::core::mentions::find_mentions;
use crate::domain::model::{ScoredMention, StockEntry, VideoRecord};
use crate::domain::ports::{ConfigProvider, Pipeline, SentimentModel, VideoPlatform};
use crate::utils::error::Result;
use chrono::{DateTime, Duration, Utc};

/// The fetch → filter → score pipeline over a video platform and a sentiment
/// model. All state is query-scoped; the pipeline itself holds only the
/// collaborators and configuration.
pub struct MentionPipeline<V: VideoPlatform, M: SentimentModel, C: ConfigProvider> {
    platform: V,
    model: M,
    config: C,
}

impl<V: VideoPlatform, M: SentimentModel, C: ConfigProvider> MentionPipeline<V, M, C> {
    pub fn new(platform: V, model: M, config: C) -> Self {
        Self {
            platform,
            model,
            config,
        }
    }

    /// Lower bound for the publish window, or `None` when the window is
    /// disabled (`window_days` of 0 means unbounded).
    fn published_after(&self) -> Option<DateTime<Utc>> {
        match self.config.window_days() {
            0 => None,
            days => Some(Utc::now() - Duration::days(i64::from(days))),
        }
    }
}

#[async_trait::async_trait]
impl<V: VideoPlatform, M: SentimentModel, C: ConfigProvider> Pipeline
    for MentionPipeline<V, M, C>
{
    /// Resolves each seed video to its channel and collects the channel's
    /// recent uploads, concatenated in seed order. A failed channel
    /// resolution aborts the whole batch; per-channel isolation is a known
    /// limitation kept on purpose.
    async fn fetch(&self) -> Result<Vec<VideoRecord>> {
        let published_after = self.published_after();
        let mut records = Vec::new();

        for video_url in self.config.seed_videos() {
            tracing::debug!("Resolving channel for seed video: {}", video_url);
            let channel_id = self.platform.resolve_channel(video_url).await?;

            let mut videos = self
                .platform
                .channel_videos(&channel_id, published_after)
                .await?;
            tracing::debug!("Channel {} returned {} videos", channel_id, videos.len());
            records.append(&mut videos);
        }

        Ok(records)
    }

    fn filter(&self, records: Vec<VideoRecord>, stock: &StockEntry) -> Vec<VideoRecord> {
        find_mentions(records, &stock.symbol, &stock.company_name)
    }

    /// Scores each record independently, in input order. The classifier sees
    /// title and description joined with a single space (unlike the filter,
    /// which concatenates without one). A single model failure fails the
    /// whole request; there is no retry.
    async fn score(&self, records: Vec<VideoRecord>) -> Result<Vec<ScoredMention>> {
        let mut scored = Vec::with_capacity(records.len());

        for video in records {
            let text = format!("{} {}", video.title, video.description);
            let sentiment = self.model.classify(&text).await?;
            scored.push(ScoredMention {
                video,
                label: sentiment.label,
                score: sentiment.score,
            });
        }

        Ok(scored)
    }
}
