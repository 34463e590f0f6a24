pub mod engine;
pub mod mentions;
pub mod pipeline;
pub mod stocks;

pub use crate::domain::model::{ScoredMention, Sentiment, StockEntry, VideoRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, SentimentModel, VideoPlatform};
pub use crate::utils::error::Result;
