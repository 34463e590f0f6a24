pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use adapters::{HostedSentimentModel, YouTubeClient};
pub use config::{CliConfig, Secrets};
pub use core::{engine::AnalysisEngine, pipeline::MentionPipeline, stocks::StockIndex};
pub use utils::error::{PulseError, Result};
