pub mod watchlist;

use crate::adapters::{inference, youtube};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PulseError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use self::watchlist::Watchlist;

/// Seed videos identifying the fixed set of financial news channels.
pub const DEFAULT_SEED_VIDEOS: &[&str] = &[
    "https://www.youtube.com/watch?v=RKFxWzJuQTw",
    "https://www.youtube.com/watch?v=Xa5cc8mgczc",
    "https://www.youtube.com/watch?v=EP6JqpjtUjM",
    "https://www.youtube.com/watch?v=3FnQmDld9gA",
];

const DEFAULT_WINDOW_DAYS: u32 = 7;

#[derive(Debug, Clone, Parser)]
#[command(name = "stockpulse")]
#[command(about = "Sentiment of stock mentions in recent financial news videos")]
pub struct CliConfig {
    #[arg(long, default_value = youtube::DEFAULT_BASE_URL)]
    pub youtube_api_base: String,

    #[arg(long, default_value = inference::DEFAULT_BASE_URL)]
    pub inference_api_base: String,

    #[arg(long, default_value = inference::DEFAULT_MODEL)]
    pub sentiment_model: String,

    #[arg(
        long,
        value_delimiter = ',',
        help = "Seed video URLs identifying the channels to scan"
    )]
    pub seed_videos: Vec<String>,

    #[arg(long, help = "TOML watchlist file overriding seed videos and window")]
    pub watchlist: Option<String>,

    #[arg(
        long,
        default_value_t = DEFAULT_WINDOW_DAYS,
        help = "Publish window in days, 0 for unbounded"
    )]
    pub window_days: u32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Applies the watchlist file (if any) and falls back to the built-in
    /// seed list when no videos were given anywhere.
    pub fn finalize(&mut self) -> Result<()> {
        if let Some(path) = &self.watchlist {
            let watchlist = Watchlist::from_file(path)?;
            if let Some(videos) = watchlist.videos {
                self.seed_videos = videos;
            }
            if let Some(days) = watchlist.window_days {
                self.window_days = days;
            }
        }

        if self.seed_videos.is_empty() {
            self.seed_videos = DEFAULT_SEED_VIDEOS.iter().map(|s| s.to_string()).collect();
        }

        Ok(())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("youtube_api_base", &self.youtube_api_base)?;
        validate_url("inference_api_base", &self.inference_api_base)?;
        validate_non_empty_string("sentiment_model", &self.sentiment_model)?;
        for video_url in &self.seed_videos {
            validate_url("seed_videos", video_url)?;
        }
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn seed_videos(&self) -> &[String] {
        &self.seed_videos
    }

    fn window_days(&self) -> u32 {
        self.window_days
    }
}

/// Secrets come from the process environment only (a `.env` file is honored
/// at startup). The platform key is required before anything is fetched.
#[derive(Debug, Clone)]
pub struct Secrets {
    pub youtube_api_key: String,
    pub hf_api_token: Option<String>,
}

impl Secrets {
    pub fn from_env() -> Result<Self> {
        let youtube_api_key = std::env::var("YOUTUBE_API_KEY").map_err(|_| {
            PulseError::MissingConfigError {
                field: "YOUTUBE_API_KEY".to_string(),
            }
        })?;

        let hf_api_token = std::env::var("HF_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        Ok(Self {
            youtube_api_key,
            hf_api_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            youtube_api_base: youtube::DEFAULT_BASE_URL.to_string(),
            inference_api_base: inference::DEFAULT_BASE_URL.to_string(),
            sentiment_model: inference::DEFAULT_MODEL.to_string(),
            seed_videos: vec![],
            watchlist: None,
            window_days: DEFAULT_WINDOW_DAYS,
            verbose: false,
        }
    }

    #[test]
    fn test_finalize_fills_default_seed_videos() {
        let mut config = base_config();
        config.finalize().unwrap();
        assert_eq!(config.seed_videos.len(), DEFAULT_SEED_VIDEOS.len());
    }

    #[test]
    fn test_finalize_keeps_explicit_seed_videos() {
        let mut config = base_config();
        config.seed_videos = vec!["https://www.youtube.com/watch?v=abc".to_string()];
        config.finalize().unwrap();
        assert_eq!(config.seed_videos.len(), 1);
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = base_config();
        config.finalize().unwrap();
        assert!(config.validate().is_ok());

        config.youtube_api_base = "not-a-url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_seed_video() {
        let mut config = base_config();
        config.seed_videos = vec!["ftp://example.com/video".to_string()];
        assert!(config.validate().is_err());
    }
}
