use crate::utils::error::{PulseError, Result};
use serde::Deserialize;
use std::path::Path;

/// Optional TOML file overriding the seed video list and the publish window.
///
/// ```toml
/// videos = [
///     "https://www.youtube.com/watch?v=RKFxWzJuQTw",
/// ]
/// window_days = 7
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Watchlist {
    pub videos: Option<Vec<String>>,
    pub window_days: Option<u32>,
}

impl Watchlist {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| PulseError::ConfigError {
            message: format!(
                "failed to parse watchlist {}: {}",
                path.as_ref().display(),
                e
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_watchlist() {
        let watchlist: Watchlist = toml::from_str(
            r#"
            videos = ["https://www.youtube.com/watch?v=abc", "https://youtu.be/def"]
            window_days = 3
            "#,
        )
        .unwrap();

        assert_eq!(watchlist.videos.unwrap().len(), 2);
        assert_eq!(watchlist.window_days, Some(3));
    }

    #[test]
    fn test_parse_empty_watchlist() {
        let watchlist: Watchlist = toml::from_str("").unwrap();
        assert!(watchlist.videos.is_none());
        assert!(watchlist.window_days.is_none());
    }
}
