use crate::domain::model::VideoRecord;
use crate::domain::ports::VideoPlatform;
use crate::utils::error::{PulseError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const PAGE_SIZE: u32 = 50;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// YouTube Data API client: video-URL-to-channel lookup plus the paginated
/// per-channel search. Knows nothing about stocks.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Extracts the video id from a watch URL. Accepts the long
    /// `watch?v=<id>` form and the short `youtu.be/<id>` form.
    fn video_id(video_url: &str) -> Result<String> {
        let parsed = Url::parse(video_url).map_err(|e| PulseError::ResolutionError {
            url: video_url.to_string(),
            reason: format!("invalid video URL: {}", e),
        })?;

        let id = match parsed.host_str() {
            Some("youtu.be") => parsed
                .path_segments()
                .and_then(|mut segments| segments.next())
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            Some(_) => parsed
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned()),
            None => None,
        };

        id.ok_or_else(|| PulseError::ResolutionError {
            url: video_url.to_string(),
            reason: "no video id in URL".to_string(),
        })
    }
}

#[async_trait::async_trait]
impl VideoPlatform for YouTubeClient {
    /// Looks up the channel that owns the given video. Any failure here is a
    /// `ResolutionError`; the caller treats it as fatal for the whole batch.
    async fn resolve_channel(&self, video_url: &str) -> Result<String> {
        let video_id = Self::video_id(video_url)?;

        let response = self
            .http
            .get(format!("{}/videos", self.base_url))
            .query(&[
                ("key", self.api_key.as_str()),
                ("part", "snippet"),
                ("id", video_id.as_str()),
            ])
            .send()
            .await
            .map_err(|e| PulseError::ResolutionError {
                url: video_url.to_string(),
                reason: format!("platform unreachable: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PulseError::ResolutionError {
                url: video_url.to_string(),
                reason: format!("platform returned {}", status),
            });
        }

        let body: VideoListResponse =
            response
                .json()
                .await
                .map_err(|e| PulseError::ResolutionError {
                    url: video_url.to_string(),
                    reason: format!("malformed video lookup response: {}", e),
                })?;

        body.items
            .and_then(|items| items.into_iter().next())
            .and_then(|item| item.snippet)
            .and_then(|snippet| snippet.channel_id)
            .ok_or_else(|| PulseError::ResolutionError {
                url: video_url.to_string(),
                reason: "video not found or has no channel".to_string(),
            })
    }

    /// Collects all videos the channel published inside the window, following
    /// continuation tokens until none remain. Pages arrive newest-first; the
    /// order is passed through as returned.
    ///
    /// A non-success page or a page missing the item list stops pagination
    /// and returns what was accumulated so far rather than an error. Partial
    /// results are deliberately tolerated here.
    async fn channel_videos(
        &self,
        channel_id: &str,
        published_after: Option<DateTime<Utc>>,
    ) -> Result<Vec<VideoRecord>> {
        let page_size = PAGE_SIZE.to_string();
        let mut records = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self.http.get(format!("{}/search", self.base_url)).query(&[
                ("key", self.api_key.as_str()),
                ("channelId", channel_id),
                ("part", "snippet,id"),
                ("type", "video"),
                ("order", "date"),
                ("maxResults", page_size.as_str()),
            ]);

            if let Some(after) = published_after {
                request = request.query(&[(
                    "publishedAfter",
                    after.to_rfc3339_opts(SecondsFormat::Secs, true),
                )]);
            }
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response = request.send().await?;

            let status = response.status();
            if !status.is_success() {
                tracing::warn!(
                    "Search page for channel {} returned {}; keeping {} accumulated videos",
                    channel_id,
                    status,
                    records.len()
                );
                break;
            }

            let page: SearchResponse = match response.json().await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(
                        "Malformed search page for channel {}: {}; keeping {} accumulated videos",
                        channel_id,
                        e,
                        records.len()
                    );
                    break;
                }
            };

            let Some(items) = page.items else {
                tracing::warn!(
                    "Search page for channel {} has no item list; keeping {} accumulated videos",
                    channel_id,
                    records.len()
                );
                break;
            };

            for item in items {
                match item.snippet.and_then(SearchSnippet::into_record) {
                    Some(record) => records.push(record),
                    None => tracing::debug!("Skipping search item with incomplete snippet"),
                }
            }

            page_token = page.next_page_token;
            if page_token.is_none() {
                break;
            }
        }

        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    items: Option<Vec<VideoItem>>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    snippet: Option<VideoSnippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoSnippet {
    channel_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    items: Option<Vec<SearchItem>>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    snippet: Option<SearchSnippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchSnippet {
    published_at: Option<String>,
    title: Option<String>,
    description: Option<String>,
    channel_title: Option<String>,
}

impl SearchSnippet {
    /// Maps the loose API shape into a typed record, dropping items that are
    /// missing any required field.
    fn into_record(self) -> Option<VideoRecord> {
        Some(VideoRecord {
            published_at: self.published_at?,
            title: self.title?,
            description: self.description?,
            channel_name: self.channel_title?,
        })
    }
}
