use crate::domain::model::Sentiment;
use crate::domain::ports::SentimentModel;
use crate::utils::error::{PulseError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_MODEL: &str =
    "mrm8488/distilroberta-finetuned-financial-news-sentiment-analysis";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Client for a hosted text-classification model. One request per text, no
/// batching, no retry; the labels come back as opaque model-defined tokens.
#[derive(Debug, Clone)]
pub struct HostedSentimentModel {
    http: Client,
    base_url: String,
    model: String,
    api_token: Option<String>,
}

impl HostedSentimentModel {
    pub fn new(base_url: String, model: String, api_token: Option<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_token,
        })
    }
}

#[async_trait::async_trait]
impl SentimentModel for HostedSentimentModel {
    async fn classify(&self, text: &str) -> Result<Sentiment> {
        let url = format!("{}/models/{}", self.base_url, self.model);

        let mut request = self.http.post(url).json(&ClassifyRequest {
            inputs: text,
            options: ClassifyOptions {
                wait_for_model: true,
            },
        });
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PulseError::ScoringError {
                message: format!("model request failed: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PulseError::ScoringError {
                message: format!("model returned {}: {}", status, body),
            });
        }

        // Response shape: one candidate list per input, each candidate a
        // label and a confidence score.
        let candidates: Vec<Vec<Candidate>> =
            response.json().await.map_err(|e| PulseError::ScoringError {
                message: format!("malformed model response: {}", e),
            })?;

        candidates
            .into_iter()
            .next()
            .and_then(|ranked| {
                ranked.into_iter().max_by(|a, b| {
                    a.score
                        .partial_cmp(&b.score)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
            })
            .map(|best| Sentiment {
                label: best.label,
                score: best.score,
            })
            .ok_or_else(|| PulseError::ScoringError {
                message: "model returned no candidates".to_string(),
            })
    }
}

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
    options: ClassifyOptions,
}

#[derive(Debug, Serialize)]
struct ClassifyOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    label: String,
    score: f64,
}
