use crate::domain::model::{ScoredMention, StockEntry};
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Runs one query through the pipeline stages. The caller resolves the stock
/// first; an unresolved input never reaches this point, so no network or
/// model call happens for it.
pub struct AnalysisEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AnalysisEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self, stock: &StockEntry) -> Result<Vec<ScoredMention>> {
        tracing::info!(
            "Analyzing mentions of {} ({})",
            stock.symbol,
            stock.company_name
        );

        tracing::info!("Fetching channel videos...");
        let videos = self.pipeline.fetch().await?;
        tracing::info!("Fetched {} videos", videos.len());

        let matched = self.pipeline.filter(videos, stock);
        tracing::info!("{} videos mention the stock", matched.len());

        if matched.is_empty() {
            return Ok(Vec::new());
        }

        tracing::info!("Scoring {} mentions...", matched.len());
        let scored = self.pipeline.score(matched).await?;

        Ok(scored)
    }
}
