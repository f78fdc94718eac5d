use crate::core::ScoringWeights;
use crate::domain::model::MoldCandidate;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of eligible mold candidates. Implementations are expected to
/// return only rows with `is_active == true`.
#[async_trait]
pub trait MoldCatalog: Send + Sync {
    async fn list_active(&self) -> Result<Vec<MoldCandidate>>;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_endpoint(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn scoring_weights(&self) -> ScoringWeights;
}
