use crate::core::scorer::MatchScorer;
use crate::core::selector::select_best;
use crate::domain::model::{MatchResult, VesselObservation};
use crate::domain::ports::MoldCatalog;
use crate::utils::error::{MatchError, Result};

/// Fetch-then-score orchestration: pulls the active mold list through the
/// catalog port and hands it to the selector. The scorer is never invoked
/// on an empty catalog; that case surfaces as `NoMoldsAvailable` so the
/// caller can report it as a not-found condition.
pub struct SuggestionEngine<C: MoldCatalog> {
    catalog: C,
    scorer: MatchScorer,
}

impl<C: MoldCatalog> SuggestionEngine<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            scorer: MatchScorer::default(),
        }
    }

    pub fn with_scorer(catalog: C, scorer: MatchScorer) -> Self {
        Self { catalog, scorer }
    }

    pub async fn suggest(&self, observation: &VesselObservation) -> Result<MatchResult> {
        tracing::debug!(shape = %observation.shape, "fetching active molds");
        let candidates = self.catalog.list_active().await?;
        tracing::debug!("catalog returned {} active molds", candidates.len());

        if candidates.is_empty() {
            return Err(MatchError::NoMoldsAvailable);
        }

        let result = select_best(&self.scorer, observation, candidates)?;
        tracing::info!(
            mold_id = %result.suggested_mold.id,
            confidence = result.confidence,
            "selected mold"
        );
        Ok(result)
    }
}
