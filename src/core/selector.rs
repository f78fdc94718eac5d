use crate::core::scorer::MatchScorer;
use crate::domain::model::{MatchResult, MoldCandidate, VesselObservation};
use crate::utils::error::{MatchError, Result};

/// Reduces the candidate list to the single best-scoring mold.
///
/// The running best starts at the first candidate with a score of 0, and a
/// later candidate only takes over on a strictly greater score. That makes
/// the first candidate the deterministic fallback when nothing scores above
/// zero, and breaks every tie in favor of the earliest candidate.
pub fn select_best(
    scorer: &MatchScorer,
    observation: &VesselObservation,
    candidates: Vec<MoldCandidate>,
) -> Result<MatchResult> {
    if candidates.is_empty() {
        return Err(MatchError::EmptyCandidateSet);
    }

    let mut best_index = 0;
    let mut best_score = 0.0;

    for (index, candidate) in candidates.iter().enumerate() {
        let score = scorer.score(observation, candidate);
        tracing::trace!(mold_id = %candidate.id, score, "scored candidate");
        if score > best_score {
            best_index = index;
            best_score = score;
        }
    }

    Ok(MatchResult {
        suggested_mold: candidates[best_index].clone(),
        confidence: best_score.min(100.0),
        all_candidates: candidates,
    })
}
