use crate::domain::model::{MoldCandidate, VesselObservation};
use serde::{Deserialize, Serialize};

/// Weights and thresholds for the partial-credit match score.
///
/// The defaults reproduce the production constants: shape dominates at 50
/// points, a style-tag hit is worth 30, and each dimension contributes up to
/// 20 scaled by proximity. `proximity_cutoff` is the relative difference at
/// which a dimension stops counting at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub shape_weight: f64,
    pub style_weight: f64,
    pub dimension_weight: f64,
    pub proximity_cutoff: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            shape_weight: 50.0,
            style_weight: 30.0,
            dimension_weight: 20.0,
            proximity_cutoff: 0.20,
        }
    }
}

/// Scores a single observation against a single mold candidate.
///
/// The score is the sum of four independent terms; missing or unusable data
/// on either side skips the term rather than penalizing it. The maximum
/// attainable total under default weights is 120 (50 + 30 + 20 + 20).
#[derive(Debug, Clone, Default)]
pub struct MatchScorer {
    weights: ScoringWeights,
}

impl MatchScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn score(&self, observation: &VesselObservation, candidate: &MoldCandidate) -> f64 {
        let mut total = 0.0;

        // Shape is the dominant signal: a wrong-shape mold is not usable,
        // a wrong-size one is recoverable. Comparison is case-sensitive,
        // matching the catalog's stored shape types verbatim.
        if candidate.shape_type == observation.shape {
            total += self.weights.shape_weight;
        }

        if let Some(texture) = observation.texture.as_deref() {
            if !texture.trim().is_empty()
                && !candidate.style_tags.is_empty()
                && style_matches(texture, &candidate.style_tags)
            {
                total += self.weights.style_weight;
            }
        }

        total += self.proximity_term(observation.diameter_inches, candidate.diameter_inches);
        total += self.proximity_term(observation.height_inches, candidate.height_inches);

        total
    }

    /// Proximity credit for one dimension pair, scaled by relative
    /// difference against the nominal mold dimension. A non-positive
    /// nominal value would divide by zero and is treated as unknown.
    fn proximity_term(&self, observed: Option<f64>, nominal: Option<f64>) -> f64 {
        let (Some(observed), Some(nominal)) = (observed, nominal) else {
            return 0.0;
        };
        if observed <= 0.0 || nominal <= 0.0 {
            return 0.0;
        }

        let relative = (observed - nominal).abs() / nominal;
        if relative < self.weights.proximity_cutoff {
            (1.0 - relative) * self.weights.dimension_weight
        } else {
            0.0
        }
    }
}

/// Bidirectional case-insensitive substring test between the observed
/// texture and the candidate's style tags, loose enough to tolerate
/// phrasing differences like "ribbed" vs "fluted/ribbed". Blank tags are
/// ignored: an empty string is a substring of everything.
fn style_matches(texture: &str, tags: &[String]) -> bool {
    let texture = texture.to_lowercase();
    tags.iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .any(|tag| texture.contains(&tag) || tag.contains(&texture))
}
