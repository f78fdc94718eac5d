use serde::{Deserialize, Serialize};

/// One observed candle vessel, typically derived from an upstream image
/// analysis step. All fields except `shape` are optional: partial vessel
/// data (e.g. a photo where the height could not be inferred) is expected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VesselObservation {
    pub shape: String,
    pub diameter_inches: Option<f64>,
    pub height_inches: Option<f64>,
    pub texture: Option<String>,
}

impl VesselObservation {
    pub fn new(shape: impl Into<String>) -> Self {
        Self {
            shape: shape.into(),
            diameter_inches: None,
            height_inches: None,
            texture: None,
        }
    }
}

/// One mold row from the catalog. Rows are owned and mutated by the
/// catalog-management workflow; this crate only reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoldCandidate {
    pub id: String,
    pub shape_type: String,
    pub diameter_inches: Option<f64>,
    pub height_inches: Option<f64>,
    #[serde(default)]
    pub style_tags: Vec<String>,
    pub is_active: bool,
}

/// Outcome of one suggestion call. `all_candidates` carries the full active
/// list so a UI can offer a manual override next to the suggestion.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub suggested_mold: MoldCandidate,
    pub confidence: f64,
    pub all_candidates: Vec<MoldCandidate>,
}
