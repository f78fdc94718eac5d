pub mod engine;
pub mod scorer;
pub mod selector;

pub use crate::domain::model::{MatchResult, MoldCandidate, VesselObservation};
pub use crate::domain::ports::{ConfigProvider, MoldCatalog};
pub use crate::utils::error::Result;
pub use engine::SuggestionEngine;
pub use scorer::{MatchScorer, ScoringWeights};
pub use selector::select_best;
