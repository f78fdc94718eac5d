pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{CsvCatalog, RestCatalog};
pub use crate::core::{select_best, MatchScorer, ScoringWeights, SuggestionEngine};
pub use domain::model::{MatchResult, MoldCandidate, VesselObservation};
pub use domain::ports::{ConfigProvider, MoldCatalog};
pub use utils::error::{MatchError, Result};
