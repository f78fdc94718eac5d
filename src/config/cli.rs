use crate::core::ScoringWeights;
use crate::domain::model::VesselObservation;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "mold-match")]
#[command(about = "Suggest a candle mold for an observed vessel")]
pub struct CliConfig {
    /// Observed vessel shape (e.g. cylinder, bowl, sphere, scallop)
    #[arg(long)]
    pub shape: String,

    /// Observed vessel diameter in inches
    #[arg(long)]
    pub diameter: Option<f64>,

    /// Observed vessel height in inches
    #[arg(long)]
    pub height: Option<f64>,

    /// Observed surface texture (e.g. "ribbed", "smooth")
    #[arg(long)]
    pub texture: Option<String>,

    /// Mold catalog REST endpoint
    #[arg(long, default_value = "http://localhost:54321/rest/v1/molds")]
    pub endpoint: String,

    /// API key for the catalog endpoint
    #[arg(long)]
    pub api_key: Option<String>,

    /// Read the catalog from a local CSV file instead of the REST endpoint
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Load catalog endpoint and scoring weights from a TOML file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the full match result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl CliConfig {
    pub fn observation(&self) -> VesselObservation {
        VesselObservation {
            shape: self.shape.clone(),
            diameter_inches: self.diameter,
            height_inches: self.height,
            texture: self.texture.clone(),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn catalog_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("shape", &self.shape)?;
        validation::validate_positive_dimension("diameter", self.diameter)?;
        validation::validate_positive_dimension("height", self.height)?;

        // the endpoint only matters when the catalog is not a local file
        if self.csv.is_none() && self.config.is_none() {
            validation::validate_url("endpoint", &self.endpoint)?;
        }

        Ok(())
    }
}
