use crate::core::ScoringWeights;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MatchError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration for the suggester, for deployments where the
/// catalog endpoint and tuned scoring weights live outside the binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: CatalogConfig,
    pub scoring: Option<ScoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

/// Partial override of the default scoring weights. Any field left out
/// keeps its production default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub shape_weight: Option<f64>,
    pub style_weight: Option<f64>,
    pub dimension_weight: Option<f64>,
    pub proximity_cutoff: Option<f64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MatchError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| MatchError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with the environment value,
    /// leaving unresolved placeholders untouched.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("catalog.endpoint", &self.catalog.endpoint)?;

        if let Some(timeout) = self.catalog.timeout_seconds {
            if timeout == 0 {
                return Err(MatchError::InvalidConfigValueError {
                    field: "catalog.timeout_seconds".to_string(),
                    value: timeout.to_string(),
                    reason: "Timeout must be at least one second".to_string(),
                });
            }
        }

        if let Some(scoring) = &self.scoring {
            if let Some(weight) = scoring.shape_weight {
                validation::validate_non_negative("scoring.shape_weight", weight)?;
            }
            if let Some(weight) = scoring.style_weight {
                validation::validate_non_negative("scoring.style_weight", weight)?;
            }
            if let Some(weight) = scoring.dimension_weight {
                validation::validate_non_negative("scoring.dimension_weight", weight)?;
            }
            if let Some(cutoff) = scoring.proximity_cutoff {
                validation::validate_unit_interval("scoring.proximity_cutoff", cutoff)?;
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn catalog_endpoint(&self) -> &str {
        &self.catalog.endpoint
    }

    fn api_key(&self) -> Option<&str> {
        self.catalog.api_key.as_deref()
    }

    fn scoring_weights(&self) -> ScoringWeights {
        let defaults = ScoringWeights::default();
        let Some(scoring) = &self.scoring else {
            return defaults;
        };

        ScoringWeights {
            shape_weight: scoring.shape_weight.unwrap_or(defaults.shape_weight),
            style_weight: scoring.style_weight.unwrap_or(defaults.style_weight),
            dimension_weight: scoring
                .dimension_weight
                .unwrap_or(defaults.dimension_weight),
            proximity_cutoff: scoring
                .proximity_cutoff
                .unwrap_or(defaults.proximity_cutoff),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
