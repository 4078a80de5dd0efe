use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub catalog: CatalogConfig,
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub dataset_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub default_neighbors: usize,
    pub max_neighbors: usize,
    pub normalization: NormalizationMode,
}

/// How the z-score parameters are fitted before a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NormalizationMode {
    /// Fit mean/std on the filtered candidate set of each request.
    PerRequest,
    /// Fit mean/std once over the whole catalog at startup.
    Global,
}

impl NormalizationMode {
    fn parse(value: &str) -> Result<Self> {
        match value {
            "per-request" | "per_request" => Ok(NormalizationMode::PerRequest),
            "global" => Ok(NormalizationMode::Global),
            other => Err(Error::Config(format!(
                "Invalid NORMALIZATION value: {other} (expected per-request or global)"
            ))),
        }
    }
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let dataset_path = std::env::var("DATASET_PATH")
            .unwrap_or_else(|_| "./data/recipes.csv".to_string())
            .into();

        let default_neighbors = std::env::var("DEFAULT_NEIGHBORS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid DEFAULT_NEIGHBORS value".to_string()))?;

        let max_neighbors = std::env::var("MAX_NEIGHBORS")
            .unwrap_or_else(|_| "20".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_NEIGHBORS value".to_string()))?;

        let normalization = NormalizationMode::parse(
            &std::env::var("NORMALIZATION").unwrap_or_else(|_| "per-request".to_string()),
        )?;

        Ok(Settings {
            catalog: CatalogConfig { dataset_path },
            engine: EngineConfig {
                default_neighbors,
                max_neighbors,
                normalization,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.engine.default_neighbors == 0 {
            return Err(Error::Config(
                "Default neighbor count must be non-zero".to_string(),
            ));
        }

        if self.engine.max_neighbors < self.engine.default_neighbors {
            return Err(Error::Config(
                "Maximum neighbor count must be at least the default".to_string(),
            ));
        }

        Ok(())
    }
}
