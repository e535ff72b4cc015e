use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};

use matrixapp_model::io::{parse_matrix, read_matrix};
use matrixapp_model::math::MAX_DIMENSION;
use matrixapp_model::Matrix;

/// Settings shared by every operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub min_dimension: usize,
    pub max_dimension: usize,
    /// Decimal places used when rendering results.
    pub precision: usize,
    /// Tolerance for the `M * inverse(M) == I` check.
    pub verify_tolerance: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            min_dimension: 1,
            max_dimension: MAX_DIMENSION,
            precision: 3,
            verify_tolerance: 1e-9,
        }
    }
}

/// Load a calculator configuration from a JSON file.
pub fn load_calculator_config<P: AsRef<Path>>(path: P) -> Result<CalculatorConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: CalculatorConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

impl CalculatorConfig {
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        let mut config = match matches.get_one::<PathBuf>("config") {
            Some(config_path) => {
                log::info!("[MatrixApp] Using config: {:?}", config_path);
                load_calculator_config(config_path)?
            }
            None => {
                let config = CalculatorConfig::default();
                log::debug!(
                    "[MatrixApp] No config provided; using defaults:\n{}",
                    serde_json::to_string_pretty(&config).unwrap_or_default()
                );
                config
            }
        };

        // Apply CLI overrides
        if let Some(precision) = matches.get_one::<usize>("precision") {
            config.precision = *precision;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_dimension == 0 {
            bail!("min_dimension must be at least 1");
        }
        if self.min_dimension > self.max_dimension {
            bail!(
                "min_dimension ({}) must not exceed max_dimension ({})",
                self.min_dimension,
                self.max_dimension
            );
        }
        if !(self.verify_tolerance.is_finite() && self.verify_tolerance > 0.0) {
            bail!("verify_tolerance must be a positive number");
        }
        Ok(())
    }

    /// Reject matrices whose row or column count falls outside the configured bounds.
    pub fn check_dimensions(&self, matrix: &Matrix) -> Result<()> {
        let range = self.min_dimension..=self.max_dimension;
        if !range.contains(&matrix.rows()) || !range.contains(&matrix.cols()) {
            bail!(
                "Matrix dimensions {}x{} are outside the supported range [{}, {}]",
                matrix.rows(),
                matrix.cols(),
                self.min_dimension,
                self.max_dimension
            );
        }
        Ok(())
    }
}

/// Where the input matrix comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixSource {
    File(PathBuf),
    Inline(String),
}

impl MatrixSource {
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        if let Some(data) = matches.get_one::<String>("data") {
            return Ok(MatrixSource::Inline(data.clone()));
        }
        match matches.get_one::<PathBuf>("input") {
            Some(path) => Ok(MatrixSource::File(path.clone())),
            None => bail!("Provide an input file or --data"),
        }
    }

    pub fn load(&self) -> Result<Matrix> {
        match self {
            MatrixSource::File(path) => {
                if !path.exists() {
                    bail!("File does not exist: {}", path.display());
                }
                read_matrix(path)
            }
            MatrixSource::Inline(text) => parse_matrix(text),
        }
    }
}
