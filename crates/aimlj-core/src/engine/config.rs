use crate::core::forcefield::optimise::{OptimiseParseError, parse_optimise_output};
use crate::core::forcefield::reference::{ReferenceFile, ReferenceTable, ScalingExponents};
use crate::core::forcefield::units::UnitConversion;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Parameter '{name}' must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("Unit conversion factor '{name}' must be positive, got {value}")]
    NonPositiveConversion { name: &'static str, value: f64 },
}

/// Everything the Lennard-Jones pipeline reads besides the molecule.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LjConfig {
    pub reference: ReferenceTable,
    pub exponents: ScalingExponents,
    pub units: UnitConversion,
}

impl LjConfig {
    /// Returns a copy with the rows and exponents of `file` laid on top.
    pub fn with_reference_file(&self, file: &ReferenceFile) -> Self {
        let (reference, exponents) = file.apply(&self.reference, &self.exponents);
        Self {
            reference,
            exponents,
            units: self.units,
        }
    }

    /// Applies the final-parameters block of an optimiser output held in memory.
    ///
    /// Never fails: anything that cannot be used is reported through
    /// [`OverrideOutcome::Skipped`] and the current configuration stays valid.
    pub fn apply_optimise_output(&self, text: &str) -> OverrideOutcome {
        match parse_optimise_output(text) {
            Ok(parsed) => {
                let (reference, exponents) = parsed.apply(&self.reference, &self.exponents);
                OverrideOutcome::Applied {
                    config: Self {
                        reference,
                        exponents,
                        units: self.units,
                    },
                    exponents_updated: parsed.exponents.is_some(),
                }
            }
            Err(e) => OverrideOutcome::Skipped(e.into()),
        }
    }

    /// Reads `path` and applies its final-parameters block.
    pub fn apply_optimise_file(&self, path: &Path) -> OverrideOutcome {
        if !path.is_file() {
            return OverrideOutcome::Skipped(OverrideSkipReason::ArtifactMissing(
                path.to_path_buf(),
            ));
        }
        match std::fs::read_to_string(path) {
            Ok(text) => self.apply_optimise_output(&text),
            Err(source) => OverrideOutcome::Skipped(OverrideSkipReason::Unreadable {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

#[derive(Debug, Error)]
pub enum OverrideSkipReason {
    #[error("optimiser output '{}' does not exist", .0.display())]
    ArtifactMissing(PathBuf),
    #[error("optimiser output '{}' could not be read: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] OptimiseParseError),
}

/// Result of trying to override the reference radii from an optimiser run.
#[derive(Debug)]
pub enum OverrideOutcome {
    /// The radii were replaced; `exponents_updated` tells whether alpha/beta were too.
    Applied {
        config: LjConfig,
        exponents_updated: bool,
    },
    /// Nothing was changed.
    Skipped(OverrideSkipReason),
}

impl OverrideOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// Returns the updated configuration, or `fallback` if the override was skipped.
    pub fn config_or(self, fallback: LjConfig) -> LjConfig {
        match self {
            Self::Applied { config, .. } => config,
            Self::Skipped(_) => fallback,
        }
    }
}

#[derive(Default)]
pub struct LjConfigBuilder {
    reference: Option<ReferenceTable>,
    alpha: Option<f64>,
    beta: Option<f64>,
    units: Option<UnitConversion>,
}

impl LjConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reference(mut self, table: ReferenceTable) -> Self {
        self.reference = Some(table);
        self
    }
    pub fn exponents(mut self, exponents: ScalingExponents) -> Self {
        self.alpha = Some(exponents.alpha);
        self.beta = Some(exponents.beta);
        self
    }
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }
    pub fn beta(mut self, beta: f64) -> Self {
        self.beta = Some(beta);
        self
    }
    pub fn units(mut self, units: UnitConversion) -> Self {
        self.units = Some(units);
        self
    }

    pub fn build(self) -> Result<LjConfig, ConfigError> {
        let defaults = ScalingExponents::default();
        let exponents = ScalingExponents {
            alpha: self.alpha.unwrap_or(defaults.alpha),
            beta: self.beta.unwrap_or(defaults.beta),
        };
        let units = self.units.unwrap_or_default();

        for (name, value) in [("alpha", exponents.alpha), ("beta", exponents.beta)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        for (name, value) in [("sigma", units.sigma), ("epsilon", units.epsilon)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveConversion { name, value });
            }
        }

        Ok(LjConfig {
            reference: self.reference.unwrap_or_default(),
            exponents,
            units,
        })
    }
}
