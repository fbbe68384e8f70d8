use thiserror::Error;

use super::config::ConfigError;
use crate::core::forcefield::reference::ReferenceLoadError;
use crate::core::io::ligand::LigandFileError;
use crate::core::io::nonbonded_csv::NonbondedCsvError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Reference table error: {source}")]
    Reference {
        #[from]
        source: ReferenceLoadError,
    },

    #[error("Ligand input error: {source}")]
    Ligand {
        #[from]
        source: LigandFileError,
    },

    #[error("Output error: {source}")]
    Output {
        #[from]
        source: NonbondedCsvError,
    },
}
