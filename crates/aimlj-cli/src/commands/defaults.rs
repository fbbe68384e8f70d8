use crate::error::{CliError, Result};
use aimlj::core::forcefield::reference::{ReferenceFile, ReferenceTable, ScalingExponents};

/// Renders the built-in table in the `--reference` file format.
pub fn render() -> Result<String> {
    ReferenceFile::snapshot(&ReferenceTable::default(), &ScalingExponents::default())
        .to_toml_string()
        .map_err(|e| CliError::Other(e.into()))
}

pub fn run() -> Result<()> {
    print!("{}", render()?);
    Ok(())
}
