use crate::core::models::ligand::Ligand;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NonbondedCsvError {
    #[error("CSV error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Failed to flush CSV output for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

#[derive(Debug, Serialize)]
struct NonbondedRow<'a> {
    ligand: &'a str,
    atom_index: usize,
    atom_name: &'a str,
    element: &'a str,
    charge: f64,
    sigma: f64,
    epsilon: f64,
}

/// Writes the non-bonded parameters of `ligands` as one CSV table with a header row.
///
/// Atoms without a non-bonded entry are written with zero charge, sigma and epsilon.
pub fn write_to<'a, W: Write>(
    ligands: impl IntoIterator<Item = &'a Ligand>,
    writer: W,
    origin: &str,
) -> Result<(), NonbondedCsvError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let csv_error = |source| NonbondedCsvError::Csv {
        path: origin.to_string(),
        source,
    };

    for ligand in ligands {
        for atom in ligand.atoms_iter() {
            let params = ligand
                .nonbonded()
                .get(atom.atom_index)
                .copied()
                .unwrap_or_default();
            csv_writer
                .serialize(NonbondedRow {
                    ligand: &ligand.name,
                    atom_index: atom.atom_index,
                    atom_name: &atom.name,
                    element: &atom.element,
                    charge: params.charge,
                    sigma: params.sigma,
                    epsilon: params.epsilon,
                })
                .map_err(csv_error)?;
        }
    }

    csv_writer.flush().map_err(|e| NonbondedCsvError::Io {
        path: origin.to_string(),
        source: e,
    })
}

pub fn write_to_path<'a>(
    ligands: impl IntoIterator<Item = &'a Ligand>,
    path: &Path,
) -> Result<(), NonbondedCsvError> {
    let origin = path.to_string_lossy().to_string();
    let file = std::fs::File::create(path).map_err(|e| NonbondedCsvError::Io {
        path: origin.clone(),
        source: e,
    })?;
    write_to(ligands, std::io::BufWriter::new(file), &origin)
}
