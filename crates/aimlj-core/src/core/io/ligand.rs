use crate::core::models::ligand::Ligand;
use crate::core::models::topology::TopologyError;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LigandFileError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Atom {atom} has an invalid AIM volume: {value}")]
    InvalidVolume { atom: usize, value: f64 },
    #[error("Bond {bond} is invalid: {source}")]
    Topology {
        bond: usize,
        #[source]
        source: TopologyError,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AtomRecord {
    element: String,
    #[serde(rename = "aim-volume", alias = "aim_volume")]
    aim_volume: f64,
    name: Option<String>,
    charge: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BondRecord {
    atoms: [usize; 2],
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LigandRecord {
    name: Option<String>,
    #[serde(default)]
    atoms: Vec<AtomRecord>,
    #[serde(default)]
    bonds: Vec<BondRecord>,
}

/// Reader for TOML ligand descriptions.
///
/// ```toml
/// name = "water"
///
/// [[atoms]]
/// element = "O"
/// aim-volume = 24.1
/// charge = -0.82
///
/// [[atoms]]
/// element = "H"
/// aim-volume = 2.9
///
/// [[bonds]]
/// atoms = [0, 1]
/// ```
///
/// Atoms are indexed from zero in file order. `name` and `charge` are optional.
pub struct LigandFile;

impl LigandFile {
    pub fn read_from_path(path: &Path) -> Result<Ligand, LigandFileError> {
        debug!("Reading ligand description from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| LigandFileError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let fallback_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();
        Self::parse(&content, &path.to_string_lossy(), &fallback_name)
    }

    /// Parses a ligand description held in memory; `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &str, fallback_name: &str) -> Result<Ligand, LigandFileError> {
        let record: LigandRecord = toml::from_str(content).map_err(|e| LigandFileError::Toml {
            path: origin.to_string(),
            source: e,
        })?;

        let mut ligand = Ligand::new(record.name.as_deref().unwrap_or(fallback_name));

        for (i, atom) in record.atoms.into_iter().enumerate() {
            if !atom.aim_volume.is_finite() || atom.aim_volume < 0.0 {
                return Err(LigandFileError::InvalidVolume {
                    atom: i,
                    value: atom.aim_volume,
                });
            }
            let index = ligand.add_atom(&atom.element, atom.aim_volume);
            if let (Some(name), Some(stored)) = (atom.name, ligand.atom_mut(index)) {
                stored.name = name;
            }
            if let Some(charge) = atom.charge {
                ligand.nonbonded_mut().set_charge(index, charge);
            }
        }

        for (i, bond) in record.bonds.into_iter().enumerate() {
            ligand
                .add_bond(bond.atoms[0], bond.atoms[1])
                .map_err(|source| LigandFileError::Topology { bond: i, source })?;
        }

        Ok(ligand)
    }
}
