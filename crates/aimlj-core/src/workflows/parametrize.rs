use crate::core::models::traits::{AimAtom, AimMolecule};
use crate::engine::config::LjConfig;
use crate::engine::tasks::{self, polar_hydrogens::PolarPair};
use std::fmt;
use tracing::{info, instrument, warn};

/// How an atom's Lennard-Jones parameters came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomStatus {
    /// Derived from a reference row.
    Parametrised,
    /// No reference row for its lookup symbol; sigma and epsilon are zero.
    Unparametrised,
    /// A hydrogen bonded to N, O or S whose dispersion was merged into its partner.
    AbsorbedPolarHydrogen,
}

impl fmt::Display for AtomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Parametrised => "parametrised",
            Self::Unparametrised => "unparametrised",
            Self::AbsorbedPolarHydrogen => "absorbed-polar-hydrogen",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AtomReport {
    pub atom_index: usize,
    pub element: String,
    /// Symbol used for the reference lookup (`X` for polar hydrogens).
    pub lookup_symbol: String,
    pub status: AtomStatus,
    pub a_i: f64,
    pub b_i: f64,
    pub r_aim: f64,
    pub sigma: f64,
    pub epsilon: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParametrizationReport {
    pub atoms: Vec<AtomReport>,
    pub polar_pairs: Vec<PolarPair>,
}

impl ParametrizationReport {
    pub fn count(&self, status: AtomStatus) -> usize {
        self.atoms.iter().filter(|a| a.status == status).count()
    }

    pub fn unparametrised(&self) -> impl Iterator<Item = &AtomReport> {
        self.atoms
            .iter()
            .filter(|a| a.status == AtomStatus::Unparametrised)
    }
}

/// Computes sigma/epsilon for every atom of `molecule` and writes them into its
/// non-bonded store.
///
/// Only sigma and epsilon are touched; charges and any other per-atom data stay as they
/// were. The run cannot fail: atoms without reference data are written as zeros and
/// flagged in the returned report.
#[instrument(skip_all, name = "parametrize_workflow")]
pub fn run<M: AimMolecule>(molecule: &mut M, config: &LjConfig) -> ParametrizationReport {
    info!(
        atoms = molecule.atoms().len(),
        bonds = molecule.bonds().len(),
        "Deriving Lennard-Jones parameters from AIM volumes."
    );

    // === Stage 1: free-atom scaling ===
    let mut data = tasks::lj_data::run(molecule, &config.reference);

    // === Stage 2: polar-hydrogen correction ===
    let polar_pairs = tasks::polar_hydrogens::run(&mut data, molecule);

    // === Stage 3: sigma/epsilon ===
    let parameters = tasks::sigma_epsilon::run(&data, molecule, config);

    let atoms: Vec<AtomReport> = molecule
        .atoms()
        .iter()
        .zip(data.iter())
        .zip(&parameters)
        .enumerate()
        .map(|(position, ((atom, entry), params))| {
            let status = if polar_pairs.iter().any(|p| p.hydrogen == position) {
                AtomStatus::AbsorbedPolarHydrogen
            } else if entry.has_reference {
                AtomStatus::Parametrised
            } else {
                AtomStatus::Unparametrised
            };
            AtomReport {
                atom_index: atom.atom_index(),
                element: atom.element().to_string(),
                lookup_symbol: entry.lookup_symbol.clone(),
                status,
                a_i: entry.state.a_i,
                b_i: entry.state.b_i,
                r_aim: entry.state.r_aim,
                sigma: params.sigma,
                epsilon: params.epsilon,
            }
        })
        .collect();

    for report in &atoms {
        molecule.update_lennard_jones(report.atom_index, report.sigma, report.epsilon);
    }

    let report = ParametrizationReport { atoms, polar_pairs };
    let unparametrised = report.count(AtomStatus::Unparametrised);
    if unparametrised > 0 {
        warn!(
            "{} atom(s) have no reference data and were given zero sigma/epsilon.",
            unparametrised
        );
    }
    info!(
        parametrised = report.count(AtomStatus::Parametrised),
        absorbed = report.count(AtomStatus::AbsorbedPolarHydrogen),
        unparametrised,
        "Lennard-Jones parametrisation complete."
    );
    report
}
