use crate::core::forcefield::reference::{ElementReference, POLAR_HYDROGEN_SYMBOL, ReferenceTable};
use crate::core::models::atom::{HYDROGEN, is_polar_partner};
use crate::core::models::traits::{AimAtom, AimMolecule};
use crate::engine::state::{AtomLjState, LjData, LjEntry};
use tracing::{instrument, trace, warn};

/// Derives `a_i`, `b_i` and `r_aim` for every atom from its AIM volume.
///
/// Atoms whose lookup symbol has no reference row get an all-zero state.
#[instrument(skip_all, name = "lj_data_task")]
pub fn run<M: AimMolecule>(molecule: &M, reference: &ReferenceTable) -> LjData {
    let atoms = molecule.atoms();

    let entries = atoms
        .iter()
        .map(|atom| {
            let symbol = lookup_symbol(atom, atoms);
            let row = reference.get(symbol);
            let state = match row {
                Some(row) => initial_state(atom.aim_volume(), row),
                None => {
                    warn!(
                        "No reference parameters for '{}' (atom {}); its Lennard-Jones terms are set to zero.",
                        symbol,
                        atom.atom_index()
                    );
                    AtomLjState::default()
                }
            };
            trace!(
                atom = atom.atom_index(),
                symbol,
                a_i = state.a_i,
                b_i = state.b_i,
                r_aim = state.r_aim,
                "initial LJ data"
            );
            LjEntry {
                atom_index: atom.atom_index(),
                lookup_symbol: symbol.to_string(),
                has_reference: row.is_some(),
                state,
            }
        })
        .collect();

    LjData::new(entries)
}

/// Returns the symbol an atom is looked up under.
///
/// A hydrogen whose first bonded neighbour is N, O or S becomes
/// [`POLAR_HYDROGEN_SYMBOL`]; a hydrogen without bonds keeps its own symbol.
pub fn lookup_symbol<'a, A: AimAtom>(atom: &'a A, atoms: &[A]) -> &'a str {
    let element = atom.element();
    if element != HYDROGEN {
        return element;
    }
    match atom.bonded_atoms().first().and_then(|&i| atoms.get(i)) {
        Some(partner) if is_polar_partner(partner.element()) => POLAR_HYDROGEN_SYMBOL,
        _ => element,
    }
}

fn initial_state(volume: f64, row: &ElementReference) -> AtomLjState {
    let ratio = volume / row.v_free;
    let r_aim = row.r_free * ratio.cbrt();
    let b_i = row.b_free * ratio.powi(2);
    AtomLjState::from_dispersion(b_i, r_aim)
}
