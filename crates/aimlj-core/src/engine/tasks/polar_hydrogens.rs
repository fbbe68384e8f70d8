use crate::core::models::atom::{HYDROGEN, is_polar_partner};
use crate::core::models::traits::{AimAtom, AimMolecule};
use crate::engine::state::LjData;
use tracing::{debug, instrument, warn};

/// A bond between a hydrogen and an N, O or S atom, as positions in the atom list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolarPair {
    pub hydrogen: usize,
    pub partner: usize,
}

/// Folds the dispersion of every polar hydrogen into its heteroatom partner.
///
/// The merge is additive in square-root space:
/// `b_partner = (sqrt(b_partner) + sum sqrt(b_h))^2`, after which each polar hydrogen
/// has `b_i = a_i = 0`. Contributions are accumulated in bond declaration order.
/// `a_i` is re-derived from the unchanged `r_aim` for every atom that was touched;
/// atoms outside any polar pair are left exactly as they were.
#[instrument(skip_all, name = "polar_hydrogen_task")]
pub fn run<M: AimMolecule>(data: &mut LjData, molecule: &M) -> Vec<PolarPair> {
    let pairs = find_polar_pairs(molecule);
    if pairs.is_empty() {
        return pairs;
    }

    // Square roots of b_i, only for atoms taking part in a pair.
    let mut roots: Vec<Option<f64>> = vec![None; data.len()];

    for pair in &pairs {
        let (Some(hydrogen_root), Some(partner_root)) = (
            root_of(&mut roots, data, pair.hydrogen),
            root_of(&mut roots, data, pair.partner),
        ) else {
            warn!(
                "Polar pair {:?} has no LJ data; skipping its correction.",
                pair
            );
            continue;
        };
        roots[pair.partner] = Some(partner_root + hydrogen_root);
        roots[pair.hydrogen] = Some(0.0);
    }

    for (position, root) in roots.into_iter().enumerate() {
        if let (Some(root), Some(entry)) = (root, data.get_mut(position)) {
            entry.state.set_dispersion(root * root);
            debug!(
                atom = entry.atom_index,
                b_i = entry.state.b_i,
                a_i = entry.state.a_i,
                "polar-hydrogen corrected"
            );
        }
    }

    pairs
}

fn root_of(roots: &mut [Option<f64>], data: &LjData, position: usize) -> Option<f64> {
    let slot = roots.get_mut(position)?;
    if slot.is_none() {
        *slot = Some(data.get(position)?.state.b_i.sqrt());
    }
    *slot
}

/// Lists every (H, N|O|S) bond in declaration order, judged by true element.
///
/// Bonds pointing outside the atom list are ignored.
pub fn find_polar_pairs<M: AimMolecule>(molecule: &M) -> Vec<PolarPair> {
    let atoms = molecule.atoms();
    molecule
        .bonds()
        .iter()
        .filter_map(|bond| {
            let (Some(first), Some(second)) =
                (atoms.get(bond.atom1_index), atoms.get(bond.atom2_index))
            else {
                warn!(
                    "Bond {}-{} references a missing atom; ignoring it for polar-hydrogen detection.",
                    bond.atom1_index, bond.atom2_index
                );
                return None;
            };
            if first.element() == HYDROGEN && is_polar_partner(second.element()) {
                Some(PolarPair {
                    hydrogen: bond.atom1_index,
                    partner: bond.atom2_index,
                })
            } else if second.element() == HYDROGEN && is_polar_partner(first.element()) {
                Some(PolarPair {
                    hydrogen: bond.atom2_index,
                    partner: bond.atom1_index,
                })
            } else {
                None
            }
        })
        .collect()
}
