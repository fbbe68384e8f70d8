use crate::core::forcefield::reference::ScalingExponents;
use crate::core::forcefield::units::UnitConversion;
use crate::core::models::traits::{AimAtom, AimMolecule};
use crate::engine::config::LjConfig;
use crate::engine::state::{AtomLjState, LjData};
use tracing::{debug, instrument};

/// Final Lennard-Jones parameters of one atom.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LennardJonesParameters {
    pub sigma: f64,
    pub epsilon: f64,
}

/// Converts the corrected per-atom data into sigma/epsilon, in molecule order.
///
/// The volume-scaling term uses each atom's true element (never the polar-hydrogen
/// symbol) as the reference for `V / v_free`.
#[instrument(skip_all, name = "sigma_epsilon_task")]
pub fn run<M: AimMolecule>(
    data: &LjData,
    molecule: &M,
    config: &LjConfig,
) -> Vec<LennardJonesParameters> {
    molecule
        .atoms()
        .iter()
        .zip(data.iter())
        .map(|(atom, entry)| {
            let volume_ratio = match config.reference.get(atom.element()) {
                Some(row) => atom.aim_volume() / row.v_free,
                None => {
                    if entry.state.is_active() {
                        debug!(
                            "No reference volume for element '{}' (atom {}); volume scaling uses a ratio of 1.",
                            atom.element(),
                            atom.atom_index()
                        );
                    }
                    1.0
                }
            };
            synthesize(&entry.state, volume_ratio, &config.exponents, &config.units)
        })
        .collect()
}

/// Closed-form sigma/epsilon of a single atom.
///
/// `sigma = (a_i / b_i)^(1/6)` and `epsilon = b_i^2 / (4 a_i) * alpha * ratio^beta`, each
/// multiplied by its unit conversion factor. An inactive state (`a_i == 0`) yields zeros.
pub fn synthesize(
    state: &AtomLjState,
    volume_ratio: f64,
    exponents: &ScalingExponents,
    units: &UnitConversion,
) -> LennardJonesParameters {
    if !state.is_active() {
        return LennardJonesParameters::default();
    }

    let sigma = (state.a_i / state.b_i).powf(1.0 / 6.0) * units.sigma;

    let mut epsilon = (state.b_i * state.b_i) / (4.0 * state.a_i);
    epsilon *= exponents.factor(volume_ratio);
    epsilon *= units.epsilon;

    LennardJonesParameters { sigma, epsilon }
}
