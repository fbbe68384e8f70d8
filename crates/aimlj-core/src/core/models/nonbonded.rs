use std::collections::BTreeMap;

/// Non-bonded parameters of a single atom.
///
/// Sigma is in nanometres and epsilon in kJ/mol when the default unit
/// conversion is used.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NonbondedParameter {
    /// Partial charge in elementary charge units.
    pub charge: f64,
    /// Lennard-Jones zero-crossing distance.
    pub sigma: f64,
    /// Lennard-Jones well depth.
    pub epsilon: f64,
}

impl NonbondedParameter {
    /// Replaces the Lennard-Jones terms in place, leaving the charge untouched.
    pub fn update_lennard_jones(&mut self, sigma: f64, epsilon: f64) {
        self.sigma = sigma;
        self.epsilon = epsilon;
    }
}

/// Per-atom non-bonded parameter store keyed by atom index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NonbondedForce {
    parameters: BTreeMap<usize, NonbondedParameter>,
}

impl NonbondedForce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, atom_index: usize) -> Option<&NonbondedParameter> {
        self.parameters.get(&atom_index)
    }

    pub fn get_mut(&mut self, atom_index: usize) -> Option<&mut NonbondedParameter> {
        self.parameters.get_mut(&atom_index)
    }

    /// Returns the parameter for `atom_index`, creating a zeroed one if it does not exist yet.
    pub fn entry(&mut self, atom_index: usize) -> &mut NonbondedParameter {
        self.parameters.entry(atom_index).or_default()
    }

    pub fn set_charge(&mut self, atom_index: usize, charge: f64) {
        self.entry(atom_index).charge = charge;
    }

    pub fn update_lennard_jones(&mut self, atom_index: usize, sigma: f64, epsilon: f64) {
        self.entry(atom_index).update_lennard_jones(sigma, epsilon);
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &NonbondedParameter)> {
        self.parameters.iter().map(|(&index, param)| (index, param))
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}
