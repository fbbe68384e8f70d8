use super::atom::Atom;
use super::nonbonded::NonbondedForce;
use super::topology::{Bond, TopologyError};
use super::traits::AimMolecule;

/// A small molecule with AIM volumes and a non-bonded parameter store.
///
/// Atoms are addressed by their position in the atom list. Every atom added through
/// [`Ligand::add_atom`] receives a zeroed entry in the non-bonded store so that later
/// Lennard-Jones updates only ever modify existing parameters.
#[derive(Debug, Clone, Default)]
pub struct Ligand {
    /// Human readable molecule name.
    pub name: String,
    /// Atom storage; `atoms[i].atom_index == i`.
    atoms: Vec<Atom>,
    /// List of all bonds in declaration order.
    bonds: Vec<Bond>,
    /// Per-atom charge, sigma and epsilon.
    nonbonded: NonbondedForce,
}

impl Ligand {
    /// Creates a new, empty ligand.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Appends an atom and returns its index.
    ///
    /// # Arguments
    ///
    /// * `element` - The element symbol, stored verbatim.
    /// * `aim_volume` - The AIM volume for the atom.
    pub fn add_atom(&mut self, element: &str, aim_volume: f64) -> usize {
        let index = self.atoms.len();
        self.atoms.push(Atom::new(index, element, aim_volume));
        self.nonbonded.entry(index);
        index
    }

    /// Adds a bond between two existing atoms.
    ///
    /// Adding a bond that already exists (in either direction) is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::UnknownAtom`] if either index is out of range and
    /// [`TopologyError::SelfBond`] if both indices are equal.
    pub fn add_bond(&mut self, atom1_index: usize, atom2_index: usize) -> Result<(), TopologyError> {
        let atom_count = self.atoms.len();
        for index in [atom1_index, atom2_index] {
            if index >= atom_count {
                return Err(TopologyError::UnknownAtom { index, atom_count });
            }
        }
        if atom1_index == atom2_index {
            return Err(TopologyError::SelfBond(atom1_index));
        }

        if self.atoms[atom1_index].bonds.contains(&atom2_index) {
            return Ok(());
        }

        self.bonds.push(Bond::new(atom1_index, atom2_index));
        self.atoms[atom1_index].bonds.push(atom2_index);
        self.atoms[atom2_index].bonds.push(atom1_index);
        Ok(())
    }

    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    pub fn atom_mut(&mut self, index: usize) -> Option<&mut Atom> {
        self.atoms.get_mut(index)
    }

    pub fn atoms_iter(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.iter()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn nonbonded(&self) -> &NonbondedForce {
        &self.nonbonded
    }

    pub fn nonbonded_mut(&mut self) -> &mut NonbondedForce {
        &mut self.nonbonded
    }
}

impl AimMolecule for Ligand {
    type Atom = Atom;

    fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    fn update_lennard_jones(&mut self, atom_index: usize, sigma: f64, epsilon: f64) {
        self.nonbonded.update_lennard_jones(atom_index, sigma, epsilon);
    }
}
