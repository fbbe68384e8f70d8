use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("Bond references atom {index}, but the molecule only has {atom_count} atoms")]
    UnknownAtom { index: usize, atom_count: usize },
    #[error("Atom {0} cannot be bonded to itself")]
    SelfBond(usize),
}

/// An unordered pair of atom indices, stored in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub atom1_index: usize, // Index of the first atom
    pub atom2_index: usize, // Index of the second atom
}

impl Bond {
    pub fn new(atom1_index: usize, atom2_index: usize) -> Self {
        Self {
            atom1_index,
            atom2_index,
        }
    }
}
