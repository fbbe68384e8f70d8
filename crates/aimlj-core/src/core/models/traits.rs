use super::topology::Bond;

/// Read-only view of an atom as consumed by the Lennard-Jones parametrisation.
pub trait AimAtom {
    /// Index used to key the atom's entry in the non-bonded parameter store.
    fn atom_index(&self) -> usize;

    /// The element symbol as deposited (case-sensitive).
    fn element(&self) -> &str;

    /// Indices of bonded atoms, first entry being the primary bonding partner.
    fn bonded_atoms(&self) -> &[usize];

    /// The atom-in-molecule volume.
    fn aim_volume(&self) -> f64;
}

/// The molecule collaborator required by the parametrisation pipeline.
///
/// Implementors expose their topology and AIM volumes, and accept an in-place
/// update of the Lennard-Jones part of each atom's non-bonded parameter. Any other
/// fields the store carries (charges, bonded terms) must be left untouched by
/// [`AimMolecule::update_lennard_jones`].
pub trait AimMolecule {
    type Atom: AimAtom;

    /// All atoms, ordered so that bonded-atom indices and bond endpoints index into this slice.
    fn atoms(&self) -> &[Self::Atom];

    /// All bonds, in declaration order.
    fn bonds(&self) -> &[Bond];

    /// Writes sigma and epsilon for `atom_index` into the non-bonded parameter store.
    fn update_lennard_jones(&mut self, atom_index: usize, sigma: f64, epsilon: f64);
}
