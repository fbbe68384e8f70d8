use super::traits::AimAtom;

/// Element symbol of hydrogen as it appears in molecule inputs.
pub const HYDROGEN: &str = "H";

/// Heteroatoms whose bonded hydrogens are treated as polar.
pub const POLAR_PARTNERS: [&str; 3] = ["N", "O", "S"];

/// Returns `true` if a hydrogen bonded to `element` counts as a polar hydrogen.
#[inline]
pub fn is_polar_partner(element: &str) -> bool {
    POLAR_PARTNERS.contains(&element)
}

/// Represents an atom of a small molecule together with its AIM data.
///
/// The element symbol is stored exactly as deposited (case-sensitive, e.g. `Cl`).
/// Polar-hydrogen relabelling performed during parametrisation never touches it.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Zero-based position of the atom within its molecule.
    pub atom_index: usize,
    /// The element symbol (e.g. "C", "Cl").
    pub element: String,
    /// Optional display name (e.g. "C1", "H3").
    pub name: String,
    /// The atom-in-molecule volume in cubic Bohr.
    pub aim_volume: f64,
    /// Indices of bonded atoms in the order the bonds were declared.
    pub bonds: Vec<usize>,
}

impl Atom {
    /// Creates a new `Atom` with no bonds.
    ///
    /// # Arguments
    ///
    /// * `atom_index` - Position of the atom within the molecule.
    /// * `element` - The element symbol.
    /// * `aim_volume` - The AIM volume supplied by the charge-partitioning engine.
    pub fn new(atom_index: usize, element: &str, aim_volume: f64) -> Self {
        Self {
            atom_index,
            element: element.to_string(),
            name: format!("{}{}", element, atom_index + 1),
            aim_volume,
            bonds: Vec::new(),
        }
    }
}

impl AimAtom for Atom {
    fn atom_index(&self) -> usize {
        self.atom_index
    }

    fn element(&self) -> &str {
        &self.element
    }

    fn bonded_atoms(&self) -> &[usize] {
        &self.bonds
    }

    fn aim_volume(&self) -> f64 {
        self.aim_volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_has_expected_default_fields() {
        let atom = Atom::new(2, "Cl", 65.1);

        assert_eq!(atom.atom_index, 2);
        assert_eq!(atom.element, "Cl");
        assert_eq!(atom.name, "Cl3");
        assert_eq!(atom.aim_volume, 65.1);
        assert!(atom.bonds.is_empty());
    }

    #[test]
    fn polar_partners_are_nitrogen_oxygen_and_sulfur() {
        assert!(is_polar_partner("N"));
        assert!(is_polar_partner("O"));
        assert!(is_polar_partner("S"));
        assert!(!is_polar_partner("C"));
        assert!(!is_polar_partner("Se"));
        assert!(!is_polar_partner("o"));
    }

    #[test]
    fn trait_accessors_expose_atom_fields() {
        let mut atom = Atom::new(0, "O", 22.1);
        atom.bonds.push(1);
        atom.bonds.push(2);

        assert_eq!(AimAtom::atom_index(&atom), 0);
        assert_eq!(AimAtom::element(&atom), "O");
        assert_eq!(atom.bonded_atoms(), &[1, 2]);
        assert_eq!(AimAtom::aim_volume(&atom), 22.1);
    }
}
