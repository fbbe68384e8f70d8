/// Prefactor of the repulsive coefficient, `a_i = 32 * b_i * r_aim^6`.
pub const A_I_PREFACTOR: f64 = 32.0;

/// Intermediate Lennard-Jones quantities of a single atom.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AtomLjState {
    /// Repulsive coefficient.
    pub a_i: f64,
    /// Dispersion coefficient.
    pub b_i: f64,
    /// In-molecule radius. Fixed once the initial derivation has run.
    pub r_aim: f64,
}

impl AtomLjState {
    /// Builds a state from a dispersion coefficient and radius, deriving `a_i`.
    pub fn from_dispersion(b_i: f64, r_aim: f64) -> Self {
        Self {
            a_i: repulsion(b_i, r_aim),
            b_i,
            r_aim,
        }
    }

    /// Replaces `b_i` and re-derives `a_i` from the unchanged `r_aim`.
    pub fn set_dispersion(&mut self, b_i: f64) {
        self.b_i = b_i;
        self.a_i = repulsion(b_i, self.r_aim);
    }

    /// Returns `true` if the atom contributes to the Lennard-Jones potential.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.a_i != 0.0
    }
}

#[inline]
fn repulsion(b_i: f64, r_aim: f64) -> f64 {
    A_I_PREFACTOR * b_i * r_aim.powi(6)
}

/// State of one atom together with the reference row it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct LjEntry {
    /// Index of the atom in the non-bonded parameter store.
    pub atom_index: usize,
    /// Symbol used for the reference lookup (`X` for polar hydrogens).
    pub lookup_symbol: String,
    /// Whether the lookup symbol had a reference row.
    pub has_reference: bool,
    pub state: AtomLjState,
}

/// Per-atom intermediate data, one entry per atom in molecule order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LjData {
    entries: Vec<LjEntry>,
}

impl LjData {
    pub fn new(entries: Vec<LjEntry>) -> Self {
        Self { entries }
    }

    /// Returns the entry of the atom at `position` in the molecule's atom list.
    pub fn get(&self, position: usize) -> Option<&LjEntry> {
        self.entries.get(position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut LjEntry> {
        self.entries.get_mut(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LjEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
