//! Reading ligand descriptions and writing parametrised non-bonded tables.
//!
//! - [`ligand`] - TOML ligand descriptions (elements, AIM volumes, charges, bonds)
//! - [`nonbonded_csv`] - CSV export of charge, sigma and epsilon per atom

pub mod ligand;
pub mod nonbonded_csv;
