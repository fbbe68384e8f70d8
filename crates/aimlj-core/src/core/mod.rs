//! # Core Module
//!
//! The stateless foundation of the library: molecule data models, the free-atom
//! reference data the parametrisation relies on, and file I/O.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms with AIM volumes, bonds and the
//!   non-bonded parameter store
//! - **Reference Data** ([`forcefield`]) - Free-atom table, scaling exponents, unit
//!   conversion and the optimiser output reader
//! - **File I/O** ([`io`]) - Ligand descriptions in, non-bonded parameter tables out

pub mod forcefield;
pub mod io;
pub mod models;
