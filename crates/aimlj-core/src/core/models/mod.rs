//! # Core Models Module
//!
//! This module contains the data structures used to represent a small molecule
//! for Lennard-Jones parametrisation.
//!
//! ## Overview
//!
//! The parametrisation pipeline only needs a narrow view of a molecule: element
//! symbols, connectivity, AIM volumes and a place to write sigma/epsilon. That view
//! is expressed by the traits in [`traits`], so the pipeline can run against any
//! molecule representation. [`ligand::Ligand`] is the concrete implementation
//! shipped with the library.
//!
//! ## Key Components
//!
//! - [`atom`] - Atom with element symbol, AIM volume and bonded neighbours
//! - [`topology`] - Bonds and topology errors
//! - [`nonbonded`] - Per-atom charge/sigma/epsilon store
//! - [`ligand`] - Complete molecule tying atoms, bonds and the store together
//! - [`traits`] - Collaborator contract consumed by the pipeline
//!
//! ## Usage
//!
//! ```ignore
//! use aimlj::core::models::ligand::Ligand;
//!
//! let mut ligand = Ligand::new("methanol");
//! let c = ligand.add_atom("C", 30.1);
//! let o = ligand.add_atom("O", 24.3);
//! ligand.add_bond(c, o)?;
//! ```

pub mod atom;
pub mod ligand;
pub mod nonbonded;
pub mod topology;
pub mod traits;
