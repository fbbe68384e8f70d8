//! # AIM-LJ Core Library
//!
//! Lennard-Jones 12-6 parameters (sigma, epsilon) for small molecules, derived from
//! atom-in-molecule (AIM) volumes by scaling tabulated free-atom dispersion data.
//!
//! ## Architectural Philosophy
//!
//! The library keeps the same three-layer split throughout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Ligand`, `NonbondedForce`),
//!   the free-atom reference table, unit conversion constants, the reader for
//!   optimiser output and file I/O.
//!
//! - **[`engine`]: The Logic Core.** The immutable `LjConfig` and the three pipeline
//!   stages: initial scaling, polar-hydrogen correction and sigma/epsilon synthesis.
//!
//! - **[`workflows`]: The Public API.** [`workflows::parametrize::run`] runs the whole
//!   pipeline on any type implementing [`core::models::traits::AimMolecule`].

pub mod core;
pub mod engine;
pub mod workflows;
