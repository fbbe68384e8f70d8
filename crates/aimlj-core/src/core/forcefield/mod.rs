//! # Force Field Module
//!
//! Reference data and unit handling for deriving Lennard-Jones 12-6 parameters from
//! atom-in-molecule volumes.
//!
//! ## Overview
//!
//! Every parametrisable element has a calibrated free-atom triple
//! `(v_free, b_free, r_free)`. An atom's AIM volume is scaled against its element's
//! `v_free` to obtain its in-molecule dispersion coefficient and radius. Hydrogens
//! bonded to N, O or S are looked up under the pseudo symbol `X`.
//!
//! ## Key Components
//!
//! - [`reference`] - Default reference table, scaling exponents and the TOML override file
//! - [`optimise`] - Reader for the final-parameters block of an optimiser run
//! - [`units`] - Conversion of sigma/epsilon into nanometres and kJ/mol
//!
//! ## Usage
//!
//! ```ignore
//! use aimlj::core::forcefield::reference::{ReferenceTable, ScalingExponents};
//! use aimlj::core::forcefield::optimise::parse_optimise_output;
//!
//! let parsed = parse_optimise_output(&std::fs::read_to_string("optimise.out")?)?;
//! let (table, exponents) = parsed.apply(&ReferenceTable::default(), &ScalingExponents::default());
//! ```

pub mod optimise;
pub mod reference;
pub mod units;
