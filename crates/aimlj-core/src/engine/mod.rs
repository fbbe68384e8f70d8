//! # Engine Module
//!
//! This module implements the Lennard-Jones parametrisation engine: the configuration
//! it runs with, the intermediate per-atom state and the three pipeline stages.
//!
//! ## Overview
//!
//! The engine turns a molecule's AIM volumes into sigma/epsilon in three steps:
//!
//! 1. **Initial derivation** ([`tasks::lj_data`]) - `a_i`, `b_i` and `r_aim` per atom
//!    from the element reference table.
//! 2. **Polar-hydrogen correction** ([`tasks::polar_hydrogens`]) - dispersion of
//!    hydrogens bonded to N, O or S is merged into the heteroatom.
//! 3. **Synthesis** ([`tasks::sigma_epsilon`]) - closed-form sigma/epsilon with the
//!    alpha/beta volume correction and unit conversion.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Reference table, exponents, units, optimiser overrides
//! - **State** ([`state`]) - Per-atom intermediate quantities
//! - **Error Handling** ([`error`]) - Errors raised while preparing a run
//!
//! The stages never fail: atoms that cannot be parametrised end up with zero
//! parameters, and the workflow report says why.

pub mod config;
pub mod error;
pub mod state;
pub mod tasks;
