//! Pipeline stages of the Lennard-Jones parametrisation.
//!
//! Each submodule exposes a `run` function for one stage. The stages are executed in
//! order by [`crate::workflows::parametrize::run`]: initial data from AIM volumes,
//! polar-hydrogen correction, then sigma/epsilon synthesis.

pub mod lj_data;
pub mod polar_hydrogens;
pub mod sigma_epsilon;
