//! # Workflows Module
//!
//! High-level entry points that tie the [`crate::core`] models and the
//! [`crate::engine`] stages together.
//!
//! - **Parametrisation Workflow** ([`parametrize`]) - AIM volumes in, sigma/epsilon
//!   written to the molecule's non-bonded store, plus a per-atom report of how each
//!   value came about.

pub mod parametrize;
