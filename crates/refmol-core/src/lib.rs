//! # refmol Core Library
//!
//! Holds a small set of reference molecular geometries (water and
//! formaldehyde, in Bohr-scale atomic units) together with the machinery to
//! render them as labeled, human-readable coordinate tables.
//!
//! ## Architecture
//!
//! The library is split into two layers:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Element`, `Atom`,
//!   `Molecule`), compile-time reference data (the atomic-weight table and
//!   the built-in geometries), and the coordinate-block writer.
//!
//! - **[`workflows`]: The Public API.** The user-facing entry point that ties
//!   the core pieces together into a complete coordinate report. Callers,
//!   including the `refmol` CLI, should normally go through this layer.

pub mod core;
pub mod workflows;
