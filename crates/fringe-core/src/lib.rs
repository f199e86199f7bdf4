//! # Fringe Core
//!
//! The numerical backbone of the Fringe simulator. This crate computes the
//! screen intensity produced by Young's double-slit experiment, for both an
//! ideal monochromatic source and a source of finite spectral bandwidth, and
//! derives the visible bright fringes.
//!
//! ## Architecture
//!
//! Models implement the [`model::InterferenceModel`] trait, which maps
//! [`types::Parameters`] to a [`types::FringePattern`]. The only
//! implementation is the two-slit Fraunhofer model
//! ([`model::IntensityModel`]). Computation is pure: no I/O, no logging, no
//! shared state, and no input makes it fail.
//!
//! ## Modules
//!
//! - [`types`] — Parameters, sampled field, bright fringes, packaged result.
//! - [`model`] — Interference model trait, sampling grid, two-slit model.
//! - [`display`] — Annotation labels, heatmap grid, contrast measures.
//! - [`summary`] — Text summary of parameters and derived quantities.

pub mod display;
pub mod model;
pub mod summary;
pub mod types;
