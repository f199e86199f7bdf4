//! GUI panels for the Fringe simulator.

pub mod controls;
pub mod pattern;
