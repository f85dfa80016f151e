//! # sleipnir
//!
//! Command line tool around the [`kinematics`] crate, to compute and inspect the leg kinematics
//! of a rig without a robot attached.
pub mod cli;
