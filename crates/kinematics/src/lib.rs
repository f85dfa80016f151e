//! # kinematics 🦿
//!
//! Analytic forward and inverse kinematics for the three joint legs of a quadruped robot.
//!
//! Each leg has a rotator that swings the leg forwards and backwards, a shoulder that abducts it
//! sideways and a knee. All positions are given in the body frame in millimeters, with the x-axis
//! pointing forward, the y-axis pointing left and the z-axis pointing up. All angles are in
//! radians.
//!
//! The physical measurements and joint ranges live in a [`Rig`]. The free functions [`forward()`]
//! and [`inverse()`] use [`Rig::DEFAULT`], the ERS-210.
//!
//! ```rust
//! use kinematics::{LegConfiguration, LegIndex};
//!
//! let mut target = kinematics::forward(LegIndex::FrontLeft, LegConfiguration::default());
//! target.y += 20.0;
//!
//! let config = kinematics::inverse(LegIndex::FrontLeft, &target);
//! let reached = kinematics::forward(LegIndex::FrontLeft, config);
//!
//! assert!((reached - target).norm() < 1e-6);
//! ```
//!
//! ## Saturation
//!
//! Inverse kinematics never fail. A target out of reach or an angle outside of the joint range is
//! saturated per joint, use [`Rig::inverse_report`] to find out which joints were saturated.
pub mod body;
pub mod dimensions;
pub mod forward;
pub mod inverse;
pub mod leg;
pub mod limits;
pub mod rig;
mod rotation;
pub mod trig;

pub use body::BodyPose;
pub use forward::forward;
pub use inverse::{InverseSolution, inverse};
pub use leg::{LegConfiguration, LegIndex, LegKind, LegSpec};
pub use limits::{JointLimits, JointRange, SolverRanges};
pub use rig::{LegGeometry, Rig};
pub use trig::{Branch, Saturation, TrigSolution, solve_angle, solve_angle_checked};
