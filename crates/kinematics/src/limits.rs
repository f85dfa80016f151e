//! Joint ranges of the leg joints, in radians.
//!
//! ```text
//!            ===Software====  ==Mechanical===
//!   Rotator  [-117.0, 117.0]  [-120.0, 120.0]
//!   Shoulder [ -11.0,  97.0]  [ -14.0, 100.0]
//!   Knee     [ -27.0, 147.0]  [ -30.0, 150.0]
//! ```
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::LegKind;

const fn deg(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Closed interval of allowed angles for a single joint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JointRange {
    pub min: f64,
    pub max: f64,
}

impl JointRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn from_degrees(min: f64, max: f64) -> Self {
        Self::new(deg(min), deg(max))
    }

    /// Saturate `angle` to this range.
    ///
    /// A NaN angle saturates to [`JointRange::min`].
    #[must_use]
    pub fn clamp(&self, angle: f64) -> f64 {
        angle.max(self.min).min(self.max)
    }

    #[must_use]
    pub fn contains(&self, angle: f64) -> bool {
        (self.min..=self.max).contains(&angle)
    }
}

/// Ranges of the rotator, shoulder and knee joints.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JointLimits {
    pub rotator: JointRange,
    pub shoulder: JointRange,
    pub knee: JointRange,
}

impl JointLimits {
    /// Limits enforced by the motion software.
    pub const SOFTWARE: Self = Self {
        rotator: JointRange::from_degrees(-117.0, 117.0),
        shoulder: JointRange::from_degrees(-11.0, 97.0),
        knee: JointRange::from_degrees(-27.0, 147.0),
    };

    /// Limits of the mechanism itself.
    pub const MECHANICAL: Self = Self {
        rotator: JointRange::from_degrees(-120.0, 120.0),
        shoulder: JointRange::from_degrees(-14.0, 100.0),
        knee: JointRange::from_degrees(-30.0, 150.0),
    };
}

impl Default for JointLimits {
    fn default() -> Self {
        Self::SOFTWARE
    }
}

/// Sub-ranges the inverse solver keeps its intermediate solutions in.
///
/// These are narrower than [`JointLimits::SOFTWARE`] and the knee range differs between
/// front and hind legs. The values are tuned, keep them as they are.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverRanges {
    pub rotator: JointRange,
    pub shoulder: JointRange,
    pub front_knee: JointRange,
    pub hind_knee: JointRange,
}

impl SolverRanges {
    pub const DEFAULT: Self = Self {
        rotator: JointRange::from_degrees(-90.0, 90.0),
        shoulder: JointRange::new(JointLimits::SOFTWARE.shoulder.min, deg(90.0)),
        front_knee: JointRange::new(0.2616, JointLimits::SOFTWARE.knee.max),
        hind_knee: JointRange::new(0.2316, JointLimits::SOFTWARE.knee.max),
    };

    #[must_use]
    pub fn knee(&self, kind: LegKind) -> JointRange {
        match kind {
            LegKind::Front => self.front_knee,
            LegKind::Hind => self.hind_knee,
        }
    }
}

impl Default for SolverRanges {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_saturates_both_ends() {
        let range = JointRange::new(-1.0, 1.0);

        assert_eq!(range.clamp(-3.0), -1.0);
        assert_eq!(range.clamp(0.25), 0.25);
        assert_eq!(range.clamp(3.0), 1.0);
        assert_eq!(range.clamp(f64::NAN), -1.0);
    }

    #[test]
    fn solver_ranges_are_inside_software_limits() {
        let software = JointLimits::SOFTWARE;
        let solver = SolverRanges::DEFAULT;

        for (inner, outer) in [
            (solver.rotator, software.rotator),
            (solver.shoulder, software.shoulder),
            (solver.front_knee, software.knee),
            (solver.hind_knee, software.knee),
        ] {
            assert!(outer.contains(inner.min));
            assert!(outer.contains(inner.max));
        }

        assert!(solver.front_knee.min > solver.hind_knee.min);
    }

    #[test]
    fn software_limits_are_inside_mechanical_limits() {
        let software = JointLimits::SOFTWARE;
        let mechanical = JointLimits::MECHANICAL;

        assert!(mechanical.rotator.min < software.rotator.min);
        assert!(mechanical.shoulder.max > software.shoulder.max);
        assert!(mechanical.knee.min < software.knee.min);
    }
}
