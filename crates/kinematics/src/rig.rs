use std::path::Path;

use nalgebra::Vector3;
use odal::{Config, ConfigKind, Error, ErrorKind};
use serde::{Deserialize, Serialize};

use crate::{
    JointLimits, SolverRanges,
    dimensions::{ers7, ers210},
};

/// Fixed offsets of the links of one leg type, in millimeters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegGeometry {
    pub body_to_shoulder: Vector3<f64>,
    /// The upper link.
    pub shoulder_to_knee: Vector3<f64>,
    /// The lower link.
    pub knee_to_ball: Vector3<f64>,
}

impl LegGeometry {
    #[inline]
    #[must_use]
    pub fn upper(&self) -> &Vector3<f64> {
        &self.shoulder_to_knee
    }

    #[inline]
    #[must_use]
    pub fn lower(&self) -> &Vector3<f64> {
        &self.knee_to_ball
    }
}

/// The physical measurements of a robot, together with its joint ranges.
///
/// All kinematics are computed relative to a [`Rig`]. The free functions [`crate::forward()`] and
/// [`crate::inverse()`] use [`Rig::DEFAULT`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rig {
    pub front: LegGeometry,
    pub hind: LegGeometry,
    pub limits: JointLimits,
    pub solver: SolverRanges,
}

impl Rig {
    pub const ERS210: Self = Self {
        front: LegGeometry {
            body_to_shoulder: ers210::FRONT_BODY_TO_SHOULDER,
            shoulder_to_knee: ers210::FRONT_SHOULDER_TO_KNEE,
            knee_to_ball: ers210::FRONT_KNEE_TO_BALL,
        },
        hind: LegGeometry {
            body_to_shoulder: ers210::HIND_BODY_TO_SHOULDER,
            shoulder_to_knee: ers210::HIND_SHOULDER_TO_KNEE,
            knee_to_ball: ers210::HIND_KNEE_TO_BALL,
        },
        limits: JointLimits::SOFTWARE,
        solver: SolverRanges::DEFAULT,
    };

    pub const ERS7: Self = Self {
        front: LegGeometry {
            body_to_shoulder: ers7::FRONT_BODY_TO_SHOULDER,
            shoulder_to_knee: ers7::FRONT_SHOULDER_TO_KNEE,
            knee_to_ball: ers7::FRONT_KNEE_TO_BALL,
        },
        hind: LegGeometry {
            body_to_shoulder: ers7::HIND_BODY_TO_SHOULDER,
            shoulder_to_knee: ers7::HIND_SHOULDER_TO_KNEE,
            knee_to_ball: ers7::HIND_KNEE_TO_BALL,
        },
        limits: JointLimits::SOFTWARE,
        solver: SolverRanges::DEFAULT,
    };

    pub const DEFAULT: Self = Self::ERS210;

    /// Look up a built-in rig by name.
    #[must_use]
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ers210" | "ers220" | "ers2xx" => Some(Self::ERS210),
            "ers7" => Some(Self::ERS7),
            _ => None,
        }
    }

    /// Load the rig from `main_dir`, with the overlay in `overlay_dir` applied if it exists.
    pub fn load_for(main_dir: &Path, overlay_dir: Option<&Path>) -> odal::Result<Self> {
        let Some(overlay_dir) = overlay_dir else {
            return Self::load(main_dir);
        };

        match Self::load_with_overlay(main_dir, overlay_dir) {
            Ok(rig) => Ok(rig),
            Err(Error {
                name,
                kind:
                    ErrorKind::Load {
                        path,
                        config_kind: ConfigKind::Overlay,
                        ..
                    },
            }) => {
                tracing::debug!("`{name}`: Failed to read overlay from `{path}`");
                Self::load(main_dir)
            }
            Err(e) => Err(e),
        }
    }
}

impl Default for Rig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Config for Rig {
    const PATH: &'static str = "rig.toml";
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn config_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config")
    }

    #[test]
    fn shipped_config_matches_default_rig() {
        let rig = Rig::load(config_dir()).unwrap();

        assert_eq!(rig, Rig::ERS210);
    }

    #[test]
    fn ers7_overlay_matches_preset() {
        let main = config_dir();
        let overlay = main.join("overlay/ers7");

        let rig = Rig::load_for(&main, Some(&overlay)).unwrap();

        assert_eq!(rig, Rig::ERS7);
    }

    #[test]
    fn missing_overlay_falls_back_to_main() {
        let main = config_dir();
        let overlay = main.join("overlay/does-not-exist");

        let rig = Rig::load_for(&main, Some(&overlay)).unwrap();

        assert_eq!(rig, Rig::ERS210);
    }

    #[test]
    fn presets_by_name() {
        assert_eq!(Rig::preset("ERS7"), Some(Rig::ERS7));
        assert_eq!(Rig::preset("ers220"), Some(Rig::ERS210));
        assert_eq!(Rig::preset("ers110"), None);
    }
}
