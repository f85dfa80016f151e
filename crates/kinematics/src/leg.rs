use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{JointLimits, JointRange, LegGeometry, Rig, SolverRanges};

/// Identifier of one of the four legs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum LegIndex {
    FrontLeft = 0,
    FrontRight = 1,
    BackLeft = 2,
    BackRight = 3,
}

/// The two geometric configurations of a leg.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum LegKind {
    Front,
    Hind,
}

/// Everything that differs between the legs, apart from the [`LegGeometry`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegSpec {
    pub kind: LegKind,
    /// Right legs are computed as left legs, with the lateral axis negated.
    pub mirrored: bool,
    /// Sign applied to the knee angle before rotating the lower link.
    pub knee_sign: f64,
    /// Sign applied to the rotator angle before rotating the leg.
    pub rotator_sign: f64,
}

impl LegSpec {
    const FRONT_LEFT: Self = Self {
        kind: LegKind::Front,
        mirrored: false,
        knee_sign: -1.0,
        rotator_sign: -1.0,
    };

    const FRONT_RIGHT: Self = Self {
        mirrored: true,
        ..Self::FRONT_LEFT
    };

    const BACK_LEFT: Self = Self {
        kind: LegKind::Hind,
        mirrored: false,
        knee_sign: 1.0,
        rotator_sign: 1.0,
    };

    const BACK_RIGHT: Self = Self {
        mirrored: true,
        ..Self::BACK_LEFT
    };

    /// Negate the lateral axis of `v` for right legs.
    #[must_use]
    pub fn mirror(&self, mut v: Vector3<f64>) -> Vector3<f64> {
        if self.mirrored {
            v.y = -v.y;
        }
        v
    }
}

const LEG_SPECS: [LegSpec; 4] = [
    LegSpec::FRONT_LEFT,
    LegSpec::FRONT_RIGHT,
    LegSpec::BACK_LEFT,
    LegSpec::BACK_RIGHT,
];

impl LegIndex {
    pub const ALL: [LegIndex; 4] = [
        LegIndex::FrontLeft,
        LegIndex::FrontRight,
        LegIndex::BackLeft,
        LegIndex::BackRight,
    ];

    #[must_use]
    pub const fn spec(self) -> LegSpec {
        LEG_SPECS[self as usize]
    }

    #[must_use]
    pub const fn kind(self) -> LegKind {
        self.spec().kind
    }

    #[must_use]
    pub const fn is_mirrored(self) -> bool {
        self.spec().mirrored
    }
}

impl LegKind {
    #[must_use]
    pub fn geometry(self, rig: &Rig) -> &LegGeometry {
        match self {
            LegKind::Front => &rig.front,
            LegKind::Hind => &rig.hind,
        }
    }

    #[must_use]
    pub fn knee_solver_range(self, rig: &Rig) -> JointRange {
        rig.solver.knee(self)
    }
}

/// Joint angles of a single leg, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LegConfiguration {
    pub rotator: f64,
    pub shoulder: f64,
    pub knee: f64,
}

impl LegConfiguration {
    #[must_use]
    pub const fn new(rotator: f64, shoulder: f64, knee: f64) -> Self {
        Self {
            rotator,
            shoulder,
            knee,
        }
    }

    #[must_use]
    pub fn from_degrees(rotator: f64, shoulder: f64, knee: f64) -> Self {
        Self::new(rotator, shoulder, knee).map(f64::to_radians)
    }

    #[must_use]
    pub fn to_degrees(self) -> Self {
        self.map(f64::to_degrees)
    }

    /// Transforms each angle using the provided closure `f`.
    #[must_use]
    pub fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        Self {
            rotator: f(self.rotator),
            shoulder: f(self.shoulder),
            knee: f(self.knee),
        }
    }

    /// Iterate over the angles in rotator, shoulder, knee order.
    pub fn iter(&self) -> impl Iterator<Item = f64> {
        [self.rotator, self.shoulder, self.knee].into_iter()
    }

    /// Whether every joint lies inside `limits`.
    #[must_use]
    pub fn within(&self, limits: &JointLimits) -> bool {
        limits.rotator.contains(self.rotator)
            && limits.shoulder.contains(self.shoulder)
            && limits.knee.contains(self.knee)
    }

    /// Whether every joint lies inside the sub-ranges the inverse solver uses for `kind`.
    #[must_use]
    pub fn within_solver_ranges(&self, ranges: &SolverRanges, kind: LegKind) -> bool {
        ranges.rotator.contains(self.rotator)
            && ranges.shoulder.contains(self.shoulder)
            && ranges.knee(kind).contains(self.knee)
    }
}
