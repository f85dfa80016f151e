//! The inverse kinematics of the legs.
//!
//! The joints are solved one at a time, knee first, then shoulder, then rotator. The distance
//! between shoulder and foot only depends on the knee, and once the knee is known the lateral
//! offset only depends on the shoulder, which leaves the rotator for last.
//!
//! Targets out of reach never produce an error. Every stage saturates on its own, which gives the
//! closest configuration per joint, not the closest reachable position.
use nalgebra::Vector3;

use crate::{
    LegConfiguration, LegIndex, Rig,
    rotation::rotate_y,
    trig::{Branch, Saturation, solve_angle_checked},
};

/// A solved [`LegConfiguration`], together with the saturation of each of its joints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InverseSolution {
    pub configuration: LegConfiguration,
    pub rotator: Option<Saturation>,
    pub shoulder: Option<Saturation>,
    pub knee: Option<Saturation>,
}

impl InverseSolution {
    /// Whether the target was reached without saturating any joint.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.saturations().next().is_none()
    }

    /// The saturated joints, by name.
    pub fn saturations(&self) -> impl Iterator<Item = (&'static str, Saturation)> {
        [
            ("rotator", self.rotator),
            ("shoulder", self.shoulder),
            ("knee", self.knee),
        ]
        .into_iter()
        .filter_map(|(joint, saturation)| saturation.map(|s| (joint, s)))
    }
}

impl Rig {
    /// Compute the joint angles that put the ball of the foot of `leg` at `target`.
    ///
    /// `target` is in the body frame. The shoulder and knee of the result lie within the solver
    /// ranges, the rotator within the rotator limits of the rig.
    #[must_use]
    pub fn inverse(&self, leg: LegIndex, target: &Vector3<f64>) -> LegConfiguration {
        self.inverse_report(leg, target).configuration
    }

    /// Same as [`Rig::inverse`], but also reports which joints were saturated.
    #[must_use]
    pub fn inverse_report(&self, leg: LegIndex, target: &Vector3<f64>) -> InverseSolution {
        let spec = leg.spec();
        let geometry = spec.kind.geometry(self);
        let (upper, lower) = (geometry.upper(), geometry.lower());

        // solve right legs as left legs
        let foot = spec.mirror(*target) - geometry.body_to_shoulder;
        let dist = foot.norm_squared();

        let a = spec.knee_sign * 2.0 * (upper.x * lower.z - upper.z * lower.x);
        let b = 2.0 * (upper.x * lower.x + upper.z * lower.z);
        let d = dist - upper.norm_squared() - lower.norm_squared() - 2.0 * upper.y * lower.y;
        let knee = solve_angle_checked(a, b, d, self.solver.knee(spec.kind), Branch::Add);

        let mut pos = upper + rotate_y(lower, spec.knee_sign * knee.angle);
        let shoulder = solve_angle_checked(
            -pos.z,
            pos.y,
            foot.y,
            self.solver.shoulder,
            Branch::Subtract,
        );

        // only the z component of the shoulder rotation is needed
        pos.z = shoulder.angle.sin() * pos.y + shoulder.angle.cos() * pos.z;

        let x_sign = -spec.rotator_sign;
        let rotator = solve_angle_checked(
            -pos.z,
            x_sign * pos.x,
            x_sign * foot.x,
            self.limits.rotator,
            Branch::adding_if(foot.z > 0.0),
        );

        let solution = InverseSolution {
            configuration: LegConfiguration::new(rotator.angle, shoulder.angle, knee.angle),
            rotator: rotator.saturation,
            shoulder: shoulder.saturation,
            knee: knee.saturation,
        };

        if !solution.is_exact() {
            tracing::trace!(%leg, ?target, ?solution, "saturated leg angles");
        }

        solution
    }
}

/// Compute the joint angles that put the ball of the foot of `leg` at `target`, using
/// [`Rig::DEFAULT`].
#[must_use]
pub fn inverse(leg: LegIndex, target: &Vector3<f64>) -> LegConfiguration {
    Rig::DEFAULT.inverse(leg, target)
}
