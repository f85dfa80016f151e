//! The forward kinematics of the legs.
use nalgebra::Vector3;

use crate::{
    LegConfiguration, LegIndex, Rig,
    rotation::{rotate_x, rotate_y},
};

impl Rig {
    /// Compute the position of the ball of the foot of `leg` in the body frame.
    ///
    /// The angles are used as given, they are not clamped to the joint limits.
    #[must_use]
    pub fn forward(&self, leg: LegIndex, config: LegConfiguration) -> Vector3<f64> {
        let spec = leg.spec();
        let geometry = spec.kind.geometry(self);

        let ball_in_shoulder =
            geometry.upper() + rotate_y(geometry.lower(), spec.knee_sign * config.knee);
        let ball_in_body = rotate_y(
            &rotate_x(&ball_in_shoulder, config.shoulder),
            spec.rotator_sign * config.rotator,
        );

        spec.mirror(geometry.body_to_shoulder + ball_in_body)
    }
}

/// Compute the position of the ball of the foot of `leg`, using [`Rig::DEFAULT`].
#[must_use]
pub fn forward(leg: LegIndex, config: LegConfiguration) -> Vector3<f64> {
    Rig::DEFAULT.forward(leg, config)
}
