//! Kinematics relative to a body that is located and tilted in the world.
//!
//! The world frame has its origin on the ground below the body, with the same axes as the body
//! frame when the body is level.
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::{
    LegConfiguration, LegIndex, Rig,
    rotation::{rotate_y, rotate_z},
};

/// Location and orientation of the body in the world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyPose {
    /// Position of the body center, in millimeters.
    pub location: Vector3<f64>,
    /// Rotation of the body in radians, `y` is the pitch and `z` the yaw.
    ///
    /// The roll in `x` is not applied.
    pub angle: Vector3<f64>,
}

impl BodyPose {
    #[must_use]
    pub fn new(location: Vector3<f64>, angle: Vector3<f64>) -> Self {
        Self { location, angle }
    }

    /// A body at `body_height` above the origin, pitched by `body_angle`.
    #[must_use]
    pub fn tilted(body_angle: f64, body_height: f64) -> Self {
        Self {
            location: Vector3::new(0.0, 0.0, body_height),
            angle: Vector3::new(0.0, body_angle, 0.0),
        }
    }

    /// Transform a point from the world frame into the body frame.
    #[must_use]
    pub fn to_body(&self, world: &Vector3<f64>) -> Vector3<f64> {
        rotate_y(
            &rotate_z(&(world - self.location), self.angle.z),
            -self.angle.y,
        )
    }

    /// Transform a point from the body frame into the world frame.
    #[must_use]
    pub fn to_world(&self, body: &Vector3<f64>) -> Vector3<f64> {
        rotate_z(&rotate_y(body, self.angle.y), -self.angle.z) + self.location
    }
}

impl Rig {
    /// Compute the position of the ball of the foot of `leg` in the world frame.
    #[must_use]
    pub fn forward_posed(&self, leg: LegIndex, config: LegConfiguration, pose: &BodyPose) -> Vector3<f64> {
        pose.to_world(&self.forward(leg, config))
    }

    /// Compute the joint angles that put the ball of the foot of `leg` at `target` in the world
    /// frame.
    #[must_use]
    pub fn inverse_posed(&self, leg: LegIndex, target: &Vector3<f64>, pose: &BodyPose) -> LegConfiguration {
        self.inverse(leg, &pose.to_body(target))
    }

    /// Solve all four legs at once, `targets` are in world frame and ordered by [`LegIndex`].
    #[must_use]
    pub fn inverse_all(&self, targets: &[Vector3<f64>; 4], pose: &BodyPose) -> [LegConfiguration; 4] {
        LegIndex::ALL.map(|leg| self.inverse_posed(leg, &targets[leg as usize], pose))
    }
}
