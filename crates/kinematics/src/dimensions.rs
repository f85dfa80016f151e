//! Contains the leg dimensions of the supported robots in millimeters.
//!
//! The origin is the center of the robot's body, the x-axis points forward, the y-axis points left,
//! and the z-axis points up. All vectors describe the left legs, right legs are mirrored.
use nalgebra::{Vector3, vector};

/// ERS-210/220 leg dimensions.
pub mod ers210 {
    use super::{Vector3, vector};

    /// Vector pointing from the body center to the front shoulder.
    pub const FRONT_BODY_TO_SHOULDER: Vector3<f64> = vector![59.50, 59.20, 0.00];
    /// Vector pointing from the front shoulder to the front knee.
    pub const FRONT_SHOULDER_TO_KNEE: Vector3<f64> = vector![12.80, 0.50, -64.00];
    /// Vector pointing from the front knee to the ball of the front foot.
    pub const FRONT_KNEE_TO_BALL: Vector3<f64> = vector![-18.88, 0.00, -66.00];

    /// Vector pointing from the body center to the hind shoulder.
    pub const HIND_BODY_TO_SHOULDER: Vector3<f64> = vector![-59.50, 59.20, 0.00];
    /// Vector pointing from the hind shoulder to the hind knee.
    pub const HIND_SHOULDER_TO_KNEE: Vector3<f64> = vector![-12.80, 0.50, -64.00];
    /// Vector pointing from the hind knee to the ball of the hind foot.
    pub const HIND_KNEE_TO_BALL: Vector3<f64> = vector![29.36, 0.00, -70.88];
}

/// ERS-7 leg dimensions.
pub mod ers7 {
    use super::{Vector3, vector};

    /// Vector pointing from the body center to the front shoulder.
    pub const FRONT_BODY_TO_SHOULDER: Vector3<f64> = vector![65.00, 62.50, 0.00];
    /// Vector pointing from the front shoulder to the front knee.
    pub const FRONT_SHOULDER_TO_KNEE: Vector3<f64> = vector![9.00, 4.70, -69.50];
    /// Vector pointing from the front knee to the ball of the front foot.
    pub const FRONT_KNEE_TO_BALL: Vector3<f64> = vector![-11.24, 0.00, -76.07];

    /// Vector pointing from the body center to the hind shoulder.
    pub const HIND_BODY_TO_SHOULDER: Vector3<f64> = vector![-65.00, 62.50, 0.00];
    /// Vector pointing from the hind shoulder to the hind knee.
    pub const HIND_SHOULDER_TO_KNEE: Vector3<f64> = vector![-9.00, 4.70, -69.50];
    /// Vector pointing from the hind knee to the ball of the hind foot.
    pub const HIND_KNEE_TO_BALL: Vector3<f64> = vector![19.80, 0.00, -76.90];
}
