//! Right handed rotations of vectors around the body axes.
use nalgebra::{Rotation3, Vector3};

#[inline]
pub(crate) fn rotate_x(v: &Vector3<f64>, angle: f64) -> Vector3<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), angle) * v
}

#[inline]
pub(crate) fn rotate_y(v: &Vector3<f64>, angle: f64) -> Vector3<f64> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), angle) * v
}

#[inline]
pub(crate) fn rotate_z(v: &Vector3<f64>, angle: f64) -> Vector3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), angle) * v
}
