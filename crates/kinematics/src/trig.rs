//! Analytic solution of `a * sin(θ) + b * cos(θ) = d`.
//!
//! Every stage of the inverse kinematics reduces to this equation with a single unknown joint
//! angle. The solver never fails: targets out of reach and angles out of range are saturated.
use crate::JointRange;

/// Which of the two solutions `atan2(a, b) ± acos(...)` to pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Branch {
    Add,
    Subtract,
}

impl Branch {
    /// [`Branch::Add`] if `condition` holds, [`Branch::Subtract`] otherwise.
    #[must_use]
    pub fn adding_if(condition: bool) -> Self {
        if condition {
            Branch::Add
        } else {
            Branch::Subtract
        }
    }
}

/// What had to be saturated to produce a [`TrigSolution`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Saturation {
    /// `|d|` exceeded the amplitude of the harmonic, the ratio was clamped to `[-1, 1]`.
    Unreachable,
    /// The solution was below the joint range.
    BelowMin,
    /// The solution was above the joint range.
    AboveMax,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrigSolution {
    pub angle: f64,
    pub saturation: Option<Saturation>,
}

/// Solve `a * sin(θ) + b * cos(θ) = d` for `θ`, clamped to `range`.
#[must_use]
pub fn solve_angle(a: f64, b: f64, d: f64, range: JointRange, branch: Branch) -> f64 {
    solve_angle_checked(a, b, d, range, branch).angle
}

/// Same as [`solve_angle`], but also reports which saturation took place.
///
/// Range saturation takes precedence over [`Saturation::Unreachable`].
#[must_use]
pub fn solve_angle_checked(a: f64, b: f64, d: f64, range: JointRange, branch: Branch) -> TrigSolution {
    let ratio = d / a.hypot(b);
    let reachable = ratio.abs() <= 1.0;
    // NaN only occurs for a zero amplitude, treat it like an unreachable target
    let ratio = if ratio.is_nan() {
        -1.0
    } else {
        ratio.clamp(-1.0, 1.0)
    };

    let t = a.atan2(b);
    let c = ratio.acos();
    let theta = match branch {
        Branch::Add => t + c,
        Branch::Subtract => t - c,
    };

    let saturation = if theta < range.min {
        Some(Saturation::BelowMin)
    } else if theta > range.max {
        Some(Saturation::AboveMax)
    } else if !reachable {
        Some(Saturation::Unreachable)
    } else {
        None
    };

    TrigSolution {
        angle: range.clamp(theta),
        saturation,
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use super::*;

    const WIDE: JointRange = JointRange::new(-2.0 * PI, 2.0 * PI);

    #[test]
    fn cosine_only() {
        // cos(θ) = 0.5
        let add = solve_angle_checked(0.0, 1.0, 0.5, WIDE, Branch::Add);
        let sub = solve_angle_checked(0.0, 1.0, 0.5, WIDE, Branch::Subtract);

        assert_relative_eq!(add.angle, FRAC_PI_3, epsilon = 1e-12);
        assert_relative_eq!(sub.angle, -FRAC_PI_3, epsilon = 1e-12);
        assert_eq!(add.saturation, None);
        assert_eq!(sub.saturation, None);
    }

    #[test]
    fn branch_from_condition() {
        assert_eq!(Branch::adding_if(true), Branch::Add);
        assert_eq!(Branch::adding_if(false), Branch::Subtract);
    }

    #[test]
    fn sine_only() {
        // sin(θ) = 0.5, the subtracting branch is asin
        let angle = solve_angle(1.0, 0.0, 0.5, WIDE, Branch::Subtract);

        assert_relative_eq!(angle, 0.5_f64.asin(), epsilon = 1e-12);
    }

    #[test]
    fn harmonic_is_satisfied() {
        let (a, b, d) = (3.0, -2.0, 1.5);

        for branch in [Branch::Add, Branch::Subtract] {
            let theta = solve_angle(a, b, d, WIDE, branch);
            assert_relative_eq!(a * theta.sin() + b * theta.cos(), d, epsilon = 1e-9);
        }
    }

    #[test]
    fn unreachable_target_saturates_ratio() {
        // cos(θ) = 2 has no solution, the closest is θ = 0
        let solution = solve_angle_checked(0.0, 1.0, 2.0, WIDE, Branch::Add);

        assert_eq!(solution.angle, 0.0);
        assert_eq!(solution.saturation, Some(Saturation::Unreachable));

        let solution = solve_angle_checked(0.0, 1.0, -2.0, WIDE, Branch::Subtract);
        assert_relative_eq!(solution.angle, -PI, epsilon = 1e-12);
    }

    #[test]
    fn out_of_range_solution_is_clamped() {
        let range = JointRange::new(-0.5, 0.5);

        let above = solve_angle_checked(0.0, 1.0, 0.0, range, Branch::Add);
        assert_eq!(above.angle, 0.5);
        assert_eq!(above.saturation, Some(Saturation::AboveMax));

        let below = solve_angle_checked(0.0, 1.0, 0.0, range, Branch::Subtract);
        assert_eq!(below.angle, -0.5);
        assert_eq!(below.saturation, Some(Saturation::BelowMin));
    }

    #[test]
    fn range_saturation_takes_precedence() {
        let range = JointRange::new(0.5, 1.0);

        let solution = solve_angle_checked(0.0, 1.0, 5.0, range, Branch::Add);

        assert_eq!(solution.angle, 0.5);
        assert_eq!(solution.saturation, Some(Saturation::BelowMin));
    }

    #[test]
    fn zero_amplitude_does_not_produce_nan() {
        let range = JointRange::new(-FRAC_PI_2, FRAC_PI_2);

        let solution = solve_angle_checked(0.0, 0.0, 0.0, range, Branch::Add);

        assert!(range.contains(solution.angle));
        assert!(solution.saturation.is_some());
    }

    proptest! {
        #[test]
        fn result_always_in_range(
            a in -1000.0..1000.0_f64,
            b in -1000.0..1000.0_f64,
            d in -1e5..1e5_f64,
            min in -PI..0.0_f64,
            width in 0.0..PI,
            add: bool,
        ) {
            let range = JointRange::new(min, min + width);

            let angle = solve_angle(a, b, d, range, Branch::adding_if(add));

            prop_assert!(range.contains(angle));
        }
    }
}
