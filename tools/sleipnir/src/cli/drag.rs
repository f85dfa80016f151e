use clap::Parser;
use colored::Colorize;
use kinematics::{InverseSolution, LegConfiguration, LegIndex, Rig};
use miette::Result;
use nalgebra::{Vector3, vector};

use super::{RigOpts, format_position};

/// Drag a foot in small steps, solving the leg after every step.
///
/// Every step computes the current foot position, moves it by the given delta and solves for the
/// new joint angles, which become the starting point for the next step.
#[derive(Parser, Debug)]
pub struct Drag {
    #[clap(long, short, default_value = "front-left")]
    pub leg: LegIndex,
    /// Joint angles to start from [default: a standing leg]
    #[clap(
        long,
        num_args = 3,
        value_names = ["ROTATOR", "SHOULDER", "KNEE"],
        allow_negative_numbers = true
    )]
    pub start: Option<Vec<f64>>,
    /// Movement along the x-axis per step, in millimeters
    #[clap(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub dx: f64,
    /// Movement along the y-axis per step, in millimeters
    #[clap(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub dy: f64,
    /// Movement along the z-axis per step, in millimeters
    #[clap(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub dz: f64,
    #[clap(long, default_value_t = 10)]
    pub steps: usize,
}

const STANDING: LegConfiguration = LegConfiguration::new(0.0, 0.2, 1.2);

impl Drag {
    pub fn drag(self, opts: &RigOpts) -> Result<()> {
        let rig = opts.load()?;
        let delta = vector![self.dx, self.dy, self.dz];

        let start = match self.start.as_deref() {
            Some(&[rotator, shoulder, knee]) => opts.angles(rotator, shoulder, knee),
            _ => STANDING,
        };

        print_step(opts, 0, start, &rig.forward(self.leg, start));

        for (step, solution) in (1..).zip(drag_path(&rig, self.leg, start, &delta, self.steps)) {
            if !solution.is_exact() {
                tracing::warn!(step, "foot cannot follow the drag, leg is saturated");
            }

            let config = solution.configuration;
            print_step(opts, step, config, &rig.forward(self.leg, config));
        }

        Ok(())
    }
}

/// Move the foot of `leg` by `delta` for `steps` times, starting from `start`.
///
/// Every step starts from the foot position of the previous solution, so saturation carries
/// over to the next step.
#[must_use]
pub fn drag_path(
    rig: &Rig,
    leg: LegIndex,
    start: LegConfiguration,
    delta: &Vector3<f64>,
    steps: usize,
) -> Vec<InverseSolution> {
    let mut config = start;

    (0..steps)
        .map(|_| {
            let solution = rig.inverse_report(leg, &(rig.forward(leg, config) + delta));
            config = solution.configuration;
            solution
        })
        .collect()
}

fn print_step(opts: &RigOpts, step: usize, config: LegConfiguration, foot: &Vector3<f64>) {
    println!(
        "{} {}  {}",
        format!("{step:>12}").green().bold(),
        opts.format_angles(config),
        format_position(foot),
    );
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn foot_follows_the_drag() {
        let rig = Rig::DEFAULT;
        let delta = vector![2.0, 1.0, -1.0];

        for leg in LegIndex::ALL {
            let path = drag_path(&rig, leg, STANDING, &delta, 10);
            assert_eq!(path.len(), 10);

            let mut foot = rig.forward(leg, STANDING);
            for solution in path {
                let config = solution.configuration;
                let next = rig.forward(leg, config);

                assert!(config.within_solver_ranges(&rig.solver, leg.kind()));
                if solution.is_exact() {
                    assert_relative_eq!(next - foot, delta, epsilon = 1e-6);
                }
                foot = next;
            }
        }
    }

    #[test]
    fn dragging_out_of_reach_saturates() {
        let rig = Rig::DEFAULT;
        let delta = vector![0.0, 0.0, -40.0];

        let path = drag_path(&rig, LegIndex::FrontLeft, STANDING, &delta, 10);

        assert!(path.iter().any(|solution| !solution.is_exact()));
        for solution in path {
            assert!(solution.configuration.within(&rig.limits));
        }
    }
}
