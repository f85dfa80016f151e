use clap::Parser;
use colored::Colorize;
use kinematics::LegIndex;
use miette::Result;
use nalgebra::vector;

use super::{RigOpts, format_position};

/// Solve the joint angles that put a foot at the given position.
#[derive(Parser, Debug)]
pub struct Inverse {
    /// The leg to solve (front-left, front-right, back-left or back-right)
    #[clap(long, short, default_value = "front-left")]
    pub leg: LegIndex,
    /// Target position in the body frame, in millimeters
    #[clap(allow_negative_numbers = true)]
    pub x: f64,
    #[clap(allow_negative_numbers = true)]
    pub y: f64,
    #[clap(allow_negative_numbers = true)]
    pub z: f64,
}

impl Inverse {
    pub fn inverse(self, opts: &RigOpts) -> Result<()> {
        let rig = opts.load()?;
        let target = vector![self.x, self.y, self.z];

        let solution = rig.inverse_report(self.leg, &target);
        for (joint, saturation) in solution.saturations() {
            tracing::warn!(leg = %self.leg, joint, ?saturation, "joint saturated");
        }

        let reached = rig.forward(self.leg, solution.configuration);

        println!(
            "{} {}",
            format!("{:>12}", self.leg).green().bold(),
            opts.format_angles(solution.configuration),
        );
        println!(
            "{} {} (error {:.3e} mm)",
            "     reached".cyan().bold(),
            format_position(&reached),
            (reached - target).norm(),
        );

        Ok(())
    }
}
