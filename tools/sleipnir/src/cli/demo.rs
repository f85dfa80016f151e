use clap::Parser;
use colored::Colorize;
use kinematics::{LegConfiguration, LegIndex};
use miette::Result;

use super::{RigOpts, format_position};

/// Move a foot sideways from the zero configuration and solve for it.
///
/// Computes the foot position with all joints at zero, moves it along the y-axis and feeds the
/// result back through the inverse kinematics.
#[derive(Parser, Debug)]
pub struct Demo {
    #[clap(long, short, default_value = "front-left")]
    pub leg: LegIndex,
    /// Distance to move the foot along the y-axis, in millimeters
    #[clap(long, default_value_t = 20.0, allow_negative_numbers = true)]
    pub offset: f64,
}

impl Demo {
    pub fn demo(self, opts: &RigOpts) -> Result<()> {
        let rig = opts.load()?;

        let mut target = rig.forward(self.leg, LegConfiguration::default());
        println!("{} {}", "        zero".dimmed(), format_position(&target));

        target.y += self.offset;
        println!("{} {}", "      target".bold(), format_position(&target));

        let solution = rig.inverse_report(self.leg, &target);
        println!(
            "{} {}",
            format!("{:>12}", self.leg).green().bold(),
            opts.format_angles(solution.configuration),
        );

        let reached = rig.forward(self.leg, solution.configuration);
        let residual = reached - target;
        println!(
            "{} {} (error {:.3e} mm)",
            "     reached".cyan().bold(),
            format_position(&reached),
            residual.norm(),
        );

        if !solution.is_exact() {
            tracing::warn!("target could not be reached exactly");
        }

        Ok(())
    }
}
