use clap::Parser;
use colored::Colorize;
use kinematics::{LegConfiguration, LegIndex, Rig};
use miette::Result;

use super::{RigOpts, format_position};

/// Compute the position of a foot from the joint angles of its leg.
#[derive(Parser, Debug)]
pub struct Forward {
    /// The leg to compute (front-left, front-right, back-left or back-right)
    #[clap(long, short, default_value = "front-left")]
    pub leg: LegIndex,
    #[clap(allow_negative_numbers = true)]
    pub rotator: f64,
    #[clap(allow_negative_numbers = true)]
    pub shoulder: f64,
    #[clap(allow_negative_numbers = true)]
    pub knee: f64,
}

impl Forward {
    pub fn forward(self, opts: &RigOpts) -> Result<()> {
        let rig = opts.load()?;
        let config = opts.angles(self.rotator, self.shoulder, self.knee);

        // the leg cannot get there, but the position is still well defined
        if !within_limits(&rig, config) {
            tracing::warn!(
                leg = %self.leg,
                "angles are outside of the joint limits of the rig: {}",
                opts.format_angles(config)
            );
        }

        let position = rig.forward(self.leg, config);

        println!(
            "{} {}  {}",
            format!("{:>12}", self.leg).green().bold(),
            opts.format_angles(config),
            format_position(&position).bold(),
        );

        Ok(())
    }
}

fn within_limits(rig: &Rig, config: LegConfiguration) -> bool {
    config.within(&rig.limits)
}
