use clap::Subcommand;
use colored::Colorize;
use kinematics::Rig;
use miette::{IntoDiagnostic, Result, miette};
use odal::Config;

use super::RigOpts;

/// Inspect and export rig configurations
#[derive(Subcommand)]
pub enum RigCommand {
    /// Print the rig that the other commands use, as TOML
    Show,
    /// Write a built-in rig as overlay on top of the main config
    Export {
        /// The built-in rig (ers210 or ers7)
        preset: String,
        /// Name of the overlay to create [default: the name of the preset]
        #[clap(long)]
        name: Option<String>,
    },
}

impl RigCommand {
    pub fn rig(self, opts: &RigOpts) -> Result<()> {
        match self {
            RigCommand::Show => Self::show(opts),
            RigCommand::Export { preset, name } => Self::export(opts, &preset, name.as_deref()),
        }
    }

    fn show(opts: &RigOpts) -> Result<()> {
        let rig = opts.load()?;
        let contents = toml::to_string_pretty(&rig).into_diagnostic()?;

        print!("{contents}");

        Ok(())
    }

    fn export(opts: &RigOpts, preset: &str, name: Option<&str>) -> Result<()> {
        let rig = Rig::preset(preset).ok_or_else(|| {
            miette!(
                help = "the built-in rigs are `ers210` and `ers7`",
                "unknown rig `{preset}`"
            )
        })?;

        let main = Rig::load(&opts.config)?;
        let overlay = opts.config.join("overlay").join(name.unwrap_or(preset));
        rig.save_as_overlay(&main, &overlay)?;

        println!(
            "{} `{preset}` to {}",
            "    Exported".cyan().bold(),
            overlay.join(Rig::PATH).display(),
        );

        Ok(())
    }
}
