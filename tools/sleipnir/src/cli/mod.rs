use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use kinematics::{LegConfiguration, Rig};
use miette::{Result, miette};
use nalgebra::Vector3;
use odal::{Config, ConfigKind, ErrorKind};

pub mod demo;
pub mod drag;
pub mod forward;
pub mod inverse;
pub mod rig;

/// `sleipnir` - Leg kinematics for the quadruped
///
/// `sleipnir` computes the forward and inverse kinematics of the legs, using the rig described in
/// the configuration directory.
///
/// # Computing a foot position
/// ```sh
/// sleipnir forward --leg front-left 0.1 0.2 1.2
/// ```
///
/// # Solving for joint angles
/// ```sh
/// sleipnir --degrees inverse --leg back-right -- -40 -60 -120
/// ```
///
/// # Using a different rig
/// Overlays live in `<config>/overlay/<name>/rig.toml`:
/// ```sh
/// sleipnir --rig ers7 rig show
/// ```
#[derive(Parser)]
#[clap(name = "sleipnir", version)]
pub struct Cli {
    #[clap(flatten)]
    pub rig: RigOpts,

    #[clap(subcommand)]
    pub action: Commands,
}

/// All possible commands for the cli, used for clap derive macros.
#[derive(Parser)]
pub enum Commands {
    Forward(forward::Forward),
    Inverse(inverse::Inverse),
    Demo(demo::Demo),
    Drag(drag::Drag),
    #[command(subcommand)]
    Rig(rig::RigCommand),
}

/// Options shared by all commands.
#[derive(Clone, Debug, Parser)]
pub struct RigOpts {
    /// Directory containing `rig.toml`
    #[clap(long, global = true, default_value = "config")]
    pub config: PathBuf,

    /// Name of the rig overlay in `<config>/overlay/` [default: no overlay]
    #[clap(long, global = true)]
    pub rig: Option<String>,

    /// Read and print joint angles in degrees instead of radians
    #[clap(long, global = true)]
    pub degrees: bool,
}

impl RigOpts {
    fn overlay_dir(&self) -> Option<PathBuf> {
        self.rig
            .as_ref()
            .map(|name| self.config.join("overlay").join(name))
    }

    /// Load the rig from the configuration directory.
    ///
    /// Without a configuration directory, the built-in rig with the requested name is used. A
    /// requested overlay that does not exist next to an existing configuration is an error.
    pub fn load(&self) -> Result<Rig> {
        let overlay_dir = self.overlay_dir();

        if let Some(overlay_dir) = &overlay_dir {
            if !overlay_dir.is_dir() && self.config.join(Rig::PATH).is_file() {
                return Err(miette!(
                    help = format!("overlays live in `{}`", self.config.join("overlay").display()),
                    "overlay config directory `{}` does not exist",
                    overlay_dir.display()
                ));
            }
        }

        match Rig::load_for(&self.config, overlay_dir.as_deref()) {
            Ok(rig) => Ok(rig),
            Err(odal::Error {
                kind:
                    ErrorKind::Load {
                        config_kind: ConfigKind::Main,
                        ..
                    },
                ..
            }) => {
                let name = self.rig.as_deref().unwrap_or("ers210");
                let rig = Rig::preset(name).ok_or_else(|| {
                    miette!(
                        help = "pass the directory containing `rig.toml` with `--config`",
                        "no config found in `{}` and `{name}` is not a built-in rig",
                        self.config.display()
                    )
                })?;

                tracing::warn!(
                    "no config found in `{}`, using the built-in `{name}` rig",
                    self.config.display()
                );
                Ok(rig)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Interpret angles given on the command line.
    #[must_use]
    pub fn angles(&self, rotator: f64, shoulder: f64, knee: f64) -> LegConfiguration {
        if self.degrees {
            LegConfiguration::from_degrees(rotator, shoulder, knee)
        } else {
            LegConfiguration::new(rotator, shoulder, knee)
        }
    }

    #[must_use]
    pub fn format_angles(&self, config: LegConfiguration) -> String {
        let (config, unit) = if self.degrees {
            (config.to_degrees(), "°")
        } else {
            (config, " rad")
        };

        format!(
            "{} {:.4}{unit}, {} {:.4}{unit}, {} {:.4}{unit}",
            "rotator".dimmed(),
            config.rotator,
            "shoulder".dimmed(),
            config.shoulder,
            "knee".dimmed(),
            config.knee,
        )
    }
}

#[must_use]
pub fn format_position(position: &Vector3<f64>) -> String {
    format!(
        "({:.3}, {:.3}, {:.3}) mm",
        position.x, position.y, position.z
    )
}
