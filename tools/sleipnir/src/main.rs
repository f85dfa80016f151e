use clap::Parser;
use miette::Result;
use sleipnir::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let opts = args.rig;

    match args.action {
        Commands::Forward(forward) => forward.forward(&opts)?,
        Commands::Inverse(inverse) => inverse.inverse(&opts)?,
        Commands::Demo(demo) => demo.demo(&opts)?,
        Commands::Drag(drag) => drag.drag(&opts)?,
        Commands::Rig(rig) => rig.rig(&opts)?,
    }

    Ok(())
}
