use anyhow::Result;
use clap::Parser;
use cookbook::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = cookbook::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    cookbook::observability::init_observability(
        "cookbook",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    cli.run(config, &mut out)
}
