use anyhow::Context;
use clap::Parser;
use hash64::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let config = Cli::parse();

    cli::init_logger(config.verbose);
    tracing::info!("Starting hash64 with the {} algorithm", config.algorithm);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(&config, &mut out).context("hash64 failed")?;
    Ok(())
}
