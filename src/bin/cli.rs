// src/bin/cli.rs
use pydocs_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let opts = cli::parse();
    log::init(&opts.log_path())?;

    if let Err(e) = cli::run(&opts) {
        tracing::error!("Parser stopped: {e}");
        return Err(e.into());
    }
    Ok(())
}
