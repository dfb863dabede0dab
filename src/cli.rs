// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::{
    config::options::{AppOptions, OutputMode, ParserMode},
    core::net::HttpClient,
    error::Result,
    progress::{BarProgress, NullProgress, Progress},
    runner::{self, RunSummary, Sites},
    store::Store,
};

#[derive(Parser, Debug)]
#[command(name = "pydocs_scrape", version, about = "Python documentation parser")]
pub struct Args {
    /// Parser mode
    #[arg(value_enum)]
    pub mode: ParserMode,

    /// Clear the HTTP cache before running
    #[arg(short, long)]
    pub clear_cache: bool,

    /// Additional output modes
    #[arg(short, long, value_enum)]
    pub output: Option<OutputMode>,

    /// Project root: cache, logs, downloads and results live under it
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,

    /// Don't draw a progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl From<Args> for AppOptions {
    fn from(a: Args) -> Self {
        Self {
            mode: a.mode,
            output: a.output,
            clear_cache: a.clear_cache,
            show_progress: !a.no_progress,
            base_dir: a.base_dir,
        }
    }
}

pub fn parse() -> AppOptions {
    Args::parse().into()
}

/// Run one mode against python.org through the on-disk cache.
pub fn run(opts: &AppOptions) -> Result<RunSummary> {
    info!("Parser started!");
    info!("Command line arguments: {opts:?}");

    let store = Store::open(opts.cache_dir())?;
    if opts.clear_cache {
        let removed = store.clear()?;
        info!(removed, "HTTP cache cleared");
    }
    let client = HttpClient::new(Some(store));

    let mut progress: Box<dyn Progress> = if opts.show_progress {
        Box::new(BarProgress::new()?)
    } else {
        Box::new(NullProgress)
    };

    let summary = runner::run(opts, &Sites::python_org()?, &client, progress.as_mut())?;
    info!("Parser has completed its work.");
    Ok(summary)
}
