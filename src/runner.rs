// src/runner.rs
use std::path::PathBuf;

use tracing::info;
use url::Url;

use crate::{
    config::consts::{DOWNLOADS_PATH, MAIN_DOC_URL, PEP_URL, WHATS_NEW_PATH},
    config::options::{AppOptions, ParserMode},
    core::net::Fetch,
    error::Result,
    file,
    progress::Progress,
    specs::{self, pep::StatusTable, DataSet},
};

/// Where each report starts. Overridable so tests can point at a local server.
#[derive(Clone, Debug)]
pub struct Sites {
    pub main_doc: Url,
    pub peps: Url,
}

impl Sites {
    pub fn python_org() -> Result<Self> {
        Ok(Self { main_doc: Url::parse(MAIN_DOC_URL)?, peps: Url::parse(PEP_URL)? })
    }
}

/// What a run produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub rows: Option<DataSet>,
    pub files_written: Vec<PathBuf>,
}

/// Build the report for `opts.mode`. `None` for modes that only write files.
pub fn collect(
    opts: &AppOptions,
    sites: &Sites,
    fetch: &dyn Fetch,
    progress: &mut dyn Progress,
) -> Result<(Option<DataSet>, Vec<PathBuf>)> {
    match opts.mode {
        ParserMode::Pep => {
            let ds = specs::pep::fetch(fetch, &sites.peps, &StatusTable::standard(), progress)?;
            Ok((Some(ds), Vec::new()))
        }
        ParserMode::WhatsNew => {
            let url = sites.main_doc.join(WHATS_NEW_PATH)?;
            Ok((Some(specs::whats_new::fetch(fetch, &url, progress)?), Vec::new()))
        }
        ParserMode::LatestVersions => {
            Ok((Some(specs::latest_versions::fetch(fetch, &sites.main_doc)?), Vec::new()))
        }
        ParserMode::Download => {
            let url = sites.main_doc.join(DOWNLOADS_PATH)?;
            let saved = specs::download::fetch(fetch, &url, &opts.downloads_dir())?;
            Ok((None, vec![saved]))
        }
    }
}

/// Top-level runner: build the report, then hand it to the sink.
pub fn run(
    opts: &AppOptions,
    sites: &Sites,
    fetch: &dyn Fetch,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    let (rows, mut files_written) = collect(opts, sites, fetch, progress)?;

    if let Some(ds) = &rows {
        if let Some(path) = file::control_output(ds, opts)? {
            files_written.push(path);
        }
    }
    info!(mode = opts.mode.name(), files = files_written.len(), "Run finished");
    Ok(RunSummary { rows, files_written })
}
