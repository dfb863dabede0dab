// src/config/options.rs
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use super::consts::*;

/// Which report to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ParserMode {
    Pep,
    WhatsNew,
    LatestVersions,
    Download,
}

impl ParserMode {
    /// Name as typed on the command line; also the results file prefix.
    pub fn name(&self) -> &'static str {
        match self {
            ParserMode::Pep => "pep",
            ParserMode::WhatsNew => "whats-new",
            ParserMode::LatestVersions => "latest-versions",
            ParserMode::Download => "download",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Boxed table on stdout
    Pretty,
    /// CSV file under results/
    File,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub mode: ParserMode,
    pub output: Option<OutputMode>,
    pub clear_cache: bool,
    pub show_progress: bool,
    pub base_dir: PathBuf,
}

impl AppOptions {
    pub fn new(mode: ParserMode) -> Self {
        Self {
            mode,
            output: None,
            clear_cache: false,
            show_progress: true,
            base_dir: PathBuf::from("."),
        }
    }

    pub fn cache_dir(&self) -> PathBuf {
        cache_dir(&self.base_dir)
    }

    pub fn downloads_dir(&self) -> PathBuf {
        self.base_dir.join(DOWNLOADS_DIR)
    }

    pub fn results_dir(&self) -> PathBuf {
        self.base_dir.join(RESULTS_DIR)
    }

    pub fn log_path(&self) -> PathBuf {
        self.base_dir.join(LOG_DIR).join(LOG_FILE)
    }
}

pub fn cache_dir(base: &Path) -> PathBuf {
    base.join(STORE_DIR).join(HTTP_CACHE_SUBDIR)
}
