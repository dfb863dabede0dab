// src/log.rs
//! Logging setup: stderr plus a size-rotated `logs/parser.log`.
//!
//! Lines look like `19.10.2026 14:02:11 - [WARN] - Mismatching statuses: …`.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, format, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_BACKUPS, LOG_DT_FORMAT, LOG_MAX_BYTES};
use crate::error::{Result, ScrapeError};
use crate::file::ensure_directory;

struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let now = Local::now().format(LOG_DT_FORMAT);
        write!(writer, "{now} - [{}] - ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber. Console level follows `RUST_LOG` (default
/// `info`); the file always gets `info` and up.
pub fn init(log_path: &Path) -> Result<()> {
    if let Some(dir) = log_path.parent() {
        ensure_directory(dir)?;
    }
    rotate(log_path, LOG_MAX_BYTES, LOG_BACKUPS)?;
    let file = OpenOptions::new().create(true).append(true).open(log_path)?;

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = fmt::layer()
        .with_writer(io::stderr)
        .event_format(LineFormat)
        .with_filter(console_filter);
    let to_file = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .event_format(LineFormat)
        .with_filter(LevelFilter::INFO);

    tracing_subscriber::registry()
        .with(console)
        .with(to_file)
        .try_init()
        .map_err(|e| ScrapeError::Logging(e.to_string()))
}

fn backup_path(path: &Path, n: usize) -> PathBuf {
    let mut s = path.as_os_str().to_owned();
    s.push(format!(".{n}"));
    PathBuf::from(s)
}

/// If `path` has grown past `max_bytes`, shift `path.1..path.{backups-1}` up by
/// one, move `path` to `path.1`, and drop whatever falls off the end.
pub fn rotate(path: &Path, max_bytes: u64, backups: usize) -> io::Result<()> {
    let size = match fs::metadata(path) {
        Ok(m) => m.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };
    if size <= max_bytes {
        return Ok(());
    }
    if backups == 0 {
        return fs::remove_file(path);
    }

    let oldest = backup_path(path, backups);
    if oldest.exists() {
        fs::remove_file(&oldest)?;
    }
    for n in (1..backups).rev() {
        let from = backup_path(path, n);
        if from.exists() {
            fs::rename(&from, backup_path(path, n + 1))?;
        }
    }
    fs::rename(path, backup_path(path, 1))
}
