// src/file.rs
//! Result sink: renders a `DataSet` to the console or a CSV file.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use tracing::info;

use crate::config::consts::RESULTS_DT_FORMAT;
use crate::config::options::{AppOptions, OutputMode, ParserMode};
use crate::error::Result;
use crate::specs::DataSet;

/// Render `ds` as selected by `opts.output`. Returns the file written, if any.
pub fn control_output(ds: &DataSet, opts: &AppOptions) -> Result<Option<PathBuf>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match opts.output {
        Some(OutputMode::Pretty) => {
            out.write_all(pretty_table(ds).as_bytes())?;
            Ok(None)
        }
        Some(OutputMode::File) => {
            let path = file_output(ds, &opts.results_dir(), opts.mode, Local::now())?;
            Ok(Some(path))
        }
        None => {
            out.write_all(default_output(ds).as_bytes())?;
            Ok(None)
        }
    }
}

/// `<results_dir>/<mode>_<YYYY-mm-dd_HH-MM-SS>.csv`
pub fn results_path(results_dir: &Path, mode: ParserMode, now: DateTime<Local>) -> PathBuf {
    let stamp = now.format(RESULTS_DT_FORMAT).to_string();
    results_dir.join(format!("{}_{}.csv", mode.name(), stamp))
}

pub fn file_output(ds: &DataSet, results_dir: &Path, mode: ParserMode, now: DateTime<Local>) -> Result<PathBuf> {
    ensure_directory(results_dir)?;
    let path = results_path(results_dir, mode, now);
    write_csv(&path, ds)?;
    info!("Results file was saved: {}", path.display());
    Ok(path)
}

pub fn write_csv(path: &Path, ds: &DataSet) -> Result<()> {
    let mut w = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)?;
    for row in ds.all_rows() {
        w.write_record(row)?;
    }
    w.flush()?;
    Ok(())
}

/// Rows printed space separated, one per line.
pub fn default_output(ds: &DataSet) -> String {
    let mut s = s!();
    for row in ds.all_rows() {
        s.push_str(&row.join(" "));
        s.push('\n');
    }
    s
}

/// Boxed, left-aligned table; the header (if any) gets its own separator.
pub fn pretty_table(ds: &DataSet) -> String {
    let ncols = ds.all_rows().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; ncols];
    for row in ds.all_rows() {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let rule = {
        let mut r = s!("+");
        for w in &widths {
            r.push_str(&"-".repeat(w + 2));
            r.push('+');
        }
        r.push('\n');
        r
    };
    let line = |row: &[String]| {
        let mut l = s!("|");
        for (i, w) in widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let pad = w - cell.chars().count();
            l.push(' ');
            l.push_str(cell);
            l.push_str(&" ".repeat(pad + 1));
            l.push('|');
        }
        l.push('\n');
        l
    };

    let mut out = rule.clone();
    if let Some(h) = &ds.headers {
        out.push_str(&line(h.as_slice()));
        out.push_str(&rule);
    }
    for r in &ds.rows {
        out.push_str(&line(r.as_slice()));
    }
    out.push_str(&rule);
    out
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    fs::create_dir_all(dir)
}
