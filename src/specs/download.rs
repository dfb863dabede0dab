// src/specs/download.rs
//! Scraping *spec* for the documentation archive.
//!
//! Page: `<MAIN_DOC_URL>/download.html`, `div[role=main] table.docutils`, first
//! anchor whose href ends in `pdf-a4.zip` with something before it (a bare
//! `pdf-a4.zip` doesn't count). The archive is saved under
//! `<base>/downloads/<last path segment>`. No rows are produced.

use std::{io::Write, path::{Path, PathBuf}};

use tempfile::NamedTempFile;
use tracing::{error, info};
use url::Url;

use crate::core::html::{attr_required, find_all, find_required};
use crate::core::net::{require_page, Fetch};
use crate::core::sanitize::filename_from_url;
use crate::error::{Result, ScrapeError};
use crate::file::ensure_directory;

const ARCHIVE_SUFFIX: &str = "pdf-a4.zip";
const ARCHIVE_FILTER: &str = r#"[href$="pdf-a4.zip"]"#;

/// Locate the A4 PDF archive link on the downloads page.
pub fn archive_url(fetch: &dyn Fetch, downloads_url: &Url) -> Result<Url> {
    let page = require_page(fetch, downloads_url)?;
    let main = find_required(page.root(), "div", r#"[role="main"]"#)?;
    let table = find_required(main, "table", ".docutils")?;

    let mut href = None;
    for a in find_all(table, "a", ARCHIVE_FILTER)? {
        let h = attr_required(a, "href")?;
        if h.len() > ARCHIVE_SUFFIX.len() {
            href = Some(h);
            break;
        }
    }
    let Some(href) = href else {
        error!("Tag a {ARCHIVE_FILTER} not found");
        return Err(ScrapeError::not_found("a", ARCHIVE_FILTER));
    };
    page.join(href)
}

/// Download the archive into `downloads_dir`; returns the saved path.
pub fn fetch(fetch: &dyn Fetch, downloads_url: &Url, downloads_dir: &Path) -> Result<PathBuf> {
    let url = archive_url(fetch, downloads_url)?;
    let filename = filename_from_url(&url)
        .ok_or_else(|| ScrapeError::not_found("a", ARCHIVE_FILTER))?;

    // Body first: a failed transfer must not leave a file behind.
    let body = fetch.get(&url)?;

    ensure_directory(downloads_dir)?;
    let archive_path = downloads_dir.join(filename);
    let mut tmp = NamedTempFile::new_in(downloads_dir)?;
    tmp.write_all(&body)?;
    tmp.persist(&archive_path).map_err(|e| e.error)?;

    info!("The archive was downloaded and saved: {}", archive_path.display());
    Ok(archive_path)
}
