// src/specs/latest_versions.rs
//! Scraping *spec* for documentation versions.
//!
//! Page: `MAIN_DOC_URL`. The sidebar (`div.sphinxsidebarwrapper`) holds several
//! `<ul>`s; the first whose text mentions "All versions" lists one anchor per
//! version, e.g. `Python 3.13 (stable)`.
//! Columns: `Link to documentation, Version, Status`.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::core::html::{attr_required, find_all, find_required, text};
use crate::core::net::{require_page, Fetch};
use crate::error::{Result, ScrapeError};
use crate::specs::DataSet;

const VERSIONS_MARKER: &str = "All versions";

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Python (?P<version>\d\.\d+) \((?P<status>.*)\)").expect("static regex")
});

/// `Python 3.10 (stable)` -> `("3.10", "stable")`; anything else -> `(text, "")`.
pub fn parse_version_label(label: &str) -> (String, String) {
    match VERSION_RE.captures(label) {
        Some(caps) => (s!(&caps["version"]), s!(&caps["status"])),
        None => (s!(label), s!()),
    }
}

pub fn fetch(fetch: &dyn Fetch, index_url: &Url) -> Result<DataSet> {
    let page = require_page(fetch, index_url)?;
    let sidebar = find_required(page.root(), "div", ".sphinxsidebarwrapper")?;

    let list = find_all(sidebar, "ul", "")?
        .into_iter()
        .find(|ul| text(*ul).contains(VERSIONS_MARKER))
        .ok_or(ScrapeError::VersionListNotFound)?;

    let rows = find_all(list, "a", "")?
        .into_iter()
        .map(|a| {
            let link = s!(attr_required(a, "href")?);
            let (version, status) = parse_version_label(&text(a));
            Ok(vec![link, version, status])
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(DataSet {
        headers: Some(vec![s!("Link to documentation"), s!("Version"), s!("Status")]),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_with_status() {
        assert_eq!(parse_version_label("Python 3.10 (stable)"), (s!("3.10"), s!("stable")));
        assert_eq!(
            parse_version_label("Python 3.14 (in development)"),
            (s!("3.14"), s!("in development"))
        );
    }

    #[test]
    fn label_without_match_is_kept_whole() {
        assert_eq!(parse_version_label("Old versions"), (s!("Old versions"), s!()));
        assert_eq!(parse_version_label("Python 3.10"), (s!("Python 3.10"), s!()));
    }
}
