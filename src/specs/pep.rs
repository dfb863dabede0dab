// src/specs/pep.rs
//! Scraping *spec* for the PEP status audit.
//!
//! Page: the PEP index (`peps.python.org`), table `section#numerical-index tbody`.
//! Each row carries an `<abbr>` like `SF` (type, status) and a link to the PEP's
//! own page. The detail page's field list holds the authoritative `Status`.
//!
//! For every row we fetch the detail page, tally its status, and check it
//! against what the abbreviation promised. Disagreements are warnings, not
//! errors. Output columns: `Status, Amount`, closed by a `Total` row.
//!
//! Failure policy:
//! - index page missing or malformed (section, tbody, a row's abbr/link): fatal;
//! - a detail page that fails to load or lacks its field list: row skipped, logged;
//! - an abbreviation code the status table doesn't know: fatal.

use std::collections::HashMap;

use scraper::ElementRef;
use tracing::{error, info, warn};
use url::Url;

use crate::config::consts::EXPECTED_STATUS;
use crate::core::html::{attr_required, field_value, find_all, find_required, text};
use crate::core::net::{get_page, require_page, Fetch};
use crate::error::{Result, ScrapeError};
use crate::progress::Progress;
use crate::specs::DataSet;

/// Abbreviation code -> statuses a detail page may show for it.
#[derive(Clone, Debug)]
pub struct StatusTable {
    map: HashMap<String, Vec<String>>,
}

impl StatusTable {
    pub fn new<I, C, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, Vec<S>)>,
        C: Into<String>,
        S: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(code, statuses)| (code.into(), statuses.into_iter().map(Into::into).collect()))
            .collect();
        Self { map }
    }

    /// The table for peps.python.org.
    pub fn standard() -> Self {
        Self::new(EXPECTED_STATUS.iter().map(|(code, statuses)| (*code, statuses.to_vec())))
    }

    pub fn expected(&self, code: &str) -> Result<&[String]> {
        self.map
            .get(code)
            .map(Vec::as_slice)
            .ok_or_else(|| ScrapeError::UnknownAbbreviation { code: code.to_string() })
    }
}

/// Status counts in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusTally {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl StatusTally {
    pub fn add(&mut self, status: &str) {
        match self.index.get(status) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(status.to_string(), self.counts.len());
                self.counts.push((status.to_string(), 1));
            }
        }
    }

    pub fn get(&self, status: &str) -> Option<usize> {
        self.index.get(status).map(|&i| self.counts[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(s, n)| (s.as_str(), *n))
    }

    pub fn sum(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

/// A detail page whose status is outside what its index abbreviation allows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub url: Url,
    pub observed: String,
    pub expected: Vec<String>,
}

/// What happened to one index row.
#[derive(Debug)]
pub enum RowOutcome {
    Counted { status: String, mismatch: Option<Mismatch> },
    Skipped,
}

#[derive(Debug, Default)]
pub struct PepAudit {
    pub tally: StatusTally,
    pub counted: usize,
    pub skipped: usize,
    pub mismatches: Vec<Mismatch>,
}

impl PepAudit {
    fn record(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Counted { status, mismatch } => {
                self.tally.add(&status);
                self.counted += 1;
                self.mismatches.extend(mismatch);
            }
            RowOutcome::Skipped => self.skipped += 1,
        }
    }

    pub fn to_dataset(&self) -> DataSet {
        let mut rows: Vec<Vec<String>> = self
            .tally
            .iter()
            .map(|(status, n)| vec![s!(status), n.to_string()])
            .collect();
        rows.push(vec![s!("Total"), self.counted.to_string()]);
        DataSet { headers: Some(vec![s!("Status"), s!("Amount")]), rows }
    }
}

/// Second character of the abbreviation text, or empty. The first is the PEP type.
pub fn preview_code(abbr: &str) -> String {
    abbr.chars().nth(1).map(String::from).unwrap_or_default()
}

pub fn fetch(fetch: &dyn Fetch, index_url: &Url, table: &StatusTable, progress: &mut dyn Progress) -> Result<DataSet> {
    Ok(audit(fetch, index_url, table, progress)?.to_dataset())
}

pub fn audit(
    fetch: &dyn Fetch,
    index_url: &Url,
    table: &StatusTable,
    progress: &mut dyn Progress,
) -> Result<PepAudit> {
    let index = require_page(fetch, index_url)?;
    let section = find_required(index.root(), "section", "#numerical-index")?;
    let tbody = find_required(section, "tbody", "")?;
    let rows = find_all(tbody, "tr", "")?;

    let mut audit = PepAudit::default();
    progress.begin(rows.len());

    for row in rows {
        let (code, url) = match read_index_row(row, &index.url) {
            Ok(v) => v,
            Err(e) => { progress.finish(); return Err(e); }
        };
        match audit_row(fetch, &url, &code, table) {
            Ok(outcome) => audit.record(outcome),
            Err(e) => { progress.finish(); return Err(e); }
        }
        progress.item_done();
    }
    progress.finish();

    if audit.skipped > 0 {
        warn!(skipped = audit.skipped, counted = audit.counted, "Some PEP pages could not be checked");
    }
    info!(counted = audit.counted, mismatches = audit.mismatches.len(), "PEP audit done");
    Ok(audit)
}

/// (preview code, absolute detail URL) for one index row.
fn read_index_row(row: ElementRef<'_>, base: &Url) -> Result<(String, Url)> {
    let code = preview_code(&text(find_required(row, "abbr", "")?));
    let link = find_required(row, "a", ".pep.reference.internal")?;
    let url = base.join(attr_required(link, "href")?)?;
    Ok((code, url))
}

fn audit_row(fetch: &dyn Fetch, url: &Url, code: &str, table: &StatusTable) -> Result<RowOutcome> {
    let expected = table.expected(code)?;

    let Some(page) = get_page(fetch, url) else {
        warn!(%url, "Skipping PEP: page not loaded");
        return Ok(RowOutcome::Skipped);
    };

    let status = match detail_status(page.root()) {
        Ok(status) => status,
        Err(e) => {
            error!(%url, error = %e, "Skipping PEP: unexpected page structure");
            return Ok(RowOutcome::Skipped);
        }
    };

    let mismatch = if expected.iter().any(|s| *s == status) {
        None
    } else {
        warn!(
            "Mismatching statuses:\n{url}\nStatus in card: {status}\nExpected statuses: {expected:?}"
        );
        Some(Mismatch { url: url.clone(), observed: status.clone(), expected: expected.to_vec() })
    };
    Ok(RowOutcome::Counted { status, mismatch })
}

fn detail_status(root: ElementRef<'_>) -> Result<String> {
    let fields = find_required(root, "dl", ".rfc2822.field-list.simple")?;
    field_value(fields, "Status")
}
