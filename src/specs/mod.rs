// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! One module per report. Each spec knows *where the ground truth lives in the
//! HTML* of its pages and how to shape it into a `DataSet`.
//!
//! ## What lives here
//! - **Page walking**: which page to load first, which links to follow.
//! - **Selector choice** via `core::html` (`find_required` for structure the
//!   report cannot do without, `find_optional` where absence is expected).
//! - **Light shaping** into `DataSet { headers, rows }`.
//!
//! ## What does **not** live here
//! - **Transport and caching**: `core::net::Fetch` / `store`.
//! - **Rendering**: `file::control_output`.
//! - **Mode dispatch**: `runner`.
//!
//! ## Typical call chain
//! ```text
//! cli → runner::run → specs::<report>::fetch(&dyn Fetch, …) → DataSet
//!                   ↘ file::control_output(DataSet)
//! ```
//!
//! ## Conventions
//! - Output order is document order.
//! - A broken *index* page aborts the report; per-item pages are skipped
//!   when they fail to load (each spec documents its own policy).
//! - Specs are testable offline: hand them a `Fetch` that serves fixtures.
//!
//! ## Current specs
//! - `pep` – PEP status tally with preview/detail cross-check.
//! - `whats_new` – one row per "What's New in Python X.Y" article.
//! - `latest_versions` – documentation versions and their status.
//! - `download` – saves the A4 PDF archive; produces no rows.

pub mod download;
pub mod latest_versions;
pub mod pep;
pub mod whats_new;

/// Tabular result of a spec: header row plus data rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    /// Header first (if any), then rows.
    pub fn all_rows(&self) -> impl Iterator<Item = &Vec<String>> {
        self.headers.iter().chain(self.rows.iter())
    }
}
