// src/specs/whats_new.rs
//! Scraping *spec* for "What's New" articles.
//!
//! Page: `<MAIN_DOC_URL>/whatsnew/`, list `section#what-s-new-in-python
//! div.toctree-wrapper li.toctree-l1`. Each entry links to an article; from the
//! article we keep its `<h1>` and the text of its first `<dl>` (editor/author).
//!
//! An article that fails to load is left out; no placeholder row.
//! Columns: `Link to article`, `Title`, `Editor, Author`.

use tracing::debug;
use url::Url;

use crate::core::html::{attr_required, find_all, find_required, text};
use crate::core::net::{get_page, require_page, Fetch};
use crate::core::sanitize::flatten_lines;
use crate::error::Result;
use crate::progress::Progress;
use crate::specs::DataSet;

pub fn fetch(fetch: &dyn Fetch, index_url: &Url, progress: &mut dyn Progress) -> Result<DataSet> {
    let index = require_page(fetch, index_url)?;
    let main = find_required(index.root(), "section", "#what-s-new-in-python")?;
    let wrapper = find_required(main, "div", ".toctree-wrapper")?;
    let entries = find_all(wrapper, "li", ".toctree-l1")?;

    let mut rows = Vec::with_capacity(entries.len());
    progress.begin(entries.len());

    let result: Result<()> = entries.into_iter().try_for_each(|entry| {
        let link = find_required(entry, "a", "")?;
        let url = index.join(attr_required(link, "href")?)?;
        if let Some(article) = get_page(fetch, &url) {
            let h1 = find_required(article.root(), "h1", "")?;
            let dl = find_required(article.root(), "dl", "")?;
            rows.push(vec![url.to_string(), text(h1), flatten_lines(&text(dl))]);
        } else {
            debug!(%url, "article omitted");
        }
        progress.item_done();
        Ok(())
    });
    progress.finish();
    result?;

    Ok(DataSet {
        headers: Some(vec![s!("Link to article"), s!("Title"), s!("Editor, Author")]),
        rows,
    })
}
