// tests/common/mod.rs
//
// Offline fixtures: a `Fetch` that serves canned pages and records requests.
//
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

use pydocs_scrape::core::net::Fetch;
use pydocs_scrape::{Result, ScrapeError};
use url::Url;

#[derive(Default)]
pub struct FixtureFetcher {
    pages: HashMap<String, Vec<u8>>,
    pub requests: RefCell<Vec<String>>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.pages.insert(url.to_string(), body.into());
        self
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requests.borrow().iter().filter(|u| *u == url).count()
    }
}

impl Fetch for FixtureFetcher {
    fn get(&self, url: &Url) -> Result<Vec<u8>> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| {
                ScrapeError::transport(url.as_str(), io::Error::new(io::ErrorKind::ConnectionRefused, "no fixture"))
            })
    }
}

pub fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

/* ---------------- PEP pages ---------------- */

pub const PEP_INDEX: &str = "https://peps.python.org/";

/// (abbreviation text, pep number) rows of the numerical index.
pub fn pep_index(rows: &[(&str, u32)]) -> String {
    let mut trs = String::new();
    for (abbr, n) in rows {
        trs.push_str(&format!(
            r#"<tr class="row-odd">
                 <td><abbr title="type, status">{abbr}</abbr></td>
                 <td><a class="pep reference internal" href="pep-{n:04}/">{n}</a></td>
                 <td>Title {n}</td>
               </tr>"#
        ));
    }
    format!(
        r#"<html><body>
           <section id="index-by-category"><table><tbody><tr><td>ignore</td></tr></tbody></table></section>
           <section id="numerical-index">
             <table class="pep-zero-table docutils align-default">
               <thead><tr><th>&nbsp;</th><th>PEP</th><th>Title</th></tr></thead>
               <tbody>{trs}</tbody>
             </table>
           </section>
           </body></html>"#
    )
}

pub fn pep_url(n: u32) -> String {
    format!("{PEP_INDEX}pep-{n:04}/")
}

pub fn pep_detail(status: &str) -> String {
    format!(
        r#"<html><body><section id="pep-content">
             <dl class="rfc2822 field-list simple">
               <dt class="field-odd">Author<span class="colon">:</span></dt>
               <dd class="field-odd">Someone</dd>
               <dt class="field-even">Status<span class="colon">:</span></dt>
               <dd class="field-even"><abbr title="status">{status}</abbr></dd>
               <dt class="field-odd">Type<span class="colon">:</span></dt>
               <dd class="field-odd">Standards Track</dd>
             </dl>
           </section></body></html>"#
    )
}

/* ---------------- docs.python.org pages ---------------- */

pub const MAIN_DOC: &str = "https://docs.python.org/3/";
pub const WHATS_NEW: &str = "https://docs.python.org/3/whatsnew/";
pub const DOWNLOADS: &str = "https://docs.python.org/3/download.html";

pub fn whats_new_index(hrefs: &[&str]) -> String {
    let items: String = hrefs
        .iter()
        .map(|h| format!(r#"<li class="toctree-l1"><a class="reference internal" href="{h}">{h}</a><ul><li class="toctree-l2"><a href="{h}#x">sub</a></li></ul></li>"#))
        .collect();
    format!(
        r#"<html><body><section id="what-s-new-in-python">
             <h1>What’s New in Python</h1>
             <div class="toctree-wrapper compound"><ul>{items}</ul></div>
           </section></body></html>"#
    )
}

pub fn whats_new_article(version: &str, editor: &str) -> String {
    format!(
        "<html><body><section><h1>What’s New In Python {version}</h1>\
         <dl class=\"field-list simple\">\n<dt>Editor<span>:</span></dt>\n<dd><p>{editor}</p>\n</dd>\n</dl>\
         <p>body</p><dl><dt>later</dt></dl></section></body></html>"
    )
}

pub fn main_doc_page(lists: &[&[(&str, &str)]]) -> String {
    let uls: String = lists
        .iter()
        .map(|items| {
            let lis: String = items
                .iter()
                .map(|(href, label)| format!(r#"<li><a href="{href}">{label}</a></li>"#))
                .collect();
            format!("<ul>{lis}</ul>")
        })
        .collect();
    format!(
        r#"<html><body><div class="sphinxsidebar"><div class="sphinxsidebarwrapper">
             <h3>Docs by version</h3>{uls}
           </div></div></body></html>"#
    )
}

pub fn downloads_page(hrefs: &[&str]) -> String {
    let cells: String = hrefs
        .iter()
        .map(|h| format!(r#"<td><a class="reference external" href="{h}">Download</a></td>"#))
        .collect();
    format!(
        r#"<html><body><div class="body" role="main">
             <h1>Download Python documentation</h1>
             <table class="docutils align-default"><tbody><tr>{cells}</tr></tbody></table>
           </div></body></html>"#
    )
}
