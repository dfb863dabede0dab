// src/core/html.rs
//! Markup queries over a parsed page.
//!
//! Queries are a tag name plus an optional CSS filter (`#id`, `.class`,
//! `[attr=value]`), e.g. `("section", "#numerical-index")`. `find_required`
//! is the hard-stop variant: absence is logged and returned as
//! `StructureNotFound`, which callers propagate.

use std::panic::Location;

use scraper::{ElementRef, Html, Selector};
use tracing::error;
use url::Url;

use crate::error::{Result, ScrapeError};

/// A fetched document and the URL it came from (base for relative links).
pub struct Page {
    pub url: Url,
    pub doc: Html,
}

impl Page {
    /// Parse a body as UTF-8, whatever the server claimed.
    pub fn parse(url: Url, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        Self { url, doc: Html::parse_document(&text) }
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.doc.root_element()
    }

    /// Resolve an href found on this page.
    pub fn join(&self, href: &str) -> Result<Url> {
        Ok(self.url.join(href)?)
    }
}

fn selector(tag: &str, filter: &str) -> Result<Selector> {
    let css = join!(tag, filter);
    Selector::parse(&css).map_err(|e| ScrapeError::Selector {
        selector: css.clone(),
        reason: e.to_string(),
    })
}

pub fn find_optional<'a>(scope: ElementRef<'a>, tag: &str, filter: &str) -> Result<Option<ElementRef<'a>>> {
    Ok(scope.select(&selector(tag, filter)?).next())
}

#[track_caller]
pub fn find_required<'a>(scope: ElementRef<'a>, tag: &str, filter: &str) -> Result<ElementRef<'a>> {
    let caller = Location::caller();
    match find_optional(scope, tag, filter)? {
        Some(el) => Ok(el),
        None => {
            error!(at = %caller, "Tag {tag} {filter} not found");
            Err(ScrapeError::not_found(tag, filter))
        }
    }
}

pub fn find_all<'a>(scope: ElementRef<'a>, tag: &str, filter: &str) -> Result<Vec<ElementRef<'a>>> {
    Ok(scope.select(&selector(tag, filter)?).collect())
}

#[track_caller]
pub fn attr_required<'a>(el: ElementRef<'a>, name: &str) -> Result<&'a str> {
    let caller = Location::caller();
    el.value().attr(name).ok_or_else(|| {
        let tag = el.value().name();
        error!(at = %caller, "Attribute {name} missing on <{tag}>");
        ScrapeError::not_found(tag, &format!("[{name}]"))
    })
}

/// All descendant text, as-is.
pub fn text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Value of a label/value field list (`<dt>Label</dt><dd>Value</dd>`): finds a
/// text node exactly equal to `label`, then the next `<dd>` after its parent.
#[track_caller]
pub fn field_value(list: ElementRef<'_>, label: &str) -> Result<String> {
    let caller = Location::caller();
    let value = list
        .descendants()
        .filter(|n| n.value().as_text().is_some_and(|t| &**t == label))
        .filter_map(|n| n.parent().and_then(ElementRef::wrap))
        .find_map(|parent| {
            parent
                .next_siblings()
                .filter_map(ElementRef::wrap)
                .find(|sib| sib.value().name() == "dd")
        });

    match value {
        Some(dd) => Ok(text(dd)),
        None => {
            error!(at = %caller, "Field {label} not found");
            Err(ScrapeError::not_found("dd", label))
        }
    }
}
