// tests/doc_reports.rs
//
// What's-new and version listing reports against offline fixtures.
//
mod common;

use common::*;
use pydocs_scrape::progress::NullProgress;
use pydocs_scrape::specs::{latest_versions, whats_new};
use pydocs_scrape::ScrapeError;

#[test]
fn whats_new_rows_in_document_order() {
    let f = FixtureFetcher::new()
        .page(WHATS_NEW, whats_new_index(&["3.13.html", "3.12.html"]))
        .page("https://docs.python.org/3/whatsnew/3.13.html", whats_new_article("3.13", "Thomas Wouters"))
        .page("https://docs.python.org/3/whatsnew/3.12.html", whats_new_article("3.12", "Adam Turner"));

    let ds = whats_new::fetch(&f, &url(WHATS_NEW), &mut NullProgress).unwrap();

    assert_eq!(ds.headers.as_ref().unwrap()[0], "Link to article");
    assert_eq!(ds.rows.len(), 2);
    assert_eq!(ds.rows[0][0], "https://docs.python.org/3/whatsnew/3.13.html");
    assert_eq!(ds.rows[0][1], "What’s New In Python 3.13");
    assert!(ds.rows[0][2].contains("Editor: Thomas Wouters"));
    assert!(!ds.rows[0][2].contains('\n'));
    assert!(!ds.rows[0][2].contains("later"), "only the first <dl> is used");
    assert_eq!(ds.rows[1][0], "https://docs.python.org/3/whatsnew/3.12.html");
}

#[test]
fn whats_new_omits_failed_articles() {
    let f = FixtureFetcher::new()
        .page(WHATS_NEW, whats_new_index(&["3.13.html", "3.12.html", "3.11.html"]))
        .page("https://docs.python.org/3/whatsnew/3.13.html", whats_new_article("3.13", "A"))
        .page("https://docs.python.org/3/whatsnew/3.11.html", whats_new_article("3.11", "C"));

    let ds = whats_new::fetch(&f, &url(WHATS_NEW), &mut NullProgress).unwrap();

    assert_eq!(ds.rows.len(), 2);
    assert!(ds.rows.iter().all(|r| r.len() == 3 && !r[1].is_empty()));
    assert!(ds.rows[1][0].ends_with("3.11.html"));
}

#[test]
fn whats_new_article_without_heading_is_fatal() {
    let f = FixtureFetcher::new()
        .page(WHATS_NEW, whats_new_index(&["3.13.html"]))
        .page("https://docs.python.org/3/whatsnew/3.13.html", "<html><body><dl><dt>x</dt></dl></body></html>");
    let err = whats_new::fetch(&f, &url(WHATS_NEW), &mut NullProgress).unwrap_err();
    assert!(matches!(err, ScrapeError::StructureNotFound { ref tag, .. } if tag == "h1"));
}

#[test]
fn versions_from_all_versions_list() {
    let f = FixtureFetcher::new().page(
        MAIN_DOC,
        main_doc_page(&[
            &[("https://docs.python.org/3/", "Python documentation")],
            &[
                ("https://docs.python.org/3.14/", "Python 3.14 (in development)"),
                ("https://docs.python.org/3.13/", "Python 3.13 (stable)"),
                ("https://www.python.org/doc/versions/", "All versions"),
            ],
            &[("https://example.org/", "All versions, again")],
        ]),
    );

    let ds = latest_versions::fetch(&f, &url(MAIN_DOC)).unwrap();

    assert_eq!(
        ds.headers,
        Some(vec!["Link to documentation".to_string(), "Version".to_string(), "Status".to_string()])
    );
    let rows: Vec<Vec<&str>> = ds.rows.iter().map(|r| r.iter().map(String::as_str).collect()).collect();
    assert_eq!(
        rows,
        vec![
            vec!["https://docs.python.org/3.14/", "3.14", "in development"],
            vec!["https://docs.python.org/3.13/", "3.13", "stable"],
            vec!["https://www.python.org/doc/versions/", "All versions", ""],
        ]
    );
}

#[test]
fn versions_without_list_is_fatal() {
    let f = FixtureFetcher::new().page(MAIN_DOC, main_doc_page(&[&[("https://x/", "Python 3.13 (stable)")]]));
    let err = latest_versions::fetch(&f, &url(MAIN_DOC)).unwrap_err();
    assert!(matches!(err, ScrapeError::VersionListNotFound));
}

#[test]
fn versions_without_sidebar_is_fatal() {
    let f = FixtureFetcher::new().page(MAIN_DOC, "<html><body><ul><li>All versions</li></ul></body></html>");
    let err = latest_versions::fetch(&f, &url(MAIN_DOC)).unwrap_err();
    assert!(matches!(err, ScrapeError::StructureNotFound { .. }));
}

#[test]
fn versions_anchor_without_href_is_fatal() {
    let page = r#"<html><body><div class="sphinxsidebarwrapper">
        <ul><li><a>Python 3.13 (stable)</a></li>
            <li><a href="https://www.python.org/doc/versions/">All versions</a></li></ul>
      </div></body></html>"#;
    let f = FixtureFetcher::new().page(MAIN_DOC, page);

    let err = latest_versions::fetch(&f, &url(MAIN_DOC)).unwrap_err();

    assert!(matches!(err, ScrapeError::StructureNotFound { ref tag, .. } if tag == "a"));
}
