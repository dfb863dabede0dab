// src/core/sanitize.rs
use url::Url;

/// Newlines become spaces; nothing else is touched.
pub fn flatten_lines(s: &str) -> String {
    s.replace('\n', " ")
}

/// Last path segment of `url`, e.g. `python-3.13-docs-pdf-a4.zip`.
pub fn filename_from_url(url: &Url) -> Option<String> {
    url.path_segments()?
        .next_back()
        .filter(|seg| !seg.is_empty())
        .map(str::to_string)
}
