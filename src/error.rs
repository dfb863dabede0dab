// src/error.rs
use std::error::Error as StdError;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Network/HTTP failure while loading `url`.
    #[error("failed to load {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// A page the extractor cannot do without came back empty.
    #[error("page {url} could not be loaded")]
    PageUnavailable { url: String },

    /// Required markup is missing.
    #[error("Tag {tag} {filter} not found")]
    StructureNotFound { tag: String, filter: String },

    /// An abbreviation code with no entry in the status table.
    #[error("no expected statuses for abbreviation code {code:?}")]
    UnknownAbbreviation { code: String },

    #[error("list with Python versions not found")]
    VersionListNotFound,

    #[error("invalid selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Template(#[from] indicatif::style::TemplateError),
}

impl ScrapeError {
    pub fn transport<E>(url: &str, source: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        ScrapeError::Transport { url: url.to_string(), source: source.into() }
    }

    pub fn not_found(tag: &str, filter: &str) -> Self {
        ScrapeError::StructureNotFound { tag: tag.to_string(), filter: filter.to_string() }
    }
}
