// src/store.rs
//! On-disk response cache (`.store/http_cache/`).
//!
//! One file per request, named by the SHA-256 of `"GET <url>"`. Entries outlive
//! the process; `clear` is the only way they go away.

use std::{fs, io::{self, Write}, path::{Path, PathBuf}};

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;
use tracing::debug;
use url::Url;

use crate::error::Result;

const BODY_EXT: &str = "body";

#[derive(Clone, Debug)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open (and create if needed) the cache directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        crate::file::ensure_directory(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn key(url: &Url) -> String {
        let mut hasher = Sha256::new();
        hasher.update(b"GET ");
        hasher.update(url.as_str().as_bytes());
        hex::encode(hasher.finalize())
    }

    fn entry_path(&self, url: &Url) -> PathBuf {
        self.dir.join(join!(&Self::key(url), ".", BODY_EXT))
    }

    pub fn get(&self, url: &Url) -> Option<Vec<u8>> {
        let body = fs::read(self.entry_path(url)).ok()?;
        debug!(%url, bytes = body.len(), "cache hit");
        Some(body)
    }

    /// Store `body`; the entry appears atomically or not at all.
    pub fn put(&self, url: &Url, body: &[u8]) -> Result<()> {
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(body)?;
        tmp.persist(self.entry_path(url)).map_err(|e| e.error)?;
        Ok(())
    }

    /// Remove every cached entry. Returns how many were removed.
    pub fn clear(&self) -> Result<usize> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let mut removed = 0;
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() { continue; }
            if path.extension().and_then(|s| s.to_str()) != Some(BODY_EXT) { continue; }
            fs::remove_file(&path)?;
            removed += 1;
        }
        Ok(removed)
    }
}
