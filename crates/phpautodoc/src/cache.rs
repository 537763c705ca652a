//! On-disk memoization of parsed declaration trees.
//!
//! One JSON file per source base name, `<basename>.parse`, inside the cache
//! directory. After a write the cache file's modification time is set to the
//! source file's, so an entry is considered current only while the two
//! timestamps are equal. Timestamp equality alone is fragile across file
//! systems, so the entry also records the source length and SHA-256 digest
//! and both must still match.
//!
//! No locking is done. Concurrent extractions of the same base name may
//! clobber each other's entries, which only costs a re-parse.

use crate::error::{AutodocError, Result};
use log::{debug, warn};
use phpautodoc_api::{Declaration, SourceParser};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Bumped whenever the declaration tree layout changes
const CACHE_FORMAT: u32 = 1;

const CACHE_EXTENSION: &str = "parse";

#[derive(Serialize)]
struct CacheEntryRef<'a> {
    format: u32,
    source_path: &'a Path,
    source_len: u64,
    source_digest: &'a str,
    declarations: &'a [Declaration],
}

#[derive(Deserialize)]
struct CacheEntry {
    format: u32,
    source_path: PathBuf,
    source_len: u64,
    source_digest: String,
    declarations: Vec<Declaration>,
}

/// Length and digest of a source text
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fingerprint {
    len: u64,
    digest: String,
}

impl Fingerprint {
    fn of(bytes: &[u8]) -> Self {
        Self {
            len: bytes.len() as u64,
            digest: hex::encode(Sha256::digest(bytes)),
        }
    }
}

/// Parse cache wrapping a [`SourceParser`].
pub struct ParseCache<'p, P: ?Sized> {
    cache_dir: PathBuf,
    parser: &'p P,
}

impl<'p, P: SourceParser + ?Sized> ParseCache<'p, P> {
    pub fn new(cache_dir: impl Into<PathBuf>, parser: &'p P) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            parser,
        }
    }

    /// Cache file used for `source_path`
    pub fn cache_path(&self, source_path: &Path) -> PathBuf {
        let base = source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.cache_dir.join(format!("{base}.{CACHE_EXTENSION}"))
    }

    /// Return the declaration tree of `source_path`, parsing only when the
    /// cached entry is missing, stale or unreadable.
    ///
    /// Sources that are not valid UTF-8 are decoded lossily; the fingerprint
    /// covers the raw bytes. Read and parse failures are returned to the
    /// caller. Failing to write the cache entry is logged and otherwise
    /// ignored.
    pub fn get_or_parse(&self, source_path: &Path) -> Result<Vec<Declaration>> {
        let modified = fs::metadata(source_path)
            .and_then(|metadata| metadata.modified())
            .map_err(|e| AutodocError::io(source_path, e))?;
        let bytes = fs::read(source_path).map_err(|e| AutodocError::io(source_path, e))?;
        let fingerprint = Fingerprint::of(&bytes);
        let cache_path = self.cache_path(source_path);

        if let Some(declarations) = self.load(&cache_path, source_path, modified, &fingerprint) {
            debug!("Parse cache hit for {}", source_path.display());
            return Ok(declarations);
        }

        debug!("Parse cache miss for {}", source_path.display());
        let source = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = source {
            debug!("{} is not valid UTF-8, decoding lossily", source_path.display());
        }
        let declarations = self.parser.parse_source(&source, source_path)?;

        if let Err(e) = self.store(&cache_path, source_path, modified, &fingerprint, &declarations)
        {
            warn!("{e}");
        }

        Ok(declarations)
    }

    fn load(
        &self,
        cache_path: &Path,
        source_path: &Path,
        modified: SystemTime,
        fingerprint: &Fingerprint,
    ) -> Option<Vec<Declaration>> {
        let cache_modified = fs::metadata(cache_path)
            .and_then(|metadata| metadata.modified())
            .ok()?;
        if cache_modified != modified {
            debug!("Cache entry {} is stale", cache_path.display());
            return None;
        }

        let bytes = fs::read(cache_path).ok()?;
        let entry: CacheEntry = match serde_json::from_slice(&bytes) {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Discarding unreadable cache entry {}: {}", cache_path.display(), e);
                return None;
            }
        };

        let current = entry.format == CACHE_FORMAT
            && entry.source_path == source_path
            && entry.source_len == fingerprint.len
            && entry.source_digest == fingerprint.digest;
        if !current {
            debug!("Cache entry {} does not match source", cache_path.display());
            return None;
        }

        Some(entry.declarations)
    }

    fn store(
        &self,
        cache_path: &Path,
        source_path: &Path,
        modified: SystemTime,
        fingerprint: &Fingerprint,
        declarations: &[Declaration],
    ) -> Result<()> {
        let cache_err = |e: &dyn std::fmt::Display| AutodocError::cache(cache_path, e.to_string());

        fs::create_dir_all(&self.cache_dir).map_err(|e| cache_err(&e))?;

        let entry = CacheEntryRef {
            format: CACHE_FORMAT,
            source_path,
            source_len: fingerprint.len,
            source_digest: &fingerprint.digest,
            declarations,
        };

        let file = File::create(cache_path).map_err(|e| cache_err(&e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &entry).map_err(|e| cache_err(&e))?;
        let file = writer.into_inner().map_err(|e| cache_err(e.error()))?;
        file.set_modified(modified).map_err(|e| cache_err(&e))?;

        debug!("Wrote cache entry {}", cache_path.display());
        Ok(())
    }
}
