//! Catalog file storage.
//!
//! The core keeps the catalog and request log in memory only; the CLI saves
//! both between runs as one JSON file. A missing file means a fresh, seeded
//! catalog with no requests.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use bookshare_core::{BookRecord, BookRequest, Catalog, RequestLog};

/// On-disk layout.
#[derive(Debug, Serialize, Deserialize)]
struct StoredCatalog {
    books: Vec<BookRecord>,
    #[serde(default)]
    requests: Vec<BookRequest>,
}

/// The catalog together with the requests filed against it.
#[derive(Debug, Clone)]
pub struct Library {
    pub catalog: Catalog,
    pub requests: RequestLog,
}

/// Resolve the catalog file, honoring an explicit path first.
pub fn catalog_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let dirs =
        ProjectDirs::from("", "", "bookshare").context("Could not determine data directory")?;
    Ok(dirs.data_dir().join("catalog.json"))
}

/// Load the library at `path`, or the seed catalog if the file does not exist.
pub fn load(path: &Path) -> Result<Library> {
    if !path.exists() {
        debug!(path = %path.display(), "No catalog file, using seed catalog");
        return Ok(Library {
            catalog: Catalog::seeded(),
            requests: RequestLog::new(),
        });
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    let stored: StoredCatalog = serde_json::from_str(&json)
        .with_context(|| format!("Invalid catalog file {}", path.display()))?;

    debug!(
        path = %path.display(),
        books = stored.books.len(),
        requests = stored.requests.len(),
        "Catalog loaded"
    );
    Ok(Library {
        catalog: Catalog::from_records(stored.books),
        requests: RequestLog::from_requests(stored.requests),
    })
}

/// Write `library` to `path`, creating parent directories as needed.
pub fn save(path: &Path, library: &Library) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create data directory")?;
    }

    let stored = StoredCatalog {
        books: library.catalog.list(),
        requests: library.requests.list(),
    };
    let json = serde_json::to_string_pretty(&stored)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write catalog file {}", path.display()))?;

    debug!(
        path = %path.display(),
        books = stored.books.len(),
        requests = stored.requests.len(),
        "Catalog saved"
    );
    Ok(())
}
