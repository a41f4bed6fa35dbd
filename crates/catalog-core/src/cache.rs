//! Caller-owned caching of loaded catalogs.
//!
//! Re-deriving a catalog from its source file is idempotent, so caching is
//! purely an optimization. The cache is explicit state owned by whoever
//! hosts the query session, never module-level: entries are keyed by the
//! source file's size and modification time and replaced whenever that key
//! (or the requested layout) changes.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::loader::{load_catalog, Layout};

/// Identity of a source file's content at a point in time.
///
/// Size plus modification time is enough to detect edits to the small,
/// hand-curated sheets this system reads; a content hash would be overkill.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SourceKey {
    len: u64,
    modified: Option<SystemTime>,
}

impl SourceKey {
    fn probe(path: &Path) -> Result<Self> {
        let meta = std::fs::metadata(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            len: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}

struct CacheEntry {
    key: SourceKey,
    layout: Layout,
    catalog: Arc<Catalog>,
}

/// A keyed catalog cache.
///
/// `load` returns the cached catalog while the file is unchanged and the
/// layout matches, and transparently reloads otherwise. Catalogs are
/// handed out as `Arc` so concurrent read sessions can share one
/// immutable instance.
#[derive(Default)]
pub struct CatalogCache {
    entries: HashMap<PathBuf, CacheEntry>,
}

impl CatalogCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog through the cache.
    ///
    /// # Errors
    ///
    /// Propagates any [`crate::loader::load_catalog`] error; a failed
    /// reload leaves no stale entry behind.
    pub fn load(&mut self, path: impl AsRef<Path>, layout: Layout) -> Result<Arc<Catalog>> {
        let path = path.as_ref();
        let key = SourceKey::probe(path)?;

        if let Some(entry) = self.entries.get(path) {
            if entry.key == key && entry.layout == layout {
                debug!(path = %path.display(), "catalog cache hit");
                return Ok(Arc::clone(&entry.catalog));
            }
        }

        self.entries.remove(path);
        let catalog = Arc::new(load_catalog(path, layout)?);
        self.entries.insert(
            path.to_path_buf(),
            CacheEntry {
                key,
                layout,
                catalog: Arc::clone(&catalog),
            },
        );
        Ok(catalog)
    }

    /// Drop the entry for one source file.
    pub fn invalidate(&mut self, path: impl AsRef<Path>) {
        self.entries.remove(path.as_ref());
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached catalogs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
