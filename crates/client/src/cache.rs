//! Best-effort persistence for the expansion set.
//!
//! The expanded node ids are stored as a JSON array under a fixed file
//! name in the configured cache directory. Loading falls back to the
//! empty set on any failure; stores log and swallow errors. With no
//! directory configured the cache is disabled and always reads empty.

use std::collections::HashSet;
use std::path::PathBuf;

use kintree_core::DbId;

/// File name of the cached expansion set inside the cache directory.
pub const CACHE_FILE: &str = "expanded_nodes.json";

/// Filesystem-backed cache for the expansion set.
#[derive(Debug, Clone)]
pub struct ExpansionCache {
    /// `None` disables the cache.
    dir: Option<PathBuf>,
}

impl ExpansionCache {
    /// Cache rooted at `dir`. The directory must already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Cache that never reads or writes.
    pub fn disabled() -> Self {
        Self { dir: None }
    }

    /// Load the cached expansion set. A missing, unreadable, or
    /// corrupted cache yields the empty set.
    pub fn load(&self) -> HashSet<DbId> {
        let Some(path) = self.path() else {
            return HashSet::new();
        };
        let Ok(raw) = std::fs::read_to_string(&path) else {
            return HashSet::new();
        };
        match serde_json::from_str::<Vec<DbId>>(&raw) {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "Discarding corrupted expansion cache");
                HashSet::new()
            }
        }
    }

    /// Persist the expansion set. Failures are logged and ignored.
    pub fn store(&self, expanded: &HashSet<DbId>) {
        let Some(path) = self.path() else {
            return;
        };

        // Sorted so the file contents are deterministic.
        let mut ids: Vec<DbId> = expanded.iter().copied().collect();
        ids.sort_unstable();

        let json = serde_json::to_string(&ids).expect("id list is always serialisable");
        if let Err(e) = std::fs::write(&path, json) {
            tracing::warn!(error = %e, path = %path.display(), "Failed to write expansion cache");
        }
    }

    fn path(&self) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(CACHE_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let cache = ExpansionCache::new(dir.path());

        let expanded: HashSet<DbId> = [3, 1, 2].into_iter().collect();
        cache.store(&expanded);

        assert_eq!(cache.load(), expanded);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let cache = ExpansionCache::new(dir.path());

        assert!(cache.load().is_empty());
    }

    #[test]
    fn test_corrupted_file_loads_empty() {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join(CACHE_FILE), "{not json").expect("write file");

        let cache = ExpansionCache::new(dir.path());
        assert!(cache.load().is_empty());
    }

    #[test]
    fn test_store_to_missing_directory_is_silent() {
        let cache = ExpansionCache::new("/nonexistent/kintree-cache");
        cache.store(&[1, 2].into_iter().collect());
    }

    #[test]
    fn test_disabled_cache_never_reads_or_writes() {
        let cache = ExpansionCache::disabled();
        cache.store(&[1].into_iter().collect());
        assert!(cache.load().is_empty());
    }

    #[test]
    fn test_file_contents_are_sorted_ids() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let cache = ExpansionCache::new(dir.path());

        cache.store(&[9, 4, 7].into_iter().collect());

        let raw = std::fs::read_to_string(dir.path().join(CACHE_FILE)).expect("read file");
        assert_eq!(raw, "[4,7,9]");
    }
}
