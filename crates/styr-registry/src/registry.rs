//! Base Directory Registry
//!
//! Ordered, deduplicated list of directory paths backed by a single JSON file.
//! Every mutation is written through to disk before the call returns.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{RegistryError, RegistryResult};

/// Outcome of [`BaseDirRegistry::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddResult {
    pub success: bool,
    pub already_exists: bool,
}

/// Outcome of [`BaseDirRegistry::remove`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveResult {
    pub success: bool,
}

/// In-memory registry of base directories with its on-disk mirror.
///
/// Entries compare by exact string equality: no separator normalization,
/// no case folding, no trailing-slash trimming. Callers must serialize access;
/// the registry does no locking of its own.
#[derive(Debug)]
pub struct BaseDirRegistry {
    /// Paths in the order the user added them
    entries: Vec<String>,
    /// Backing file, fixed for the registry's lifetime
    storage_path: PathBuf,
}

impl BaseDirRegistry {
    /// Load the registry from `storage_path`.
    ///
    /// A missing, unreadable or malformed file yields an empty registry. The
    /// failure is logged, never returned.
    pub fn initialize(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();

        let entries = match Self::load(&storage_path) {
            Ok(entries) => {
                info!("Loaded {} base directories from {:?}", entries.len(), storage_path);
                entries
            }
            Err(e) if e.is_not_found() => {
                debug!("No base directory file at {:?}, starting empty", storage_path);
                Vec::new()
            }
            Err(e) => {
                warn!("Ignoring unusable base directory file: {}", e);
                Vec::new()
            }
        };

        Self {
            entries,
            storage_path,
        }
    }

    fn load(path: &Path) -> RegistryResult<Vec<String>> {
        let content = fs::read(path).map_err(|source| RegistryError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut entries: Vec<String> =
            serde_json::from_slice(&content).map_err(|source| RegistryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        // A hand-edited file may carry repeats; keep the first occurrence.
        let mut seen = HashSet::with_capacity(entries.len());
        entries.retain(|entry| seen.insert(entry.clone()));

        Ok(entries)
    }

    /// Current entries, oldest first
    pub fn list(&self) -> &[String] {
        &self.entries
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|entry| entry == path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Location of the backing file
    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Append `path` unless it is already registered.
    ///
    /// Re-adding an existing path is a successful no-op. If the write fails the
    /// entry stays in memory and `success` is false.
    pub fn add(&mut self, path: &str) -> AddResult {
        if self.contains(path) {
            debug!("Base directory already registered: {}", path);
            return AddResult {
                success: true,
                already_exists: true,
            };
        }

        self.entries.push(path.to_string());

        match self.persist() {
            Ok(()) => {
                info!("Added base directory: {}", path);
                AddResult {
                    success: true,
                    already_exists: false,
                }
            }
            Err(e) => {
                warn!("Added base directory {} but could not save: {}", path, e);
                AddResult {
                    success: false,
                    already_exists: false,
                }
            }
        }
    }

    /// Drop every entry equal to `path` and save.
    ///
    /// Removing an unknown path still rewrites the file. The in-memory removal
    /// stands even when the write fails.
    pub fn remove(&mut self, path: &str) -> RemoveResult {
        let before = self.entries.len();
        self.entries.retain(|entry| entry != path);
        let removed = before - self.entries.len();

        match self.persist() {
            Ok(()) => {
                if removed > 0 {
                    info!("Removed base directory: {}", path);
                } else {
                    debug!("Base directory not registered, nothing removed: {}", path);
                }
                RemoveResult { success: true }
            }
            Err(e) => {
                warn!("Removed base directory {} but could not save: {}", path, e);
                RemoveResult { success: false }
            }
        }
    }

    /// Overwrite the backing file with the full entry list. Not atomic.
    fn persist(&self) -> RegistryResult<()> {
        let data = serde_json::to_vec(&self.entries)?;
        fs::write(&self.storage_path, data).map_err(|source| RegistryError::Write {
            path: self.storage_path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn registry_in(dir: &TempDir) -> BaseDirRegistry {
        BaseDirRegistry::initialize(dir.path().join("basedirs.json"))
    }

    fn read_file(registry: &BaseDirRegistry) -> String {
        fs::read_to_string(registry.storage_path()).unwrap()
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let registry = registry_in(&dir);
        assert!(registry.is_empty());
        assert!(!registry.storage_path().exists());
    }

    #[test]
    fn test_add_then_readd_scenario() {
        let dir = TempDir::new().unwrap();
        let mut registry = registry_in(&dir);

        assert_eq!(
            registry.add("/a"),
            AddResult { success: true, already_exists: false }
        );
        assert_eq!(registry.list(), ["/a"]);

        assert_eq!(
            registry.add("/a"),
            AddResult { success: true, already_exists: true }
        );
        assert_eq!(registry.list(), ["/a"]);

        registry.add("/b");
        assert_eq!(registry.list(), ["/a", "/b"]);

        assert_eq!(registry.remove("/a"), RemoveResult { success: true });
        assert_eq!(registry.list(), ["/b"]);
        assert_eq!(read_file(&registry), r#"["/b"]"#);
    }

    #[test]
    fn test_order_is_insertion_order() {
        let dir = TempDir::new().unwrap();
        let mut registry = registry_in(&dir);
        registry.add("/srv/data");
        registry.add("/home/user/projects");
        registry.add("/opt");
        assert_eq!(registry.list(), ["/srv/data", "/home/user/projects", "/opt"]);
    }

    #[test]
    fn test_comparison_is_exact() {
        let dir = TempDir::new().unwrap();
        let mut registry = registry_in(&dir);
        registry.add("/a");
        assert!(!registry.add("/a/").already_exists);
        assert!(!registry.add("/A").already_exists);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_remove_non_member_rewrites_unchanged_list() {
        let dir = TempDir::new().unwrap();
        let mut registry = registry_in(&dir);
        registry.add("/a");

        assert_eq!(registry.remove("/missing"), RemoveResult { success: true });
        assert_eq!(registry.list(), ["/a"]);
        assert_eq!(read_file(&registry), r#"["/a"]"#);
    }

    #[test]
    fn test_remove_on_empty_registry_writes_empty_array() {
        let dir = TempDir::new().unwrap();
        let mut registry = registry_in(&dir);
        assert!(registry.remove("/a").success);
        assert_eq!(read_file(&registry), "[]");
    }

    #[test]
    fn test_reload_reproduces_entries() {
        let dir = TempDir::new().unwrap();
        let mut registry = registry_in(&dir);
        registry.add("/one");
        registry.add("/two");
        registry.add("/three");
        registry.remove("/two");
        registry.add("/four");

        let reloaded = registry_in(&dir);
        assert_eq!(reloaded.list(), registry.list());
        assert_eq!(reloaded.list(), ["/one", "/three", "/four"]);
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("basedirs.json");

        for content in ["\"not an array\"", "[\"/a\", ", "{\"baseDirs\": []}", "[1, 2]", ""] {
            fs::write(&path, content).unwrap();
            let registry = BaseDirRegistry::initialize(&path);
            assert!(registry.is_empty(), "expected empty for {:?}", content);
        }
    }

    #[test]
    fn test_corrupt_file_replaced_on_next_mutation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("basedirs.json");
        fs::write(&path, "garbage").unwrap();

        let mut registry = BaseDirRegistry::initialize(&path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "garbage");

        assert!(registry.add("/a").success);
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"["/a"]"#);
    }

    #[test]
    fn test_duplicates_in_file_collapse_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("basedirs.json");
        fs::write(&path, r#"["/a", "/b", "/a"]"#).unwrap();

        let registry = BaseDirRegistry::initialize(&path);
        assert_eq!(registry.list(), ["/a", "/b"]);
    }

    #[test]
    fn test_failed_persist_keeps_memory_change() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("basedirs.json");
        let mut registry = BaseDirRegistry::initialize(&path);

        assert_eq!(
            registry.add("/a"),
            AddResult { success: false, already_exists: false }
        );
        assert_eq!(registry.list(), ["/a"]);

        // Already in memory, so the retry short-circuits without writing.
        assert_eq!(
            registry.add("/a"),
            AddResult { success: true, already_exists: true }
        );

        assert_eq!(registry.remove("/a"), RemoveResult { success: false });
        assert!(registry.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_result_json_shape() {
        let add = serde_json::to_value(AddResult { success: true, already_exists: false }).unwrap();
        assert_eq!(add, serde_json::json!({"success": true, "alreadyExists": false}));

        let remove = serde_json::to_value(RemoveResult { success: false }).unwrap();
        assert_eq!(remove, serde_json::json!({"success": false}));
    }
}
