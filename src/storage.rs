//! Membership persistence for container groups.

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Serializable record of one stored item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredMember {
    /// Item name.
    pub name: String,
    /// Item kind tag.
    pub kind: String,
    /// Configuration payload, if the item carries one.
    #[serde(default)]
    pub config: Value,
}

/// Persists the membership of a group.
///
/// A group calls `persist` after every insert or eject. A failing store is
/// how container mutation acquires its I/O failure mode.
pub trait GroupStore: fmt::Debug + Send + Sync {
    /// Write the full membership of `group_name`.
    fn persist(&self, group_name: &str, members: &[StoredMember]) -> io::Result<()>;

    /// Read the membership of `group_name` back. `None` means nothing was
    /// ever persisted for this group.
    fn load(&self, group_name: &str) -> io::Result<Option<Vec<StoredMember>>>;
}

/// Keeps nothing; for trees that live and die with the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore;

impl GroupStore for MemoryStore {
    fn persist(&self, _group_name: &str, _members: &[StoredMember]) -> io::Result<()> {
        Ok(())
    }

    fn load(&self, _group_name: &str) -> io::Result<Option<Vec<StoredMember>>> {
        Ok(None)
    }
}

/// Writes one pretty-printed JSON manifest per group under a directory.
///
/// Creates the directory on first persist.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Directory holding `<group>.json` manifests.
    pub directory: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn manifest_path(&self, group_name: &str) -> PathBuf {
        self.directory.join(format!("{group_name}.json"))
    }
}

impl GroupStore for JsonFileStore {
    fn persist(&self, group_name: &str, members: &[StoredMember]) -> io::Result<()> {
        if !self.directory.exists() {
            fs::create_dir_all(&self.directory)?;
        }
        let content = serde_json::to_string_pretty(members)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        log::debug!(
            "persisting {} member(s) of group '{}'",
            members.len(),
            group_name
        );
        fs::write(self.manifest_path(group_name), content)
    }

    fn load(&self, group_name: &str) -> io::Result<Option<Vec<StoredMember>>> {
        let path = self.manifest_path(group_name);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let members = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Some(members))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn member(name: &str) -> StoredMember {
        StoredMember {
            name: name.to_string(),
            kind: "job".to_string(),
            config: json!({ "schedule": "nightly" }),
        }
    }

    #[test]
    fn test_memory_store_keeps_nothing() {
        let store = MemoryStore;
        store.persist("ci", &[member("build")]).unwrap();
        assert_eq!(store.load("ci").unwrap(), None);
    }

    #[test]
    fn test_json_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let members = vec![member("build"), member("deploy")];
        store.persist("ci", &members).unwrap();

        let loaded = store.load("ci").unwrap();
        assert_eq!(loaded, Some(members));
    }

    #[test]
    fn test_json_store_missing_manifest_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert_eq!(store.load("never-persisted").unwrap(), None);
    }

    #[test]
    fn test_json_store_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("groups"));

        store.persist("ci", &[member("build")]).unwrap();
        assert!(store.load("ci").unwrap().is_some());
    }
}
