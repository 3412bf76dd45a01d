//! File-backed palette storage.
//!
//! Palettes live one JSON document per id under a root directory. Writes
//! are atomic (temp file + rename), so a crash mid-save never leaves a
//! half-written document and concurrent writers resolve to last-writer-wins
//! per key. There are no cross-key transactions.

pub mod error;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::warn;

use chroma_model::{Palette, PaletteSummary};

pub use error::{Result, StoreError};

/// Key-value store of palettes keyed by palette id.
#[derive(Debug, Clone)]
pub struct PaletteStore {
    root: PathBuf,
}

impl PaletteStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::Io {
            operation: "create directory",
            path: root.clone(),
            source: e,
        })?;
        Ok(Self { root })
    }

    /// The directory documents are stored under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Upsert a palette under its id.
    pub fn put(&self, palette: &Palette) -> Result<()> {
        let bytes =
            serde_json::to_vec_pretty(palette).map_err(|e| StoreError::Serialize {
                id: palette.id.clone(),
                source: e,
            })?;
        let path = self.document_path(&palette.id);
        let temp_path = path.with_extension("json.tmp");

        let mut file = File::create(&temp_path).map_err(|e| StoreError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;
        file.write_all(&bytes).map_err(|e| StoreError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;
        file.sync_all().map_err(|e| StoreError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &path).map_err(|e| StoreError::Io {
            operation: "rename",
            path: path.clone(),
            source: e,
        })?;
        tracing::debug!(id = %palette.id, path = %path.display(), "saved palette");
        Ok(())
    }

    /// Look up a palette by id. Absence is `Ok(None)`, not an error.
    pub fn get(&self, id: &str) -> Result<Option<Palette>> {
        if !valid_id(id) {
            return Ok(None);
        }
        let path = self.document_path(id);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Io {
                    operation: "read",
                    path,
                    source: e,
                });
            }
        };
        let palette = serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::Corrupt { path, source: e })?;
        Ok(Some(palette))
    }

    /// List summaries of all stored palettes, newest first.
    ///
    /// Corrupt documents are skipped with a warning so one damaged file
    /// cannot take down listing.
    pub fn list(&self) -> Result<Vec<PaletteSummary>> {
        let entries = fs::read_dir(&self.root).map_err(|e| StoreError::Io {
            operation: "read directory",
            path: self.root.clone(),
            source: e,
        })?;
        let mut summaries = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::Io {
                operation: "read directory",
                path: self.root.clone(),
                source: e,
            })?;
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let bytes = fs::read(&path).map_err(|e| StoreError::Io {
                operation: "read",
                path: path.clone(),
                source: e,
            })?;
            match serde_json::from_slice::<Palette>(&bytes) {
                Ok(palette) => summaries.push(PaletteSummary::from(&palette)),
                Err(error) => {
                    warn!(path = %path.display(), %error, "skipping corrupt palette document");
                }
            }
        }
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    /// Delete a palette by id. Returns true iff a document existed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        if !valid_id(id) {
            return Ok(false);
        }
        let path = self.document_path(id);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::Io {
                operation: "delete",
                path,
                source: e,
            }),
        }
    }

    fn document_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }
}

/// Ids are UUID-shaped; anything else cannot name a document and is
/// treated as absent rather than touching the filesystem.
fn valid_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::harmony;
    use chroma_model::HarmonyKind;
    use tempfile::tempdir;

    fn sample(name: &str) -> Palette {
        harmony::generate("#3b82f6", HarmonyKind::Complementary, name).unwrap()
    }

    #[test]
    fn put_then_get_round_trips() {
        let dir = tempdir().unwrap();
        let store = PaletteStore::open(dir.path()).unwrap();
        let palette = sample("Ocean");

        store.put(&palette).unwrap();
        let loaded = store.get(&palette.id).unwrap().expect("palette exists");
        assert_eq!(loaded, palette);
    }

    #[test]
    fn get_of_unknown_id_is_none() {
        let dir = tempdir().unwrap();
        let store = PaletteStore::open(dir.path()).unwrap();
        assert!(store.get("no-such-id").unwrap().is_none());
        assert!(store.get("../escape").unwrap().is_none());
        assert!(store.get("").unwrap().is_none());
    }

    #[test]
    fn put_is_an_upsert() {
        let dir = tempdir().unwrap();
        let store = PaletteStore::open(dir.path()).unwrap();
        let mut palette = sample("First");
        store.put(&palette).unwrap();

        palette.name = "Renamed".to_string();
        store.put(&palette).unwrap();

        let loaded = store.get(&palette.id).unwrap().unwrap();
        assert_eq!(loaded.name, "Renamed");
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn list_orders_newest_first() {
        let dir = tempdir().unwrap();
        let store = PaletteStore::open(dir.path()).unwrap();

        let mut older = sample("older");
        let mut newer = sample("newer");
        older.created_at = "2024-01-01T00:00:00Z".parse().unwrap();
        newer.created_at = "2025-06-01T00:00:00Z".parse().unwrap();
        store.put(&older).unwrap();
        store.put(&newer).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "newer");
        assert_eq!(listed[1].name, "older");
    }

    #[test]
    fn list_skips_corrupt_documents() {
        let dir = tempdir().unwrap();
        let store = PaletteStore::open(dir.path()).unwrap();
        store.put(&sample("good")).unwrap();
        fs::write(dir.path().join("broken.json"), b"{ not json").unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "good");
    }

    #[test]
    fn delete_reports_whether_a_document_existed() {
        let dir = tempdir().unwrap();
        let store = PaletteStore::open(dir.path()).unwrap();
        let palette = sample("gone");
        store.put(&palette).unwrap();

        assert!(store.delete(&palette.id).unwrap());
        assert!(!store.delete(&palette.id).unwrap());
        assert!(store.get(&palette.id).unwrap().is_none());
    }
}
