//! `trove-store` — file-backed persistence for the item collection.
//!
//! The whole collection lives in one JSON array document. Every operation is
//! a full read-modify-write cycle: read the array, mutate in memory, rewrite
//! the file. There is **no locking**; two concurrent writers race and the
//! last full snapshot wins, silently dropping the other writer's change.
//! That lost-update hazard is a documented property of this store, not an
//! oversight (see DESIGN.md).
//!
//! Read faults (missing file aside — that is created on demand) degrade to
//! an empty collection through the named [`FileStore::read_items_or_empty`]
//! path; write faults surface as [`DomainError::Storage`].

use std::fs;
use std::path::{Path, PathBuf};

use trove_core::{DomainError, DomainResult, Item, ItemId, ItemPatch};

/// Store abstraction over the item collection.
///
/// One implementation today ([`FileStore`]); the trait keeps the API crate
/// testable against the same surface the handlers use.
pub trait ItemStore: Send + Sync {
    /// Every persisted item, in insertion order. Read/parse failures degrade
    /// to an empty list.
    fn list_all(&self) -> Vec<Item>;

    /// First exact-id match, or `None`.
    fn get_by_id(&self, id: &ItemId) -> Option<Item>;

    /// Append `item` and rewrite the file. The caller supplies a fresh id;
    /// no uniqueness check is performed here.
    fn create(&self, item: Item) -> DomainResult<()>;

    /// Shallow-merge `patch` over the record with `id` and rewrite the file.
    /// Returns the merged record, or `None` when the id is absent.
    fn update(&self, id: &ItemId, patch: ItemPatch) -> DomainResult<Option<Item>>;

    /// Remove the record with `id`. Returns whether anything was removed;
    /// the file is only rewritten when it was.
    fn delete(&self, id: &ItemId) -> DomainResult<bool>;
}

/// The JSON-file store.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_file: PathBuf,
}

impl FileStore {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Create the data directory and an empty `[]` document if absent.
    fn ensure_data_file(&self) -> DomainResult<()> {
        if let Some(dir) = self.data_file.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| DomainError::storage(format!("create data dir: {e}")))?;
        }
        if !self.data_file.exists() {
            fs::write(&self.data_file, "[]")
                .map_err(|e| DomainError::storage(format!("seed data file: {e}")))?;
        }
        Ok(())
    }

    /// The named degrade-to-empty read path: any open or parse failure is
    /// logged and yields an empty collection rather than an error.
    fn read_items_or_empty(&self) -> Vec<Item> {
        if let Err(e) = self.ensure_data_file() {
            tracing::warn!(error = %e, "item store unavailable; degrading to empty collection");
            return Vec::new();
        }
        let raw = match fs::read_to_string(&self.data_file) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, path = %self.data_file.display(),
                    "failed to read item store; degrading to empty collection");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Item>>(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(error = %e, path = %self.data_file.display(),
                    "failed to parse item store; degrading to empty collection");
                Vec::new()
            }
        }
    }

    /// Full-file rewrite of the collection, pretty-printed.
    fn write_items(&self, items: &[Item]) -> DomainResult<()> {
        self.ensure_data_file()?;
        let raw = serde_json::to_string_pretty(items)
            .map_err(|e| DomainError::storage(format!("serialize items: {e}")))?;
        fs::write(&self.data_file, raw)
            .map_err(|e| DomainError::storage(format!("write items: {e}")))
    }
}

impl ItemStore for FileStore {
    fn list_all(&self) -> Vec<Item> {
        self.read_items_or_empty()
    }

    fn get_by_id(&self, id: &ItemId) -> Option<Item> {
        self.list_all().into_iter().find(|item| item.id == *id)
    }

    fn create(&self, item: Item) -> DomainResult<()> {
        let mut items = self.read_items_or_empty();
        items.push(item);
        self.write_items(&items)
    }

    fn update(&self, id: &ItemId, patch: ItemPatch) -> DomainResult<Option<Item>> {
        let mut items = self.read_items_or_empty();
        let Some(existing) = items.iter_mut().find(|item| item.id == *id) else {
            return Ok(None);
        };
        patch.apply(existing);
        let merged = existing.clone();
        self.write_items(&items)?;
        Ok(Some(merged))
    }

    fn delete(&self, id: &ItemId) -> DomainResult<bool> {
        let mut items = self.read_items_or_empty();
        let before = items.len();
        items.retain(|item| item.id != *id);
        if items.len() == before {
            return Ok(false);
        }
        self.write_items(&items)?;
        Ok(true)
    }
}
