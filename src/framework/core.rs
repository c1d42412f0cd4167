//! # Core Document Store
//!
//! This module defines the generic building blocks for file-backed storage.
//!
//! ## Key Types
//!
//! - [`DocumentEntity`]: The trait that every stored record type must implement.
//! - [`JsonFileStore`]: The generic store that reads and rewrites one JSON document.
//! - [`Document`]: The in-memory form of that document.
//! - [`StoreError`]: Read, parse and write failures.
//!
//! ## Storage Model
//!
//! The document is a single JSON object mapping each entity's key (its id rendered
//! as text) to the serialized entity. There is no cache: every operation reads the
//! whole file, and every mutation rewrites it in full by direct overwrite. Two
//! processes writing the same file race and the last writer wins.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any record type must implement to be kept in a [`JsonFileStore`].
///
/// The store only needs to know how to serialize the record and which key it
/// lives under. Everything domain-specific stays in the implementing type.
pub trait DocumentEntity: Serialize + DeserializeOwned + Clone + Debug {
    /// The unique identifier for this entity.
    type Id: Display + Debug + Clone;

    /// The identifier of this instance.
    fn id(&self) -> Self::Id;

    /// The document key for an id. Defaults to the id's `Display` form.
    fn document_key(id: &Self::Id) -> String {
        id.to_string()
    }
}

/// The whole persisted collection, keyed by document key.
///
/// Keys are kept sorted, so rewriting an unchanged document is byte-stable.
pub type Document<T> = BTreeMap<String, T>;

// =============================================================================
// 2. ERRORS
// =============================================================================

/// Errors raised while reading or writing the document file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but is not a valid document.
    #[error("Invalid document in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be serialized.
    #[error("Failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The serialized document could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// =============================================================================
// 3. THE GENERIC STORE
// =============================================================================

/// A JSON document on disk holding every entity of type `T`.
///
/// The store owns nothing but the path. Each call opens and closes the file
/// within its own scope.
#[derive(Debug, Clone)]
pub struct JsonFileStore<T: DocumentEntity> {
    path: PathBuf,
    _entity: PhantomData<T>,
}

impl<T: DocumentEntity> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _entity: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the whole document.
    ///
    /// A missing file, or one holding only whitespace, is an empty document.
    pub fn read_all(&self) -> Result<Document<T>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Document missing, starting empty");
                return Ok(Document::new());
            }
            Err(source) => {
                warn!(path = %self.path.display(), error = %source, "Read failed");
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if text.trim().is_empty() {
            return Ok(Document::new());
        }

        serde_json::from_str(&text).map_err(|source| {
            warn!(path = %self.path.display(), error = %source, "Parse failed");
            StoreError::Parse {
                path: self.path.clone(),
                source,
            }
        })
    }

    /// Overwrites the file with `document`, pretty-printed with 4-space indentation.
    pub fn write_all(&self, document: &Document<T>) -> Result<(), StoreError> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        document
            .serialize(&mut serializer)
            .map_err(StoreError::Serialize)?;

        let result = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
            _ => Ok(()),
        }
        .and_then(|()| fs::write(&self.path, &buffer));

        result.map_err(|source| {
            warn!(path = %self.path.display(), error = %source, "Write failed");
            StoreError::Write {
                path: self.path.clone(),
                source,
            }
        })?;

        debug!(path = %self.path.display(), size = document.len(), "Document written");
        Ok(())
    }

    /// Stores `item` under its key unless the key is already taken.
    ///
    /// Returns `false`, without writing, when the key exists.
    pub fn insert_new(&self, item: T) -> Result<bool, StoreError> {
        let entity_type = entity_type::<T>();
        let id = item.id();
        let key = T::document_key(&id);
        debug!(entity_type, %id, ?item, "Insert");

        let mut document = self.read_all()?;
        if document.contains_key(&key) {
            warn!(entity_type, %id, "Key already present");
            return Ok(false);
        }

        document.insert(key, item);
        self.write_all(&document)?;
        info!(entity_type, %id, size = document.len(), "Created");
        Ok(true)
    }

    /// Fetches the entity stored under `id`.
    pub fn get(&self, id: &T::Id) -> Result<Option<T>, StoreError> {
        let item = self.read_all()?.remove(&T::document_key(id));
        debug!(entity_type = entity_type::<T>(), %id, found = item.is_some(), "Get");
        Ok(item)
    }

    /// Applies `change` to the entity stored under `id` and persists the result.
    ///
    /// Returns `None`, without writing, when there is no such entity.
    pub fn modify<R>(
        &self,
        id: &T::Id,
        change: impl FnOnce(&mut T) -> R,
    ) -> Result<Option<R>, StoreError> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, %id, "Modify");

        let mut document = self.read_all()?;
        let Some(item) = document.get_mut(&T::document_key(id)) else {
            warn!(entity_type, %id, "Not found");
            return Ok(None);
        };

        let output = change(item);
        self.write_all(&document)?;
        info!(entity_type, %id, "Updated");
        Ok(Some(output))
    }

    /// Removes the entity stored under `id` and persists the document.
    ///
    /// Returns the removed entity, or `None` without writing.
    pub fn remove(&self, id: &T::Id) -> Result<Option<T>, StoreError> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, %id, "Remove");

        let mut document = self.read_all()?;
        let Some(item) = document.remove(&T::document_key(id)) else {
            warn!(entity_type, %id, "Not found");
            return Ok(None);
        };

        self.write_all(&document)?;
        info!(entity_type, %id, size = document.len(), "Deleted");
        Ok(Some(item))
    }
}

/// Short type name for log fields, e.g. `ProductRecord`.
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: u32,
        text: String,
    }

    impl DocumentEntity for Note {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    fn note(id: u32, text: &str) -> Note {
        Note {
            id,
            text: text.into(),
        }
    }

    fn store(dir: &tempfile::TempDir) -> JsonFileStore<Note> {
        JsonFileStore::new(dir.path().join("notes.json"))
    }

    #[test]
    fn test_missing_and_blank_files_read_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        assert!(store.read_all().unwrap().is_empty());

        fs::write(store.path(), "  \n").unwrap();
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        fs::write(store.path(), "{ not json").unwrap();

        assert!(matches!(store.read_all(), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn test_directory_in_place_of_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonFileStore<Note> = JsonFileStore::new(dir.path());

        assert!(matches!(store.read_all(), Err(StoreError::Read { .. })));
        assert!(matches!(
            store.write_all(&Document::new()),
            Err(StoreError::Write { .. })
        ));
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        let mut document = Document::new();
        document.insert("1".to_string(), note(1, "first"));
        document.insert("10".to_string(), note(10, "tenth"));
        store.write_all(&document).unwrap();

        assert_eq!(store.read_all().unwrap(), document);
    }

    #[test]
    fn test_written_document_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        store.insert_new(note(1, "first")).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("{\n    \"1\": {\n        \"id\": 1,"));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonFileStore<Note> = JsonFileStore::new(dir.path().join("a/b/notes.json"));
        store.insert_new(note(1, "nested")).unwrap();

        assert_eq!(store.get(&1).unwrap(), Some(note(1, "nested")));
    }

    #[test]
    fn test_crud_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        // 1. Insert, then reject a duplicate key
        assert!(store.insert_new(note(1, "first")).unwrap());
        assert!(!store.insert_new(note(1, "again")).unwrap());
        assert_eq!(store.get(&1).unwrap(), Some(note(1, "first")));

        // 2. Modify
        let old = store
            .modify(&1, |n| std::mem::replace(&mut n.text, "edited".into()))
            .unwrap();
        assert_eq!(old.as_deref(), Some("first"));
        assert_eq!(store.get(&1).unwrap().unwrap().text, "edited");
        assert_eq!(store.modify(&2, |_| ()).unwrap(), None);

        // 3. Remove
        assert_eq!(store.remove(&1).unwrap(), Some(note(1, "edited")));
        assert_eq!(store.remove(&1).unwrap(), None);
        assert_eq!(store.get(&1).unwrap(), None);
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_absent_keys_do_not_create_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        assert_eq!(store.get(&3).unwrap(), None);
        assert_eq!(store.remove(&3).unwrap(), None);
        assert!(!store.path().exists());
    }
}
