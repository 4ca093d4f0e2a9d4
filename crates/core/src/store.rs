//! The record store: create, list, detail lookup, and delete.
//!
//! All operations are synchronous and run to completion on the caller's
//! thread. The store is configured with a base directory and holds no other
//! state; every call re-derives what it needs from the filesystem.

use crate::attachments;
use crate::error::{StoreError, StoreResult};
use crate::observer::{StoreObserver, StoreOp, TracingObserver};
use crate::record::{self, Record};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

/// Per-record folder storage under one base directory.
///
/// Each record is created once, read any number of times, and destroyed
/// once; there is no update-in-place. Record identities are random v4
/// UUIDs, so two concurrent creates never collide, but the store performs
/// no coordination beyond that — it assumes single-process access to the
/// base directory.
pub struct RecordStore {
    base_dir: PathBuf,
    observer: Arc<dyn StoreObserver>,
}

impl RecordStore {
    /// Creates a store over `base_dir`, creating the directory if absent.
    ///
    /// Non-fatal issues are reported through [`TracingObserver`]; use
    /// [`RecordStore::with_observer`] to install a different sink.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::BaseDirCreation` if the base directory cannot
    /// be created.
    pub fn new(base_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        Self::with_observer(base_dir, Arc::new(TracingObserver))
    }

    /// Creates a store over `base_dir` with a caller-supplied observer for
    /// non-fatal issues (skipped attachment copies, skipped metadata
    /// documents).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::BaseDirCreation` if the base directory cannot
    /// be created.
    pub fn with_observer(
        base_dir: impl Into<PathBuf>,
        observer: Arc<dyn StoreObserver>,
    ) -> StoreResult<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).map_err(StoreError::BaseDirCreation)?;
        Ok(Self { base_dir, observer })
    }

    /// The base directory this store was configured with.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Creates a new record: allocates a fresh identity and directory,
    /// copies the attachments in, then commits by writing the metadata
    /// document last.
    ///
    /// The store mirrors `first_name` and `last_name` as given; non-empty
    /// enforcement belongs at the collaborator boundary (see
    /// [`crate::validation::NonEmptyText`]).
    ///
    /// A generic file that cannot be copied is reported to the observer and
    /// skipped; the create still succeeds and the surviving files keep
    /// their 1-based supply indices in their destination names.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if:
    /// - the record directory cannot be created,
    /// - the photo cannot be copied ([`FaultKind::Attachment`](crate::FaultKind)),
    /// - the metadata document cannot be serialised or written.
    ///
    /// On failure after directory creation, nothing is rolled back: the
    /// directory and any already-copied files remain on disk without a
    /// metadata document, and listing ignores them.
    pub fn create(
        &self,
        first_name: &str,
        last_name: &str,
        photo_source: Option<&Path>,
        file_sources: &[PathBuf],
    ) -> StoreResult<Record> {
        let id = Uuid::new_v4().to_string();
        let directory = self.base_dir.join(&id);
        fs::create_dir_all(&directory).map_err(StoreError::RecordDirCreation)?;

        let photo = match photo_source {
            Some(source) => Some(attachments::copy_photo(&directory, source)?),
            None => None,
        };

        let files = attachments::copy_generic_files(&directory, file_sources, self.observer.as_ref());

        let record = Record {
            id,
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            photo,
            files,
            saved_at: record::utc_timestamp(),
            directory: directory.clone(),
        };

        // Commit step: a directory only becomes a listed record once its
        // metadata document exists.
        record::write_document(&directory, &record)?;

        Ok(record)
    }

    /// Lists all records, most recently created first.
    ///
    /// Every call re-scans the base directory; nothing is cached. A
    /// subdirectory whose metadata document is missing, unreadable, or
    /// unparsable — including one that vanished between enumeration and
    /// read — is reported to the observer and skipped. An unreadable base
    /// directory yields an empty list.
    ///
    /// Ordering is lexicographic over the `saved_at` text, descending;
    /// records without a `saved_at` sort last, and ties keep filesystem
    /// enumeration order.
    pub fn list(&self) -> Vec<Record> {
        let mut records = Vec::new();

        let entries = match fs::read_dir(&self.base_dir) {
            Ok(it) => it,
            Err(_) => return records,
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            match record::read_document(&path) {
                Ok(record) => records.push(record),
                Err(e) => self.observer.on_skipped(StoreOp::ReadMetadata, &path, &e),
            }
        }

        // sort_by is stable, so equal timestamps keep enumeration order.
        records.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        records
    }

    /// Reads a single record's metadata document by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MetadataRead` if no such record exists, or
    /// `StoreError::MetadataDeserialization` if its document is corrupt.
    pub fn get(&self, id: &str) -> StoreResult<Record> {
        record::read_document(&self.base_dir.join(id))
    }

    /// Recursively removes the record's directory and everything in it.
    ///
    /// The path is recomputed from the record's id rather than trusted from
    /// its transient `directory` field. Irreversible; no trash semantics.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::RecordDirRemoval` if removal cannot complete,
    /// in which case the directory may be left partially removed.
    pub fn delete(&self, record: &Record) -> StoreResult<()> {
        let path = self.base_dir.join(&record.id);
        fs::remove_dir_all(&path).map_err(|source| StoreError::RecordDirRemoval { path, source })
    }
}
