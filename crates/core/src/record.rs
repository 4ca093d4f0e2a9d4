//! The record type and its metadata document.
//!
//! The metadata document is pretty-printed JSON at
//! `<record-dir>/meta.json`. `serde_json` writes UTF-8 without escaping
//! non-ASCII characters, so names survive literally on disk.
//!
//! Timestamps are persisted as text rather than a parsed date type: listing
//! order is defined lexicographically over the ISO-8601 string, and a
//! document missing the field must still load (it defaults to empty, which
//! sorts last under the descending listing order).

use crate::constants::META_FILENAME;
use crate::error::{StoreError, StoreResult};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// One persisted record: a pair of names plus the filenames of its copied
/// attachments.
///
/// All fields are immutable after creation; no update-in-place operation
/// exists.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// Hyphenated v4 UUID; doubles as the record's directory name.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Filename of the copied photo, relative to the record directory.
    pub photo: Option<String>,
    /// Filenames of the copied generic attachments, in supply order.
    pub files: Vec<String>,
    /// UTC ISO-8601 creation timestamp with trailing `Z`.
    #[serde(default)]
    pub saved_at: String,
    /// Resolved location on disk (`base_dir/id`). Attached to values
    /// returned by the store; never persisted.
    #[serde(skip)]
    pub directory: PathBuf,
}

impl Record {
    /// Absolute path of the photo, if one was supplied at creation.
    pub fn photo_path(&self) -> Option<PathBuf> {
        self.photo.as_ref().map(|name| self.directory.join(name))
    }

    /// Absolute paths of the generic attachments, in supply order.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.files
            .iter()
            .map(|name| self.directory.join(name))
            .collect()
    }
}

/// Current UTC time as ISO-8601 text with microsecond precision and a
/// trailing `Z`, e.g. `2026-08-30T09:41:27.123456Z`.
pub(crate) fn utc_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

/// Writes the metadata document into `directory`.
///
/// This is the commit step of record creation: a directory without a
/// metadata document is never listed, so it runs after all attachment
/// copying has settled.
pub(crate) fn write_document(directory: &Path, record: &Record) -> StoreResult<()> {
    let contents =
        serde_json::to_string_pretty(record).map_err(StoreError::MetadataSerialization)?;
    fs::write(directory.join(META_FILENAME), contents).map_err(StoreError::MetadataWrite)
}

/// Reads and parses the metadata document from `directory`, attaching the
/// directory itself to the returned record.
pub(crate) fn read_document(directory: &Path) -> StoreResult<Record> {
    let contents =
        fs::read_to_string(directory.join(META_FILENAME)).map_err(StoreError::MetadataRead)?;
    let mut record: Record =
        serde_json::from_str(&contents).map_err(StoreError::MetadataDeserialization)?;
    record.directory = directory.to_path_buf();
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_record(directory: PathBuf) -> Record {
        Record {
            id: "0b7a4e54-9c1d-4f08-b2a3-5d64c2f01e77".to_owned(),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            photo: Some("photo.png".to_owned()),
            files: vec!["1_notes.pdf".to_owned(), "2_notes.pdf".to_owned()],
            saved_at: "2026-08-30T09:41:27.123456Z".to_owned(),
            directory,
        }
    }

    #[test]
    fn document_roundtrip_preserves_fields_and_attaches_directory() {
        let temp = TempDir::new().unwrap();
        let record = sample_record(temp.path().to_path_buf());

        write_document(temp.path(), &record).unwrap();
        let loaded = read_document(temp.path()).unwrap();

        assert_eq!(loaded, record);
        assert_eq!(loaded.directory, temp.path());
    }

    #[test]
    fn document_preserves_non_ascii_names_literally() {
        let temp = TempDir::new().unwrap();
        let mut record = sample_record(temp.path().to_path_buf());
        record.first_name = "Gülşen".to_owned();

        write_document(temp.path(), &record).unwrap();

        let raw = fs::read_to_string(temp.path().join(META_FILENAME)).unwrap();
        assert!(raw.contains("Gülşen"), "names must not be escaped: {raw}");
        assert_eq!(read_document(temp.path()).unwrap().first_name, "Gülşen");
    }

    #[test]
    fn document_missing_saved_at_defaults_to_empty() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(META_FILENAME),
            r#"{
  "id": "abc",
  "first_name": "Grace",
  "last_name": "Hopper",
  "photo": null,
  "files": []
}"#,
        )
        .unwrap();

        let record = read_document(temp.path()).unwrap();
        assert_eq!(record.saved_at, "");
    }

    #[test]
    fn unparsable_document_is_a_deserialization_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(META_FILENAME), "not json at all").unwrap();

        let err = read_document(temp.path()).unwrap_err();
        assert!(matches!(err, StoreError::MetadataDeserialization(_)));
    }

    #[test]
    fn utc_timestamp_is_iso_8601_with_trailing_z() {
        let stamp = utc_timestamp();
        assert!(stamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
    }

    #[test]
    fn photo_and_file_paths_resolve_against_directory() {
        let record = sample_record(PathBuf::from("/data/records/0b7a"));
        assert_eq!(
            record.photo_path(),
            Some(PathBuf::from("/data/records/0b7a/photo.png"))
        );
        assert_eq!(
            record.file_paths(),
            vec![
                PathBuf::from("/data/records/0b7a/1_notes.pdf"),
                PathBuf::from("/data/records/0b7a/2_notes.pdf"),
            ]
        );
    }
}
