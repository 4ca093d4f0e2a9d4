//! Store error types.
//!
//! Fatal faults abort the current operation and carry their underlying
//! cause. Non-fatal issues (a single generic-file copy failure, a single
//! unreadable metadata document during a scan) never surface here — they go
//! through the [`StoreObserver`](crate::observer::StoreObserver) instead.

use std::path::PathBuf;

/// Broad classification of a fatal store fault.
///
/// The fine-grained [`StoreError`] variants collapse into two families:
/// attachment faults (the supplied photo could not be copied) and storage
/// faults (everything touching directories or the metadata document).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaultKind {
    /// Directory creation/removal or metadata document read/write failed.
    Storage,
    /// The photo attachment could not be copied into the record directory.
    Attachment,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to create base directory: {0}")]
    BaseDirCreation(std::io::Error),
    #[error("failed to create record directory: {0}")]
    RecordDirCreation(std::io::Error),
    #[error("failed to copy photo {path}: {source}", path = path.display())]
    PhotoCopy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write record metadata: {0}")]
    MetadataWrite(std::io::Error),
    #[error("failed to read record metadata: {0}")]
    MetadataRead(std::io::Error),
    #[error("failed to serialize record metadata: {0}")]
    MetadataSerialization(serde_json::Error),
    #[error("failed to deserialize record metadata: {0}")]
    MetadataDeserialization(serde_json::Error),
    #[error("failed to remove record directory {path}: {source}", path = path.display())]
    RecordDirRemoval {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Classifies this fault for callers that only care about the broad
    /// family rather than the exact failing operation.
    pub fn fault_kind(&self) -> FaultKind {
        match self {
            StoreError::PhotoCopy { .. } => FaultKind::Attachment,
            _ => FaultKind::Storage,
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn photo_copy_classifies_as_attachment_fault() {
        let err = StoreError::PhotoCopy {
            path: PathBuf::from("portrait.png"),
            source: Error::new(ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.fault_kind(), FaultKind::Attachment);
    }

    #[test]
    fn directory_and_metadata_errors_classify_as_storage_faults() {
        let errors = [
            StoreError::BaseDirCreation(Error::new(ErrorKind::PermissionDenied, "denied")),
            StoreError::RecordDirCreation(Error::new(ErrorKind::PermissionDenied, "denied")),
            StoreError::MetadataWrite(Error::new(ErrorKind::Other, "full")),
            StoreError::MetadataRead(Error::new(ErrorKind::NotFound, "gone")),
            StoreError::RecordDirRemoval {
                path: PathBuf::from("records/x"),
                source: Error::new(ErrorKind::Other, "locked"),
            },
        ];
        for err in errors {
            assert_eq!(err.fault_kind(), FaultKind::Storage);
        }
    }
}
