//! Attachment copying and filename collision avoidance.
//!
//! Two kinds of attachment exist. The photo is singular and its destination
//! name is fixed (`photo` plus the source extension); a failed photo copy is
//! fatal to the whole create. Generic files are index-prefixed with their
//! 1-based supply position, which keeps destinations distinct even when
//! sanitisation collapses two basenames to the same string; a failed generic
//! copy is reported to the observer and skipped.

use crate::constants::PHOTO_FILE_STEM;
use crate::error::{StoreError, StoreResult};
use crate::observer::{StoreObserver, StoreOp};
use std::fs;
use std::path::{Path, PathBuf};

/// Reduces a basename to characters safe for the record directory:
/// alphanumerics, `.`, `_`, `-`, and space, with surrounding whitespace
/// trimmed.
pub(crate) fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | '-' | ' '))
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Destination name for a photo: `photo` plus the source extension with its
/// leading dot, case preserved. A source without an extension yields a bare
/// `photo`.
pub(crate) fn photo_destination_name(source: &Path) -> String {
    match source.extension() {
        Some(ext) => format!("{}.{}", PHOTO_FILE_STEM, ext.to_string_lossy()),
        None => PHOTO_FILE_STEM.to_owned(),
    }
}

/// Copies the photo into `directory`, returning the destination filename.
pub(crate) fn copy_photo(directory: &Path, source: &Path) -> StoreResult<String> {
    let dest_name = photo_destination_name(source);
    fs::copy(source, directory.join(&dest_name)).map_err(|e| StoreError::PhotoCopy {
        path: source.to_path_buf(),
        source: e,
    })?;
    Ok(dest_name)
}

/// Copies each generic file into `directory` under
/// `{1-based-index}_{sanitized-basename}`.
///
/// A file that cannot be copied is reported to `observer` and skipped; the
/// remaining files keep their original supply indices, so the returned list
/// may have gaps in its numbering.
pub(crate) fn copy_generic_files(
    directory: &Path,
    sources: &[PathBuf],
    observer: &dyn StoreObserver,
) -> Vec<String> {
    let mut copied = Vec::new();

    for (index, source) in sources.iter().enumerate() {
        let basename = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dest_name = format!("{}_{}", index + 1, sanitize_filename(&basename));

        match fs::copy(source, directory.join(&dest_name)) {
            Ok(_) => copied.push(dest_name),
            Err(e) => observer.on_skipped(StoreOp::CopyAttachment, source, &e),
        }
    }

    copied
}
