//! Constants used throughout the dossier core crate.
//!
//! This module contains all path and filename constants to ensure
//! consistency across the codebase and make maintenance easier.

/// Filename of the metadata document inside each record directory.
pub const META_FILENAME: &str = "meta.json";

/// File stem for the copied photo attachment; the source extension is
/// appended at copy time.
pub const PHOTO_FILE_STEM: &str = "photo";

/// Default base directory for record storage when no explicit directory is
/// configured by the calling surface.
pub const DEFAULT_DATA_DIR: &str = "records";
