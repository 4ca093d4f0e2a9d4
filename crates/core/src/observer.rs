//! Non-fatal issue reporting.
//!
//! Some store failures are deliberately not fatal: a single generic file
//! that cannot be copied during `create`, or a single metadata document
//! that cannot be read or parsed during `list`. The store records those
//! through a pluggable observer and carries on, so the collaborator decides
//! whether to surface, log, or ignore them.

use std::path::Path;

/// Operation during which a non-fatal issue occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreOp {
    /// A generic attachment could not be copied into a record directory.
    CopyAttachment,
    /// A record directory's metadata document could not be read or parsed.
    ReadMetadata,
}

/// Observer invoked for every skipped file or document.
///
/// Implementations must not panic; the store calls them from the middle of
/// loops that are expected to continue.
pub trait StoreObserver: Send + Sync {
    /// Called with the operation, the path that was skipped, and the cause.
    fn on_skipped(&self, op: StoreOp, path: &Path, cause: &dyn std::error::Error);
}

/// Default observer that reports skipped items through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl StoreObserver for TracingObserver {
    fn on_skipped(&self, op: StoreOp, path: &Path, cause: &dyn std::error::Error) {
        match op {
            StoreOp::CopyAttachment => {
                tracing::warn!("failed to copy attachment {}: {}", path.display(), cause);
            }
            StoreOp::ReadMetadata => {
                tracing::warn!("failed to read metadata in {}: {}", path.display(), cause);
            }
        }
    }
}
