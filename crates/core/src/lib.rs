//! # Dossier Core
//!
//! Core record store for the dossier system.
//!
//! Each record owns one directory under a configured base directory. The
//! directory holds a structured metadata document (`meta.json`) plus any
//! attachment files copied in at creation time: one designated photo and
//! zero or more generic files.
//!
//! ## Storage Layout
//!
//! ```text
//! <base_dir>/
//!   <record-id>/              # hyphenated v4 UUID
//!     meta.json               # id, names, photo, files, saved_at
//!     photo.<ext>             # present iff a photo was supplied
//!     1_<name>, 2_<name>, …   # generic attachments, index-prefixed
//! ```
//!
//! ## Pure Data Operations
//!
//! This crate contains **only** data operations — no CLI, network, or
//! environment-variable concerns. The base directory is an explicit input;
//! resolving it (flags, environment) belongs to the calling surface, such as
//! `dossier-cli`.
//!
//! Operations are synchronous and run to completion on the caller's thread.
//! The store holds no session state beyond the base directory it was
//! configured with, and performs no internal locking: it assumes a single
//! process writes to the base directory. A directory vanishing between
//! enumeration and metadata read during a scan is tolerated as a skip.

mod attachments;
pub mod constants;
pub mod error;
pub mod observer;
pub mod record;
pub mod store;
pub mod validation;

pub use error::{FaultKind, StoreError, StoreResult};
pub use observer::{StoreObserver, StoreOp, TracingObserver};
pub use record::Record;
pub use store::RecordStore;
pub use validation::{NonEmptyText, TextError};
