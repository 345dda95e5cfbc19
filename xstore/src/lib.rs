//! Durable label tables (credentials, prompt templates) and the response archive.
//!
//! ```rust
//! use xstore::{InMemoryLabelStore, LabelStore};
//!
//! let store = InMemoryLabelStore::with_entries([("haiku", "You write haiku.")]);
//! let _pending = store.get("haiku");
//! ```

mod archive;
mod csv_file;
mod error;
mod label_store;
mod table;

pub use archive::{
    ARCHIVE_HEADER, ARCHIVE_TIMESTAMP_FORMAT, ArchiveRecord, CsvResponseArchive,
    InMemoryResponseArchive, ResponseArchive, archive_records_at,
};
pub use error::{StoreError, StoreErrorKind};
pub use label_store::{
    CREDENTIALS_HEADER, CsvLabelStore, InMemoryLabelStore, LabelStore, TEMPLATES_HEADER,
};
pub use table::{LabelEntry, LabelTable};
