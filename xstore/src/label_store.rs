//! Label/value store trait with in-memory and CSV-backed implementations.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use xcommon::BoxFuture;

use crate::csv_file::{append_rows, ensure_header, read_rows};
use crate::error::StoreError;
use crate::table::{LabelEntry, LabelTable};

pub const CREDENTIALS_HEADER: [&str; 2] = ["Title", "API Key"];
pub const TEMPLATES_HEADER: [&str; 2] = ["Title", "Prompt"];

/// Append-only label table. Reads always reflect every completed `put`.
pub trait LabelStore: Send + Sync {
    fn all<'a>(&'a self) -> BoxFuture<'a, Result<LabelTable, StoreError>>;

    fn put<'a>(&'a self, label: &'a str, value: &'a str) -> BoxFuture<'a, Result<(), StoreError>>;

    fn get<'a>(&'a self, label: &'a str) -> BoxFuture<'a, Result<Option<String>, StoreError>> {
        Box::pin(async move { Ok(self.all().await?.lookup(label).map(str::to_string)) })
    }
}

fn validate_label(label: &str) -> Result<(), StoreError> {
    if label.trim().is_empty() {
        return Err(StoreError::invalid_request("label must not be empty"));
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct InMemoryLabelStore {
    table: Mutex<LabelTable>,
}

impl InMemoryLabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<L, V>(pairs: impl IntoIterator<Item = (L, V)>) -> Self
    where
        L: Into<String>,
        V: Into<String>,
    {
        Self {
            table: Mutex::new(LabelTable::from_pairs(pairs)),
        }
    }
}

impl LabelStore for InMemoryLabelStore {
    fn all<'a>(&'a self) -> BoxFuture<'a, Result<LabelTable, StoreError>> {
        Box::pin(async move {
            let table = self
                .table
                .lock()
                .map_err(|_| StoreError::other("label store lock poisoned"))?;
            Ok(table.clone())
        })
    }

    fn put<'a>(&'a self, label: &'a str, value: &'a str) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            validate_label(label)?;
            let mut table = self
                .table
                .lock()
                .map_err(|_| StoreError::other("label store lock poisoned"))?;
            table.push(LabelEntry::new(label, value));
            Ok(())
        })
    }
}

/// Two-column CSV table: header row, then `label,value` rows in append order.
#[derive(Debug)]
pub struct CsvLabelStore {
    path: PathBuf,
    header: [&'static str; 2],
    lock: Mutex<()>,
}

impl CsvLabelStore {
    pub fn new(path: impl AsRef<Path>, header: [&'static str; 2]) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            header,
            lock: Mutex::new(()),
        }
    }

    /// Credential table with header `Title, API Key`.
    pub fn credentials(path: impl AsRef<Path>) -> Self {
        Self::new(path, CREDENTIALS_HEADER)
    }

    /// Prompt template table with header `Title, Prompt`.
    pub fn templates(path: impl AsRef<Path>) -> Self {
        Self::new(path, TEMPLATES_HEADER)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the header row when the file is absent or empty. Returns whether it wrote.
    pub fn bootstrap(&self) -> Result<bool, StoreError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StoreError::other("csv label store lock poisoned"))?;
        ensure_header(&self.path, &self.header)
    }

    fn load_table(&self) -> Result<LabelTable, StoreError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StoreError::other("csv label store lock poisoned"))?;

        let mut table = LabelTable::new();
        for record in read_rows(&self.path, self.header.len())? {
            table.push(LabelEntry::new(&record[0], &record[1]));
        }
        Ok(table)
    }

    fn append_entry(&self, label: &str, value: &str) -> Result<(), StoreError> {
        validate_label(label)?;
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StoreError::other("csv label store lock poisoned"))?;
        append_rows(
            &self.path,
            &self.header,
            &[vec![label.to_string(), value.to_string()]],
        )
    }
}

impl LabelStore for CsvLabelStore {
    fn all<'a>(&'a self) -> BoxFuture<'a, Result<LabelTable, StoreError>> {
        Box::pin(async move { self.load_table() })
    }

    fn put<'a>(&'a self, label: &'a str, value: &'a str) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(async move { self.append_entry(label, value) })
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryLabelStore, LabelStore};
    use crate::StoreErrorKind;

    #[tokio::test]
    async fn in_memory_get_uses_last_entry() {
        let store = InMemoryLabelStore::with_entries([("work", "sk-1")]);
        store.put("work", "sk-2").await.expect("put should succeed");

        let value = store.get("work").await.expect("get should succeed");
        assert_eq!(value.as_deref(), Some("sk-2"));
        assert_eq!(store.get("home").await.expect("get should succeed"), None);
    }

    #[tokio::test]
    async fn blank_label_is_rejected() {
        let store = InMemoryLabelStore::new();
        let error = store.put("  ", "sk-1").await.expect_err("blank label");
        assert_eq!(error.kind, StoreErrorKind::InvalidRequest);
        assert!(store.all().await.expect("all").is_empty());
    }
}
