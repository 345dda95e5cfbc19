//! Response archive: one timestamped row per completion output.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Local, TimeZone};
use xcommon::BoxFuture;

use crate::csv_file::{append_rows, ensure_header, read_rows};
use crate::error::StoreError;

pub const ARCHIVE_HEADER: [&str; 3] = ["Date Generated", "User Message", "Response"];
pub const ARCHIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRecord {
    pub timestamp: String,
    pub outbound_message: String,
    pub response_text: String,
}

impl ArchiveRecord {
    pub fn new(
        timestamp: impl Into<String>,
        outbound_message: impl Into<String>,
        response_text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            outbound_message: outbound_message.into(),
            response_text: response_text.into(),
        }
    }

    fn into_row(self) -> Vec<String> {
        vec![self.timestamp, self.outbound_message, self.response_text]
    }
}

/// Builds one record per output, all sharing the timestamp taken from `at`.
pub fn archive_records_at<Tz>(
    at: &DateTime<Tz>,
    outbound_message: &str,
    outputs: &[String],
) -> Vec<ArchiveRecord>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let timestamp = at.format(ARCHIVE_TIMESTAMP_FORMAT).to_string();
    outputs
        .iter()
        .map(|output| ArchiveRecord::new(timestamp.clone(), outbound_message, output.clone()))
        .collect()
}

pub trait ResponseArchive: Send + Sync {
    /// Appends records in order. Returns the number of rows written.
    fn append<'a>(
        &'a self,
        records: Vec<ArchiveRecord>,
    ) -> BoxFuture<'a, Result<usize, StoreError>>;

    fn archive<'a>(
        &'a self,
        outbound_message: &'a str,
        outputs: &'a [String],
    ) -> BoxFuture<'a, Result<usize, StoreError>> {
        let records = archive_records_at(&Local::now(), outbound_message, outputs);
        self.append(records)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryResponseArchive {
    records: Mutex<Vec<ArchiveRecord>>,
}

impl InMemoryResponseArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Result<Vec<ArchiveRecord>, StoreError> {
        let records = self
            .records
            .lock()
            .map_err(|_| StoreError::other("response archive lock poisoned"))?;
        Ok(records.clone())
    }
}

impl ResponseArchive for InMemoryResponseArchive {
    fn append<'a>(
        &'a self,
        records: Vec<ArchiveRecord>,
    ) -> BoxFuture<'a, Result<usize, StoreError>> {
        Box::pin(async move {
            let mut stored = self
                .records
                .lock()
                .map_err(|_| StoreError::other("response archive lock poisoned"))?;
            let written = records.len();
            stored.extend(records);
            Ok(written)
        })
    }
}

#[derive(Debug)]
pub struct CsvResponseArchive {
    path: PathBuf,
    lock: Mutex<()>,
}

impl CsvResponseArchive {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bootstrap(&self) -> Result<bool, StoreError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StoreError::other("csv archive lock poisoned"))?;
        ensure_header(&self.path, &ARCHIVE_HEADER)
    }

    pub fn read_all(&self) -> Result<Vec<ArchiveRecord>, StoreError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StoreError::other("csv archive lock poisoned"))?;
        Ok(read_rows(&self.path, ARCHIVE_HEADER.len())?
            .into_iter()
            .map(|record| ArchiveRecord::new(&record[0], &record[1], &record[2]))
            .collect())
    }

    fn write_records(&self, records: Vec<ArchiveRecord>) -> Result<usize, StoreError> {
        if records.is_empty() {
            return Ok(0);
        }

        let _guard = self
            .lock
            .lock()
            .map_err(|_| StoreError::other("csv archive lock poisoned"))?;
        let written = records.len();
        let rows = records
            .into_iter()
            .map(ArchiveRecord::into_row)
            .collect::<Vec<_>>();
        append_rows(&self.path, &ARCHIVE_HEADER, &rows)?;
        Ok(written)
    }
}

impl ResponseArchive for CsvResponseArchive {
    fn append<'a>(
        &'a self,
        records: Vec<ArchiveRecord>,
    ) -> BoxFuture<'a, Result<usize, StoreError>> {
        Box::pin(async move { self.write_records(records) })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{ArchiveRecord, archive_records_at};

    #[test]
    fn records_share_one_formatted_timestamp() {
        let at = Utc
            .with_ymd_and_hms(2023, 4, 5, 6, 7, 8)
            .single()
            .expect("valid time");
        let outputs = vec!["one".to_string(), "two".to_string()];

        let records = archive_records_at(&at, "$style, hi", &outputs);
        assert_eq!(
            records,
            vec![
                ArchiveRecord::new("2023-04-05 06:07:08", "$style, hi", "one"),
                ArchiveRecord::new("2023-04-05 06:07:08", "$style, hi", "two"),
            ]
        );
    }

    #[test]
    fn no_outputs_means_no_records() {
        let at = Utc
            .with_ymd_and_hms(2023, 4, 5, 6, 7, 8)
            .single()
            .expect("valid time");
        assert!(archive_records_at(&at, "hi", &[]).is_empty());
    }
}
