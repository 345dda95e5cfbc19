//! Delimited-text table files: header row, then one record per line.

use std::fs::{self, OpenOptions};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::StoreError;

/// Reads every record after the header. A missing file is an empty table.
pub(crate) fn read_rows(path: &Path, width: usize) -> Result<Vec<StringRecord>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != width {
            return Err(StoreError::malformed(format!(
                "{}: row {} has {} columns, expected {width}",
                path.display(),
                index + 2,
                record.len()
            )));
        }
        rows.push(record);
    }

    Ok(rows)
}

/// Appends rows, writing `header` first when the file is absent or empty.
pub(crate) fn append_rows<R>(path: &Path, header: &[&str], rows: &[R]) -> Result<(), StoreError>
where
    R: AsRef<[String]>,
{
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let needs_header = fs::metadata(path)
        .map(|metadata| metadata.len() == 0)
        .unwrap_or(true);
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(file);

    if needs_header {
        writer.write_record(header)?;
    }

    for row in rows {
        writer.write_record(row.as_ref())?;
    }

    writer.flush()?;
    Ok(())
}

/// Creates the file with only its header row. Returns `false` when it already had content.
pub(crate) fn ensure_header(path: &Path, header: &[&str]) -> Result<bool, StoreError> {
    let has_content = fs::metadata(path)
        .map(|metadata| metadata.len() > 0)
        .unwrap_or(false);
    if has_content {
        return Ok(false);
    }

    append_rows::<Vec<String>>(path, header, &[])?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{append_rows, ensure_header, read_rows};
    use crate::StoreErrorKind;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let rows = read_rows(&dir.path().join("absent.csv"), 2).expect("read should succeed");
        assert!(rows.is_empty());
    }

    #[test]
    fn append_writes_header_once_and_quotes_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prompts.csv");

        append_rows(
            &path,
            &["Title", "Prompt"],
            &[vec!["poem".to_string(), "Write, then \"rhyme\"".to_string()]],
        )
        .expect("first append");
        append_rows(
            &path,
            &["Title", "Prompt"],
            &[vec!["ad".to_string(), "Sell it".to_string()]],
        )
        .expect("second append");

        let raw = fs::read_to_string(&path).expect("read raw");
        assert_eq!(raw.matches("Title,Prompt").count(), 1);

        let rows = read_rows(&path, 2).expect("read rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "Write, then \"rhyme\"");
        assert_eq!(&rows[1][0], "ad");
    }

    #[test]
    fn wrong_column_count_is_malformed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("api_keys.csv");
        fs::write(&path, "Title,API Key\r\nwork,sk-1,extra\r\n").expect("seed file");

        let error = read_rows(&path, 2).expect_err("extra column must fail");
        assert_eq!(error.kind, StoreErrorKind::Malformed);
        assert!(error.message.contains("row 2"));
    }

    #[test]
    fn ensure_header_only_writes_into_empty_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("api_keys.csv");

        assert!(ensure_header(&path, &["Title", "API Key"]).expect("create"));
        assert!(!ensure_header(&path, &["Title", "API Key"]).expect("exists"));
        assert_eq!(
            fs::read_to_string(&path).expect("read raw"),
            "Title,API Key\r\n"
        );
    }
}
