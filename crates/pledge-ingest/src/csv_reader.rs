//! Raw CSV loading.
//!
//! Rows are returned exactly as exported: no header detection, no trimming,
//! and ragged rows are kept so the patron parser can decide what to skip.
//! Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.

use std::borrow::Cow;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Reads every row of a CSV file, header included.
pub fn read_csv_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    collect_rows(reader, path)
}

/// Reads rows from any reader. `path` is only used in error messages.
pub fn read_csv_rows_from<R: Read>(input: R, path: &Path) -> Result<Vec<Vec<String>>> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    collect_rows(reader, path)
}

fn collect_rows<R: Read>(mut reader: csv::Reader<R>, path: &Path) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let mut lossy_rows = 0usize;
    for (idx, record) in reader.byte_records().enumerate() {
        let record = record.map_err(|source| IngestError::Record {
            path: path.to_path_buf(),
            record: idx + 1,
            source,
        })?;
        let mut lossy = false;
        let row: Vec<String> = record
            .iter()
            .map(|field| match String::from_utf8_lossy(field) {
                Cow::Borrowed(text) => text.to_string(),
                Cow::Owned(text) => {
                    lossy = true;
                    text
                }
            })
            .collect();
        if lossy {
            lossy_rows += 1;
        }
        rows.push(row);
    }
    if lossy_rows > 0 {
        warn!(
            path = %path.display(),
            lossy_rows,
            "replaced invalid UTF-8 in csv rows"
        );
    }
    debug!(path = %path.display(), row_count = rows.len(), "read csv rows");
    Ok(rows)
}

/// Fails unless there is a header plus at least one data row.
pub fn ensure_data_rows(rows: &[Vec<String>], path: &Path) -> Result<()> {
    if rows.len() < 2 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
