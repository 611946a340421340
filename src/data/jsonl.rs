//! JSON-lines fill and order files
//!
//! One JSON object per line. Blank lines and lines starting with `#` are
//! skipped. Line numbers in errors are one-based.

use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::execution::{OrderRecord, OrderRequest};
use crate::ledger::{Fill, FillRecord, InvalidFillError};
use crate::risk::InvalidOrderError;

/// Failure reading or writing a JSON-lines file
#[derive(Debug, Error)]
pub enum JsonlError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: malformed record: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode record: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("line {line}: {source}")]
    InvalidFill {
        line: usize,
        #[source]
        source: InvalidFillError,
    },
    #[error("line {line}: {source}")]
    InvalidOrder {
        line: usize,
        #[source]
        source: InvalidOrderError,
    },
}

fn io_error(path: &Path, source: std::io::Error) -> JsonlError {
    JsonlError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn read_records<R: DeserializeOwned>(path: &Path) -> Result<Vec<(usize, R)>, JsonlError> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let mut records = vec![];

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| io_error(path, e))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let record = serde_json::from_str(trimmed).map_err(|source| JsonlError::Parse {
            line: index + 1,
            source,
        })?;
        records.push((index + 1, record));
    }

    Ok(records)
}

/// Read and validate a fill file
pub fn read_fills(path: impl AsRef<Path>) -> Result<Vec<Fill>, JsonlError> {
    read_records::<FillRecord>(path.as_ref())?
        .into_iter()
        .map(|(line, record)| {
            Fill::try_from(record).map_err(|source| JsonlError::InvalidFill { line, source })
        })
        .collect()
}

/// Read and validate an order file
pub fn read_orders(path: impl AsRef<Path>) -> Result<Vec<OrderRequest>, JsonlError> {
    read_records::<OrderRecord>(path.as_ref())?
        .into_iter()
        .map(|(line, record)| {
            OrderRequest::try_from(record).map_err(|source| JsonlError::InvalidOrder { line, source })
        })
        .collect()
}

/// Write fills one per line, replacing the file
pub fn write_fills(path: impl AsRef<Path>, fills: &[Fill]) -> Result<(), JsonlError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut writer = BufWriter::new(file);

    for fill in fills {
        let line = serde_json::to_string(fill).map_err(JsonlError::Encode)?;
        writeln!(writer, "{}", line).map_err(|e| io_error(path, e))?;
    }
    writer.flush().map_err(|e| io_error(path, e))?;

    tracing::debug!(path = %path.display(), count = fills.len(), "Fills written");
    Ok(())
}
