//! Readers for the FAA releasable aircraft database.
//!
//! The [acftref] module reads the aircraft reference file (`ACFTREF.txt`),
//! the [master] module reads the registration file (`MASTER.txt`). Both are
//! fixed-width text with one record per line. A line that is too short to
//! hold a record is reported in [DecodedFile::records] instead of failing
//! the whole file.

use std::collections::TryReserveError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod acftref;
mod consts;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod master;

pub use consts::{ACFTREF_FILE_NAME, MASTER_FILE_NAME};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("line too short: {len} bytes, expected at least {min}")]
    LineTooShort { len: usize, min: usize },
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open file '{}'", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Read(#[from] io::Error),
    #[error("cannot allocate record")]
    Allocation(#[from] TryReserveError),
}

#[derive(Debug)]
pub struct DecodedFile<T> {
    /// One entry per line, in file order.
    pub records: Vec<Result<T, DecodeError>>,
}

impl<T> DecodedFile<T> {
    /// Number of lines that did not decode into a record.
    pub fn skipped(&self) -> usize {
        self.records.iter().filter(|r| r.is_err()).count()
    }

    /// Drops the malformed lines and returns the remaining records.
    pub fn into_records(self) -> Vec<T> {
        self.records.into_iter().filter_map(Result::ok).collect()
    }
}

type DecodeLine<T> = fn(&[u8]) -> Result<T, DecodeError>;

fn read_file<R: BufRead, T>(
    mut reader: R,
    decode_line: DecodeLine<T>,
) -> Result<DecodedFile<T>, LoadError> {
    let mut records = Vec::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        records.try_reserve(1)?;
        records.push(decode_line(&line));
    }

    Ok(DecodedFile { records })
}

fn open_file<T>(path: &Path, decode_line: DecodeLine<T>) -> Result<DecodedFile<T>, LoadError> {
    let unavailable = |source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(unavailable)?;
    if file.metadata().map_err(unavailable)?.is_dir() {
        return Err(unavailable(io::ErrorKind::IsADirectory.into()));
    }
    read_file(BufReader::new(file), decode_line)
}

/// Checks the length of a raw line, terminator included, and strips the
/// terminator.
fn checked_line(line: &[u8], min: usize) -> Result<&[u8], DecodeError> {
    if line.len() < min {
        return Err(DecodeError::LineTooShort {
            len: line.len(),
            min,
        });
    }
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    Ok(line.strip_suffix(b"\r").unwrap_or(line))
}
