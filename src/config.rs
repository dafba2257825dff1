use crate::faa::{ACFTREF_FILE_NAME, MASTER_FILE_NAME};
use std::path::{Path, PathBuf};

/// Locations of the database files.
///
/// File names are resolved relative to `data_dir` unless they are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub types_file: PathBuf,
    pub registrations_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            types_file: PathBuf::from(ACFTREF_FILE_NAME),
            registrations_file: PathBuf::from(MASTER_FILE_NAME),
        }
    }
}

impl Config {
    /// Default file names inside `data_dir`.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_types_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.types_file = path.into();
        self
    }

    pub fn with_registrations_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.registrations_file = path.into();
        self
    }

    pub fn types_path(&self) -> PathBuf {
        self.data_dir.join(&self.types_file)
    }

    pub fn registrations_path(&self) -> PathBuf {
        self.data_dir.join(&self.registrations_file)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
