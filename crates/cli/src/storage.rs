use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use liftplan_domain::{ProgressLog, ProgressRepository, StorageError};
use serde::de::DeserializeOwned;

/// Progress store backed by a single JSON file.
///
/// A missing file reads as an empty log and is created on the first write.
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProgressRepository for JsonFile {
    fn read_progress(&self) -> Result<ProgressLog, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|err| StorageError::InvalidData(format!("{}: {err}", self.path.display()))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(ProgressLog::default()),
            Err(err) => Err(StorageError::Other(err.into())),
        }
    }

    fn write_progress(&self, progress: &ProgressLog) -> Result<(), StorageError> {
        let content =
            serde_json::to_string_pretty(progress).map_err(|err| StorageError::Other(err.into()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| StorageError::Other(err.into()))?;
        }
        fs::write(&self.path, content).map_err(|err| StorageError::Other(err.into()))
    }
}

/// Reads a JSON file, falling back to the default value when no path is given.
pub fn read_json_or_default<T: DeserializeOwned + Default>(path: Option<&Path>) -> anyhow::Result<T> {
    let Some(path) = path else {
        return Ok(T::default());
    };
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
