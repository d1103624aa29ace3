use super::RecordSource;
use crate::error::{Result, StatdexError};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads the record collection from a JSON file holding a top-level array.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileSource {
    fn fetch(&self) -> Result<Vec<Value>> {
        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Value>(&content)? {
            Value::Array(items) => Ok(items),
            _ => Err(StatdexError::Source(format!(
                "{} does not contain a JSON array",
                self.path.display()
            ))),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
