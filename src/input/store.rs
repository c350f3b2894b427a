use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::records::Records;
use crate::model::results::TeamResult;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("corrupt record file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Durable home of teams, sections and the latest leaderboard snapshot.
pub trait RecordStore {
    fn load(&self) -> Result<Records, StoreError>;
    fn save(&mut self, records: &Records) -> Result<(), StoreError>;
    fn load_leaderboard(&self) -> Result<Vec<TeamResult>, StoreError>;
    fn save_leaderboard(&mut self, results: &[TeamResult]) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct DataFile {
    #[serde(flatten)]
    records: Records,
    #[serde(default)]
    leaderboard: Vec<TeamResult>,
}

/// Single JSON document; writes go through a temp file and a rename.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<DataFile, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(DataFile::default()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if raw.trim().is_empty() {
            return Ok(DataFile::default());
        }
        serde_json::from_str(&raw).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, data: &DataFile) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(data).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<Records, StoreError> {
        Ok(self.read()?.records)
    }

    fn save(&mut self, records: &Records) -> Result<(), StoreError> {
        let mut data = self.read()?;
        data.records = records.clone();
        self.write(&data)
    }

    fn load_leaderboard(&self) -> Result<Vec<TeamResult>, StoreError> {
        Ok(self.read()?.leaderboard)
    }

    fn save_leaderboard(&mut self, results: &[TeamResult]) -> Result<(), StoreError> {
        let mut data = self.read()?;
        data.leaderboard = results.to_vec();
        self.write(&data)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Records,
    leaderboard: Vec<TeamResult>,
}

impl MemoryStore {
    pub fn with_records(records: Records) -> Self {
        Self {
            records,
            leaderboard: Vec::new(),
        }
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<Records, StoreError> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &Records) -> Result<(), StoreError> {
        self.records = records.clone();
        Ok(())
    }

    fn load_leaderboard(&self) -> Result<Vec<TeamResult>, StoreError> {
        Ok(self.leaderboard.clone())
    }

    fn save_leaderboard(&mut self, results: &[TeamResult]) -> Result<(), StoreError> {
        self.leaderboard = results.to_vec();
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/store.rs"]
mod tests;
