use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Failed to read state file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse state file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write state file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File-backed string map.
///
/// Every `set` rewrites the whole file through a temporary sibling and a
/// rename, so a crash mid-write leaves the previous contents intact.
pub struct StateStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl StateStore {
    /// Default location: `{data_dir}/hackerstories/state.toml`.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("hackerstories").join("state.toml")
    }

    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let path = path.into();
        let values = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| PersistError::Read {
                path: path.clone(),
                source,
            })?;
            toml::from_str(&content).map_err(|source| PersistError::Parse {
                path: path.clone(),
                source,
            })?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let mut values = self.values.lock();
        values.insert(key.to_string(), value.to_string());
        let content = toml::to_string(&*values)?;
        self.write(&content)
    }

    fn write(&self, content: &str) -> Result<(), PersistError> {
        let write_err = |source: std::io::Error| PersistError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }
        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, content).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::open(dir.path().join("state.toml")).unwrap();
        assert_eq!(store.get("search"), None);
    }

    #[test]
    fn set_then_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("state.toml");
        let store = StateStore::open(&path).unwrap();
        store.set("search", "rust lang").unwrap();

        let reopened = StateStore::open(&path).unwrap();
        assert_eq!(reopened.get("search").as_deref(), Some("rust lang"));
    }

    #[test]
    fn garbage_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.toml");
        fs::write(&path, "not = [valid").unwrap();
        assert!(matches!(
            StateStore::open(&path),
            Err(PersistError::Parse { .. })
        ));
    }
}
