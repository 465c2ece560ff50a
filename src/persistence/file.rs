//! Directory-backed store: one file per key.
//!
//! Writes go to a temporary file which is fsynced and then renamed over
//! the target, so a crash leaves either the old value or the new one.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::store::KeyValueStore;
use crate::core::StoreError;

const VALUE_EXT: &str = "json";
const TEMP_EXT: &str = "json.tmp";

/// Key-value store persisting each key as `<dir>/<key>.json`.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            key: String::new(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Root directory of the store.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path holding the value for `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{VALUE_EXT}")))
    }

    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{TEMP_EXT}"))
    }
}

/// Keys become file names, so only a safe character set is allowed.
fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let temp_path = self.temp_path_for(key);
        let io_err = |source| StoreError::Io {
            key: key.to_string(),
            source,
        };

        let mut file = fs::File::create(&temp_path).map_err(io_err)?;
        file.write_all(&value).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
        drop(file);

        fs::rename(&temp_path, &path).map_err(io_err)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}
