use super::backend::StorageBackend;
use crate::config::RESERVED_STORAGE_KEY;
use crate::error::{HandbookError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-per-key backend rooted at a data directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the file backing `key`. Keys that would escape the data
    /// directory or land on the config file are refused.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key.starts_with('.')
            || key.contains(['/', '\\'])
            || key.eq_ignore_ascii_case(RESERVED_STORAGE_KEY)
        {
            return Err(HandbookError::Store(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(HandbookError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path).map_err(HandbookError::Io)?;
        Ok(Some(raw))
    }

    fn write(&self, key: &str, raw: &str) -> Result<()> {
        let target = self.slot_path(key)?;
        self.ensure_dir(&self.root)?;

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, raw).map_err(HandbookError::Io)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(HandbookError::Io(e));
        }

        Ok(())
    }
}
