use std::path::PathBuf;

use anyhow::{Context, Result};

use super::Storage;

/// Application name used for the default storage directory path
const APP_NAME: &str = "tenflow";

/// File-backed storage: each key becomes `<dir>/<key>.json`.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    pub fn new(dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create storage directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// Open storage in the platform cache directory (`~/.cache/tenflow`
    /// on Linux).
    pub fn open_default() -> Result<Self> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Self::new(cache_dir.join(APP_NAME))
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read storage item: {}", key))?;
        Ok(Some(contents))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.item_path(key);
        std::fs::write(&path, value)
            .with_context(|| format!("Failed to write storage item: {}", key))
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let path = self.item_path(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove storage item: {}", key))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        assert_eq!(storage.get_item("cache").unwrap(), None);
        storage.set_item("cache", "{\"a\":1}").unwrap();
        assert_eq!(storage.get_item("cache").unwrap().as_deref(), Some("{\"a\":1}"));

        storage.remove_item("cache").unwrap();
        assert_eq!(storage.get_item("cache").unwrap(), None);
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
            storage.set_item("cache", "persisted").unwrap();
        }
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        assert_eq!(storage.get_item("cache").unwrap().as_deref(), Some("persisted"));
    }
}
