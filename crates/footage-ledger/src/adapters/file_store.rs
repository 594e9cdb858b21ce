//! # File-Backed Store Adapter
//!
//! Single-file `LedgerStore` for development and light production.
//! Heavier hosts substitute their own adapter behind the port.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::errors::StoreError;
use crate::ports::outbound::LedgerStore;

/// File-backed ledger store.
///
/// Loads the whole key space eagerly on open and rewrites the file on
/// every put, atomically via a temp file renamed into place.
pub struct FileLedgerStore {
    data: HashMap<String, Vec<u8>>,
    path: PathBuf,
}

impl FileLedgerStore {
    /// Open a store at the given path, loading any existing data.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let data = Self::load_from_file(&path).unwrap_or_default();

        if data.is_empty() {
            tracing::info!("[ledger] no existing store data at {}", path.display());
        } else {
            tracing::info!(
                "[ledger] loaded {} keys from {}",
                data.len(),
                path.display()
            );
        }

        Self { data, path }
    }

    // File layout: [key_len:u32][key][value_len:u32][value]...
    fn load_from_file(path: &Path) -> Option<HashMap<String, Vec<u8>>> {
        let bytes = std::fs::read(path).ok()?;

        let mut data = HashMap::new();
        let mut cursor = 0;

        while cursor + 4 <= bytes.len() {
            let key_len = u32::from_le_bytes(bytes[cursor..cursor + 4].try_into().ok()?) as usize;
            cursor += 4;

            if cursor + key_len > bytes.len() {
                break;
            }
            let key = String::from_utf8(bytes[cursor..cursor + key_len].to_vec()).ok()?;
            cursor += key_len;

            if cursor + 4 > bytes.len() {
                break;
            }
            let value_len = u32::from_le_bytes(bytes[cursor..cursor + 4].try_into().ok()?) as usize;
            cursor += 4;

            if cursor + value_len > bytes.len() {
                break;
            }
            let value = bytes[cursor..cursor + value_len].to_vec();
            cursor += value_len;

            data.insert(key, value);
        }

        Some(data)
    }

    fn save_to_file(&self) -> Result<(), StoreError> {
        use std::io::Write;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                message: e.to_string(),
            })?;
        }

        let mut bytes = Vec::new();
        for (key, value) in &self.data {
            bytes.extend_from_slice(&(key.len() as u32).to_le_bytes());
            bytes.extend_from_slice(key.as_bytes());
            bytes.extend_from_slice(&(value.len() as u32).to_le_bytes());
            bytes.extend_from_slice(value);
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path).map_err(|e| StoreError::Io {
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| StoreError::Io {
            message: e.to_string(),
        })?;
        file.sync_all().map_err(|e| StoreError::Io {
            message: e.to_string(),
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| StoreError::Io {
            message: e.to_string(),
        })?;

        Ok(())
    }
}

impl LedgerStore for FileLedgerStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.data.insert(key.to_string(), value.to_vec());
        self.save_to_file()
    }
}
