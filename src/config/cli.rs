use crate::core::Storage;
use crate::utils::error::{EtlError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 本機檔案系統；相對路徑以 base_path 為根，絕對路徑直接使用
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        fs::read(&full_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => EtlError::InputNotFound {
                path: full_path.display().to_string(),
            },
            _ => EtlError::IoError(e),
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        let write_error = |source| EtlError::OutputWriteError {
            path: full_path.display().to_string(),
            source,
        };

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        fs::write(&full_path, data).map_err(write_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_dirs_and_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage.write_file("nested/out.sql", b"first version").unwrap();
        storage.write_file("nested/out.sql", b"second").unwrap();

        assert_eq!(storage.read_file("nested/out.sql").unwrap(), b"second");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        let err = storage.read_file("missing.geojson").unwrap_err();
        assert!(matches!(err, EtlError::InputNotFound { .. }));
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        storage.write_file("blocker", b"x").unwrap();

        let err = storage.write_file("blocker/out.sql", b"y").unwrap_err();
        assert!(matches!(err, EtlError::OutputWriteError { .. }));
    }
}
