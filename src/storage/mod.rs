//! Persistent storage
//!
//! The only persisted state is the user's settings file.

use std::path::PathBuf;
use thiserror::Error;

pub mod settings;

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access data directory: {0}")]
    DataDirError(String),
    #[error("Failed to read file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to serialize/deserialize JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Get the application data directory
///
/// Returns the platform-specific application data directory:
/// - Windows: `C:\Users\{user}\AppData\Roaming\FactLens\FactLens`
/// - macOS: `/Users/{user}/Library/Application Support/com.FactLens.FactLens`
/// - Linux: `/home/{user}/.local/share/factlens`
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("com", "FactLens", "FactLens")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| StorageError::DataDirError("Could not determine data directory".to_string()))
}

/// Create the data directory if it does not exist yet
pub fn init_storage() -> Result<PathBuf, StorageError> {
    let data_dir = get_data_dir()?;
    std::fs::create_dir_all(&data_dir)?;

    tracing::info!("Initialized storage at: {}", data_dir.display());

    Ok(data_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_retrieval() {
        let result = get_data_dir();
        assert!(result.is_ok());
        let path = result.unwrap();
        assert!(path.to_string_lossy().to_lowercase().contains("factlens"));
    }
}
