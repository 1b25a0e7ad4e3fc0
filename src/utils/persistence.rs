//! JSON persistence helpers for the per-user data and config directories.

use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

fn project_dirs() -> io::Result<ProjectDirs> {
    ProjectDirs::from("", "", "dino-runner").ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })
}

/// Get the per-user data directory, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let dir = project_dirs()?.data_dir().to_path_buf();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the per-user config directory. Not created: a missing config
/// directory just means the defaults are used.
pub fn config_dir() -> io::Result<PathBuf> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON, creating parent directories.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join("dino_runner_persistence_test")
            .join(name)
    }

    #[test]
    fn test_load_missing_returns_default() {
        let val: Vec<String> = load_json_or_default(&scratch("nonexistent_12345.json"));
        assert!(val.is_empty());
    }

    #[test]
    fn test_load_corrupt_returns_default() {
        let path = scratch("corrupt.json");
        save_json(&path, &"placeholder").unwrap();
        fs::write(&path, "[1, 2,").unwrap();
        let val: Vec<u32> = load_json_or_default(&path);
        assert!(val.is_empty());
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = scratch("nested/roundtrip.json");
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json(&path, &data).expect("save should succeed");

        let loaded: Vec<String> = load_json_or_default(&path);
        assert_eq!(loaded, data);

        fs::remove_file(path).ok();
    }
}
