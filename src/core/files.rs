//! File system helpers for schedule, snapshot and report files

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::Result;

/// Path: ~/.config/bball-weekly/games_per_week_{season}.json
pub fn default_schedule_path(season: u16) -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("bball-weekly")
        .join(format!("games_per_week_{}.json", season))
}

/// Read a whole file into a String
pub fn read_to_string(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "Reading file");
    Ok(fs::read_to_string(path)?)
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())?;
    debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BballError;
    use tempfile::tempdir;

    #[test]
    fn test_default_schedule_path() {
        let path = default_schedule_path(2015);
        let path_str = path.to_string_lossy();

        assert!(path_str.contains("bball-weekly"));
        assert!(path_str.ends_with("games_per_week_2015.json"));
    }

    #[test]
    fn test_read_to_string_existing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        fs::write(&file_path, "hello world").unwrap();

        let content = read_to_string(&file_path).unwrap();
        assert_eq!(content, "hello world");
    }

    #[test]
    fn test_read_to_string_nonexistent_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nonexistent.txt");

        match read_to_string(&file_path) {
            Err(BballError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_string_creates_parents() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nested").join("deeper").join("output.json");

        write_string(&file_path, "{}").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "{}");
    }
}
