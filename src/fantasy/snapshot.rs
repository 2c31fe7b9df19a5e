//! Loading matchup snapshots written by the fetch side.

use std::path::Path;
use tracing::info;

use crate::{core::read_to_string, fantasy::types::MatchupSnapshot, Result};

/// Read and parse a matchup snapshot file.
pub fn load_snapshot(path: &Path) -> Result<MatchupSnapshot> {
    let contents = read_to_string(path)?;
    let snapshot: MatchupSnapshot = serde_json::from_str(&contents)?;

    info!(
        path = %path.display(),
        categories = snapshot.league_settings.stat_categories.len(),
        matchups = snapshot.matchups.len(),
        "Loaded matchup snapshot"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BballError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(
            &path,
            r#"{
                "league_settings": {"stat_categories": [{"stat_id": 12, "is_only_display_stat": "0"}]},
                "matchups": [{"week": 4, "teams": []}]
            }"#,
        )
        .unwrap();

        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot.league_settings.stat_categories.len(), 1);
        assert_eq!(snapshot.matchups[0].week.as_u16(), 4);
    }

    #[test]
    fn test_load_snapshot_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(load_snapshot(&path), Err(BballError::Json(_))));
    }

    #[test]
    fn test_load_snapshot_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");

        assert!(matches!(load_snapshot(&path), Err(BballError::Io(_))));
    }
}
