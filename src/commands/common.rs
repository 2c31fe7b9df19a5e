//! Shared helpers for command implementations.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{
    fantasy::{snapshot::load_snapshot, types::MatchupSnapshot},
    schedule::ScheduleTable,
    Result, Season,
};

use super::resolve_schedule_path;

/// Resources needed by the projection command
pub struct CommandContext {
    pub schedule: ScheduleTable,
    pub snapshot: MatchupSnapshot,
}

impl CommandContext {
    /// Load the schedule (resolved per [`resolve_schedule_path`]) and the snapshot
    pub fn new(snapshot_path: &Path, schedule: Option<PathBuf>, season: Season) -> Result<Self> {
        let schedule = load_schedule(schedule, season)?;
        let snapshot = load_snapshot(snapshot_path)?;
        Ok(Self { schedule, snapshot })
    }
}

/// Resolve and load the games-per-week schedule
pub fn load_schedule(schedule: Option<PathBuf>, season: Season) -> Result<ScheduleTable> {
    let path = resolve_schedule_path(schedule, season);
    debug!(path = %path.display(), season = %season, "Resolved schedule path");
    ScheduleTable::load(&path)
}

/// Render a projected number for text output; non-finite values show as `-`
pub fn format_stat(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        "-".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(60.0), "60.00");
        assert_eq!(format_stat(0.5), "0.50");
        assert_eq!(format_stat(12.34), "12.34");
        assert_eq!(format_stat(f64::NAN), "-");
        assert_eq!(format_stat(f64::INFINITY), "-");
    }

    #[test]
    fn test_load_schedule_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.json");
        std::fs::write(&path, r#"[{"NY": 3}]"#).unwrap();

        let table = load_schedule(Some(path), Season::default()).unwrap();
        assert_eq!(table.num_weeks(), 1);
    }
}
