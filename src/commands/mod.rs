//! Command implementations for the weekly projection CLI

pub mod categories;
pub mod common;
pub mod matchup_projection;
pub mod schedule_data;

use std::path::PathBuf;

use crate::{core::default_schedule_path, Season, SCHEDULE_PATH_ENV_VAR};

/// Resolve the schedule file: explicit path, then the
/// `BBALL_WEEKLY_SCHEDULE` env var, then the per-season default location.
pub fn resolve_schedule_path(schedule: Option<PathBuf>, season: Season) -> PathBuf {
    schedule
        .or_else(|| {
            std::env::var(SCHEDULE_PATH_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| default_schedule_path(season.as_u16()))
}
