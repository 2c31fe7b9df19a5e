//! Weekly Fantasy Basketball Projection Library
//!
//! Projects each rostered player's output for a fantasy-basketball scoring
//! week from season-to-date stats and the number of games their team plays
//! that week.
//!
//! ## Features
//!
//! - **Category Filtering**: Drop display-only league categories (e.g. games played)
//! - **Stat Filtering**: Restrict raw team/player stats to scoring categories
//! - **Stat Extraction**: Decode feed stat values into typed numbers, tolerating junk
//! - **Weekly Projection**: Per-game rates scaled by games this week, truncated to 2 decimals
//! - **Schedule Lookup**: Games per team per week, loaded once from JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use bball_weekly::{
//!     fantasy::compute::{extract, project},
//!     fantasy::types::StatValue,
//!     ScheduleTable, TeamAbbr, Week,
//! };
//!
//! # fn example() -> bball_weekly::Result<()> {
//! let schedule = ScheduleTable::from_json_str(r#"[{"GSW": 3}]"#)?;
//! let games = schedule.games_remaining(Week::new(1), &TeamAbbr::new("gsw"))?;
//!
//! let season = extract(&[StatValue::new(0, "10"), StatValue::new(12, "200")]);
//! let projected = project(&season, games);
//! assert_eq!(projected.pts, 60.0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a schedule file instead of passing `--schedule` every time:
//! ```bash
//! export BBALL_WEEKLY_SCHEDULE=/path/to/games_per_week_2015.json
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fantasy;
pub mod logging;
pub mod schedule;

// Re-export commonly used types
pub use cli::types::{PlayerKey, Season, StatId, TeamAbbr, TeamKey, Week};
pub use error::{BballError, Result};
pub use fantasy::types::{
    ExtractedStats, Player, ProjectedPlayerStats, ProjectedTeamStats, StatCategory, StatValue,
};
pub use schedule::{ScheduleTable, ScheduleWeek};

pub const SCHEDULE_PATH_ENV_VAR: &str = "BBALL_WEEKLY_SCHEDULE";
