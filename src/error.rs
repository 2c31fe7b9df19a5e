//! Error types for the weekly basketball projection CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, BballError>;

#[derive(Error, Debug)]
pub enum BballError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Week {week} is not valid; weeks start at 1")]
    InvalidWeek { week: u16 },

    #[error("Week {week} is outside the loaded schedule ({weeks} weeks)")]
    WeekOutOfRange { week: u16, weeks: usize },

    #[error("Team {team} is listed more than once in schedule week {week}")]
    DuplicateTeam { week: usize, team: String },

    #[error("Invalid team abbreviation: {abbr}")]
    InvalidTeamAbbr { abbr: String },

    #[error("Malformed value {value:?} for stat {stat_id}")]
    MalformedStat { stat_id: u32, value: String },

    #[error("Snapshot contains no matchups for the requested selection")]
    NoMatchups,
}
