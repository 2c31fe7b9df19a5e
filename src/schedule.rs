//! Per-week games schedule.
//!
//! The schedule is loaded once at startup from a JSON array with one object
//! per scoring week, each mapping a team abbreviation to the number of games
//! that team plays that week:
//!
//! ```json
//! [{"ATL": 3, "BOS": 4}, {"ATL": 4, "BOS": 3}]
//! ```
//!
//! After loading, the table is immutable and shared by reference, so
//! projections for many players can read it concurrently.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, info};

use crate::{
    cli::types::{TeamAbbr, Week},
    core::read_to_string,
    error::{BballError, Result},
};


/// Games per team for a single scoring week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScheduleWeek {
    games: BTreeMap<TeamAbbr, u32>,
}

impl ScheduleWeek {
    /// Number of games `team` plays this week; 0 when the team is not listed.
    pub fn games_for(&self, team: &TeamAbbr) -> u32 {
        self.games.get(team).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Teams in abbreviation order.
    pub fn iter(&self) -> impl Iterator<Item = (&TeamAbbr, u32)> {
        self.games.iter().map(|(team, games)| (team, *games))
    }
}

/// Later entries overwrite earlier ones that normalize to the same team.
impl<S: AsRef<str>> FromIterator<(S, u32)> for ScheduleWeek {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            games: iter
                .into_iter()
                .map(|(team, games)| (TeamAbbr::new(team), games))
                .collect(),
        }
    }
}

/// Season schedule indexed by 1-based week number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScheduleTable {
    weeks: Vec<ScheduleWeek>,
}

impl ScheduleTable {
    /// Build from raw per-week maps; keys are uppercase-normalized.
    ///
    /// Two keys that normalize to the same team in one week (`"gsw"` and
    /// `"GSW"`) are rejected with `DuplicateTeam`.
    pub fn from_weeks(weeks: Vec<HashMap<String, u32>>) -> Result<Self> {
        let mut table = Vec::with_capacity(weeks.len());
        for (idx, raw) in weeks.into_iter().enumerate() {
            let mut games = BTreeMap::new();
            for (team, count) in raw {
                let abbr = TeamAbbr::new(&team);
                if games.insert(abbr.clone(), count).is_some() {
                    return Err(BballError::DuplicateTeam {
                        week: idx + 1,
                        team: abbr.to_string(),
                    });
                }
            }
            table.push(ScheduleWeek { games });
        }
        Ok(Self { weeks: table })
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let raw: Vec<HashMap<String, u32>> = serde_json::from_str(s)?;
        Self::from_weeks(raw)
    }

    /// Load the schedule file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = read_to_string(path)?;
        let table = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            weeks = table.num_weeks(),
            "Loaded games-per-week schedule"
        );
        Ok(table)
    }

    pub fn num_weeks(&self) -> usize {
        self.weeks.len()
    }

    /// Schedule entry for `week`, or `WeekOutOfRange` if the week is 0 or
    /// past the end of the loaded season.
    pub fn week(&self, week: Week) -> Result<&ScheduleWeek> {
        let idx = usize::from(week.as_u16());
        if idx == 0 || idx > self.weeks.len() {
            return Err(BballError::WeekOutOfRange {
                week: week.as_u16(),
                weeks: self.weeks.len(),
            });
        }
        Ok(&self.weeks[idx - 1])
    }

    /// Games `team` plays during `week`. A team missing from the week's
    /// entry (bye, malformed entry) plays 0 games; that is not an error.
    pub fn games_remaining(&self, week: Week, team: &TeamAbbr) -> Result<u32> {
        let games = self.week(week)?.games_for(team);
        debug!(week = %week, team = %team, games, "Schedule lookup");
        Ok(games)
    }
}
