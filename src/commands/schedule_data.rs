//! Schedule command implementation

use serde_json::json;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

use crate::{
    cli::types::{Season, TeamAbbr, Week},
    schedule::ScheduleWeek,
    Result,
};

use super::common::load_schedule;

/// Parameters for the schedule command
pub struct ScheduleParams {
    pub schedule: Option<PathBuf>,
    pub season: Season,
    pub week: Week,
    pub team: Option<TeamAbbr>,
    pub as_json: bool,
}

/// Handle the schedule command: games per team for one week
pub fn handle_schedule(params: ScheduleParams) -> Result<()> {
    let table = load_schedule(params.schedule, params.season)?;
    let schedule_week = table.week(params.week)?;

    let output = match &params.team {
        Some(team) => {
            let games = table.games_remaining(params.week, team)?;
            info!(week = %params.week, team = %team, games, "Schedule lookup");
            render_team_games(params.week, team, games, params.as_json)?
        }
        None => render_week(params.week, schedule_week, params.as_json)?,
    };

    print!("{}", output);
    Ok(())
}

/// Render one team's games for a week
pub fn render_team_games(week: Week, team: &TeamAbbr, games: u32, as_json: bool) -> Result<String> {
    if as_json {
        let value = json!({ "week": week, "team": team, "games": games });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&value)?));
    }

    Ok(format!("Week {}: {} plays {} game(s)\n", week, team, games))
}

/// Render every team's games for a week, in abbreviation order
pub fn render_week(week: Week, schedule_week: &ScheduleWeek, as_json: bool) -> Result<String> {
    if as_json {
        let value = json!({ "week": week, "games": schedule_week });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&value)?));
    }

    let mut out = format!("Week {} ({} teams)\n", week, schedule_week.len());
    for (team, games) in schedule_week.iter() {
        let _ = writeln!(out, "  {:<4} {}", team.as_str(), games);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week() -> ScheduleWeek {
        [("SA", 4u32), ("NY", 3u32)].into_iter().collect()
    }

    #[test]
    fn test_render_team_games_text() {
        let out = render_team_games(Week::new(5), &TeamAbbr::new("sa"), 4, false).unwrap();
        assert_eq!(out, "Week 5: SA plays 4 game(s)\n");
    }

    #[test]
    fn test_render_team_games_json() {
        let out = render_team_games(Week::new(5), &TeamAbbr::new("SA"), 4, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["week"], 5);
        assert_eq!(value["team"], "SA");
        assert_eq!(value["games"], 4);
    }

    #[test]
    fn test_render_week_text_is_sorted() {
        let out = render_week(Week::new(2), &week(), false).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Week 2 (2 teams)");
        assert_eq!(lines[1], "  NY   3");
        assert_eq!(lines[2], "  SA   4");
    }

    #[test]
    fn test_render_week_json() {
        let out = render_week(Week::new(2), &week(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["games"]["NY"], 3);
        assert_eq!(value["games"]["SA"], 4);
    }
}
