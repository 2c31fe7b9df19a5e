//! Per-matchup result shaping for the presentation layer.

use serde::Serialize;
use tracing::debug;

use crate::{
    cli::types::{PlayerKey, TeamAbbr, TeamKey, Week},
    error::Result,
    fantasy::{
        compute::project_roster,
        filters::{filter_scoring_categories, filter_stats},
        types::{Matchup, ProjectedTeamStats, StatCategory, StatValue},
    },
    schedule::{ScheduleTable, ScheduleWeek},
};

/// Rostered player as shown next to their projection
#[derive(Debug, Clone, Serialize)]
pub struct RosterSlot {
    pub player_key: PlayerKey,
    pub name: Option<String>,
    pub team_abbr: TeamAbbr,
    pub games_this_week: u32,
}

/// One side of a matchup, ready to render
#[derive(Debug, Clone, Serialize)]
pub struct TeamOverview {
    pub team_key: TeamKey,
    pub name: Option<String>,
    /// Team-week totals restricted to scoring categories
    pub stats: Vec<StatValue>,
    /// Roster in feed order
    pub roster: Vec<RosterSlot>,
    pub projected: ProjectedTeamStats,
}

/// A matchup with scoring categories, filtered team stats and roster projections
#[derive(Debug, Clone, Serialize)]
pub struct MatchupOverview {
    pub week: Week,
    pub scoring_categories: Vec<StatCategory>,
    pub games_this_week: ScheduleWeek,
    pub teams: Vec<TeamOverview>,
}

/// Build the overview for `matchup`.
///
/// `categories` is the league's full category list; display-only categories
/// are dropped here. Fails if the matchup week is outside the schedule, or,
/// with `strict`, if a player's stats are malformed.
pub fn build_matchup_overview(
    matchup: &Matchup,
    categories: &[StatCategory],
    schedule: &ScheduleTable,
    strict: bool,
) -> Result<MatchupOverview> {
    let schedule_week = schedule.week(matchup.week)?;
    let scoring_categories = filter_scoring_categories(categories);

    let teams = matchup
        .teams
        .iter()
        .map(|team| {
            let projected = project_roster(&team.players, schedule_week, strict)?;
            debug!(
                team = %team.team_key,
                week = %matchup.week,
                players = projected.player_stats.len(),
                "Projected roster"
            );
            Ok(TeamOverview {
                team_key: team.team_key.clone(),
                name: team.name.clone(),
                stats: filter_stats(&team.team_stats, &scoring_categories),
                roster: team
                    .players
                    .iter()
                    .map(|p| RosterSlot {
                        player_key: p.player_key.clone(),
                        name: p.name.clone(),
                        team_abbr: p.editorial_team_abbr.clone(),
                        games_this_week: schedule_week.games_for(&p.editorial_team_abbr),
                    })
                    .collect(),
                projected,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(MatchupOverview {
        week: matchup.week,
        scoring_categories,
        games_this_week: schedule_week.clone(),
        teams,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BballError;
    use serde_json::json;

    fn snapshot_matchup(week: u16) -> Matchup {
        serde_json::from_value(json!({
            "week": week,
            "teams": [
                {
                    "team_key": "353.l.1.t.1",
                    "name": "Splash",
                    "team_stats": [
                        {"stat_id": 0, "value": "9"},
                        {"stat_id": 12, "value": "201"},
                        {"stat_id": 15, "value": "88"}
                    ],
                    "players": [
                        {
                            "player_key": "353.p.4244",
                            "editorial_team_abbr": "gs",
                            "stats": [
                                {"stat_id": 0, "value": "10"},
                                {"stat_id": 12, "value": "300"}
                            ]
                        }
                    ]
                },
                {
                    "team_key": "353.l.1.t.2",
                    "team_stats": [{"stat_id": 12, "value": "180"}],
                    "players": [
                        {
                            "player_key": "353.p.5000",
                            "editorial_team_abbr": "Lal",
                            "stats": [
                                {"stat_id": 0, "value": "0"},
                                {"stat_id": 12, "value": "0"}
                            ]
                        }
                    ]
                }
            ]
        }))
        .unwrap()
    }

    fn categories() -> Vec<StatCategory> {
        serde_json::from_value(json!([
            {"stat_id": 0, "display_name": "GP", "is_only_display_stat": "1"},
            {"stat_id": 12, "display_name": "PTS", "is_only_display_stat": "0"},
            {"stat_id": 15, "display_name": "REB", "is_only_display_stat": "0"}
        ]))
        .unwrap()
    }

    fn schedule() -> ScheduleTable {
        ScheduleTable::from_json_str(r#"[{"GS": 4, "LAL": 3}, {"GS": 2}]"#).unwrap()
    }

    fn overview_for(week: u16) -> Result<MatchupOverview> {
        build_matchup_overview(&snapshot_matchup(week), &categories(), &schedule(), false)
    }

    #[test]
    fn test_overview_shapes_both_teams() {
        let overview = overview_for(1).unwrap();

        assert_eq!(overview.week, Week::new(1));
        assert_eq!(overview.scoring_categories.len(), 2);
        assert_eq!(overview.teams.len(), 2);
        assert_eq!(overview.games_this_week.len(), 2);

        let home = &overview.teams[0];
        assert_eq!(home.name.as_deref(), Some("Splash"));
        let ids: Vec<u32> = home.stats.iter().map(|s| s.stat_id.as_u32()).collect();
        assert_eq!(ids, vec![12, 15]);

        let curry = &home.projected.player_stats[&PlayerKey::new("353.p.4244")];
        assert_eq!(curry.pts, 120.0);

        assert_eq!(home.roster.len(), 1);
        assert_eq!(home.roster[0].team_abbr.as_str(), "GS");
        assert_eq!(home.roster[0].games_this_week, 4);
    }

    #[test]
    fn test_overview_keeps_non_finite_projection() {
        let overview = overview_for(1).unwrap();

        let away = &overview.teams[1];
        let rookie = &away.projected.player_stats[&PlayerKey::new("353.p.5000")];
        assert!(rookie.pts.is_nan());
    }

    #[test]
    fn test_overview_uses_matchup_week() {
        let overview = overview_for(2).unwrap();

        let curry = &overview.teams[0].projected.player_stats[&PlayerKey::new("353.p.4244")];
        assert_eq!(curry.pts, 60.0);
        // LAL is off in week 2
        assert_eq!(overview.games_this_week.len(), 1);
    }

    #[test]
    fn test_overview_week_out_of_range() {
        let result = overview_for(9);
        assert!(matches!(
            result,
            Err(BballError::WeekOutOfRange { week: 9, weeks: 2 })
        ));
    }
}
