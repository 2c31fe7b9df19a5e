//! Matchup projection command implementation

use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::{
    cli::types::{Season, StatId, TeamKey, Week},
    core::write_string,
    error::BballError,
    fantasy::{
        overview::{build_matchup_overview, MatchupOverview, TeamOverview},
        types::{Matchup, StatCategory},
    },
    Result,
};

use super::common::{format_stat, CommandContext};

/// Parameters for the matchup projection command
pub struct MatchupProjectionParams {
    pub snapshot: PathBuf,
    pub schedule: Option<PathBuf>,
    pub season: Season,
    pub week: Option<Week>,
    pub team_key: Option<TeamKey>,
    pub strict: bool,
    pub as_json: bool,
    pub output: Option<PathBuf>,
}

/// Handle the matchup projection command
pub fn handle_matchup_projection(params: MatchupProjectionParams) -> Result<()> {
    let ctx = CommandContext::new(&params.snapshot, params.schedule.clone(), params.season)?;

    let overviews = build_overviews(&ctx, params.week, params.team_key.as_ref(), params.strict)?;
    info!(matchups = overviews.len(), "Built matchup overviews");

    if let Some(path) = &params.output {
        write_string(path, &serde_json::to_string_pretty(&overviews)?)?;
        info!(path = %path.display(), "Wrote projection report");
    }

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&overviews)?);
    } else {
        print!("{}", render_overviews(&overviews));
    }

    Ok(())
}

/// Matchups matching the optional week and team filters
pub fn select_matchups<'a>(
    matchups: &'a [Matchup],
    week: Option<Week>,
    team_key: Option<&TeamKey>,
) -> Vec<&'a Matchup> {
    matchups
        .iter()
        .filter(|m| week.map_or(true, |w| m.week == w))
        .filter(|m| team_key.map_or(true, |key| m.teams.iter().any(|t| &t.team_key == key)))
        .collect()
}

/// Build overviews for the selected matchups of a loaded context
pub fn build_overviews(
    ctx: &CommandContext,
    week: Option<Week>,
    team_key: Option<&TeamKey>,
    strict: bool,
) -> Result<Vec<MatchupOverview>> {
    let selected = select_matchups(&ctx.snapshot.matchups, week, team_key);
    if selected.is_empty() {
        return Err(BballError::NoMatchups);
    }

    let categories = &ctx.snapshot.league_settings.stat_categories;
    if categories.is_empty() {
        warn!("Snapshot has no stat categories; team stats will be empty");
    }

    selected
        .into_iter()
        .map(|m| build_matchup_overview(m, categories, &ctx.schedule, strict))
        .collect()
}

fn category_label(categories: &[StatCategory], stat_id: StatId) -> String {
    categories
        .iter()
        .find(|c| c.stat_id == stat_id)
        .and_then(|c| c.display_name.clone())
        .unwrap_or_else(|| format!("#{}", stat_id))
}

fn render_team(out: &mut String, team: &TeamOverview, categories: &[StatCategory]) {
    let name = team.name.as_deref().unwrap_or("(unnamed)");
    let _ = writeln!(out, "  {} [{}]", name, team.team_key);

    let week_stats: Vec<String> = team
        .stats
        .iter()
        .map(|s| format!("{} {}", category_label(categories, s.stat_id), s.value))
        .collect();
    let _ = writeln!(out, "    Week stats: {}", week_stats.join("  "));

    let _ = writeln!(
        out,
        "    {:<24} {:>4} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>7} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}",
        "Player", "G", "FG%", "FT%", "FGM", "FGA", "FTM", "FTA", "PTS", "3PTM", "REB", "AST", "ST", "BLK", "TO"
    );
    for slot in &team.roster {
        let Some(p) = team.projected.player_stats.get(&slot.player_key) else {
            continue;
        };
        let label = format!(
            "{} ({})",
            slot.name.as_deref().unwrap_or(slot.player_key.as_str()),
            slot.team_abbr
        );
        let _ = writeln!(
            out,
            "    {:<24} {:>4} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>7} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}",
            label,
            slot.games_this_week,
            format_stat(p.fgp),
            format_stat(p.ftp),
            format_stat(p.fgm),
            format_stat(p.fga),
            format_stat(p.ftm),
            format_stat(p.fta),
            format_stat(p.pts),
            format_stat(p.threes),
            format_stat(p.reb),
            format_stat(p.ast),
            format_stat(p.st),
            format_stat(p.blk),
            format_stat(p.to),
        );
    }
}

/// Text rendering of matchup overviews
pub fn render_overviews(overviews: &[MatchupOverview]) -> String {
    let mut out = String::new();
    for overview in overviews {
        let _ = writeln!(out, "Week {}", overview.week);
        for team in &overview.teams {
            render_team(&mut out, team, &overview.scoring_categories);
        }
        out.push('\n');
    }
    out
}
