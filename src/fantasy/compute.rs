//! Stat extraction and weekly projection.
//!
//! Projections scale a player's season-to-date per-game rates by the number
//! of games their team plays in the target week. Nothing here guards against
//! zero games played or zero attempts: the resulting NaN/inf values are part
//! of the output, and the presentation layer decides how to render them.

use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, trace};

use crate::{
    cli::types::StatId,
    error::{BballError, Result},
    fantasy::types::{ExtractedStats, Player, ProjectedPlayerStats, ProjectedTeamStats, StatValue},
    schedule::ScheduleWeek,
};


/// Slot in `ExtractedStats` for a feed stat id, if the projection uses it.
fn field_mut(stats: &mut ExtractedStats, stat_id: StatId) -> Option<&mut f64> {
    let field = match stat_id.as_u32() {
        0 => &mut stats.games_played,
        3 => &mut stats.fga,
        4 => &mut stats.fgm,
        6 => &mut stats.fta,
        7 => &mut stats.ftm,
        10 => &mut stats.threes,
        12 => &mut stats.pts,
        15 => &mut stats.reb,
        16 => &mut stats.ast,
        17 => &mut stats.st,
        18 => &mut stats.blk,
        19 => &mut stats.to,
        _ => return None,
    };
    Some(field)
}

/// Parse a feed value. Empty strings and placeholders like `-` do not count
/// as numbers. Neither do `NaN`/`inf` literals, even though a plain float
/// parse accepts them: the feed never sends them on purpose, so they are
/// read as 0 like any other garbage rather than flowing into the rates.
fn parse_stat_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Decode the stats needed for projection.
///
/// Unknown identifiers are ignored. A value that does not parse as a finite
/// number is read as 0. When an identifier repeats, the last value wins.
pub fn extract(stats: &[StatValue]) -> ExtractedStats {
    let mut out = ExtractedStats::default();
    for stat in stats {
        let Some(field) = field_mut(&mut out, stat.stat_id) else {
            continue;
        };
        *field = parse_stat_value(&stat.value).unwrap_or_else(|| {
            trace!(stat_id = %stat.stat_id, value = %stat.value, "Unparseable stat read as 0");
            0.0
        });
    }
    out
}

/// Like [`extract`], but a mapped stat with an unparseable value is an error.
pub fn extract_strict(stats: &[StatValue]) -> Result<ExtractedStats> {
    let mut out = ExtractedStats::default();
    for stat in stats {
        let Some(field) = field_mut(&mut out, stat.stat_id) else {
            continue;
        };
        *field = parse_stat_value(&stat.value).ok_or_else(|| BballError::MalformedStat {
            stat_id: stat.stat_id.as_u32(),
            value: stat.value.clone(),
        })?;
    }
    Ok(out)
}

/// Truncate toward zero at two decimal places (12.347 -> 12.34, -1.239 -> -1.23).
///
/// NaN and infinities pass through unchanged.
pub fn truncate_two_decimals(value: f64) -> f64 {
    (value * 100.0).trunc() / 100.0
}

/// Project one player's production over `games_remaining` games.
pub fn project(extracted: &ExtractedStats, games_remaining: u32) -> ProjectedPlayerStats {
    let games = f64::from(games_remaining);
    let scale = |total: f64| truncate_two_decimals(total / extracted.games_played * games);

    ProjectedPlayerStats {
        fgp: truncate_two_decimals(extracted.fgm / extracted.fga),
        ftp: truncate_two_decimals(extracted.ftm / extracted.fta),
        fga: scale(extracted.fga),
        fgm: scale(extracted.fgm),
        fta: scale(extracted.fta),
        ftm: scale(extracted.ftm),
        threes: scale(extracted.threes),
        pts: scale(extracted.pts),
        reb: scale(extracted.reb),
        ast: scale(extracted.ast),
        st: scale(extracted.st),
        blk: scale(extracted.blk),
        to: scale(extracted.to),
    }
}

/// Extract and project a single rostered player for one schedule week.
pub fn project_player(
    player: &Player,
    week: &ScheduleWeek,
    strict: bool,
) -> Result<ProjectedPlayerStats> {
    let extracted = if strict {
        extract_strict(&player.stats)?
    } else {
        extract(&player.stats)
    };
    let games = week.games_for(&player.editorial_team_abbr);
    let projected = project(&extracted, games);

    if !projected.is_finite() {
        debug!(
            player = %player.player_key,
            games_played = extracted.games_played,
            "Projection has non-finite values"
        );
    }

    Ok(projected)
}

/// Project every player on a roster, keyed by player key.
///
/// Players are independent, so the work is spread over the rayon pool.
pub fn project_roster(
    players: &[Player],
    week: &ScheduleWeek,
    strict: bool,
) -> Result<ProjectedTeamStats> {
    let player_stats = players
        .par_iter()
        .map(|player| {
            project_player(player, week, strict).map(|stats| (player.player_key.clone(), stats))
        })
        .collect::<Result<BTreeMap<_, _>>>()?;

    Ok(ProjectedTeamStats { player_stats })
}
