use crate::cli::types::{PlayerKey, StatId, TeamAbbr, TeamKey, Week};
use serde::{de::Error, Deserialize, Deserializer, Serialize};
use serde_json::Value;


/// Stat values arrive as text, but some producers emit bare numbers or null.
/// Everything is kept as text so parsing happens in one place (the extractor).
fn de_stat_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected string or number for stat value, got {other}"
        ))),
    }
}

/// The feed encodes flags as `"1"`/`"0"`, `1`/`0`, or real booleans.
fn de_feed_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_u64().is_some_and(|v| v != 0)),
        Value::String(s) => match s.trim() {
            "1" | "true" => Ok(true),
            "0" | "false" | "" => Ok(false),
            other => Err(D::Error::custom(format!("invalid flag value: {other}"))),
        },
        Value::Null => Ok(false),
        other => Err(D::Error::custom(format!("invalid flag value: {other}"))),
    }
}

/// Free agents and feed gaps have no team; missing and null both map to the
/// empty abbreviation, which no schedule week lists.
fn de_team_abbr<'de, D>(deserializer: D) -> Result<TeamAbbr, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(TeamAbbr::new).unwrap_or_default())
}

/// League-configured stat category
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatCategory {
    pub stat_id: StatId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Shown for reference (e.g. games played) but not scored
    #[serde(default, deserialize_with = "de_feed_bool")]
    pub is_only_display_stat: bool,
}

/// One raw stat from the feed; `value` is numeric-as-text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatValue {
    pub stat_id: StatId,
    #[serde(default, deserialize_with = "de_stat_value")]
    pub value: String,
}

impl StatValue {
    pub fn new(stat_id: u32, value: impl Into<String>) -> Self {
        Self {
            stat_id: StatId::new(stat_id),
            value: value.into(),
        }
    }
}

/// Root of the league settings payload
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeagueSettings {
    #[serde(default)]
    pub stat_categories: Vec<StatCategory>,
}

/// Rostered player with season-to-date stat totals
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Player {
    pub player_key: PlayerKey,
    #[serde(default)]
    pub name: Option<String>,
    /// Uppercased on deserialization so it can key schedule lookups
    #[serde(default, deserialize_with = "de_team_abbr")]
    pub editorial_team_abbr: TeamAbbr,
    #[serde(default)]
    pub stats: Vec<StatValue>,
}

/// Fantasy team inside a matchup
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub team_key: TeamKey,
    #[serde(default)]
    pub name: Option<String>,
    /// Team totals for the matchup week
    #[serde(default)]
    pub team_stats: Vec<StatValue>,
    #[serde(default)]
    pub players: Vec<Player>,
}

/// Head-to-head matchup for one scoring week
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Matchup {
    pub week: Week,
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// Everything the fetch side hands over for one page render
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchupSnapshot {
    #[serde(default)]
    pub league_settings: LeagueSettings,
    #[serde(default)]
    pub matchups: Vec<Matchup>,
}

/// Season-to-date numbers decoded from a raw stat list
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ExtractedStats {
    pub games_played: f64,
    pub fga: f64,
    pub fgm: f64,
    pub fta: f64,
    pub ftm: f64,
    pub threes: f64,
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    pub st: f64,
    pub blk: f64,
    pub to: f64,
}

/// Projected production for one player over one scoring week.
///
/// `fgp`/`ftp` are season-to-date percentages; every other field is the
/// per-game rate scaled by the week's games. All values are truncated to
/// two decimals and may be non-finite when games played or attempts are 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ProjectedPlayerStats {
    pub fgp: f64,
    pub ftp: f64,
    pub fga: f64,
    pub fgm: f64,
    pub fta: f64,
    pub ftm: f64,
    pub threes: f64,
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    pub st: f64,
    pub blk: f64,
    pub to: f64,
}

impl ProjectedPlayerStats {
    /// True when every field is a finite number
    pub fn is_finite(&self) -> bool {
        [
            self.fgp,
            self.ftp,
            self.fga,
            self.fgm,
            self.fta,
            self.ftm,
            self.threes,
            self.pts,
            self.reb,
            self.ast,
            self.st,
            self.blk,
            self.to,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Projections for one roster in one week, keyed by player.
///
/// No team-level rollup is computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectedTeamStats {
    pub player_stats: std::collections::BTreeMap<PlayerKey, ProjectedPlayerStats>,
}
