//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{Season, TeamAbbr, Week};

/// Schedule file arguments shared between commands
#[derive(Debug, Args)]
pub struct ScheduleArgs {
    /// Games-per-week schedule file (or set `BBALL_WEEKLY_SCHEDULE` env var).
    #[clap(long)]
    pub schedule: Option<PathBuf>,

    /// Season year, used to locate the default schedule file (e.g. 2015).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Show how many games each team plays in a scoring week
    Schedule {
        #[clap(flatten)]
        schedule: ScheduleArgs,

        /// Scoring week (1-based).
        #[clap(long, short)]
        week: Week,

        /// Only show this team (e.g. GSW).
        #[clap(long, short)]
        team: Option<TeamAbbr>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List the league's stat categories from a matchup snapshot
    Categories {
        /// Matchup snapshot file produced by the fetch side.
        #[clap(long)]
        snapshot: PathBuf,

        /// Include display-only categories.
        #[clap(long)]
        all: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Project each rostered player's output for the matchup week.
    ///
    /// Reads a matchup snapshot, filters team stats to scoring categories and
    /// scales season-to-date per-game rates by the week's games.
    MatchupProjection {
        /// Matchup snapshot file produced by the fetch side.
        #[clap(long)]
        snapshot: PathBuf,

        #[clap(flatten)]
        schedule: ScheduleArgs,

        /// Only matchups for this week.
        #[clap(long, short)]
        week: Option<Week>,

        /// Only matchups involving this fantasy team key.
        #[clap(long)]
        team_key: Option<String>,

        /// Fail on unparseable stat values instead of reading them as 0.
        #[clap(long)]
        strict: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Also write the JSON report to this file.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "bball-weekly", about = "Weekly fantasy basketball matchup projections")]
pub struct BballWeekly {
    /// Enable debug logging (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get schedule, category or projection data
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matchup_projection() {
        let cli = BballWeekly::try_parse_from([
            "bball-weekly",
            "get",
            "matchup-projection",
            "--snapshot",
            "snap.json",
            "--week",
            "4",
            "--team-key",
            "353.l.1.t.2",
            "--json",
        ])
        .unwrap();

        let Commands::Get {
            cmd:
                GetCmd::MatchupProjection {
                    snapshot,
                    schedule,
                    week,
                    team_key,
                    json,
                    strict,
                    ..
                },
        } = cli.command
        else {
            panic!("Expected matchup-projection");
        };
        assert_eq!(snapshot, PathBuf::from("snap.json"));
        assert_eq!(week, Some(Week::new(4)));
        assert_eq!(team_key.as_deref(), Some("353.l.1.t.2"));
        assert!(json);
        assert!(!strict);
        assert_eq!(schedule.season, Season::default());
        assert!(schedule.schedule.is_none());
    }

    #[test]
    fn test_parse_schedule_normalizes_team() {
        let cli = BballWeekly::try_parse_from([
            "bball-weekly", "-v", "get", "schedule", "-w", "2", "-t", "gsw",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Commands::Get {
            cmd: GetCmd::Schedule { week, team, .. },
        } = cli.command
        else {
            panic!("Expected schedule");
        };
        assert_eq!(week, Week::new(2));
        assert_eq!(team, Some(TeamAbbr::new("GSW")));
    }

    #[test]
    fn test_parse_rejects_week_zero() {
        let result =
            BballWeekly::try_parse_from(["bball-weekly", "get", "schedule", "--week", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_bad_team() {
        let result = BballWeekly::try_parse_from([
            "bball-weekly", "get", "schedule", "--week", "1", "--team", "LAKERS",
        ]);
        assert!(result.is_err());
    }
}
