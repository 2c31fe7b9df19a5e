//! Entry point: parse CLI and dispatch to command handlers.

use bball_weekly::{
    cli::{BballWeekly, Commands, GetCmd},
    commands::{
        categories::handle_categories,
        matchup_projection::{handle_matchup_projection, MatchupProjectionParams},
        schedule_data::{handle_schedule, ScheduleParams},
    },
    logging, Result, TeamKey,
};
use clap::Parser;

/// Run the CLI.
fn main() -> Result<()> {
    let app = BballWeekly::parse();
    logging::init(app.verbose);

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Schedule {
                schedule,
                week,
                team,
                json,
            } => handle_schedule(ScheduleParams {
                schedule: schedule.schedule,
                season: schedule.season,
                week,
                team,
                as_json: json,
            })?,

            GetCmd::Categories {
                snapshot,
                all,
                json,
            } => handle_categories(&snapshot, all, json)?,

            GetCmd::MatchupProjection {
                snapshot,
                schedule,
                week,
                team_key,
                strict,
                json,
                output,
            } => handle_matchup_projection(MatchupProjectionParams {
                snapshot,
                schedule: schedule.schedule,
                season: schedule.season,
                week,
                team_key: team_key.map(TeamKey::new),
                strict,
                as_json: json,
                output,
            })?,
        },
    }

    Ok(())
}
