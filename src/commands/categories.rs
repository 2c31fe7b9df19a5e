//! Categories command implementation

use std::fmt::Write as _;
use std::path::Path;

use crate::{
    fantasy::{filters::filter_scoring_categories, snapshot::load_snapshot, types::StatCategory},
    Result,
};

/// Handle the categories command: list the league's scoring categories
pub fn handle_categories(snapshot: &Path, all: bool, as_json: bool) -> Result<()> {
    let snapshot = load_snapshot(snapshot)?;
    let categories = &snapshot.league_settings.stat_categories;

    let output = if all {
        render_categories(categories, as_json)?
    } else {
        render_categories(&filter_scoring_categories(categories), as_json)?
    };

    print!("{}", output);
    Ok(())
}

/// Render categories one per line, marking display-only ones
pub fn render_categories(categories: &[StatCategory], as_json: bool) -> Result<String> {
    if as_json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(categories)?));
    }

    let mut out = String::new();
    for cat in categories {
        let name = cat.display_name.as_deref().unwrap_or("?");
        let marker = if cat.is_only_display_stat {
            " (display only)"
        } else {
            ""
        };
        let _ = writeln!(out, "{:>3}  {}{}", cat.stat_id.as_u32(), name, marker);
    }
    Ok(out)
}
