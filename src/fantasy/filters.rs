//! Scoring-category and stat filtering.
//!
//! A league configures a list of stat categories; some of them (games
//! played, for instance) are display-only and never count toward the
//! matchup. These helpers narrow raw stat lists down to the categories that
//! are actually scored.

use crate::fantasy::types::{StatCategory, StatValue};


/// Categories that count toward scoring, in their original order.
pub fn filter_scoring_categories(categories: &[StatCategory]) -> Vec<StatCategory> {
    categories
        .iter()
        .filter(|cat| !cat.is_only_display_stat)
        .cloned()
        .collect()
}

/// Stats whose identifier matches some category in `categories`.
///
/// Output order follows `stats`. Each stat is emitted at most once, even if
/// `categories` lists the same identifier twice. Category lists are short
/// enough that a linear scan per stat is fine.
pub fn filter_stats(stats: &[StatValue], categories: &[StatCategory]) -> Vec<StatValue> {
    stats
        .iter()
        .filter(|stat| categories.iter().any(|cat| cat.stat_id == stat.stat_id))
        .cloned()
        .collect()
}
