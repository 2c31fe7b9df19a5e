//! Fantasy basketball feed types and the projection core.
//!
//! - `types`: feed data (categories, stats, rosters, matchups) and results
//! - `filters`: scoring-category and stat filtering
//! - `compute`: stat extraction and weekly projection
//! - `overview`: per-matchup result shaping
//! - `snapshot`: loading snapshot files produced by the fetch side

pub mod compute;
pub mod filters;
pub mod overview;
pub mod snapshot;
pub mod types;
