//! Type-safe wrappers for fantasy basketball data.

pub mod ids;
pub mod team;
pub mod time;

pub use ids::{PlayerKey, StatId, TeamKey};
pub use team::TeamAbbr;
pub use time::{Season, Week};
