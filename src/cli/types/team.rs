//! Professional team abbreviation type.

use crate::error::{BballError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Uppercase-normalized professional team abbreviation (e.g. `GSW`, `NY`).
///
/// The feed reports abbreviations in mixed case while the schedule is keyed
/// in uppercase, so every construction path uppercases. Deserialization is
/// lenient (feed data is taken as-is apart from case); [`FromStr`] is used
/// for user input and also checks the value is 2-3 ASCII letters.
///
/// # Examples
///
/// ```rust
/// use bball_weekly::TeamAbbr;
///
/// let abbr = TeamAbbr::new("gsw");
/// assert_eq!(abbr.as_str(), "GSW");
/// assert!("lakers".parse::<TeamAbbr>().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TeamAbbr(String);

impl TeamAbbr {
    pub fn new(abbr: impl AsRef<str>) -> Self {
        Self(abbr.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TeamAbbr {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<TeamAbbr> for String {
    fn from(abbr: TeamAbbr) -> Self {
        abbr.0
    }
}

impl fmt::Display for TeamAbbr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamAbbr {
    type Err = BballError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let valid = (2..=3).contains(&trimmed.len())
            && trimmed.chars().all(|c| c.is_ascii_alphabetic());
        if !valid {
            return Err(BballError::InvalidTeamAbbr {
                abbr: s.to_string(),
            });
        }
        Ok(Self::new(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uppercases() {
        assert_eq!(TeamAbbr::new("lal").as_str(), "LAL");
        assert_eq!(TeamAbbr::new(" Gs ").as_str(), "GS");
    }

    #[test]
    fn test_deserialize_uppercases() {
        let abbr: TeamAbbr = serde_json::from_str("\"phi\"").unwrap();
        assert_eq!(abbr, TeamAbbr::new("PHI"));
    }

    #[test]
    fn test_serialize_as_plain_string() {
        let json = serde_json::to_string(&TeamAbbr::new("bos")).unwrap();
        assert_eq!(json, "\"BOS\"");
    }

    #[test]
    fn test_from_str_validation() {
        assert_eq!("sa".parse::<TeamAbbr>().unwrap().as_str(), "SA");
        assert_eq!("Mil".parse::<TeamAbbr>().unwrap().as_str(), "MIL");
        assert!("L".parse::<TeamAbbr>().is_err());
        assert!("LAKE".parse::<TeamAbbr>().is_err());
        assert!("L4".parse::<TeamAbbr>().is_err());
    }
}
