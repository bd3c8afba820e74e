use serde::{Deserialize, Serialize};

/// One of the two sides of a pickup match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Team {
    Yellow,
    Blue,
}

impl Team {
    /// Display label used in exported match logs.
    pub fn label(self) -> &'static str {
        match self {
            Team::Yellow => "Żółci",
            Team::Blue => "Niebiescy",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_team_names_round_trip_through_strum() {
        assert_eq!(Team::Yellow.to_string(), "yellow");
        assert_eq!(Team::from_str("blue").unwrap(), Team::Blue);
        assert!(Team::from_str("red").is_err());
    }

    #[test]
    fn test_iteration_order_is_yellow_first() {
        let teams: Vec<Team> = Team::iter().collect();
        assert_eq!(teams, vec![Team::Yellow, Team::Blue]);
    }
}
