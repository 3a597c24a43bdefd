//! Age band classifier for story requests.

use serde::{Deserialize, Serialize};

/// Target age band for a story, controlling vocabulary and complexity.
///
/// The wire representation matches the age range labels used by clients.
///
/// # Examples
///
/// ```
/// use cuentista_core::AgeBand;
/// use std::str::FromStr;
///
/// let band = AgeBand::from_str("6-8").unwrap();
/// assert_eq!(band, AgeBand::EarlyPrimary);
/// assert_eq!(band.as_str(), "6-8");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum AgeBand {
    /// Preschool readers, ages 3 to 5
    #[serde(rename = "3-5")]
    #[strum(serialize = "3-5")]
    Preschool,
    /// Early primary readers, ages 6 to 8
    #[serde(rename = "6-8")]
    #[strum(serialize = "6-8")]
    EarlyPrimary,
    /// Late primary readers, ages 9 to 12
    #[serde(rename = "9-12")]
    #[strum(serialize = "9-12")]
    LatePrimary,
}

impl AgeBand {
    /// The wire label for this band.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBand::Preschool => "3-5",
            AgeBand::EarlyPrimary => "6-8",
            AgeBand::LatePrimary => "9-12",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_wire_labels() {
        assert_eq!(AgeBand::from_str("3-5").unwrap(), AgeBand::Preschool);
        assert_eq!(AgeBand::from_str("9-12").unwrap(), AgeBand::LatePrimary);
        assert!(AgeBand::from_str("13-99").is_err());
    }

    #[test]
    fn display_round_trips() {
        for band in [AgeBand::Preschool, AgeBand::EarlyPrimary, AgeBand::LatePrimary] {
            assert_eq!(AgeBand::from_str(&band.to_string()).unwrap(), band);
        }
    }
}
