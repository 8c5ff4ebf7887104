use serde::{Deserialize, Serialize};

/// Retail seasons used to scope the association dataset
///
/// The wire representation is the season number (1..=4): it is sent as the
/// `season` query parameter and indexes the pre-rendered chart assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// Season number used on the wire and in chart asset names
    pub fn number(&self) -> u8 {
        match self {
            Season::Winter => 1,
            Season::Spring => 2,
            Season::Summer => 3,
            Season::Autumn => 4,
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
        }
    }

    /// All seasons in the order the picker shows them
    pub fn all() -> Vec<Season> {
        vec![Season::Spring, Season::Summer, Season::Autumn, Season::Winter]
    }

    /// Parse a season number (1..=4)
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Season::Winter),
            2 => Some(Season::Spring),
            3 => Some(Season::Summer),
            4 => Some(Season::Autumn),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Season {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Season::from_number(value).ok_or_else(|| format!("unknown season number: {}", value))
    }
}

impl From<Season> for u8 {
    fn from(season: Season) -> u8 {
        season.number()
    }
}
