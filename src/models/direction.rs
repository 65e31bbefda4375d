use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Long => "long",
            Direction::Short => "short",
        }
    }
}

/// Directional bias derived from the weekly verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Bullish,
    Bearish,
    Neutral,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Bullish => write!(f, "bullish"),
            Trend::Bearish => write!(f, "bearish"),
            Trend::Neutral => write!(f, "neutral"),
        }
    }
}

impl Trend {
    pub fn to_direction(self) -> Option<Direction> {
        match self {
            Trend::Bullish => Some(Direction::Long),
            Trend::Bearish => Some(Direction::Short),
            Trend::Neutral => None,
        }
    }
}

/// Which side of the market a setup is traded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetupSide {
    Long,
    Short,
    Both,
}

impl SetupSide {
    pub fn allows(self, direction: Direction) -> bool {
        match self {
            SetupSide::Both => true,
            SetupSide::Long => direction == Direction::Long,
            SetupSide::Short => direction == Direction::Short,
        }
    }
}

impl fmt::Display for SetupSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupSide::Long => write!(f, "long"),
            SetupSide::Short => write!(f, "short"),
            SetupSide::Both => write!(f, "both"),
        }
    }
}
