use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ProtocolError;

/// ISO-8601 week identifier, rendered as `2026-W42`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekId {
    pub year: i32,
    pub week: u32,
}

impl WeekId {
    pub fn new(year: i32, week: u32) -> Result<Self, ProtocolError> {
        // Week 53 only exists in long ISO years; Dec 28 always falls in the last week.
        let last_week = NaiveDate::from_ymd_opt(year, 12, 28)
            .map(|d| d.iso_week().week())
            .ok_or_else(|| ProtocolError::InvalidWeekId(format!("{year}-W{week:02}")))?;
        if week == 0 || week > last_week {
            return Err(ProtocolError::InvalidWeekId(format!("{year}-W{week:02}")));
        }
        Ok(Self { year, week })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// Monday of this ISO week.
    pub fn monday(&self) -> Option<NaiveDate> {
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}

impl FromStr for WeekId {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ProtocolError::InvalidWeekId(s.to_string());
        let (year, week) = s.trim().split_once("-W").ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let week: u32 = week.parse().map_err(|_| invalid())?;
        Self::new(year, week)
    }
}

impl TryFrom<String> for WeekId {
    type Error = ProtocolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WeekId> for String {
    fn from(id: WeekId) -> Self {
        id.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeeklyTrend {
    Up,
    Down,
    Balance,
    InsideWeek,
    #[default]
    #[serde(rename = "None", other)]
    None_,
}

impl WeeklyTrend {
    pub fn sign(self) -> i8 {
        match self {
            WeeklyTrend::Up => 1,
            WeeklyTrend::Down => -1,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeekOpen {
    GapUp,
    GapDown,
    OpenDriveUp,
    OpenDriveDown,
    OutsideValue,
    InsideValue,
    #[default]
    #[serde(rename = "None", other)]
    None_,
}

impl WeekOpen {
    pub fn sign(self) -> i8 {
        match self {
            WeekOpen::GapUp | WeekOpen::OpenDriveUp => 1,
            WeekOpen::GapDown | WeekOpen::OpenDriveDown => -1,
            _ => 0,
        }
    }
}

/// Weekly value-area migration relative to the prior week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ValueShift {
    Higher,
    Lower,
    Unchanged,
    #[default]
    #[serde(rename = "None", other)]
    None_,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StructureQuality {
    Poor,
    #[default]
    #[serde(other)]
    Secure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VolumeTrend {
    Increasing,
    #[default]
    #[serde(other)]
    Average,
}

/// Scheduled-event impact tier, 0 (quiet) to 3 (high). Out-of-range input clamps to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum NewsImpact {
    #[default]
    Quiet,
    Low,
    Medium,
    High,
}

impl From<u8> for NewsImpact {
    fn from(tier: u8) -> Self {
        match tier {
            0 => NewsImpact::Quiet,
            1 => NewsImpact::Low,
            2 => NewsImpact::Medium,
            _ => NewsImpact::High,
        }
    }
}

impl From<NewsImpact> for u8 {
    fn from(impact: NewsImpact) -> Self {
        impact as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsEvent {
    pub title: String,
    #[serde(default)]
    pub impact: NewsImpact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsDay {
    pub day: Weekday,
    #[serde(default)]
    pub events: Vec<NewsEvent>,
}

/// The trader's weekly macro read. One per ISO week, amendable until the week rolls over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyObservation {
    pub week_id: WeekId,
    #[serde(default)]
    pub trend: WeeklyTrend,
    #[serde(default)]
    pub week_open: WeekOpen,
    #[serde(default)]
    pub migration: ValueShift,
    #[serde(default)]
    pub high_structure: StructureQuality,
    #[serde(default)]
    pub low_structure: StructureQuality,
    #[serde(default)]
    pub volume: VolumeTrend,
    #[serde(default)]
    pub news: Vec<NewsDay>,
}

impl WeeklyObservation {
    pub fn new(week_id: WeekId) -> Self {
        Self {
            week_id,
            trend: WeeklyTrend::default(),
            week_open: WeekOpen::default(),
            migration: ValueShift::default(),
            high_structure: StructureQuality::default(),
            low_structure: StructureQuality::default(),
            volume: VolumeTrend::default(),
            news: Vec::new(),
        }
    }

    pub fn max_news_impact(&self) -> NewsImpact {
        self.news
            .iter()
            .flat_map(|d| d.events.iter())
            .map(|e| e.impact)
            .max()
            .unwrap_or_default()
    }
}

/// Finds the observation anchoring the ISO week that contains `date`.
pub fn anchor_for(weeks: &[WeeklyObservation], date: NaiveDate) -> Option<&WeeklyObservation> {
    let id = WeekId::from_date(date);
    weeks.iter().find(|w| w.week_id == id)
}
