use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::trade::ExecutionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketContext {
    Balance,
    Imbalance,
    Transition,
    #[default]
    #[serde(other)]
    Undefined,
}

/// Where the session opened relative to the prior day's value and range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpeningContext {
    InsideValue,
    OutsideValue,
    OutsideRange,
    #[default]
    #[serde(other)]
    Undefined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OpenType {
    Drive,
    #[serde(rename = "Test driver")]
    TestDrive,
    #[serde(rename = "Rejection-Reversal")]
    RejectionReversal,
    Auction,
    #[default]
    #[serde(rename = "UNDEFINED", other)]
    Undefined,
}

impl OpenType {
    pub fn is_directional(self) -> bool {
        matches!(self, OpenType::Drive | OpenType::TestDrive)
    }
}

impl fmt::Display for OpenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OpenType::Drive => "Open-Drive",
            OpenType::TestDrive => "Open-Test-Drive",
            OpenType::RejectionReversal => "Open-Rejection-Reversal",
            OpenType::Auction => "Open-Auction",
            OpenType::Undefined => "undefined open",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IbWidth {
    Narrow,
    Wide,
    #[default]
    #[serde(other)]
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RangeExtension {
    Up,
    Down,
    Both,
    #[default]
    #[serde(rename = "None", other)]
    None_,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelativeVolume {
    AboveAvg,
    Avg,
    BelowAvg,
    #[default]
    #[serde(other)]
    Undefined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipantControl {
    Otf,
    Locals,
    Mixed,
    #[default]
    #[serde(other)]
    Undefined,
}

/// Overlap between today's developing value and the prior day's value area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ValueOverlap {
    #[serde(rename = "No overlapping")]
    NoOverlap,
    #[serde(rename = "Minimum overlap")]
    Minimum,
    #[serde(rename = "High overlap")]
    High,
    #[serde(rename = "Full overlap")]
    Full,
    #[default]
    #[serde(rename = "ANY", other)]
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ValueMigration {
    #[serde(rename = "Migrating outside")]
    MigratingOutside,
    #[serde(rename = "Migration to pdValue")]
    ToPriorValue,
    #[serde(rename = "None")]
    None_,
    #[default]
    #[serde(rename = "ANY", other)]
    Any,
}

/// Today's range measured against the prior day's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RangeVsPriorDay {
    Inside,
    Outside,
    ExtendedHigher,
    ExtendedLower,
    #[default]
    #[serde(other)]
    Undefined,
}

/// Overnight inventory carried into the open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Inventory {
    FullyLong,
    FullyShort,
    #[default]
    #[serde(other)]
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SinglePrints {
    Above,
    Below,
    #[default]
    #[serde(rename = "None", other)]
    None_,
}

/// Prior-day value-area edge that has not been revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VaEdge {
    High,
    Low,
    #[default]
    #[serde(rename = "None", other)]
    None_,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Anomalies {
    pub naked_poc: bool,
    pub untested_va_edge: VaEdge,
    pub poor_high: bool,
    pub poor_low: bool,
    pub single_prints: SinglePrints,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BiometricVerdict {
    Go,
    Caution,
    Stop,
    #[default]
    #[serde(rename = "None", other)]
    None_,
}

impl fmt::Display for BiometricVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BiometricVerdict::Go => write!(f, "go"),
            BiometricVerdict::Caution => write!(f, "caution"),
            BiometricVerdict::Stop => write!(f, "stop"),
            BiometricVerdict::None_ => write!(f, "none"),
        }
    }
}

/// Check-in and pre-fight commitments recorded before the open.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyPrep {
    pub biometric: BiometricVerdict,
    pub uncertainty_accepted: bool,
    pub max_loss_accepted: bool,
    pub no_revenge_pledged: bool,
    pub rules_reviewed: bool,
    pub risk_amount: f64,
    /// The execution error the trader commits to watching for today.
    pub focus_error: ExecutionError,
}

impl DailyPrep {
    pub fn pre_fight_complete(&self) -> bool {
        self.uncertainty_accepted
            && self.max_loss_accepted
            && self.no_revenge_pledged
            && self.rules_reviewed
            && self.risk_amount > 0.0
            && self.focus_error != ExecutionError::None_
    }
}

/// One trading day's scanner form. Amended through the day as stages complete.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyObservation {
    pub date: NaiveDate,
    pub market_context: MarketContext,
    pub opening_context: OpeningContext,
    pub open_type: OpenType,
    pub ib_width: IbWidth,
    pub range_extension: RangeExtension,
    pub relative_volume: RelativeVolume,
    pub participant_control: ParticipantControl,
    pub value_overlap: ValueOverlap,
    pub value_migration: ValueMigration,
    pub range_vs_prior_day: RangeVsPriorDay,
    pub inventory: Inventory,
    pub anomalies: Anomalies,
    pub setup: Option<String>,
    pub narrative: String,
    pub prep: DailyPrep,
}

impl DailyObservation {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            ..Default::default()
        }
    }

    pub fn scanner_complete(&self) -> bool {
        self.market_context != MarketContext::Undefined
            && self.participant_control != ParticipantControl::Undefined
    }

    pub fn selected_setup(&self) -> Option<&str> {
        self.setup
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("none"))
    }
}
