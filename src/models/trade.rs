use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Direction;

/// How a trade deviated from the plan, as classified by the trader afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionError {
    FomoEntry,
    RevengeTrade,
    Oversized,
    /// Stop-loss dragged to break-even before the trade had earned it.
    StopLossSabotage,
    EarlyExit,
    LateEntry,
    NoStopLoss,
    AveragingDown,
    Overtrading,
    #[default]
    #[serde(rename = "none", other)]
    None_,
}

impl ExecutionError {
    pub const ALL: [ExecutionError; 9] = [
        ExecutionError::FomoEntry,
        ExecutionError::RevengeTrade,
        ExecutionError::Oversized,
        ExecutionError::StopLossSabotage,
        ExecutionError::EarlyExit,
        ExecutionError::LateEntry,
        ExecutionError::NoStopLoss,
        ExecutionError::AveragingDown,
        ExecutionError::Overtrading,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionError::FomoEntry => "fomo_entry",
            ExecutionError::RevengeTrade => "revenge_trade",
            ExecutionError::Oversized => "oversized",
            ExecutionError::StopLossSabotage => "stop_loss_sabotage",
            ExecutionError::EarlyExit => "early_exit",
            ExecutionError::LateEntry => "late_entry",
            ExecutionError::NoStopLoss => "no_stop_loss",
            ExecutionError::AveragingDown => "averaging_down",
            ExecutionError::Overtrading => "overtrading",
            ExecutionError::None_ => "none",
        }
    }

    pub fn is_critical(self) -> bool {
        self == ExecutionError::StopLossSabotage
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn default_discipline() -> u8 {
    3
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: u64,
    pub instrument: String,
    pub side: Direction,
    pub size: f64,
    pub entry_price: f64,
    pub exit_price: f64,
    pub pnl: f64,
    /// Self-reported, 1 (impulsive) to 5 (by the book).
    #[serde(default = "default_discipline")]
    pub discipline: u8,
    #[serde(default)]
    pub error: ExecutionError,
    #[serde(default)]
    pub according_to_plan: bool,
    pub executed_at: DateTime<Utc>,
    #[serde(default)]
    pub setup: Option<String>,
}

impl TradeRecord {
    pub fn is_win(&self) -> bool {
        self.pnl > 0.0
    }

    /// Discipline clamped into the 1..=5 scale.
    pub fn discipline_score(&self) -> u8 {
        self.discipline.clamp(1, 5)
    }

    pub fn trade_date<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.executed_at.with_timezone(tz).date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::New_York;

    #[test]
    fn discipline_clamps_out_of_scale_values() {
        let json = r#"{"id":1,"instrument":"ES","side":"long","size":1,"entry_price":5000,
            "exit_price":5004,"pnl":200,"discipline":9,"executed_at":"2026-10-15T14:00:00Z"}"#;
        let t: TradeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(t.discipline_score(), 5);
        assert_eq!(t.error, ExecutionError::None_);
        assert!(t.is_win());
    }

    #[test]
    fn missing_discipline_defaults_to_neutral() {
        let json = r#"{"id":2,"instrument":"NQ","side":"short","size":2,"entry_price":18000,
            "exit_price":18010,"pnl":-400,"error":"stop_loss_sabotage","executed_at":"2026-10-15T14:00:00Z"}"#;
        let t: TradeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(t.discipline_score(), 3);
        assert!(t.error.is_critical());
    }

    #[test]
    fn trade_date_follows_exchange_timezone() {
        let json = r#"{"id":3,"instrument":"ES","side":"long","size":1,"entry_price":1,
            "exit_price":1,"pnl":0,"executed_at":"2026-10-16T02:00:00Z"}"#;
        let t: TradeRecord = serde_json::from_str(json).unwrap();
        // 02:00 UTC is still the previous evening in New York
        assert_eq!(t.trade_date(&New_York), NaiveDate::from_ymd_opt(2026, 10, 15).unwrap());
        assert_eq!(t.trade_date(&Utc), NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
    }

    #[test]
    fn nine_named_error_kinds() {
        assert_eq!(ExecutionError::ALL.len(), 9);
        assert!(!ExecutionError::ALL.contains(&ExecutionError::None_));
    }
}
