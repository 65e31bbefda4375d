use chrono::NaiveTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};

const DEFAULT_TZ: Tz = chrono_tz::America::New_York;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Exchange clock
    pub exchange_timezone: Tz,
    /// Narrow-IB kill-switch engages after this exchange-local time.
    pub kill_switch_cutoff: NaiveTime,

    // Risk gate
    pub be_floor: f64,
    pub max_daily_loss: f64,
    pub free_trades_per_day: usize,
    pub veto_lookback: usize,

    // Scanner
    pub min_setup_score: i32,

    // Protocol
    pub strict_stage_order: bool,

    // Logging
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exchange_timezone: DEFAULT_TZ,
            kill_switch_cutoff: NaiveTime::from_hms_opt(11, 0, 0).unwrap_or_default(),
            be_floor: 600.0,
            max_daily_loss: 500.0,
            free_trades_per_day: 3,
            veto_lookback: 5,
            min_setup_score: 4,
            strict_stage_order: false,
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };
        let defaults = Config::default();

        Config {
            exchange_timezone: env("EXCHANGE_TZ", DEFAULT_TZ.name())
                .parse()
                .unwrap_or(DEFAULT_TZ),
            kill_switch_cutoff: parse_cutoff(&env("KILL_SWITCH_CUTOFF", "11:00"))
                .unwrap_or(defaults.kill_switch_cutoff),
            be_floor: env("BE_FLOOR", "600").parse().unwrap_or(defaults.be_floor),
            max_daily_loss: env("MAX_DAILY_LOSS", "500")
                .parse()
                .unwrap_or(defaults.max_daily_loss),
            free_trades_per_day: env("FREE_TRADES_PER_DAY", "3")
                .parse()
                .unwrap_or(defaults.free_trades_per_day),
            veto_lookback: env("VETO_LOOKBACK", "5")
                .parse()
                .unwrap_or(defaults.veto_lookback),
            min_setup_score: env("MIN_SETUP_SCORE", "4")
                .parse()
                .unwrap_or(defaults.min_setup_score),
            strict_stage_order: env("STRICT_STAGE_ORDER", "false").to_lowercase() == "true",
            log_level: env("LOG_LEVEL", "INFO"),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.max_daily_loss.is_finite() || self.max_daily_loss <= 0.0 {
            return Err(ProtocolError::InvalidConfig {
                key: "max_daily_loss",
                reason: format!("must be a positive amount, got {}", self.max_daily_loss),
            });
        }
        if !self.be_floor.is_finite() {
            return Err(ProtocolError::InvalidConfig {
                key: "be_floor",
                reason: "must be finite".to_string(),
            });
        }
        if self.veto_lookback == 0 {
            return Err(ProtocolError::InvalidConfig {
                key: "veto_lookback",
                reason: "must look back at least one trade".to_string(),
            });
        }
        Ok(())
    }
}

/// `HH:MM` or `HH:MM:SS`, exchange-local.
fn parse_cutoff(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cutoff_accepts_optional_seconds() {
        assert_eq!(parse_cutoff("10:45"), NaiveTime::from_hms_opt(10, 45, 0));
        assert_eq!(parse_cutoff("10:45:30"), NaiveTime::from_hms_opt(10, 45, 30));
        assert_eq!(parse_cutoff("quarter to eleven"), None);
    }

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.exchange_timezone, chrono_tz::America::New_York);
        assert_eq!(cfg.kill_switch_cutoff, NaiveTime::from_hms_opt(11, 0, 0).unwrap());
        assert_eq!(cfg.min_setup_score, 4);
    }

    #[test]
    fn rejects_non_positive_daily_loss() {
        let cfg = Config {
            max_daily_loss: 0.0,
            ..Config::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidConfig { key: "max_daily_loss", .. }));
    }

    #[test]
    fn rejects_zero_veto_lookback() {
        let cfg = Config {
            veto_lookback: 0,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }
}
