//! Behavioural scoring: the intraday tilt score and the long-run behavioural equity
//! that drives the handicap tier.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Config;
use crate::models::{BiometricVerdict, TradeRecord};

const OVERTRADE_POINTS: f64 = 12.0;
const LOSS_PRESSURE_CAP: f64 = 40.0;
const LOSS_STREAK_POINTS: f64 = 10.0;
const PNL_WEIGHT: f64 = 0.1;
const DISCIPLINE_WEIGHT: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiltLabel {
    Calm,
    Elevated,
    Tilting,
    Critical,
}

impl TiltLabel {
    pub fn from_score(score: f64) -> Self {
        if score < 25.0 {
            TiltLabel::Calm
        } else if score < 50.0 {
            TiltLabel::Elevated
        } else if score < 75.0 {
            TiltLabel::Tilting
        } else {
            TiltLabel::Critical
        }
    }
}

impl fmt::Display for TiltLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TiltLabel::Calm => write!(f, "calm"),
            TiltLabel::Elevated => write!(f, "elevated"),
            TiltLabel::Tilting => write!(f, "tilting"),
            TiltLabel::Critical => write!(f, "critical"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TiltScore {
    pub score: f64,
    pub label: TiltLabel,
    pub overtrading: f64,
    pub loss_pressure: f64,
    pub loss_streak: f64,
    pub biometric: f64,
}

/// Length of the losing run at the end of `trades` (already in execution order).
pub fn trailing_loss_streak(trades: &[&TradeRecord]) -> usize {
    trades.iter().rev().take_while(|t| t.pnl < 0.0).count()
}

fn biometric_points(verdict: BiometricVerdict) -> f64 {
    match verdict {
        BiometricVerdict::Go => 0.0,
        BiometricVerdict::Caution => 10.0,
        BiometricVerdict::Stop => 25.0,
        // Skipping the check-in is itself a warning sign.
        BiometricVerdict::None_ => 5.0,
    }
}

/// Advisory tilt score over today's trades in execution order. Clamped to 0..=100.
pub fn tilt_score(today: &[&TradeRecord], biometric: BiometricVerdict, cfg: &Config) -> TiltScore {
    let extra_trades = today.len().saturating_sub(cfg.free_trades_per_day);
    let overtrading = extra_trades as f64 * OVERTRADE_POINTS;

    let net: f64 = today.iter().map(|t| t.pnl).sum();
    let loss_pressure = if net < 0.0 && cfg.max_daily_loss > 0.0 {
        (-net / cfg.max_daily_loss * LOSS_PRESSURE_CAP).min(LOSS_PRESSURE_CAP)
    } else {
        0.0
    };

    let streak = trailing_loss_streak(today);
    let loss_streak = streak.saturating_sub(1) as f64 * LOSS_STREAK_POINTS;

    let biometric = biometric_points(biometric);
    let score = (overtrading + loss_pressure + loss_streak + biometric).clamp(0.0, 100.0);

    TiltScore {
        score,
        label: TiltLabel::from_score(score),
        overtrading,
        loss_pressure,
        loss_streak,
        biometric,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandicapTier {
    Probation,
    Developing,
    Steady,
    Elite,
}

impl HandicapTier {
    pub fn from_equity(equity: f64) -> Self {
        if equity >= 900.0 {
            HandicapTier::Elite
        } else if equity >= 600.0 {
            HandicapTier::Steady
        } else if equity >= 300.0 {
            HandicapTier::Developing
        } else {
            HandicapTier::Probation
        }
    }
}

impl fmt::Display for HandicapTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandicapTier::Probation => write!(f, "probation"),
            HandicapTier::Developing => write!(f, "developing"),
            HandicapTier::Steady => write!(f, "steady"),
            HandicapTier::Elite => write!(f, "elite"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehavioralEquity {
    pub equity: f64,
    pub pnl_component: f64,
    pub mean_discipline: f64,
    pub tier: HandicapTier,
}

/// `sum(pnl * 0.1) + mean(discipline) * 150`; mean discipline is zero without trades.
pub fn behavioral_equity(trades: &[TradeRecord]) -> BehavioralEquity {
    let pnl_component: f64 = trades.iter().map(|t| t.pnl * PNL_WEIGHT).sum();
    let mean_discipline = if trades.is_empty() {
        0.0
    } else {
        trades.iter().map(|t| f64::from(t.discipline_score())).sum::<f64>() / trades.len() as f64
    };
    let equity = pnl_component + mean_discipline * DISCIPLINE_WEIGHT;

    BehavioralEquity {
        equity,
        pnl_component,
        mean_discipline,
        tier: HandicapTier::from_equity(equity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::make_trade;

    #[test]
    fn calm_day_scores_zero() {
        let trades = [make_trade(1, 120.0, 4), make_trade(2, -50.0, 4)];
        let refs: Vec<&TradeRecord> = trades.iter().collect();
        let tilt = tilt_score(&refs, BiometricVerdict::Go, &Config::default());
        // net +70, one trailing loss
        assert_eq!(tilt.score, 0.0);
        assert_eq!(tilt.label, TiltLabel::Calm);
    }

    #[test]
    fn components_add_up() {
        let trades: Vec<TradeRecord> = (1..=5).map(|i| make_trade(i, -50.0, 2)).collect();
        let refs: Vec<&TradeRecord> = trades.iter().collect();
        let tilt = tilt_score(&refs, BiometricVerdict::Caution, &Config::default());
        assert_eq!(tilt.overtrading, 24.0); // 2 beyond the free three
        assert_eq!(tilt.loss_pressure, 20.0); // 250 of 500
        assert_eq!(tilt.loss_streak, 40.0); // 5 losses in a row
        assert_eq!(tilt.biometric, 10.0);
        assert_eq!(tilt.score, 94.0);
        assert_eq!(tilt.label, TiltLabel::Critical);
    }

    #[test]
    fn score_is_clamped() {
        let trades: Vec<TradeRecord> = (1..=10).map(|i| make_trade(i, -300.0, 1)).collect();
        let refs: Vec<&TradeRecord> = trades.iter().collect();
        let tilt = tilt_score(&refs, BiometricVerdict::Stop, &Config::default());
        assert_eq!(tilt.loss_pressure, 40.0);
        assert_eq!(tilt.score, 100.0);
    }

    #[test]
    fn missing_check_in_costs_points() {
        let tilt = tilt_score(&[], BiometricVerdict::None_, &Config::default());
        assert_eq!(tilt.score, 5.0);
    }

    #[test]
    fn label_boundaries() {
        assert_eq!(TiltLabel::from_score(24.9), TiltLabel::Calm);
        assert_eq!(TiltLabel::from_score(25.0), TiltLabel::Elevated);
        assert_eq!(TiltLabel::from_score(50.0), TiltLabel::Tilting);
        assert_eq!(TiltLabel::from_score(75.0), TiltLabel::Critical);
    }

    #[test]
    fn equity_without_trades_is_probation() {
        let be = behavioral_equity(&[]);
        assert_eq!(be.equity, 0.0);
        assert_eq!(be.tier, HandicapTier::Probation);
    }

    #[test]
    fn equity_blends_pnl_and_discipline() {
        let trades = [make_trade(1, 1000.0, 4), make_trade(2, -200.0, 4)];
        let be = behavioral_equity(&trades);
        // 80 + 4 * 150
        assert!((be.equity - 680.0).abs() < 1e-9);
        assert_eq!(be.tier, HandicapTier::Steady);
    }

    #[test]
    fn handicap_boundaries() {
        assert_eq!(HandicapTier::from_equity(900.0), HandicapTier::Elite);
        assert_eq!(HandicapTier::from_equity(899.9), HandicapTier::Steady);
        assert_eq!(HandicapTier::from_equity(300.0), HandicapTier::Developing);
        assert_eq!(HandicapTier::from_equity(-10.0), HandicapTier::Probation);
    }
}
