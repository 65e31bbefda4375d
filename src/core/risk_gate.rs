use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::config::Config;
use crate::core::behavior::{self, BehavioralEquity, TiltScore};
use crate::core::exchange_clock::ExchangeClock;
use crate::models::{BiometricVerdict, DailyObservation, IbWidth, TradeRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizingTier {
    A,
    B,
    C,
}

impl SizingTier {
    pub const ALL: [SizingTier; 3] = [SizingTier::A, SizingTier::B, SizingTier::C];

    pub fn label(&self) -> &'static str {
        match self {
            SizingTier::A => "max size",
            SizingTier::B => "normal size",
            SizingTier::C => "half size / scalp",
        }
    }
}

impl fmt::Display for SizingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tier = match self {
            SizingTier::A => "A",
            SizingTier::B => "B",
            SizingTier::C => "C",
        };
        write!(f, "Tier {} ({})", tier, self.label())
    }
}

/// Why a tier is unavailable. Only the first gate that fires is reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GateLock {
    CriticalVeto { trade_id: u64 },
    KillSwitch,
    BelowBeFloor { equity: f64, floor: f64 },
}

impl fmt::Display for GateLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateLock::CriticalVeto { trade_id } => {
                write!(f, "stop-loss sabotage on trade #{}: all tiers locked", trade_id)
            }
            GateLock::KillSwitch => write!(f, "narrow IB past the cutoff: all tiers locked"),
            GateLock::BelowBeFloor { equity, floor } => {
                write!(f, "behavioural equity {:.1} below {:.0}: Tier A locked", equity, floor)
            }
        }
    }
}

pub struct RiskInputs<'a> {
    pub now: DateTime<Utc>,
    pub daily: Option<&'a DailyObservation>,
    pub trades: &'a [TradeRecord],
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub permitted: Vec<SizingTier>,
    pub lock: Option<GateLock>,
    pub tilt: TiltScore,
    pub equity: BehavioralEquity,
    pub trades_today: usize,
}

impl RiskAssessment {
    pub fn is_permitted(&self, tier: SizingTier) -> bool {
        self.permitted.contains(&tier)
    }

    pub fn all_locked(&self) -> bool {
        self.permitted.is_empty()
    }

    /// Reconciles the trader's current tier with the gate. A locked Tier A drops to
    /// Tier B when B is still open; any other locked selection is cleared.
    pub fn resolve_selection(&self, selected: Option<SizingTier>) -> Option<SizingTier> {
        let tier = selected?;
        if self.is_permitted(tier) {
            Some(tier)
        } else if tier == SizingTier::A && self.is_permitted(SizingTier::B) {
            Some(SizingTier::B)
        } else {
            None
        }
    }
}

/// Behavioural sizing gate. Gates run in a fixed order and the first one to fire wins:
/// critical-error veto, narrow-IB kill-switch, behavioural-equity floor.
pub struct RiskGate {
    clock: ExchangeClock,
    cfg: Config,
}

impl RiskGate {
    pub fn new(cfg: &Config) -> Self {
        Self {
            clock: ExchangeClock::new(cfg),
            cfg: cfg.clone(),
        }
    }

    /// Most recent trade with a critical execution error inside the veto window.
    pub fn critical_veto<'t>(&self, trades: &'t [TradeRecord]) -> Option<&'t TradeRecord> {
        let mut ordered: Vec<&TradeRecord> = trades.iter().collect();
        ordered.sort_by_key(|t| t.executed_at);
        ordered
            .into_iter()
            .rev()
            .take(self.cfg.veto_lookback)
            .find(|t| t.error.is_critical())
    }

    /// Narrow IB on the current trading day, at or after the cutoff. A stale daily
    /// observation never engages it.
    pub fn kill_switch_engaged(
        &self,
        daily: Option<&DailyObservation>,
        now: DateTime<Utc>,
    ) -> bool {
        let today = self.clock.trading_date(now);
        daily.is_some_and(|d| d.date == today && d.ib_width == IbWidth::Narrow)
            && self.clock.is_past_cutoff(now)
    }

    pub fn assess(&self, inputs: &RiskInputs<'_>) -> RiskAssessment {
        let today = self.clock.trading_date(inputs.now);
        let mut todays: Vec<&TradeRecord> = inputs
            .trades
            .iter()
            .filter(|t| t.trade_date(&self.clock.timezone()) == today)
            .collect();
        todays.sort_by_key(|t| t.executed_at);

        let biometric = inputs
            .daily
            .map_or(BiometricVerdict::None_, |d| d.prep.biometric);
        let tilt = behavior::tilt_score(&todays, biometric, &self.cfg);
        let equity = behavior::behavioral_equity(inputs.trades);

        let lock = if let Some(trade) = self.critical_veto(inputs.trades) {
            warn!(trade_id = trade.id, "critical execution error veto, all tiers locked");
            Some(GateLock::CriticalVeto { trade_id: trade.id })
        } else if self.kill_switch_engaged(inputs.daily, inputs.now) {
            warn!(cutoff = %self.cfg.kill_switch_cutoff, "narrow IB kill-switch engaged");
            Some(GateLock::KillSwitch)
        } else if equity.equity < self.cfg.be_floor {
            Some(GateLock::BelowBeFloor {
                equity: equity.equity,
                floor: self.cfg.be_floor,
            })
        } else {
            None
        };

        let permitted = match lock {
            Some(GateLock::CriticalVeto { .. }) | Some(GateLock::KillSwitch) => Vec::new(),
            Some(GateLock::BelowBeFloor { .. }) => vec![SizingTier::B, SizingTier::C],
            None => SizingTier::ALL.to_vec(),
        };

        debug!(
            permitted = ?permitted,
            tilt = tilt.score,
            equity = equity.equity,
            trades_today = todays.len(),
            "risk gate assessed"
        );

        RiskAssessment {
            permitted,
            lock,
            tilt,
            equity,
            trades_today: todays.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionError;
    use crate::test_helpers::{make_trade, trade_at, utc};

    fn strong_history() -> Vec<TradeRecord> {
        // 2000 pnl * 0.1 + 5 * 150 = 950
        vec![make_trade(1, 1500.0, 5), make_trade(2, 500.0, 5)]
    }

    fn narrow_day() -> DailyObservation {
        let mut day = DailyObservation::new(utc(2026, 10, 15, 0, 0).date_naive());
        day.ib_width = IbWidth::Narrow;
        day
    }

    #[test]
    fn clean_history_permits_every_tier() {
        let gate = RiskGate::new(&Config::default());
        let trades = strong_history();
        let a = gate.assess(&RiskInputs {
            now: utc(2026, 10, 15, 14, 0),
            daily: None,
            trades: &trades,
        });
        assert_eq!(a.permitted, SizingTier::ALL.to_vec());
        assert!(a.lock.is_none());
    }

    #[test]
    fn low_equity_locks_only_tier_a() {
        let gate = RiskGate::new(&Config::default());
        let trades = [make_trade(1, 100.0, 3)];
        let a = gate.assess(&RiskInputs {
            now: utc(2026, 10, 15, 14, 0),
            daily: None,
            trades: &trades,
        });
        assert_eq!(a.permitted, vec![SizingTier::B, SizingTier::C]);
        assert!(matches!(a.lock, Some(GateLock::BelowBeFloor { .. })));
        assert_eq!(a.resolve_selection(Some(SizingTier::A)), Some(SizingTier::B));
        assert_eq!(a.resolve_selection(Some(SizingTier::C)), Some(SizingTier::C));
        assert_eq!(a.resolve_selection(None), None);
    }

    #[test]
    fn veto_dominates_everything() {
        let gate = RiskGate::new(&Config::default());
        let mut trades = strong_history();
        let mut sabotage = make_trade(3, 50.0, 5);
        sabotage.error = ExecutionError::StopLossSabotage;
        trades.push(sabotage);
        let day = narrow_day();
        let a = gate.assess(&RiskInputs {
            now: utc(2026, 10, 15, 16, 0),
            daily: Some(&day),
            trades: &trades,
        });
        assert!(a.all_locked());
        assert_eq!(a.lock, Some(GateLock::CriticalVeto { trade_id: 3 }));
        assert_eq!(a.resolve_selection(Some(SizingTier::A)), None);
    }

    #[test]
    fn veto_window_covers_five_most_recent_by_time() {
        let gate = RiskGate::new(&Config::default());
        let mut old = trade_at(99, 10.0, utc(2026, 10, 1, 14, 0));
        old.error = ExecutionError::StopLossSabotage;
        // Listed last but executed first: five newer trades push it out of the window.
        let mut trades: Vec<TradeRecord> = (1..=5).map(|i| make_trade(i, 300.0, 5)).collect();
        trades.push(old);
        assert!(gate.critical_veto(&trades).is_none());

        trades.truncate(4);
        let mut old = trade_at(99, 10.0, utc(2026, 10, 1, 14, 0));
        old.error = ExecutionError::StopLossSabotage;
        trades.push(old);
        assert_eq!(gate.critical_veto(&trades).map(|t| t.id), Some(99));
    }

    #[test]
    fn kill_switch_dominates_tier_checks() {
        let gate = RiskGate::new(&Config::default());
        let trades = [make_trade(1, 10.0, 1)];
        let day = narrow_day();
        let a = gate.assess(&RiskInputs {
            now: utc(2026, 10, 15, 15, 0), // 11:00 New York
            daily: Some(&day),
            trades: &trades,
        });
        assert!(a.all_locked());
        assert_eq!(a.lock, Some(GateLock::KillSwitch));
    }

    #[test]
    fn kill_switch_needs_narrow_ib_and_cutoff() {
        let gate = RiskGate::new(&Config::default());
        let day = narrow_day();
        assert!(!gate.kill_switch_engaged(Some(&day), utc(2026, 10, 15, 14, 59)));
        assert!(!gate.kill_switch_engaged(None, utc(2026, 10, 15, 16, 0)));
        let normal = DailyObservation::new(day.date);
        assert!(!gate.kill_switch_engaged(Some(&normal), utc(2026, 10, 15, 16, 0)));
    }

    #[test]
    fn kill_switch_ignores_previous_day_observation() {
        let gate = RiskGate::new(&Config::default());
        let day = narrow_day();
        assert!(gate.kill_switch_engaged(Some(&day), utc(2026, 10, 15, 16, 0)));
        assert!(!gate.kill_switch_engaged(Some(&day), utc(2026, 10, 16, 16, 0)));

        let trades = strong_history();
        let a = gate.assess(&RiskInputs {
            now: utc(2026, 10, 16, 16, 0),
            daily: Some(&day),
            trades: &trades,
        });
        assert_eq!(a.lock, None);
        assert!(a.is_permitted(SizingTier::A));
    }

    #[test]
    fn tilt_only_counts_todays_trades() {
        let gate = RiskGate::new(&Config::default());
        let mut trades: Vec<TradeRecord> = (1..=4).map(|i| make_trade(i, -100.0, 3)).collect();
        trades.push(trade_at(10, -100.0, utc(2026, 10, 14, 15, 0)));
        let a = gate.assess(&RiskInputs {
            now: utc(2026, 10, 15, 18, 0),
            daily: None,
            trades: &trades,
        });
        assert_eq!(a.trades_today, 4);
        // 12 overtrading + 32 loss pressure + 30 streak + 5 missing check-in
        assert_eq!(a.tilt.score, 79.0);
    }
}
