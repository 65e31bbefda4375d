use chrono::{DateTime, TimeZone, Utc};
use protocol_engine::models::{
    Direction, ExecutionError, TradeRecord, ValueShift, WeekId, WeekOpen, WeeklyObservation,
    WeeklyTrend,
};

/// Journal snapshot as the persistence layer writes it: a trend day on 2026-10-15 with
/// every protocol stage filled in and a CPI print on Wednesday.
pub const TREND_DAY_SNAPSHOT: &str = r#"{
    "evaluated_at": "2026-10-15T14:30:00Z",
    "selected_tier": "A",
    "weeks": [{
        "week_id": "2026-W42",
        "trend": "Up",
        "week_open": "GapUp",
        "migration": "Higher",
        "high_structure": "Secure",
        "low_structure": "Secure",
        "volume": "Average",
        "news": [{"day": "Wed", "events": [{"title": "CPI", "impact": 3}]}]
    }],
    "daily": {
        "date": "2026-10-15",
        "market_context": "IMBALANCE",
        "opening_context": "OUTSIDE_VALUE",
        "open_type": "Drive",
        "ib_width": "Normal",
        "range_extension": "Up",
        "relative_volume": "ABOVE_AVG",
        "participant_control": "OTF",
        "value_overlap": "No overlapping",
        "value_migration": "Migrating outside",
        "range_vs_prior_day": "EXTENDED_HIGHER",
        "inventory": "BALANCED",
        "setup": "Open Drive Continuation",
        "prep": {
            "biometric": "Go",
            "uncertainty_accepted": true,
            "max_loss_accepted": true,
            "no_revenge_pledged": true,
            "rules_reviewed": true,
            "risk_amount": 300,
            "focus_error": "late_entry"
        }
    },
    "trades": [
        {"id": 1, "instrument": "ES", "side": "long", "size": 2, "entry_price": 5800,
         "exit_price": 5815, "pnl": 1500, "discipline": 5, "according_to_plan": true,
         "executed_at": "2026-10-15T13:45:00Z", "setup": "Open Drive Continuation"},
        {"id": 2, "instrument": "ES", "side": "long", "size": 1, "entry_price": 5820,
         "exit_price": 5816, "pnl": -200, "discipline": 4, "error": "early_exit",
         "executed_at": "2026-10-15T14:10:00Z"}
    ]
}"#;

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn week(trend: WeeklyTrend, open: WeekOpen, migration: ValueShift) -> WeeklyObservation {
    let mut obs = WeeklyObservation::new(WeekId::new(2026, 42).unwrap());
    obs.trend = trend;
    obs.week_open = open;
    obs.migration = migration;
    obs
}

pub fn trade(id: u64, pnl: f64, error: ExecutionError, executed_at: DateTime<Utc>) -> TradeRecord {
    TradeRecord {
        id,
        instrument: "NQ".to_string(),
        side: Direction::Short,
        size: 1.0,
        entry_price: 20000.0,
        exit_price: 20000.0 - pnl / 20.0,
        pnl,
        discipline: 4,
        error,
        according_to_plan: error == ExecutionError::None_,
        executed_at,
        setup: None,
    }
}
