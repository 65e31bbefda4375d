use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::models::{
    BiometricVerdict, DailyObservation, DailyPrep, Direction, ExecutionError, IbWidth, Inventory,
    MarketContext, OpenType, OpeningContext, ParticipantControl, RangeExtension, RangeVsPriorDay,
    RelativeVolume, StructureQuality, TradeRecord, ValueMigration, ValueOverlap, ValueShift,
    VolumeTrend, WeekId, WeekOpen, WeeklyObservation, WeeklyTrend,
};
use crate::strategies::weekly_matrix::{Regime, WeeklyVerdict};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

/// Weekly observation in 2026-W42 with the remaining inputs neutral.
pub fn weekly(trend: WeeklyTrend, open: WeekOpen, migration: ValueShift) -> WeeklyObservation {
    let mut obs = WeeklyObservation::new(WeekId::new(2026, 42).unwrap());
    obs.trend = trend;
    obs.week_open = open;
    obs.migration = migration;
    obs
}

/// Every combination of the scored weekly inputs, without news.
pub fn all_weekly_observations() -> Vec<WeeklyObservation> {
    let trends = [
        WeeklyTrend::Up,
        WeeklyTrend::Down,
        WeeklyTrend::Balance,
        WeeklyTrend::InsideWeek,
        WeeklyTrend::None_,
    ];
    let opens = [
        WeekOpen::GapUp,
        WeekOpen::GapDown,
        WeekOpen::OpenDriveUp,
        WeekOpen::OpenDriveDown,
        WeekOpen::OutsideValue,
        WeekOpen::InsideValue,
        WeekOpen::None_,
    ];
    let migrations = [
        ValueShift::Higher,
        ValueShift::Lower,
        ValueShift::Unchanged,
        ValueShift::None_,
    ];
    let qualities = [StructureQuality::Secure, StructureQuality::Poor];
    let volumes = [VolumeTrend::Average, VolumeTrend::Increasing];

    let mut out = Vec::new();
    for trend in trends {
        for open in opens {
            for migration in migrations {
                for high in qualities {
                    for low in qualities {
                        for volume in volumes {
                            let mut obs = weekly(trend, open, migration);
                            obs.high_structure = high;
                            obs.low_structure = low;
                            obs.volume = volume;
                            out.push(obs);
                        }
                    }
                }
            }
        }
    }
    out
}

pub fn neutral_verdict() -> WeeklyVerdict {
    WeeklyVerdict {
        week_id: WeekId::new(2026, 42).unwrap(),
        score: Decimal::ZERO,
        regime: Regime::Balance,
        tags: Vec::new(),
        steps: Vec::new(),
    }
}

/// Textbook balance day: inside value, auction open, full overlap, locals in control.
pub fn balance_day() -> DailyObservation {
    let mut day = DailyObservation::new(date(2026, 10, 15));
    day.market_context = MarketContext::Balance;
    day.opening_context = OpeningContext::InsideValue;
    day.open_type = OpenType::Auction;
    day.value_overlap = ValueOverlap::Full;
    day.value_migration = ValueMigration::None_;
    day.relative_volume = RelativeVolume::BelowAvg;
    day.participant_control = ParticipantControl::Locals;
    day
}

/// One-timeframe trend day driving up out of value.
pub fn trend_day() -> DailyObservation {
    let mut day = DailyObservation::new(date(2026, 10, 15));
    day.market_context = MarketContext::Imbalance;
    day.opening_context = OpeningContext::OutsideValue;
    day.open_type = OpenType::Drive;
    day.ib_width = IbWidth::Normal;
    day.range_extension = RangeExtension::Up;
    day.relative_volume = RelativeVolume::AboveAvg;
    day.participant_control = ParticipantControl::Otf;
    day.value_overlap = ValueOverlap::NoOverlap;
    day.value_migration = ValueMigration::MigratingOutside;
    day.range_vs_prior_day = RangeVsPriorDay::ExtendedHigher;
    day.inventory = Inventory::Balanced;
    day
}

/// Balance day with every protocol stage filled in.
pub fn prepared_day(d: NaiveDate) -> DailyObservation {
    let mut day = balance_day();
    day.date = d;
    day.prep = DailyPrep {
        biometric: BiometricVerdict::Go,
        uncertainty_accepted: true,
        max_loss_accepted: true,
        no_revenge_pledged: true,
        rules_reviewed: true,
        risk_amount: 250.0,
        focus_error: ExecutionError::FomoEntry,
    };
    day.setup = Some("Value Area Rotation".to_string());
    day
}

pub fn trade_at(id: u64, pnl: f64, executed_at: DateTime<Utc>) -> TradeRecord {
    TradeRecord {
        id,
        instrument: "ES".to_string(),
        side: Direction::Long,
        size: 1.0,
        entry_price: 5000.0,
        exit_price: 5000.0 + pnl / 50.0,
        pnl,
        discipline: 3,
        error: ExecutionError::None_,
        according_to_plan: false,
        executed_at,
        setup: None,
    }
}

/// Trade on 2026-10-15, `id` minutes after 10:00 New York time.
pub fn make_trade(id: u64, pnl: f64, discipline: u8) -> TradeRecord {
    let at = utc(2026, 10, 15, 14, 0) + Duration::minutes(id as i64);
    TradeRecord {
        discipline,
        ..trade_at(id, pnl, at)
    }
}
