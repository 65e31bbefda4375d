use std::collections::BTreeSet;

use crate::models::{
    DailyObservation, IbWidth, IntentFamily, Inventory, OpenType, RangeExtension, RangeVsPriorDay,
    RelativeVolume, SinglePrints, Trend, VaEdge, ValueMigration, ValueOverlap,
};
use crate::strategies::weekly_matrix::WeeklyVerdict;

/// Builds the protocol narrative. Line order is fixed:
/// single prints, value overlap, value migration, relative volume, open type,
/// range vs prior day, magnets, inventory, extension vs bias, IB width, family summary.
pub fn compose(
    daily: &DailyObservation,
    weekly: &WeeklyVerdict,
    families: &BTreeSet<IntentFamily>,
) -> Vec<String> {
    let mut lines = Vec::new();

    match daily.anomalies.single_prints {
        SinglePrints::Above => lines.push(
            "OVERRIDE: single prints above. Repair takes priority; no fading into the prints."
                .to_string(),
        ),
        SinglePrints::Below => lines.push(
            "OVERRIDE: single prints below. Repair takes priority; no fading into the prints."
                .to_string(),
        ),
        SinglePrints::None_ => {}
    }

    if let Some(line) = overlap_line(daily.value_overlap) {
        lines.push(line.to_string());
    }

    match daily.value_migration {
        ValueMigration::MigratingOutside => {
            lines.push("Value migrating outside prior value: follow the migration.".to_string())
        }
        ValueMigration::ToPriorValue => lines.push(
            "Value migrating back to prior-day value: fill targets are live.".to_string(),
        ),
        ValueMigration::None_ => {
            lines.push("Value is not migrating: expect rotation around the POC.".to_string())
        }
        ValueMigration::Any => {}
    }

    match daily.relative_volume {
        RelativeVolume::AboveAvg => {
            lines.push("Relative volume above average: initiative participation.".to_string())
        }
        RelativeVolume::Avg => {
            lines.push("Relative volume average: no volume edge either way.".to_string())
        }
        RelativeVolume::BelowAvg => {
            lines.push("Relative volume below average: breakouts are suspect.".to_string())
        }
        RelativeVolume::Undefined => {}
    }

    if let Some(line) = open_line(daily.open_type) {
        lines.push(line.to_string());
    }

    match daily.range_vs_prior_day {
        RangeVsPriorDay::Inside => lines.push(
            "Inside yesterday's range: the market has not found new business.".to_string(),
        ),
        RangeVsPriorDay::Outside => lines.push(
            "Outside day: both prior extremes taken, watch for the close location.".to_string(),
        ),
        RangeVsPriorDay::ExtendedHigher => {
            lines.push("Range extended above yesterday's high.".to_string())
        }
        RangeVsPriorDay::ExtendedLower => {
            lines.push("Range extended below yesterday's low.".to_string())
        }
        RangeVsPriorDay::Undefined => {}
    }

    if daily.anomalies.naked_poc {
        lines.push("Naked POC in play: treat it as a magnet target.".to_string());
    }
    match daily.anomalies.untested_va_edge {
        VaEdge::High => lines.push("Untested prior VAH overhead acts as a magnet.".to_string()),
        VaEdge::Low => lines.push("Untested prior VAL below acts as a magnet.".to_string()),
        VaEdge::None_ => {}
    }

    match daily.inventory {
        Inventory::FullyLong => lines.push(
            "Overnight inventory fully long: expect a correction lower before continuation."
                .to_string(),
        ),
        Inventory::FullyShort => lines.push(
            "Overnight inventory fully short: expect a correction higher before continuation."
                .to_string(),
        ),
        Inventory::Balanced => {}
    }

    if let Some(line) = extension_line(daily.range_extension, weekly.bias()) {
        lines.push(line);
    }

    match daily.ib_width {
        IbWidth::Narrow => lines.push(
            "Narrow IB: expansion likely. The kill-switch engages after the late-morning cutoff."
                .to_string(),
        ),
        IbWidth::Wide => {
            lines.push("Wide IB: the day's range is likely set, favour rotation.".to_string())
        }
        IbWidth::Normal => {}
    }

    lines.push(family_summary(families));
    lines
}

fn overlap_line(overlap: ValueOverlap) -> Option<&'static str> {
    match overlap {
        ValueOverlap::NoOverlap => {
            Some("No value overlap with the prior day: other-timeframe confidence.")
        }
        ValueOverlap::Minimum => Some("Minimum value overlap: conviction is building."),
        ValueOverlap::High => Some("High value overlap: prior value accepted, repair is likely."),
        ValueOverlap::Full => Some("Full value overlap: balance, trade the edges back to the POC."),
        ValueOverlap::Any => None,
    }
}

fn open_line(open: OpenType) -> Option<&'static str> {
    match open {
        OpenType::Drive => Some("Open-Drive: highest-conviction open, do not fade the first hour."),
        OpenType::TestDrive => {
            Some("Open-Test-Drive: reference tested and rejected, drive expected.")
        }
        OpenType::RejectionReversal => {
            Some("Open-Rejection-Reversal: opening probe rejected, correction in play.")
        }
        OpenType::Auction => Some("Open-Auction: no conviction at the open, rotation first."),
        OpenType::Undefined => None,
    }
}

fn extension_line(ext: RangeExtension, bias: Trend) -> Option<String> {
    let dir = match ext {
        RangeExtension::None_ => return None,
        RangeExtension::Both => {
            return Some(
                "Range extension on both sides: neutral day, favour correction.".to_string(),
            );
        }
        RangeExtension::Up => "up",
        RangeExtension::Down => "down",
    };
    let aligned = matches!(
        (ext, bias),
        (RangeExtension::Up, Trend::Bullish) | (RangeExtension::Down, Trend::Bearish)
    );
    let line = if bias == Trend::Neutral {
        format!("Range extension {} with a neutral weekly bias: a probe until accepted.", dir)
    } else if aligned {
        format!("Range extension {} aligned with the {} weekly bias: confidence.", dir, bias)
    } else {
        format!("Range extension {} against the {} weekly bias: correction risk.", dir, bias)
    };
    Some(line)
}

fn family_summary(families: &BTreeSet<IntentFamily>) -> String {
    if families.is_empty() {
        return "No intent family active: stand aside.".to_string();
    }
    let names: Vec<&str> = families.iter().map(|f| f.as_str()).collect();
    format!("Active families: {}", names.join(", "))
}
