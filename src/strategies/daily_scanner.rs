use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

use crate::catalog::SetupCatalog;
use crate::models::{
    DailyObservation, IbWidth, IntentFamily, Inventory, OpenType, ParticipantControl,
    RangeExtension, RelativeVolume, Trend, VaEdge, ValueMigration, ValueOverlap,
};
use crate::strategies::narrative;
use crate::strategies::setup_matcher::{self, MatchInput, RankedSetup};
use crate::strategies::weekly_matrix::{AdvisoryTag, MatrixStep, WeeklyVerdict};

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub families: BTreeSet<IntentFamily>,
    pub narrative: Vec<String>,
    pub matches: Vec<RankedSetup>,
}

impl ScanReport {
    pub fn top(&self) -> Option<&RankedSetup> {
        self.matches.first()
    }
}

pub struct DailyScanner<'a> {
    catalog: &'a SetupCatalog,
    min_score: i32,
}

impl<'a> DailyScanner<'a> {
    pub fn new(catalog: &'a SetupCatalog, min_score: i32) -> Self {
        Self { catalog, min_score }
    }

    pub fn evaluate(&self, daily: &DailyObservation, weekly: &WeeklyVerdict) -> ScanReport {
        let families = activate_families(daily, weekly);
        let narrative = narrative::compose(daily, weekly, &families);
        let input = MatchInput {
            daily,
            weekly,
            families: &families,
        };
        let matches = setup_matcher::rank(self.catalog, &input, self.min_score);

        debug!(
            date = %daily.date,
            families = ?families,
            matches = matches.len(),
            top = matches.first().map(|m| m.setup.name).unwrap_or("-"),
            "daily scan evaluated"
        );

        ScanReport {
            families,
            narrative,
            matches,
        }
    }
}

fn extension_aligned(ext: RangeExtension, bias: Trend) -> bool {
    matches!(
        (ext, bias),
        (RangeExtension::Up, Trend::Bullish) | (RangeExtension::Down, Trend::Bearish)
    )
}

fn extension_opposes(ext: RangeExtension, bias: Trend) -> bool {
    matches!(
        (ext, bias),
        (RangeExtension::Up, Trend::Bearish) | (RangeExtension::Down, Trend::Bullish)
    )
}

/// A weekly poor extreme that counted toward the score and sits on the bias side.
fn weekly_repair_pending(weekly: &WeeklyVerdict) -> bool {
    let points = |step: MatrixStep| {
        weekly
            .steps
            .iter()
            .find(|s| s.step == step)
            .map_or(Decimal::ZERO, |s| s.points)
    };
    match weekly.bias() {
        Trend::Bullish => points(MatrixStep::HighStructure) > Decimal::ZERO,
        Trend::Bearish => points(MatrixStep::LowStructure) < Decimal::ZERO,
        Trend::Neutral => false,
    }
}

pub fn confidence_active(d: &DailyObservation, w: &WeeklyVerdict) -> bool {
    let single_sided = matches!(d.range_extension, RangeExtension::Up | RangeExtension::Down);
    d.value_overlap == ValueOverlap::NoOverlap
        || d.value_migration == ValueMigration::MigratingOutside
        || d.open_type.is_directional()
        || (d.relative_volume == RelativeVolume::AboveAvg
            && (d.open_type.is_directional() || d.range_extension != RangeExtension::None_))
        || d.ib_width == IbWidth::Narrow
        || extension_aligned(d.range_extension, w.bias())
        || (d.participant_control == ParticipantControl::Otf && single_sided)
}

pub fn rotation_active(d: &DailyObservation, w: &WeeklyVerdict) -> bool {
    d.value_overlap == ValueOverlap::Full
        || d.value_migration == ValueMigration::None_
        || d.open_type == OpenType::Auction
        || d.relative_volume == RelativeVolume::BelowAvg
        || w.bias() == Trend::Neutral
        || d.ib_width == IbWidth::Wide
        || d.range_extension == RangeExtension::None_
}

pub fn fill_active(d: &DailyObservation, w: &WeeklyVerdict) -> bool {
    d.value_overlap == ValueOverlap::High
        || d.value_migration == ValueMigration::ToPriorValue
        || d.inventory != Inventory::Balanced
        || d.anomalies.untested_va_edge != VaEdge::None_
        || d.anomalies.naked_poc
        || weekly_repair_pending(w)
}

pub fn correction_active(d: &DailyObservation, w: &WeeklyVerdict) -> bool {
    d.open_type == OpenType::RejectionReversal
        || extension_opposes(d.range_extension, w.bias())
        || w.has_tag(AdvisoryTag::Conflict)
        || d.range_extension == RangeExtension::Both
}

pub fn activate_families(d: &DailyObservation, w: &WeeklyVerdict) -> BTreeSet<IntentFamily> {
    let mut families = BTreeSet::new();
    if confidence_active(d, w) {
        families.insert(IntentFamily::Confidence);
    }
    if rotation_active(d, w) {
        families.insert(IntentFamily::Rotation);
    }
    if fill_active(d, w) {
        families.insert(IntentFamily::Fill);
    }
    if correction_active(d, w) {
        families.insert(IntentFamily::Correction);
    }
    families
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        MarketContext, OpeningContext, StructureQuality, ValueShift, WeekOpen, WeeklyTrend,
    };
    use crate::strategies::weekly_matrix::{Regime, WeeklyMatrix};
    use crate::test_helpers::{balance_day, neutral_verdict, trend_day, weekly};

    fn bullish_verdict() -> WeeklyVerdict {
        WeeklyMatrix::evaluate(&weekly(WeeklyTrend::Up, WeekOpen::GapUp, ValueShift::Higher))
    }

    #[test]
    fn balance_day_is_pure_rotation() {
        let fams = activate_families(&balance_day(), &neutral_verdict());
        assert_eq!(fams.into_iter().collect::<Vec<_>>(), vec![IntentFamily::Rotation]);
    }

    #[test]
    fn trend_day_activates_confidence_only() {
        let w = bullish_verdict();
        assert_eq!(w.regime, Regime::StrongTrendUp);
        let fams = activate_families(&trend_day(), &w);
        assert_eq!(fams.into_iter().collect::<Vec<_>>(), vec![IntentFamily::Confidence]);
    }

    #[test]
    fn families_are_not_exclusive() {
        let mut day = trend_day();
        day.inventory = Inventory::FullyShort;
        day.range_extension = RangeExtension::Both;
        let fams = activate_families(&day, &bullish_verdict());
        assert!(fams.contains(&IntentFamily::Confidence));
        assert!(fams.contains(&IntentFamily::Fill));
        assert!(fams.contains(&IntentFamily::Correction));
    }

    #[test]
    fn extension_against_bias_is_correction() {
        let mut day = trend_day();
        day.range_extension = RangeExtension::Down;
        assert!(correction_active(&day, &bullish_verdict()));
        assert!(!correction_active(&day, &neutral_verdict()));
    }

    #[test]
    fn weekly_conflict_activates_correction() {
        let w = WeeklyMatrix::evaluate(&weekly(
            WeeklyTrend::Up,
            WeekOpen::GapDown,
            ValueShift::None_,
        ));
        assert!(w.has_tag(AdvisoryTag::Conflict));
        assert!(correction_active(&DailyObservation::default(), &w));
    }

    #[test]
    fn weekly_poor_high_with_bullish_bias_activates_fill() {
        let mut obs = weekly(WeeklyTrend::Up, WeekOpen::GapUp, ValueShift::Higher);
        obs.high_structure = StructureQuality::Poor;
        let w = WeeklyMatrix::evaluate(&obs);
        assert!(fill_active(&trend_day(), &w));
        assert!(!fill_active(&trend_day(), &bullish_verdict()));
    }

    #[test]
    fn evaluate_is_repeatable() {
        let catalog = SetupCatalog::bundled();
        let scanner = DailyScanner::new(&catalog, 4);
        let mut day = trend_day();
        day.anomalies.naked_poc = true;
        let w = bullish_verdict();
        let a = scanner.evaluate(&day, &w);
        let b = scanner.evaluate(&day, &w);
        let ids = |r: &ScanReport| r.matches.iter().map(|m| (m.id(), m.score)).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));
        assert_eq!(a.narrative, b.narrative);
        assert_eq!(a.families, b.families);
    }

    #[test]
    fn trend_day_recommends_open_drive_continuation() {
        let catalog = SetupCatalog::bundled();
        let report = DailyScanner::new(&catalog, 4).evaluate(&trend_day(), &bullish_verdict());
        assert_eq!(report.top().map(|m| m.id()), Some(1));
        assert!(report.matches.iter().all(|m| {
            m.setup.context_match(MarketContext::Imbalance)
                != crate::models::PredicateMatch::Violated
        }));
        assert_eq!(report.narrative.last().unwrap(), "Active families: CONFIDENCE");
    }

    #[test]
    fn undefined_context_offers_nothing() {
        let catalog = SetupCatalog::bundled();
        let mut day = trend_day();
        day.market_context = MarketContext::Undefined;
        day.opening_context = OpeningContext::Undefined;
        let report = DailyScanner::new(&catalog, 4).evaluate(&day, &bullish_verdict());
        assert!(report.matches.is_empty());
        assert!(!report.families.is_empty());
    }
}
