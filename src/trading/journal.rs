//! One evaluation pass over a journal snapshot: weekly matrix, daily scanner, risk gate
//! and stage machine, in data-flow order.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::catalog::SetupCatalog;
use crate::config::Config;
use crate::core::{ExchangeClock, RiskAssessment, RiskGate, RiskInputs, SizingTier};
use crate::error::Result;
use crate::models::{anchor_for, DailyObservation, TradeRecord, WeekId, WeeklyObservation};
use crate::protocol::{ProtocolStage, ProtocolStageState};
use crate::strategies::{DailyScanner, ScanReport, WeeklyMatrix, WeeklyVerdict};
use crate::trading::discipline_review::{BucketStats, DisciplineReview, ReviewTable};

const REVIEW_MIN_SAMPLE: usize = 5;

/// Everything the persistence layer hands the engine for one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalSnapshot {
    pub evaluated_at: DateTime<Utc>,
    #[serde(default)]
    pub weeks: Vec<WeeklyObservation>,
    #[serde(default)]
    pub daily: Option<DailyObservation>,
    #[serde(default)]
    pub trades: Vec<TradeRecord>,
    /// Sizing tier the trader had selected before this evaluation.
    #[serde(default)]
    pub selected_tier: Option<SizingTier>,
}

impl JournalSnapshot {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProtocolReport {
    pub date: NaiveDate,
    pub catalog_version: &'static str,
    pub stages: ProtocolStageState,
    pub current_stage: Option<ProtocolStage>,
    pub weekly_anchored: bool,
    pub weekly: WeeklyVerdict,
    pub scan: Option<ScanReport>,
    pub risk: RiskAssessment,
    pub sizing: Option<SizingTier>,
    pub review: ReviewTable,
    pub costliest_errors: Vec<BucketStats>,
}

impl ProtocolReport {
    /// Fails only in strict stage-order mode, when a later stage was recorded before an
    /// earlier one.
    pub fn build(
        snapshot: &JournalSnapshot,
        catalog: &SetupCatalog,
        cfg: &Config,
    ) -> Result<Self> {
        let daily = snapshot.daily.as_ref();
        let date = daily.map_or_else(
            || ExchangeClock::new(cfg).trading_date(snapshot.evaluated_at),
            |d| d.date,
        );

        let stages = ProtocolStageState::evaluate(date, daily, &snapshot.weeks);
        if cfg.strict_stage_order {
            if let Some(stage) = stages.integrity_violations().first() {
                stages.check_order(*stage)?;
            }
        }

        let anchor = anchor_for(&snapshot.weeks, date);
        let weekly = anchor.map_or_else(
            || WeeklyVerdict::unanchored(WeekId::from_date(date)),
            WeeklyMatrix::evaluate,
        );

        let scanner = DailyScanner::new(catalog, cfg.min_setup_score);
        let scan = daily.map(|d| scanner.evaluate(d, &weekly));

        let risk = RiskGate::new(cfg).assess(&RiskInputs {
            now: snapshot.evaluated_at,
            daily,
            trades: &snapshot.trades,
        });
        let sizing = risk.resolve_selection(snapshot.selected_tier);

        let reviewer = DisciplineReview::new(REVIEW_MIN_SAMPLE);
        let review = reviewer.analyze(&snapshot.trades);
        let costliest_errors = reviewer.costliest_errors(&review);

        info!(
            %date,
            regime = %weekly.regime,
            stage = ?stages.current_stage(),
            matches = scan.as_ref().map_or(0, |s| s.matches.len()),
            permitted = ?risk.permitted,
            "protocol report built"
        );

        Ok(Self {
            date,
            catalog_version: catalog.version,
            current_stage: stages.current_stage(),
            stages,
            weekly_anchored: anchor.is_some(),
            weekly,
            scan,
            risk,
            sizing,
            review,
            costliest_errors,
        })
    }

    /// Human-readable digest, one line per fact.
    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![format!("{} (catalog {})", self.date, self.catalog_version)];

        match self.current_stage {
            Some(stage) => lines.push(format!("Protocol: next stage {}", stage)),
            None => lines.push("Protocol: all stages complete".to_string()),
        }

        if self.weekly_anchored {
            let tags: Vec<&str> = self.weekly.tags.iter().map(|t| t.label()).collect();
            lines.push(format!(
                "Week {}: {} (score {}){}",
                self.weekly.week_id,
                self.weekly.regime,
                self.weekly.score,
                if tags.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", tags.join(", "))
                }
            ));
        } else {
            lines.push(format!("Week {}: no weekly anchor", self.weekly.week_id));
        }

        if let Some(scan) = &self.scan {
            lines.extend(scan.narrative.iter().cloned());
            for m in scan.matches.iter().take(5) {
                let forced = if m.forced { " (forced)" } else { "" };
                lines.push(format!("  #{} {} score {}{}", m.id(), m.setup.name, m.score, forced));
            }
        }

        match &self.risk.lock {
            Some(lock) => lines.push(format!("Risk: {}", lock)),
            None => lines.push("Risk: all tiers open".to_string()),
        }
        lines.push(format!(
            "Tilt {:.0} ({}), behavioural equity {:.1} ({})",
            self.risk.tilt.score,
            self.risk.tilt.label,
            self.risk.equity.equity,
            self.risk.equity.tier
        ));
        if let Some(tier) = self.sizing {
            lines.push(format!("Sizing: {}", tier));
        }
        for b in self.costliest_errors.iter().take(3) {
            lines.push(format!("Costly habit: {} x{} ({:.2})", b.value, b.total, b.total_pnl));
        }
        lines
    }
}
