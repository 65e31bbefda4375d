use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::{ExecutionError, TradeRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDimension {
    Error,
    Setup,
    PlanAdherence,
}

impl ReviewDimension {
    pub const ALL: [ReviewDimension; 3] = [
        ReviewDimension::Error,
        ReviewDimension::Setup,
        ReviewDimension::PlanAdherence,
    ];

    fn key(self, trade: &TradeRecord) -> String {
        match self {
            ReviewDimension::Error => trade.error.as_str().to_string(),
            ReviewDimension::Setup => trade
                .setup
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or("unplanned")
                .to_string(),
            ReviewDimension::PlanAdherence => {
                if trade.according_to_plan {
                    "on_plan".to_string()
                } else {
                    "off_plan".to_string()
                }
            }
        }
    }
}

impl fmt::Display for ReviewDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewDimension::Error => write!(f, "error"),
            ReviewDimension::Setup => write!(f, "setup"),
            ReviewDimension::PlanAdherence => write!(f, "plan_adherence"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketStats {
    pub dimension: ReviewDimension,
    pub value: String,
    pub total: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub avg_pnl: f64,
    pub total_pnl: f64,
    pub mean_discipline: f64,
    pub sample_sufficient: bool,
}

pub type ReviewTable = BTreeMap<ReviewDimension, BTreeMap<String, BucketStats>>;

/// After-the-fact behaviour review over the trade journal.
pub struct DisciplineReview {
    pub min_sample: usize,
}

impl DisciplineReview {
    pub fn new(min_sample: usize) -> Self {
        Self { min_sample }
    }

    pub fn analyze(&self, trades: &[TradeRecord]) -> ReviewTable {
        ReviewDimension::ALL
            .into_iter()
            .map(|dim| (dim, self.analyze_dimension(trades, dim)))
            .collect()
    }

    /// Execution errors ranked by how much they cost, worst first. Only losing buckets.
    pub fn costliest_errors(&self, table: &ReviewTable) -> Vec<BucketStats> {
        let mut out: Vec<BucketStats> = table
            .get(&ReviewDimension::Error)
            .into_iter()
            .flat_map(|buckets| buckets.values())
            .filter(|b| b.value != ExecutionError::None_.as_str() && b.total_pnl < 0.0)
            .cloned()
            .collect();
        out.sort_by(|a, b| a.total_pnl.total_cmp(&b.total_pnl));
        out
    }

    /// Average off-plan P&L minus average on-plan P&L. Negative when improvising costs money.
    pub fn plan_adherence_gap(&self, table: &ReviewTable) -> Option<f64> {
        let plan = table.get(&ReviewDimension::PlanAdherence)?;
        let on = plan.get("on_plan")?;
        let off = plan.get("off_plan")?;
        Some(round4(off.avg_pnl - on.avg_pnl))
    }

    fn analyze_dimension(
        &self,
        trades: &[TradeRecord],
        dimension: ReviewDimension,
    ) -> BTreeMap<String, BucketStats> {
        let mut buckets: BTreeMap<String, Vec<&TradeRecord>> = BTreeMap::new();
        for t in trades {
            buckets.entry(dimension.key(t)).or_default().push(t);
        }
        buckets
            .into_iter()
            .map(|(value, group)| {
                let stats = self.compute_stats(dimension, &value, &group);
                (value, stats)
            })
            .collect()
    }

    fn compute_stats(
        &self,
        dimension: ReviewDimension,
        value: &str,
        trades: &[&TradeRecord],
    ) -> BucketStats {
        let total = trades.len();
        let wins = trades.iter().filter(|t| t.is_win()).count();
        let total_pnl: f64 = trades.iter().map(|t| t.pnl).sum();
        let discipline: f64 = trades.iter().map(|t| f64::from(t.discipline_score())).sum();
        let per_trade = |x: f64| if total > 0 { x / total as f64 } else { 0.0 };

        BucketStats {
            dimension,
            value: value.to_string(),
            total,
            wins,
            losses: total - wins,
            win_rate: round4(per_trade(wins as f64)),
            avg_pnl: round4(per_trade(total_pnl)),
            total_pnl: round4(total_pnl),
            mean_discipline: round4(per_trade(discipline)),
            sample_sufficient: total >= self.min_sample,
        }
    }
}

fn round4(x: f64) -> f64 {
    (x * 10000.0).round() / 10000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::make_trade;

    fn journal() -> Vec<TradeRecord> {
        let mut trades = vec![
            make_trade(1, 300.0, 5),
            make_trade(2, 150.0, 4),
            make_trade(3, -400.0, 1),
            make_trade(4, -250.0, 2),
            make_trade(5, -100.0, 2),
        ];
        trades[0].according_to_plan = true;
        trades[0].setup = Some("VAH Fade".to_string());
        trades[1].according_to_plan = true;
        trades[1].setup = Some("VAH Fade".to_string());
        trades[2].error = ExecutionError::RevengeTrade;
        trades[3].error = ExecutionError::StopLossSabotage;
        trades[4].error = ExecutionError::RevengeTrade;
        trades
    }

    #[test]
    fn buckets_by_every_dimension() {
        let table = DisciplineReview::new(2).analyze(&journal());
        assert_eq!(table.len(), 3);

        let revenge = &table[&ReviewDimension::Error]["revenge_trade"];
        assert_eq!(revenge.total, 2);
        assert_eq!(revenge.wins, 0);
        assert_eq!(revenge.total_pnl, -500.0);
        assert_eq!(revenge.mean_discipline, 1.5);
        assert!(revenge.sample_sufficient);

        let fade = &table[&ReviewDimension::Setup]["VAH Fade"];
        assert_eq!(fade.win_rate, 1.0);
        assert_eq!(table[&ReviewDimension::Setup]["unplanned"].total, 3);

        let off = &table[&ReviewDimension::PlanAdherence]["off_plan"];
        assert_eq!(off.total, 3);
        assert!(!table[&ReviewDimension::Error]["stop_loss_sabotage"].sample_sufficient);
    }

    #[test]
    fn costliest_errors_rank_by_total_loss() {
        let review = DisciplineReview::new(1);
        let table = review.analyze(&journal());
        let ranked: Vec<String> = review
            .costliest_errors(&table)
            .into_iter()
            .map(|b| b.value)
            .collect();
        assert_eq!(ranked, vec!["revenge_trade", "stop_loss_sabotage"]);
    }

    #[test]
    fn plan_gap_is_negative_when_improvising_costs() {
        let review = DisciplineReview::new(1);
        let table = review.analyze(&journal());
        // off plan avg -250, on plan avg 225
        assert_eq!(review.plan_adherence_gap(&table), Some(-475.0));
    }

    #[test]
    fn empty_journal_has_empty_buckets() {
        let review = DisciplineReview::new(5);
        let table = review.analyze(&[]);
        assert!(table.values().all(|b| b.is_empty()));
        assert!(review.costliest_errors(&table).is_empty());
        assert_eq!(review.plan_adherence_gap(&table), None);
    }
}
