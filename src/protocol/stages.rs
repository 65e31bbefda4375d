use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::error::{ProtocolError, Result};
use crate::models::{anchor_for, BiometricVerdict, DailyObservation, WeeklyObservation};

/// The five protocol stages, in the order they must be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolStage {
    Checkup,
    PreFight,
    WeeklyAnchor,
    Scanner,
    StrategySelection,
}

impl ProtocolStage {
    pub const ALL: [ProtocolStage; 5] = [
        ProtocolStage::Checkup,
        ProtocolStage::PreFight,
        ProtocolStage::WeeklyAnchor,
        ProtocolStage::Scanner,
        ProtocolStage::StrategySelection,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn previous(self) -> Option<ProtocolStage> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

impl fmt::Display for ProtocolStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProtocolStage::Checkup => "1. biometric checkup",
            ProtocolStage::PreFight => "2. pre-fight commitments",
            ProtocolStage::WeeklyAnchor => "3. weekly anchor",
            ProtocolStage::Scanner => "4. intraday scanner",
            ProtocolStage::StrategySelection => "5. strategy selection",
        };
        write!(f, "{}", name)
    }
}

/// Completion flags derived from the persisted journal records. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProtocolStageState {
    pub checkup: bool,
    pub pre_fight: bool,
    pub weekly_anchor: bool,
    pub scanner: bool,
    pub strategy_selection: bool,
}

impl ProtocolStageState {
    pub fn evaluate(
        date: NaiveDate,
        daily: Option<&DailyObservation>,
        weeks: &[WeeklyObservation],
    ) -> Self {
        let state = Self {
            checkup: daily.is_some_and(|d| d.prep.biometric != BiometricVerdict::None_),
            pre_fight: daily.is_some_and(|d| d.prep.pre_fight_complete()),
            weekly_anchor: anchor_for(weeks, date).is_some(),
            scanner: daily.is_some_and(DailyObservation::scanner_complete),
            strategy_selection: daily.is_some_and(|d| d.selected_setup().is_some()),
        };
        for stage in state.integrity_violations() {
            warn!(%date, stage = %stage, "stage complete before an earlier stage");
        }
        state
    }

    pub fn is_complete(&self, stage: ProtocolStage) -> bool {
        match stage {
            ProtocolStage::Checkup => self.checkup,
            ProtocolStage::PreFight => self.pre_fight,
            ProtocolStage::WeeklyAnchor => self.weekly_anchor,
            ProtocolStage::Scanner => self.scanner,
            ProtocolStage::StrategySelection => self.strategy_selection,
        }
    }

    /// A stage opens once the stage before it is complete. The checkup is always open.
    pub fn is_unlocked(&self, stage: ProtocolStage) -> bool {
        stage.previous().map_or(true, |prev| self.is_complete(prev))
    }

    /// First incomplete stage, or `None` once the whole protocol is done.
    pub fn current_stage(&self) -> Option<ProtocolStage> {
        ProtocolStage::ALL.into_iter().find(|s| !self.is_complete(*s))
    }

    pub fn completed(&self) -> usize {
        ProtocolStage::ALL.iter().filter(|s| self.is_complete(**s)).count()
    }

    /// Stages that read complete while some earlier stage does not. Only possible when
    /// records were edited out of order.
    pub fn integrity_violations(&self) -> Vec<ProtocolStage> {
        let mut gap = false;
        let mut violations = Vec::new();
        for stage in ProtocolStage::ALL {
            if !self.is_complete(stage) {
                gap = true;
            } else if gap {
                violations.push(stage);
            }
        }
        violations
    }

    /// Write-time guard: every stage before `stage` must already be complete.
    pub fn check_order(&self, stage: ProtocolStage) -> Result<()> {
        match ProtocolStage::ALL[..stage.index()]
            .iter()
            .find(|s| !self.is_complete(**s))
        {
            Some(missing) => Err(ProtocolError::StageOutOfOrder {
                attempted: stage,
                missing: *missing,
            }),
            None => Ok(()),
        }
    }
}
