use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::models::{
    NewsImpact, StructureQuality, Trend, ValueShift, VolumeTrend, WeekId, WeeklyObservation,
};

/// Weekly regime bands, strongest bullish first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    StrongTrendUp,
    ModerateBullish,
    Balance,
    ModerateBearish,
    StrongTrendDown,
}

impl Regime {
    pub fn from_score(score: Decimal) -> Self {
        if score >= dec!(4) {
            Regime::StrongTrendUp
        } else if score >= dec!(2) {
            Regime::ModerateBullish
        } else if score > dec!(-2) {
            Regime::Balance
        } else if score > dec!(-4) {
            Regime::ModerateBearish
        } else {
            Regime::StrongTrendDown
        }
    }

    pub fn bias(self) -> Trend {
        match self {
            Regime::StrongTrendUp | Regime::ModerateBullish => Trend::Bullish,
            Regime::Balance => Trend::Neutral,
            Regime::ModerateBearish | Regime::StrongTrendDown => Trend::Bearish,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Regime::StrongTrendUp => "strong trend up",
            Regime::ModerateBullish => "moderate bullish",
            Regime::Balance => "balance/rotation",
            Regime::ModerateBearish => "moderate bearish",
            Regime::StrongTrendDown => "strong trend down",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Score-neutral annotations on a weekly verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryTag {
    WeakStructureAbove,
    WeakStructureBelow,
    VolumeDivergence,
    Conflict,
    PorousValue,
}

impl AdvisoryTag {
    pub fn label(&self) -> &'static str {
        match self {
            AdvisoryTag::WeakStructureAbove => "weak structure above",
            AdvisoryTag::WeakStructureBelow => "weak structure below",
            AdvisoryTag::VolumeDivergence => "volume divergence",
            AdvisoryTag::Conflict => "conflict",
            AdvisoryTag::PorousValue => "porous value / high volatility",
        }
    }
}

impl fmt::Display for AdvisoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixStep {
    Trend,
    WeekOpen,
    Migration,
    HighStructure,
    LowStructure,
    Volume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreStep {
    pub step: MatrixStep,
    pub points: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyVerdict {
    pub week_id: WeekId,
    pub score: Decimal,
    pub regime: Regime,
    pub tags: Vec<AdvisoryTag>,
    pub steps: Vec<ScoreStep>,
}

impl WeeklyVerdict {
    /// Verdict used when no weekly observation anchors the day.
    pub fn unanchored(week_id: WeekId) -> Self {
        Self {
            week_id,
            score: Decimal::ZERO,
            regime: Regime::Balance,
            tags: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn bias(&self) -> Trend {
        self.regime.bias()
    }

    pub fn has_tag(&self, tag: AdvisoryTag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Weekly macro scoring. Stateless; every call recomputes from the observation.
pub struct WeeklyMatrix;

impl WeeklyMatrix {
    pub fn evaluate(obs: &WeeklyObservation) -> WeeklyVerdict {
        let mut steps = Vec::with_capacity(6);
        let mut tags = Vec::new();
        let mut score = Decimal::ZERO;

        let mut push = |step: MatrixStep, points: Decimal, score: &mut Decimal| {
            *score += points;
            steps.push(ScoreStep { step, points });
        };

        push(MatrixStep::Trend, dec!(2) * Decimal::from(obs.trend.sign()), &mut score);
        push(MatrixStep::WeekOpen, dec!(2) * Decimal::from(obs.week_open.sign()), &mut score);

        let migration = match obs.migration {
            ValueShift::Higher => dec!(1),
            ValueShift::Lower => dec!(-1),
            ValueShift::Unchanged | ValueShift::None_ => Decimal::ZERO,
        };
        push(MatrixStep::Migration, migration, &mut score);

        // A poor extreme only counts when value is not moving away from it.
        let high = if obs.high_structure == StructureQuality::Poor {
            if matches!(obs.migration, ValueShift::Higher | ValueShift::Unchanged) {
                dec!(1)
            } else {
                tags.push(AdvisoryTag::WeakStructureAbove);
                Decimal::ZERO
            }
        } else {
            Decimal::ZERO
        };
        push(MatrixStep::HighStructure, high, &mut score);

        let low = if obs.low_structure == StructureQuality::Poor {
            if matches!(obs.migration, ValueShift::Lower | ValueShift::Unchanged) {
                dec!(-1)
            } else {
                tags.push(AdvisoryTag::WeakStructureBelow);
                Decimal::ZERO
            }
        } else {
            Decimal::ZERO
        };
        push(MatrixStep::LowStructure, low, &mut score);

        let volume = if obs.volume == VolumeTrend::Increasing {
            if score > Decimal::ZERO && obs.migration == ValueShift::Higher {
                dec!(0.5)
            } else if score < Decimal::ZERO && obs.migration == ValueShift::Lower {
                dec!(-0.5)
            } else {
                tags.push(AdvisoryTag::VolumeDivergence);
                Decimal::ZERO
            }
        } else {
            Decimal::ZERO
        };
        push(MatrixStep::Volume, volume, &mut score);

        if obs.trend.sign() * obs.week_open.sign() < 0 {
            tags.push(AdvisoryTag::Conflict);
        }
        if obs.max_news_impact() == NewsImpact::High {
            tags.push(AdvisoryTag::PorousValue);
        }

        let regime = Regime::from_score(score);
        debug!(
            week = %obs.week_id,
            score = %score,
            regime = %regime,
            tags = tags.len(),
            "weekly matrix evaluated"
        );

        WeeklyVerdict {
            week_id: obs.week_id,
            score,
            regime,
            tags,
            steps,
        }
    }
}
