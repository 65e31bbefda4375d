use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::daily::{MarketContext, OpenType, OpeningContext, ValueMigration, ValueOverlap};
use crate::models::SetupSide;

/// Broad trading intent a day can support. Several may be active at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntentFamily {
    Confidence,
    Rotation,
    Fill,
    Correction,
}

impl IntentFamily {
    pub const ALL: [IntentFamily; 4] = [
        IntentFamily::Confidence,
        IntentFamily::Rotation,
        IntentFamily::Fill,
        IntentFamily::Correction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntentFamily::Confidence => "CONFIDENCE",
            IntentFamily::Rotation => "ROTATION",
            IntentFamily::Fill => "FILL",
            IntentFamily::Correction => "CORRECTION",
        }
    }
}

impl fmt::Display for IntentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    Momentum,
    Breakout,
    Pullback,
    Rotation,
    Fade,
    Repair,
    Magnet,
    Reversal,
    FailedAuction,
}

impl StrategyType {
    /// The intent family a strategy of this type naturally expresses.
    pub fn family(self) -> IntentFamily {
        match self {
            StrategyType::Momentum | StrategyType::Breakout | StrategyType::Pullback => {
                IntentFamily::Confidence
            }
            StrategyType::Rotation | StrategyType::Fade => IntentFamily::Rotation,
            StrategyType::Repair | StrategyType::Magnet => IntentFamily::Fill,
            StrategyType::Reversal | StrategyType::FailedAuction => IntentFamily::Correction,
        }
    }

    pub fn is_range_bound(self) -> bool {
        matches!(self, StrategyType::Rotation | StrategyType::Fade)
    }

    pub fn is_directional(self) -> bool {
        matches!(self, StrategyType::Momentum | StrategyType::Breakout)
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StrategyType::Momentum => "momentum",
            StrategyType::Breakout => "breakout",
            StrategyType::Pullback => "pullback",
            StrategyType::Rotation => "rotation",
            StrategyType::Fade => "fade",
            StrategyType::Repair => "repair",
            StrategyType::Magnet => "magnet",
            StrategyType::Reversal => "reversal",
            StrategyType::FailedAuction => "failed_auction",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of testing one setup predicate against the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateMatch {
    /// The setup lists the observed value.
    Explicit,
    /// The setup does not constrain this field, or the day left it open.
    Wildcard,
    /// The setup lists values and the observed one is not among them.
    Violated,
}

impl PredicateMatch {
    fn test<T: PartialEq + Copy>(allowed: &[T], observed: T, open: T) -> Self {
        if allowed.is_empty() || observed == open {
            PredicateMatch::Wildcard
        } else if allowed.contains(&observed) {
            PredicateMatch::Explicit
        } else {
            PredicateMatch::Violated
        }
    }
}

/// A static catalog entry. Empty predicate lists mean "any".
#[derive(Debug, Clone, Serialize)]
pub struct SetupDefinition {
    pub id: u16,
    pub name: &'static str,
    pub contexts: &'static [MarketContext],
    pub opening_contexts: &'static [OpeningContext],
    pub open_types: &'static [OpenType],
    pub value_overlaps: &'static [ValueOverlap],
    pub value_migrations: &'static [ValueMigration],
    pub strategy_type: StrategyType,
    pub intent_family: IntentFamily,
    pub side: SetupSide,
    pub trigger: &'static str,
    pub target: &'static str,
    pub invalidation: &'static str,
    pub traps: &'static [&'static str],
}

impl SetupDefinition {
    /// An undefined market context never satisfies a setup, even one open to any context.
    pub fn context_match(&self, ctx: MarketContext) -> PredicateMatch {
        if ctx == MarketContext::Undefined {
            return PredicateMatch::Violated;
        }
        PredicateMatch::test(self.contexts, ctx, MarketContext::Undefined)
    }

    pub fn opening_context_match(&self, oc: OpeningContext) -> PredicateMatch {
        PredicateMatch::test(self.opening_contexts, oc, OpeningContext::Undefined)
    }

    pub fn open_type_match(&self, ot: OpenType) -> PredicateMatch {
        PredicateMatch::test(self.open_types, ot, OpenType::Undefined)
    }

    pub fn value_overlap_match(&self, vo: ValueOverlap) -> PredicateMatch {
        PredicateMatch::test(self.value_overlaps, vo, ValueOverlap::Any)
    }

    pub fn value_migration_match(&self, vm: ValueMigration) -> PredicateMatch {
        PredicateMatch::test(self.value_migrations, vm, ValueMigration::Any)
    }
}
