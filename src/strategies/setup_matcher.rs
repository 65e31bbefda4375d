//! Setup matching as a flat, ordered rule list.
//!
//! Every rule is evaluated once per setup, in declaration order. `Force` short-circuits
//! inclusion, `Exclude` gates a setup out unless it was forced, `Add` moves the score.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::catalog::{SetupCatalog, NAKED_POC_MAGNETS, NARROW_IB_EXPANSION, SINGLE_PRINTS_FILL};
use crate::models::{
    DailyObservation, IbWidth, IntentFamily, Inventory, ParticipantControl, PredicateMatch,
    RangeExtension, RelativeVolume, SetupDefinition, SetupSide, SinglePrints, StrategyType, Trend,
    VaEdge, ValueOverlap,
};
use crate::strategies::weekly_matrix::{AdvisoryTag, Regime, WeeklyVerdict};

/// Bonus credited to a hard override. Ordering is settled by `forced` in [`rank`], so the
/// penalties that follow cannot sink an override below an organic setup.
pub const FORCE_TO_TOP: i32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Force(i32),
    Exclude,
    Add(i32),
}

pub struct MatchInput<'a> {
    pub daily: &'a DailyObservation,
    pub weekly: &'a WeeklyVerdict,
    pub families: &'a BTreeSet<IntentFamily>,
}

impl MatchInput<'_> {
    fn bias(&self) -> Trend {
        self.weekly.bias()
    }
}

pub struct MatchRule {
    pub name: &'static str,
    pub applies: fn(&MatchInput<'_>, &SetupDefinition) -> bool,
    pub effect: Effect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub rule: &'static str,
    pub points: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedSetup {
    pub setup: &'static SetupDefinition,
    pub score: i32,
    pub forced: bool,
    pub hits: Vec<RuleHit>,
}

impl RankedSetup {
    pub fn id(&self) -> u16 {
        self.setup.id
    }
}

fn only_side(s: &SetupDefinition, trend: Trend) -> bool {
    match (s.side, trend) {
        (SetupSide::Long, Trend::Bullish) | (SetupSide::Short, Trend::Bearish) => true,
        _ => false,
    }
}

fn against_side(s: &SetupDefinition, trend: Trend) -> bool {
    match (s.side, trend) {
        (SetupSide::Short, Trend::Bullish) | (SetupSide::Long, Trend::Bearish) => true,
        _ => false,
    }
}

pub static RULES: &[MatchRule] = &[
    // hard overrides
    MatchRule {
        name: "narrow IB forces expansion setup",
        applies: |m, s| m.daily.ib_width == IbWidth::Narrow && s.id == NARROW_IB_EXPANSION,
        effect: Effect::Force(FORCE_TO_TOP),
    },
    MatchRule {
        name: "naked POC forces magnet setups",
        applies: |m, s| m.daily.anomalies.naked_poc && NAKED_POC_MAGNETS.contains(&s.id),
        effect: Effect::Force(FORCE_TO_TOP),
    },
    MatchRule {
        name: "single prints force repair setup",
        applies: |m, s| {
            m.daily.anomalies.single_prints != SinglePrints::None_ && s.id == SINGLE_PRINTS_FILL
        },
        effect: Effect::Force(FORCE_TO_TOP),
    },
    // gates
    MatchRule {
        name: "market context not supported",
        applies: |m, s| s.context_match(m.daily.market_context) == PredicateMatch::Violated,
        effect: Effect::Exclude,
    },
    MatchRule {
        name: "open type violated",
        applies: |m, s| s.open_type_match(m.daily.open_type) == PredicateMatch::Violated,
        effect: Effect::Exclude,
    },
    // predicate matches
    MatchRule {
        name: "market context match",
        applies: |m, s| s.context_match(m.daily.market_context) == PredicateMatch::Explicit,
        effect: Effect::Add(2),
    },
    MatchRule {
        name: "opening context match",
        applies: |m, s| {
            s.opening_context_match(m.daily.opening_context) == PredicateMatch::Explicit
        },
        effect: Effect::Add(1),
    },
    MatchRule {
        name: "open type match",
        applies: |m, s| s.open_type_match(m.daily.open_type) == PredicateMatch::Explicit,
        effect: Effect::Add(2),
    },
    MatchRule {
        name: "value overlap match",
        applies: |m, s| s.value_overlap_match(m.daily.value_overlap) == PredicateMatch::Explicit,
        effect: Effect::Add(2),
    },
    MatchRule {
        name: "value migration match",
        applies: |m, s| {
            s.value_migration_match(m.daily.value_migration) == PredicateMatch::Explicit
        },
        effect: Effect::Add(2),
    },
    // family alignment
    MatchRule {
        name: "strategy type in active family",
        applies: |m, s| m.families.contains(&s.strategy_type.family()),
        effect: Effect::Add(3),
    },
    MatchRule {
        name: "intent family active",
        applies: |m, s| m.families.contains(&s.intent_family),
        effect: Effect::Add(1),
    },
    // weekly alignment
    MatchRule {
        name: "side aligned with weekly bias",
        applies: |m, s| only_side(s, m.bias()),
        effect: Effect::Add(1),
    },
    MatchRule {
        name: "side against strong weekly trend",
        applies: |m, s| {
            matches!(m.weekly.regime, Regime::StrongTrendUp | Regime::StrongTrendDown)
                && against_side(s, m.bias())
        },
        effect: Effect::Add(-3),
    },
    MatchRule {
        name: "weekly conflict favours correction",
        applies: |m, s| {
            m.weekly.has_tag(AdvisoryTag::Conflict) && s.intent_family == IntentFamily::Correction
        },
        effect: Effect::Add(1),
    },
    // structural gating
    MatchRule {
        name: "single prints veto range trading",
        applies: |m, s| {
            m.daily.anomalies.single_prints != SinglePrints::None_
                && s.strategy_type.is_range_bound()
        },
        effect: Effect::Add(-10),
    },
    MatchRule {
        name: "no overlap vetoes range trading",
        applies: |m, s| {
            m.daily.value_overlap == ValueOverlap::NoOverlap && s.strategy_type.is_range_bound()
        },
        effect: Effect::Add(-5),
    },
    MatchRule {
        name: "full overlap vetoes directional trading",
        applies: |m, s| {
            m.daily.value_overlap == ValueOverlap::Full && s.strategy_type.is_directional()
        },
        effect: Effect::Add(-5),
    },
    // participation
    MatchRule {
        name: "thin volume undermines breakouts",
        applies: |m, s| {
            m.daily.relative_volume == RelativeVolume::BelowAvg
                && s.strategy_type == StrategyType::Breakout
        },
        effect: Effect::Add(-3),
    },
    MatchRule {
        name: "initiative volume",
        applies: |m, s| {
            m.daily.relative_volume == RelativeVolume::AboveAvg
                && s.intent_family == IntentFamily::Confidence
        },
        effect: Effect::Add(1),
    },
    MatchRule {
        name: "OTF in control",
        applies: |m, s| {
            m.daily.participant_control == ParticipantControl::Otf
                && s.intent_family == IntentFamily::Confidence
        },
        effect: Effect::Add(1),
    },
    MatchRule {
        name: "locals in control",
        applies: |m, s| {
            m.daily.participant_control == ParticipantControl::Locals
                && s.intent_family == IntentFamily::Rotation
        },
        effect: Effect::Add(1),
    },
    // repair and correction cues
    MatchRule {
        name: "neutral day extension",
        applies: |m, s| {
            m.daily.range_extension == RangeExtension::Both
                && s.intent_family == IntentFamily::Correction
        },
        effect: Effect::Add(2),
    },
    MatchRule {
        name: "one-sided inventory",
        applies: |m, s| {
            m.daily.inventory != Inventory::Balanced && s.strategy_type == StrategyType::Repair
        },
        effect: Effect::Add(1),
    },
    MatchRule {
        name: "untested value edge",
        applies: |m, s| {
            m.daily.anomalies.untested_va_edge != VaEdge::None_
                && s.strategy_type == StrategyType::Repair
        },
        effect: Effect::Add(1),
    },
    MatchRule {
        name: "poor high to repair",
        applies: |m, s| {
            m.daily.anomalies.poor_high
                && s.side == SetupSide::Long
                && s.strategy_type == StrategyType::Repair
        },
        effect: Effect::Add(2),
    },
    MatchRule {
        name: "poor low to repair",
        applies: |m, s| {
            m.daily.anomalies.poor_low
                && s.side == SetupSide::Short
                && s.strategy_type == StrategyType::Repair
        },
        effect: Effect::Add(2),
    },
];

/// Runs the rule list over one setup. Returns `None` when the setup is not offered.
pub fn score_setup(
    rules: &[MatchRule],
    input: &MatchInput<'_>,
    setup: &'static SetupDefinition,
    min_score: i32,
) -> Option<RankedSetup> {
    let mut score = 0;
    let mut forced = false;
    let mut excluded = false;
    let mut hits = Vec::new();

    for rule in rules {
        if !(rule.applies)(input, setup) {
            continue;
        }
        let points = match rule.effect {
            Effect::Force(points) => {
                forced = true;
                points
            }
            Effect::Exclude => {
                excluded = true;
                0
            }
            Effect::Add(points) => points,
        };
        score += points;
        hits.push(RuleHit {
            rule: rule.name,
            points,
        });
    }

    let offered = forced || (!excluded && score >= min_score);
    offered.then_some(RankedSetup {
        setup,
        score,
        forced,
        hits,
    })
}

/// Scores every catalog entry and returns the offered ones: forced overrides first, then
/// by score. Equal keys keep catalog declaration order.
pub fn rank(catalog: &SetupCatalog, input: &MatchInput<'_>, min_score: i32) -> Vec<RankedSetup> {
    let mut ranked: Vec<RankedSetup> = catalog
        .iter()
        .filter_map(|s| score_setup(RULES, input, s, min_score))
        .collect();
    ranked.sort_by(|a, b| (b.forced, b.score).cmp(&(a.forced, a.score)));
    ranked
}
