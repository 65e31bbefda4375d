//! Bundled setup definitions, in declaration order.
//!
//! Declaration order is the tie-break for equal match scores, so new entries go at the end
//! of their family block and ids are never reused.

use crate::models::daily::{
    MarketContext as Ctx, OpenType as Open, OpeningContext as At, ValueMigration as Mig,
    ValueOverlap as Ovl,
};
use crate::models::{IntentFamily as Fam, SetupDefinition, SetupSide as Side, StrategyType as St};

/// Always offered when the initial balance is narrow.
pub const NARROW_IB_EXPANSION: u16 = 15;
/// Always offered when a naked point of control is on the chart.
pub const NAKED_POC_MAGNETS: [u16; 2] = [22, 23];
/// Always offered when single prints are left behind.
pub const SINGLE_PRINTS_FILL: u16 = 30;

pub static SETUPS: [SetupDefinition; 40] = [
    // ---- CONFIDENCE ------------------------------------------------------
    SetupDefinition {
        id: 1,
        name: "Open Drive Continuation",
        contexts: &[Ctx::Imbalance],
        opening_contexts: &[At::OutsideValue, At::OutsideRange],
        open_types: &[Open::Drive],
        value_overlaps: &[Ovl::NoOverlap, Ovl::Minimum],
        value_migrations: &[Mig::MigratingOutside],
        strategy_type: St::Momentum,
        intent_family: Fam::Confidence,
        side: Side::Both,
        trigger: "First pullback into the opening drive holds above/below the IB midpoint",
        target: "IB 1.5x extension, then prior-day range extreme",
        invalidation: "Price back inside the opening range",
        traps: &["Chasing the third leg", "Fading a drive because it looks extended"],
    },
    SetupDefinition {
        id: 2,
        name: "Test-Drive Continuation",
        contexts: &[Ctx::Imbalance, Ctx::Transition],
        opening_contexts: &[At::OutsideValue, At::InsideValue],
        open_types: &[Open::TestDrive],
        value_overlaps: &[Ovl::NoOverlap, Ovl::Minimum],
        value_migrations: &[Mig::MigratingOutside],
        strategy_type: St::Momentum,
        intent_family: Fam::Confidence,
        side: Side::Both,
        trigger: "Retest of the opening reference fails, drive resumes through the open",
        target: "Opposite extreme of the prior day's value area",
        invalidation: "Test level is accepted for two TPOs",
        traps: &["Entering on the test instead of the rejection"],
    },
    SetupDefinition {
        id: 3,
        name: "IB Extension Breakout",
        contexts: &[Ctx::Imbalance, Ctx::Transition],
        opening_contexts: &[],
        open_types: &[Open::Drive, Open::TestDrive, Open::Auction],
        value_overlaps: &[Ovl::NoOverlap, Ovl::Minimum],
        value_migrations: &[],
        strategy_type: St::Breakout,
        intent_family: Fam::Confidence,
        side: Side::Both,
        trigger: "Range extension beyond the IB with rising volume",
        target: "IB 2x extension",
        invalidation: "Close back inside the IB",
        traps: &["Breakout on declining volume", "Entering after the 2x target printed"],
    },
    SetupDefinition {
        id: 4,
        name: "Value Acceptance Outside",
        contexts: &[Ctx::Imbalance],
        opening_contexts: &[At::OutsideValue],
        open_types: &[],
        value_overlaps: &[Ovl::NoOverlap],
        value_migrations: &[Mig::MigratingOutside],
        strategy_type: St::Momentum,
        intent_family: Fam::Confidence,
        side: Side::Both,
        trigger: "Two TPOs of acceptance outside the prior value area",
        target: "Next high-volume node in the direction of migration",
        invalidation: "Developing POC moves back inside prior value",
        traps: &["Mistaking a probe for acceptance"],
    },
    SetupDefinition {
        id: 5,
        name: "IB Edge Pullback",
        contexts: &[Ctx::Imbalance],
        opening_contexts: &[],
        open_types: &[Open::Drive, Open::TestDrive],
        value_overlaps: &[],
        value_migrations: &[Mig::MigratingOutside],
        strategy_type: St::Pullback,
        intent_family: Fam::Confidence,
        side: Side::Both,
        trigger: "Pullback to the broken IB edge holds with responsive volume",
        target: "Session extreme, then 1.5x IB",
        invalidation: "Acceptance back through the IB edge",
        traps: &["Buying the pullback on a rotation day"],
    },
    SetupDefinition {
        id: 6,
        name: "Gap and Go",
        contexts: &[Ctx::Imbalance],
        opening_contexts: &[At::OutsideRange],
        open_types: &[Open::Drive],
        value_overlaps: &[Ovl::NoOverlap],
        value_migrations: &[],
        strategy_type: St::Momentum,
        intent_family: Fam::Confidence,
        side: Side::Both,
        trigger: "Gap holds through the first 15 minutes without revisiting the prior close",
        target: "Measured gap extension",
        invalidation: "Half-gap fill",
        traps: &["Assuming every gap fills", "Late entry after the IB is set"],
    },
    SetupDefinition {
        id: 7,
        name: "Trend Day Add-on",
        contexts: &[Ctx::Imbalance],
        opening_contexts: &[],
        open_types: &[Open::Drive],
        value_overlaps: &[Ovl::NoOverlap],
        value_migrations: &[Mig::MigratingOutside],
        strategy_type: St::Pullback,
        intent_family: Fam::Confidence,
        side: Side::Both,
        trigger: "Shallow pullback to the developing VWAP on a one-timeframe day",
        target: "Hold to the close or until one-timeframing breaks",
        invalidation: "First TPO overlap against the trend",
        traps: &["Taking profit too early on a trend day"],
    },
    SetupDefinition {
        id: 8,
        name: "Balance Breakout",
        contexts: &[Ctx::Transition],
        opening_contexts: &[At::InsideValue, At::OutsideValue],
        open_types: &[],
        value_overlaps: &[Ovl::Minimum, Ovl::NoOverlap],
        value_migrations: &[Mig::MigratingOutside],
        strategy_type: St::Breakout,
        intent_family: Fam::Confidence,
        side: Side::Both,
        trigger: "Multi-day balance edge breaks with initiative volume",
        target: "Balance height projected from the broken edge",
        invalidation: "Return inside balance and acceptance at the POC",
        traps: &["Look-above-and-fail at the balance edge"],
    },
    SetupDefinition {
        id: 9,
        name: "Initiative Tail Continuation",
        contexts: &[Ctx::Imbalance, Ctx::Transition],
        opening_contexts: &[],
        open_types: &[Open::Drive, Open::TestDrive],
        value_overlaps: &[],
        value_migrations: &[],
        strategy_type: St::Momentum,
        intent_family: Fam::Confidence,
        side: Side::Both,
        trigger: "Buying/selling tail of two or more TPOs at the open",
        target: "Prior-day extreme",
        invalidation: "Tail gets filled",
        traps: &["Treating a one-tick tail as initiative"],
    },
    SetupDefinition {
        id: 10,
        name: "Weekly Bias Pullback",
        contexts: &[Ctx::Imbalance, Ctx::Transition],
        opening_contexts: &[At::InsideValue],
        open_types: &[],
        value_overlaps: &[Ovl::Minimum, Ovl::High],
        value_migrations: &[],
        strategy_type: St::Pullback,
        intent_family: Fam::Confidence,
        side: Side::Both,
        trigger: "Pullback into prior value in the direction of the weekly bias",
        target: "Weekly value-area edge",
        invalidation: "Daily close against the weekly bias",
        traps: &["Ignoring a weekly conflict tag"],
    },
    // ---- ROTATION --------------------------------------------------------
    SetupDefinition {
        id: 11,
        name: "Value Area Rotation",
        contexts: &[Ctx::Balance],
        opening_contexts: &[At::InsideValue],
        open_types: &[Open::Auction],
        value_overlaps: &[Ovl::Full, Ovl::High],
        value_migrations: &[Mig::None_],
        strategy_type: St::Rotation,
        intent_family: Fam::Rotation,
        side: Side::Both,
        trigger: "Rejection at one value-area edge",
        target: "Opposite value-area edge",
        invalidation: "Acceptance outside value",
        traps: &["Holding for a breakout on a balance day"],
    },
    SetupDefinition {
        id: 12,
        name: "VAH Fade",
        contexts: &[Ctx::Balance],
        opening_contexts: &[At::InsideValue],
        open_types: &[Open::Auction],
        value_overlaps: &[Ovl::Full],
        value_migrations: &[Mig::None_],
        strategy_type: St::Fade,
        intent_family: Fam::Rotation,
        side: Side::Short,
        trigger: "Responsive selling at the value-area high",
        target: "POC",
        invalidation: "Two TPOs above VAH",
        traps: &["Fading OTF buying", "Adding above VAH"],
    },
    SetupDefinition {
        id: 13,
        name: "VAL Fade",
        contexts: &[Ctx::Balance],
        opening_contexts: &[At::InsideValue],
        open_types: &[Open::Auction],
        value_overlaps: &[Ovl::Full],
        value_migrations: &[Mig::None_],
        strategy_type: St::Fade,
        intent_family: Fam::Rotation,
        side: Side::Long,
        trigger: "Responsive buying at the value-area low",
        target: "POC",
        invalidation: "Two TPOs below VAL",
        traps: &["Fading OTF selling", "Adding below VAL"],
    },
    SetupDefinition {
        id: 14,
        name: "IB Range Fade",
        contexts: &[Ctx::Balance],
        opening_contexts: &[],
        open_types: &[Open::Auction],
        value_overlaps: &[Ovl::Full, Ovl::High],
        value_migrations: &[],
        strategy_type: St::Fade,
        intent_family: Fam::Rotation,
        side: Side::Both,
        trigger: "Failed probe beyond a wide IB edge",
        target: "IB midpoint",
        invalidation: "Range extension accepted",
        traps: &["Fading a narrow IB"],
    },
    SetupDefinition {
        id: 15,
        name: "Narrow IB Expansion",
        contexts: &[],
        opening_contexts: &[],
        open_types: &[],
        value_overlaps: &[],
        value_migrations: &[],
        strategy_type: St::Breakout,
        intent_family: Fam::Confidence,
        side: Side::Both,
        trigger: "First clean break of a narrow IB with volume",
        target: "IB 2x-3x extension",
        invalidation: "Break fails and price re-enters the IB",
        traps: &["Pre-positioning inside the IB", "Trading the break after the cutoff"],
    },
    SetupDefinition {
        id: 16,
        name: "POC Rotation",
        contexts: &[Ctx::Balance],
        opening_contexts: &[At::InsideValue],
        open_types: &[],
        value_overlaps: &[Ovl::High, Ovl::Full],
        value_migrations: &[Mig::None_],
        strategy_type: St::Rotation,
        intent_family: Fam::Rotation,
        side: Side::Both,
        trigger: "Price returns to the developing POC after a probe",
        target: "Value-area edge on the opposite side",
        invalidation: "POC migrates with price",
        traps: &["Over-trading the POC chop"],
    },
    SetupDefinition {
        id: 17,
        name: "Inside Day Rotation",
        contexts: &[Ctx::Balance],
        opening_contexts: &[At::InsideValue],
        open_types: &[Open::Auction],
        value_overlaps: &[Ovl::Full],
        value_migrations: &[],
        strategy_type: St::Rotation,
        intent_family: Fam::Rotation,
        side: Side::Both,
        trigger: "Rejection of the prior day's range extreme",
        target: "Prior-day POC",
        invalidation: "Range extension outside the prior day",
        traps: &["Expecting follow-through inside an inside day"],
    },
    SetupDefinition {
        id: 18,
        name: "Locals Range Scalp",
        contexts: &[Ctx::Balance],
        opening_contexts: &[],
        open_types: &[Open::Auction],
        value_overlaps: &[],
        value_migrations: &[Mig::None_],
        strategy_type: St::Rotation,
        intent_family: Fam::Rotation,
        side: Side::Both,
        trigger: "Locals defend the IB edges on thin volume",
        target: "Opposite IB edge",
        invalidation: "Volume expansion at the edge",
        traps: &["Sizing up a scalp"],
    },
    SetupDefinition {
        id: 19,
        name: "Overnight Extreme Fade",
        contexts: &[Ctx::Balance, Ctx::Transition],
        opening_contexts: &[At::InsideValue, At::OutsideValue],
        open_types: &[Open::Auction],
        value_overlaps: &[],
        value_migrations: &[],
        strategy_type: St::Fade,
        intent_family: Fam::Rotation,
        side: Side::Both,
        trigger: "Test of the overnight high/low fails in the first hour",
        target: "Overnight midpoint",
        invalidation: "Acceptance beyond the overnight extreme",
        traps: &["Fading with full overnight inventory behind the move"],
    },
    SetupDefinition {
        id: 20,
        name: "Failed Balance Breakout",
        contexts: &[Ctx::Balance, Ctx::Transition],
        opening_contexts: &[],
        open_types: &[Open::Auction, Open::RejectionReversal],
        value_overlaps: &[Ovl::High, Ovl::Full],
        value_migrations: &[],
        strategy_type: St::FailedAuction,
        intent_family: Fam::Correction,
        side: Side::Both,
        trigger: "Breakout from balance returns inside within two TPOs",
        target: "Opposite balance edge",
        invalidation: "New extreme beyond the failed breakout",
        traps: &["Entering before the return inside is confirmed"],
    },
    // ---- FILL ------------------------------------------------------------
    SetupDefinition {
        id: 21,
        name: "Gap Fill",
        contexts: &[Ctx::Balance, Ctx::Transition],
        opening_contexts: &[At::OutsideValue, At::OutsideRange],
        open_types: &[Open::Auction, Open::RejectionReversal],
        value_overlaps: &[Ovl::High, Ovl::Minimum],
        value_migrations: &[Mig::ToPriorValue],
        strategy_type: St::Repair,
        intent_family: Fam::Fill,
        side: Side::Both,
        trigger: "Open fails to extend away from the gap",
        target: "Prior-day close",
        invalidation: "Gap extends past the IB",
        traps: &["Fading a drive gap"],
    },
    SetupDefinition {
        id: 22,
        name: "Naked POC Magnet",
        contexts: &[],
        opening_contexts: &[],
        open_types: &[],
        value_overlaps: &[],
        value_migrations: &[],
        strategy_type: St::Magnet,
        intent_family: Fam::Fill,
        side: Side::Both,
        trigger: "Price rotates toward an unvisited prior POC",
        target: "The naked POC",
        invalidation: "Initiative activity away from the POC",
        traps: &["Expecting a reversal at the POC instead of a touch"],
    },
    SetupDefinition {
        id: 23,
        name: "Naked VPOC Reversion",
        contexts: &[],
        opening_contexts: &[],
        open_types: &[],
        value_overlaps: &[],
        value_migrations: &[],
        strategy_type: St::Magnet,
        intent_family: Fam::Fill,
        side: Side::Both,
        trigger: "Value migrates toward a naked volume POC",
        target: "Naked VPOC, scale out at the touch",
        invalidation: "Value migrates away for two periods",
        traps: &["Holding through the touch"],
    },
    SetupDefinition {
        id: 24,
        name: "Untested VA Edge Test",
        contexts: &[Ctx::Balance, Ctx::Transition],
        opening_contexts: &[At::InsideValue],
        open_types: &[],
        value_overlaps: &[Ovl::High, Ovl::Minimum],
        value_migrations: &[Mig::ToPriorValue],
        strategy_type: St::Repair,
        intent_family: Fam::Fill,
        side: Side::Both,
        trigger: "Rotation toward the untested prior value-area edge",
        target: "The untested edge",
        invalidation: "Acceptance beyond the opposite edge",
        traps: &["Taking the reversal at the edge as a given"],
    },
    SetupDefinition {
        id: 25,
        name: "80% Rule Traverse",
        contexts: &[Ctx::Balance, Ctx::Transition],
        opening_contexts: &[At::OutsideValue],
        open_types: &[Open::Auction, Open::RejectionReversal],
        value_overlaps: &[Ovl::High],
        value_migrations: &[Mig::ToPriorValue],
        strategy_type: St::Repair,
        intent_family: Fam::Fill,
        side: Side::Both,
        trigger: "Two consecutive TPOs inside prior value after an outside open",
        target: "Opposite side of prior value",
        invalidation: "Price leaves value in the opening direction",
        traps: &["Entering on one TPO"],
    },
    SetupDefinition {
        id: 26,
        name: "Poor High Repair",
        contexts: &[Ctx::Balance, Ctx::Transition],
        opening_contexts: &[],
        open_types: &[],
        value_overlaps: &[],
        value_migrations: &[Mig::ToPriorValue, Mig::None_],
        strategy_type: St::Repair,
        intent_family: Fam::Fill,
        side: Side::Long,
        trigger: "Approach to an unfinished (poor) high",
        target: "A few ticks through the poor high",
        invalidation: "Excess forms below the poor high",
        traps: &["Shorting an unfinished high"],
    },
    SetupDefinition {
        id: 27,
        name: "Poor Low Repair",
        contexts: &[Ctx::Balance, Ctx::Transition],
        opening_contexts: &[],
        open_types: &[],
        value_overlaps: &[],
        value_migrations: &[Mig::ToPriorValue, Mig::None_],
        strategy_type: St::Repair,
        intent_family: Fam::Fill,
        side: Side::Short,
        trigger: "Approach to an unfinished (poor) low",
        target: "A few ticks through the poor low",
        invalidation: "Excess forms above the poor low",
        traps: &["Buying an unfinished low"],
    },
    SetupDefinition {
        id: 28,
        name: "Inventory Correction",
        contexts: &[Ctx::Balance, Ctx::Transition],
        opening_contexts: &[At::InsideValue, At::OutsideValue],
        open_types: &[Open::Auction, Open::TestDrive],
        value_overlaps: &[],
        value_migrations: &[],
        strategy_type: St::Repair,
        intent_family: Fam::Fill,
        side: Side::Both,
        trigger: "Overnight inventory fully one-sided and the open stalls",
        target: "Overnight midpoint or prior close",
        invalidation: "Open extends in the inventory direction",
        traps: &["Fighting a drive with the inventory"],
    },
    SetupDefinition {
        id: 29,
        name: "Return to Prior Value",
        contexts: &[Ctx::Transition],
        opening_contexts: &[At::OutsideValue],
        open_types: &[Open::RejectionReversal, Open::Auction],
        value_overlaps: &[Ovl::Minimum, Ovl::High],
        value_migrations: &[Mig::ToPriorValue],
        strategy_type: St::Repair,
        intent_family: Fam::Fill,
        side: Side::Both,
        trigger: "Outside open cannot find acceptance and re-enters value",
        target: "Prior-day POC",
        invalidation: "Acceptance outside value",
        traps: &["Anticipating the re-entry"],
    },
    SetupDefinition {
        id: 30,
        name: "Single Prints Fill",
        contexts: &[],
        opening_contexts: &[],
        open_types: &[],
        value_overlaps: &[],
        value_migrations: &[],
        strategy_type: St::Repair,
        intent_family: Fam::Fill,
        side: Side::Both,
        trigger: "Price trades back into the single-print zone",
        target: "Far side of the single prints",
        invalidation: "Rejection at the first print",
        traps: &["Fading into the single prints", "Ignoring them as support/resistance"],
    },
    // ---- CORRECTION ------------------------------------------------------
    SetupDefinition {
        id: 31,
        name: "Open Rejection Reversal",
        contexts: &[Ctx::Transition, Ctx::Imbalance],
        opening_contexts: &[At::OutsideValue, At::OutsideRange],
        open_types: &[Open::RejectionReversal],
        value_overlaps: &[],
        value_migrations: &[],
        strategy_type: St::Reversal,
        intent_family: Fam::Correction,
        side: Side::Both,
        trigger: "Opening probe rejected and price crosses the open",
        target: "Prior value-area edge",
        invalidation: "New extreme in the probe direction",
        traps: &["Reversing before the open is crossed"],
    },
    SetupDefinition {
        id: 32,
        name: "Failed Auction Reversal",
        contexts: &[Ctx::Balance, Ctx::Transition],
        opening_contexts: &[],
        open_types: &[Open::Auction, Open::RejectionReversal],
        value_overlaps: &[],
        value_migrations: &[],
        strategy_type: St::FailedAuction,
        intent_family: Fam::Correction,
        side: Side::Both,
        trigger: "Auction beyond a reference finds no continuation and reverses",
        target: "Opposite side of the day's range",
        invalidation: "Auction resumes beyond the reference",
        traps: &["Confusing a pause with a failure"],
    },
    SetupDefinition {
        id: 33,
        name: "Look Above and Fail",
        contexts: &[Ctx::Balance, Ctx::Transition],
        opening_contexts: &[],
        open_types: &[],
        value_overlaps: &[Ovl::High, Ovl::Full],
        value_migrations: &[],
        strategy_type: St::FailedAuction,
        intent_family: Fam::Correction,
        side: Side::Short,
        trigger: "Break above a key high returns inside within one period",
        target: "Balance midpoint",
        invalidation: "Acceptance above the broken high",
        traps: &["Shorting the first tick above"],
    },
    SetupDefinition {
        id: 34,
        name: "Look Below and Fail",
        contexts: &[Ctx::Balance, Ctx::Transition],
        opening_contexts: &[],
        open_types: &[],
        value_overlaps: &[Ovl::High, Ovl::Full],
        value_migrations: &[],
        strategy_type: St::FailedAuction,
        intent_family: Fam::Correction,
        side: Side::Long,
        trigger: "Break below a key low returns inside within one period",
        target: "Balance midpoint",
        invalidation: "Acceptance below the broken low",
        traps: &["Buying the first tick below"],
    },
    SetupDefinition {
        id: 35,
        name: "Counter-Bias Extension Fade",
        contexts: &[Ctx::Transition],
        opening_contexts: &[At::InsideValue],
        open_types: &[Open::Auction, Open::TestDrive],
        value_overlaps: &[Ovl::Minimum, Ovl::High],
        value_migrations: &[],
        strategy_type: St::Reversal,
        intent_family: Fam::Correction,
        side: Side::Both,
        trigger: "Range extension against the weekly bias stalls on low volume",
        target: "Back to the IB",
        invalidation: "Second extension in the same direction",
        traps: &["Fading with the daily trend against you"],
    },
    SetupDefinition {
        id: 36,
        name: "Neutral Day Reversal",
        contexts: &[Ctx::Transition, Ctx::Balance],
        opening_contexts: &[],
        open_types: &[],
        value_overlaps: &[Ovl::High, Ovl::Full],
        value_migrations: &[],
        strategy_type: St::Reversal,
        intent_family: Fam::Correction,
        side: Side::Both,
        trigger: "Extension on both sides of the IB, close back toward the middle",
        target: "IB midpoint",
        invalidation: "Close at either extreme",
        traps: &["Trading the second extension as a breakout"],
    },
    SetupDefinition {
        id: 37,
        name: "Excess High Reversal",
        contexts: &[Ctx::Imbalance, Ctx::Transition],
        opening_contexts: &[],
        open_types: &[Open::RejectionReversal],
        value_overlaps: &[],
        value_migrations: &[],
        strategy_type: St::Reversal,
        intent_family: Fam::Correction,
        side: Side::Short,
        trigger: "Selling tail forms at the high after an exhausted move",
        target: "Developing POC",
        invalidation: "Tail gets taken out",
        traps: &["Calling a top without a tail"],
    },
    SetupDefinition {
        id: 38,
        name: "Excess Low Reversal",
        contexts: &[Ctx::Imbalance, Ctx::Transition],
        opening_contexts: &[],
        open_types: &[Open::RejectionReversal],
        value_overlaps: &[],
        value_migrations: &[],
        strategy_type: St::Reversal,
        intent_family: Fam::Correction,
        side: Side::Long,
        trigger: "Buying tail forms at the low after an exhausted move",
        target: "Developing POC",
        invalidation: "Tail gets taken out",
        traps: &["Calling a bottom without a tail"],
    },
    SetupDefinition {
        id: 39,
        name: "Weekly Conflict Mean Reversion",
        contexts: &[Ctx::Transition],
        opening_contexts: &[],
        open_types: &[],
        value_overlaps: &[Ovl::Minimum, Ovl::High],
        value_migrations: &[Mig::ToPriorValue],
        strategy_type: St::Reversal,
        intent_family: Fam::Correction,
        side: Side::Both,
        trigger: "Daily move against the weekly open loses momentum",
        target: "Weekly open",
        invalidation: "Weekly open reclaimed against the trade",
        traps: &["Trading size while the week is conflicted"],
    },
    SetupDefinition {
        id: 40,
        name: "Trapped Traders Squeeze",
        contexts: &[Ctx::Transition, Ctx::Imbalance],
        opening_contexts: &[],
        open_types: &[Open::RejectionReversal, Open::TestDrive],
        value_overlaps: &[],
        value_migrations: &[],
        strategy_type: St::FailedAuction,
        intent_family: Fam::Correction,
        side: Side::Both,
        trigger: "Breakout traders trapped beyond a level that is quickly reclaimed",
        target: "Stops beyond the opposite IB edge",
        invalidation: "Level lost again",
        traps: &["Joining the trapped side"],
    },
];
