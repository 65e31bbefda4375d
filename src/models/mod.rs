pub mod daily;
pub mod direction;
pub mod setup;
pub mod trade;
pub mod weekly;

pub use daily::*;
pub use direction::*;
pub use setup::{IntentFamily, PredicateMatch, SetupDefinition, StrategyType};
pub use trade::{ExecutionError, TradeRecord};
pub use weekly::*;
