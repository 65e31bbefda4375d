pub mod daily_scanner;
pub mod narrative;
pub mod setup_matcher;
pub mod weekly_matrix;

pub use daily_scanner::{DailyScanner, ScanReport};
pub use setup_matcher::RankedSetup;
pub use weekly_matrix::{AdvisoryTag, Regime, WeeklyMatrix, WeeklyVerdict};
