pub mod behavior;
pub mod exchange_clock;
pub mod risk_gate;

pub use behavior::{BehavioralEquity, HandicapTier, TiltLabel, TiltScore};
pub use exchange_clock::ExchangeClock;
pub use risk_gate::{GateLock, RiskAssessment, RiskGate, RiskInputs, SizingTier};
