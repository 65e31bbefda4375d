pub mod stages;

pub use stages::{ProtocolStage, ProtocolStageState};
