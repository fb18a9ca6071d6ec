pub mod engine;
pub mod opponents;
pub mod report;

pub use crate::domain::model::{MatchRecord, OpponentReport, ScoutReport};
pub use crate::domain::ports::{ConfigProvider, MatchSource};
pub use crate::utils::error::Result;
