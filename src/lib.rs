pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::vexdb::VexDbClient;
pub use config::CliConfig;
pub use core::engine::ScoutEngine;
pub use core::report::render;
pub use utils::error::{Result, ScoutError};
