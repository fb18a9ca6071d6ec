use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;

pub const DEFAULT_BASE_URL: &str = "https://api.vexdb.io/v1/get_matches";
pub const DEFAULT_SEASON: &str = "Turning Point";
pub const DEFAULT_SKU: &str = "RE-VRC-18-5506";

#[derive(Debug, Clone, Parser)]
#[command(name = "match-scout")]
#[command(about = "Report the matches a team's opponents played before facing it")]
pub struct CliConfig {
    /// Team identifier to scout, e.g. 254A
    pub team: String,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value = DEFAULT_SEASON)]
    pub season: String,

    #[arg(long, default_value = DEFAULT_SKU)]
    pub sku: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn team(&self) -> &str {
        &self.team
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn season(&self) -> &str {
        &self.season
    }

    fn sku(&self) -> &str {
        &self.sku
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("team", &self.team)?;
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("season", &self.season)?;
        validate_non_empty_string("sku", &self.sku)?;
        Ok(())
    }
}
