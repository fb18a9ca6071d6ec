use crate::domain::model::MatchRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of match lists for a team, in the order the remote service
/// returns them. Implemented by the HTTP adapter and by mocks in tests.
#[async_trait]
pub trait MatchSource: Send + Sync {
    async fn fetch_matches(&self, team: &str) -> Result<Vec<MatchRecord>>;
}

pub trait ConfigProvider: Send + Sync {
    fn team(&self) -> &str;
    fn base_url(&self) -> &str;
    fn season(&self) -> &str;
    fn sku(&self) -> &str;
}
