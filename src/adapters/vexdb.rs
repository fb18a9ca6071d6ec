use crate::domain::model::{MatchListEnvelope, MatchRecord};
use crate::domain::ports::{ConfigProvider, MatchSource};
use crate::utils::error::{Result, ScoutError};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// HTTP adapter for the VexDB `get_matches` endpoint. One GET per call,
/// no retries, no caching.
pub struct VexDbClient {
    client: Client,
    base_url: Url,
    season: String,
    sku: String,
}

impl VexDbClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: Url::parse(config.base_url())?,
            season: config.season().to_string(),
            sku: config.sku().to_string(),
        })
    }

    fn matches_url(&self, team: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("season", &self.season)
            .append_pair("sku", &self.sku)
            .append_pair("team", team);
        url
    }
}

#[async_trait]
impl MatchSource for VexDbClient {
    async fn fetch_matches(&self, team: &str) -> Result<Vec<MatchRecord>> {
        let url = self.matches_url(team);
        tracing::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScoutError::ApiStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let envelope: MatchListEnvelope = response.json().await?;
        tracing::debug!("{} matches returned for {}", envelope.result.len(), team);
        Ok(envelope.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestConfig;

    impl ConfigProvider for TestConfig {
        fn team(&self) -> &str {
            "254A"
        }
        fn base_url(&self) -> &str {
            "https://api.vexdb.io/v1/get_matches"
        }
        fn season(&self) -> &str {
            "Turning Point"
        }
        fn sku(&self) -> &str {
            "RE-VRC-18-5506"
        }
    }

    #[test]
    fn test_matches_url_query_pairs() {
        let client = VexDbClient::new(&TestConfig).unwrap();
        let url = client.matches_url("254A");

        assert_eq!(url.path(), "/v1/get_matches");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("season".to_string(), "Turning Point".to_string()),
                ("sku".to_string(), "RE-VRC-18-5506".to_string()),
                ("team".to_string(), "254A".to_string()),
            ]
        );
    }

    #[test]
    fn test_season_is_percent_encoded() {
        let client = VexDbClient::new(&TestConfig).unwrap();
        let url = client.matches_url("254A");
        assert!(url.as_str().contains("season=Turning+Point") || url.as_str().contains("season=Turning%20Point"));
    }
}
