use crate::core::opponents::{build_opponents, flatten_sorted, prior_matches};
use crate::domain::model::{OpponentReport, ScoutReport};
use crate::domain::ports::{ConfigProvider, MatchSource};
use crate::utils::error::Result;

/// Runs the whole scouting pass: primary fetch, opponent extraction, one
/// history fetch per opponent, prior-match filtering, aggregation.
pub struct ScoutEngine<S: MatchSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: MatchSource, C: ConfigProvider> ScoutEngine<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }

    pub async fn run(&self) -> Result<ScoutReport> {
        let team = self.config.team();

        tracing::info!("fetching matches for {}", team);
        let primary = self.source.fetch_matches(team).await?;
        tracing::debug!("{} primary matches", primary.len());

        let opponents = build_opponents(&primary, team);
        tracing::info!("{} distinct opponents", opponents.len());

        let mut reports = Vec::with_capacity(opponents.len());
        for opponent in opponents {
            let history = self.source.fetch_matches(&opponent.team).await?;
            let prior = prior_matches(history.iter().map(|m| m.matchnum), opponent.anchor);
            tracing::debug!(
                "{}: {} prior matches before #{}",
                opponent.team,
                prior.len(),
                opponent.anchor
            );
            reports.push(OpponentReport {
                opponent: opponent.team,
                anchor: opponent.anchor,
                prior_matches: prior,
            });
        }

        let all_matches = flatten_sorted(&reports);
        Ok(ScoutReport {
            opponents: reports,
            all_matches,
        })
    }
}
