use serde::Deserialize;

/// One scheduled or played match, as returned by the VexDB `get_matches`
/// endpoint. Extra API fields (scores, round, field name) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRecord {
    pub matchnum: u32,
    pub red1: String,
    pub red2: String,
    pub blue1: String,
    pub blue2: String,
}

/// Top-level response envelope. VexDB also reports `status` and `size`;
/// only `result` matters here.
#[derive(Debug, Deserialize)]
pub struct MatchListEnvelope {
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub size: usize,
    pub result: Vec<MatchRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alliance {
    Red,
    Blue,
}

impl MatchRecord {
    /// Which alliance `team` sat on in this match. A team that appears on
    /// neither blue slot counts as red, matching how the endpoint is queried
    /// (the team is always one of the four participants).
    pub fn alliance_of(&self, team: &str) -> Alliance {
        if self.blue1 == team || self.blue2 == team {
            Alliance::Blue
        } else {
            Alliance::Red
        }
    }

    /// The two members of the alliance facing `team`.
    pub fn opposing_pair(&self, team: &str) -> [&str; 2] {
        match self.alliance_of(team) {
            Alliance::Blue => [&self.red1, &self.red2],
            Alliance::Red => [&self.blue1, &self.blue2],
        }
    }
}

/// A single opponent's slice of the report: the match in which they faced
/// the subject team (the anchor) and every match number they competed in
/// before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpponentReport {
    pub opponent: String,
    pub anchor: u32,
    pub prior_matches: Vec<u32>,
}

/// Full output of a scouting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoutReport {
    pub opponents: Vec<OpponentReport>,
    /// Deduplicated ascending union of every opponent's prior matches.
    pub all_matches: Vec<u32>,
}
