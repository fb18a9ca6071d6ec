use crate::domain::model::{MatchRecord, OpponentReport};

/// An opponent together with the match number in which they faced the
/// subject team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpponentAnchor {
    pub team: String,
    pub anchor: u32,
}

/// Walk the subject team's matches and collect both members of the opposing
/// alliance for each, keyed to that match's number. An opponent met more
/// than once keeps its first position in the list but takes the anchor of
/// the later match (last write wins).
pub fn build_opponents(matches: &[MatchRecord], team: &str) -> Vec<OpponentAnchor> {
    let mut opponents: Vec<OpponentAnchor> = Vec::new();

    for record in matches {
        for member in record.opposing_pair(team) {
            match opponents.iter_mut().find(|o| o.team == member) {
                Some(existing) => existing.anchor = record.matchnum,
                None => opponents.push(OpponentAnchor {
                    team: member.to_string(),
                    anchor: record.matchnum,
                }),
            }
        }
    }

    opponents
}

/// Longest prefix of `history` strictly below `anchor`. Scanning stops at
/// the first entry that does not qualify; the service returns matches
/// sorted ascending by number, so anything after it is not prior either.
pub fn prior_matches<I>(history: I, anchor: u32) -> Vec<u32>
where
    I: IntoIterator<Item = u32>,
{
    history
        .into_iter()
        .take_while(|&matchnum| matchnum < anchor)
        .collect()
}

/// Deduplicated ascending union of every opponent's prior match numbers.
pub fn flatten_sorted(reports: &[OpponentReport]) -> Vec<u32> {
    let mut all: Vec<u32> = reports
        .iter()
        .flat_map(|r| r.prior_matches.iter().copied())
        .collect();
    all.sort_unstable();
    all.dedup();
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(matchnum: u32, red: [&str; 2], blue: [&str; 2]) -> MatchRecord {
        MatchRecord {
            matchnum,
            red1: red[0].to_string(),
            red2: red[1].to_string(),
            blue1: blue[0].to_string(),
            blue2: blue[1].to_string(),
        }
    }

    #[test]
    fn test_opponents_from_blue_side() {
        let matches = vec![record(12, ["T3", "T4"], ["T1", "T2"])];
        let opponents = build_opponents(&matches, "T1");

        assert_eq!(
            opponents,
            vec![
                OpponentAnchor { team: "T3".to_string(), anchor: 12 },
                OpponentAnchor { team: "T4".to_string(), anchor: 12 },
            ]
        );
    }

    #[test]
    fn test_opponents_from_red_side() {
        let matches = vec![record(7, ["T1", "T5"], ["T6", "T7"])];
        let opponents = build_opponents(&matches, "T1");

        assert_eq!(
            opponents,
            vec![
                OpponentAnchor { team: "T6".to_string(), anchor: 7 },
                OpponentAnchor { team: "T7".to_string(), anchor: 7 },
            ]
        );
    }

    #[test]
    fn test_subject_absent_counts_as_red() {
        // The subject never appears; the blue pair is still recorded.
        let matches = vec![record(3, ["T8", "T9"], ["T10", "T11"])];
        let opponents = build_opponents(&matches, "T1");

        assert_eq!(opponents.len(), 2);
        assert_eq!(opponents[0].team, "T10");
        assert_eq!(opponents[1].team, "T11");
    }

    #[test]
    fn test_repeat_opponent_keeps_last_anchor() {
        let matches = vec![
            record(4, ["T3", "T4"], ["T1", "T2"]),
            record(9, ["T3", "T5"], ["T1", "T6"]),
        ];
        let opponents = build_opponents(&matches, "T1");

        assert_eq!(opponents.len(), 3);
        // T3 stays in first position but carries the later match number.
        assert_eq!(opponents[0], OpponentAnchor { team: "T3".to_string(), anchor: 9 });
        assert_eq!(opponents[1], OpponentAnchor { team: "T4".to_string(), anchor: 4 });
        assert_eq!(opponents[2], OpponentAnchor { team: "T5".to_string(), anchor: 9 });
    }

    #[test]
    fn test_at_most_two_opponents_per_match() {
        let matches = vec![
            record(1, ["A", "B"], ["T1", "X"]),
            record(2, ["C", "D"], ["T1", "Y"]),
            record(3, ["A", "C"], ["T1", "Z"]),
        ];
        let opponents = build_opponents(&matches, "T1");
        assert!(opponents.len() <= 2 * matches.len());
        assert_eq!(opponents.len(), 4); // A, B, C, D with repeats collapsed
    }

    #[test]
    fn test_prior_matches_strict_prefix() {
        assert_eq!(prior_matches([5, 9, 12, 20], 12), vec![5, 9]);
        assert_eq!(prior_matches([7, 12], 12), vec![7]);
    }

    #[test]
    fn test_prior_matches_stops_at_first_nonqualifying() {
        // 9 would qualify but sits behind 12, so it is never reached.
        assert_eq!(prior_matches([5, 12, 9], 12), vec![5]);
    }

    #[test]
    fn test_prior_matches_boundary_first_entry_equals_anchor() {
        assert_eq!(prior_matches([12, 20], 12), Vec::<u32>::new());
    }

    #[test]
    fn test_prior_matches_empty_history() {
        assert_eq!(prior_matches(Vec::new(), 12), Vec::<u32>::new());
    }

    #[test]
    fn test_flatten_sorted_dedups_and_orders() {
        let reports = vec![
            OpponentReport {
                opponent: "T3".to_string(),
                anchor: 12,
                prior_matches: vec![5, 9],
            },
            OpponentReport {
                opponent: "T4".to_string(),
                anchor: 12,
                prior_matches: vec![7, 5],
            },
        ];
        let all = flatten_sorted(&reports);
        assert_eq!(all, vec![5, 7, 9]);
        for pair in all.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
