//! Running-score reconstruction.
//!
//! Goals are replayed in file order. Each match id owns a home/away tally that
//! is created on its first goal and only ever incremented, so a match whose
//! rows are interleaved with other matches still accumulates correctly.

use rustc_hash::FxHashMap;

use crate::models::{GoalRecord, MatchId, Score, Venue};

/// Per-match tallies built up during one replay.
#[derive(Debug, Clone, Default)]
pub struct MatchScoreState {
    tallies: FxHashMap<MatchId, Score>,
}

impl MatchScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one goal and return the score right after it.
    pub fn record_goal(&mut self, match_id: &MatchId, venue: Venue) -> Score {
        let tally = self.tallies.entry(match_id.clone()).or_default();
        match venue {
            Venue::Home => tally.home += 1,
            Venue::Away => tally.away += 1,
        }
        *tally
    }

    pub fn into_finals(self) -> FxHashMap<MatchId, Score> {
        self.tallies
    }
}

/// Result of a replay: one score per input goal plus the final tallies.
#[derive(Debug, Clone)]
pub struct ScoreLedger {
    /// `per_goal[i]` is the score right after `events[i]`.
    pub per_goal: Vec<Score>,
    pub finals: FxHashMap<MatchId, Score>,
}

/// Replay goals in file order and stamp each with the running score.
///
/// `events_in_file_order` must keep the order of the source rows: within a
/// match, goals are assumed to be listed chronologically. The returned
/// `per_goal` has the same length and order as the input.
pub fn reconstruct_scores(events_in_file_order: &[GoalRecord]) -> ScoreLedger {
    let mut state = MatchScoreState::new();
    let per_goal = events_in_file_order
        .iter()
        .map(|event| state.record_goal(&event.match_id, event.venue))
        .collect();

    ScoreLedger { per_goal, finals: state.into_finals() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Minute;

    fn goal(match_id: &str, venue: Venue) -> GoalRecord {
        GoalRecord {
            league: "L".into(),
            date: "2024-01-01".into(),
            team: "T".into(),
            opponent: "O".into(),
            scorer: "S".into(),
            assist: None,
            minute: Minute::regular(10),
            venue,
            match_id: MatchId::new(match_id),
        }
    }

    fn labels(ledger: &ScoreLedger) -> Vec<String> {
        ledger.per_goal.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_match_sequence() {
        let events = vec![
            goal("m1", Venue::Home),
            goal("m1", Venue::Home),
            goal("m1", Venue::Away),
        ];
        let ledger = reconstruct_scores(&events);
        assert_eq!(labels(&ledger), ["1-0", "2-0", "2-1"]);
        assert_eq!(ledger.finals[&MatchId::new("m1")], Score::new(2, 1));
    }

    #[test]
    fn test_interleaved_matches_accumulate_by_key() {
        let events = vec![
            goal("a", Venue::Away),
            goal("b", Venue::Home),
            goal("a", Venue::Home),
            goal("c", Venue::Away),
            goal("b", Venue::Home),
            goal("a", Venue::Away),
        ];
        let ledger = reconstruct_scores(&events);
        assert_eq!(labels(&ledger), ["0-1", "1-0", "1-1", "0-1", "2-0", "1-2"]);
        assert_eq!(ledger.finals.len(), 3);
    }

    #[test]
    fn test_empty_input() {
        let ledger = reconstruct_scores(&[]);
        assert!(ledger.per_goal.is_empty());
        assert!(ledger.finals.is_empty());
    }

    #[test]
    fn test_state_only_increments() {
        let mut state = MatchScoreState::new();
        let id = MatchId::new("x");
        assert_eq!(state.record_goal(&id, Venue::Away), Score::new(0, 1));
        assert_eq!(state.record_goal(&id, Venue::Home), Score::new(1, 1));
        let finals = state.into_finals();
        assert_eq!(finals.len(), 1);
        assert_eq!(finals[&id], Score::new(1, 1));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_goals() -> impl Strategy<Value = Vec<GoalRecord>> {
            prop::collection::vec((0u8..4, any::<bool>()), 0..60).prop_map(|raw| {
                raw.into_iter()
                    .map(|(m, home)| {
                        let venue = if home { Venue::Home } else { Venue::Away };
                        goal(&format!("m{}", m), venue)
                    })
                    .collect()
            })
        }

        proptest! {
            /// Interleaved replay equals replaying each match on its own.
            #[test]
            fn prop_interleaving_matches_isolation(events in arb_goals()) {
                let together = reconstruct_scores(&events);

                for m in 0u8..4 {
                    let id = MatchId::new(format!("m{}", m));
                    let (positions, own): (Vec<usize>, Vec<GoalRecord>) = events
                        .iter()
                        .enumerate()
                        .filter(|(_, e)| e.match_id == id)
                        .map(|(i, e)| (i, e.clone()))
                        .unzip();
                    let alone = reconstruct_scores(&own);
                    for (k, pos) in positions.iter().enumerate() {
                        prop_assert_eq!(together.per_goal[*pos], alone.per_goal[k]);
                    }
                }
            }

            /// Each goal raises exactly one side by one.
            #[test]
            fn prop_total_goals_match_input(events in arb_goals()) {
                let ledger = reconstruct_scores(&events);
                let total: u32 = ledger.finals.values().map(|s| s.home + s.away).sum();
                prop_assert_eq!(total as usize, events.len());
            }
        }
    }
}
