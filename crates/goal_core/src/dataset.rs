//! Derived, read-only goal dataset.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tracing::debug;

use crate::analysis::score::reconstruct_scores;
use crate::models::{GoalEvent, GoalRecord, MatchId, Score, Segment};

/// All goals of one load, in file order, with segment and running score.
///
/// Built once by [`GoalDataset::derive`] and only read afterwards. Every
/// query borrows it; nothing mutates it.
#[derive(Debug, Clone, Default)]
pub struct GoalDataset {
    events: Vec<GoalEvent>,
    final_scores: FxHashMap<MatchId, Score>,
}

impl GoalDataset {
    /// Classify every minute and replay running scores over `records`,
    /// which must be in source file order.
    pub fn derive(records: Vec<GoalRecord>) -> Self {
        let ledger = reconstruct_scores(&records);

        let events: Vec<GoalEvent> = records
            .into_iter()
            .zip(ledger.per_goal)
            .map(|(record, score)| GoalEvent { segment: Segment::classify(record.minute), record, score })
            .collect();

        debug!(goals = events.len(), matches = ledger.finals.len(), "derived goal dataset");

        Self { events, final_scores: ledger.finals }
    }

    pub fn events(&self) -> &[GoalEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn match_count(&self) -> usize {
        self.final_scores.len()
    }

    pub fn final_score(&self, match_id: &MatchId) -> Option<Score> {
        self.final_scores.get(match_id).copied()
    }

    /// Goals of one match in file order.
    pub fn match_goals<'a>(&'a self, match_id: &'a MatchId) -> impl Iterator<Item = &'a GoalEvent> + 'a {
        self.events.iter().filter(move |e| e.match_id() == match_id)
    }

    pub fn summary(&self) -> DatasetSummary {
        let leagues: FxHashSet<&str> = self.events.iter().map(GoalEvent::league).collect();
        DatasetSummary { goals: self.len(), matches: self.match_count(), leagues: leagues.len() }
    }
}

/// Headline counts for a loaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub goals: usize,
    pub matches: usize,
    pub leagues: usize,
}
