//! Frequency counts behind the dashboard charts.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::models::{GoalEvent, Segment};

/// Default chart length for leaderboards.
pub const TOP_N: usize = 10;

/// One bar of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry {
    pub label: String,
    pub count: usize,
}

impl CountEntry {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self { label: label.into(), count }
    }
}

/// Count occurrences, most frequent first.
///
/// Ties keep the order in which values were first seen.
pub fn value_counts<'a, I>(values: I) -> Vec<CountEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut slots: FxHashMap<&'a str, usize> = FxHashMap::default();
    let mut entries: Vec<(&'a str, usize)> = Vec::new();

    for value in values {
        match slots.get(value) {
            Some(&slot) => entries[slot].1 += 1,
            None => {
                slots.insert(value, entries.len());
                entries.push((value, 1));
            }
        }
    }

    // stable: equal counts stay in encounter order
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.into_iter().map(|(label, count)| CountEntry::new(label, count)).collect()
}

/// [`value_counts`] truncated to the first `n` entries.
pub fn top_counts<'a, I>(values: I, n: usize) -> Vec<CountEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = value_counts(values);
    counts.truncate(n);
    counts
}

pub fn top_scorers(events: &[&GoalEvent], n: usize) -> Vec<CountEntry> {
    top_counts(events.iter().map(|e| e.scorer()), n)
}

/// Goals with an empty assist do not count towards anyone.
pub fn top_assisters(events: &[&GoalEvent], n: usize) -> Vec<CountEntry> {
    top_counts(events.iter().filter_map(|e| e.assist()), n)
}

pub fn goals_by_team(events: &[&GoalEvent]) -> Vec<CountEntry> {
    value_counts(events.iter().map(|e| e.team()))
}

/// All eight segments in chronological order, zero-filled.
pub fn goals_by_segment(events: &[&GoalEvent]) -> Vec<CountEntry> {
    let mut counts = [0usize; Segment::ALL.len()];
    for event in events {
        counts[event.segment as usize] += 1;
    }
    Segment::ALL
        .iter()
        .zip(counts)
        .map(|(segment, count)| CountEntry::new(segment.label(), count))
        .collect()
}
