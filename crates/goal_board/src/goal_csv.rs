//! Goal CSV → `GoalRecord` list
//!
//! Expected header (order free, extra columns ignored):
//! `League, Date, Team, Opponent, Scorer, Assist, Minute, Venue` and an
//! optional `MatchID`. When `MatchID` is absent or empty the key is
//! synthesized as `Date_Team_Opponent`.
//!
//! Rows keep their file order; the score replay downstream depends on it.

use anyhow::{Context, Result};
use csv::StringRecord;
use goal_core::{GoalDataError, GoalRecord, MatchId, Minute, Venue};
use serde::Serialize;
use std::io::Read;
use tracing::{debug, warn};

pub const REQUIRED_COLUMNS: [&str; 8] =
    ["League", "Date", "Team", "Opponent", "Scorer", "Assist", "Minute", "Venue"];
pub const MATCH_ID_COLUMN: &str = "MatchID";

/// Row-level parse policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Log and count malformed rows instead of failing the load.
    pub skip_bad_rows: bool,
}

/// CSV parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub total_rows: u32,
    pub parsed: u32,
    pub failed: u32,
    /// `MatchID` had to be built from date/team/opponent for at least one row.
    pub synthesized_match_ids: u32,
}

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    league: usize,
    date: usize,
    team: usize,
    opponent: usize,
    scorer: usize,
    assist: usize,
    minute: usize,
    venue: usize,
    match_id: Option<usize>,
}

fn find_columns(headers: &StringRecord) -> std::result::Result<ColumnIndices, GoalDataError> {
    let names: Vec<&str> =
        headers.iter().map(|h| h.trim().trim_start_matches('\u{feff}')).collect();

    let find = |name: &str| {
        names
            .iter()
            .position(|h| *h == name)
            .ok_or_else(|| GoalDataError::MissingColumn(name.to_string()))
    };

    Ok(ColumnIndices {
        league: find("League")?,
        date: find("Date")?,
        team: find("Team")?,
        opponent: find("Opponent")?,
        scorer: find("Scorer")?,
        assist: find("Assist")?,
        minute: find("Minute")?,
        venue: find("Venue")?,
        match_id: find(MATCH_ID_COLUMN).ok(),
    })
}

/// Parse one data row. Returns the record and whether its match id was built.
fn parse_row(
    record: &StringRecord,
    cols: &ColumnIndices,
) -> std::result::Result<(GoalRecord, bool), GoalDataError> {
    let field = |idx: usize, name: &str| {
        record.get(idx).map(str::trim).ok_or_else(|| GoalDataError::BadRecord {
            line: 0,
            reason: format!("missing {} field", name),
        })
    };

    let league = field(cols.league, "League")?;
    let date = field(cols.date, "Date")?;
    let team = field(cols.team, "Team")?;
    let opponent = field(cols.opponent, "Opponent")?;
    let scorer = field(cols.scorer, "Scorer")?;
    let assist = field(cols.assist, "Assist")?;
    let minute: Minute = field(cols.minute, "Minute")?.parse()?;
    let venue: Venue = field(cols.venue, "Venue")?.parse()?;

    let given_id = cols.match_id.and_then(|idx| record.get(idx)).map(str::trim).unwrap_or("");
    let (match_id, synthesized) = if given_id.is_empty() {
        (MatchId::synthesize(date, team, opponent), true)
    } else {
        (MatchId::new(given_id), false)
    };

    let goal = GoalRecord {
        league: league.to_string(),
        date: date.to_string(),
        team: team.to_string(),
        opponent: opponent.to_string(),
        scorer: scorer.to_string(),
        assist: (!assist.is_empty()).then(|| assist.to_string()),
        minute,
        venue,
        match_id,
    };
    Ok((goal, synthesized))
}

/// Parse goal CSV data into records, in file order.
///
/// # Errors
///
/// * a required column is missing from the header
/// * a row is malformed and `skip_bad_rows` is off
/// * no row could be parsed
pub fn parse_goal_csv<R: Read>(
    reader: R,
    options: ParseOptions,
) -> Result<(Vec<GoalRecord>, ParseStats)> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);

    let headers = reader.headers().context("Failed to read CSV header")?.clone();
    let cols = find_columns(&headers)?;
    if cols.match_id.is_none() {
        debug!("no {} column, synthesizing match ids", MATCH_ID_COLUMN);
    }

    let mut records = Vec::new();
    let mut stats = ParseStats::default();

    for result in reader.records() {
        stats.total_rows += 1;

        let parsed = result
            .map_err(|e| GoalDataError::BadRecord {
                line: u64::from(stats.total_rows) + 1,
                reason: e.to_string(),
            })
            .and_then(|record| {
                // header is line 1
                let line = record
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(u64::from(stats.total_rows) + 1);
                parse_row(&record, &cols).map_err(|e| match e {
                    GoalDataError::BadRecord { reason, .. } => {
                        GoalDataError::BadRecord { line, reason }
                    }
                    other => other.at_line(line),
                })
            });

        match parsed {
            Ok((goal, synthesized)) => {
                if synthesized {
                    stats.synthesized_match_ids += 1;
                }
                records.push(goal);
                stats.parsed += 1;
            }
            Err(e) if options.skip_bad_rows && e.is_recoverable() => {
                stats.failed += 1;
                warn!("Skipping row: {}", e);
            }
            Err(e) => return Err(e.into()),
        }
    }

    if stats.parsed == 0 {
        return Err(GoalDataError::EmptyDataset.into());
    }

    Ok((records, stats))
}
