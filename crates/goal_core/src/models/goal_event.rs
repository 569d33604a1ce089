use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::minute::Minute;
use super::segment::Segment;
use crate::error::GoalDataError;

/// Scoring team's side for running-score attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    pub fn is_home(&self) -> bool {
        matches!(self, Venue::Home)
    }
}

impl FromStr for Venue {
    type Err = GoalDataError;

    /// Boolean-like column: home/true/1 style spellings are `Home`, their
    /// negations and the empty cell are `Away`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "home" | "h" | "true" | "t" | "yes" | "y" | "1" => Ok(Venue::Home),
            "away" | "a" | "false" | "f" | "no" | "n" | "0" | "" => Ok(Venue::Away),
            _ => Err(GoalDataError::BadVenue(raw.to_string())),
        }
    }
}

/// Fixture key, seen from one team's rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(String);

impl MatchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// `date_team_opponent`, used when the source has no match id column.
    pub fn synthesize(date: &str, team: &str, opponent: &str) -> Self {
        Self(format!("{}_{}_{}", date, team, opponent))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Running score right after a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

impl From<Score> for String {
    fn from(score: Score) -> Self {
        score.to_string()
    }
}

impl TryFrom<String> for Score {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let (home, away) =
            value.split_once('-').ok_or_else(|| format!("invalid score: {}", value))?;
        let home = home.parse().map_err(|_| format!("invalid score: {}", value))?;
        let away = away.parse().map_err(|_| format!("invalid score: {}", value))?;
        Ok(Score { home, away })
    }
}

/// One goal as loaded from the source, before derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalRecord {
    pub league: String,
    pub date: String,
    /// Scoring team.
    pub team: String,
    pub opponent: String,
    pub scorer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assist: Option<String>,
    pub minute: Minute,
    pub venue: Venue,
    pub match_id: MatchId,
}

/// A goal with its derived segment and running score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalEvent {
    #[serde(flatten)]
    pub record: GoalRecord,
    pub segment: Segment,
    pub score: Score,
}

impl GoalEvent {
    pub fn league(&self) -> &str {
        &self.record.league
    }

    pub fn team(&self) -> &str {
        &self.record.team
    }

    pub fn scorer(&self) -> &str {
        &self.record.scorer
    }

    pub fn assist(&self) -> Option<&str> {
        self.record.assist.as_deref()
    }

    pub fn match_id(&self) -> &MatchId {
        &self.record.match_id
    }
}
