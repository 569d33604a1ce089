//! Selector values and row filters.

use rustc_hash::FxHashSet;

use crate::dataset::GoalDataset;
use crate::error::{GoalDataError, Result, SelectorKind};
use crate::models::GoalEvent;

fn unique_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = FxHashSet::default();
    values.filter(|value| seen.insert(*value)).collect()
}

/// Leagues in order of first appearance.
pub fn leagues(ds: &GoalDataset) -> Vec<&str> {
    unique_in_order(ds.events().iter().map(|e| e.league()))
}

/// Scoring teams of one league, in order of first appearance.
pub fn teams<'a>(ds: &'a GoalDataset, league: &str) -> Vec<&'a str> {
    unique_in_order(ds.events().iter().filter(|e| e.league() == league).map(|e| e.team()))
}

/// Scorers of one league, in order of first appearance.
pub fn players<'a>(ds: &'a GoalDataset, league: &str) -> Vec<&'a str> {
    unique_in_order(ds.events().iter().filter(|e| e.league() == league).map(|e| e.scorer()))
}

pub fn by_league<'a>(ds: &'a GoalDataset, league: &str) -> Vec<&'a GoalEvent> {
    ds.events().iter().filter(|e| e.league() == league).collect()
}

pub fn by_team<'a>(league_goals: &[&'a GoalEvent], team: &str) -> Vec<&'a GoalEvent> {
    league_goals.iter().copied().filter(|e| e.team() == team).collect()
}

pub fn by_scorer<'a>(league_goals: &[&'a GoalEvent], scorer: &str) -> Vec<&'a GoalEvent> {
    league_goals.iter().copied().filter(|e| e.scorer() == scorer).collect()
}

/// Current league/team/player choice.
///
/// Team and player are always scoped to the league; changing the league
/// resets both to that league's first entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub league: Option<String>,
    pub team: Option<String>,
    pub player: Option<String>,
}

impl Selection {
    /// First league with its first team and first scorer.
    pub fn defaults(ds: &GoalDataset) -> Self {
        match leagues(ds).first() {
            Some(league) => Self::for_league(ds, league),
            None => Self::default(),
        }
    }

    fn for_league(ds: &GoalDataset, league: &str) -> Self {
        Self {
            league: Some(league.to_string()),
            team: teams(ds, league).first().map(|t| t.to_string()),
            player: players(ds, league).first().map(|p| p.to_string()),
        }
    }

    pub fn select_league(&mut self, ds: &GoalDataset, league: &str) -> Result<()> {
        if !leagues(ds).contains(&league) {
            return Err(GoalDataError::NotFound {
                kind: SelectorKind::League,
                name: league.to_string(),
            });
        }
        *self = Self::for_league(ds, league);
        Ok(())
    }

    pub fn select_team(&mut self, ds: &GoalDataset, team: &str) -> Result<()> {
        let league = self.league.as_deref().unwrap_or_default();
        if !teams(ds, league).contains(&team) {
            return Err(GoalDataError::NotFound { kind: SelectorKind::Team, name: team.to_string() });
        }
        self.team = Some(team.to_string());
        Ok(())
    }

    pub fn select_player(&mut self, ds: &GoalDataset, player: &str) -> Result<()> {
        let league = self.league.as_deref().unwrap_or_default();
        if !players(ds, league).contains(&player) {
            return Err(GoalDataError::NotFound {
                kind: SelectorKind::Player,
                name: player.to_string(),
            });
        }
        self.player = Some(player.to_string());
        Ok(())
    }
}
