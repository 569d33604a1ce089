//! Dashboard views: each selection is filtered and aggregated from scratch.

use serde::Serialize;

use super::aggregate::{
    goals_by_segment, goals_by_team, top_assisters, top_counts, top_scorers, CountEntry, TOP_N,
};
use super::filter::{by_league, by_scorer, by_team, leagues, Selection};
use crate::dataset::GoalDataset;
use crate::error::{GoalDataError, Result, SelectorKind};
use crate::models::{GoalEvent, MatchId, Minute, Score, Segment};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueView {
    pub league: String,
    pub goals: usize,
    pub top_scorers: Vec<CountEntry>,
    pub top_assisters: Vec<CountEntry>,
    pub goals_by_segment: Vec<CountEntry>,
    pub goals_by_team: Vec<CountEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamView {
    pub league: String,
    pub team: String,
    pub goals: usize,
    pub top_scorers: Vec<CountEntry>,
    pub top_assisters: Vec<CountEntry>,
    pub goals_by_segment: Vec<CountEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub league: String,
    pub player: String,
    pub goals: usize,
    /// Who set up this player's goals.
    pub assisted_by: Vec<CountEntry>,
    pub goals_by_segment: Vec<CountEntry>,
}

/// Everything shown for one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub league: LeagueView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<PlayerView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub minute: Minute,
    pub segment: Segment,
    pub team: String,
    pub scorer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assist: Option<String>,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchView {
    pub match_id: MatchId,
    pub league: String,
    pub date: String,
    pub team: String,
    pub opponent: String,
    pub final_score: Score,
    pub timeline: Vec<TimelineEntry>,
}

/// League overview. An unknown league yields empty charts.
pub fn league_view(ds: &GoalDataset, league: &str) -> LeagueView {
    let goals = by_league(ds, league);
    LeagueView {
        league: league.to_string(),
        goals: goals.len(),
        top_scorers: top_scorers(&goals, TOP_N),
        top_assisters: top_assisters(&goals, TOP_N),
        goals_by_segment: goals_by_segment(&goals),
        goals_by_team: goals_by_team(&goals),
    }
}

pub fn team_view(ds: &GoalDataset, league: &str, team: &str) -> TeamView {
    let goals = by_team(&by_league(ds, league), team);
    TeamView {
        league: league.to_string(),
        team: team.to_string(),
        goals: goals.len(),
        top_scorers: top_scorers(&goals, TOP_N),
        top_assisters: top_assisters(&goals, TOP_N),
        goals_by_segment: goals_by_segment(&goals),
    }
}

pub fn player_view(ds: &GoalDataset, league: &str, player: &str) -> PlayerView {
    let goals = by_scorer(&by_league(ds, league), player);
    PlayerView {
        league: league.to_string(),
        player: player.to_string(),
        goals: goals.len(),
        assisted_by: top_counts(goals.iter().filter_map(|e| e.assist()), usize::MAX),
        goals_by_segment: goals_by_segment(&goals),
    }
}

/// Views for a selection. With no league chosen, the first league is used.
pub fn dashboard(ds: &GoalDataset, selection: &Selection) -> Result<DashboardView> {
    let all_leagues = leagues(ds);
    let league = match selection.league.as_deref() {
        Some(league) => league,
        None => all_leagues.first().copied().ok_or(GoalDataError::EmptyDataset)?,
    };
    if !all_leagues.contains(&league) {
        return Err(GoalDataError::NotFound { kind: SelectorKind::League, name: league.to_string() });
    }

    Ok(DashboardView {
        league: league_view(ds, league),
        team: selection.team.as_deref().map(|team| team_view(ds, league, team)),
        player: selection.player.as_deref().map(|player| player_view(ds, league, player)),
    })
}

/// Goal-by-goal timeline of one match with running scores.
pub fn match_view(ds: &GoalDataset, match_id: &MatchId) -> Result<MatchView> {
    let goals: Vec<&GoalEvent> = ds.match_goals(match_id).collect();
    let (first, final_score) = match (goals.first(), ds.final_score(match_id)) {
        (Some(first), Some(score)) => (*first, score),
        _ => {
            return Err(GoalDataError::NotFound {
                kind: SelectorKind::Match,
                name: match_id.to_string(),
            })
        }
    };

    Ok(MatchView {
        match_id: match_id.clone(),
        league: first.record.league.clone(),
        date: first.record.date.clone(),
        team: first.record.team.clone(),
        opponent: first.record.opponent.clone(),
        final_score,
        timeline: goals
            .iter()
            .map(|e| TimelineEntry {
                minute: e.record.minute,
                segment: e.segment,
                team: e.record.team.clone(),
                scorer: e.record.scorer.clone(),
                assist: e.record.assist.clone(),
                score: e.score,
            })
            .collect(),
    })
}
