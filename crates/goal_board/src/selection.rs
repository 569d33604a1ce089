//! Selector validation for one-shot CLI commands.

use goal_core::{GoalDataset, Result, Selection};

/// Fail with `NotFound` unless `league` occurs in the data.
pub fn require_league(dataset: &GoalDataset, league: &str) -> Result<()> {
    Selection::default().select_league(dataset, league)
}

/// Validate named selectors against the data.
///
/// Without a league the first one in the data is used. Team and player are
/// scoped to that league and are only set when asked for.
pub fn build_selection(
    dataset: &GoalDataset,
    league: Option<&str>,
    team: Option<&str>,
    player: Option<&str>,
) -> Result<Selection> {
    let mut selection = Selection::defaults(dataset);
    if let Some(league) = league {
        selection.select_league(dataset, league)?;
    }
    selection.team = None;
    selection.player = None;

    if let Some(team) = team {
        selection.select_team(dataset, team)?;
    }
    if let Some(player) = player {
        selection.select_player(dataset, player)?;
    }
    Ok(selection)
}
