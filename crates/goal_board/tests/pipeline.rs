mod common;

use goal_board::render::render_dashboard;
use goal_board::{build_selection, load_from_reader, require_league, ParseOptions};
use goal_core::analysis::filter::leagues;
use goal_core::{
    dashboard, match_view, CountEntry, GoalDataError, MatchId, Score, SelectorKind, Selection,
};

#[test]
fn test_running_scores_survive_interleaving() {
    let ds = common::load();
    let arsenal = MatchId::new("2024-03-02_Arsenal_Chelsea");
    let scores: Vec<String> = ds.match_goals(&arsenal).map(|e| e.score.to_string()).collect();
    assert_eq!(scores, ["1-0", "2-0", "3-0"]);

    let spurs = match_view(&ds, &MatchId::new("2024-03-02_Spurs_Everton")).unwrap();
    assert_eq!(spurs.final_score, Score::new(3, 0));

    let girona = match_view(&ds, &MatchId::new("2024-03-03_Girona_Betis")).unwrap();
    let timeline: Vec<String> = girona.timeline.iter().map(|t| t.score.to_string()).collect();
    assert_eq!(timeline, ["0-1", "0-2", "0-3"]);
}

#[test]
fn test_league_dashboard_from_csv() {
    let ds = common::load();
    assert_eq!(leagues(&ds), ["EPL", "La Liga"]);

    let view = dashboard(&ds, &Selection::defaults(&ds)).unwrap();
    let league = &view.league;
    assert_eq!(league.goals, 6);
    assert_eq!(league.top_scorers[..2], [CountEntry::new("Saka", 2), CountEntry::new("Son", 2)]);
    assert!(league.top_scorers.len() <= 10);
    assert!(league.top_scorers.iter().all(|c| ["Saka", "Son", "Odegaard", "Kane"].contains(&c.label.as_str())));
    assert_eq!(league.goals_by_team, [CountEntry::new("Arsenal", 3), CountEntry::new("Spurs", 3)]);

    let segments: Vec<usize> = league.goals_by_segment.iter().map(|c| c.count).collect();
    assert_eq!(segments, [2, 0, 0, 1, 1, 1, 0, 1]);

    let team = view.team.as_ref().unwrap();
    assert_eq!(team.team, "Arsenal");
    assert_eq!(team.top_assisters.len(), 3);

    let player = view.player.as_ref().unwrap();
    assert_eq!(player.player, "Saka");
    assert_eq!(player.assisted_by, [CountEntry::new("Odegaard", 1), CountEntry::new("Rice", 1)]);
}

#[test]
fn test_reloading_is_deterministic() {
    let first = common::load();
    let second = common::load();
    assert_eq!(first.events(), second.events());

    let sel = Selection::defaults(&first);
    assert_eq!(
        render_dashboard(&dashboard(&first, &sel).unwrap()),
        render_dashboard(&dashboard(&second, &sel).unwrap())
    );
}

#[test]
fn test_skip_bad_rows_reports_failures() {
    let csv = format!("{}EPL,2024-03-09,Arsenal,Spurs,Saka,,9O,Home\n", common::GOALS_CSV);

    assert!(load_from_reader(csv.as_bytes(), "bad", ParseOptions::default()).is_err());

    let (ds, report) =
        load_from_reader(csv.as_bytes(), "bad", ParseOptions { skip_bad_rows: true }).unwrap();
    assert_eq!(ds.len(), 9);
    assert_eq!(report.stats.failed, 1);
    assert_eq!(report.stats.total_rows, 10);
}

#[test]
fn test_dashboard_without_flags_shows_first_league_only() {
    let ds = common::load();
    let selection = build_selection(&ds, None, None, None).unwrap();
    assert_eq!(selection.league.as_deref(), Some("EPL"));
    assert_eq!(selection.team, None);
    assert_eq!(selection.player, None);

    let view = dashboard(&ds, &selection).unwrap();
    assert_eq!(view.league.league, "EPL");
    assert!(view.team.is_none());
    assert!(view.player.is_none());
}

#[test]
fn test_team_flag_is_scoped_to_league() {
    let ds = common::load();
    let err = build_selection(&ds, None, Some("Girona"), None).unwrap_err();
    assert_eq!(err, GoalDataError::NotFound { kind: SelectorKind::Team, name: "Girona".into() });

    let selection = build_selection(&ds, Some("La Liga"), Some("Girona"), Some("Dovbyk")).unwrap();
    assert_eq!(selection.league.as_deref(), Some("La Liga"));
    assert_eq!(selection.team.as_deref(), Some("Girona"));
    assert_eq!(selection.player.as_deref(), Some("Dovbyk"));

    let view = dashboard(&ds, &selection).unwrap();
    assert_eq!(view.team.map(|t| t.goals), Some(3));
    assert_eq!(view.player.map(|p| p.goals), Some(2));
}

#[test]
fn test_unknown_selectors_are_rejected() {
    let ds = common::load();
    assert_eq!(
        build_selection(&ds, Some("Serie A"), None, None).unwrap_err(),
        GoalDataError::NotFound { kind: SelectorKind::League, name: "Serie A".into() }
    );
    assert_eq!(
        build_selection(&ds, Some("EPL"), None, Some("Dovbyk")).unwrap_err(),
        GoalDataError::NotFound { kind: SelectorKind::Player, name: "Dovbyk".into() }
    );
    assert!(require_league(&ds, "La Liga").is_ok());
    assert!(require_league(&ds, "Ligue 1").is_err());
}
