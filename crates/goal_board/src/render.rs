//! Plain-text bar charts for terminal output.

use goal_core::{CountEntry, DashboardView, LeagueView, MatchView, PlayerView, TeamView};

use crate::LoadReport;

/// Longest bar, in cells.
const BAR_WIDTH: usize = 40;
const BAR_CHAR: char = '█';

/// Render one chart: title line, then one labelled bar per entry.
pub fn bar_chart(title: &str, entries: &[CountEntry]) -> String {
    let mut out = format!("{}\n", title);

    if entries.is_empty() {
        out.push_str("  (no data)\n");
        return out;
    }

    let label_width = entries.iter().map(|e| e.label.chars().count()).max().unwrap_or(0);
    let max = entries.iter().map(|e| e.count).max().unwrap_or(0);

    for entry in entries {
        let len = if max == 0 { 0 } else { (entry.count * BAR_WIDTH).div_ceil(max) };
        let bar: String = std::iter::repeat(BAR_CHAR).take(len).collect();
        let pad = label_width - entry.label.chars().count();
        out.push_str(&format!(
            "  {}{} | {} {}\n",
            entry.label,
            " ".repeat(pad),
            bar,
            entry.count
        ));
    }
    out
}

pub fn render_league(view: &LeagueView) -> String {
    let league = &view.league;
    let mut out = format!("== Overall Stats for {} ({} goals) ==\n\n", league, view.goals);
    for (title, entries) in [
        (format!("Top Scorers in {}", league), &view.top_scorers),
        (format!("Top Assisters in {}", league), &view.top_assisters),
        (format!("Goals by 15-Minute Segment in {}", league), &view.goals_by_segment),
        (format!("Goals by Team in {}", league), &view.goals_by_team),
    ] {
        out.push_str(&bar_chart(&title, entries));
        out.push('\n');
    }
    out
}

pub fn render_team(view: &TeamView) -> String {
    let team = &view.team;
    let mut out = format!("== Stats for {} ({} goals) ==\n\n", team, view.goals);
    for (title, entries) in [
        (format!("Top Scorers for {}", team), &view.top_scorers),
        (format!("Top Assisters for {}", team), &view.top_assisters),
        (format!("Goals by 15-Minute Segment for {}", team), &view.goals_by_segment),
    ] {
        out.push_str(&bar_chart(&title, entries));
        out.push('\n');
    }
    out
}

pub fn render_player(view: &PlayerView) -> String {
    let player = &view.player;
    let mut out = format!("== Stats for {} ==\n\nGoals: {}\n\n", player, view.goals);
    out.push_str(&bar_chart(&format!("Assists by {}", player), &view.assisted_by));
    out.push('\n');
    out.push_str(&bar_chart(
        &format!("Goals by 15-Minute Segment for {}", player),
        &view.goals_by_segment,
    ));
    out.push('\n');
    out
}

pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = render_league(&view.league);
    if let Some(team) = &view.team {
        out.push_str(&render_team(team));
    }
    if let Some(player) = &view.player {
        out.push_str(&render_player(player));
    }
    out
}

pub fn render_match(view: &MatchView) -> String {
    let mut out = format!(
        "{} {}: {} vs {} (final {})\n",
        view.league, view.date, view.team, view.opponent, view.final_score
    );
    for goal in &view.timeline {
        let assist = goal.assist.as_deref().map(|a| format!(" (assist: {})", a)).unwrap_or_default();
        out.push_str(&format!(
            "  {:>6}'  {:<6} {}  {} [{}]{}\n",
            goal.minute.to_string(),
            goal.segment.label(),
            goal.score,
            goal.scorer,
            goal.team,
            assist
        ));
    }
    out
}

/// Numbered selector list, or a note when empty.
pub fn render_list(title: &str, items: &[&str]) -> String {
    let mut out = format!("{}\n", title);
    if items.is_empty() {
        out.push_str("  (none)\n");
    }
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("  {:>3}. {}\n", i + 1, item));
    }
    out
}

pub fn render_load_report(report: &LoadReport) -> String {
    format!(
        "Loaded {} goals ({} matches, {} leagues) from {}\n",
        report.summary.goals, report.summary.matches, report.summary.leagues, report.source
    )
}
