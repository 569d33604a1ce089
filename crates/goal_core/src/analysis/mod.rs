//! Derivation and aggregation over goal events.

pub mod aggregate;
pub mod filter;
pub mod score;
pub mod views;

pub use aggregate::{value_counts, CountEntry, TOP_N};
pub use filter::Selection;
pub use score::{reconstruct_scores, MatchScoreState, ScoreLedger};
pub use views::{dashboard, match_view, DashboardView, LeagueView, MatchView, PlayerView, TeamView};
