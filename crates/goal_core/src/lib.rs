//! # goal_core - Football goal event analysis
//!
//! Turns loaded goal records into an immutable, annotated dataset and answers
//! dashboard queries over it.
//!
//! ## Pipeline
//! - `Minute` parsed from the raw cell (`"67"`, `"45+2"`)
//! - `Segment` classified per goal
//! - running `Score` replayed per match id, in file order
//! - league / team / player views built fresh for every selection

pub mod analysis;
pub mod dataset;
pub mod error;
pub mod models;

pub use analysis::{
    dashboard, match_view, reconstruct_scores, CountEntry, DashboardView, LeagueView, MatchView,
    PlayerView, Selection, TeamView,
};
pub use dataset::{DatasetSummary, GoalDataset};
pub use error::{GoalDataError, Result, SelectorKind};
pub use models::{GoalEvent, GoalRecord, MatchId, Minute, Score, Segment, Venue};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
