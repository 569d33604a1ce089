pub mod goal_event;
pub mod minute;
pub mod segment;

pub use goal_event::{GoalEvent, GoalRecord, MatchId, Score, Venue};
pub use minute::Minute;
pub use segment::Segment;
