use goal_board::{load_from_reader, ParseOptions};
use goal_core::GoalDataset;

/// Two leagues; the EPL fixtures are interleaved with each other.
pub const GOALS_CSV: &str = "\
League,Date,Team,Opponent,Scorer,Assist,Minute,Venue
EPL,2024-03-02,Arsenal,Chelsea,Saka,Odegaard,9,Home
EPL,2024-03-02,Spurs,Everton,Son,Maddison,14,Home
EPL,2024-03-02,Arsenal,Chelsea,Saka,Rice,45+1,Home
EPL,2024-03-02,Spurs,Everton,Son,,52,Home
EPL,2024-03-02,Arsenal,Chelsea,Odegaard,Saka,67,Home
La Liga,2024-03-03,Girona,Betis,Dovbyk,Savinho,22,Away
EPL,2024-03-02,Spurs,Everton,Kane,Son,90+5,Home
La Liga,2024-03-03,Girona,Betis,Dovbyk,,31,Away
La Liga,2024-03-03,Girona,Betis,Stuani,Dovbyk,95,Away
";

pub fn load() -> GoalDataset {
    let (dataset, _) =
        load_from_reader(GOALS_CSV.as_bytes(), "fixture", ParseOptions::default()).unwrap();
    dataset
}
