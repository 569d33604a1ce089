//! Interactive explorer: line commands change the selection, and every change
//! re-runs filter + aggregate over the loaded dataset.

use anyhow::Result;
use goal_core::analysis::filter::{leagues, players, teams};
use goal_core::{dashboard, GoalDataset, Selection};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

use crate::render::{render_dashboard, render_list};

const HELP: &str = "\
Commands:
  leagues          list leagues
  teams            list teams of the selected league
  players          list scorers of the selected league
  league <name>    select a league (resets team and player)
  team <name>      select a team in the league
  player <name>    select a scorer in the league
  show             redraw the dashboard
  help             this text
  quit             leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Leagues,
    Teams,
    Players,
    League(String),
    Team(String),
    Player(String),
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let needs_name = |make: fn(String) -> Command| {
            if rest.is_empty() {
                Err(format!("'{}' needs a name", word))
            } else {
                Ok(make(rest.to_string()))
            }
        };

        match word.to_ascii_lowercase().as_str() {
            "leagues" => Ok(Command::Leagues),
            "teams" => Ok(Command::Teams),
            "players" => Ok(Command::Players),
            "league" => needs_name(Command::League),
            "team" => needs_name(Command::Team),
            "player" => needs_name(Command::Player),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(format!("Unknown command: '{}' (try 'help')", word)),
        }
    }
}

/// Explorer state: the borrowed dataset and the current selection.
pub struct Session<'a> {
    dataset: &'a GoalDataset,
    selection: Selection,
}

impl<'a> Session<'a> {
    pub fn new(dataset: &'a GoalDataset) -> Self {
        Self { dataset, selection: Selection::defaults(dataset) }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    fn league(&self) -> &str {
        self.selection.league.as_deref().unwrap_or_default()
    }

    fn show(&self) -> String {
        match dashboard(self.dataset, &self.selection) {
            Ok(view) => render_dashboard(&view),
            Err(e) => format!("{}\n", e),
        }
    }

    /// Apply one command and return what to print. `None` means quit.
    pub fn apply(&mut self, command: Command) -> Option<String> {
        debug!(?command, "explorer command");
        let ds = self.dataset;
        let changed = match command {
            Command::Quit => return None,
            Command::Help => return Some(HELP.to_string()),
            Command::Show => return Some(self.show()),
            Command::Leagues => return Some(render_list("Leagues", &leagues(ds))),
            Command::Teams => {
                return Some(render_list(&format!("Teams in {}", self.league()), &teams(ds, self.league())))
            }
            Command::Players => {
                return Some(render_list(
                    &format!("Players in {}", self.league()),
                    &players(ds, self.league()),
                ))
            }
            Command::League(name) => self.selection.select_league(ds, &name),
            Command::Team(name) => self.selection.select_team(ds, &name),
            Command::Player(name) => self.selection.select_player(ds, &name),
        };

        Some(match changed {
            Ok(()) => self.show(),
            Err(e) => format!("{}\n", e),
        })
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        write!(output, "{}", self.show())?;
        write!(output, "> ")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                write!(output, "> ")?;
                output.flush()?;
                continue;
            }

            let reply = match line.parse::<Command>() {
                Ok(command) => match self.apply(command) {
                    Some(reply) => reply,
                    None => break,
                },
                Err(message) => format!("{}\n", message),
            };
            write!(output, "{}> ", reply)?;
            output.flush()?;
        }

        writeln!(output)?;
        Ok(())
    }
}
