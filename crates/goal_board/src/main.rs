//! Goal Board CLI
//!
//! Loads the goal CSV once, derives segments and running scores, then
//! renders league / team / player views as terminal charts or JSON.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use goal_board::{
    build_selection, require_league, LoadConfig, ParseOptions, Source, DEFAULT_SOURCE, DEFAULT_TIMEOUT_SECS,
};
#[cfg(feature = "cli")]
use goal_core::MatchId;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "goalboard")]
#[command(about = "Explore football goal data by league, team and player", long_about = None)]
struct Cli {
    /// CSV path or http(s) URL
    #[arg(long, global = true, env = "GOALBOARD_SOURCE", default_value = DEFAULT_SOURCE)]
    source: String,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Log and skip malformed rows instead of failing
    #[arg(long, global = true, default_value = "false")]
    skip_bad_rows: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// List leagues
    Leagues,

    /// List scoring teams of a league
    Teams {
        #[arg(long)]
        league: String,
    },

    /// List scorers of a league
    Players {
        #[arg(long)]
        league: String,
    },

    /// League overview plus optional team and player views
    Dashboard {
        /// League (defaults to the first one in the data)
        #[arg(long)]
        league: Option<String>,

        /// Team within the league
        #[arg(long)]
        team: Option<String>,

        /// Scorer within the league
        #[arg(long)]
        player: Option<String>,

        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Goal timeline of one match with running scores
    Match {
        /// Match id (MatchID column, or Date_Team_Opponent)
        #[arg(long)]
        id: String,

        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Interactive explorer on stdin/stdout
    Explore,
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    use goal_board::render;
    use goal_core::analysis::filter::{leagues, players, teams};
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = LoadConfig {
        source: cli.source.parse::<Source>()?,
        timeout: std::time::Duration::from_secs(cli.timeout_secs),
        parse: ParseOptions { skip_bad_rows: cli.skip_bad_rows },
    };
    let (dataset, report) = goal_board::load_dataset(&config)?;
    eprint!("{}", render::render_load_report(&report));

    match cli.command {
        Commands::Leagues => {
            print!("{}", render::render_list("Leagues", &leagues(&dataset)));
        }

        Commands::Teams { league } => {
            require_league(&dataset, &league)?;
            print!("{}", render::render_list(&format!("Teams in {}", league), &teams(&dataset, &league)));
        }

        Commands::Players { league } => {
            require_league(&dataset, &league)?;
            print!(
                "{}",
                render::render_list(&format!("Players in {}", league), &players(&dataset, &league))
            );
        }

        Commands::Dashboard { league, team, player, format } => {
            let selection =
                build_selection(&dataset, league.as_deref(), team.as_deref(), player.as_deref())?;
            let view = goal_core::dashboard(&dataset, &selection)?;
            match format {
                Format::Text => print!("{}", render::render_dashboard(&view)),
                Format::Json => println!("{}", serde_json::to_string_pretty(&view)?),
            }
        }

        Commands::Match { id, format } => {
            let view = goal_core::match_view(&dataset, &MatchId::new(id))?;
            match format {
                Format::Text => print!("{}", render::render_match(&view)),
                Format::Json => println!("{}", serde_json::to_string_pretty(&view)?),
            }
        }

        Commands::Explore => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            goal_board::explore::Session::new(&dataset).run(stdin.lock(), stdout.lock())?;
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("goalboard CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
