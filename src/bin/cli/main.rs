mod app;
mod commands;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "motivation-cli", about = "Daily motivation quotes", version)]
struct Cli {
    /// Use a specific data directory (default: ~/.motivation_app)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Show a random quote and record it in history
    Quote {
        /// Only pick quotes with this tag
        #[arg(long)]
        tag: Option<String>,
    },

    /// List all tags
    Tags,

    /// Search quotes by content, author or tag
    Search {
        /// Search query (case-insensitive)
        query: String,
    },

    /// Add the most recently viewed quote to favorites
    Favorite,

    /// List favorite quotes
    Favorites,

    /// Show viewed quotes
    History {
        /// Only show the most recent entries (0 shows everything)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Export favorites to a text file
    Export {
        /// Destination file (overwritten if it exists)
        path: PathBuf,
    },

    /// Daily notification settings
    #[command(subcommand)]
    Notify(NotifyCommand),
}

#[derive(Subcommand)]
enum NotifyCommand {
    /// Set the daily notification time and enable it
    SetTime {
        /// Time of day in 24h HH:MM format
        time: String,
    },

    /// Disable the daily notification
    Disable,

    /// Show the configured notification time
    Status,

    /// Run the notification scheduler in the foreground
    Run,

    /// Send one notification now
    Test,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();
    let app = app::App::new(cli.data_dir)?;

    match cli.command {
        // No subcommand → show a quote, like opening the app
        None => commands::quote::run(&app, None, &cli.format, use_color)?,
        Some(Command::Quote { tag }) => {
            commands::quote::run(&app, tag.as_deref(), &cli.format, use_color)?;
        }
        Some(Command::Tags) => commands::tags::run(&app, &cli.format)?,
        Some(Command::Search { query }) => {
            commands::search::run(&app, &query, &cli.format, use_color)?;
        }
        Some(Command::Favorite) => commands::favorites::run_add(&app, &cli.format, use_color)?,
        Some(Command::Favorites) => commands::favorites::run_list(&app, &cli.format, use_color)?,
        Some(Command::History { limit }) => {
            commands::history::run(&app, limit, &cli.format, use_color)?;
        }
        Some(Command::Export { path }) => commands::export::run(&app, &path, &cli.format)?,
        Some(Command::Notify(subcmd)) => match subcmd {
            NotifyCommand::SetTime { time } => {
                commands::notify::run_set_time(&app, &time, &cli.format)?;
            }
            NotifyCommand::Disable => commands::notify::run_disable(&app, &cli.format)?,
            NotifyCommand::Status => commands::notify::run_status(&app, &cli.format)?,
            NotifyCommand::Run => commands::notify::run_foreground(&app)?,
            NotifyCommand::Test => commands::notify::run_test(&app, &cli.format)?,
        },
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    use std::io::IsTerminal;
    std::io::stdout().is_terminal()
}
