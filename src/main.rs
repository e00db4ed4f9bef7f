//! Anidle - CLI
//!
//! Daily anime guessing game with TUI and plain CLI modes.

use anidle::{
    catalog,
    commands::{daily_answer, run_simple},
    core::Entity,
    game::PickerType,
    interactive::{run_tui, App},
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "anidle",
    about = "Daily anime guessing game: bracket the target with field-by-field feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Target mode: daily (deterministic per date) or random
    #[arg(short, long, global = true, default_value = "daily")]
    mode: String,

    /// Path to a catalog JSON file (default: embedded catalog)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Attempt budget per game; 0 removes the limit
    #[arg(short, long, global = true, default_value = "8")]
    attempts: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// Print the daily answer for a date (spoilers!)
    Answer {
        /// Date as YYYY-MM-DD (default: today)
        date: Option<String>,
    },
}

/// Load the candidate pool from the -c flag or the embedded catalog
fn load_catalog(path: Option<&PathBuf>) -> Result<Vec<Entity>> {
    match path {
        Some(p) => catalog::load_from_file(p),
        None => Ok(catalog::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pool = load_catalog(cli.catalog.as_ref())?;
    let picker = PickerType::from_name(&cli.mode);
    let budget = (cli.attempts > 0).then_some(cli.attempts);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&pool, picker, budget),
        Commands::Simple => run_simple(&pool, picker, budget).map_err(|e| anyhow::anyhow!(e)),
        Commands::Answer { date } => run_answer_command(&pool, date.as_deref()),
    }
}

fn run_play_command(pool: &[Entity], picker: PickerType, budget: Option<u32>) -> Result<()> {
    let app = App::new(pool, picker, budget)?;
    run_tui(app)
}

fn run_answer_command(pool: &[Entity], date: Option<&str>) -> Result<()> {
    let (date, target) = daily_answer(pool, date).map_err(|e| anyhow::anyhow!(e))?;
    println!(
        "{date} 的每日答案: {} ({})",
        target.title(),
        target.title_romaji()
    );
    Ok(())
}
