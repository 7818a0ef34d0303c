//! Wordle Assistant - CLI
//!
//! Narrows the word list from the feedback you get in Wordle-style games,
//! in a TUI, a plain prompt, or as a one-shot filter.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use std::io;
use wordle_assistant::{
    commands::{choose_game, run_filter, run_simple},
    interactive::{App, run_tui},
    solver::Solver,
    wordlists::{Game, WordSource},
};

#[derive(Debug, Parser)]
#[command(
    name = "wordle_assistant",
    about = "Narrows a Wordle-family word list from letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'wordle', 'termo', or path to a file with one word per line.
    /// Interactive modes ask when omitted.
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Most candidates to print after each guess (0 prints all)
    #[arg(short = 'n', long, global = true, default_value = "50")]
    show: usize,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple prompt mode (interactive without TUI)
    Simple,

    /// Apply guesses given as arguments and print the remaining words
    Filter {
        /// Guesses as <word>-<feedback>, e.g. apple-ciiim
        #[arg(required = true)]
        guesses: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    debug!("command line options: {cli:?}");

    if cli.no_color {
        colored::control::set_override(false);
    }

    let source = cli.wordlist.as_deref().map(WordSource::parse);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(source.as_ref()),
        Commands::Simple => run_simple_command(source, cli.show),
        Commands::Filter { guesses } => run_filter_command(source, &guesses),
    }
}

/// Load a word list and build a solver over it
fn load_solver(source: &WordSource) -> Result<Solver> {
    let words = source
        .load()
        .with_context(|| format!("failed to read word list {source}"))?;
    Solver::new(words).with_context(|| format!("cannot use word list {source}"))
}

fn run_play_command(source: Option<&WordSource>) -> Result<()> {
    let solver = source.map(load_solver).transpose()?;
    run_tui(App::new(solver))
}

fn run_simple_command(source: Option<WordSource>, show: usize) -> Result<()> {
    let stdin = io::stdin();
    let source = match source {
        Some(source) => source,
        None => WordSource::Embedded(choose_game(stdin.lock(), io::stdout())?),
    };

    let mut solver = load_solver(&source)?;
    run_simple(&mut solver, stdin.lock(), io::stdout(), show)?;
    Ok(())
}

fn run_filter_command(source: Option<WordSource>, guesses: &[String]) -> Result<()> {
    let source = source.unwrap_or(WordSource::Embedded(Game::Wordle));
    let mut solver = load_solver(&source)?;

    let words = run_filter(&mut solver, guesses)?;
    for word in words {
        println!("{word}");
    }
    Ok(())
}
