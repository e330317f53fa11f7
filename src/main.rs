//! Crossword Layout
//!
//! Reads a list of `answer|clue` lines, lays the answers out as a crossword
//! grid and prints the grid with numbered across and down clue lists.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crossword_layout::logging::init_logger;
use crossword_layout::persistence::{load_entries, save_puzzle};
use crossword_layout::solver::SearchReport;
use crossword_layout::{generate, normalize_answer, CrosswordError, SearchConfig, SearchLimit};

/// Lays out clue/answer lists as crossword grids.
#[derive(Parser)]
#[command(name = "crossword-layout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log each strategy's progress.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a puzzle from an entry file.
    Generate(GenerateArgs),
    /// Print the grid form of each answer.
    Normalize {
        #[arg(required = true)]
        words: Vec<String>,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Entry file with one `answer|clue` per line.
    file: PathBuf,

    /// Write the puzzle here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed for the random restarts.
    #[arg(long)]
    seed: Option<u64>,

    /// Limit restarts and backtracking by step count instead of time.
    ///
    /// Beam search then runs every generation.
    #[arg(long, conflicts_with_all = ["restart_ms", "backtrack_ms", "beam_ms"])]
    steps: Option<u64>,

    /// Time budget for random restarts, in milliseconds.
    #[arg(long)]
    restart_ms: Option<u64>,

    /// Time budget for backtracking, in milliseconds.
    #[arg(long)]
    backtrack_ms: Option<u64>,

    /// Time budget for beam search, in milliseconds.
    #[arg(long)]
    beam_ms: Option<u64>,

    /// Partial layouts kept per beam search generation.
    #[arg(long)]
    beam_width: Option<usize>,
}

impl GenerateArgs {
    fn search_config(&self) -> SearchConfig {
        let mut config = SearchConfig {
            seed: self.seed,
            ..SearchConfig::default()
        };

        if let Some(steps) = self.steps {
            config.restart_limit = SearchLimit::Steps(steps);
            config.backtrack_limit = SearchLimit::Steps(steps);
            config.beam_limit = SearchLimit::Steps(u64::MAX);
        }
        if let Some(ms) = self.restart_ms {
            config.restart_limit = SearchLimit::Time(Duration::from_millis(ms));
        }
        if let Some(ms) = self.backtrack_ms {
            config.backtrack_limit = SearchLimit::Time(Duration::from_millis(ms));
        }
        if let Some(ms) = self.beam_ms {
            config.beam_limit = SearchLimit::Time(Duration::from_millis(ms));
        }
        if let Some(width) = self.beam_width {
            config.beam_width = width.max(1);
        }

        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match try_main(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error[{}]: {e}", e.code());
            if e.needs_more_entries() {
                eprintln!("hint: add more entries that share letters with each other");
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main(command: Command) -> Result<(), CrosswordError> {
    match command {
        Command::Generate(args) => run_generate(&args),
        Command::Normalize { words } => {
            for word in &words {
                println!("{}", normalize_line(word));
            }
            Ok(())
        }
    }
}

/// Generates a puzzle and prints or saves it.
fn run_generate(args: &GenerateArgs) -> Result<(), CrosswordError> {
    let entries = load_entries(&args.file)?;
    let puzzle = generate(&entries, &args.search_config())?;

    eprint!("{}", format_report(puzzle.report()));
    match &args.output {
        Some(path) => {
            save_puzzle(path, &puzzle)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{puzzle}"),
    }

    Ok(())
}

fn normalize_line(word: &str) -> String {
    let normalized = normalize_answer(word);
    if normalized.is_empty() {
        format!("{word}: (nothing placeable)")
    } else {
        format!("{word}: {normalized}")
    }
}

/// One line per strategy that ran, marking the one whose layout was kept.
fn format_report(report: &SearchReport) -> String {
    let winner = report.winner();
    let mut output = String::new();
    for strategy in &report.strategies {
        let placed = strategy
            .placed
            .map_or_else(|| "-".to_string(), |placed| format!("{placed}/{}", report.total_words));
        let marker = if winner == Some(strategy.name) { " *" } else { "" };
        output.push_str(&format!(
            "{:<16} {:>7} {:>8} iterations {:>8.1}ms{marker}\n",
            strategy.name,
            placed,
            strategy.iterations,
            strategy.elapsed.as_secs_f64() * 1000.0
        ));
    }
    output
}
