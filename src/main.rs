//! Wordle Collision Solver - CLI
//!
//! Picks guesses by minimizing the chance that two remaining answers share
//! the same feedback, and measures the strategy over every answer.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use wordle_collision::{
    commands::{
        FeedbackEntry, SimulationConfig, SolveConfig, analyze_word, recommend, run_simulation,
        solve_word,
    },
    output::{
        print_analysis_result, print_game_record, print_recommendation,
        print_simulation_statistics,
    },
    solver::{GuessSelector, Mode},
    wordlists::Vocabulary,
};

#[derive(Parser)]
#[command(
    name = "wordle_collision",
    about = "Wordle solver that minimizes feedback collisions between remaining answers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Mode: easy (default, any word may be guessed) or hard (only candidates)
    #[arg(short, long, global = true, default_value = "easy")]
    mode: Mode,

    /// File of extra allowed guesses, one word per line
    #[arg(short = 'x', long, global = true)]
    extra: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play every solution word and report statistics (default)
    Simulate {
        /// Limit number of words to play
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and scores per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score one guess against every solution word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Suggest the next guess from feedback seen so far
    Next {
        /// Pairs of guess and pattern, e.g. `crane -Y--G` (G/Y/- or emoji squares)
        #[arg(allow_hyphen_values = true)]
        feedback: Vec<String>,
    },
}

fn load_vocabulary(extra: Option<&PathBuf>) -> Result<Vocabulary> {
    match extra {
        Some(path) => Vocabulary::embedded_with_extras(path)
            .with_context(|| format!("Failed to load extra guesses from {}", path.display())),
        None => Ok(Vocabulary::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let vocabulary = load_vocabulary(cli.extra.as_ref())?;
    let selector = GuessSelector::new(vocabulary.words(), vocabulary.solutions());

    let command = cli.command.unwrap_or(Commands::Simulate { limit: None });

    match command {
        Commands::Simulate { limit } => {
            run_simulate_command(&selector, &vocabulary, cli.mode, limit)
        }
        Commands::Solve { word, verbose } => {
            run_solve_command(&selector, &vocabulary, cli.mode, word, verbose)
        }
        Commands::Analyze { word } => run_analyze_command(&vocabulary, &word),
        Commands::Next { feedback } => run_next_command(&selector, cli.mode, &feedback),
    }
}

fn run_simulate_command(
    selector: &GuessSelector<'_>,
    vocabulary: &Vocabulary,
    mode: Mode,
    limit: Option<usize>,
) -> Result<()> {
    println!("\n{}", "═".repeat(60));
    println!(" Playing every Wordle answer ");
    println!("{}", "═".repeat(60));
    println!(
        "\n{} answers, {} guessable words, {mode} mode\n",
        vocabulary.solutions().len(),
        vocabulary.words().len()
    );

    let config = SimulationConfig {
        limit,
        ..SimulationConfig::new(mode)
    };
    let stats = run_simulation(selector, vocabulary.solutions(), &config)
        .context("Simulation aborted")?;

    print_simulation_statistics(&stats, mode);
    Ok(())
}

fn run_solve_command(
    selector: &GuessSelector<'_>,
    vocabulary: &Vocabulary,
    mode: Mode,
    word: String,
    verbose: bool,
) -> Result<()> {
    let config = SolveConfig::new(word, mode);
    let record = solve_word(&config, selector, vocabulary)
        .with_context(|| format!("Failed to solve '{}'", config.target))?;

    print_game_record(&record, mode, verbose);
    Ok(())
}

fn run_analyze_command(vocabulary: &Vocabulary, word: &str) -> Result<()> {
    let result = analyze_word(word, vocabulary)
        .with_context(|| format!("Failed to analyze '{word}'"))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_next_command(selector: &GuessSelector<'_>, mode: Mode, feedback: &[String]) -> Result<()> {
    if feedback.len() % 2 != 0 {
        bail!("Feedback must come in guess/pattern pairs, got {} values", feedback.len());
    }

    let entries: Vec<FeedbackEntry> = feedback
        .chunks_exact(2)
        .map(|pair| FeedbackEntry::new(pair[0].as_str(), pair[1].as_str()))
        .collect();

    let recommendation =
        recommend(selector, &entries, mode).context("Could not pick a next guess")?;

    if entries.is_empty() {
        println!("{}", "No feedback yet: suggesting an opening guess".bright_black());
    }
    print_recommendation(&recommendation);
    Ok(())
}
