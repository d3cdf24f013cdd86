//! Display functions for command results

use super::formatters::{histogram_width, percentage, score_bar};
use crate::commands::{AnalysisResult, GameRecord, Recommendation, SimulationStatistics};
use crate::core::feedback_to_emoji;
use crate::solver::Mode;
use colored::Colorize;

const HISTOGRAM_WIDTH: usize = 40;

fn header(title: &str, subject: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        title.bright_cyan().bold(),
        subject.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
}

/// Print the guess path of one game
pub fn print_game_record(record: &GameRecord, mode: Mode, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({mode} mode)",
        record.answer.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in record.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            feedback_to_emoji(&step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Score:      {:.4}", step.score);
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "✅ Solved in {} guess{}!",
            record.attempts(),
            if record.attempts() == 1 { "" } else { "es" }
        )
        .green()
        .bold()
    );
}

/// Print statistics from playing every answer
pub fn print_simulation_statistics(stats: &SimulationStatistics, mode: Mode) {
    header("SIMULATION RESULTS", mode.name());

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    if let Some(first) = &stats.first_guess {
        println!("  Opening guess:       {}", first.to_uppercase().bright_green());
    }
    println!("  Games played:        {}", stats.total_games);
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Best case:           {}",
        format!("{}", stats.min_guesses).green()
    );
    println!(
        "  Worst case:          {}",
        format!("{}", stats.max_guesses).yellow()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    if stats.total_games > 0 {
        println!(
            "  Time per word:       {:.1}ms",
            stats.total_time.as_millis() as f64 / stats.total_games as f64
        );
    }

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for (&guesses, &count) in &stats.guess_distribution {
        let bar_len = histogram_width(count, max_count, HISTOGRAM_WIDTH);
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░"
                .repeat(HISTOGRAM_WIDTH.saturating_sub(bar_len))
                .bright_black()
        );
        println!(
            "  {guesses} guesses: {bar} {count:4} ({:5.1}%)",
            percentage(count, stats.total_games)
        );
    }

    if !stats.hardest_words.is_empty() {
        println!("\n⚠️  {}", "Hardest Words".yellow().bold());
        for (word, guesses) in &stats.hardest_words {
            println!("  {} took {guesses} guesses", word.to_uppercase().yellow());
        }
    }
}

/// Print the outcome-tree summary of one guess
pub fn print_analysis_result(result: &AnalysisResult) {
    header("GUESS ANALYSIS:", &result.word);

    let summary = &result.summary;
    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Score:       [{}] {}",
        score_bar(summary.score, 30).green(),
        format!("{:.5}", summary.score).bright_yellow()
    );
    println!("   Leaves:      {}", summary.leaves);
    println!(
        "   Largest:     {} candidates ({:.1}% ruled out at worst)",
        summary.largest_leaf,
        result.worst_case_reduction() * 100.0
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        summary.expected_remaining
    );
}

/// Print a suggested next guess
pub fn print_recommendation(recommendation: &Recommendation) {
    header("NEXT GUESS:", &recommendation.word);

    if recommendation.is_forced() {
        println!("\n✨ {}", "Only one answer left".green().bold());
        return;
    }

    println!(
        "\n   Score:       {}",
        format!("{:.5}", recommendation.score).bright_yellow()
    );
    println!(
        "   Candidates:  {}",
        recommendation.candidates.len()
    );
    if recommendation.candidates.len() <= 10 {
        println!("   {}", recommendation.candidates.join(", ").bright_black());
    }
}
