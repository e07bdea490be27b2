//! Display functions for command results

use super::formatters::{code_to_pegs, create_progress_bar, feedback_to_pegs};
use crate::commands::{BenchmarkResult, ScoreResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let length = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  {}",
        code_to_pegs(&result.secret),
        result.secret.names().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            code_to_pegs(&step.code),
            feedback_to_pegs(step.feedback, length)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print a single scored guess
pub fn print_score_result(result: &ScoreResult) {
    println!("Guess:    {}", code_to_pegs(&result.guess));
    println!("Target:   {}", code_to_pegs(&result.target));
    println!(
        "Feedback: {}",
        feedback_to_pegs(result.feedback, result.length)
    );
    println!(
        "          {} exact, {} misplaced",
        result.feedback.exact().to_string().bright_white().bold(),
        result.feedback.misplaced().to_string().white()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_codes);
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(1);
    for (&guesses, &count) in &result.distribution {
        let pct = count as f64 / result.total_codes as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {guesses:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }

    if !result.hardest.is_empty() {
        println!("\n😰 {}", "Hardest codes:".yellow().bold());
        for (code, guesses) in result.hardest.iter().take(5) {
            println!("   {}  {guesses} guesses", code_to_pegs(code));
        }
    }
}
