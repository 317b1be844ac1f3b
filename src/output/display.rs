//! Display functions for command results

use super::formatters::{create_progress_bar, format_ladder, highlight_rung};
use crate::commands::{BenchmarkResult, MatchesResult, ReachResult, SolveResult, WalkResult};
use colored::Colorize;

/// Print the result of solving a ladder
pub fn print_solve_result(result: &SolveResult, show_stats: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.source.bright_yellow().bold(),
        result.dest.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.outcome {
        Ok(ladder) => {
            for (i, word) in ladder.words().iter().enumerate() {
                let prev = i.checked_sub(1).map(|p| ladder.words()[p].text());
                println!("  {i:>2}. {}", highlight_rung(prev, word.text()));
            }
            println!();
            println!(
                "{}",
                format!("✅ {} words, {} steps", ladder.len(), ladder.steps())
                    .green()
                    .bold()
            );
        }
        Err(e) => {
            println!("{}", format!("❌ {e}").red().bold());
        }
    }

    if show_stats {
        let stats = &result.stats;
        println!("\n📊 {} ({})", "Search".bright_cyan().bold(), result.engine);
        println!("   Nodes expanded:  {}", stats.nodes_expanded);
        if stats.frontier_peak > 0 {
            println!("   Frontier peak:   {}", stats.frontier_peak);
            println!("   Reopened:        {}", stats.reopened);
        }
        if stats.cache_hits > 0 || stats.cache_stores > 0 {
            println!("   Cache hits:      {}", stats.cache_hits);
            println!("   Cache stores:    {}", stats.cache_stores);
        }
        if let Some(worst) = stats.worst_cost {
            println!("   Worst route:     {worst} steps");
        }
        println!(
            "   Time taken:      {:.3}ms",
            result.duration.as_secs_f64() * 1000.0
        );
    }
}

/// Print the neighbors of a word
pub fn print_matches_result(result: &MatchesResult) {
    if !result.found {
        println!("{}", format!("❌ {} is not in the dictionary", result.word).red());
        return;
    }

    println!(
        "\n{} has {} neighbors (network of {} words)",
        result.word.bright_yellow().bold(),
        result.matches.len(),
        result.component_size
    );
    for row in result.matches.chunks(8) {
        println!("  {}", row.join(" "));
    }
}

/// Print a reachability check
pub fn print_reach_result(result: &ReachResult) {
    let r = result.reachability;
    let verdict = if !r.both_valid {
        "at least one word is not in the dictionary".red()
    } else if r.possible {
        "reachable".green().bold()
    } else {
        "in different networks".yellow()
    };
    println!(
        "{} → {}: {verdict} (possible: {}, both valid: {})",
        result.first.bright_yellow(),
        result.second.bright_yellow(),
        r.possible,
        r.both_valid
    );
}

/// Print a random walk
pub fn print_walk_result(result: &WalkResult) {
    let words: Vec<&str> = result.words.iter().map(String::as_str).collect();
    println!(
        "\n🎲 Random walk ({} steps)",
        words.len().saturating_sub(1)
    );
    println!("  {}", format_ladder(&words));
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Engines:".bright_cyan().bold());
    println!("   Pairs tested:     {}", result.total_pairs);

    let slowest = result
        .runs
        .iter()
        .map(|r| r.duration.as_secs_f64())
        .fold(0.0, f64::max);

    for run in &result.runs {
        let bar = create_progress_bar(run.duration.as_secs_f64(), slowest, 30);
        println!("\n   {}", run.engine.bright_yellow().bold());
        println!(
            "   Solved:           {}/{}",
            run.solved.to_string().green(),
            result.total_pairs
        );
        println!("   Average steps:    {:.2}", run.average_steps());
        println!("   Nodes expanded:   {}", run.nodes_expanded);
        println!(
            "   Time taken:       [{}] {:.3}s",
            bar.green(),
            run.duration.as_secs_f64()
        );
        println!("   Pairs/second:     {:.1}", run.pairs_per_second);
    }

    let agreement = format!("{}/{}", result.agreements, result.total_pairs);
    println!(
        "\n🤝 Length agreement: {}",
        if result.agreements == result.total_pairs {
            agreement.green().bold()
        } else {
            agreement.yellow().bold()
        }
    );
}
