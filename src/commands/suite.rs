//! Ladder test suite
//!
//! Runs a batch of well-known pairs plus randomly generated reachable pairs
//! through one engine and summarizes the outcome.

use crate::graph::WordGraph;
use crate::output::formatters::{batch_progress, create_progress_bar, format_ladder};
use crate::sampling::Sampler;
use crate::solver::{DEFAULT_MAX_STEPS, EngineType, Ladder, LadderError, PathFinder, Solver};
use colored::Colorize;
use log::debug;
use rand::Rng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Pairs every suite run starts with
pub const FIXED_PAIRS: &[(&str, &str)] = &[
    ("CAT", "DOG"),
    ("COLD", "WARM"),
    ("HEAD", "TAIL"),
    ("SEED", "TREE"),
    ("NOPE", "BOOM"),
    ("ULNA", "BLAB"),
];

/// Default number of random pairs
pub const DEFAULT_RANDOM_PAIRS: usize = 20;

/// Default walk length used to pick a reachable destination
pub const DEFAULT_WANDER_STEPS: usize = 30;

/// Configuration for a suite run
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    pub random_pairs: usize,
    pub wander_steps: usize,
    pub max_steps: usize,
    pub length: Option<usize>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            random_pairs: DEFAULT_RANDOM_PAIRS,
            wander_steps: DEFAULT_WANDER_STEPS,
            max_steps: DEFAULT_MAX_STEPS,
            length: None,
        }
    }
}

/// Result from solving a single pair
#[derive(Debug, Clone)]
pub struct PairResult {
    pub source: String,
    pub dest: String,
    pub outcome: Result<Ladder, LadderError>,
    pub duration: Duration,
}

/// Statistics from a suite run
#[derive(Debug)]
pub struct SuiteStatistics {
    pub engine: &'static str,
    pub total_pairs: usize,
    pub solved: usize,
    pub failed: usize,
    pub average_length: f64,
    pub step_distribution: FxHashMap<usize, usize>,
    pub longest: Option<Ladder>,
    pub failures: Vec<(String, String, LadderError)>,
    pub total_time: Duration,
}

/// Fixed pairs present in the graph, followed by random reachable pairs
///
/// Random pairs are a random word and the end of a random walk from it, so
/// every one of them has a ladder.
pub fn build_pairs<R: Rng>(
    graph: &WordGraph,
    sampler: &mut Sampler<R>,
    config: &SuiteConfig,
) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = FIXED_PAIRS
        .iter()
        .filter(|(a, b)| {
            let present = graph.find_node(a).is_some() && graph.find_node(b).is_some();
            if !present {
                debug!("Skipping fixed pair {a} -> {b}: not in dictionary");
            }
            present
        })
        .map(|&(a, b)| (a.to_string(), b.to_string()))
        .collect();

    for _ in 0..config.random_pairs {
        let Some((a, b)) = sampler.random_pair(graph, config.length, config.wander_steps) else {
            debug!("Could not sample a random pair");
            break;
        };
        pairs.push((graph.word(a).text().to_string(), graph.word(b).text().to_string()));
    }

    pairs
}

/// Solve every pair, in parallel, with fresh engines of the given kind
///
/// Each worker thread owns its own engine, so memo caches are never shared.
/// The pair-to-worker split varies from run to run. Outcomes and ladder lengths
/// repeat for a fixed seed, but a memo engine may pick different words for an
/// equally short ladder depending on what its worker had cached.
pub fn run_suite(
    graph: &WordGraph,
    engine: &EngineType,
    pairs: &[(String, String)],
    max_steps: usize,
    show_progress: bool,
) -> SuiteStatistics {
    let pb = show_progress.then(|| batch_progress(pairs.len()));
    let total_start = Instant::now();

    let results: Vec<PairResult> = pairs
        .par_iter()
        .map_init(
            || Solver::new(engine.fresh(), graph),
            |solver, (source, dest)| {
                let start = Instant::now();
                let outcome = solver.solve(source, dest, max_steps);
                if let Some(pb) = &pb {
                    pb.inc(1);
                }
                PairResult {
                    source: source.clone(),
                    dest: dest.clone(),
                    outcome,
                    duration: start.elapsed(),
                }
            },
        )
        .collect();

    if let Some(pb) = &pb {
        pb.finish_with_message("Complete!");
    }

    summarize(engine.name(), &results, total_start.elapsed())
}

/// Aggregate per-pair results
#[must_use]
pub fn summarize(engine: &'static str, results: &[PairResult], total_time: Duration) -> SuiteStatistics {
    let mut step_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();
    let mut longest: Option<&Ladder> = None;
    let mut total_words = 0;

    for result in results {
        match &result.outcome {
            Ok(ladder) => {
                total_words += ladder.len();
                *step_distribution.entry(ladder.steps()).or_insert(0) += 1;
                if longest.is_none_or(|l| ladder.len() > l.len()) {
                    longest = Some(ladder);
                }
            }
            Err(e) => failures.push((result.source.clone(), result.dest.clone(), e.clone())),
        }
    }

    let solved = results.len() - failures.len();
    let average_length = if solved > 0 {
        total_words as f64 / solved as f64
    } else {
        0.0
    };

    SuiteStatistics {
        engine,
        total_pairs: results.len(),
        solved,
        failed: failures.len(),
        average_length,
        step_distribution,
        longest: longest.cloned(),
        failures,
        total_time,
    }
}

/// Print suite statistics
pub fn print_suite_statistics(stats: &SuiteStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Suite Results ({}) ", stats.engine.bright_yellow());
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Pairs tested:        {}", stats.total_pairs);
    if stats.total_pairs > 0 {
        println!(
            "  Solved:              {} {}",
            stats.solved,
            format!(
                "({:.1}%)",
                stats.solved as f64 / stats.total_pairs as f64 * 100.0
            )
            .green()
        );
    }
    if stats.failed > 0 {
        println!("  Failed:              {}", stats.failed.to_string().red());
    }
    println!(
        "  Average length:      {}",
        format!("{:.2} words", stats.average_length)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if !stats.step_distribution.is_empty() {
        println!("\n📈 {}", "Step Distribution".bright_cyan().bold());
        let max_count = stats.step_distribution.values().copied().max().unwrap_or(1);
        let mut steps: Vec<_> = stats.step_distribution.iter().collect();
        steps.sort_by_key(|(s, _)| **s);
        for (step, count) in steps {
            let bar = create_progress_bar(*count as f64, max_count as f64, 30);
            println!("  {step:2} steps: {} {count:4}", bar.green());
        }
    }

    if let Some(ladder) = &stats.longest {
        println!("\n🪜 {}", "Longest Ladder".green().bold());
        let words: Vec<&str> = ladder.words().iter().map(|w| w.text()).collect();
        println!("  {} ({} steps)", format_ladder(&words), ladder.steps());
    }

    if !stats.failures.is_empty() {
        println!("\n😰 {}", "Failures".yellow().bold());
        for (source, dest, error) in stats.failures.iter().take(10) {
            println!("  {} → {}: {error}", source.yellow(), dest.yellow());
        }
    }
}
