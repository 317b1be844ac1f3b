//! Word Ladder - CLI
//!
//! Word ladder solver with TUI and CLI modes. Solves with A* or memoized
//! branch-and-bound search over a one-letter-change word graph.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::info;
use word_ladder::{
    commands::{
        SolveConfig, SuiteConfig, build_pairs, check_reachability, find_word_matches,
        print_suite_statistics, random_walk, run_benchmark, run_suite, solve_ladder,
    },
    core::Word,
    graph::WordGraph,
    output::{
        print_benchmark_result, print_matches_result, print_reach_result, print_solve_result,
        print_walk_result,
    },
    sampling::Sampler,
    solver::{DEFAULT_MAX_STEPS, EngineType, PathFinder, Solver},
    wordlists::{FOUR_LETTER, THREE_LETTER, all_words, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladder solver using A* and memoized branch-and-bound search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Engine: astar (default) or memo
    #[arg(short, long, global = true, default_value = "astar")]
    engine: String,

    /// Wordlist: 'all' (default), 'three', 'four', or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Seed for random sampling and neighbor shuffling
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Solve a ladder between two words
    Solve {
        /// Starting word
        from: String,

        /// Target word
        to: String,

        /// Maximum number of one-letter changes
        #[arg(short, long, default_value_t = DEFAULT_MAX_STEPS)]
        max_steps: usize,

        /// Show search statistics
        #[arg(short, long)]
        stats: bool,
    },

    /// List the words one letter away from a word
    Matches {
        /// Word to look up
        word: String,
    },

    /// Check whether two words share a network
    Reach {
        first: String,
        second: String,
    },

    /// Take a random walk through the dictionary
    Random {
        /// Word length to start from
        #[arg(short, long)]
        length: Option<usize>,

        /// Maximum number of steps
        #[arg(short = 'n', long, default_value = "10")]
        steps: usize,
    },

    /// Run the ladder suite: well-known pairs plus random reachable pairs
    Suite {
        /// Number of random pairs
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Random-walk length used to pick each destination
        #[arg(long, default_value = "30")]
        wander: usize,

        /// Maximum number of one-letter changes
        #[arg(short, long, default_value_t = DEFAULT_MAX_STEPS)]
        max_steps: usize,
    },

    /// Compare both engines on the suite pairs
    Benchmark {
        /// Number of random pairs
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

/// Load the dictionary based on the -w flag
///
/// - "all": embedded three- and four-letter words
/// - "three" / "four": one embedded list
/// - "<path>": whitespace-separated words from a file
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    use word_ladder::wordlists::loader::load_from_file;

    let words = match wordlist_mode {
        "all" => all_words(),
        "three" => words_from_slice(THREE_LETTER),
        "four" => words_from_slice(FOUR_LETTER),
        path => load_from_file(path).with_context(|| format!("Failed to read wordlist {path}"))?,
    };

    if words.is_empty() {
        bail!("Wordlist '{wordlist_mode}' contains no usable words");
    }
    Ok(words)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;
    let mut sampler = Sampler::from_seed_option(cli.seed);
    let graph = WordGraph::build_shuffled(words, sampler.rng_mut());
    info!(
        "Dictionary '{}': {} words, {} edges",
        cli.wordlist,
        graph.len(),
        graph.edge_count()
    );

    let engine = EngineType::from_name(&cli.engine);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&graph, engine, sampler),
        Commands::Solve {
            from,
            to,
            max_steps,
            stats,
        } => {
            run_solve_command(&graph, engine, from, to, max_steps, stats);
            Ok(())
        }
        Commands::Matches { word } => {
            print_matches_result(&find_word_matches(&graph, &word));
            Ok(())
        }
        Commands::Reach { first, second } => {
            print_reach_result(&check_reachability(&graph, &first, &second));
            Ok(())
        }
        Commands::Random { length, steps } => {
            let walk = random_walk(&graph, &mut sampler, length, steps)
                .context("Dictionary is empty")?;
            print_walk_result(&walk);
            Ok(())
        }
        Commands::Suite {
            count,
            wander,
            max_steps,
        } => {
            run_suite_command(&graph, &engine, &mut sampler, count, wander, max_steps);
            Ok(())
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(&graph, &mut sampler, count);
            Ok(())
        }
    }
}

fn run_solve_command(
    graph: &WordGraph,
    engine: EngineType,
    from: String,
    to: String,
    max_steps: usize,
    stats: bool,
) {
    let mut solver = Solver::new(engine, graph);
    let mut config = SolveConfig::new(from, to);
    config.max_steps = max_steps;

    let result = solve_ladder(config, &mut solver);
    print_solve_result(&result, stats);
}

fn run_suite_command(
    graph: &WordGraph,
    engine: &EngineType,
    sampler: &mut Sampler<rand::rngs::StdRng>,
    count: usize,
    wander: usize,
    max_steps: usize,
) {
    println!("\n{}", "═".repeat(70));
    println!(" Word Ladder Suite ");
    println!("{}", "═".repeat(70));
    println!("\nDictionary: {} words in {} networks", graph.len(), graph.component_count());
    println!("Engine: {}", engine.name().bright_yellow());
    println!();

    let config = SuiteConfig {
        random_pairs: count,
        wander_steps: wander,
        max_steps,
        length: None,
    };
    let pairs = build_pairs(graph, sampler, &config);
    println!("🎯 Solving {} pairs...", pairs.len());

    let stats = run_suite(graph, engine, &pairs, config.max_steps, true);
    print_suite_statistics(&stats);
}

fn run_benchmark_command(
    graph: &WordGraph,
    sampler: &mut Sampler<rand::rngs::StdRng>,
    count: usize,
) {
    println!("Running benchmark on {count} random pairs...");

    let config = SuiteConfig {
        random_pairs: count,
        ..SuiteConfig::default()
    };
    let pairs = build_pairs(graph, sampler, &config);
    let result = run_benchmark(graph, &pairs, config.max_steps);
    print_benchmark_result(&result);
}

fn run_play_command(
    graph: &WordGraph,
    engine: EngineType,
    sampler: Sampler<rand::rngs::StdRng>,
) -> Result<()> {
    use word_ladder::interactive::{App, run_tui};

    let app = App::new(graph, engine, sampler);
    run_tui(app)
}
