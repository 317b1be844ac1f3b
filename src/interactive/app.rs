//! TUI application state and logic

use crate::graph::WordGraph;
use crate::sampling::Sampler;
use crate::solver::{DEFAULT_MAX_STEPS, EngineType, PathFinder, SearchStats, Solver};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Walk length used when picking a random pair
const RANDOM_PAIR_WANDER: usize = 30;

/// Application state
pub struct App<'a> {
    pub graph: &'a WordGraph,
    pub solver: Solver<'a, EngineType>,
    pub sampler: Sampler<StdRng>,
    pub max_steps: usize,
    pub input_mode: InputMode,
    pub source_input: String,
    pub dest_input: String,
    pub current: Option<LadderInfo>,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// Which field keystrokes go to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Source,
    Destination,
}

/// The most recently solved ladder
#[derive(Debug, Clone)]
pub struct LadderInfo {
    pub words: Vec<String>,
    pub engine: &'static str,
    pub stats: SearchStats,
    pub duration: Duration,
}

impl LadderInfo {
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub source: String,
    pub dest: String,
    pub engine: &'static str,
    /// Steps taken, `None` if the query failed
    pub steps: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub queries: usize,
    pub solved: usize,
    pub total_steps: usize,
}

impl Statistics {
    #[must_use]
    pub fn average_steps(&self) -> f64 {
        if self.solved == 0 {
            0.0
        } else {
            self.total_steps as f64 / self.solved as f64
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(graph: &'a WordGraph, engine: EngineType, sampler: Sampler<StdRng>) -> Self {
        Self {
            graph,
            solver: Solver::new(engine, graph),
            sampler,
            max_steps: DEFAULT_MAX_STEPS,
            input_mode: InputMode::Source,
            source_input: String::new(),
            dest_input: String::new(),
            current: None,
            history: Vec::new(),
            messages: vec![
                Message {
                    text: format!(
                        "Welcome! {} words in {} networks.",
                        graph.len(),
                        graph.component_count()
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a start word, Tab, a target word, Enter to solve.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    #[must_use]
    pub fn engine_name(&self) -> &'static str {
        self.solver.engine().name()
    }

    /// Text of whichever field is active
    #[must_use]
    pub fn active_input(&self) -> &str {
        match self.input_mode {
            InputMode::Source => &self.source_input,
            InputMode::Destination => &self.dest_input,
        }
    }

    fn active_input_mut(&mut self) -> &mut String {
        match self.input_mode {
            InputMode::Source => &mut self.source_input,
            InputMode::Destination => &mut self.dest_input,
        }
    }

    /// One-letter neighbors of the word in the active field
    #[must_use]
    pub fn active_matches(&self) -> Vec<String> {
        let mut matches: Vec<String> = self
            .graph
            .find_matches(self.active_input())
            .iter()
            .map(|w| w.text().to_string())
            .collect();
        matches.sort();
        matches
    }

    pub fn solve_current(&mut self) {
        let source = self.source_input.to_ascii_uppercase();
        let dest = self.dest_input.to_ascii_uppercase();
        if source.is_empty() || dest.is_empty() {
            self.add_message("Enter both a start and a target word", MessageStyle::Error);
            return;
        }

        let start = Instant::now();
        let outcome = self.solver.solve(&source, &dest, self.max_steps);
        let duration = start.elapsed();
        let engine = self.engine_name();
        self.stats.queries += 1;

        match outcome {
            Ok(ladder) => {
                self.stats.solved += 1;
                self.stats.total_steps += ladder.steps();
                self.history.push(HistoryEntry {
                    source,
                    dest,
                    engine,
                    steps: Some(ladder.steps()),
                });
                self.add_message(
                    &format!("Solved in {} steps", ladder.steps()),
                    MessageStyle::Success,
                );
                self.current = Some(LadderInfo {
                    words: ladder.words().iter().map(|w| w.text().to_string()).collect(),
                    engine,
                    stats: self.solver.last_stats(),
                    duration,
                });
            }
            Err(e) => {
                self.history.push(HistoryEntry {
                    source,
                    dest,
                    engine,
                    steps: None,
                });
                self.current = None;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Fill both fields with a random reachable pair
    pub fn random_pair(&mut self) {
        let length = self.source_input.len();
        let length = (length > 0).then_some(length);
        if let Some((a, b)) = self
            .sampler
            .random_pair(self.graph, length, RANDOM_PAIR_WANDER)
        {
            self.source_input = self.graph.word(a).text().to_string();
            self.dest_input = self.graph.word(b).text().to_string();
            self.add_message(
                &format!("Random pair: {} → {}", self.source_input, self.dest_input),
                MessageStyle::Info,
            );
        } else {
            self.add_message("Could not find a random pair", MessageStyle::Error);
        }
    }

    /// Switch between the A* and memoized engines
    pub fn toggle_engine(&mut self) {
        let next = match self.solver.engine() {
            EngineType::AStar(_) => "memo",
            EngineType::Memo(_) => "astar",
        };
        self.solver = Solver::new(EngineType::from_name(next), self.graph);
        self.add_message(&format!("Engine: {next}"), MessageStyle::Info);
    }

    pub fn swap_words(&mut self) {
        std::mem::swap(&mut self.source_input, &mut self.dest_input);
    }

    pub fn clear(&mut self) {
        self.source_input.clear();
        self.dest_input.clear();
        self.current = None;
        self.input_mode = InputMode::Source;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c' | 'q') => self.should_quit = true,
                KeyCode::Char('r') => self.random_pair(),
                KeyCode::Char('e') => self.toggle_engine(),
                KeyCode::Char('s') => self.swap_words(),
                KeyCode::Char('n') => self.clear(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.input_mode = match self.input_mode {
                    InputMode::Source => InputMode::Destination,
                    InputMode::Destination => InputMode::Source,
                };
            }
            KeyCode::Char(c) => {
                let input = self.active_input_mut();
                if c.is_ascii_alphabetic() && input.len() < crate::core::MAX_WORD_LEN {
                    input.push(c.to_ascii_uppercase());
                }
            }
            KeyCode::Backspace => {
                self.active_input_mut().pop();
            }
            KeyCode::Enter => match self.input_mode {
                InputMode::Source => self.input_mode = InputMode::Destination,
                InputMode::Destination => self.solve_current(),
            },
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
