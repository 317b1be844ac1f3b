//! TUI rendering with ratatui
//!
//! Layout for the ladder explorer.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::changed_position;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Ladder and history
            Constraint::Percentage(40), // Neighbors and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪜 WORD LADDER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(65), // Current ladder
            Constraint::Percentage(35), // History
        ])
        .split(area);

    render_ladder(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

/// One ladder rung with its changed letter highlighted
fn rung_line(index: usize, prev: Option<&str>, word: &str) -> Line<'static> {
    let changed = prev.and_then(|p| changed_position(p, word));
    let mut spans = vec![Span::styled(
        format!("{index:>3}. "),
        Style::default().fg(Color::DarkGray),
    )];
    for (i, c) in word.chars().enumerate() {
        let style = if Some(i) == changed {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(c.to_string(), style));
    }
    Line::from(spans)
}

fn render_ladder(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Ladder ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(ladder) = &app.current else {
        let paragraph = Paragraph::new("No ladder yet").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![Line::from(vec![
        Span::raw("Steps: "),
        Span::styled(
            ladder.steps().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "  | {} | {} expanded | {:.1}ms",
            ladder.engine,
            ladder.stats.nodes_expanded,
            ladder.duration.as_secs_f64() * 1000.0
        )),
    ])];

    let mut prev: Option<&str> = None;
    for (i, word) in ladder.words.iter().enumerate() {
        lines.push(rung_line(i, prev, word));
        prev = Some(word);
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(5)
        .enumerate()
        .map(|(i, entry)| {
            let outcome = entry
                .steps
                .map_or_else(|| "no ladder".to_string(), |s| format!("{s} steps"));
            let style = if entry.steps.is_some() {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Red)
            };
            ListItem::new(format!(
                "{}: {} → {} [{}] {}",
                app.history.len() - i,
                entry.source,
                entry.dest,
                entry.engine,
                outcome
            ))
            .style(style)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Neighbors
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_neighbors(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_neighbors(f: &mut Frame, app: &App, area: Rect) {
    let word = app.active_input();
    let content = if word.is_empty() {
        vec![Line::from("Type a word to see its neighbors")]
    } else if app.graph.find_node(word).is_none() {
        vec![Line::from(Span::styled(
            format!("{word} is not in the dictionary"),
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let matches = app.active_matches();
        let mut lines = vec![Line::from(format!("{} neighbors of {word}", matches.len()))];
        lines.extend(
            matches
                .chunks(5)
                .map(|row| Line::from(format!("  {}", row.join(" ")))),
        );
        lines
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Neighbors ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let fields = [
        (" From ", app.source_input.as_str(), InputMode::Source),
        (" To ", app.dest_input.as_str(), InputMode::Destination),
    ];
    for ((title, content, mode), chunk) in fields.into_iter().zip(chunks.iter()) {
        let color = if app.input_mode == mode {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        let input = Paragraph::new(content)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .style(Style::default().fg(color)),
            );
        f.render_widget(input, *chunk);
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(50),
        ])
        .split(area);

    let engine = Paragraph::new(format!("Engine: {}", app.engine_name())).alignment(Alignment::Center);
    f.render_widget(engine, chunks[0]);

    let stats_text = format!(
        "Solved: {}/{} | Avg: {:.1} steps",
        app.stats.solved,
        app.stats.queries,
        app.stats.average_steps()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Tab: Switch | Enter: Solve | ^R: Random | ^E: Engine | ^S: Swap")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
