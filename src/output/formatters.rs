//! Formatting utilities for terminal output

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Position of the single letter that differs between two ladder rungs
#[must_use]
pub fn changed_position(prev: &str, next: &str) -> Option<usize> {
    if prev.len() != next.len() {
        return None;
    }
    let mut diffs = prev
        .bytes()
        .zip(next.bytes())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i);
    let first = diffs.next()?;
    diffs.next().is_none().then_some(first)
}

/// Render a rung with the changed letter highlighted
#[must_use]
pub fn highlight_rung(prev: Option<&str>, word: &str) -> String {
    let changed = prev.and_then(|p| changed_position(p, word));
    word.chars()
        .enumerate()
        .map(|(i, c)| {
            if Some(i) == changed {
                c.to_string().bright_green().bold().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Render a whole ladder on one line, highlighting each change
#[must_use]
pub fn format_ladder(words: &[&str]) -> String {
    let mut prev: Option<&str> = None;
    let mut parts = Vec::with_capacity(words.len());
    for &word in words {
        parts.push(highlight_rung(prev, word));
        prev = Some(word);
    }
    parts.join(&format!(" {} ", "→".bright_black()))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Terminal progress bar for long batch runs
#[must_use]
pub fn batch_progress(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
