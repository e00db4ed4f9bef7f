//! Formatting utilities for terminal output

use crate::core::{Direction, FieldStatus, NumericVerdict, TagMatch};
use colored::{ColoredString, Colorize};

/// Arrow glyph pointing toward the target's value
#[must_use]
pub const fn direction_arrow(direction: Direction) -> char {
    match direction {
        Direction::Higher => '↑',
        Direction::Lower => '↓',
    }
}

/// Color a categorical field value by its status
#[must_use]
pub fn status_cell(text: &str, status: FieldStatus) -> ColoredString {
    match status {
        FieldStatus::Exact => text.bright_green().bold(),
        FieldStatus::Wrong => text.bright_red(),
    }
}

/// Format a numeric field value with its direction marker
#[must_use]
pub fn numeric_cell(value: i32, verdict: NumericVerdict) -> ColoredString {
    let text = match verdict.direction {
        Some(d) => format!("{value} {}", direction_arrow(d)),
        None => value.to_string(),
    };

    match verdict.status {
        FieldStatus::Exact => text.bright_green().bold(),
        FieldStatus::Wrong => text.bright_red(),
    }
}

/// Format the guess's tags as colored chips
#[must_use]
pub fn tag_chips(tags: &[TagMatch]) -> String {
    tags.iter()
        .map(|t| {
            let chip = format!("[{}]", t.tag);
            if t.matched {
                chip.bright_green().bold().to_string()
            } else {
                chip.bright_red().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
