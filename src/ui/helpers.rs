//! UI helper functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

use crate::theme::{BG_SECONDARY, BORDER_SUBTLE, INDIGO_PRIMARY, ROUNDED_BORDERS};

/// Simple text wrapping helper
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.chars().count() + 1 + word.chars().count() <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Rounded card with an optional title
pub fn card_block(title: &str) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    if title.is_empty() {
        block
    } else {
        block.title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(INDIGO_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ))
    }
}

/// Truncate to `max` characters, marking the cut with "..."
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let take_chars = max.saturating_sub(3);
    let truncated: String = text.chars().take(take_chars).collect();
    format!("{}...", truncated)
}

/// Flatten a buffer into one string per row (used by render tests)
#[cfg(test)]
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_empty() {
        let result = wrap_text("", 10);
        assert_eq!(result, vec![""]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        let result = wrap_text("hello world", 0);
        assert_eq!(result, vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_multiple_lines() {
        let result = wrap_text("hello world foo bar", 10);
        assert_eq!(result, vec!["hello", "world foo", "bar"]);
    }

    #[test]
    fn test_wrap_text_counts_chars_not_bytes() {
        let result = wrap_text("don\u{2019}t chase", 11);
        assert_eq!(result, vec!["don\u{2019}t chase"]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Quality Issues", 20), "Quality Issues");
        assert_eq!(truncate("Wrong Files Attached", 10), "Wrong F...");
    }
}
