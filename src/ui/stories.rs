//! Story card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::helpers::{truncate, wrap_text};
use crate::models::UserStory;
use crate::theme::{
    AMBER_WARNING, BG_SECONDARY, BORDER_SUBTLE, GREEN_SUCCESS, INDIGO_PRIMARY, ROUNDED_BORDERS,
    TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};

/// Lines a story card needs at the given outer width:
/// border + title + wrapped description + blank + criteria + border
pub fn story_card_height(story: &UserStory, width: u16) -> u16 {
    let inner_width = width.saturating_sub(4) as usize;
    let description_lines = wrap_text(story.description, inner_width).len();
    (2 + 1 + description_lines + 1 + story.criteria.len()) as u16
}

/// Build the lines shown inside a story card
pub fn story_card_lines(story: &UserStory, inner_width: usize) -> Vec<Line<'static>> {
    let points = format!("{} pts", story.points);
    let prefix = format!("#{} ", story.number());
    let available_title_width = inner_width
        .saturating_sub(prefix.chars().count())
        .saturating_sub(points.chars().count() + 1);

    let mut lines = vec![Line::from(vec![
        Span::styled(
            prefix,
            Style::default()
                .fg(INDIGO_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            truncate(story.title, available_title_width),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(points, Style::default().fg(AMBER_WARNING)),
    ])];

    for line in wrap_text(story.description, inner_width) {
        lines.push(Line::from(Span::styled(
            line,
            Style::default()
                .fg(TEXT_SECONDARY)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    lines.push(Line::default());

    for criterion in story.criteria {
        lines.push(Line::from(vec![
            Span::styled("✓ ", Style::default().fg(GREEN_SUCCESS)),
            Span::styled(
                truncate(criterion, inner_width.saturating_sub(2)),
                Style::default().fg(TEXT_MUTED),
            ),
        ]));
    }

    lines
}

/// Render a single user story card
pub fn render_story_card(area: Rect, story: &UserStory, frame: &mut Frame) {
    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY))
        .title(Span::styled(
            format!(" {} ", story.id),
            Style::default().fg(TEXT_MUTED),
        ));

    let inner_width = area.width.saturating_sub(4) as usize;
    let paragraph = Paragraph::new(story_card_lines(story, inner_width)).block(card_block);
    frame.render_widget(paragraph, area);
}

/// Stack story cards vertically, skipping the first `skip` cards
pub fn render_story_cards(area: Rect, stories: &[UserStory], skip: usize, frame: &mut Frame) {
    let mut y = area.y;
    for story in stories.iter().skip(skip) {
        let remaining = area.bottom().saturating_sub(y);
        if remaining < 3 {
            break;
        }
        let height = story_card_height(story, area.width).min(remaining);
        let card_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        render_story_card(card_area, story, frame);
        y += height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::USER_STORIES;
    use crate::ui::helpers::buffer_lines;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_story_card_height_counts_criteria() {
        let story = &USER_STORIES[0];
        // Wide enough for a single description line
        assert_eq!(story_card_height(story, 200), 2 + 1 + 1 + 1 + 4);
    }

    #[test]
    fn test_story_card_lines_header() {
        let lines = story_card_lines(&USER_STORIES[1], 80);
        let header: String = lines[0].spans.iter().map(|s| s.content.to_string()).collect();
        assert_eq!(header, "#1025 Rejection Reason Enforcement 3 pts");
    }

    #[test]
    fn test_render_story_cards() {
        let backend = TestBackend::new(80, 40);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| render_story_cards(f.area(), USER_STORIES, 0, f))
            .unwrap();

        let text = buffer_lines(terminal.backend().buffer()).join("\n");
        assert!(text.contains("GF-1024"));
        assert!(text.contains("Submit disabled until reason selected"));
        assert!(text.contains("8 pts"));
    }

    #[test]
    fn test_render_story_cards_skips() {
        let backend = TestBackend::new(80, 40);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| render_story_cards(f.area(), USER_STORIES, 2, f))
            .unwrap();

        let text = buffer_lines(terminal.backend().buffer()).join("\n");
        assert!(!text.contains("GF-1024"));
        assert!(text.contains("GF-1026"));
    }
}
