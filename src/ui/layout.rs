//! Layout components (form card placement, status bar)

use crate::app::App;
use crate::state::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form card grows
const CARD_MAX_WIDTH: u16 = 64;
/// Tallest the form card grows
const CARD_MAX_HEIGHT: u16 = 30;

/// Split the screen into the content area and the status bar row
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Center the form card within the content area
pub fn card_area(area: Rect) -> Rect {
    let width = area.width.min(CARD_MAX_WIDTH);
    let height = area.height.min(CARD_MAX_HEIGHT);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Key hints for the focused control
fn get_hints(app: &App) -> &'static str {
    if app.is_submitting() {
        "Submitting… | Tab: next field"
    } else if app.focus == Focus::SubmitButton {
        "Enter/Space: submit | Tab: next field | Esc: quit"
    } else {
        "Type to edit | Enter/^S: submit | Tab: next field | Esc: quit"
    }
}

/// Draw the bottom status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Sink status: filled once a client has been built
    let sink_status = if app.controller.sink_ready() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Gray))
    };
    spans.push(sink_status);

    spans.push(Span::styled(get_hints(app), Style::default().fg(Color::Gray)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_is_centered_and_capped() {
        let card = card_area(Rect::new(0, 0, 100, 40));
        assert_eq!(card, Rect::new(18, 5, 64, 30));
    }

    #[test]
    fn test_card_shrinks_on_small_terminals() {
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(card_area(area), area);
    }

    #[test]
    fn test_layout_reserves_status_row() {
        let (content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(content.height, 23);
        assert_eq!(status, Rect::new(0, 23, 80, 1));
    }
}
