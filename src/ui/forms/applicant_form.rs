//! Applicant intake form view

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FieldName, Focus};
use crate::ui::components::{
    banner_height, render_banner, render_submit_button, BannerKind, BUTTON_HEIGHT,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const TITLE: &str = "Pre-interview questionnaire";
pub const SUBTITLE: &str = "Please fill in the required fields";

/// Draw the whole form card
pub fn draw_applicant_form(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.controller.state();

    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    // Error banner takes precedence; both are never set together
    let banner = state
        .status
        .submit_error
        .as_deref()
        .map(|m| (BannerKind::Error, m))
        .or_else(|| state.status.success.as_deref().map(|m| (BannerKind::Success, m)));
    let banner_rows = banner
        .map(|(_, message)| banner_height(message, inner.width))
        .unwrap_or(0);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Title
            Constraint::Length(2),             // Subtitle + gap
            Constraint::Length(FIELD_HEIGHT),  // First name
            Constraint::Length(FIELD_HEIGHT),  // Last name
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(banner_rows),   // Banner
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(SUBTITLE, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center),
        chunks[1],
    );

    for (field, chunk) in FieldName::ALL.into_iter().zip(&chunks[2..5]) {
        draw_field(
            frame,
            *chunk,
            field,
            state.values.get(field),
            state.errors.get(field),
            app.focus == Focus::on(field),
        );
    }

    if let Some((kind, message)) = banner {
        render_banner(frame, chunks[5], kind, message);
    }

    render_submit_button(
        frame,
        chunks[6],
        app.focus == Focus::SubmitButton,
        state.is_submitting(),
    );
}
