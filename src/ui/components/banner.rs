//! Page-level success and error banners

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Which banner to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    fn color(&self) -> Color {
        match self {
            BannerKind::Success => Color::Green,
            BannerKind::Error => Color::Red,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            BannerKind::Success => " Done ",
            BannerKind::Error => " Error ",
        }
    }
}

/// Height a banner needs for `message` at the given width, borders included
pub fn banner_height(message: &str, width: u16) -> u16 {
    let inner = width.saturating_sub(2).max(1) as usize;
    // Leading space before the message
    let lines = (message.chars().count() + 1).div_ceil(inner);
    lines as u16 + 2
}

/// Render a bordered banner
pub fn render_banner(frame: &mut Frame, area: Rect, kind: BannerKind, message: &str) {
    let color = kind.color();
    let block = Block::default()
        .title(Span::styled(
            kind.title(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {message}"),
        Style::default().fg(color),
    )))
    .wrap(Wrap { trim: true })
    .block(block);

    frame.render_widget(paragraph, area);
}
