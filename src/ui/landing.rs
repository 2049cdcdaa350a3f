//! Welcome screen shown until the user enters the app.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::layout::centered_fixed;
use super::theme::Theme;

pub struct LandingWidget;

impl Widget for LandingWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = centered_fixed(52, 9, area);
        Clear.render(panel, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_style(true));

        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled("Welcome", Theme::title_style())),
            Line::raw(""),
            Line::raw("Manage your friends and split bills easily."),
            Line::raw(""),
            Line::from(Span::styled(" Enter App ", Theme::button_style())),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(panel, buf);
    }
}
