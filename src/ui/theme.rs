//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

use crate::core::friend::BalanceStatus;

/// Central theme. Colours defined here propagate everywhere.
pub struct Theme;

impl Theme {
    // ── friends list ───────────────────────────────────────────
    pub fn name_style() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn avatar_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn balance_style(status: BalanceStatus) -> Style {
        match status {
            BalanceStatus::YouOwe(_) => Style::default().fg(Color::Red),
            BalanceStatus::OwesYou(_) => Style::default().fg(Color::Green),
            BalanceStatus::Even => Style::default().fg(Color::Gray),
        }
    }

    pub fn selected_row_style() -> Style {
        Style::default().bg(Color::DarkGray)
    }

    pub fn selected_marker_style() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    // ── forms ──────────────────────────────────────────────────
    pub fn label_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn input_style() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)
    }

    pub fn focused_input_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
    }

    pub fn readonly_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn button_style() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style(focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
