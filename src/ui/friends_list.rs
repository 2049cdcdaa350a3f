//! Friends list: one two-line row per friend with their balance sentence.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::core::friend::{Friend, FriendId};

use super::theme::Theme;

/// Lines each friend occupies.
const ROW_HEIGHT: usize = 2;

pub struct FriendsListWidget<'a> {
    friends: &'a [Friend],
    selected: Option<&'a FriendId>,
    cursor: usize,
    has_focus: bool,
    block: Option<Block<'a>>,
}

impl<'a> FriendsListWidget<'a> {
    pub fn new(friends: &'a [Friend]) -> Self {
        Self {
            friends,
            selected: None,
            cursor: 0,
            has_focus: false,
            block: None,
        }
    }

    pub fn selected(mut self, selected: Option<&'a FriendId>) -> Self {
        self.selected = selected;
        self
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn focused(mut self, has_focus: bool) -> Self {
        self.has_focus = has_focus;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn row(&self, index: usize, friend: &Friend) -> [Line<'a>; ROW_HEIGHT] {
        let is_selected = self.selected == Some(&friend.id);
        let marker = if index == self.cursor && self.has_focus { "▸ " } else { "  " };
        let action = if is_selected { "close" } else { "select" };

        let mut name_line = Line::from(vec![
            Span::raw(marker),
            Span::styled(friend.name.clone(), Theme::name_style()),
            Span::raw(" "),
            Span::styled(format!("[{action}]"), Theme::selected_marker_style()),
            Span::raw("  "),
            Span::styled(friend.image.clone(), Theme::avatar_style()),
        ]);
        let mut status_line = Line::from(vec![
            Span::raw("    "),
            Span::styled(friend.status_line(), Theme::balance_style(friend.status())),
        ]);

        if is_selected {
            name_line = name_line.style(Theme::selected_row_style());
            status_line = status_line.style(Theme::selected_row_style());
        }
        [name_line, status_line]
    }
}

impl<'a> Widget for FriendsListWidget<'a> {
    fn render(mut self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block.take() {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.friends.is_empty() {
            Paragraph::new(Line::styled("No friends yet", Theme::label_style()))
                .render(inner, buf);
            return;
        }

        // Scroll so the cursor's row is fully visible.
        let visible_rows = (inner.height as usize / ROW_HEIGHT).max(1);
        let offset = (self.cursor + 1).saturating_sub(visible_rows);

        let lines: Vec<Line> = self
            .friends
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible_rows)
            .flat_map(|(i, friend)| self.row(i, friend))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
