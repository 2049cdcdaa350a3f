//! Add-friend and split-bill form panels.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::core::add_friend::{AddFriendDraft, AddFriendField};
use crate::core::friend::format_amount;
use crate::core::split::{Payer, SplitDraft, SplitField};

use super::theme::Theme;

/// `label: value` with the value underlined, highlighted when focused.
fn field_line<'a>(label: &str, value: String, focused: bool) -> Line<'a> {
    let style = if focused {
        Theme::focused_input_style()
    } else {
        Theme::input_style()
    };
    let cursor = if focused { "_" } else { "" };
    Line::from(vec![
        Span::styled(format!("{label}: "), Theme::label_style()),
        Span::styled(format!("{value}{cursor}"), style),
    ])
}

fn panel<'a>(title: String, focused: bool) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style(focused))
}

// ───────────────────────────────────────── add friend ────────

pub struct AddFriendForm<'a> {
    pub draft: &'a AddFriendDraft,
    /// Field with keyboard focus, if the form has focus at all.
    pub focused: Option<AddFriendField>,
}

impl<'a> Widget for AddFriendForm<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let is = |field: AddFriendField| self.focused == Some(field);
        let lines = vec![
            field_line("Friend name", self.draft.field(AddFriendField::Name).to_string(), is(AddFriendField::Name)),
            field_line("Image URL", self.draft.field(AddFriendField::Image).to_string(), is(AddFriendField::Image)),
            Line::raw(""),
            Line::from(Span::styled(" Add (Enter) ", Theme::button_style())),
        ];
        Paragraph::new(lines)
            .block(panel(" Add friend ".into(), self.focused.is_some()))
            .render(area, buf);
    }
}

// ───────────────────────────────────────── split bill ────────

pub struct SplitBillForm<'a> {
    pub friend_name: &'a str,
    pub draft: &'a SplitDraft,
    pub focused: Option<SplitField>,
}

impl<'a> Widget for SplitBillForm<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let is = |field: SplitField| self.focused == Some(field);
        let friend_share = self
            .draft
            .paid_by_friend()
            .map(format_amount)
            .unwrap_or_default();
        let payer = match self.draft.payer() {
            Some(Payer::User) => "You".to_string(),
            Some(Payer::Friend) => self.friend_name.to_string(),
            None => "-".to_string(),
        };

        let lines = vec![
            field_line("Bill value", self.draft.bill().text().to_string(), is(SplitField::Bill)),
            field_line(
                "Your expenses",
                self.draft.paid_by_user().text().to_string(),
                is(SplitField::PaidByUser),
            ),
            Line::from(vec![
                Span::styled(format!("{}'s expenses: ", self.friend_name), Theme::label_style()),
                Span::styled(friend_share, Theme::readonly_style()),
            ]),
            field_line("Who is paying the bill", payer, is(SplitField::Payer)),
            Line::raw(""),
            Line::from(Span::styled(" Split bill (Enter) ", Theme::button_style())),
            Line::raw(""),
            Line::styled("Space/←/→ changes who pays  Esc: back", Theme::label_style()),
        ];

        Paragraph::new(lines)
            .block(panel(
                format!(" Split a Bill with {} ", self.friend_name),
                self.focused.is_some(),
            ))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;

    fn render(widget: impl Widget, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn add_form_shows_default_image() {
        let draft = AddFriendDraft::default();
        let text = render(
            AddFriendForm {
                draft: &draft,
                focused: Some(AddFriendField::Name),
            },
            60,
            6,
        );
        assert!(text.contains("Friend name: _"));
        assert!(text.contains("Image URL: https://i.pravatar.cc/48"));
    }

    #[test]
    fn split_form_derives_friend_share() {
        let mut draft = SplitDraft::default();
        draft.set_bill("100");
        draft.set_paid_by_user("40").unwrap();
        draft.set_payer(Payer::Friend);
        let text = render(
            SplitBillForm {
                friend_name: "Sarah",
                draft: &draft,
                focused: None,
            },
            60,
            12,
        );
        assert!(text.contains("Split a Bill with Sarah"));
        assert!(text.contains("Bill value: 100"));
        assert!(text.contains("Your expenses: 40"));
        assert!(text.contains("Sarah's expenses: 60"));
        assert!(text.contains("Who is paying the bill: Sarah"));
    }
}
