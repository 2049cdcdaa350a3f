//! Layout helpers: split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the add-friend form including its border.
const ADD_FORM_HEIGHT: u16 = 6;

/// Main screen: sidebar (friends + add form + toggle hint), split-bill pane,
/// and a bottom status bar.
pub struct AppLayout {
    pub list_area: Rect,
    pub add_form_area: Option<Rect>,
    pub toggle_area: Rect,
    pub split_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn from_area(area: Rect, add_form_open: bool) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // panes
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        let form_height = if add_form_open { ADD_FORM_HEIGHT } else { 0 };
        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(form_height),
                Constraint::Length(1), // "Add friend" / "close" button
            ])
            .split(columns[0]);

        Self {
            list_area: sidebar[0],
            add_form_area: add_form_open.then_some(sidebar[1]),
            toggle_area: sidebar[2],
            split_area: columns[1],
            status_area: rows[1],
        }
    }
}

/// A centered rectangle with fixed dimensions, clamped to the available area.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_form_only_takes_space_when_open() {
        let area = Rect::new(0, 0, 80, 24);
        let closed = AppLayout::from_area(area, false);
        assert!(closed.add_form_area.is_none());
        assert_eq!(closed.status_area.y, 23);

        let open = AppLayout::from_area(area, true);
        assert_eq!(open.add_form_area.map(|r| r.height), Some(ADD_FORM_HEIGHT));
        assert!(open.list_area.height < closed.list_area.height);
    }

    #[test]
    fn centered_is_clamped() {
        let r = centered_fixed(100, 10, Rect::new(0, 0, 40, 20));
        assert_eq!(r, Rect::new(0, 5, 40, 10));
    }
}
