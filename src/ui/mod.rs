//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! Widgets read core state and draw it; none of them mutate anything.

pub mod forms;
pub mod friends_list;
pub mod landing;
pub mod layout;
pub mod theme;

/// Flatten a buffer into newline-separated rows for assertions.
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
