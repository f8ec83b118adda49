//! UI module for the Yatzy TUI.

use ratatui::layout::Rect;

pub mod render;
pub mod theme;
pub mod widgets;

/// A fixed-size rect centered in `area`, clamped to fit.
pub fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
