//! Shared floating-panel utilities.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Clear, Widget};

/// Place a fixed-size rect in the bottom-left or bottom-right corner.
///
/// If the requested size exceeds the area, clamps to the area dimensions.
pub fn bottom_corner_rect(width: u16, height: u16, area: Rect, right: bool) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = if right {
        area.x + area.width - w
    } else {
        area.x
    };
    let y = area.y + area.height - h;
    Rect::new(x, y, w, h)
}

/// Clear a rect and prepare it for panel content.
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}
