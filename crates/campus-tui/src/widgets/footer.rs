//! Footer widget

use campus_core::navigation::FOOTER_LINKS;
use chrono::Datelike;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// Static footer text between the navigating links and the copyright
const FOOTER_TEXT: [&str; 3] = ["About Us", "Careers", "Help Center"];

/// Footer with the two navigating links, static text and copyright
pub struct Footer {
    year: i32,
    goto: bool,
}

impl Footer {
    pub fn new() -> Self {
        Self::with_year(chrono::Local::now().year())
    }

    pub fn with_year(year: i32) -> Self {
        Self { year, goto: false }
    }

    pub fn goto_active(mut self, active: bool) -> Self {
        self.goto = active;
        self
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (link, key) in FOOTER_LINKS.iter().zip(['b', 'l']) {
            if self.goto {
                spans.push(Span::styled(format!("{key} "), styles::keybinding()));
            }
            spans.push(Span::styled(link.label, styles::accent()));
            spans.push(Span::styled(" · ", styles::text_muted()));
        }
        for text in FOOTER_TEXT {
            spans.push(Span::styled(text, styles::text_muted()));
            spans.push(Span::styled(" · ", styles::text_muted()));
        }
        spans.pop();

        let left = Line::from(spans);
        let copyright = Line::from(Span::styled(
            format!("© {} UniCode.com. All rights reserved. ", self.year),
            styles::text_muted(),
        ));

        buf.set_line(area.x, area.y, &left, area.width);

        let left_width = left.width() as u16;
        let right_width = copyright.width() as u16;
        if left_width + right_width + 1 <= area.width {
            let x = area.x + area.width - right_width;
            buf.set_line(x, area.y, &copyright, right_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_footer_renders_links_and_copyright() {
        let mut term = TestTerminal::with_size(120, 1);
        term.render_widget(Footer::with_year(2026), term.area());

        assert!(term.buffer_contains("Browse All"));
        assert!(term.buffer_contains("Learning Paths"));
        assert!(term.buffer_contains("© 2026 UniCode.com"));
    }

    #[test]
    fn test_narrow_footer_drops_copyright() {
        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(Footer::with_year(2026), term.area());

        assert!(term.buffer_contains("Browse All"));
        assert!(!term.buffer_contains("©"));
    }
}
