//! Screen navigator panel
//!
//! Lists every screen with its description and marks the current one.

use campus_app::overlays::PanelState;
use campus_core::Page;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use unicode_width::UnicodeWidthStr;

use super::{modal_overlay, truncate};
use crate::theme::styles;

/// Panel width including borders
pub const WIDTH: u16 = 56;
/// Ten rows, a position line and borders
pub const HEIGHT: u16 = Page::ALL.len() as u16 + 3;

pub struct ScreenNavigator<'a> {
    current: Page,
    panel: &'a PanelState,
    focused: bool,
}

impl<'a> ScreenNavigator<'a> {
    pub fn new(current: Page, panel: &'a PanelState, focused: bool) -> Self {
        Self {
            current,
            panel,
            focused,
        }
    }

    fn row(&self, index: usize, page: Page, width: usize) -> Line<'static> {
        let number = (index + 1) % 10;
        let marker = if page == self.current { "●" } else { " " };
        let name = format!("{number} {marker} {:<14}", page.name());
        let description = truncate(page.description(), width.saturating_sub(name.width() + 1));

        if self.focused && index == self.panel.cursor {
            Line::from(Span::styled(
                format!("{name} {description}"),
                styles::focused_selected(),
            ))
        } else {
            let name_style = if page == self.current {
                styles::accent_bold()
            } else {
                styles::text_primary()
            };
            Line::from(vec![
                Span::styled(name, name_style),
                Span::raw(" "),
                Span::styled(description, styles::text_muted()),
            ])
        }
    }
}

impl Widget for ScreenNavigator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::clear_area(buf, area);

        let block = styles::modal_block(" Screens (F2) ").border_style(if self.focused {
            styles::border_active()
        } else {
            styles::border_inactive()
        });
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let mut lines: Vec<Line> = Page::ALL
            .iter()
            .enumerate()
            .map(|(i, page)| self.row(i, *page, width))
            .collect();
        lines.push(Line::from(Span::styled(
            format!(
                "Screen {} of {}",
                self.current.index() + 1,
                Page::ALL.len()
            ),
            styles::text_secondary(),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_lists_every_screen_and_position() {
        let mut term = TestTerminal::with_size(WIDTH, HEIGHT);
        let panel = PanelState {
            open: true,
            cursor: 0,
        };
        term.render_widget(ScreenNavigator::new(Page::Quiz, &panel, true), term.area());

        for page in Page::ALL {
            assert!(term.buffer_contains(page.name()), "missing {}", page.name());
        }
        assert!(term.buffer_contains("Screen 6 of 10"));
    }
}
