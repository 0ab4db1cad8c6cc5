//! Role switcher panel

use campus_app::overlays::PanelState;
use campus_core::{role_chrome, Role};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay;
use crate::theme::styles;

pub const WIDTH: u16 = 30;
pub const HEIGHT: u16 = Role::ALL.len() as u16 + 2;

pub struct RoleSwitcher<'a> {
    active: Role,
    panel: &'a PanelState,
    focused: bool,
}

impl<'a> RoleSwitcher<'a> {
    pub fn new(active: Role, panel: &'a PanelState, focused: bool) -> Self {
        Self {
            active,
            panel,
            focused,
        }
    }
}

impl Widget for RoleSwitcher<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::clear_area(buf, area);

        let block = styles::modal_block(" Role (F3) ").border_style(if self.focused {
            styles::border_active()
        } else {
            styles::border_inactive()
        });
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = Role::ALL
            .iter()
            .enumerate()
            .map(|(i, role)| {
                let check = if *role == self.active { "✓" } else { " " };
                let text = format!("{} {} {}", i + 1, check, role_chrome(*role).badge);
                if self.focused && i == self.panel.cursor {
                    Line::from(Span::styled(text, styles::focused_selected()))
                } else if *role == self.active {
                    Line::from(Span::styled(text, styles::role_badge(*role)))
                } else {
                    Line::from(Span::styled(text, styles::text_primary()))
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_marks_active_role() {
        let mut term = TestTerminal::with_size(WIDTH, HEIGHT);
        let panel = PanelState {
            open: true,
            cursor: 1,
        };
        term.render_widget(RoleSwitcher::new(Role::Lecturer, &panel, false), term.area());

        assert!(term.buffer_contains("1   Student"));
        assert!(term.buffer_contains("2 ✓ Lecturer"));
        assert!(term.buffer_contains("3   Admin"));
    }
}
