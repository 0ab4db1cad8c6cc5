//! Header bar widget
//!
//! Logo, the role's nav items, the call-to-action, the profile button and the
//! role badge, in one bordered row.

use campus_core::navigation::{HOME_LINK, PROFILE_LINK};
use campus_core::{role_chrome, Page, Role};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Main header for the current role and page
pub struct MainHeader {
    role: Role,
    page: Page,
    goto: bool,
}

impl MainHeader {
    pub fn new(role: Role, page: Page) -> Self {
        Self {
            role,
            page,
            goto: false,
        }
    }

    /// Show the "go to" key next to each link
    pub fn goto_active(mut self, active: bool) -> Self {
        self.goto = active;
        self
    }

    fn key_hint(&self, key: char) -> Option<Span<'static>> {
        self.goto
            .then(|| Span::styled(format!("{key} "), styles::keybinding()))
    }

    fn left_line(&self) -> Line<'static> {
        let chrome = role_chrome(self.role);
        let mut spans = vec![Span::raw(" ")];
        spans.extend(self.key_hint('h'));
        spans.push(Span::styled(
            HOME_LINK.label,
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("  "));

        for (i, item) in chrome.nav_items.iter().enumerate() {
            if let Some(digit) = char::from_digit(i as u32 + 1, 10) {
                spans.extend(self.key_hint(digit));
            }
            let style = if item.target == self.page {
                styles::accent_bold().add_modifier(Modifier::UNDERLINED)
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(item.label, style));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    }

    fn right_line(&self) -> Line<'static> {
        let chrome = role_chrome(self.role);
        let mut spans = Vec::new();
        spans.extend(self.key_hint('c'));
        spans.push(Span::styled(
            format!("[ {} ]", chrome.cta.label),
            styles::accent_bold(),
        ));
        spans.push(Span::raw(" "));
        spans.extend(self.key_hint('p'));
        let profile_style = if self.page == PROFILE_LINK.target {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        spans.push(Span::styled(PROFILE_LINK.label, profile_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" {} ", chrome.badge),
            styles::role_badge(self.role),
        ));
        spans.push(Span::raw(" "));
        Line::from(spans)
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = self.left_line();
        let right = self.right_line();
        let left_width = left.width() as u16;
        let right_width = right.width() as u16;

        buf.set_line(inner.x, inner.y, &left, inner.width);

        // Right section only when it doesn't overlap the nav items
        if left_width + right_width <= inner.width {
            let x = inner.x + inner.width - right_width;
            buf.set_line(x, inner.y, &right, right_width);
        } else {
            // Keep the badge visible on narrow terminals
            let badge = Line::from(Span::styled(
                format!(" {} ", role_chrome(self.role).badge),
                styles::role_badge(self.role),
            ));
            let badge_width = badge.width() as u16;
            if badge_width < inner.width {
                let x = inner.x + inner.width - badge_width;
                buf.set_line(x, inner.y, &badge, badge_width);
            }
        }
    }
}
