//! Account settings page

use campus_core::account::profile::{
    BILLING_HISTORY, CARD, CARD_EXPIRY, EMAIL, EMAIL_NOTIFICATIONS, LEARNING_PREFERENCES,
    MEMBERSHIP, NAME, PERSONAL_INFO, PLAN, PLAN_RENEWAL, PUSH_NOTIFICATIONS, SUBTITLE, SUMMARY,
    TITLE,
};
use campus_core::ProfileTab;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{card, field, heading};
use crate::theme::styles;
use crate::widgets::TabStrip;

pub struct ProfileView {
    tab: ProfileTab,
}

impl ProfileView {
    pub fn new(tab: ProfileTab) -> Self {
        Self { tab }
    }
}

fn toggle(label: &'static str, enabled: bool) -> Line<'static> {
    let (mark, style) = if enabled {
        ("● On ", styles::status_green())
    } else {
        ("○ Off", styles::text_muted())
    };
    Line::from(vec![
        Span::styled(format!(" {mark} "), style),
        Span::styled(label, styles::text_primary()),
    ])
}

fn tab_lines(tab: ProfileTab) -> Vec<Line<'static>> {
    match tab {
        ProfileTab::Profile => PERSONAL_INFO
            .iter()
            .map(|(label, value)| field(label, *value))
            .collect(),
        ProfileTab::Notifications => {
            let mut lines = vec![Line::from(Span::styled(
                " Email Notifications",
                styles::accent_bold(),
            ))];
            lines.extend(EMAIL_NOTIFICATIONS.iter().map(|(l, on)| toggle(l, *on)));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                " Push Notifications",
                styles::accent_bold(),
            )));
            lines.extend(PUSH_NOTIFICATIONS.iter().map(|(l, on)| toggle(l, *on)));
            lines
        }
        ProfileTab::Preferences => LEARNING_PREFERENCES
            .iter()
            .map(|(label, value)| field(label, *value))
            .collect(),
        ProfileTab::Billing => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(format!(" {PLAN} "), styles::accent_bold()),
                    Span::styled(PLAN_RENEWAL, styles::text_muted()),
                ]),
                Line::from(vec![
                    Span::styled(format!(" {CARD} "), styles::text_primary()),
                    Span::styled(CARD_EXPIRY, styles::text_muted()),
                ]),
                Line::default(),
                Line::from(Span::styled(" Billing History", styles::accent_bold())),
            ];
            for (date, amount, status) in BILLING_HISTORY.iter() {
                lines.push(Line::from(vec![
                    Span::styled(format!(" {date:<14}"), styles::text_secondary()),
                    Span::styled(format!("{amount:<9}"), styles::text_primary()),
                    Span::styled(*status, styles::status_green()),
                ]));
            }
            lines
        }
    }
}

impl Widget for ProfileView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body = heading(TITLE, SUBTITLE, area, buf);
        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(30), Constraint::Min(0)]).areas(body);

        let mut summary = vec![
            Line::from(Span::styled(format!(" {NAME}"), styles::title())),
            Line::from(Span::styled(format!(" {EMAIL}"), styles::text_muted())),
            Line::from(Span::styled(format!(" {MEMBERSHIP}"), styles::status_yellow())),
            Line::default(),
        ];
        summary.extend(SUMMARY.iter().map(|(label, value)| field(label, *value)));
        card(" Profile ", summary, sidebar, buf);

        let [tabs, pane] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(main);
        TabStrip::new(self.tab).render(tabs, buf);
        Paragraph::new(tab_lines(self.tab))
            .block(styles::glass_block(false))
            .wrap(Wrap { trim: false })
            .render(pane, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(tab: ProfileTab) -> TestTerminal {
        let mut term = TestTerminal::with_size(110, 28);
        term.render_widget(ProfileView::new(tab), term.area());
        term
    }

    #[test]
    fn test_profile_tab() {
        let term = render(ProfileTab::Profile);
        assert!(term.buffer_contains("Account Settings"));
        assert!(term.buffer_contains("San Francisco, CA"));
        assert!(term.buffer_contains("Pro Member"));
    }

    #[test]
    fn test_notifications_tab() {
        let term = render(ProfileTab::Notifications);
        assert!(term.buffer_contains("Promotions"));
        assert!(term.buffer_contains("Desktop Notifications"));
    }

    #[test]
    fn test_billing_tab() {
        let term = render(ProfileTab::Billing);
        assert!(term.buffer_contains("Pro Annual"));
        assert!(term.buffer_contains("Dec 20, 2025"));
    }
}
