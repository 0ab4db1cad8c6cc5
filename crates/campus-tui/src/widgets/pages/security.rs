//! Security center

use campus_core::account::security::{
    device_limit_reached, DEVICES, DEVICE_LIMIT, DEVICE_LIMIT_WARNING, LOGIN_ACTIVITY,
    PASSWORD_FIELDS, QUICK_ACTIONS, SCORE, SCORE_CHECKS, SUBTITLE, TIPS, TITLE,
    TWO_FACTOR_METHOD,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{bullet, card, heading, progress_bar};
use crate::theme::styles;

pub struct SecurityView;

fn devices() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        format!(" {}/{} devices active", DEVICES.len(), DEVICE_LIMIT),
        styles::text_muted(),
    ))];
    if device_limit_reached() {
        lines.push(Line::from(Span::styled(
            format!(" ⚠ {DEVICE_LIMIT_WARNING}"),
            styles::status_yellow(),
        )));
    }
    for device in DEVICES.iter() {
        let mut title = vec![Span::styled(format!(" {} ", device.name), styles::title())];
        if device.is_current {
            title.push(Span::styled("This device", styles::status_green()));
        }
        lines.push(Line::from(title));
        lines.push(Line::from(Span::styled(
            format!(
                "   {} • {} • {} • {}",
                device.kind, device.browser, device.location, device.last_active
            ),
            styles::text_muted(),
        )));
    }
    lines
}

fn logins() -> Vec<Line<'static>> {
    LOGIN_ACTIVITY
        .iter()
        .map(|attempt| {
            let (icon, style) = if attempt.success {
                ("✓", styles::status_green())
            } else {
                ("✗", styles::status_red())
            };
            Line::from(vec![
                Span::styled(format!(" {icon} "), style),
                Span::styled(attempt.device, styles::text_primary()),
                Span::styled(
                    format!("  {} • {}", attempt.location, attempt.time),
                    styles::text_muted(),
                ),
            ])
        })
        .collect()
}

fn score() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(format!(" {SCORE}/100 "), styles::accent_bold()),
        progress_bar(SCORE, 12),
    ])];
    for (check, ok) in SCORE_CHECKS.iter() {
        let (icon, style) = if *ok {
            ("✓", styles::status_green())
        } else {
            ("○", styles::text_muted())
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {icon} "), style),
            Span::styled(*check, styles::text_secondary()),
        ]));
    }
    lines
}

impl Widget for SecurityView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body = heading(TITLE, SUBTITLE, area, buf);
        let [main, sidebar] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(34)]).areas(body);

        let [top, device_area, login_area] = Layout::vertical([
            Constraint::Length(6),
            Constraint::Min(6),
            Constraint::Length(6),
        ])
        .areas(main);
        let [password, two_factor] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(top);

        card(
            " Change Password ",
            PASSWORD_FIELDS.iter().copied().map(bullet).collect(),
            password,
            buf,
        );
        card(
            " Two-Factor Authentication ",
            vec![
                Line::from(Span::styled(" ● Enabled", styles::status_green())),
                Line::from(Span::styled(
                    format!(" {TWO_FACTOR_METHOD}"),
                    styles::text_secondary(),
                )),
            ],
            two_factor,
            buf,
        );
        Paragraph::new(devices())
            .block(styles::card(" Active Devices "))
            .wrap(Wrap { trim: false })
            .render(device_area, buf);
        card(" Recent Login Activity ", logins(), login_area, buf);

        let [score_area, actions, tips] = Layout::vertical([
            Constraint::Length(7),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .areas(sidebar);
        card(" Security Score ", score(), score_area, buf);
        card(
            " Quick Actions ",
            QUICK_ACTIONS.iter().copied().map(bullet).collect(),
            actions,
            buf,
        );
        card(
            " Security Tips ",
            TIPS.iter().copied().map(bullet).collect(),
            tips,
            buf,
        );
    }
}
