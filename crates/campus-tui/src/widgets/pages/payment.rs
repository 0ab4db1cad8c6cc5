//! Checkout page

use campus_core::account::payment::{
    BILLING_FIELDS, CARD_FIELDS, COURSE_INSTRUCTOR, COURSE_TITLE, GUARANTEE, INCLUDES,
    PAYPAL_NOTICE, SUBTITLE, SUMMARY, TITLE, TOTAL,
};
use campus_core::PaymentMethod;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{card, check, heading};
use crate::theme::styles;
use crate::widgets::TabStrip;

pub struct PaymentView {
    method: PaymentMethod,
}

impl PaymentView {
    pub fn new(method: PaymentMethod) -> Self {
        Self { method }
    }
}

fn input_field(label: &'static str) -> [Line<'static>; 2] {
    [
        Line::from(Span::styled(format!(" {label}"), styles::text_secondary())),
        Line::from(Span::styled(
            " ▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁",
            styles::border_inactive(),
        )),
    ]
}

impl Widget for PaymentView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body = heading(TITLE, SUBTITLE, area, buf);
        let [form, summary] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(36)]).areas(body);

        let [tabs, fields] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(form);
        TabStrip::new(self.method).render(tabs, buf);

        let lines: Vec<Line> = match self.method {
            PaymentMethod::Card => CARD_FIELDS
                .iter()
                .chain(BILLING_FIELDS.iter())
                .copied()
                .flat_map(input_field)
                .collect(),
            PaymentMethod::PayPal => vec![
                Line::default(),
                Line::from(Span::styled(" PayPal", styles::accent_bold())),
                Line::from(Span::styled(
                    format!(" {PAYPAL_NOTICE}"),
                    styles::text_secondary(),
                )),
            ],
        };
        Paragraph::new(lines)
            .block(styles::glass_block(false))
            .wrap(Wrap { trim: false })
            .render(fields, buf);

        let mut order = vec![
            Line::from(Span::styled(format!(" {COURSE_TITLE}"), styles::title())),
            Line::from(Span::styled(
                format!(" {COURSE_INSTRUCTOR}"),
                styles::text_muted(),
            )),
            Line::default(),
        ];
        order.extend(INCLUDES.iter().copied().map(check));
        order.push(Line::default());
        for (label, amount) in SUMMARY.iter() {
            order.push(Line::from(vec![
                Span::styled(format!(" {label:<22}"), styles::text_secondary()),
                Span::styled(*amount, styles::text_primary()),
            ]));
        }
        order.push(Line::from(vec![
            Span::styled(format!(" {:<22}", "Total"), styles::title()),
            Span::styled(TOTAL, styles::accent_bold()),
        ]));
        order.push(Line::default());
        order.push(Line::from(Span::styled(
            format!(" {GUARANTEE}"),
            styles::status_green(),
        )));
        card(" Order Summary ", order, summary, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(method: PaymentMethod) -> TestTerminal {
        let mut term = TestTerminal::with_size(100, 30);
        term.render_widget(PaymentView::new(method), term.area());
        term
    }

    #[test]
    fn test_card_form_and_summary() {
        let term = render(PaymentMethod::Card);
        assert!(term.buffer_contains("Complete Your Purchase"));
        assert!(term.buffer_contains("Card Number"));
        assert!(term.buffer_contains("$149.99"));
        assert!(term.buffer_contains("-$60.00"));
        assert!(term.buffer_contains("$89.99"));
    }

    #[test]
    fn test_paypal_notice() {
        let term = render(PaymentMethod::PayPal);
        assert!(term.buffer_contains("redirected to PayPal"));
        assert!(!term.buffer_contains("Card Number"));
    }
}
