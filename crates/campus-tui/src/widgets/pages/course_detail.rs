//! Course detail page: hero, tab strip and one pane per tab

use campus_core::course::{
    total_lectures, BADGE, DESCRIPTION, INCLUDES, INSTRUCTOR, INSTRUCTOR_STATS, INSTRUCTOR_TITLE,
    LANGUAGE, LAST_UPDATED, LEARNING_OUTCOMES, PRICE, RATING, RATINGS_LABEL, REQUIREMENTS,
    REVIEWS, SECTIONS, STUDENTS_LABEL, SUBTITLE, TITLE,
};
use campus_core::CourseTab;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{bullet, check, stars};
use crate::theme::styles;
use crate::widgets::TabStrip;

pub struct CourseDetailView {
    tab: CourseTab,
}

impl CourseDetailView {
    pub fn new(tab: CourseTab) -> Self {
        Self { tab }
    }
}

impl Widget for CourseDetailView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [hero, tabs, content] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        render_hero(hero, buf);
        TabStrip::new(self.tab).render(tabs, buf);

        let [pane, sidebar] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(30)]).areas(content);

        let lines = match self.tab {
            CourseTab::Overview => overview(),
            CourseTab::Curriculum => curriculum(),
            CourseTab::Instructor => instructor(),
            CourseTab::Reviews => reviews(),
        };
        Paragraph::new(lines)
            .block(styles::glass_block(false))
            .wrap(Wrap { trim: false })
            .render(pane, buf);

        render_purchase_card(sidebar, buf);
    }
}

fn render_hero(area: Rect, buf: &mut Buffer) {
    Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!(" {BADGE} "), styles::focused_selected()),
            Span::raw(" "),
            Span::styled(TITLE, styles::title()),
        ]),
        Line::from(Span::styled(format!(" {SUBTITLE}"), styles::text_secondary())),
        Line::from(vec![
            Span::styled(format!(" {RATING} "), styles::status_yellow()),
            Span::styled(stars(RATING.round() as u8), styles::status_yellow()),
            Span::styled(format!(" {RATINGS_LABEL}  {STUDENTS_LABEL}"), styles::text_muted()),
        ]),
        Line::from(Span::styled(
            format!(" Created by {INSTRUCTOR} • {LAST_UPDATED} • {LANGUAGE}"),
            styles::text_muted(),
        )),
    ])
    .render(area, buf);
}

fn render_purchase_card(area: Rect, buf: &mut Buffer) {
    let mut lines = vec![
        Line::from(Span::styled(format!(" {PRICE}"), styles::accent_bold())),
        Line::from(vec![
            Span::styled(" e ", styles::keybinding()),
            Span::styled("Enroll Now", styles::text_primary()),
        ]),
        Line::default(),
        Line::from(Span::styled(" This course includes:", styles::text_secondary())),
    ];
    lines.extend(INCLUDES.iter().copied().map(bullet));
    Paragraph::new(lines)
        .block(styles::card(" Enroll "))
        .render(area, buf);
}

fn overview() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        " What you'll learn",
        styles::accent_bold(),
    ))];
    lines.extend(LEARNING_OUTCOMES.iter().copied().map(check));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(" Requirements", styles::accent_bold())));
    lines.extend(REQUIREMENTS.iter().copied().map(bullet));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(" Description", styles::accent_bold())));
    lines.push(Line::from(Span::styled(
        format!(" {DESCRIPTION}"),
        styles::text_secondary(),
    )));
    lines
}

fn curriculum() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        format!(" {} sections • {} lectures", SECTIONS.len(), total_lectures()),
        styles::text_muted(),
    ))];
    for section in SECTIONS.iter() {
        lines.push(Line::from(vec![
            Span::styled(format!(" ▾ {}", section.title), styles::accent_bold()),
            Span::styled(
                format!("  {} lectures • {}", section.lectures, section.duration),
                styles::text_muted(),
            ),
        ]));
        for lecture in section.items {
            let mut spans = vec![
                Span::styled(format!("   ▶ {}", lecture.title), styles::text_primary()),
                Span::styled(format!("  {}", lecture.duration), styles::text_muted()),
            ];
            if lecture.free {
                spans.push(Span::styled("  Free", styles::status_green()));
            }
            lines.push(Line::from(spans));
        }
    }
    lines
}

fn instructor() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(format!(" {INSTRUCTOR}"), styles::title())),
        Line::from(Span::styled(
            format!(" {INSTRUCTOR_TITLE}"),
            styles::text_secondary(),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!(" {}", INSTRUCTOR_STATS.join(" • ")),
            styles::accent(),
        )),
    ]
}

fn reviews() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for review in REVIEWS.iter() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", review.name), styles::title()),
            Span::styled(stars(review.rating), styles::status_yellow()),
            Span::styled(format!("  {}", review.date), styles::text_muted()),
        ]));
        lines.push(Line::from(Span::styled(
            format!(" {}", review.text),
            styles::text_secondary(),
        )));
        lines.push(Line::default());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(tab: CourseTab) -> TestTerminal {
        let mut term = TestTerminal::with_size(110, 30);
        term.render_widget(CourseDetailView::new(tab), term.area());
        term
    }

    #[test]
    fn test_overview_tab() {
        let term = render(CourseTab::Overview);
        assert!(term.buffer_contains("Complete JavaScript Masterclass 2026"));
        assert!(term.buffer_contains("What you'll learn"));
        assert!(term.buffer_contains("$89.99"));
    }

    #[test]
    fn test_curriculum_tab_marks_free_lectures() {
        let term = render(CourseTab::Curriculum);
        assert!(term.buffer_contains("4 sections • 45 lectures"));
        assert!(term.buffer_contains("Free"));
    }

    #[test]
    fn test_reviews_tab() {
        let term = render(CourseTab::Reviews);
        assert!(term.buffer_contains("John Smith"));
        assert!(term.buffer_contains("Michael Brown"));
    }
}
