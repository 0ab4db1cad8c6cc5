//! Page views
//!
//! One widget per page. Each reads its slice of page-local state and the
//! static literals in `campus_core`; none of them mutate anything.

mod catalog;
mod course_detail;
mod dashboard;
mod exercise;
mod home;
mod lesson;
mod payment;
mod profile;
mod quiz;
mod security;

pub use catalog::CatalogView;
pub use course_detail::CourseDetailView;
pub use dashboard::{AdminDashboardView, LecturerDashboardView, StudentDashboardView};
pub use exercise::ExerciseView;
pub use home::HomeView;
pub use lesson::LessonView;
pub use payment::PaymentView;
pub use profile::ProfileView;
pub use quiz::QuizView;
pub use security::SecurityView;

use campus_app::pages::PageView;
use campus_app::state::UiMode;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Render the mounted page into the body area
pub fn render_page(view: &PageView, ui_mode: UiMode, area: Rect, buf: &mut Buffer) {
    match view {
        PageView::Home => HomeView.render(area, buf),
        PageView::Courses(catalog) => {
            CatalogView::new(catalog, ui_mode == UiMode::SearchInput).render(area, buf)
        }
        PageView::CourseDetail { tab } => CourseDetailView::new(*tab).render(area, buf),
        PageView::Lesson(lesson) => LessonView::new(lesson).render(area, buf),
        PageView::CodeEditor(exercise) => {
            ExerciseView::new(exercise, ui_mode == UiMode::CodeInput).render(area, buf)
        }
        PageView::Quiz(quiz) => QuizView::new(quiz).render(area, buf),
        PageView::StudentDashboard => StudentDashboardView.render(area, buf),
        PageView::LecturerDashboard { tab } => LecturerDashboardView::new(*tab).render(area, buf),
        PageView::AdminDashboard { tab } => AdminDashboardView::new(*tab).render(area, buf),
        PageView::Payment { method } => PaymentView::new(*method).render(area, buf),
        PageView::Profile { tab } => ProfileView::new(*tab).render(area, buf),
        PageView::Security => SecurityView.render(area, buf),
    }
}

/// Render a two-line page heading; returns the area below it
pub(crate) fn heading(title: &str, subtitle: &str, area: Rect, buf: &mut Buffer) -> Rect {
    let [head, rest] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
    Paragraph::new(vec![
        Line::from(Span::styled(format!(" {title}"), styles::title())),
        Line::from(Span::styled(format!(" {subtitle}"), styles::text_secondary())),
    ])
    .render(head, buf);
    rest
}

/// Render lines inside a titled card
pub(crate) fn card(title: &str, lines: Vec<Line>, area: Rect, buf: &mut Buffer) {
    Paragraph::new(lines)
        .block(styles::card(title))
        .style(Style::default().bg(palette::CARD_BG))
        .render(area, buf);
}

pub(crate) fn bullet(text: &str) -> Line<'_> {
    Line::from(vec![
        Span::styled(" • ", styles::accent()),
        Span::styled(text, styles::text_primary()),
    ])
}

pub(crate) fn check(text: &str) -> Line<'_> {
    Line::from(vec![
        Span::styled(" ✓ ", styles::status_green()),
        Span::styled(text, styles::text_primary()),
    ])
}

/// `label: value` row
pub(crate) fn field<'a>(label: &'a str, value: impl Into<String>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!(" {label}: "), styles::text_muted()),
        Span::styled(value.into(), styles::text_primary()),
    ])
}

/// Big value over a small label, joined on one line
pub(crate) fn stat_row(stats: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (value, label) in stats {
        spans.push(Span::styled(format!(" {value} "), styles::accent_bold()));
        spans.push(Span::styled(format!("{label}  "), styles::text_secondary()));
    }
    Line::from(spans)
}

/// Text progress bar, `width` cells wide
pub(crate) fn progress_bar(percent: u16, width: u16) -> Span<'static> {
    let percent = percent.min(100);
    let filled = (u32::from(width) * u32::from(percent) / 100) as usize;
    let empty = width as usize - filled;
    Span::styled(
        format!("{}{}", "█".repeat(filled), "░".repeat(empty)),
        styles::accent(),
    )
}

/// Five-star rating rendered as filled and empty stars
pub(crate) fn stars(rating: u8) -> String {
    let rating = rating.min(5) as usize;
    format!("{}{}", "★".repeat(rating), "☆".repeat(5 - rating))
}
