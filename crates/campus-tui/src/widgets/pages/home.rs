//! Landing page

use campus_core::home::{
    featured_courses, ANNOUNCEMENT, BANNER_STATS, CLOSING_TEXT, CLOSING_TITLE, HEADLINE,
    HERO_STATS, LANGUAGES, LEARNING_PATHS, TAGLINE,
};
use campus_core::dashboard::group_thousands;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{card, stat_row, stars};
use crate::theme::styles;

pub struct HomeView;

impl Widget for HomeView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [hero, featured, lower, banner] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .areas(area);

        render_hero(hero, buf);
        render_featured(featured, buf);

        let [languages, paths] =
            Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
                .areas(lower);
        render_languages(languages, buf);
        render_paths(paths, buf);

        let mut banner_lines = vec![stat_row(&BANNER_STATS)];
        banner_lines.push(Line::from(vec![
            Span::styled(format!(" {CLOSING_TITLE}: "), styles::accent_bold()),
            Span::styled(CLOSING_TEXT, styles::text_secondary()),
        ]));
        Paragraph::new(banner_lines)
            .block(styles::glass_block(false))
            .render(banner, buf);
    }
}

fn render_hero(area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(Span::styled(format!(" ✦ {ANNOUNCEMENT}"), styles::status_yellow())),
        Line::from(Span::styled(format!(" {HEADLINE}"), styles::title())),
        Line::from(Span::styled(format!(" {TAGLINE}"), styles::text_secondary())),
        Line::default(),
        stat_row(&HERO_STATS),
    ];
    Paragraph::new(lines).render(area, buf);
}

fn render_featured(area: Rect, buf: &mut Buffer) {
    let lines = featured_courses()
        .iter()
        .map(|course| {
            Line::from(vec![
                Span::styled(format!(" {} ", course.title), styles::text_primary()),
                Span::styled(format!("{} ", course.instructor), styles::text_muted()),
                Span::styled(
                    format!("{} {:.1} ", stars(course.rating.round() as u8), course.rating),
                    styles::status_yellow(),
                ),
                Span::styled(
                    format!("{} students ", group_thousands(u64::from(course.students))),
                    styles::text_secondary(),
                ),
                Span::styled(format!("${:.2}", course.price), styles::accent_bold()),
            ])
        })
        .collect();
    card(" Featured Courses ", lines, area, buf);
}

fn render_languages(area: Rect, buf: &mut Buffer) {
    let lines = LANGUAGES
        .iter()
        .map(|tile| {
            Line::from(vec![
                Span::styled(format!(" {:<12}", tile.name), styles::text_primary()),
                Span::styled(format!("{} courses", tile.courses), styles::text_muted()),
            ])
        })
        .collect();
    card(" Popular Languages ", lines, area, buf);
}

fn render_paths(area: Rect, buf: &mut Buffer) {
    let mut lines = Vec::new();
    for path in LEARNING_PATHS.iter() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", path.title), styles::accent_bold()),
            Span::styled(
                format!("{} courses • {}", path.courses, path.duration),
                styles::text_muted(),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {} ({})", path.description, path.skills.join(", ")),
            styles::text_secondary(),
        )));
    }
    Paragraph::new(lines)
        .block(styles::card(" Learning Paths "))
        .wrap(Wrap { trim: false })
        .render(area, buf);
}
