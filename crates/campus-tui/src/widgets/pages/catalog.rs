//! Course catalog: filter sidebar, search box and the filtered course table

use campus_app::pages::CatalogState;
use campus_core::catalog::{PAGINATION_LABELS, SUBTITLE, TITLE};
use campus_core::dashboard::group_thousands;
use campus_core::{Course, Language, Level};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Widget},
};

use super::heading;
use crate::theme::styles;

/// Sidebar width, including borders
const SIDEBAR_WIDTH: u16 = 22;

pub struct CatalogView<'a> {
    catalog: &'a CatalogState,
    search_focused: bool,
}

impl<'a> CatalogView<'a> {
    pub fn new(catalog: &'a CatalogState, search_focused: bool) -> Self {
        Self {
            catalog,
            search_focused,
        }
    }

    fn render_filters(&self, area: Rect, buf: &mut Buffer) {
        let filter = &self.catalog.filter;
        let checkbox = |on: bool| if on { "[x]" } else { "[ ]" };

        let mut lines = vec![Line::from(Span::styled(" Language", styles::title()))];
        for (i, language) in Language::ALL.iter().enumerate() {
            let on = filter.languages.contains(language);
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", i + 1), styles::keybinding()),
                Span::styled(checkbox(on), styles::accent()),
                Span::styled(format!(" {}", language.label()), styles::text_primary()),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(" Level", styles::title())));
        for level in Level::ALL {
            let key = level_key(level);
            let on = filter.levels.contains(&level);
            lines.push(Line::from(vec![
                Span::styled(format!(" {key} "), styles::keybinding()),
                Span::styled(checkbox(on), styles::accent()),
                Span::styled(format!(" {}", level.label()), styles::text_primary()),
            ]));
        }

        if !filter.is_clear() {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled(" x ", styles::keybinding()),
                Span::styled("Clear Filters", styles::text_secondary()),
            ]));
        }

        Paragraph::new(lines)
            .block(styles::card(" Filters "))
            .render(area, buf);
    }

    fn render_search(&self, area: Rect, buf: &mut Buffer) {
        let search = &self.catalog.filter.search;
        let mut spans = vec![Span::styled(" / ", styles::keybinding())];
        if search.is_empty() && !self.search_focused {
            spans.push(Span::styled(
                "Search courses or instructors...",
                styles::text_muted(),
            ));
        } else {
            spans.push(Span::styled(search.as_str(), styles::text_primary()));
        }
        if self.search_focused {
            spans.push(Span::styled("█", styles::accent()));
        }

        Paragraph::new(Line::from(spans))
            .block(styles::glass_block(self.search_focused))
            .render(area, buf);
    }

    fn render_courses(&self, visible: &[&Course], area: Rect, buf: &mut Buffer) {
        if visible.is_empty() {
            Paragraph::new(vec![
                Line::default(),
                Line::from(Span::styled(
                    " No courses match the current filters",
                    styles::text_secondary(),
                )),
                Line::from(vec![
                    Span::styled(" x ", styles::keybinding()),
                    Span::styled("Clear Filters", styles::text_muted()),
                ]),
            ])
            .render(area, buf);
            return;
        }

        let header = Row::new(["Course", "Level", "Rating", "Students", "Price"])
            .style(styles::text_muted().add_modifier(Modifier::BOLD));

        let rows = visible.iter().enumerate().map(|(i, course)| {
            let row = Row::new([
                Cell::from(course.title),
                Cell::from(course.level.label()),
                Cell::from(format!("★ {:.1}", course.rating)),
                Cell::from(group_thousands(u64::from(course.students))),
                Cell::from(format!("${:.2}", course.price)),
            ]);
            if i == self.catalog.selected {
                row.style(styles::focused_selected())
            } else {
                row.style(styles::text_primary())
            }
        });

        Table::new(
            rows,
            [
                Constraint::Min(20),
                Constraint::Length(12),
                Constraint::Length(7),
                Constraint::Length(9),
                Constraint::Length(8),
            ],
        )
        .header(header)
        .column_spacing(1)
        .render(area, buf);
    }
}

fn level_key(level: Level) -> char {
    match level {
        Level::Beginner => 'b',
        Level::Intermediate => 'i',
        Level::Advanced => 'a',
    }
}

impl Widget for CatalogView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body = heading(TITLE, SUBTITLE, area, buf);
        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(body);

        self.render_filters(sidebar, buf);

        let [search, count, table, pagination] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(main);

        self.render_search(search, buf);

        let visible = self.catalog.visible();
        Paragraph::new(Line::from(Span::styled(
            format!(" Showing {} courses", visible.len()),
            styles::text_secondary(),
        )))
        .render(count, buf);

        self.render_courses(&visible, table, buf);

        let mut pages = vec![Span::raw(" ")];
        for (i, label) in PAGINATION_LABELS.iter().enumerate() {
            let style = if i == 0 {
                styles::focused_selected()
            } else {
                styles::text_muted()
            };
            pages.push(Span::styled(format!(" {label} "), style));
            pages.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(pages)).render(pagination, buf);
    }
}
