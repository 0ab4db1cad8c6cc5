//! Lesson viewer: video placeholder, lesson tabs and the curriculum sidebar

use campus_app::pages::LessonState;
use campus_core::lesson::{
    ABOUT, CODE_EXAMPLE, CURRICULUM, DURATION, ELAPSED, LESSON_POSITION, LESSON_TITLE,
    NOTES_PLACEHOLDER, OBJECTIVES, RESOURCES,
};
use campus_core::LessonTab;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{check, progress_bar};
use crate::theme::{palette, styles};
use crate::widgets::TabStrip;

const SIDEBAR_WIDTH: u16 = 36;

pub struct LessonView<'a> {
    lesson: &'a LessonState,
}

impl<'a> LessonView<'a> {
    pub fn new(lesson: &'a LessonState) -> Self {
        Self { lesson }
    }

    fn render_video(&self, area: Rect, buf: &mut Buffer) {
        let (icon, label) = if self.lesson.playing {
            ("❚❚", "Playing")
        } else {
            ("▶", "Paused")
        };
        let percent = elapsed_percent();
        let bar_width = area.width.saturating_sub(20).min(40);

        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!(" {icon} "), styles::accent_bold()),
                Span::styled(label, styles::text_secondary()),
                Span::styled("  (Space)", styles::keybinding()),
            ]),
            Line::from(vec![
                Span::raw(" "),
                progress_bar(percent, bar_width),
                Span::styled(format!(" {ELAPSED} / {DURATION}"), styles::text_muted()),
            ]),
        ])
        .block(styles::card(" Video "))
        .style(Style::default().bg(palette::EDITOR_BG))
        .render(area, buf);
    }

    fn render_sidebar(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();
        for (i, section) in CURRICULUM.iter().enumerate() {
            let expanded = self.lesson.is_expanded(i);
            let marker = if expanded { "▾" } else { "▸" };
            let style = if i == self.lesson.cursor {
                styles::focused_selected()
            } else {
                styles::accent_bold()
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {marker} {}", section.title), style),
                Span::styled(
                    format!(" {}/{}", section.completed, section.total),
                    styles::text_muted(),
                ),
            ]));

            if !expanded {
                continue;
            }
            for item in section.lessons {
                let (icon, icon_style) = if item.current {
                    ("▶", styles::accent())
                } else if item.completed {
                    ("✓", styles::status_green())
                } else {
                    ("○", styles::text_muted())
                };
                let title_style = if item.current {
                    styles::accent_bold()
                } else {
                    styles::text_primary()
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("   {icon} "), icon_style),
                    Span::styled(format!("{}. {}", item.id, item.title), title_style),
                    Span::styled(format!(" {}", item.duration), styles::text_muted()),
                ]));
            }
        }

        Paragraph::new(lines)
            .block(styles::card(" Course Content "))
            .render(area, buf);
    }
}

fn elapsed_percent() -> u16 {
    let seconds = |clock: &str| -> u32 {
        clock
            .split(':')
            .filter_map(|part| part.parse::<u32>().ok())
            .fold(0, |acc, part| acc * 60 + part)
    };
    let total = seconds(DURATION).max(1);
    (seconds(ELAPSED) * 100 / total) as u16
}

fn tab_lines(tab: LessonTab) -> Vec<Line<'static>> {
    match tab {
        LessonTab::Description => {
            let mut lines = vec![
                Line::from(Span::styled(" About this lesson", styles::accent_bold())),
                Line::from(Span::styled(format!(" {ABOUT}"), styles::text_secondary())),
                Line::default(),
                Line::from(Span::styled(" Learning Objectives", styles::accent_bold())),
            ];
            lines.extend(OBJECTIVES.iter().copied().map(check));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("   {CODE_EXAMPLE}"),
                styles::status_yellow(),
            )));
            lines
        }
        LessonTab::Resources => RESOURCES
            .iter()
            .map(|resource| {
                Line::from(vec![
                    Span::styled(format!(" [{}] ", resource.kind), styles::accent()),
                    Span::styled(resource.name, styles::text_primary()),
                    Span::styled(format!("  {}", resource.size), styles::text_muted()),
                ])
            })
            .collect(),
        LessonTab::Notes => vec![Line::from(Span::styled(
            format!(" {NOTES_PLACEHOLDER}"),
            styles::text_muted(),
        ))],
    }
}

impl Widget for LessonView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [main, sidebar] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(SIDEBAR_WIDTH)])
                .areas(area);

        let [title, video, tabs, content] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(main);

        Paragraph::new(vec![
            Line::from(Span::styled(format!(" {LESSON_TITLE}"), styles::title())),
            Line::from(Span::styled(
                format!(" {LESSON_POSITION}"),
                styles::text_muted(),
            )),
        ])
        .render(title, buf);

        self.render_video(video, buf);
        TabStrip::new(self.lesson.tab).render(tabs, buf);
        Paragraph::new(tab_lines(self.lesson.tab))
            .wrap(Wrap { trim: false })
            .render(content, buf);

        self.render_sidebar(sidebar, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(lesson: &LessonState) -> TestTerminal {
        let mut term = TestTerminal::with_size(110, 30);
        term.render_widget(LessonView::new(lesson), term.area());
        term
    }

    #[test]
    fn test_elapsed_percent() {
        // 312s of 930s
        assert_eq!(elapsed_percent(), 33);
    }

    #[test]
    fn test_playback_indicator() {
        let mut lesson = LessonState::new();
        assert!(render(&lesson).buffer_contains("Paused"));

        lesson.toggle_playback();
        assert!(render(&lesson).buffer_contains("Playing"));
    }

    #[test]
    fn test_first_section_expanded_by_default() {
        let lesson = LessonState::new();
        let term = render(&lesson);
        assert!(term.buffer_contains("Welcome to the Course"));
        assert!(!term.buffer_contains("Closures Explained"));
    }

    #[test]
    fn test_expanding_second_section_lists_its_lessons() {
        let mut lesson = LessonState::new();
        lesson.cursor_down();
        lesson.toggle_section();
        assert!(render(&lesson).buffer_contains("Closures Explained"));
    }
}
