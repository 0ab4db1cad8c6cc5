//! Code exercise sandbox: task card, editor and output panes

use campus_app::pages::ExerciseState;
use campus_core::exercise::{
    passed_count, TestStatus, CONSOLE_PLACEHOLDER, DIFFICULTY, EXAMPLE, EXERCISE_TITLE,
    FILE_NAME, REQUIREMENTS, TASK, TEST_CASES,
};
use campus_core::OutputTab;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::bullet;
use crate::theme::{palette, styles};
use crate::widgets::TabStrip;

pub struct ExerciseView<'a> {
    exercise: &'a ExerciseState,
    editing: bool,
}

impl<'a> ExerciseView<'a> {
    pub fn new(exercise: &'a ExerciseState, editing: bool) -> Self {
        Self { exercise, editing }
    }

    fn render_task(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!(" {EXERCISE_TITLE} "), styles::title()),
                Span::styled(format!(" {DIFFICULTY} "), styles::status_green()),
            ]),
            Line::from(Span::styled(format!(" {TASK}"), styles::text_secondary())),
            Line::default(),
            Line::from(Span::styled(" Requirements", styles::accent_bold())),
        ];
        lines.extend(REQUIREMENTS.iter().copied().map(bullet));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(" Example", styles::accent_bold())));
        lines.push(Line::from(Span::styled(
            format!("   {EXAMPLE}"),
            styles::status_yellow(),
        )));

        Paragraph::new(lines)
            .block(styles::card(" Task "))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }

    /// Editor with a line-number gutter; the tail of the buffer stays visible
    fn render_editor(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.editing).title(format!(" {FILE_NAME} "));
        let inner = block.inner(area);
        block.render(area, buf);

        let code_lines: Vec<&str> = self.exercise.code.split('\n').collect();
        let gutter = code_lines.len().to_string().len();
        let visible = inner.height as usize;
        let skip = code_lines.len().saturating_sub(visible);
        let last = code_lines.len() - 1;

        let lines: Vec<Line> = code_lines
            .iter()
            .enumerate()
            .skip(skip)
            .map(|(i, text)| {
                let mut spans = vec![
                    Span::styled(
                        format!("{:>gutter$} ", i + 1),
                        Style::default().fg(palette::GUTTER),
                    ),
                    Span::styled(*text, code_style(text)),
                ];
                if self.editing && i == last {
                    spans.push(Span::styled("█", styles::accent()));
                }
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .style(Style::default().bg(palette::EDITOR_BG))
            .render(inner, buf);
    }

    fn render_output(&self, area: Rect, buf: &mut Buffer) {
        let [tabs, pane] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        TabStrip::new(self.exercise.tab).render(tabs, buf);

        let lines = match self.exercise.tab {
            OutputTab::Output if self.exercise.running => vec![Line::from(Span::styled(
                " Running...",
                styles::status_yellow(),
            ))],
            OutputTab::Output => self
                .exercise
                .output
                .lines()
                .map(|line| Line::from(Span::styled(format!(" {line}"), styles::text_primary())))
                .collect(),
            OutputTab::Tests => test_lines(),
            OutputTab::Console => vec![Line::from(Span::styled(
                format!(" {CONSOLE_PLACEHOLDER}"),
                styles::text_muted(),
            ))],
        };

        Paragraph::new(lines)
            .block(styles::glass_block(false))
            .render(pane, buf);
    }
}

fn code_style(text: &str) -> Style {
    if text.trim_start().starts_with("//") {
        styles::text_muted()
    } else {
        styles::text_primary()
    }
}

fn test_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        format!(" {}/{} tests passed", passed_count(), TEST_CASES.len()),
        styles::text_secondary(),
    ))];
    for case in TEST_CASES.iter() {
        let (icon, style) = match case.status {
            TestStatus::Passed => ("✓", styles::status_green()),
            TestStatus::Failed => ("✗", styles::status_red()),
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {icon} "), style),
            Span::styled(case.input, styles::text_primary()),
            Span::styled(format!(" → {}", case.expected), styles::text_muted()),
        ]));
    }
    lines
}

impl Widget for ExerciseView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [task, work] =
            Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
                .areas(area);
        self.render_task(task, buf);

        let [editor, output] =
            Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(work);
        self.render_editor(editor, buf);
        self.render_output(output, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::TabSet;
    use crate::test_utils::TestTerminal;

    fn render(exercise: &ExerciseState, editing: bool) -> TestTerminal {
        let mut term = TestTerminal::with_size(120, 32);
        term.render_widget(ExerciseView::new(exercise, editing), term.area());
        term
    }

    #[test]
    fn test_initial_output_prompt() {
        let exercise = ExerciseState::new();
        let term = render(&exercise, false);
        assert!(term.buffer_contains("main.js"));
        assert!(term.buffer_contains("Click \"Run Code\" to see the output..."));
    }

    #[test]
    fn test_running_then_finished_output() {
        let mut exercise = ExerciseState::new();
        exercise.start_run(1);
        assert!(render(&exercise, false).buffer_contains("Running..."));

        exercise.finish_run(1);
        let term = render(&exercise, false);
        assert!(term.buffer_contains("Hello, World!"));
        assert!(term.buffer_contains("Hello, UniCode!"));
    }

    #[test]
    fn test_tests_tab_counts_passes() {
        let mut exercise = ExerciseState::new();
        exercise.tab = exercise.tab.next();
        let term = render(&exercise, false);
        assert!(term.buffer_contains("3/4 tests passed"));
    }

    #[test]
    fn test_edited_text_is_shown() {
        let mut exercise = ExerciseState::new();
        for c in "let x = 1;".chars() {
            exercise.insert_char(c);
        }
        let term = render(&exercise, true);
        assert!(term.buffer_contains("let x = 1;"));
    }
}
