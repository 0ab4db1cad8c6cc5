//! Quiz page: question screen and results screen

use campus_core::quiz::{
    FAIL_HEADLINE, FAIL_MESSAGE, PASS_HEADLINE, PASS_MESSAGE, SECTION, TIME_LIMIT_LABEL, TITLE,
};
use campus_core::{QuizPhase, QuizState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

pub struct QuizView<'a> {
    quiz: &'a QuizState,
}

impl<'a> QuizView<'a> {
    pub fn new(quiz: &'a QuizState) -> Self {
        Self { quiz }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let [text, gauge] =
            Layout::vertical([Constraint::Length(2), Constraint::Length(1)]).areas(area);

        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!(" {TITLE}"), styles::title()),
                Span::styled(format!("   ⏱ {TIME_LIMIT_LABEL}"), styles::status_yellow()),
            ]),
            Line::from(Span::styled(format!(" {SECTION}"), styles::text_muted())),
        ])
        .render(text, buf);

        let label = match self.quiz.current_index() {
            Some(index) => format!(
                "Question {} of {}",
                index + 1,
                self.quiz.questions().len()
            ),
            None => "Completed".to_string(),
        };
        Gauge::default()
            .gauge_style(styles::accent().bg(palette::BORDER_DIM))
            .percent(self.quiz.progress_percent())
            .label(Span::styled(label, styles::title()))
            .render(gauge, buf);
    }

    fn render_question(&self, index: usize, area: Rect, buf: &mut Buffer) {
        let Some(question) = self.quiz.current_question() else {
            return;
        };
        let chosen = self.quiz.current_answer();

        let mut lines = vec![
            Line::from(Span::styled(format!(" {}", question.prompt), styles::title())),
            Line::default(),
        ];
        for (i, option) in question.options.iter().enumerate() {
            let selected = chosen == Some(i);
            let marker = if selected { "◉" } else { "○" };
            let style = if selected {
                styles::focused_selected()
            } else {
                styles::text_primary()
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", i + 1), styles::keybinding()),
                Span::styled(format!("{marker} {option}"), style),
            ]));
        }

        lines.push(Line::default());
        let mut nav = Vec::new();
        if index > 0 {
            nav.push(Span::styled(" ← ", styles::keybinding()));
            nav.push(Span::styled("Previous  ", styles::text_secondary()));
        }
        let next_label = if self.quiz.is_last_question() {
            "Submit"
        } else {
            "Next"
        };
        let next_style = if self.quiz.can_advance() {
            styles::accent_bold()
        } else {
            styles::text_muted()
        };
        nav.push(Span::styled(" → ", styles::keybinding()));
        nav.push(Span::styled(next_label, next_style));
        lines.push(Line::from(nav));

        Paragraph::new(lines)
            .block(styles::glass_block(true))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }

    fn render_results(&self, area: Rect, buf: &mut Buffer) {
        let quiz = self.quiz;
        let (headline, message, style) = if quiz.passed() {
            (PASS_HEADLINE, PASS_MESSAGE, styles::status_green())
        } else {
            (FAIL_HEADLINE, FAIL_MESSAGE, styles::status_yellow())
        };

        let mut lines = vec![
            Line::from(Span::styled(
                format!(" {headline}"),
                style.add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    format!(" {}/{} ", quiz.score(), quiz.questions().len()),
                    styles::title(),
                ),
                Span::styled(format!("({}%)", quiz.percentage()), styles::accent_bold()),
            ]),
            Line::from(Span::styled(format!(" {message}"), styles::text_secondary())),
            Line::default(),
            Line::from(Span::styled(" Review Your Answers", styles::accent_bold())),
        ];

        for (i, question) in quiz.questions().iter().enumerate() {
            let correct = quiz.is_correct(i);
            let (icon, icon_style) = if correct {
                ("✓", styles::status_green())
            } else {
                ("✗", styles::status_red())
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {icon} "), icon_style),
                Span::styled(format!("{}. {}", i + 1, question.prompt), styles::text_primary()),
            ]));

            let chosen = quiz
                .answers()
                .get(&i)
                .and_then(|a| question.options.get(*a))
                .copied()
                .unwrap_or("-");
            lines.push(Line::from(Span::styled(
                format!("     Your answer: {chosen}"),
                styles::text_secondary(),
            )));
            if !correct {
                if let Some(answer) = question.options.get(question.correct) {
                    lines.push(Line::from(Span::styled(
                        format!("     Correct answer: {answer}"),
                        styles::status_green(),
                    )));
                }
            }
            lines.push(Line::from(Span::styled(
                format!("     {}", question.explanation),
                styles::text_muted(),
            )));
        }

        Paragraph::new(lines)
            .block(styles::glass_block(false))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

impl Widget for QuizView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, body] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
        self.render_header(header, buf);

        match self.quiz.phase() {
            QuizPhase::InProgress { index } => self.render_question(index, body, buf),
            QuizPhase::Results => self.render_results(body, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use campus_core::QUESTIONS;

    fn render(quiz: &QuizState) -> TestTerminal {
        let mut term = TestTerminal::with_size(100, 40);
        term.render_widget(QuizView::new(quiz), term.area());
        term
    }

    fn finish(quiz: &mut QuizState, correct: usize) {
        for (i, question) in QUESTIONS.iter().enumerate() {
            let option = if i < correct {
                question.correct
            } else {
                (question.correct + 1) % question.options.len()
            };
            quiz.select(option);
            quiz.next();
        }
    }

    #[test]
    fn test_first_question() {
        let quiz = QuizState::default();
        let term = render(&quiz);
        assert!(term.buffer_contains("JavaScript Fundamentals Quiz"));
        assert!(term.buffer_contains("Question 1 of 5"));
        assert!(term.buffer_contains("let name = value;"));
        assert!(term.buffer_contains("Next"));
        assert!(!term.buffer_contains("Previous"));
    }

    #[test]
    fn test_last_question_offers_submit() {
        let mut quiz = QuizState::default();
        for question in QUESTIONS.iter().take(4) {
            quiz.select(question.correct);
            quiz.next();
        }
        let term = render(&quiz);
        assert!(term.buffer_contains("Question 5 of 5"));
        assert!(term.buffer_contains("Submit"));
        assert!(term.buffer_contains("Previous"));
    }

    #[test]
    fn test_passing_results() {
        let mut quiz = QuizState::default();
        finish(&mut quiz, 4);
        let term = render(&quiz);
        assert!(term.buffer_contains("Congratulations!"));
        assert!(term.buffer_contains("4/5"));
        assert!(term.buffer_contains("(80%)"));
    }

    #[test]
    fn test_failing_results_show_correct_answer() {
        let mut quiz = QuizState::default();
        finish(&mut quiz, 3);
        let term = render(&quiz);
        assert!(term.buffer_contains("Keep Learning!"));
        assert!(term.buffer_contains("(60%)"));
        assert!(term.buffer_contains("Correct answer"));
    }
}
