//! Action hint line
//!
//! Shows the mounted page's designated links and local keys, or the keys of
//! the active input mode.

use campus_app::pages::PageView;
use campus_app::state::{AppState, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// (key, label) pairs
type Hints = Vec<(String, &'static str)>;

pub struct HintBar<'a> {
    state: &'a AppState,
}

impl<'a> HintBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Hints {
        let key = |k: &str, label: &'static str| (k.to_string(), label);

        match self.state.ui_mode {
            UiMode::Goto => vec![
                key("1-5", "nav"),
                key("h", "home"),
                key("c", "action"),
                key("p", "profile"),
                key("b", "browse"),
                key("l", "paths"),
                key("Esc", "cancel"),
            ],
            UiMode::SearchInput => vec![
                key("type", "search"),
                key("Ctrl+U", "clear"),
                key("Enter/Esc", "done"),
            ],
            UiMode::CodeInput => vec![
                key("type", "edit"),
                key("Enter", "newline"),
                key("Esc", "stop editing"),
            ],
            #[cfg(feature = "dev-overlays")]
            UiMode::ScreenNavigator | UiMode::RoleSwitcher => vec![
                key("↑↓", "move"),
                key("Enter", "select"),
                key("Esc", "close"),
            ],
            UiMode::Normal => {
                let mut hints: Hints = self
                    .state
                    .links()
                    .iter()
                    .map(|link| (link.key.to_string(), link.label))
                    .collect();
                hints.extend(local_hints(&self.state.view));
                hints.push(key("g", "go to"));
                #[cfg(feature = "dev-overlays")]
                {
                    hints.push(key("F2", "screens"));
                    hints.push(key("F3", "roles"));
                }
                hints.push(key("q", "quit"));
                hints
            }
        }
    }
}

/// Page-local keys that don't navigate
fn local_hints(view: &PageView) -> Hints {
    let key = |k: &str, label: &'static str| (k.to_string(), label);

    match view {
        PageView::Courses(_) => vec![
            key("/", "search"),
            key("1-6", "language"),
            key("b/i/a", "level"),
            key("x", "clear"),
            key("Enter", "open"),
        ],
        PageView::Lesson(lesson) => vec![
            key("Space", if lesson.playing { "pause" } else { "play" }),
            key("Enter", "expand"),
            key("Tab", "tabs"),
        ],
        PageView::CodeEditor(_) => vec![key("e", "edit"), key("r", "run"), key("Tab", "output")],
        PageView::Quiz(quiz) if quiz.is_finished() => vec![key("r", "retake")],
        PageView::Quiz(quiz) => {
            let next = if quiz.is_last_question() {
                "submit"
            } else {
                "next"
            };
            vec![key("1-4", "answer"), key("→", next), key("←", "previous")]
        }
        PageView::Payment { .. } => vec![key("Tab", "payment method")],
        PageView::CourseDetail { .. }
        | PageView::LecturerDashboard { .. }
        | PageView::AdminDashboard { .. }
        | PageView::Profile { .. } => vec![key("Tab", "tabs")],
        PageView::Home | PageView::StudentDashboard | PageView::Security => Vec::new(),
    }
}

impl Widget for HintBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (key, label) in self.hints() {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled("] ", styles::text_muted()));
            spans.push(Span::styled(label, styles::text_secondary()));
            spans.push(Span::raw("  "));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use campus_app::message::Message;
    use campus_core::Page;

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(160, 1);
        term.render_widget(HintBar::new(state), term.area());
        term
    }

    #[test]
    fn test_home_hints_show_page_links() {
        let state = AppState::new();
        let term = render(&state);
        assert!(term.buffer_contains("[c] Browse Courses"));
        assert!(term.buffer_contains("[f] Featured Course"));
        assert!(term.buffer_contains("[q] quit"));
    }

    #[test]
    fn test_goto_mode_hints() {
        let mut state = AppState::new();
        campus_app::handler::update(&mut state, Message::EnterGoto);
        let term = render(&state);
        assert!(term.buffer_contains("[Esc] cancel"));
        assert!(!term.buffer_contains("Browse Courses"));
    }

    #[test]
    fn test_quiz_hint_says_submit_on_last_question() {
        let mut state = AppState::new();
        campus_app::handler::update(&mut state, Message::Navigate(Page::Quiz));
        if let Some(quiz) = state.view.quiz_mut() {
            for _ in 0..4 {
                quiz.select(0);
                quiz.next();
            }
        }
        let term = render(&state);
        assert!(term.buffer_contains("submit"));
    }
}
