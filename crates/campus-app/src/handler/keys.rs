//! Key event handlers for different UI modes

use campus_core::navigation::{FOOTER_LINKS, HOME_LINK, PROFILE_LINK};
use campus_core::{Language, Level};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::pages::PageView;
use crate::state::{AppState, UiMode};

#[cfg(feature = "dev-overlays")]
use crate::overlays::Panel;
#[cfg(feature = "dev-overlays")]
use campus_core::{Page, Role};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::Goto => handle_key_goto(state, key),
        UiMode::SearchInput => handle_key_search_input(state, key),
        UiMode::CodeInput => handle_key_code_input(key),
        #[cfg(feature = "dev-overlays")]
        UiMode::ScreenNavigator => handle_key_panel(state, Panel::ScreenNavigator, key),
        #[cfg(feature = "dev-overlays")]
        UiMode::RoleSwitcher => handle_key_panel(state, Panel::RoleSwitcher, key),
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Char('g') => return Some(Message::EnterGoto),

        #[cfg(feature = "dev-overlays")]
        InputKey::F(2) => return Some(Message::TogglePanel(Panel::ScreenNavigator)),
        #[cfg(feature = "dev-overlays")]
        InputKey::F(3) => return Some(Message::TogglePanel(Panel::RoleSwitcher)),

        _ => {}
    }

    // Designated page links take precedence over page-local keys
    if let InputKey::Char(c) = key {
        if let Some(link) = state.links().iter().find(|link| link.key == c) {
            return Some(Message::Navigate(link.target));
        }
    }

    match &state.view {
        PageView::Courses(_) => handle_key_catalog(key),
        PageView::Lesson(_) => handle_key_lesson(key),
        PageView::CodeEditor(_) => handle_key_exercise(key),
        PageView::Quiz(_) => handle_key_quiz(state, key),
        _ => handle_key_tabs(key),
    }
}

/// Handle the key after the "go to" prefix
fn handle_key_goto(state: &AppState, key: InputKey) -> Option<Message> {
    let chrome = state.chrome();
    let target = match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Char('h') => Some(HOME_LINK.target),
        InputKey::Char('c') => Some(chrome.cta.target),
        InputKey::Char('p') => Some(PROFILE_LINK.target),
        InputKey::Char('b') => Some(FOOTER_LINKS[0].target),
        InputKey::Char('l') => Some(FOOTER_LINKS[1].target),
        other => other
            .digit()
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(|i| chrome.nav_items.get(i))
            .map(|item| item.target),
    };

    Some(target.map_or(Message::CancelGoto, Message::Navigate))
}

/// Handle key events in catalog search input mode
fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    let query = || {
        state
            .view
            .catalog()
            .map(|c| c.filter.search.clone())
            .unwrap_or_default()
    };

    match key {
        // Keep the query, leave input mode
        InputKey::Esc | InputKey::Enter => Some(Message::EndSearch),

        InputKey::Backspace => {
            let mut text = query();
            text.pop();
            Some(Message::SearchInput { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),

        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char(c) => {
            let mut text = query();
            text.push(c);
            Some(Message::SearchInput { text })
        }

        _ => None,
    }
}

/// Handle key events while editing the exercise buffer
fn handle_key_code_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::StopCodeEdit),
        InputKey::Enter => Some(Message::CodeNewline),
        InputKey::Backspace => Some(Message::CodeBackspace),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char(c) => Some(Message::CodeInput(c)),
        _ => None,
    }
}

#[cfg(feature = "dev-overlays")]
fn handle_key_panel(state: &AppState, panel: Panel, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc => Some(Message::ClosePanel(panel)),
        InputKey::F(2) => Some(Message::TogglePanel(Panel::ScreenNavigator)),
        InputKey::F(3) => Some(Message::TogglePanel(Panel::RoleSwitcher)),
        InputKey::Up => Some(Message::PanelCursor { panel, down: false }),
        InputKey::Down => Some(Message::PanelCursor { panel, down: true }),
        InputKey::Enter => select_panel_row(panel, state.overlays.get(panel).cursor),
        other => {
            // 1-9 pick rows one to nine, 0 picks the tenth
            let row = match other.digit()? {
                0 => 9,
                d => d as usize - 1,
            };
            select_panel_row(panel, row)
        }
    }
}

#[cfg(feature = "dev-overlays")]
fn select_panel_row(panel: Panel, row: usize) -> Option<Message> {
    match panel {
        Panel::ScreenNavigator => Page::ALL.get(row).copied().map(Message::ScreenSelected),
        Panel::RoleSwitcher => Role::ALL.get(row).copied().map(Message::RoleSelected),
    }
}

fn handle_key_tabs(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab => Some(Message::NextTab),
        InputKey::BackTab => Some(Message::PrevTab),
        _ => None,
    }
}

fn handle_key_catalog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('/') => Some(Message::StartSearch),
        InputKey::Char('x') => Some(Message::ClearFilters),
        InputKey::Char('b') => Some(Message::ToggleLevel(Level::Beginner)),
        InputKey::Char('i') => Some(Message::ToggleLevel(Level::Intermediate)),
        InputKey::Char('a') => Some(Message::ToggleLevel(Level::Advanced)),
        InputKey::Up => Some(Message::CatalogSelectPrev),
        InputKey::Down => Some(Message::CatalogSelectNext),
        InputKey::Enter => Some(Message::OpenSelectedCourse),
        other => other
            .digit()
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(|i| Language::ALL.get(i))
            .map(|language| Message::ToggleLanguage(*language)),
    }
}

fn handle_key_lesson(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(' ') => Some(Message::TogglePlayback),
        InputKey::Up => Some(Message::LessonCursorUp),
        InputKey::Down => Some(Message::LessonCursorDown),
        InputKey::Enter => Some(Message::ToggleLessonSection),
        other => handle_key_tabs(other),
    }
}

fn handle_key_exercise(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('e') => Some(Message::StartCodeEdit),
        InputKey::Char('r') => Some(Message::RunCode),
        other => handle_key_tabs(other),
    }
}

fn handle_key_quiz(state: &AppState, key: InputKey) -> Option<Message> {
    let quiz = state.view.quiz()?;

    if quiz.is_finished() {
        return match key {
            InputKey::Char('r') => Some(Message::QuizRetake),
            _ => None,
        };
    }

    match key {
        InputKey::Right | InputKey::Char('n') if quiz.can_advance() => Some(Message::QuizNext),
        InputKey::Left | InputKey::Char('p') => Some(Message::QuizPrevious),
        other => {
            let option = (other.digit()? as usize).checked_sub(1)?;
            let question = quiz.current_question()?;
            (option < question.options.len()).then_some(Message::QuizSelect(option))
        }
    }
}
