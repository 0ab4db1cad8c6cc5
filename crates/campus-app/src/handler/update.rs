//! Main update function - handles state transitions (TEA pattern)
//!
//! Page-local transitions live in `pages`; this module owns the root
//! transitions, the chrome prefix and the overlay panels.

use campus_core::Page;
use tracing::{debug, info};

use crate::message::Message;
use crate::state::{AppPhase, AppState, UiMode};

use super::{keys::handle_key, pages, UpdateAction, UpdateResult};

#[cfg(feature = "dev-overlays")]
use crate::overlays::Panel;

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Root Transitions
        // ─────────────────────────────────────────────────────────
        Message::Navigate(page) => handle_navigate(state, page),

        Message::SetRole(role) => {
            let from = state.role;
            if state.set_role(role) {
                info!("Role changed: {} -> {}", from, role);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Chrome
        // ─────────────────────────────────────────────────────────
        Message::EnterGoto => {
            if state.ui_mode == UiMode::Normal {
                state.ui_mode = UiMode::Goto;
            }
            UpdateResult::none()
        }

        Message::CancelGoto => {
            if state.ui_mode == UiMode::Goto {
                state.ui_mode = UiMode::Normal;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dev-aid Overlays
        // ─────────────────────────────────────────────────────────
        #[cfg(feature = "dev-overlays")]
        Message::TogglePanel(panel) => {
            state.toggle_panel(panel);
            UpdateResult::none()
        }

        #[cfg(feature = "dev-overlays")]
        Message::ClosePanel(panel) => {
            state.close_panel(panel);
            UpdateResult::none()
        }

        #[cfg(feature = "dev-overlays")]
        Message::PanelCursor { panel, down } => {
            state.overlays.move_cursor(panel, down);
            UpdateResult::none()
        }

        #[cfg(feature = "dev-overlays")]
        Message::ScreenSelected(page) => {
            state.close_panel(Panel::ScreenNavigator);
            UpdateResult::message(Message::Navigate(page))
        }

        #[cfg(feature = "dev-overlays")]
        Message::RoleSelected(role) => {
            state.close_panel(Panel::RoleSwitcher);
            UpdateResult::message(Message::SetRole(role))
        }

        // ─────────────────────────────────────────────────────────
        // Tabs
        // ─────────────────────────────────────────────────────────
        Message::NextTab => {
            state.view.cycle_tab(true);
            UpdateResult::none()
        }

        Message::PrevTab => {
            state.view.cycle_tab(false);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Course Catalog
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => pages::handle_start_search(state),
        Message::SearchInput { text } => pages::handle_search_input(state, text),
        Message::EndSearch => pages::handle_end_search(state),
        Message::ToggleLanguage(language) => pages::handle_toggle_language(state, language),
        Message::ToggleLevel(level) => pages::handle_toggle_level(state, level),
        Message::ClearFilters => pages::handle_clear_filters(state),
        Message::CatalogSelectNext => pages::handle_catalog_select(state, true),
        Message::CatalogSelectPrev => pages::handle_catalog_select(state, false),
        Message::OpenSelectedCourse => pages::handle_open_selected_course(state),

        // ─────────────────────────────────────────────────────────
        // Lesson Viewer
        // ─────────────────────────────────────────────────────────
        Message::TogglePlayback => pages::handle_toggle_playback(state),
        Message::LessonCursorUp => pages::handle_lesson_cursor(state, false),
        Message::LessonCursorDown => pages::handle_lesson_cursor(state, true),
        Message::ToggleLessonSection => pages::handle_toggle_lesson_section(state),

        // ─────────────────────────────────────────────────────────
        // Code Exercise
        // ─────────────────────────────────────────────────────────
        Message::StartCodeEdit => pages::handle_start_code_edit(state),
        Message::StopCodeEdit => pages::handle_stop_code_edit(state),
        Message::CodeInput(c) => pages::handle_code_input(state, c),
        Message::CodeNewline => pages::handle_code_newline(state),
        Message::CodeBackspace => pages::handle_code_backspace(state),
        Message::RunCode => pages::handle_run_code(state),
        Message::CodeRunFinished { generation } => {
            pages::handle_code_run_finished(state, generation)
        }

        // ─────────────────────────────────────────────────────────
        // Quiz
        // ─────────────────────────────────────────────────────────
        Message::QuizSelect(option) => pages::handle_quiz_select(state, option),
        Message::QuizNext => pages::handle_quiz_next(state),
        Message::QuizPrevious => pages::handle_quiz_previous(state),
        Message::QuizRetake => pages::handle_quiz_retake(state),
    }
}

/// Show a page; leaving the exercise aborts its pending run
fn handle_navigate(state: &mut AppState, page: Page) -> UpdateResult {
    let from = state.page;
    let leaving_exercise = from == Page::CodeEditor && page != Page::CodeEditor;

    if state.navigate(page) {
        debug!("Navigated: {} -> {}", from, page);
    }

    if leaving_exercise {
        UpdateResult::action(UpdateAction::CancelCodeRun)
    } else {
        UpdateResult::none()
    }
}
