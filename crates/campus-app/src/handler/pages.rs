//! Page-local message handlers
//!
//! Every handler is a no-op when its page is not mounted, so a message that
//! arrives after navigation never touches the new page.

use campus_core::{Language, Level, Page};
use tracing::{debug, trace};

use crate::message::Message;
use crate::state::{AppState, UiMode};

use super::{UpdateAction, UpdateResult};

// ─────────────────────────────────────────────────────────
// Course Catalog
// ─────────────────────────────────────────────────────────

pub fn handle_start_search(state: &mut AppState) -> UpdateResult {
    if state.view.catalog().is_some() {
        state.ui_mode = UiMode::SearchInput;
    }
    UpdateResult::none()
}

pub fn handle_search_input(state: &mut AppState, text: String) -> UpdateResult {
    if let Some(catalog) = state.view.catalog_mut() {
        catalog.set_search(text);
    }
    UpdateResult::none()
}

pub fn handle_end_search(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::SearchInput {
        state.ui_mode = UiMode::Normal;
    }
    UpdateResult::none()
}

pub fn handle_toggle_language(state: &mut AppState, language: Language) -> UpdateResult {
    if let Some(catalog) = state.view.catalog_mut() {
        catalog.toggle_language(language);
    }
    UpdateResult::none()
}

pub fn handle_toggle_level(state: &mut AppState, level: Level) -> UpdateResult {
    if let Some(catalog) = state.view.catalog_mut() {
        catalog.toggle_level(level);
    }
    UpdateResult::none()
}

pub fn handle_clear_filters(state: &mut AppState) -> UpdateResult {
    if let Some(catalog) = state.view.catalog_mut() {
        catalog.clear_filters();
    }
    UpdateResult::none()
}

pub fn handle_catalog_select(state: &mut AppState, down: bool) -> UpdateResult {
    if let Some(catalog) = state.view.catalog_mut() {
        if down {
            catalog.select_next();
        } else {
            catalog.select_previous();
        }
    }
    UpdateResult::none()
}

/// All catalog cards lead to the same detail page
pub fn handle_open_selected_course(state: &mut AppState) -> UpdateResult {
    match state.view.catalog().and_then(|c| c.selected_course()) {
        Some(course) => {
            debug!("Opening course: {}", course.title);
            UpdateResult::message(Message::Navigate(Page::CourseDetail))
        }
        None => UpdateResult::none(),
    }
}

// ─────────────────────────────────────────────────────────
// Lesson Viewer
// ─────────────────────────────────────────────────────────

pub fn handle_toggle_playback(state: &mut AppState) -> UpdateResult {
    if let Some(lesson) = state.view.lesson_mut() {
        lesson.toggle_playback();
    }
    UpdateResult::none()
}

pub fn handle_lesson_cursor(state: &mut AppState, down: bool) -> UpdateResult {
    if let Some(lesson) = state.view.lesson_mut() {
        if down {
            lesson.cursor_down();
        } else {
            lesson.cursor_up();
        }
    }
    UpdateResult::none()
}

pub fn handle_toggle_lesson_section(state: &mut AppState) -> UpdateResult {
    if let Some(lesson) = state.view.lesson_mut() {
        lesson.toggle_section();
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Code Exercise
// ─────────────────────────────────────────────────────────

pub fn handle_start_code_edit(state: &mut AppState) -> UpdateResult {
    if state.view.exercise().is_some() {
        state.ui_mode = UiMode::CodeInput;
    }
    UpdateResult::none()
}

pub fn handle_stop_code_edit(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::CodeInput {
        state.ui_mode = UiMode::Normal;
    }
    UpdateResult::none()
}

pub fn handle_code_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(exercise) = state.view.exercise_mut() {
        exercise.insert_char(c);
    }
    UpdateResult::none()
}

pub fn handle_code_newline(state: &mut AppState) -> UpdateResult {
    if let Some(exercise) = state.view.exercise_mut() {
        exercise.insert_newline();
    }
    UpdateResult::none()
}

pub fn handle_code_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(exercise) = state.view.exercise_mut() {
        exercise.backspace();
    }
    UpdateResult::none()
}

/// Start a simulated run; a run already in flight is superseded
pub fn handle_run_code(state: &mut AppState) -> UpdateResult {
    let delay = state.settings.exercise.run_delay();
    let generation = state.run_generation + 1;
    match state.view.exercise_mut() {
        Some(exercise) => {
            exercise.start_run(generation);
            state.run_generation = generation;
            debug!("Code run {} started ({:?})", generation, delay);
            UpdateResult::action(UpdateAction::StartCodeRun { generation, delay })
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_code_run_finished(state: &mut AppState, generation: u64) -> UpdateResult {
    match state.view.exercise_mut().map(|e| e.finish_run(generation)) {
        Some(true) => {
            debug!("Code run {} finished", generation);
        }
        _ => {
            debug!("Ignoring stale code run completion (generation {})", generation);
        }
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Quiz
// ─────────────────────────────────────────────────────────

pub fn handle_quiz_select(state: &mut AppState, option: usize) -> UpdateResult {
    if let Some(quiz) = state.view.quiz_mut() {
        if !quiz.select(option) {
            trace!("Quiz option {} rejected", option);
        }
    }
    UpdateResult::none()
}

pub fn handle_quiz_next(state: &mut AppState) -> UpdateResult {
    if let Some(quiz) = state.view.quiz_mut() {
        if quiz.next() && quiz.is_finished() {
            debug!(
                "Quiz submitted: {}/{} ({}%)",
                quiz.score(),
                quiz.questions().len(),
                quiz.percentage()
            );
        }
    }
    UpdateResult::none()
}

pub fn handle_quiz_previous(state: &mut AppState) -> UpdateResult {
    if let Some(quiz) = state.view.quiz_mut() {
        quiz.previous();
    }
    UpdateResult::none()
}

pub fn handle_quiz_retake(state: &mut AppState) -> UpdateResult {
    if let Some(quiz) = state.view.quiz_mut() {
        if quiz.retake() {
            debug!("Quiz retaken");
        }
    }
    UpdateResult::none()
}
