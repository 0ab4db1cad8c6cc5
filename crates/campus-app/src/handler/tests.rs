//! Tests for handler module

use std::time::Duration;

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::pages::PageView;
use crate::state::{AppPhase, AppState, UiMode};
use campus_core::{Language, Page, Role, QUESTIONS};

/// Run a message through update, following up chained messages
fn drive(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn press(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    drive(state, Message::Key(key))
}

fn type_chars(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, InputKey::Char(c));
    }
}

fn state_on(page: Page, role: Role) -> AppState {
    let mut state = AppState::new();
    drive(&mut state, Message::SetRole(role));
    drive(&mut state, Message::Navigate(page));
    state
}

// ─────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_starts_on_home_as_student() {
    let state = AppState::new();
    assert_eq!(state.page, Page::Home);
    assert_eq!(state.role, Role::Student);
    assert_eq!(state.view, PageView::Home);
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_produces_quit_message() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
}

#[test]
fn test_ctrl_c_produces_quit_message() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
}

// ─────────────────────────────────────────────────────────
// Root transitions
// ─────────────────────────────────────────────────────────

#[test]
fn test_navigate_mounts_requested_page_for_every_role() {
    for role in Role::ALL {
        for page in Page::ALL {
            let mut state = state_on(Page::Home, role);
            drive(&mut state, Message::Navigate(page));
            assert_eq!(state.page, page);
            assert_eq!(state.view.page(), page);
            assert_eq!(state.role, role);
        }
    }
}

#[test]
fn test_set_role_keeps_current_page() {
    for page in Page::ALL {
        for role in Role::ALL {
            let mut state = state_on(page, Role::Student);
            drive(&mut state, Message::SetRole(role));
            assert_eq!(state.page, page);
            assert_eq!(state.role, role);
        }
    }
}

#[test]
fn test_set_role_swaps_mounted_dashboard() {
    let mut state = state_on(Page::Dashboard, Role::Student);
    assert_eq!(state.view, PageView::StudentDashboard);

    drive(&mut state, Message::SetRole(Role::Admin));
    assert_eq!(state.view.dashboard_role(), Some(Role::Admin));

    drive(&mut state, Message::SetRole(Role::Lecturer));
    assert_eq!(state.view.dashboard_role(), Some(Role::Lecturer));
}

#[test]
fn test_navigate_to_same_page_keeps_local_state() {
    let mut state = state_on(Page::Courses, Role::Student);
    drive(&mut state, Message::ToggleLanguage(Language::Python));

    drive(&mut state, Message::Navigate(Page::Courses));

    let catalog = state.view.catalog().map(|c| c.filter.clone());
    assert!(catalog.is_some_and(|f| f.languages.contains(&Language::Python)));
}

#[test]
fn test_navigate_away_discards_local_state() {
    let mut state = state_on(Page::Courses, Role::Student);
    drive(&mut state, Message::ToggleLanguage(Language::Python));

    drive(&mut state, Message::Navigate(Page::Home));
    drive(&mut state, Message::Navigate(Page::Courses));

    assert!(state.view.catalog().is_some_and(|c| c.filter.is_clear()));
}

// ─────────────────────────────────────────────────────────
// Chrome
// ─────────────────────────────────────────────────────────

#[test]
fn test_goto_digit_follows_role_nav_item() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('g'));
    assert_eq!(state.ui_mode, UiMode::Goto);

    press(&mut state, InputKey::Char('3'));
    assert_eq!(state.page, Page::CodeEditor);
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_goto_cta_depends_on_role() {
    let mut state = state_on(Page::Home, Role::Admin);
    press(&mut state, InputKey::Char('g'));
    press(&mut state, InputKey::Char('c'));
    assert_eq!(state.page, Page::Security);

    let mut state = state_on(Page::Home, Role::Lecturer);
    press(&mut state, InputKey::Char('g'));
    press(&mut state, InputKey::Char('c'));
    assert_eq!(state.page, Page::Courses);
}

#[test]
fn test_goto_logo_profile_and_footer_links() {
    let cases = [
        ('h', Page::Home),
        ('p', Page::Profile),
        ('b', Page::Courses),
        ('l', Page::Dashboard),
    ];
    for (key, expected) in cases {
        let mut state = state_on(Page::Security, Role::Student);
        press(&mut state, InputKey::Char('g'));
        press(&mut state, InputKey::Char(key));
        assert_eq!(state.page, expected, "goto '{key}'");
    }
}

#[test]
fn test_goto_unknown_key_cancels() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('g'));
    // Student has four nav items
    press(&mut state, InputKey::Char('5'));
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.page, Page::Home);
}

#[test]
fn test_page_links_never_shadow_global_keys() {
    for role in Role::ALL {
        for page in Page::ALL {
            for link in campus_core::page_links(page, role) {
                assert!(
                    link.key != 'q' && link.key != 'g',
                    "{page} link '{}' shadows a global key",
                    link.key
                );
            }
        }
    }
}

#[test]
fn test_page_link_keys_navigate() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('f'));
    assert_eq!(state.page, Page::CourseDetail);

    press(&mut state, InputKey::Char('e'));
    assert_eq!(state.page, Page::Payment);

    press(&mut state, InputKey::Char('b'));
    assert_eq!(state.page, Page::CourseDetail);
}

#[test]
fn test_dashboard_links_follow_role() {
    let mut state = state_on(Page::Dashboard, Role::Admin);
    press(&mut state, InputKey::Char('s'));
    assert_eq!(state.page, Page::Security);

    let mut state = state_on(Page::Dashboard, Role::Student);
    press(&mut state, InputKey::Char('l'));
    assert_eq!(state.page, Page::Lesson);
}

#[test]
fn test_tab_cycles_course_detail_tabs() {
    let mut state = state_on(Page::CourseDetail, Role::Student);
    press(&mut state, InputKey::Tab);
    press(&mut state, InputKey::Tab);
    assert_eq!(
        state.view,
        PageView::CourseDetail {
            tab: campus_core::CourseTab::Instructor
        }
    );

    press(&mut state, InputKey::BackTab);
    press(&mut state, InputKey::BackTab);
    press(&mut state, InputKey::BackTab);
    assert_eq!(
        state.view,
        PageView::CourseDetail {
            tab: campus_core::CourseTab::Reviews
        }
    );
}

// ─────────────────────────────────────────────────────────
// Course catalog
// ─────────────────────────────────────────────────────────

#[test]
fn test_search_input_filters_and_captures_keys() {
    let mut state = state_on(Page::Courses, Role::Student);
    press(&mut state, InputKey::Char('/'));
    assert_eq!(state.ui_mode, UiMode::SearchInput);

    // 'q' is text here, not quit
    press(&mut state, InputKey::Char('q'));
    assert!(!state.should_quit());
    press(&mut state, InputKey::Backspace);

    type_chars(&mut state, "python");
    press(&mut state, InputKey::Enter);
    assert_eq!(state.ui_mode, UiMode::Normal);

    let catalog = state.view.catalog();
    assert_eq!(catalog.map(|c| c.filter.search.as_str()), Some("python"));
    let titles: Vec<_> = catalog
        .map(|c| c.visible().iter().map(|course| course.title).collect())
        .unwrap_or_default();
    assert_eq!(titles, ["Python for Data Science", "Advanced Python: Deep Dive"]);
}

#[test]
fn test_search_backspace_and_clear() {
    let mut state = state_on(Page::Courses, Role::Student);
    press(&mut state, InputKey::Char('/'));
    type_chars(&mut state, "rea");
    press(&mut state, InputKey::Backspace);
    assert_eq!(
        state.view.catalog().map(|c| c.filter.search.clone()),
        Some("re".to_string())
    );

    press(&mut state, InputKey::CharCtrl('u'));
    assert_eq!(
        state.view.catalog().map(|c| c.filter.search.clone()),
        Some(String::new())
    );
}

#[test]
fn test_catalog_filter_keys() {
    let mut state = state_on(Page::Courses, Role::Student);
    press(&mut state, InputKey::Char('1'));
    press(&mut state, InputKey::Char('b'));

    let visible = state.view.catalog().map(|c| c.visible().len());
    assert_eq!(visible, Some(1));

    press(&mut state, InputKey::Char('x'));
    assert!(state.view.catalog().is_some_and(|c| c.filter.is_clear()));
}

#[test]
fn test_enter_opens_selected_course() {
    let mut state = state_on(Page::Courses, Role::Student);
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);
    assert_eq!(state.page, Page::CourseDetail);
}

#[test]
fn test_enter_with_no_visible_courses_stays_put() {
    let mut state = state_on(Page::Courses, Role::Student);
    drive(
        &mut state,
        Message::SearchInput {
            text: "cobol".to_string(),
        },
    );
    press(&mut state, InputKey::Enter);
    assert_eq!(state.page, Page::Courses);
}

// ─────────────────────────────────────────────────────────
// Lesson viewer
// ─────────────────────────────────────────────────────────

#[test]
fn test_lesson_playback_and_sections() {
    let mut state = state_on(Page::Lesson, Role::Student);
    press(&mut state, InputKey::Char(' '));
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);

    match &state.view {
        PageView::Lesson(lesson) => {
            assert!(lesson.playing);
            assert!(lesson.is_expanded(0));
            assert!(lesson.is_expanded(1));
        }
        other => panic!("expected lesson view, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────
// Code exercise
// ─────────────────────────────────────────────────────────

#[test]
fn test_run_code_requests_timer() {
    let mut state = state_on(Page::CodeEditor, Role::Student);

    let actions = press(&mut state, InputKey::Char('r'));

    assert_eq!(
        actions,
        [UpdateAction::StartCodeRun {
            generation: 1,
            delay: Duration::from_millis(500),
        }]
    );
    assert!(state.view.exercise().is_some_and(|e| e.running));
}

#[test]
fn test_run_delay_follows_settings() {
    let mut state = state_on(Page::CodeEditor, Role::Student);
    state.settings.exercise.run_delay_ms = 1200;

    let actions = drive(&mut state, Message::RunCode);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::StartCodeRun { delay, .. }] if *delay == Duration::from_millis(1200)
    ));
}

#[test]
fn test_code_run_completion_shows_fixed_output() {
    let mut state = state_on(Page::CodeEditor, Role::Student);
    drive(&mut state, Message::RunCode);

    drive(&mut state, Message::CodeRunFinished { generation: 1 });

    let exercise = state.view.exercise();
    assert!(exercise.is_some_and(|e| !e.running));
    assert_eq!(
        exercise.map(|e| e.output.as_str()),
        Some(campus_core::exercise::RUN_OUTPUT)
    );
}

#[test]
fn test_rerun_supersedes_previous_run() {
    let mut state = state_on(Page::CodeEditor, Role::Student);
    drive(&mut state, Message::RunCode);
    drive(&mut state, Message::RunCode);

    drive(&mut state, Message::CodeRunFinished { generation: 1 });
    assert!(state.view.exercise().is_some_and(|e| e.running));

    drive(&mut state, Message::CodeRunFinished { generation: 2 });
    assert!(state.view.exercise().is_some_and(|e| !e.running));
}

#[test]
fn test_run_generation_survives_remount() {
    let mut state = state_on(Page::CodeEditor, Role::Student);
    drive(&mut state, Message::RunCode);
    drive(&mut state, Message::Navigate(Page::Lesson));
    drive(&mut state, Message::Navigate(Page::CodeEditor));

    let actions = drive(&mut state, Message::RunCode);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::StartCodeRun { generation: 2, .. }]
    ));

    // Completion from the first mount arrives late
    drive(&mut state, Message::CodeRunFinished { generation: 1 });
    let exercise = state.view.exercise();
    assert!(exercise.is_some_and(|e| e.running));
    assert_eq!(
        exercise.map(|e| e.output.as_str()),
        Some(campus_core::exercise::INITIAL_OUTPUT)
    );

    drive(&mut state, Message::CodeRunFinished { generation: 2 });
    assert!(state.view.exercise().is_some_and(|e| !e.running));
}

#[test]
fn test_leaving_exercise_cancels_run() {
    let mut state = state_on(Page::CodeEditor, Role::Student);
    drive(&mut state, Message::RunCode);

    let actions = press(&mut state, InputKey::Char('s'));
    assert_eq!(state.page, Page::Quiz);
    assert_eq!(actions, [UpdateAction::CancelCodeRun]);

    // A late completion must not touch the quiz
    drive(&mut state, Message::CodeRunFinished { generation: 1 });
    assert_eq!(state.view.page(), Page::Quiz);
}

#[test]
fn test_code_input_mode_captures_keys() {
    let mut state = state_on(Page::CodeEditor, Role::Student);
    if let Some(exercise) = state.view.exercise_mut() {
        exercise.code.clear();
    }

    press(&mut state, InputKey::Char('e'));
    assert_eq!(state.ui_mode, UiMode::CodeInput);

    type_chars(&mut state, "let q");
    press(&mut state, InputKey::Enter);
    type_chars(&mut state, "gx");
    press(&mut state, InputKey::Backspace);
    assert!(!state.should_quit());

    press(&mut state, InputKey::Esc);
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(
        state.view.exercise().map(|e| e.code.as_str()),
        Some("let q\ng")
    );
}

// ─────────────────────────────────────────────────────────
// Quiz
// ─────────────────────────────────────────────────────────

#[test]
fn test_quiz_next_blocked_until_answered() {
    let state = state_on(Page::Quiz, Role::Student);
    assert_eq!(handle_key(&state, InputKey::Right), None);
}

#[test]
fn test_quiz_full_pass_shows_continue_link() {
    let mut state = state_on(Page::Quiz, Role::Student);

    // 'c' is not offered mid-quiz
    assert_eq!(handle_key(&state, InputKey::Char('c')), None);

    for question in QUESTIONS.iter() {
        let key = char::from_digit(question.correct as u32 + 1, 10).unwrap_or('1');
        press(&mut state, InputKey::Char(key));
        press(&mut state, InputKey::Char('n'));
    }

    let quiz = state.view.quiz().cloned();
    assert!(quiz.as_ref().is_some_and(|q| q.is_finished()));
    assert_eq!(quiz.as_ref().map(|q| q.score()), Some(5));
    assert!(quiz.is_some_and(|q| q.passed()));

    press(&mut state, InputKey::Char('c'));
    assert_eq!(state.page, Page::Lesson);
}

#[test]
fn test_quiz_previous_keeps_answers() {
    let mut state = state_on(Page::Quiz, Role::Student);
    press(&mut state, InputKey::Char('2'));
    press(&mut state, InputKey::Right);
    press(&mut state, InputKey::Left);

    let quiz = state.view.quiz();
    assert_eq!(quiz.and_then(|q| q.current_index()), Some(0));
    assert_eq!(quiz.and_then(|q| q.current_answer()), Some(1));
}

#[test]
fn test_quiz_retake_from_results() {
    let mut state = state_on(Page::Quiz, Role::Student);
    for _ in QUESTIONS.iter() {
        press(&mut state, InputKey::Char('1'));
        press(&mut state, InputKey::Char('n'));
    }
    assert!(state.view.quiz().is_some_and(|q| q.is_finished()));

    press(&mut state, InputKey::Char('r'));

    let quiz = state.view.quiz();
    assert_eq!(quiz.and_then(|q| q.current_index()), Some(0));
    assert!(quiz.is_some_and(|q| q.answers().is_empty()));
}

#[test]
fn test_quiz_ignores_out_of_range_option() {
    let state = state_on(Page::Quiz, Role::Student);
    assert_eq!(handle_key(&state, InputKey::Char('5')), None);
    assert_eq!(handle_key(&state, InputKey::Char('0')), None);
}

// ─────────────────────────────────────────────────────────
// Dev-aid overlays
// ─────────────────────────────────────────────────────────

#[cfg(feature = "dev-overlays")]
mod overlays {
    use super::*;
    use crate::overlays::Panel;

    #[test]
    fn test_f2_opens_navigator_on_current_page() {
        let mut state = state_on(Page::Quiz, Role::Student);
        press(&mut state, InputKey::F(2));

        assert_eq!(state.ui_mode, UiMode::ScreenNavigator);
        assert!(state.overlays.is_open(Panel::ScreenNavigator));
        assert_eq!(state.overlays.screen_navigator.cursor, Page::Quiz.index());
    }

    #[test]
    fn test_navigator_selection_closes_panel() {
        let mut state = AppState::new();
        press(&mut state, InputKey::F(2));
        // Tenth row
        press(&mut state, InputKey::Char('0'));

        assert_eq!(state.page, Page::Security);
        assert!(!state.overlays.is_open(Panel::ScreenNavigator));
        assert_eq!(state.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_navigator_cursor_and_enter() {
        let mut state = AppState::new();
        press(&mut state, InputKey::F(2));
        press(&mut state, InputKey::Up);
        press(&mut state, InputKey::Enter);
        assert_eq!(state.page, Page::Security);

        press(&mut state, InputKey::F(2));
        press(&mut state, InputKey::Down);
        press(&mut state, InputKey::Enter);
        assert_eq!(state.page, Page::Home);
    }

    #[test]
    fn test_role_switcher_selection_keeps_page() {
        let mut state = state_on(Page::Courses, Role::Student);
        press(&mut state, InputKey::F(3));
        assert_eq!(state.ui_mode, UiMode::RoleSwitcher);

        press(&mut state, InputKey::Char('3'));

        assert_eq!(state.role, Role::Admin);
        assert_eq!(state.page, Page::Courses);
        assert!(!state.overlays.is_open(Panel::RoleSwitcher));
    }

    #[test]
    fn test_panel_captures_page_keys() {
        let mut state = AppState::new();
        press(&mut state, InputKey::F(3));
        press(&mut state, InputKey::Char('c'));
        press(&mut state, InputKey::Char('q'));
        assert_eq!(state.page, Page::Home);
        assert!(!state.should_quit());

        press(&mut state, InputKey::Esc);
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert!(!state.overlays.is_open(Panel::RoleSwitcher));
    }

    #[test]
    fn test_focus_returns_to_other_open_panel() {
        let mut state = AppState::new();
        press(&mut state, InputKey::F(2));
        press(&mut state, InputKey::F(3));
        assert_eq!(state.ui_mode, UiMode::RoleSwitcher);

        press(&mut state, InputKey::Esc);
        assert_eq!(state.ui_mode, UiMode::ScreenNavigator);
        assert!(state.overlays.is_open(Panel::ScreenNavigator));

        press(&mut state, InputKey::F(2));
        assert_eq!(state.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_role_switch_with_navigator_open_keeps_navigator() {
        let mut state = AppState::new();
        press(&mut state, InputKey::F(2));
        press(&mut state, InputKey::F(3));
        press(&mut state, InputKey::Char('2'));

        assert_eq!(state.role, Role::Lecturer);
        assert_eq!(state.ui_mode, UiMode::ScreenNavigator);
    }

    #[test]
    fn test_f_keys_ignored_in_text_input() {
        let mut state = state_on(Page::Courses, Role::Student);
        press(&mut state, InputKey::Char('/'));
        press(&mut state, InputKey::F(2));
        assert_eq!(state.ui_mode, UiMode::SearchInput);
        assert!(!state.overlays.is_open(Panel::ScreenNavigator));
    }
}
