//! Page-local state and the mounted page view
//!
//! Each page's local state lives inside its [`PageView`] variant, so
//! navigating to a different page drops the old state and builds the new one
//! from scratch.

pub mod catalog;
pub mod exercise;
pub mod lesson;

use campus_core::{
    page_links, AdminTab, CourseTab, LecturerTab, Page, PageLink, PaymentMethod, ProfileTab,
    QuizState, Role, TabSet,
};

pub use catalog::CatalogState;
pub use exercise::ExerciseState;
pub use lesson::LessonState;

/// The mounted page and its local state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Home,
    Courses(CatalogState),
    CourseDetail { tab: CourseTab },
    Lesson(LessonState),
    CodeEditor(ExerciseState),
    Quiz(QuizState),
    StudentDashboard,
    LecturerDashboard { tab: LecturerTab },
    AdminDashboard { tab: AdminTab },
    Payment { method: PaymentMethod },
    Profile { tab: ProfileTab },
    Security,
}

impl Default for PageView {
    fn default() -> Self {
        Self::mount(Page::default(), Role::default())
    }
}

impl PageView {
    /// Build fresh local state for a page
    ///
    /// The dashboard variant follows the role.
    pub fn mount(page: Page, role: Role) -> Self {
        match page {
            Page::Home => PageView::Home,
            Page::Courses => PageView::Courses(CatalogState::new()),
            Page::CourseDetail => PageView::CourseDetail {
                tab: CourseTab::default(),
            },
            Page::Lesson => PageView::Lesson(LessonState::new()),
            Page::CodeEditor => PageView::CodeEditor(ExerciseState::new()),
            Page::Quiz => PageView::Quiz(QuizState::default()),
            Page::Dashboard => match role {
                Role::Student => PageView::StudentDashboard,
                Role::Lecturer => PageView::LecturerDashboard {
                    tab: LecturerTab::default(),
                },
                Role::Admin => PageView::AdminDashboard {
                    tab: AdminTab::default(),
                },
            },
            Page::Payment => PageView::Payment {
                method: PaymentMethod::default(),
            },
            Page::Profile => PageView::Profile {
                tab: ProfileTab::default(),
            },
            Page::Security => PageView::Security,
        }
    }

    /// The page this view belongs to
    pub fn page(&self) -> Page {
        match self {
            PageView::Home => Page::Home,
            PageView::Courses(_) => Page::Courses,
            PageView::CourseDetail { .. } => Page::CourseDetail,
            PageView::Lesson(_) => Page::Lesson,
            PageView::CodeEditor(_) => Page::CodeEditor,
            PageView::Quiz(_) => Page::Quiz,
            PageView::StudentDashboard
            | PageView::LecturerDashboard { .. }
            | PageView::AdminDashboard { .. } => Page::Dashboard,
            PageView::Payment { .. } => Page::Payment,
            PageView::Profile { .. } => Page::Profile,
            PageView::Security => Page::Security,
        }
    }

    /// Role whose dashboard variant is mounted, if this is a dashboard
    pub fn dashboard_role(&self) -> Option<Role> {
        match self {
            PageView::StudentDashboard => Some(Role::Student),
            PageView::LecturerDashboard { .. } => Some(Role::Lecturer),
            PageView::AdminDashboard { .. } => Some(Role::Admin),
            _ => None,
        }
    }

    /// Navigation links currently offered by the page
    ///
    /// The quiz offers "Continue Learning" only on its results screen.
    pub fn links(&self, role: Role) -> &'static [PageLink] {
        match self {
            PageView::Quiz(quiz) if !quiz.is_finished() => &[],
            _ => page_links(self.page(), role),
        }
    }

    /// Step the page's tab strip; returns false on pages without tabs
    pub fn cycle_tab(&mut self, forward: bool) -> bool {
        fn step<T: TabSet>(tab: &mut T, forward: bool) {
            *tab = if forward { tab.next() } else { tab.prev() };
        }

        match self {
            PageView::CourseDetail { tab } => step(tab, forward),
            PageView::Lesson(lesson) => step(&mut lesson.tab, forward),
            PageView::CodeEditor(exercise) => step(&mut exercise.tab, forward),
            PageView::LecturerDashboard { tab } => step(tab, forward),
            PageView::AdminDashboard { tab } => step(tab, forward),
            PageView::Payment { method } => step(method, forward),
            PageView::Profile { tab } => step(tab, forward),
            PageView::Home
            | PageView::Courses(_)
            | PageView::Quiz(_)
            | PageView::StudentDashboard
            | PageView::Security => return false,
        }
        true
    }

    pub fn catalog(&self) -> Option<&CatalogState> {
        match self {
            PageView::Courses(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn catalog_mut(&mut self) -> Option<&mut CatalogState> {
        match self {
            PageView::Courses(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn lesson_mut(&mut self) -> Option<&mut LessonState> {
        match self {
            PageView::Lesson(lesson) => Some(lesson),
            _ => None,
        }
    }

    pub fn exercise(&self) -> Option<&ExerciseState> {
        match self {
            PageView::CodeEditor(exercise) => Some(exercise),
            _ => None,
        }
    }

    pub fn exercise_mut(&mut self) -> Option<&mut ExerciseState> {
        match self {
            PageView::CodeEditor(exercise) => Some(exercise),
            _ => None,
        }
    }

    pub fn quiz(&self) -> Option<&QuizState> {
        match self {
            PageView::Quiz(quiz) => Some(quiz),
            _ => None,
        }
    }

    pub fn quiz_mut(&mut self) -> Option<&mut QuizState> {
        match self {
            PageView::Quiz(quiz) => Some(quiz),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_matches_page_for_every_role() {
        for role in Role::ALL {
            for page in Page::ALL {
                assert_eq!(PageView::mount(page, role).page(), page);
            }
        }
    }

    #[test]
    fn test_dashboard_variant_follows_role() {
        for role in Role::ALL {
            let view = PageView::mount(Page::Dashboard, role);
            assert_eq!(view.dashboard_role(), Some(role));
        }
        assert_eq!(PageView::mount(Page::Home, Role::Admin).dashboard_role(), None);
    }

    #[test]
    fn test_quiz_links_hidden_until_results() {
        let mut view = PageView::mount(Page::Quiz, Role::Student);
        assert!(view.links(Role::Student).is_empty());

        if let Some(quiz) = view.quiz_mut() {
            for question in campus_core::QUESTIONS.iter() {
                quiz.select(question.correct);
                quiz.next();
            }
        }
        let links = view.links(Role::Student);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target, Page::Lesson);
    }

    #[test]
    fn test_cycle_tab_on_tabbed_and_untabbed_pages() {
        let mut view = PageView::mount(Page::Payment, Role::Student);
        assert!(view.cycle_tab(true));
        assert_eq!(
            view,
            PageView::Payment {
                method: PaymentMethod::PayPal
            }
        );

        let mut home = PageView::mount(Page::Home, Role::Student);
        assert!(!home.cycle_tab(true));
    }
}
