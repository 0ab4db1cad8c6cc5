//! Course catalog page state

use campus_core::{CatalogFilter, Course, Language, Level, COURSES};

/// Filters plus the highlighted row within the filtered list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    pub filter: CatalogFilter,
    pub selected: usize,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Courses passing the current filter
    pub fn visible(&self) -> Vec<&'static Course> {
        self.filter.apply(&COURSES)
    }

    /// The highlighted course, if any course is visible
    pub fn selected_course(&self) -> Option<&'static Course> {
        self.visible().get(self.selected).copied()
    }

    pub fn set_search(&mut self, text: String) {
        self.filter.search = text;
        self.clamp_selection();
    }

    pub fn toggle_language(&mut self, language: Language) {
        self.filter.toggle_language(language);
        self.clamp_selection();
    }

    pub fn toggle_level(&mut self, level: Level) {
        self.filter.toggle_level(level);
        self.clamp_selection();
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_clamps_when_list_shrinks() {
        let mut state = CatalogState::new();
        for _ in 0..8 {
            state.select_next();
        }
        assert_eq!(state.selected, 8);

        state.toggle_language(Language::Java);
        assert_eq!(state.visible().len(), 1);
        assert_eq!(state.selected, 0);
        assert_eq!(
            state.selected_course().map(|c| c.title),
            Some("Java Programming Complete Guide")
        );
    }

    #[test]
    fn test_select_next_stops_at_end() {
        let mut state = CatalogState::new();
        state.toggle_level(Level::Advanced);
        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_empty_result_has_no_selection() {
        let mut state = CatalogState::new();
        state.set_search("cobol".to_string());
        assert!(state.visible().is_empty());
        assert!(state.selected_course().is_none());
    }
}
