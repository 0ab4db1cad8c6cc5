//! Lesson viewer page state

use std::collections::BTreeSet;

use campus_core::lesson::{LessonTab, CURRICULUM};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonState {
    pub playing: bool,
    /// Indices of expanded curriculum sections
    pub expanded: BTreeSet<usize>,
    /// Sidebar section under the cursor
    pub cursor: usize,
    pub tab: LessonTab,
}

impl Default for LessonState {
    fn default() -> Self {
        Self {
            playing: false,
            expanded: BTreeSet::from([0]),
            cursor: 0,
            tab: LessonTab::default(),
        }
    }
}

impl LessonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_playback(&mut self) {
        self.playing = !self.playing;
    }

    pub fn is_expanded(&self, section: usize) -> bool {
        self.expanded.contains(&section)
    }

    /// Expand or collapse the section under the cursor
    pub fn toggle_section(&mut self) {
        if !self.expanded.remove(&self.cursor) {
            self.expanded.insert(self.cursor);
        }
    }

    pub fn cursor_down(&mut self) {
        self.cursor = (self.cursor + 1).min(CURRICULUM.len() - 1);
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }
}
