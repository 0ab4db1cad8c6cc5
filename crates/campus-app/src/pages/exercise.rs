//! Code exercise sandbox state
//!
//! Runs are keyed by a generation counter. Only the completion carrying the
//! latest generation is applied.

use campus_core::exercise::{OutputTab, INITIAL_CODE, INITIAL_OUTPUT, RUN_OUTPUT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseState {
    pub code: String,
    pub output: String,
    pub running: bool,
    /// Generation of the most recent run request
    pub generation: u64,
    pub tab: OutputTab,
}

impl Default for ExerciseState {
    fn default() -> Self {
        Self {
            code: INITIAL_CODE.to_string(),
            output: INITIAL_OUTPUT.to_string(),
            running: false,
            generation: 0,
            tab: OutputTab::default(),
        }
    }
}

impl ExerciseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin run `generation`, superseding any in flight
    pub fn start_run(&mut self, generation: u64) {
        self.generation = generation;
        self.running = true;
    }

    /// Apply a run completion
    ///
    /// Returns false for stale generations, leaving state untouched.
    pub fn finish_run(&mut self, generation: u64) -> bool {
        if !self.running || generation != self.generation {
            return false;
        }
        self.running = false;
        self.output = RUN_OUTPUT.to_string();
        true
    }

    pub fn insert_char(&mut self, c: char) {
        self.code.push(c);
    }

    pub fn insert_newline(&mut self) {
        self.code.push('\n');
    }

    pub fn backspace(&mut self) {
        self.code.pop();
    }

    /// Number of lines shown in the editor gutter
    pub fn line_count(&self) -> usize {
        self.code.split('\n').count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mounts_with_initial_buffer() {
        let state = ExerciseState::new();
        assert!(state.code.starts_with("// Write your JavaScript code here"));
        assert_eq!(state.output, INITIAL_OUTPUT);
        assert!(!state.running);
    }

    #[test]
    fn test_run_sets_running_then_completes() {
        let mut state = ExerciseState::new();
        state.start_run(1);
        assert!(state.running);

        assert!(state.finish_run(1));
        assert!(!state.running);
        assert_eq!(state.output, "Hello, World!\nHello, UniCode!");
    }

    #[test]
    fn test_stale_generation_is_ignored() {
        let mut state = ExerciseState::new();
        state.start_run(1);
        state.start_run(2);

        assert!(!state.finish_run(1));
        assert!(state.running);
        assert_eq!(state.output, INITIAL_OUTPUT);

        assert!(state.finish_run(2));
        assert!(!state.running);
    }

    #[test]
    fn test_output_ignores_buffer_contents() {
        let mut state = ExerciseState::new();
        state.code.clear();
        state.start_run(7);
        state.finish_run(7);
        assert_eq!(state.output, RUN_OUTPUT);
    }

    #[test]
    fn test_editing() {
        let mut state = ExerciseState::new();
        state.code.clear();
        state.insert_char('x');
        state.insert_newline();
        state.insert_char('y');
        assert_eq!(state.code, "x\ny");
        assert_eq!(state.line_count(), 2);
        state.backspace();
        state.backspace();
        assert_eq!(state.code, "x");
    }
}
