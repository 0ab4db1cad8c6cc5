//! Code exercise literals
//!
//! The sandbox never evaluates the buffer. A finished run always shows
//! [`RUN_OUTPUT`].

use crate::tabs::tab_set;

tab_set!(
    /// Panes below the editor
    OutputTab {
        Output => "Output",
        Tests => "Tests",
        Console => "Console",
    }
);

/// Default simulated run delay
pub const DEFAULT_RUN_DELAY_MS: u64 = 500;

/// Lower bound applied to configured run delays
pub const MIN_RUN_DELAY_MS: u64 = 50;

pub const EXERCISE_TITLE: &str = "Exercise: Creating Functions";
pub const DIFFICULTY: &str = "Easy";
pub const FILE_NAME: &str = "main.js";

pub const TASK: &str = "Create a function called greet that takes a name as a parameter \
                        and returns a greeting message.";

pub const REQUIREMENTS: [&str; 4] = [
    "Function must be named greet",
    "Must accept one parameter (name)",
    "Must return a string in format \"Hello, [name]!\"",
    "Handle empty string inputs gracefully",
];

pub const EXAMPLE: &str = "greet(\"Alice\") // returns \"Hello, Alice!\"";

/// Buffer contents when the exercise is mounted
pub const INITIAL_CODE: &str = "// Write your JavaScript code here
function greet(name) {
  return \"Hello, \" + name + \"!\";
}

console.log(greet(\"World\"));
console.log(greet(\"UniCode\"));

// Try writing your own code below:
";

/// Output pane text before the first run
pub const INITIAL_OUTPUT: &str = "Click \"Run Code\" to see the output...";

/// Output pane text after every completed run
pub const RUN_OUTPUT: &str = "Hello, World!\nHello, UniCode!";

pub const CONSOLE_PLACEHOLDER: &str = "No console messages";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    pub input: &'static str,
    pub expected: &'static str,
    pub status: TestStatus,
}

pub static TEST_CASES: [TestCase; 4] = [
    TestCase {
        input: "greet(\"Alice\")",
        expected: "Hello, Alice!",
        status: TestStatus::Passed,
    },
    TestCase {
        input: "greet(\"Bob\")",
        expected: "Hello, Bob!",
        status: TestStatus::Passed,
    },
    TestCase {
        input: "greet(\"Charlie\")",
        expected: "Hello, Charlie!",
        status: TestStatus::Passed,
    },
    TestCase {
        input: "greet(\"\")",
        expected: "Hello, !",
        status: TestStatus::Failed,
    },
];

/// Number of test cases flagged as passed
pub fn passed_count() -> usize {
    TEST_CASES
        .iter()
        .filter(|t| t.status == TestStatus::Passed)
        .count()
}

/// Clamp a configured delay to the supported minimum
pub fn clamp_run_delay_ms(ms: u64) -> u64 {
    ms.max(MIN_RUN_DELAY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_of_four_cases_pass() {
        assert_eq!(passed_count(), 3);
        assert_eq!(TEST_CASES[3].status, TestStatus::Failed);
    }

    #[test]
    fn test_run_output_is_two_lines() {
        assert_eq!(RUN_OUTPUT.lines().count(), 2);
    }

    #[test]
    fn test_output_tabs_start_on_output() {
        use crate::tabs::TabSet;
        assert_eq!(OutputTab::default(), OutputTab::Output);
        assert_eq!(OutputTab::Console.next(), OutputTab::Output);
    }

    #[test]
    fn test_clamp_run_delay() {
        assert_eq!(clamp_run_delay_ms(0), MIN_RUN_DELAY_MS);
        assert_eq!(clamp_run_delay_ms(DEFAULT_RUN_DELAY_MS), 500);
    }
}
