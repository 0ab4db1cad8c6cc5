//! Quiz questions and the quiz progress state machine
//!
//! States are `InProgress { index }` and `Results`. The machine never leaves
//! the quiz page on its own; "Continue Learning" is a separate page link.

use std::collections::BTreeMap;

/// Percentage at or above which the results screen congratulates the learner
pub const PASS_PERCENTAGE: u32 = 70;

pub const TITLE: &str = "JavaScript Fundamentals Quiz";
pub const SECTION: &str = "Section 1: Introduction to JavaScript";

pub const PASS_HEADLINE: &str = "Congratulations!";
pub const PASS_MESSAGE: &str = "Great job! You've demonstrated a solid understanding of \
                                JavaScript fundamentals. You're ready to move on to the next section.";
pub const FAIL_HEADLINE: &str = "Keep Learning!";
pub const FAIL_MESSAGE: &str =
    "You might want to review the material before continuing. Practice makes perfect!";

/// Countdown shown in the quiz header (decorative)
pub const TIME_LIMIT_LABEL: &str = "15:00";

/// A single-select question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
    pub explanation: &'static str,
}

/// JavaScript fundamentals quiz
pub static QUESTIONS: [Question; 5] = [
    Question {
        prompt: "What is the correct way to declare a variable in JavaScript?",
        options: &[
            "variable name = value;",
            "let name = value;",
            "var name == value;",
            "name := value;",
        ],
        correct: 1,
        explanation: "The \"let\" keyword is the modern way to declare variables in JavaScript. \
                      \"var\" also works but \"let\" has better scoping rules.",
    },
    Question {
        prompt: "Which of the following is NOT a primitive data type in JavaScript?",
        options: &["String", "Number", "Array", "Boolean"],
        correct: 2,
        explanation: "Array is an object type, not a primitive. The primitive types are: \
                      String, Number, Boolean, Undefined, Null, Symbol, and BigInt.",
    },
    Question {
        prompt: "What does the === operator do?",
        options: &[
            "Assigns a value",
            "Compares values only",
            "Compares values and types",
            "Multiplies values",
        ],
        correct: 2,
        explanation: "The === operator checks for strict equality, meaning both the value \
                      and type must match.",
    },
    Question {
        prompt: "Which method is used to add an element to the end of an array?",
        options: &[
            "array.add()",
            "array.append()",
            "array.push()",
            "array.insert()",
        ],
        correct: 2,
        explanation: "The push() method adds one or more elements to the end of an array \
                      and returns the new length.",
    },
    Question {
        prompt: "What will console.log(typeof null) output?",
        options: &["\"null\"", "\"undefined\"", "\"object\"", "\"number\""],
        correct: 2,
        explanation: "This is a well-known quirk in JavaScript. typeof null returns \"object\", \
                      which is a bug in the language kept for backward compatibility.",
    },
];

/// Where the learner is in the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress { index: usize },
    Results,
}

/// Progress through a fixed question list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    questions: &'static [Question],
    phase: QuizPhase,
    answers: BTreeMap<usize, usize>,
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new(&QUESTIONS)
    }
}

impl QuizState {
    pub fn new(questions: &'static [Question]) -> Self {
        Self {
            questions,
            phase: QuizPhase::InProgress { index: 0 },
            answers: BTreeMap::new(),
        }
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn answers(&self) -> &BTreeMap<usize, usize> {
        &self.answers
    }

    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Results
    }

    /// Index of the question on screen, `None` on the results screen
    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            QuizPhase::InProgress { index } => Some(index),
            QuizPhase::Results => None,
        }
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    /// Stored answer for the question on screen
    pub fn current_answer(&self) -> Option<usize> {
        self.current_index()
            .and_then(|i| self.answers.get(&i).copied())
    }

    /// True while on the final question ("Next" reads "Submit")
    pub fn is_last_question(&self) -> bool {
        self.current_index()
            .is_some_and(|i| i + 1 == self.questions.len())
    }

    /// Whether "Next"/"Submit" may be invoked
    pub fn can_advance(&self) -> bool {
        self.current_answer().is_some()
    }

    /// Record an answer for the question on screen
    ///
    /// Out-of-range options and selections on the results screen are ignored.
    pub fn select(&mut self, option: usize) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        if option >= question.options.len() {
            return false;
        }
        if let Some(index) = self.current_index() {
            self.answers.insert(index, option);
        }
        true
    }

    /// Advance to the next question, or to results from the last one
    ///
    /// Returns false without changing state when the current question is
    /// unanswered.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        if let QuizPhase::InProgress { index } = self.phase {
            self.phase = if index + 1 < self.questions.len() {
                QuizPhase::InProgress { index: index + 1 }
            } else {
                QuizPhase::Results
            };
        }
        true
    }

    /// Step back one question, floored at the first
    pub fn previous(&mut self) -> bool {
        match self.phase {
            QuizPhase::InProgress { index } if index > 0 => {
                self.phase = QuizPhase::InProgress { index: index - 1 };
                true
            }
            _ => false,
        }
    }

    /// Return to the first question with no answers
    pub fn retake(&mut self) -> bool {
        if self.phase != QuizPhase::Results {
            return false;
        }
        self.phase = QuizPhase::InProgress { index: 0 };
        self.answers.clear();
        true
    }

    /// Whether the stored answer for `index` is correct
    pub fn is_correct(&self, index: usize) -> bool {
        match (self.answers.get(&index), self.questions.get(index)) {
            (Some(answer), Some(question)) => *answer == question.correct,
            _ => false,
        }
    }

    /// Count of questions answered correctly
    pub fn score(&self) -> usize {
        (0..self.questions.len())
            .filter(|i| self.is_correct(*i))
            .count()
    }

    /// Score as a rounded percentage of all questions
    pub fn percentage(&self) -> u32 {
        let total = self.questions.len();
        if total == 0 {
            return 0;
        }
        ((self.score() as f64 / total as f64) * 100.0).round() as u32
    }

    pub fn passed(&self) -> bool {
        self.percentage() >= PASS_PERCENTAGE
    }

    /// Progress through the questions, as shown in the header bar
    pub fn progress_percent(&self) -> u16 {
        let total = self.questions.len().max(1);
        match self.phase {
            QuizPhase::InProgress { index } => (((index + 1) * 100) / total) as u16,
            QuizPhase::Results => 100,
        }
    }
}
