//! Lesson viewer literals: the sidebar curriculum and lesson content

use crate::tabs::tab_set;

tab_set!(
    /// Tabs under the video player
    LessonTab {
        Description => "Description",
        Resources => "Resources",
        Notes => "Notes",
    }
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonItem {
    pub id: u32,
    pub title: &'static str,
    pub duration: &'static str,
    pub completed: bool,
    /// The lesson playing in the viewer
    pub current: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurriculumSection {
    pub title: &'static str,
    pub completed: u32,
    pub total: u32,
    pub lessons: &'static [LessonItem],
}

const fn item(id: u32, title: &'static str, duration: &'static str, completed: bool) -> LessonItem {
    LessonItem {
        id,
        title,
        duration,
        completed,
        current: false,
    }
}

pub static CURRICULUM: [CurriculumSection; 3] = [
    CurriculumSection {
        title: "Introduction to JavaScript",
        completed: 3,
        total: 5,
        lessons: &[
            item(1, "Welcome to the Course", "5:23", true),
            item(2, "Setting Up Your Environment", "12:45", true),
            LessonItem {
                id: 3,
                title: "Your First JavaScript Program",
                duration: "15:30",
                completed: true,
                current: true,
            },
            item(4, "Variables and Data Types", "18:20", false),
            item(5, "Understanding Functions", "22:15", false),
        ],
    },
    CurriculumSection {
        title: "Advanced JavaScript Concepts",
        completed: 0,
        total: 3,
        lessons: &[
            item(6, "Arrow Functions & This Keyword", "16:40", false),
            item(7, "Closures Explained", "19:25", false),
            item(8, "Async/Await & Promises", "25:30", false),
        ],
    },
    CurriculumSection {
        title: "Working with APIs",
        completed: 0,
        total: 3,
        lessons: &[
            item(9, "Introduction to REST APIs", "14:20", false),
            item(10, "Fetch API & AJAX", "18:45", false),
            item(11, "Building a Real Project", "32:10", false),
        ],
    },
];

pub const LESSON_TITLE: &str = "Your First JavaScript Program";
pub const LESSON_POSITION: &str = "Section 1, Lesson 3 of 45";
pub const ELAPSED: &str = "5:12";
pub const DURATION: &str = "15:30";

pub const ABOUT: &str = "In this lesson, you'll write your very first JavaScript program! \
                         We'll start with the classic \"Hello World\" example and gradually \
                         build up to more complex examples.";

pub const OBJECTIVES: [&str; 4] = [
    "Use console.log() to output messages",
    "Create and run JavaScript files",
    "Understand the basic structure of a JavaScript program",
    "Debug simple errors in your code",
];

pub const CODE_EXAMPLE: &str = "console.log(\"Hello, World!\");";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub name: &'static str,
    pub size: &'static str,
    pub kind: &'static str,
}

pub static RESOURCES: [Resource; 3] = [
    Resource {
        name: "Lesson3_CodeSamples.zip",
        size: "2.4 MB",
        kind: "ZIP",
    },
    Resource {
        name: "JavaScript_CheatSheet.pdf",
        size: "1.2 MB",
        kind: "PDF",
    },
    Resource {
        name: "Exercise_Solutions.js",
        size: "15 KB",
        kind: "JS",
    },
];

pub const NOTES_PLACEHOLDER: &str = "Take notes while watching the lesson...";
