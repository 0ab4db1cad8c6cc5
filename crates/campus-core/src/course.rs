//! Course detail literals for the featured JavaScript course

use crate::tabs::tab_set;

tab_set!(
    /// Tabs below the course hero
    CourseTab {
        Overview => "Overview",
        Curriculum => "Curriculum",
        Instructor => "Instructor",
        Reviews => "Reviews",
    }
);

pub const TITLE: &str = "Complete JavaScript Masterclass 2026";
pub const SUBTITLE: &str =
    "Master JavaScript from basics to advanced concepts with hands-on projects";
pub const BADGE: &str = "Bestseller";
pub const RATING: f32 = 4.8;
pub const RATINGS_LABEL: &str = "(12,450 ratings)";
pub const STUDENTS_LABEL: &str = "45,230 students";
pub const INSTRUCTOR: &str = "Sarah Johnson";
pub const LAST_UPDATED: &str = "Last updated 01/2026";
pub const LANGUAGE: &str = "English";
pub const PRICE: &str = "$89.99";

pub const LEARNING_OUTCOMES: [&str; 8] = [
    "Master JavaScript fundamentals and advanced concepts",
    "Build real-world projects from scratch",
    "Understand ES6+ features and modern syntax",
    "Work with APIs and asynchronous programming",
    "Learn DOM manipulation and event handling",
    "Debugging techniques and best practices",
    "Object-oriented and functional programming",
    "Prepare for JavaScript interviews",
];

pub const DESCRIPTION: &str = "Welcome to the Complete JavaScript Masterclass! This \
    comprehensive course is designed to take you from a complete beginner to an advanced \
    JavaScript developer.";

pub const REQUIREMENTS: [&str; 3] = [
    "No prior programming experience required",
    "A computer with internet connection",
    "Willingness to learn and practice coding",
];

pub const INCLUDES: [&str; 5] = [
    "42 hours on-demand video",
    "234 downloadable resources",
    "Full lifetime access",
    "Access on mobile and desktop",
    "Certificate of completion",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lecture {
    pub title: &'static str,
    pub duration: &'static str,
    /// Available as a free preview
    pub free: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub lectures: u32,
    pub duration: &'static str,
    pub items: &'static [Lecture],
}

const fn lecture(title: &'static str, duration: &'static str, free: bool) -> Lecture {
    Lecture {
        title,
        duration,
        free,
    }
}

pub static SECTIONS: [Section; 4] = [
    Section {
        title: "Introduction to JavaScript",
        lectures: 8,
        duration: "1h 45m",
        items: &[
            lecture("Welcome to the Course", "5:23", true),
            lecture("Setting Up Your Environment", "12:45", true),
            lecture("Your First JavaScript Program", "15:30", false),
            lecture("Variables and Data Types", "18:20", false),
            lecture("Understanding Functions", "22:15", false),
        ],
    },
    Section {
        title: "Advanced JavaScript Concepts",
        lectures: 12,
        duration: "3h 20m",
        items: &[
            lecture("Arrow Functions & This Keyword", "16:40", false),
            lecture("Closures Explained", "19:25", false),
            lecture("Async/Await & Promises", "25:30", false),
        ],
    },
    Section {
        title: "Working with APIs",
        lectures: 10,
        duration: "2h 45m",
        items: &[
            lecture("Introduction to REST APIs", "14:20", false),
            lecture("Fetch API & AJAX", "18:45", false),
            lecture("Building a Real Project", "32:10", false),
        ],
    },
    Section {
        title: "Modern JavaScript (ES6+)",
        lectures: 15,
        duration: "4h 10m",
        items: &[
            lecture("Destructuring & Spread Operator", "17:35", false),
            lecture("Modules & Imports", "15:50", false),
            lecture("Template Literals", "12:25", false),
        ],
    },
];

pub const INSTRUCTOR_TITLE: &str = "Senior Full-Stack Developer & Instructor";
pub const INSTRUCTOR_STATS: [&str; 4] =
    ["4.8 Rating", "12 Courses", "250K Students", "4,320 Reviews"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Review {
    pub name: &'static str,
    pub rating: u8,
    pub date: &'static str,
    pub text: &'static str,
}

pub static REVIEWS: [Review; 3] = [
    Review {
        name: "John Smith",
        rating: 5,
        date: "2 weeks ago",
        text: "This is hands down the best JavaScript course I've taken. Sarah explains \
               everything clearly and the projects are really helpful for understanding \
               the concepts.",
    },
    Review {
        name: "Emily Davis",
        rating: 5,
        date: "1 month ago",
        text: "Excellent course! I went from knowing nothing about JavaScript to building \
               my own web applications. The curriculum is well-structured and easy to follow.",
    },
    Review {
        name: "Michael Brown",
        rating: 4,
        date: "2 months ago",
        text: "Great content and very thorough. The only minor issue is that some videos \
               could be a bit shorter, but overall highly recommended!",
    },
];

/// Total lectures across all sections
pub fn total_lectures() -> u32 {
    SECTIONS.iter().map(|s| s.lectures).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::TabSet;

    #[test]
    fn test_total_lectures() {
        assert_eq!(total_lectures(), 45);
    }

    #[test]
    fn test_only_first_two_lectures_are_free() {
        let free: Vec<_> = SECTIONS
            .iter()
            .flat_map(|s| s.items.iter())
            .filter(|l| l.free)
            .map(|l| l.title)
            .collect();
        assert_eq!(free, ["Welcome to the Course", "Setting Up Your Environment"]);
    }

    #[test]
    fn test_course_tabs() {
        assert_eq!(CourseTab::ALL.len(), 4);
        assert_eq!(CourseTab::Overview.prev(), CourseTab::Reviews);
    }
}
