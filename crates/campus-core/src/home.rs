//! Homepage literals

use crate::catalog::{Course, COURSES};

pub const ANNOUNCEMENT: &str = "New: 50+ courses added this month";
pub const HEADLINE: &str = "Learn to Code. Build Your Future.";
pub const TAGLINE: &str = "Master programming with interactive courses, real-world projects, \
                           and guidance from industry experts.";

/// (value, label) pairs in the hero
pub static HERO_STATS: [(&str, &str); 3] = [
    ("500K+", "Active Learners"),
    ("850+", "Courses"),
    ("98%", "Success Rate"),
];

/// (value, label) pairs in the closing banner
pub static BANNER_STATS: [(&str, &str); 4] = [
    ("500K+", "Active Students"),
    ("850+", "Expert-Led Courses"),
    ("98%", "Completion Rate"),
    ("50+", "Programming Languages"),
];

pub const CLOSING_TITLE: &str = "Start Learning Today";
pub const CLOSING_TEXT: &str =
    "Join millions of learners and transform your career with UniCode.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageTile {
    pub name: &'static str,
    pub courses: u32,
}

pub static LANGUAGES: [LanguageTile; 8] = [
    LanguageTile { name: "JavaScript", courses: 156 },
    LanguageTile { name: "Python", courses: 142 },
    LanguageTile { name: "Java", courses: 98 },
    LanguageTile { name: "C++", courses: 87 },
    LanguageTile { name: "React", courses: 124 },
    LanguageTile { name: "Node.js", courses: 93 },
    LanguageTile { name: "TypeScript", courses: 76 },
    LanguageTile { name: "Go", courses: 54 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearningPath {
    pub title: &'static str,
    pub courses: u32,
    pub duration: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

pub static LEARNING_PATHS: [LearningPath; 3] = [
    LearningPath {
        title: "Full-Stack Web Developer",
        courses: 12,
        duration: "6 months",
        description: "Master both frontend and backend development",
        skills: &["HTML/CSS", "JavaScript", "React", "Node.js", "MongoDB"],
    },
    LearningPath {
        title: "Data Science & ML",
        courses: 10,
        duration: "5 months",
        description: "Learn data analysis and machine learning",
        skills: &["Python", "Pandas", "NumPy", "Scikit-learn", "TensorFlow"],
    },
    LearningPath {
        title: "Mobile App Development",
        courses: 8,
        duration: "4 months",
        description: "Build iOS and Android applications",
        skills: &["React Native", "Flutter", "Swift", "Kotlin", "Firebase"],
    },
];

/// The first three catalog courses double as the featured row
pub fn featured_courses() -> &'static [Course] {
    &COURSES[..3]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_courses_are_first_three() {
        let titles: Vec<_> = featured_courses().iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            [
                "Complete JavaScript Masterclass",
                "Python for Data Science",
                "React & TypeScript: Build Modern Apps"
            ]
        );
    }
}
