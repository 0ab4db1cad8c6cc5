//! Course catalog data and client-side filtering

use std::collections::BTreeSet;

/// Programming language a course is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    JavaScript,
    Python,
    Java,
    Cpp,
    React,
    NodeJs,
}

impl Language {
    /// Filter order in the sidebar
    pub const ALL: [Language; 6] = [
        Language::JavaScript,
        Language::Python,
        Language::Java,
        Language::Cpp,
        Language::React,
        Language::NodeJs,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::React => "React",
            Language::NodeJs => "Node.js",
        }
    }
}

/// Course difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn label(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

/// A course card in the catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Course {
    pub id: u32,
    pub title: &'static str,
    pub instructor: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub students: u32,
    pub hours: u32,
    pub level: Level,
    pub price: f32,
    pub language: Language,
    pub tags: &'static [&'static str],
}

/// The full literal course list
pub static COURSES: [Course; 9] = [
    Course {
        id: 1,
        title: "Complete JavaScript Masterclass",
        instructor: "Sarah Johnson",
        rating: 4.8,
        reviews: 12_450,
        students: 45_230,
        hours: 42,
        level: Level::Beginner,
        price: 89.99,
        language: Language::JavaScript,
        tags: &["JavaScript", "Web Development", "ES6+"],
    },
    Course {
        id: 2,
        title: "Python for Data Science",
        instructor: "Dr. Michael Chen",
        rating: 4.9,
        reviews: 8_920,
        students: 38_420,
        hours: 36,
        level: Level::Intermediate,
        price: 99.99,
        language: Language::Python,
        tags: &["Python", "Data Science", "Machine Learning"],
    },
    Course {
        id: 3,
        title: "React & TypeScript: Build Modern Apps",
        instructor: "Emma Wilson",
        rating: 4.7,
        reviews: 6_540,
        students: 29_150,
        hours: 28,
        level: Level::Advanced,
        price: 109.99,
        language: Language::React,
        tags: &["React", "TypeScript", "Frontend"],
    },
    Course {
        id: 4,
        title: "Java Programming Complete Guide",
        instructor: "David Kumar",
        rating: 4.6,
        reviews: 5_230,
        students: 22_340,
        hours: 48,
        level: Level::Beginner,
        price: 79.99,
        language: Language::Java,
        tags: &["Java", "OOP", "Backend"],
    },
    Course {
        id: 5,
        title: "Node.js & Express Masterclass",
        instructor: "Alex Martinez",
        rating: 4.8,
        reviews: 7_650,
        students: 31_200,
        hours: 32,
        level: Level::Intermediate,
        price: 94.99,
        language: Language::NodeJs,
        tags: &["Node.js", "Express", "Backend"],
    },
    Course {
        id: 6,
        title: "C++ Programming from Scratch",
        instructor: "Lisa Anderson",
        rating: 4.5,
        reviews: 4_320,
        students: 18_900,
        hours: 52,
        level: Level::Beginner,
        price: 84.99,
        language: Language::Cpp,
        tags: &["C++", "Systems Programming", "Algorithms"],
    },
    Course {
        id: 7,
        title: "Advanced Python: Deep Dive",
        instructor: "Dr. Rachel Green",
        rating: 4.9,
        reviews: 9_100,
        students: 34_560,
        hours: 40,
        level: Level::Advanced,
        price: 119.99,
        language: Language::Python,
        tags: &["Python", "Advanced", "Best Practices"],
    },
    Course {
        id: 8,
        title: "Full Stack JavaScript Development",
        instructor: "Tom Wilson",
        rating: 4.7,
        reviews: 8_340,
        students: 28_760,
        hours: 56,
        level: Level::Intermediate,
        price: 129.99,
        language: Language::JavaScript,
        tags: &["JavaScript", "Full Stack", "MERN"],
    },
    Course {
        id: 9,
        title: "React Native Mobile Development",
        instructor: "Jessica Lee",
        rating: 4.6,
        reviews: 5_670,
        students: 21_450,
        hours: 38,
        level: Level::Intermediate,
        price: 104.99,
        language: Language::React,
        tags: &["React Native", "Mobile", "Cross-Platform"],
    },
];

pub const TITLE: &str = "All Courses";
pub const SUBTITLE: &str = "Explore our comprehensive library of programming courses";

/// Decorative page numbers under the course grid
pub const PAGINATION_LABELS: [&str; 4] = ["1", "2", "3", "Next"];

/// Search text plus language and level selections
///
/// An empty search, language set or level set matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub search: String,
    pub languages: BTreeSet<Language>,
    pub levels: BTreeSet<Level>,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no criterion is active
    pub fn is_clear(&self) -> bool {
        self.search.is_empty() && self.languages.is_empty() && self.levels.is_empty()
    }

    pub fn toggle_language(&mut self, language: Language) {
        if !self.languages.remove(&language) {
            self.languages.insert(language);
        }
    }

    pub fn toggle_level(&mut self, level: Level) {
        if !self.levels.remove(&level) {
            self.levels.insert(level);
        }
    }

    /// Reset search text and both selections
    pub fn clear(&mut self) {
        self.search.clear();
        self.languages.clear();
        self.levels.clear();
    }

    pub fn matches(&self, course: &Course) -> bool {
        let matches_search = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            course.title.to_lowercase().contains(&needle)
                || course.instructor.to_lowercase().contains(&needle)
        };
        let matches_language =
            self.languages.is_empty() || self.languages.contains(&course.language);
        let matches_level = self.levels.is_empty() || self.levels.contains(&course.level);

        matches_search && matches_language && matches_level
    }

    /// Courses that pass the filter, in literal order
    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        courses.iter().filter(|c| self.matches(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(courses: &[&Course]) -> Vec<&'static str> {
        courses.iter().map(|c| c.title).collect()
    }

    #[test]
    fn test_clear_filter_returns_full_list() {
        let filter = CatalogFilter::new();
        assert!(filter.is_clear());
        assert_eq!(filter.apply(&COURSES).len(), COURSES.len());
    }

    #[test]
    fn test_search_without_match_is_empty() {
        let filter = CatalogFilter {
            search: "haskell".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&COURSES).is_empty());
    }

    #[test]
    fn test_clearing_restores_full_list() {
        let mut filter = CatalogFilter {
            search: "zzz".to_string(),
            ..Default::default()
        };
        filter.toggle_language(Language::Java);
        filter.toggle_level(Level::Advanced);
        assert!(filter.apply(&COURSES).is_empty());

        filter.clear();
        assert!(filter.is_clear());
        assert_eq!(filter.apply(&COURSES).len(), 9);
    }

    #[test]
    fn test_search_is_case_insensitive_on_title() {
        let filter = CatalogFilter {
            search: "PYTHON".to_string(),
            ..Default::default()
        };
        assert_eq!(
            titles(&filter.apply(&COURSES)),
            ["Python for Data Science", "Advanced Python: Deep Dive"]
        );
    }

    #[test]
    fn test_search_matches_instructor() {
        let filter = CatalogFilter {
            search: "wilson".to_string(),
            ..Default::default()
        };
        // Emma Wilson and Tom Wilson
        assert_eq!(filter.apply(&COURSES).len(), 2);
    }

    #[test]
    fn test_language_and_level_are_anded() {
        let mut filter = CatalogFilter::new();
        filter.toggle_language(Language::JavaScript);
        filter.toggle_language(Language::React);
        assert_eq!(filter.apply(&COURSES).len(), 4);

        filter.toggle_level(Level::Intermediate);
        assert_eq!(
            titles(&filter.apply(&COURSES)),
            [
                "Full Stack JavaScript Development",
                "React Native Mobile Development"
            ]
        );
    }

    #[test]
    fn test_toggle_twice_removes_selection() {
        let mut filter = CatalogFilter::new();
        filter.toggle_level(Level::Beginner);
        assert!(filter.levels.contains(&Level::Beginner));
        filter.toggle_level(Level::Beginner);
        assert!(filter.is_clear());
    }

    #[test]
    fn test_every_language_has_a_course() {
        for language in Language::ALL {
            assert!(COURSES.iter().any(|c| c.language == language), "{language:?}");
        }
    }
}
