//! Core domain types: the closed Page and Role sets

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The viewer's persona class, controlling which UI variant is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Lecturer,
    Admin,
}

impl Role {
    /// Every role, in role-switcher order
    pub const ALL: [Role; 3] = [Role::Student, Role::Lecturer, Role::Admin];

    /// Stable identifier used by config files and the CLI
    pub fn id(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Lecturer => "lecturer",
            Role::Admin => "admin",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Lecturer => "Lecturer",
            Role::Admin => "Admin",
        }
    }

    /// Position within [`Role::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Role::Student => 0,
            Role::Lecturer => 1,
            Role::Admin => 2,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Role::ALL
            .into_iter()
            .find(|r| r.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::unknown_role(s))
    }
}

/// One full-screen view in the closed navigation set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Courses,
    CourseDetail,
    Lesson,
    CodeEditor,
    Quiz,
    Dashboard,
    Payment,
    Profile,
    Security,
}

impl Page {
    /// Every page, in screen-navigator order
    pub const ALL: [Page; 10] = [
        Page::Home,
        Page::Courses,
        Page::CourseDetail,
        Page::Lesson,
        Page::CodeEditor,
        Page::Quiz,
        Page::Dashboard,
        Page::Payment,
        Page::Profile,
        Page::Security,
    ];

    /// Stable kebab-case identifier used by config files and the CLI
    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Courses => "courses",
            Page::CourseDetail => "course-detail",
            Page::Lesson => "lesson",
            Page::CodeEditor => "code-editor",
            Page::Quiz => "quiz",
            Page::Dashboard => "dashboard",
            Page::Payment => "payment",
            Page::Profile => "profile",
            Page::Security => "security",
        }
    }

    /// Screen name shown in the screen navigator
    pub fn name(&self) -> &'static str {
        match self {
            Page::Home => "Homepage",
            Page::Courses => "Course Listing",
            Page::CourseDetail => "Course Detail",
            Page::Lesson => "Lesson Viewer",
            Page::CodeEditor => "Code Editor",
            Page::Quiz => "Quiz",
            Page::Dashboard => "Dashboard",
            Page::Payment => "Payment",
            Page::Profile => "Profile",
            Page::Security => "Security",
        }
    }

    /// One-line summary shown in the screen navigator
    pub fn description(&self) -> &'static str {
        match self {
            Page::Home => "Featured courses & learning paths",
            Page::Courses => "Browse all courses with filters",
            Page::CourseDetail => "Course info & curriculum",
            Page::Lesson => "Video player & lesson content",
            Page::CodeEditor => "Write and run code",
            Page::Quiz => "Test your knowledge",
            Page::Dashboard => "Learning progress & stats",
            Page::Payment => "Course checkout",
            Page::Profile => "Account settings",
            Page::Security => "Device management & 2FA",
        }
    }

    /// Position within [`Page::ALL`]
    pub fn index(&self) -> usize {
        Page::ALL
            .iter()
            .position(|p| p == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Page::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::unknown_page(s))
    }
}
