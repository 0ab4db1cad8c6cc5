//! Static navigation tables
//!
//! Every lookup here is total over its closed input domain: each role has
//! exactly one chrome row and each page has exactly one link table.

use crate::types::{Page, Role};

/// A (label, target page) pair rendered as a clickable link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: Page,
}

impl NavItem {
    pub const fn new(label: &'static str, target: Page) -> Self {
        Self { label, target }
    }
}

/// Role-specific header content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleChrome {
    /// Main navigation links, left to right
    pub nav_items: &'static [NavItem],
    /// Primary call-to-action button
    pub cta: NavItem,
    /// Role badge label
    pub badge: &'static str,
}

const STUDENT_NAV: [NavItem; 4] = [
    NavItem::new("Courses", Page::Courses),
    NavItem::new("My Learning", Page::Dashboard),
    NavItem::new("Exercises", Page::CodeEditor),
    NavItem::new("Progress", Page::Dashboard),
];

const LECTURER_NAV: [NavItem; 5] = [
    NavItem::new("Dashboard", Page::Dashboard),
    NavItem::new("My Courses", Page::Courses),
    NavItem::new("Students", Page::Dashboard),
    NavItem::new("Analytics", Page::Dashboard),
    NavItem::new("Earnings", Page::Payment),
];

const ADMIN_NAV: [NavItem; 5] = [
    NavItem::new("Dashboard", Page::Dashboard),
    NavItem::new("Users", Page::Dashboard),
    NavItem::new("Courses", Page::Courses),
    NavItem::new("Payments", Page::Payment),
    NavItem::new("Security", Page::Security),
];

static STUDENT_CHROME: RoleChrome = RoleChrome {
    nav_items: &STUDENT_NAV,
    cta: NavItem::new("Browse Courses", Page::Courses),
    badge: "Student",
};

static LECTURER_CHROME: RoleChrome = RoleChrome {
    nav_items: &LECTURER_NAV,
    cta: NavItem::new("Create Course", Page::Courses),
    badge: "Lecturer",
};

static ADMIN_CHROME: RoleChrome = RoleChrome {
    nav_items: &ADMIN_NAV,
    cta: NavItem::new("System Settings", Page::Security),
    badge: "Admin",
};

/// Look up the header row for a role
pub fn role_chrome(role: Role) -> &'static RoleChrome {
    match role {
        Role::Student => &STUDENT_CHROME,
        Role::Lecturer => &LECTURER_CHROME,
        Role::Admin => &ADMIN_CHROME,
    }
}

/// Logo link in the header
pub const HOME_LINK: NavItem = NavItem::new("UniCode.com", Page::Home);

/// Account button in the header
pub const PROFILE_LINK: NavItem = NavItem::new("Profile", Page::Profile);

/// Navigating links in the footer; the remaining footer text is static
pub const FOOTER_LINKS: [NavItem; 2] = [
    NavItem::new("Browse All", Page::Courses),
    NavItem::new("Learning Paths", Page::Dashboard),
];

/// A designated page action that navigates elsewhere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    /// Key that triggers the link while the page is focused
    pub key: char,
    pub label: &'static str,
    pub target: Page,
}

const fn link(key: char, label: &'static str, target: Page) -> PageLink {
    PageLink { key, label, target }
}

const HOME_LINKS: [PageLink; 3] = [
    link('c', "Browse Courses", Page::Courses),
    link('f', "Featured Course", Page::CourseDetail),
    link('d', "Learning Paths", Page::Dashboard),
];

const COURSES_LINKS: [PageLink; 0] = [];

const COURSE_DETAIL_LINKS: [PageLink; 2] = [
    link('e', "Enroll Now", Page::Payment),
    link('v', "Preview Lesson", Page::Lesson),
];

const LESSON_LINKS: [PageLink; 2] = [
    link('p', "Practice Exercise", Page::CodeEditor),
    link('t', "Take Quiz", Page::Quiz),
];

const CODE_EDITOR_LINKS: [PageLink; 2] = [
    link('b', "Back to Lesson", Page::Lesson),
    link('s', "Submit & Continue", Page::Quiz),
];

const QUIZ_LINKS: [PageLink; 1] = [link('c', "Continue Learning", Page::Lesson)];

const STUDENT_DASHBOARD_LINKS: [PageLink; 3] = [
    link('l', "Continue Lesson", Page::Lesson),
    link('v', "View Course", Page::CourseDetail),
    link('a', "All Courses", Page::Courses),
];

const LECTURER_DASHBOARD_LINKS: [PageLink; 3] = [
    link('n', "New Course", Page::Courses),
    link('v', "View Course", Page::CourseDetail),
    link('r', "Refresh", Page::Dashboard),
];

const ADMIN_DASHBOARD_LINKS: [PageLink; 3] = [
    link('s', "Security Center", Page::Security),
    link('u', "User Profile", Page::Profile),
    link('r', "Review Course", Page::CourseDetail),
];

const PAYMENT_LINKS: [PageLink; 1] = [link('b', "Back to Course", Page::CourseDetail)];

const PROFILE_LINKS: [PageLink; 1] = [link('s', "Security Settings", Page::Security)];

const SECURITY_LINKS: [PageLink; 1] = [link('b', "Back to Profile", Page::Profile)];

/// Designated navigation actions for a page
///
/// The dashboard's links depend on which role variant is mounted.
pub fn page_links(page: Page, role: Role) -> &'static [PageLink] {
    match page {
        Page::Home => &HOME_LINKS,
        Page::Courses => &COURSES_LINKS,
        Page::CourseDetail => &COURSE_DETAIL_LINKS,
        Page::Lesson => &LESSON_LINKS,
        Page::CodeEditor => &CODE_EDITOR_LINKS,
        Page::Quiz => &QUIZ_LINKS,
        Page::Dashboard => match role {
            Role::Student => &STUDENT_DASHBOARD_LINKS,
            Role::Lecturer => &LECTURER_DASHBOARD_LINKS,
            Role::Admin => &ADMIN_DASHBOARD_LINKS,
        },
        Page::Payment => &PAYMENT_LINKS,
        Page::Profile => &PROFILE_LINKS,
        Page::Security => &SECURITY_LINKS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_student_chrome_row() {
        let chrome = role_chrome(Role::Student);
        let labels: Vec<_> = chrome.nav_items.iter().map(|i| i.label).collect();
        assert_eq!(labels, ["Courses", "My Learning", "Exercises", "Progress"]);
        assert_eq!(chrome.cta, NavItem::new("Browse Courses", Page::Courses));
        assert_eq!(chrome.badge, "Student");
    }

    #[test]
    fn test_lecturer_chrome_row() {
        let chrome = role_chrome(Role::Lecturer);
        assert_eq!(chrome.nav_items.len(), 5);
        assert_eq!(chrome.nav_items[4], NavItem::new("Earnings", Page::Payment));
        assert_eq!(chrome.cta, NavItem::new("Create Course", Page::Courses));
        assert_eq!(chrome.badge, "Lecturer");
    }

    #[test]
    fn test_admin_chrome_row() {
        let chrome = role_chrome(Role::Admin);
        assert_eq!(chrome.nav_items[4], NavItem::new("Security", Page::Security));
        assert_eq!(chrome.cta, NavItem::new("System Settings", Page::Security));
        assert_eq!(chrome.badge, "Admin");
    }

    #[test]
    fn test_every_role_has_distinct_badge() {
        let badges: HashSet<_> = Role::ALL.iter().map(|r| role_chrome(*r).badge).collect();
        assert_eq!(badges.len(), Role::ALL.len());
    }

    #[test]
    fn test_page_link_keys_are_unique_per_page() {
        for role in Role::ALL {
            for page in Page::ALL {
                let links = page_links(page, role);
                let keys: HashSet<_> = links.iter().map(|l| l.key).collect();
                assert_eq!(keys.len(), links.len(), "duplicate key on {page} ({role})");
            }
        }
    }

    #[test]
    fn test_dashboard_links_follow_role() {
        assert_eq!(page_links(Page::Dashboard, Role::Student)[0].target, Page::Lesson);
        assert_eq!(page_links(Page::Dashboard, Role::Admin)[0].target, Page::Security);
        assert_eq!(page_links(Page::Home, Role::Admin), page_links(Page::Home, Role::Student));
    }
}
