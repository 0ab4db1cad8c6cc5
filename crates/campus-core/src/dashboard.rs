//! Dashboard literals for each role variant
//!
//! The student dashboard has no tabs. The lecturer and admin dashboards each
//! cycle through their own [`TabSet`](crate::tabs::TabSet).

use crate::tabs::tab_set;

// ─────────────────────────────────────────────────────────────────
// Student
// ─────────────────────────────────────────────────────────────────

pub mod student {
    pub const GREETING: &str = "Welcome back, Alex!";
    pub const SUBTITLE: &str = "Continue your learning journey";

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CurrentCourse {
        pub title: &'static str,
        pub instructor: &'static str,
        pub progress: u16,
        pub current_lesson: &'static str,
        pub total_lessons: u32,
        pub completed_lessons: u32,
        pub next_lesson: &'static str,
    }

    pub const CURRENT_COURSE: CurrentCourse = CurrentCourse {
        title: "Complete JavaScript Masterclass",
        instructor: "Sarah Johnson",
        progress: 68,
        current_lesson: "Async/Await & Promises",
        total_lessons: 42,
        completed_lessons: 28,
        next_lesson: "Error Handling in JavaScript",
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Stats {
        pub total_xp: u32,
        pub streak: u32,
        pub completed_courses: u32,
        pub total_hours: u32,
    }

    pub const STATS: Stats = Stats {
        total_xp: 3450,
        streak: 7,
        completed_courses: 3,
        total_hours: 24,
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Badge {
        pub name: &'static str,
        pub earned: bool,
    }

    pub static BADGES: [Badge; 6] = [
        Badge { name: "Fast Learner", earned: true },
        Badge { name: "7 Day Streak", earned: true },
        Badge { name: "JavaScript Pro", earned: true },
        Badge { name: "Code Master", earned: false },
        Badge { name: "30 Day Streak", earned: false },
        Badge { name: "Team Player", earned: false },
    ];

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Recommendation {
        pub title: &'static str,
        pub instructor: &'static str,
        pub rating: f32,
        pub duration: &'static str,
        pub level: &'static str,
    }

    pub static RECOMMENDED: [Recommendation; 3] = [
        Recommendation {
            title: "Advanced React Patterns",
            instructor: "Emma Wilson",
            rating: 4.8,
            duration: "12h",
            level: "Advanced",
        },
        Recommendation {
            title: "Node.js Backend Development",
            instructor: "Michael Chen",
            rating: 4.9,
            duration: "18h",
            level: "Intermediate",
        },
        Recommendation {
            title: "TypeScript Fundamentals",
            instructor: "David Park",
            rating: 4.7,
            duration: "8h",
            level: "Beginner",
        },
    ];

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ActivityKind {
        Completed,
        Started,
        Badge,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Activity {
        pub kind: ActivityKind,
        pub title: &'static str,
        pub time: &'static str,
    }

    pub static RECENT_ACTIVITY: [Activity; 4] = [
        Activity {
            kind: ActivityKind::Completed,
            title: "JavaScript Arrays & Methods",
            time: "2 hours ago",
        },
        Activity {
            kind: ActivityKind::Started,
            title: "Async Programming Module",
            time: "1 day ago",
        },
        Activity {
            kind: ActivityKind::Badge,
            title: "Earned \"7 Day Streak\" badge",
            time: "1 day ago",
        },
        Activity {
            kind: ActivityKind::Completed,
            title: "DOM Manipulation Quiz",
            time: "2 days ago",
        },
    ];
}

// ─────────────────────────────────────────────────────────────────
// Lecturer
// ─────────────────────────────────────────────────────────────────

tab_set!(
    /// Lecturer dashboard sections
    LecturerTab {
        Overview => "Overview",
        Courses => "My Courses",
        Students => "Students",
    }
);

pub mod lecturer {
    pub const TITLE: &str = "Lecturer Dashboard";
    pub const SUBTITLE: &str = "Manage your courses and track your teaching impact";

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Stats {
        pub total_students: u32,
        pub total_courses: u32,
        pub avg_rating: f32,
        pub total_revenue: u32,
        pub monthly_revenue: u32,
        pub new_students_this_month: u32,
    }

    pub const STATS: Stats = Stats {
        total_students: 12_453,
        total_courses: 8,
        avg_rating: 4.8,
        total_revenue: 45_280,
        monthly_revenue: 8_420,
        new_students_this_month: 342,
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum CourseStatus {
        Published,
        Draft,
    }

    impl CourseStatus {
        pub fn label(&self) -> &'static str {
            match self {
                CourseStatus::Published => "Published",
                CourseStatus::Draft => "Draft",
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct TaughtCourse {
        pub title: &'static str,
        pub status: CourseStatus,
        pub students: u32,
        pub rating: f32,
        pub revenue: u32,
        pub lessons: u32,
        pub last_updated: &'static str,
    }

    pub static COURSES: [TaughtCourse; 4] = [
        TaughtCourse {
            title: "Complete JavaScript Masterclass",
            status: CourseStatus::Published,
            students: 4523,
            rating: 4.8,
            revenue: 18_250,
            lessons: 42,
            last_updated: "2 days ago",
        },
        TaughtCourse {
            title: "Advanced React Patterns",
            status: CourseStatus::Published,
            students: 3210,
            rating: 4.9,
            revenue: 15_840,
            lessons: 36,
            last_updated: "1 week ago",
        },
        TaughtCourse {
            title: "Node.js Backend Development",
            status: CourseStatus::Published,
            students: 2890,
            rating: 4.7,
            revenue: 8_670,
            lessons: 28,
            last_updated: "3 days ago",
        },
        TaughtCourse {
            title: "TypeScript Fundamentals",
            status: CourseStatus::Draft,
            students: 0,
            rating: 0.0,
            revenue: 0,
            lessons: 12,
            last_updated: "Yesterday",
        },
    ];

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Enrollment {
        pub name: &'static str,
        pub course: &'static str,
        pub enrolled: &'static str,
        pub progress: u16,
    }

    pub static RECENT_STUDENTS: [Enrollment; 4] = [
        Enrollment {
            name: "Alice Johnson",
            course: "JavaScript Masterclass",
            enrolled: "2 hours ago",
            progress: 15,
        },
        Enrollment {
            name: "Bob Smith",
            course: "React Patterns",
            enrolled: "5 hours ago",
            progress: 8,
        },
        Enrollment {
            name: "Carol Davis",
            course: "Node.js Backend",
            enrolled: "1 day ago",
            progress: 22,
        },
        Enrollment {
            name: "David Lee",
            course: "JavaScript Masterclass",
            enrolled: "1 day ago",
            progress: 5,
        },
    ];

    /// (month, revenue, new students)
    pub static MONTHLY: [(&str, u64, u64); 6] = [
        ("Jan", 3200, 120),
        ("Feb", 4100, 156),
        ("Mar", 5300, 198),
        ("Apr", 6800, 245),
        ("May", 7200, 278),
        ("Jun", 8420, 342),
    ];
}

// ─────────────────────────────────────────────────────────────────
// Admin
// ─────────────────────────────────────────────────────────────────

tab_set!(
    /// Admin dashboard sections
    AdminTab {
        Overview => "Overview",
        Users => "Users",
        Courses => "Courses",
        Security => "Security",
    }
);

pub mod admin {
    pub const TITLE: &str = "Admin Dashboard";
    pub const SUBTITLE: &str = "System overview and management";

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct SystemStats {
        pub total_users: u32,
        pub active_users: u32,
        pub total_lecturers: u32,
        pub total_courses: u32,
        pub pending_approvals: u32,
        pub total_revenue: u32,
        pub monthly_revenue: u32,
        pub system_health: f32,
        pub active_devices: u32,
    }

    pub const SYSTEM_STATS: SystemStats = SystemStats {
        total_users: 125_483,
        active_users: 98_234,
        total_lecturers: 1_256,
        total_courses: 3_428,
        pending_approvals: 23,
        total_revenue: 1_245_680,
        monthly_revenue: 89_420,
        system_health: 99.8,
        active_devices: 245_678,
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum UserStatus {
        Active,
        Suspended,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ManagedUser {
        pub name: &'static str,
        pub email: &'static str,
        pub role: &'static str,
        pub status: UserStatus,
        pub joined: &'static str,
        pub last_active: &'static str,
        pub courses: u32,
        pub revenue: u32,
    }

    pub static USERS: [ManagedUser; 5] = [
        ManagedUser {
            name: "Sarah Johnson",
            email: "sarah.j@email.com",
            role: "lecturer",
            status: UserStatus::Active,
            joined: "2023-01-15",
            last_active: "2 hours ago",
            courses: 8,
            revenue: 45_280,
        },
        ManagedUser {
            name: "Michael Chen",
            email: "michael.c@email.com",
            role: "lecturer",
            status: UserStatus::Active,
            joined: "2023-03-22",
            last_active: "1 day ago",
            courses: 5,
            revenue: 28_900,
        },
        ManagedUser {
            name: "Alex Thompson",
            email: "alex.t@email.com",
            role: "student",
            status: UserStatus::Active,
            joined: "2024-02-10",
            last_active: "5 mins ago",
            courses: 3,
            revenue: 0,
        },
        ManagedUser {
            name: "Emma Wilson",
            email: "emma.w@email.com",
            role: "lecturer",
            status: UserStatus::Suspended,
            joined: "2023-06-08",
            last_active: "2 weeks ago",
            courses: 12,
            revenue: 62_150,
        },
        ManagedUser {
            name: "David Park",
            email: "david.p@email.com",
            role: "student",
            status: UserStatus::Active,
            joined: "2024-01-05",
            last_active: "Yesterday",
            courses: 5,
            revenue: 0,
        },
    ];

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PendingCourse {
        pub title: &'static str,
        pub lecturer: &'static str,
        pub submitted: &'static str,
        pub lessons: u32,
        pub duration: &'static str,
    }

    pub static PENDING_COURSES: [PendingCourse; 3] = [
        PendingCourse {
            title: "Advanced Machine Learning",
            lecturer: "Dr. James Wilson",
            submitted: "2 days ago",
            lessons: 45,
            duration: "28h",
        },
        PendingCourse {
            title: "iOS Development with Swift",
            lecturer: "Lisa Chang",
            submitted: "5 hours ago",
            lessons: 32,
            duration: "18h",
        },
        PendingCourse {
            title: "Blockchain Fundamentals",
            lecturer: "Robert Martinez",
            submitted: "1 week ago",
            lessons: 24,
            duration: "12h",
        },
    ];

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub enum AlertSeverity {
        Info,
        Warning,
        Critical,
    }

    impl AlertSeverity {
        pub fn label(&self) -> &'static str {
            match self {
                AlertSeverity::Info => "info",
                AlertSeverity::Warning => "warning",
                AlertSeverity::Critical => "critical",
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SecurityAlert {
        pub severity: AlertSeverity,
        pub message: &'static str,
        pub user: &'static str,
        pub time: &'static str,
    }

    pub static SECURITY_ALERTS: [SecurityAlert; 3] = [
        SecurityAlert {
            severity: AlertSeverity::Warning,
            message: "Multiple failed login attempts detected",
            user: "john.doe@email.com",
            time: "15 mins ago",
        },
        SecurityAlert {
            severity: AlertSeverity::Info,
            message: "New device logged in",
            user: "sarah.j@email.com",
            time: "1 hour ago",
        },
        SecurityAlert {
            severity: AlertSeverity::Critical,
            message: "Suspicious activity detected",
            user: "unknown@suspicious.com",
            time: "3 hours ago",
        },
    ];

    /// (action, user, time)
    pub static RECENT_ACTIVITY: [(&str, &str, &str); 4] = [
        ("New user registered", "alex.t@email.com", "5 mins ago"),
        ("Course published", "sarah.j@email.com", "2 hours ago"),
        ("Payment processed", "michael.c@email.com", "3 hours ago"),
        ("User suspended", "emma.w@email.com", "1 day ago"),
    ];

    /// (label, value) rows in the security overview card
    pub static SECURITY_OVERVIEW: [(&str, &str); 3] = [
        ("SSL Certificate", "Valid"),
        ("2FA Enabled Users", "78%"),
        ("Active Devices", "245,678"),
    ];
}

/// Format an integer with thousands separators
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::TabSet;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(12_453), "12,453");
        assert_eq!(group_thousands(1_245_680), "1,245,680");
    }

    #[test]
    fn test_student_progress_is_consistent() {
        let c = student::CURRENT_COURSE;
        assert!(c.completed_lessons <= c.total_lessons);
        assert_eq!(student::BADGES.iter().filter(|b| b.earned).count(), 3);
    }

    #[test]
    fn test_lecturer_has_one_draft() {
        let drafts = lecturer::COURSES
            .iter()
            .filter(|c| c.status == lecturer::CourseStatus::Draft)
            .count();
        assert_eq!(drafts, 1);
    }

    #[test]
    fn test_admin_has_one_suspended_user() {
        let suspended: Vec<_> = admin::USERS
            .iter()
            .filter(|u| u.status == admin::UserStatus::Suspended)
            .map(|u| u.name)
            .collect();
        assert_eq!(suspended, ["Emma Wilson"]);
    }

    #[test]
    fn test_dashboard_tab_sets() {
        assert_eq!(LecturerTab::ALL.len(), 3);
        assert_eq!(AdminTab::ALL.len(), 4);
        assert_eq!(AdminTab::Security.next(), AdminTab::Overview);
    }
}
