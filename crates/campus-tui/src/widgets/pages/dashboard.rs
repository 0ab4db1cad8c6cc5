//! Role dashboards
//!
//! The student variant is a single screen; lecturer and admin variants each
//! render the pane for their selected tab.

use campus_core::dashboard::{admin, group_thousands, lecturer, student};
use campus_core::{AdminTab, LecturerTab};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Cell, Paragraph, Row, Table, Widget},
};

use super::{card, heading, progress_bar, stat_row};
use crate::theme::styles;
use crate::widgets::TabStrip;

fn money(value: u32) -> String {
    format!("${}", group_thousands(u64::from(value)))
}

fn count(value: u32) -> String {
    group_thousands(u64::from(value))
}

fn table_header(labels: &[&'static str]) -> Row<'static> {
    Row::new(labels.to_vec()).style(styles::text_muted().add_modifier(Modifier::BOLD))
}

// ─────────────────────────────────────────────────────────
// Student
// ─────────────────────────────────────────────────────────

pub struct StudentDashboardView;

impl Widget for StudentDashboardView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body = heading(student::GREETING, student::SUBTITLE, area, buf);
        let stats = student::STATS;
        let xp = count(stats.total_xp);
        let streak = format!("{} days", stats.streak);
        let completed = stats.completed_courses.to_string();
        let hours = format!("{}h", stats.total_hours);

        let [stats_area, main] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(body);
        Paragraph::new(stat_row(&[
            (xp.as_str(), "Total XP"),
            (streak.as_str(), "Day Streak"),
            (completed.as_str(), "Courses Completed"),
            (hours.as_str(), "Hours Learned"),
        ]))
        .render(stats_area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(main);
        let [current, recommended] =
            Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).areas(left);
        let [badges, activity] =
            Layout::vertical([Constraint::Length(8), Constraint::Min(0)]).areas(right);

        let course = student::CURRENT_COURSE;
        card(
            " Continue Learning ",
            vec![
                Line::from(Span::styled(format!(" {}", course.title), styles::title())),
                Line::from(vec![
                    Span::raw(" "),
                    progress_bar(course.progress, 20),
                    Span::styled(
                        format!(
                            " {}% • {}/{} lessons",
                            course.progress, course.completed_lessons, course.total_lessons
                        ),
                        styles::text_muted(),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(" Current: {}", course.current_lesson),
                    styles::text_secondary(),
                )),
                Line::from(Span::styled(
                    format!(" Next: {}", course.next_lesson),
                    styles::text_muted(),
                )),
            ],
            current,
            buf,
        );

        let recs = student::RECOMMENDED
            .iter()
            .map(|rec| {
                Line::from(vec![
                    Span::styled(format!(" {} ", rec.title), styles::text_primary()),
                    Span::styled(
                        format!(
                            "{} • ★ {:.1} • {} • {}",
                            rec.instructor, rec.rating, rec.duration, rec.level
                        ),
                        styles::text_muted(),
                    ),
                ])
            })
            .collect();
        card(" Recommended for You ", recs, recommended, buf);

        let badge_lines = student::BADGES
            .iter()
            .map(|badge| {
                let (icon, style) = if badge.earned {
                    ("★", styles::status_yellow())
                } else {
                    ("☆", styles::text_muted())
                };
                Line::from(vec![
                    Span::styled(format!(" {icon} "), style),
                    Span::styled(badge.name, style),
                ])
            })
            .collect();
        card(" Badges ", badge_lines, badges, buf);

        let activity_lines = student::RECENT_ACTIVITY
            .iter()
            .map(|item| {
                let icon = match item.kind {
                    student::ActivityKind::Completed => "✓",
                    student::ActivityKind::Started => "▶",
                    student::ActivityKind::Badge => "★",
                };
                Line::from(vec![
                    Span::styled(format!(" {icon} "), styles::accent()),
                    Span::styled(item.title, styles::text_primary()),
                    Span::styled(format!("  {}", item.time), styles::text_muted()),
                ])
            })
            .collect();
        card(" Recent Activity ", activity_lines, activity, buf);
    }
}

// ─────────────────────────────────────────────────────────
// Lecturer
// ─────────────────────────────────────────────────────────

pub struct LecturerDashboardView {
    tab: LecturerTab,
}

impl LecturerDashboardView {
    pub fn new(tab: LecturerTab) -> Self {
        Self { tab }
    }
}

impl Widget for LecturerDashboardView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body = heading(lecturer::TITLE, lecturer::SUBTITLE, area, buf);
        let [tabs, pane] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(body);
        TabStrip::new(self.tab).render(tabs, buf);

        match self.tab {
            LecturerTab::Overview => lecturer_overview(pane, buf),
            LecturerTab::Courses => lecturer_courses(pane, buf),
            LecturerTab::Students => lecturer_students(pane, buf),
        }
    }
}

fn lecturer_overview(area: Rect, buf: &mut Buffer) {
    let stats = lecturer::STATS;
    let students = count(stats.total_students);
    let courses = stats.total_courses.to_string();
    let rating = format!("{:.1}", stats.avg_rating);
    let revenue = money(stats.total_revenue);
    let monthly = format!(
        "{} this month • +{} new students",
        money(stats.monthly_revenue),
        stats.new_students_this_month
    );

    let [summary, chart] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
    Paragraph::new(vec![
        stat_row(&[
            (students.as_str(), "Students"),
            (courses.as_str(), "Courses"),
            (rating.as_str(), "Avg Rating"),
            (revenue.as_str(), "Revenue"),
        ]),
        Line::from(Span::styled(format!(" {monthly}"), styles::status_green())),
    ])
    .render(summary, buf);

    let bars: Vec<Bar> = lecturer::MONTHLY
        .iter()
        .map(|(month, revenue, _)| {
            Bar::default()
                .value(*revenue)
                .label(Line::from(*month))
                .text_value(format!("${}", group_thousands(*revenue)))
        })
        .collect();
    BarChart::default()
        .block(styles::card(" Monthly Revenue "))
        .data(BarGroup::default().bars(&bars))
        .bar_width(8)
        .bar_gap(2)
        .bar_style(styles::accent())
        .value_style(styles::focused_selected())
        .label_style(styles::text_secondary())
        .render(chart, buf);
}

fn lecturer_courses(area: Rect, buf: &mut Buffer) {
    let rows = lecturer::COURSES.iter().map(|course| {
        let status_style = match course.status {
            lecturer::CourseStatus::Published => styles::status_green(),
            lecturer::CourseStatus::Draft => styles::status_yellow(),
        };
        let rating = if course.rating > 0.0 {
            format!("★ {:.1}", course.rating)
        } else {
            "-".to_string()
        };
        Row::new([
            Cell::from(course.title),
            Cell::from(course.status.label()).style(status_style),
            Cell::from(count(course.students)),
            Cell::from(rating),
            Cell::from(money(course.revenue)),
            Cell::from(course.lessons.to_string()),
            Cell::from(course.last_updated),
        ])
        .style(styles::text_primary())
    });

    Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Length(11),
        ],
    )
    .header(table_header(&[
        "Course", "Status", "Students", "Rating", "Revenue", "Lessons", "Updated",
    ]))
    .block(styles::card(" My Courses "))
    .render(area, buf);
}

fn lecturer_students(area: Rect, buf: &mut Buffer) {
    let lines = lecturer::RECENT_STUDENTS
        .iter()
        .map(|enrollment| {
            Line::from(vec![
                Span::styled(format!(" {:<16}", enrollment.name), styles::text_primary()),
                Span::styled(format!("{:<24}", enrollment.course), styles::text_secondary()),
                progress_bar(enrollment.progress, 10),
                Span::styled(
                    format!(" {:>3}%  {}", enrollment.progress, enrollment.enrolled),
                    styles::text_muted(),
                ),
            ])
        })
        .collect();
    card(" Recent Enrollments ", lines, area, buf);
}

// ─────────────────────────────────────────────────────────
// Admin
// ─────────────────────────────────────────────────────────

pub struct AdminDashboardView {
    tab: AdminTab,
}

impl AdminDashboardView {
    pub fn new(tab: AdminTab) -> Self {
        Self { tab }
    }
}

impl Widget for AdminDashboardView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body = heading(admin::TITLE, admin::SUBTITLE, area, buf);
        let [tabs, pane] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(body);
        TabStrip::new(self.tab).render(tabs, buf);

        match self.tab {
            AdminTab::Overview => admin_overview(pane, buf),
            AdminTab::Users => admin_users(pane, buf),
            AdminTab::Courses => admin_courses(pane, buf),
            AdminTab::Security => admin_security(pane, buf),
        }
    }
}

fn admin_overview(area: Rect, buf: &mut Buffer) {
    let stats = admin::SYSTEM_STATS;
    let users = count(stats.total_users);
    let active = count(stats.active_users);
    let lecturers = count(stats.total_lecturers);
    let courses = count(stats.total_courses);
    let revenue = money(stats.total_revenue);
    let health = format!("{:.1}%", stats.system_health);

    let [summary, activity] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    Paragraph::new(vec![
        stat_row(&[
            (users.as_str(), "Users"),
            (active.as_str(), "Active"),
            (lecturers.as_str(), "Lecturers"),
            (courses.as_str(), "Courses"),
        ]),
        stat_row(&[(revenue.as_str(), "Revenue"), (health.as_str(), "System Health")]),
        Line::from(Span::styled(
            format!(
                " {} this month • {} pending approvals",
                money(stats.monthly_revenue),
                stats.pending_approvals
            ),
            styles::status_yellow(),
        )),
    ])
    .render(summary, buf);

    let lines = admin::RECENT_ACTIVITY
        .iter()
        .map(|(action, user, time)| {
            Line::from(vec![
                Span::styled(format!(" {action:<20}"), styles::text_primary()),
                Span::styled(format!("{user:<24}"), styles::text_secondary()),
                Span::styled(*time, styles::text_muted()),
            ])
        })
        .collect();
    card(" Recent Activity ", lines, activity, buf);
}

fn admin_users(area: Rect, buf: &mut Buffer) {
    let rows = admin::USERS.iter().map(|user| {
        let (status, style) = match user.status {
            admin::UserStatus::Active => ("Active", styles::status_green()),
            admin::UserStatus::Suspended => ("Suspended", styles::status_red()),
        };
        Row::new([
            Cell::from(user.name),
            Cell::from(user.email),
            Cell::from(user.role),
            Cell::from(status).style(style),
            Cell::from(user.joined),
            Cell::from(user.last_active),
        ])
        .style(styles::text_primary())
    });

    Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Min(20),
            Constraint::Length(9),
            Constraint::Length(10),
            Constraint::Length(11),
            Constraint::Length(12),
        ],
    )
    .header(table_header(&["Name", "Email", "Role", "Status", "Joined", "Last Active"]))
    .block(styles::card(" Users "))
    .render(area, buf);
}

fn admin_courses(area: Rect, buf: &mut Buffer) {
    let mut lines = vec![Line::from(Span::styled(
        format!(" {} courses awaiting approval", admin::PENDING_COURSES.len()),
        styles::status_yellow(),
    ))];
    for course in admin::PENDING_COURSES.iter() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", course.title), styles::title()),
            Span::styled(format!("by {}", course.lecturer), styles::text_secondary()),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "   {} lessons • {} • submitted {}",
                course.lessons, course.duration, course.submitted
            ),
            styles::text_muted(),
        )));
    }
    card(" Pending Courses ", lines, area, buf);
}

fn admin_security(area: Rect, buf: &mut Buffer) {
    let [alerts, overview] =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).areas(area);

    let alert_lines = admin::SECURITY_ALERTS
        .iter()
        .flat_map(|alert| {
            let style = match alert.severity {
                admin::AlertSeverity::Info => styles::accent(),
                admin::AlertSeverity::Warning => styles::status_yellow(),
                admin::AlertSeverity::Critical => styles::status_red(),
            };
            [
                Line::from(vec![
                    Span::styled(format!(" [{}] ", alert.severity.label()), style),
                    Span::styled(alert.message, styles::text_primary()),
                ]),
                Line::from(Span::styled(
                    format!("   {} • {}", alert.user, alert.time),
                    styles::text_muted(),
                )),
            ]
        })
        .collect();
    card(" Security Alerts ", alert_lines, alerts, buf);

    let overview_lines = admin::SECURITY_OVERVIEW
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!(" {label}: "), styles::text_muted()),
                Span::styled(*value, styles::status_green()),
            ])
        })
        .collect();
    card(" Overview ", overview_lines, overview, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render<W: Widget>(widget: W) -> TestTerminal {
        let mut term = TestTerminal::with_size(120, 32);
        let area = term.area();
        term.render_widget(widget, area);
        term
    }

    #[test]
    fn test_student_dashboard() {
        let term = render(StudentDashboardView);
        assert!(term.buffer_contains("Welcome back, Alex!"));
        assert!(term.buffer_contains("3,450"));
        assert!(term.buffer_contains("68% • 28/42 lessons"));
        assert!(term.buffer_contains("Fast Learner"));
    }

    #[test]
    fn test_lecturer_tabs() {
        let term = render(LecturerDashboardView::new(LecturerTab::Overview));
        assert!(term.buffer_contains("Lecturer Dashboard"));
        assert!(term.buffer_contains("12,453"));
        assert!(term.buffer_contains("Monthly Revenue"));

        let term = render(LecturerDashboardView::new(LecturerTab::Courses));
        assert!(term.buffer_contains("TypeScript Fundamentals"));
        assert!(term.buffer_contains("Draft"));

        let term = render(LecturerDashboardView::new(LecturerTab::Students));
        assert!(term.buffer_contains("Alice Johnson"));
    }

    #[test]
    fn test_admin_tabs() {
        let term = render(AdminDashboardView::new(AdminTab::Overview));
        assert!(term.buffer_contains("Admin Dashboard"));
        assert!(term.buffer_contains("125,483"));

        let term = render(AdminDashboardView::new(AdminTab::Users));
        assert!(term.buffer_contains("Suspended"));

        let term = render(AdminDashboardView::new(AdminTab::Courses));
        assert!(term.buffer_contains("3 courses awaiting approval"));

        let term = render(AdminDashboardView::new(AdminTab::Security));
        assert!(term.buffer_contains("Suspicious activity detected"));
    }
}
