//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header: logo, role nav items, CTA, profile, badge
    pub header: Rect,

    /// Mounted page
    pub body: Rect,

    /// Page action hints (zero height when hints are off)
    pub hints: Rect,

    /// Footer links and copyright
    pub footer: Rect,
}

/// Create the main screen layout
///
/// The body keeps at least three rows; chrome gives way first on very short
/// terminals.
pub fn create(area: Rect, show_hints: bool) -> ScreenAreas {
    let hints_height = if show_hints { 1 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(3),            // Header (glass container)
        Constraint::Min(3),               // Body
        Constraint::Length(hints_height), // Hint line
        Constraint::Length(1),            // Footer
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        hints: chunks[2],
        footer: chunks[3],
    }
}
