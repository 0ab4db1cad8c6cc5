//! Tab strip for tabbed pages

use campus_core::TabSet;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Tabs, Widget},
};

use crate::theme::styles;

/// One-row tab strip with the selected tab highlighted
pub struct TabStrip {
    labels: Vec<&'static str>,
    selected: usize,
}

impl TabStrip {
    /// Strip for every tab in `T`, selecting `current`
    pub fn new<T: TabSet>(current: T) -> Self {
        Self {
            labels: T::ALL.iter().map(|t| t.label()).collect(),
            selected: current.index(),
        }
    }
}

impl Widget for TabStrip {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = self
            .labels
            .iter()
            .map(|label| Line::from(format!(" {label} ")))
            .collect();

        Tabs::new(titles)
            .select(self.selected)
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider("│")
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use campus_core::CourseTab;

    #[test]
    fn test_tab_strip_lists_all_tabs() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(TabStrip::new(CourseTab::Reviews), term.area());

        for label in ["Overview", "Curriculum", "Instructor", "Reviews"] {
            assert!(term.buffer_contains(label));
        }
    }
}
