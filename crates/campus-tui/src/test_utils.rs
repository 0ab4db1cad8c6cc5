//! Rendering helpers for widget and view tests

use campus_app::AppState;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Terminal;

/// Full-size terminal used by most rendering tests
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// A `TestBackend` terminal with text assertions
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Narrow terminal for layout edge cases
    pub fn compact() -> Self {
        Self::with_size(40, 12)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        // TestBackend never fails to construct a terminal
        let terminal = Terminal::new(backend).expect("test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.backend().buffer().area;
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("draw widget");
    }

    /// Render the full application frame
    pub fn draw_app(&mut self, state: &AppState) {
        self.terminal
            .draw(|frame| crate::render::view(frame, state))
            .expect("draw app");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Buffer contents, one line per row
    pub fn content(&self) -> String {
        let buf = self.buffer();
        let area = buf.area;
        let mut out = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    out.push_str(cell.symbol());
                }
            }
            out.push('\n');
        }
        out
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}
