//! Message types for the application (TEA pattern)

use campus_core::{Language, Level, Page, Role};

use crate::input_key::InputKey;

#[cfg(feature = "dev-overlays")]
use crate::overlays::Panel;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Root Transitions
    // ─────────────────────────────────────────────────────────
    /// Show a page
    Navigate(Page),
    /// Switch the active role
    SetRole(Role),

    // ─────────────────────────────────────────────────────────
    // Chrome
    // ─────────────────────────────────────────────────────────
    /// Enter the "go to" prefix
    EnterGoto,
    /// Leave the "go to" prefix without navigating
    CancelGoto,

    // ─────────────────────────────────────────────────────────
    // Dev-aid Overlays
    // ─────────────────────────────────────────────────────────
    #[cfg(feature = "dev-overlays")]
    TogglePanel(Panel),
    #[cfg(feature = "dev-overlays")]
    ClosePanel(Panel),
    #[cfg(feature = "dev-overlays")]
    PanelCursor { panel: Panel, down: bool },
    /// Pick a screen: closes the navigator, then navigates
    #[cfg(feature = "dev-overlays")]
    ScreenSelected(Page),
    /// Pick a role: closes the switcher, then sets the role
    #[cfg(feature = "dev-overlays")]
    RoleSelected(Role),

    // ─────────────────────────────────────────────────────────
    // Tabs (any tabbed page)
    // ─────────────────────────────────────────────────────────
    NextTab,
    PrevTab,

    // ─────────────────────────────────────────────────────────
    // Course Catalog
    // ─────────────────────────────────────────────────────────
    /// Focus the search box
    StartSearch,
    /// Replace the search text
    SearchInput { text: String },
    /// Leave the search box, keeping the text
    EndSearch,
    ToggleLanguage(Language),
    ToggleLevel(Level),
    ClearFilters,
    CatalogSelectNext,
    CatalogSelectPrev,
    /// Open the highlighted course
    OpenSelectedCourse,

    // ─────────────────────────────────────────────────────────
    // Lesson Viewer
    // ─────────────────────────────────────────────────────────
    TogglePlayback,
    LessonCursorUp,
    LessonCursorDown,
    ToggleLessonSection,

    // ─────────────────────────────────────────────────────────
    // Code Exercise
    // ─────────────────────────────────────────────────────────
    StartCodeEdit,
    StopCodeEdit,
    CodeInput(char),
    CodeNewline,
    CodeBackspace,
    /// Start a simulated run
    RunCode,
    /// Simulated run timer fired
    CodeRunFinished { generation: u64 },

    // ─────────────────────────────────────────────────────────
    // Quiz
    // ─────────────────────────────────────────────────────────
    QuizSelect(usize),
    QuizNext,
    QuizPrevious,
    QuizRetake,
}
