//! Abstract input key event, independent of terminal library.
//!
//! Keeps campus-app free of crossterm types. The TUI converts
//! `crossterm::event::KeyEvent` into an [`InputKey`] at the boundary.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,

    // Function keys
    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Numeric value of a plain digit key
    pub fn digit(&self) -> Option<u32> {
        match self {
            InputKey::Char(c) => c.to_digit(10),
            _ => None,
        }
    }
}
