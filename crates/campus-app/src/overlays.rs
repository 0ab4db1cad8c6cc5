//! Screen navigator and role switcher panels
//!
//! Each panel has its own open flag and cursor. Both start closed.

use campus_core::{Page, Role};

/// Which dev-aid panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    ScreenNavigator,
    RoleSwitcher,
}

impl Panel {
    /// Number of selectable rows
    pub fn row_count(&self) -> usize {
        match self {
            Panel::ScreenNavigator => Page::ALL.len(),
            Panel::RoleSwitcher => Role::ALL.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    pub open: bool,
    pub cursor: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayState {
    pub screen_navigator: PanelState,
    pub role_switcher: PanelState,
}

impl OverlayState {
    pub fn get(&self, panel: Panel) -> &PanelState {
        match panel {
            Panel::ScreenNavigator => &self.screen_navigator,
            Panel::RoleSwitcher => &self.role_switcher,
        }
    }

    fn get_mut(&mut self, panel: Panel) -> &mut PanelState {
        match panel {
            Panel::ScreenNavigator => &mut self.screen_navigator,
            Panel::RoleSwitcher => &mut self.role_switcher,
        }
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        self.get(panel).open
    }

    /// Open a panel with its cursor on `cursor`
    pub fn open(&mut self, panel: Panel, cursor: usize) {
        let state = self.get_mut(panel);
        state.open = true;
        state.cursor = cursor.min(panel.row_count() - 1);
    }

    pub fn close(&mut self, panel: Panel) {
        self.get_mut(panel).open = false;
    }

    /// Move the cursor, wrapping at both ends
    pub fn move_cursor(&mut self, panel: Panel, down: bool) {
        let len = panel.row_count();
        let state = self.get_mut(panel);
        state.cursor = if down {
            (state.cursor + 1) % len
        } else {
            (state.cursor + len - 1) % len
        };
    }

    /// Any panel other than `panel` that is still open
    pub fn other_open(&self, panel: Panel) -> Option<Panel> {
        let other = match panel {
            Panel::ScreenNavigator => Panel::RoleSwitcher,
            Panel::RoleSwitcher => Panel::ScreenNavigator,
        };
        self.is_open(other).then_some(other)
    }
}
