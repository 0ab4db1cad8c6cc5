//! Application state (Model in TEA pattern)

use campus_core::{role_chrome, Page, PageLink, Role, RoleChrome};

use crate::config::Settings;
use crate::pages::PageView;

#[cfg(feature = "dev-overlays")]
use crate::overlays::{OverlayState, Panel};

/// Current input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Chrome, global and page keys
    #[default]
    Normal,

    /// "Go to" prefix pressed; the next key picks a chrome link
    Goto,

    /// Typing into the catalog search box
    SearchInput,

    /// Typing into the exercise editor
    CodeInput,

    /// Screen navigator panel has focus
    #[cfg(feature = "dev-overlays")]
    ScreenNavigator,

    /// Role switcher panel has focus
    #[cfg(feature = "dev-overlays")]
    RoleSwitcher,
}

/// Application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub ui_mode: UiMode,
    pub phase: AppPhase,

    /// Current page, owned by the root
    pub page: Page,

    /// Current role, owned by the root
    pub role: Role,

    /// Mounted page with its local state
    pub view: PageView,

    /// Application settings from config file and CLI
    pub settings: Settings,

    /// Last code run generation handed out; never reset by remounts
    pub run_generation: u64,

    #[cfg(feature = "dev-overlays")]
    pub overlays: OverlayState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Start on the page and role named by the settings
    pub fn with_settings(settings: Settings) -> Self {
        let page = settings.session.page;
        let role = settings.session.role;
        Self {
            ui_mode: UiMode::Normal,
            phase: AppPhase::Running,
            page,
            role,
            view: PageView::mount(page, role),
            settings,
            run_generation: 0,
            #[cfg(feature = "dev-overlays")]
            overlays: OverlayState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Header content for the current role
    pub fn chrome(&self) -> &'static RoleChrome {
        role_chrome(self.role)
    }

    /// Navigation links the mounted page offers right now
    pub fn links(&self) -> &'static [PageLink] {
        self.view.links(self.role)
    }

    /// Show `page`, remounting only when it differs from the current one
    ///
    /// Returns true if a fresh page was mounted.
    pub fn navigate(&mut self, page: Page) -> bool {
        if matches!(
            self.ui_mode,
            UiMode::Goto | UiMode::SearchInput | UiMode::CodeInput
        ) {
            self.ui_mode = UiMode::Normal;
        }

        let remount = page != self.page;
        self.page = page;
        if remount {
            self.view = PageView::mount(page, self.role);
        }
        remount
    }

    /// Switch role without leaving the current page
    ///
    /// A mounted dashboard is swapped for the new role's variant.
    pub fn set_role(&mut self, role: Role) -> bool {
        let changed = role != self.role;
        self.role = role;
        if changed && self.page == Page::Dashboard {
            self.view = PageView::mount(Page::Dashboard, role);
        }
        changed
    }

    // ─────────────────────────────────────────────────────────
    // Overlay focus
    // ─────────────────────────────────────────────────────────

    #[cfg(feature = "dev-overlays")]
    pub fn toggle_panel(&mut self, panel: Panel) {
        if self.overlays.is_open(panel) {
            self.close_panel(panel);
        } else {
            let cursor = match panel {
                Panel::ScreenNavigator => self.page.index(),
                Panel::RoleSwitcher => self.role.index(),
            };
            self.overlays.open(panel, cursor);
            self.ui_mode = panel_mode(panel);
        }
    }

    /// Close a panel and hand focus to the other one if it is open
    #[cfg(feature = "dev-overlays")]
    pub fn close_panel(&mut self, panel: Panel) {
        self.overlays.close(panel);
        self.ui_mode = match self.overlays.other_open(panel) {
            Some(other) => panel_mode(other),
            None => UiMode::Normal,
        };
    }

    /// Panel that currently has focus
    #[cfg(feature = "dev-overlays")]
    pub fn focused_panel(&self) -> Option<Panel> {
        match self.ui_mode {
            UiMode::ScreenNavigator => Some(Panel::ScreenNavigator),
            UiMode::RoleSwitcher => Some(Panel::RoleSwitcher),
            _ => None,
        }
    }
}

#[cfg(feature = "dev-overlays")]
fn panel_mode(panel: Panel) -> UiMode {
    match panel {
        Panel::ScreenNavigator => UiMode::ScreenNavigator,
        Panel::RoleSwitcher => UiMode::RoleSwitcher,
    }
}
