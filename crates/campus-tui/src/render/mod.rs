//! Main render/view function (View in TEA pattern)


use campus_app::state::{AppState, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: chrome, the mounted page, the hint line,
/// the footer and any open dev-aid panels.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.settings.ui.show_hints);
    let goto = state.ui_mode == UiMode::Goto;

    frame.render_widget(
        widgets::MainHeader::new(state.role, state.page).goto_active(goto),
        areas.header,
    );

    widgets::pages::render_page(&state.view, state.ui_mode, areas.body, frame.buffer_mut());

    if areas.hints.height > 0 {
        frame.render_widget(widgets::HintBar::new(state), areas.hints);
    }

    frame.render_widget(widgets::Footer::new().goto_active(goto), areas.footer);

    #[cfg(feature = "dev-overlays")]
    render_overlays(frame, state, areas.body);
}

/// Dev-aid panels float over the page body: navigator bottom-right, role
/// switcher bottom-left
#[cfg(feature = "dev-overlays")]
fn render_overlays(frame: &mut Frame, state: &AppState, body: ratatui::layout::Rect) {
    use campus_app::overlays::Panel;
    use widgets::modal_overlay::bottom_corner_rect;

    let focused = state.focused_panel();

    if state.overlays.is_open(Panel::ScreenNavigator) {
        let rect = bottom_corner_rect(
            widgets::screen_navigator::WIDTH,
            widgets::screen_navigator::HEIGHT,
            body,
            true,
        );
        frame.render_widget(
            widgets::ScreenNavigator::new(
                state.page,
                state.overlays.get(Panel::ScreenNavigator),
                focused == Some(Panel::ScreenNavigator),
            ),
            rect,
        );
    }

    if state.overlays.is_open(Panel::RoleSwitcher) {
        let rect = bottom_corner_rect(
            widgets::role_switcher::WIDTH,
            widgets::role_switcher::HEIGHT,
            body,
            false,
        );
        frame.render_widget(
            widgets::RoleSwitcher::new(
                state.role,
                state.overlays.get(Panel::RoleSwitcher),
                focused == Some(Panel::RoleSwitcher),
            ),
            rect,
        );
    }
}
