//! Custom widget components

mod footer;
mod header;
mod hint_bar;
pub mod modal_overlay;
pub mod pages;
mod tabs;

#[cfg(feature = "dev-overlays")]
pub mod role_switcher;
#[cfg(feature = "dev-overlays")]
pub mod screen_navigator;

pub use footer::Footer;
pub use header::MainHeader;
pub use hint_bar::HintBar;
pub use tabs::TabStrip;

#[cfg(feature = "dev-overlays")]
pub use role_switcher::RoleSwitcher;
#[cfg(feature = "dev-overlays")]
pub use screen_navigator::ScreenNavigator;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate text to a display width, adding an ellipsis if needed
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("Python", 10), "Python");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("Complete JavaScript", 8), "Complet…");
    }

    #[test]
    fn test_truncate_edge_cases() {
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(truncate("abc", 1), "…");
        assert_eq!(truncate("abc", 3), "abc");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two columns wide
        assert_eq!(truncate("日本語テキスト", 5), "日本…");
    }
}
