//! Theme system for consistent UI colors across dark and light modes.
//!
//! Detects the OS theme (dark/light mode) unless the user pinned one in the
//! config file.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Primary UI colors
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, the active filter and focus states
    pub accent: Color,
    /// Funded campaigns and confirmations
    pub success: Color,
    /// Unfunded campaigns
    pub warning: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels
    pub text_secondary: Color,
    /// Muted text color for help text and dim content
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Highlight background for the active filter button
    pub highlight_bg: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    ///
    /// # Examples
    /// ```
    /// use fundboard::tui::theme::Theme;
    ///
    /// let theme = Theme::detect();
    /// // Theme will match OS dark/light mode setting
    /// ```
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Theme for a configured mode; `Auto` detects the OS setting.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            warning: Color::LightRed,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    ///
    /// # Color Choices
    /// - Darker colors for text and UI elements
    /// - Adjusted accent colors for visibility on light backgrounds
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),  // Dark green
            warning: Color::Rgb(200, 60, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
        }
    }

    /// Color for a campaign's funding state.
    #[must_use]
    pub const fn funding(&self, funded: bool) -> Color {
        if funded {
            self.success
        } else {
            self.warning
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.background, Color::Black);
        assert_eq!(theme.text, Color::White);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.background, Color::White);
        // Yellow is unreadable on white
        assert_ne!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_from_mode_explicit() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_funding_colors_differ() {
        let theme = Theme::dark();
        assert_eq!(theme.funding(true), theme.success);
        assert_eq!(theme.funding(false), theme.warning);
        assert_ne!(theme.funding(true), theme.funding(false));
    }
}
