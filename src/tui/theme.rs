// Theme system for the TUI
//
// Provides customizable color themes that can be switched at runtime.
// Each theme defines colors for all UI elements.

use ratatui::style::{Color, Modifier, Style};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Dracula,
    Nord,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Dracula,
            ThemeKind::Nord,
        ]
    }

    /// Resolve a config value; unknown names fall back to dark
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            "dracula" => ThemeKind::Dracula,
            "nord" => ThemeKind::Nord,
            _ => ThemeKind::Dark,
        }
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get the previous theme in the cycle
    pub fn prev(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + themes.len() - 1) % themes.len()]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Dracula => "Dracula",
            ThemeKind::Nord => "Nord",
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Dracula => Theme::dracula(),
            ThemeKind::Nord => Theme::nord(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub border: Color,

    // Navigation
    pub logo: Color,
    pub nav_active: Color,
    pub nav_inactive: Color,

    // Section content
    pub heading: Color,
    pub heading_accent: Color,
    pub accent: Color,
    pub timeline_period: Color,
    pub organization: Color,
    pub tech_tag: Color,
    pub link: Color,

    // Sections not yet scrolled into view
    pub faded: Color,

    // Skill gauges
    pub gauge_filled: Color,
    pub gauge_empty: Color,

    // Contact form
    pub input_focused: Color,
    pub placeholder: Color,
    pub error: Color,
    pub success: Color,

    // Chrome
    pub status_bar: Color,
    pub toast_border: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            border: Color::Gray,

            logo: Color::Cyan,
            nav_active: Color::Cyan,
            nav_inactive: Color::Gray,

            heading: Color::White,
            heading_accent: Color::Cyan,
            accent: Color::Cyan,
            timeline_period: Color::Yellow,
            organization: Color::Magenta,
            tech_tag: Color::Green,
            link: Color::Blue,

            faded: Color::DarkGray,

            gauge_filled: Color::Cyan,
            gauge_empty: Color::DarkGray,

            input_focused: Color::Cyan,
            placeholder: Color::DarkGray,
            error: Color::Red,
            success: Color::Green,

            status_bar: Color::Green,
            toast_border: Color::Cyan,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
            log_trace: Color::DarkGray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            border: Color::DarkGray,

            logo: Color::Blue,
            nav_active: Color::Blue,
            nav_inactive: Color::DarkGray,

            heading: Color::Black,
            heading_accent: Color::Blue,
            accent: Color::Blue,
            timeline_period: Color::Rgb(184, 134, 11), // Dark goldenrod
            organization: Color::Magenta,
            tech_tag: Color::Rgb(0, 100, 0),
            link: Color::Blue,

            faded: Color::Gray,

            gauge_filled: Color::Blue,
            gauge_empty: Color::Gray,

            input_focused: Color::Blue,
            placeholder: Color::Gray,
            error: Color::Red,
            success: Color::Rgb(0, 100, 0),

            status_bar: Color::DarkGray,
            toast_border: Color::Blue,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11),
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
            log_trace: Color::Gray,
        }
    }

    /// Dracula theme
    pub fn dracula() -> Self {
        Self {
            background: Color::Rgb(40, 42, 54),
            foreground: Color::Rgb(248, 248, 242),
            border: Color::Rgb(68, 71, 90),

            logo: Color::Rgb(139, 233, 253), // Cyan
            nav_active: Color::Rgb(189, 147, 249), // Purple
            nav_inactive: Color::Rgb(98, 114, 164), // Comment

            heading: Color::Rgb(248, 248, 242),
            heading_accent: Color::Rgb(255, 121, 198), // Pink
            accent: Color::Rgb(139, 233, 253),
            timeline_period: Color::Rgb(241, 250, 140), // Yellow
            organization: Color::Rgb(189, 147, 249),
            tech_tag: Color::Rgb(80, 250, 123), // Green
            link: Color::Rgb(139, 233, 253),

            faded: Color::Rgb(68, 71, 90),

            gauge_filled: Color::Rgb(189, 147, 249),
            gauge_empty: Color::Rgb(68, 71, 90),

            input_focused: Color::Rgb(139, 233, 253),
            placeholder: Color::Rgb(98, 114, 164),
            error: Color::Rgb(255, 85, 85),
            success: Color::Rgb(80, 250, 123),

            status_bar: Color::Rgb(80, 250, 123),
            toast_border: Color::Rgb(189, 147, 249),

            log_error: Color::Rgb(255, 85, 85),
            log_warn: Color::Rgb(241, 250, 140),
            log_info: Color::Rgb(139, 233, 253),
            log_debug: Color::Rgb(98, 114, 164),
            log_trace: Color::Rgb(68, 71, 90),
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(236, 239, 244),
            border: Color::Rgb(76, 86, 106),

            logo: Color::Rgb(136, 192, 208), // Frost
            nav_active: Color::Rgb(136, 192, 208),
            nav_inactive: Color::Rgb(76, 86, 106),

            heading: Color::Rgb(236, 239, 244),
            heading_accent: Color::Rgb(136, 192, 208),
            accent: Color::Rgb(129, 161, 193), // Frost 2
            timeline_period: Color::Rgb(235, 203, 139), // Yellow
            organization: Color::Rgb(180, 142, 173), // Purple
            tech_tag: Color::Rgb(163, 190, 140), // Green
            link: Color::Rgb(129, 161, 193),

            faded: Color::Rgb(76, 86, 106),

            gauge_filled: Color::Rgb(136, 192, 208),
            gauge_empty: Color::Rgb(59, 66, 82),

            input_focused: Color::Rgb(136, 192, 208),
            placeholder: Color::Rgb(76, 86, 106),
            error: Color::Rgb(191, 97, 106),
            success: Color::Rgb(163, 190, 140),

            status_bar: Color::Rgb(163, 190, 140),
            toast_border: Color::Rgb(136, 192, 208),

            log_error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(129, 161, 193),
            log_debug: Color::Rgb(76, 86, 106),
            log_trace: Color::Rgb(59, 66, 82),
        }
    }

    // Helper methods for creating styles

    /// Base style with theme foreground
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    /// Section heading style
    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted word inside a heading
    pub fn heading_accent_style(&self) -> Style {
        Style::default()
            .fg(self.heading_accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Uniform style applied to every span of a faded-out section
    pub fn faded_style(&self) -> Style {
        Style::default().fg(self.faded).add_modifier(Modifier::DIM)
    }

    /// Validation error style
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Submission success style
    pub fn success_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Status bar style
    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status_bar)
    }

    /// Style for a log level line
    pub fn log_level_style(&self, level: crate::logging::LogLevel) -> Style {
        use crate::logging::LogLevel;
        let color = match level {
            LogLevel::Error => self.log_error,
            LogLevel::Warn => self.log_warn,
            LogLevel::Info => self.log_info,
            LogLevel::Debug => self.log_debug,
            LogLevel::Trace => self.log_trace,
        };
        Style::default().fg(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_every_theme_and_wraps() {
        let mut kind = ThemeKind::Dark;
        for _ in 0..ThemeKind::all().len() {
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::Dark);

        kind = kind.prev();
        assert_eq!(kind, ThemeKind::Nord);
    }

    #[test]
    fn parse_is_case_insensitive_with_dark_fallback() {
        assert_eq!(ThemeKind::parse("Dracula"), ThemeKind::Dracula);
        assert_eq!(ThemeKind::parse("NORD"), ThemeKind::Nord);
        assert_eq!(ThemeKind::parse("no-such-theme"), ThemeKind::Dark);
    }
}
