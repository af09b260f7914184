// Theme support for the TUI
//
// "auto" uses the terminal's ANSI palette, "hype" uses true color (RGB)
// in the purple/pink/yellow gradient family.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Chrome
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub status_bar: Color,
    pub border_type: BorderType,

    // Form
    pub label: Color,
    pub input: Color,
    pub error: Color,
    pub tone_selected_fg: Color,
    pub tone_selected_bg: Color,
    pub button: Color,
    pub button_disabled: Color,

    // Results
    pub caption: Color,
    pub caption_number: Color,
    pub copied: Color,
    pub spinner: Color,

    // Terminal colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "auto" => Self::auto(),
            _ => Self::hype(), // "hype" or unknown
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            title: Color::Magenta,
            border: Color::White,
            highlight: Color::Yellow,
            status_bar: Color::Green,
            border_type: BorderType::Plain,
            label: Color::Cyan,
            input: Color::White,
            error: Color::Red,
            tone_selected_fg: Color::Black,
            tone_selected_bg: Color::Yellow,
            button: Color::Magenta,
            button_disabled: Color::DarkGray,
            caption: Color::White,
            caption_number: Color::Yellow,
            copied: Color::Green,
            spinner: Color::Magenta,
            background: Color::Reset,
            foreground: Color::Reset,
            muted: Color::DarkGray,
        }
    }

    /// Signature theme
    pub fn hype() -> Self {
        Self {
            name: "hype".to_string(),
            title: Color::Rgb(0xfd, 0xe0, 0x47),            // yellow-300
            border: Color::Rgb(0xa5, 0xb4, 0xfc),           // indigo-300
            highlight: Color::Rgb(0xfa, 0xcc, 0x15),        // yellow-400
            status_bar: Color::Rgb(0xc7, 0xd2, 0xfe),       // indigo-200
            border_type: BorderType::Rounded,
            label: Color::Rgb(0xe0, 0xe7, 0xff),            // indigo-100
            input: Color::Rgb(0xff, 0xff, 0xff),
            error: Color::Rgb(0xfc, 0xa5, 0xa5),            // red-300
            tone_selected_fg: Color::Rgb(0x58, 0x1c, 0x87), // purple-900
            tone_selected_bg: Color::Rgb(0xfa, 0xcc, 0x15), // yellow-400
            button: Color::Rgb(0xec, 0x48, 0x99),           // pink-500
            button_disabled: Color::Rgb(0x6b, 0x72, 0x80),  // gray-500
            caption: Color::Rgb(0xf3, 0xf4, 0xf6),
            caption_number: Color::Rgb(0xfb, 0x92, 0x3c),   // orange-400
            copied: Color::Rgb(0x22, 0xc5, 0x5e),           // green-500
            spinner: Color::Rgb(0xf4, 0x72, 0xb6),          // pink-400
            background: Color::Rgb(0x2e, 0x10, 0x65),       // purple-950
            foreground: Color::Rgb(0xe0, 0xe7, 0xff),
            muted: Color::Rgb(0x81, 0x8c, 0xf8),            // indigo-400
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::hype()
    }
}
