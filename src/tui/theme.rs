//! Light and dark colour schemes

use ratatui::style::Color;

/// Colours used across the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub income: Color,
    pub expense: Color,
    pub error: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            muted: Color::DarkGray,
            border: Color::Gray,
            income: Color::Green,
            expense: Color::Red,
            error: Color::Red,
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Cyan,
            muted: Color::Gray,
            border: Color::DarkGray,
            income: Color::LightGreen,
            expense: Color::LightRed,
            error: Color::LightRed,
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}
