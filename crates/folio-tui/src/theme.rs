use folio_core::ThemePreference;
use ratatui::style::Color;

/// Semantic color palette, selected by the persisted theme preference
#[derive(Debug, Clone)]
pub struct Palette {
    // Surfaces
    pub bg: Color,
    pub surface: Color,
    pub border: Color,

    // Text
    pub fg: Color,
    pub muted: Color,

    // Accents
    pub accent: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,

    // Navbar
    pub navbar_bg: Color,
    pub navbar_scrolled_bg: Color,
}

impl Palette {
    pub fn for_preference(pref: ThemePreference) -> Self {
        match pref {
            ThemePreference::Dark => Self::dark(),
            ThemePreference::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(0x1d, 0x20, 0x21),
            surface: Color::Rgb(0x28, 0x2c, 0x2e),
            border: Color::Rgb(0x45, 0x4a, 0x4d),
            fg: Color::Rgb(0xd4, 0xd4, 0xcf),
            muted: Color::Rgb(0x8a, 0x91, 0x94),
            accent: Color::Rgb(0x7d, 0xae, 0xa3),
            highlight: Color::Rgb(0xd8, 0xa6, 0x57),
            error: Color::Rgb(0xea, 0x69, 0x62),
            success: Color::Rgb(0xa9, 0xb6, 0x65),
            navbar_bg: Color::Rgb(0x28, 0x2c, 0x2e),
            navbar_scrolled_bg: Color::Rgb(0x32, 0x38, 0x3b),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(0xf5, 0xf2, 0xe9),
            surface: Color::Rgb(0xea, 0xe6, 0xda),
            border: Color::Rgb(0xc3, 0xbc, 0xab),
            fg: Color::Rgb(0x3a, 0x3a, 0x35),
            muted: Color::Rgb(0x7c, 0x78, 0x6c),
            accent: Color::Rgb(0x2b, 0x6f, 0x63),
            highlight: Color::Rgb(0xb0, 0x72, 0x12),
            error: Color::Rgb(0xc0, 0x32, 0x2c),
            success: Color::Rgb(0x5a, 0x78, 0x1c),
            navbar_bg: Color::Rgb(0xea, 0xe6, 0xda),
            navbar_scrolled_bg: Color::Rgb(0xdd, 0xd7, 0xc6),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_preference() {
        let dark = Palette::for_preference(ThemePreference::Dark);
        let light = Palette::for_preference(ThemePreference::Light);
        assert_ne!(dark.bg, light.bg);
        assert_ne!(dark.fg, light.fg);
    }
}
