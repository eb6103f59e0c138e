use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub title: Color,
    pub today: Color,
    pub holiday: Color,
    pub weekday_header: Color,
    pub weekend: Color,
    pub legend_text: Color,
    pub placeholder: Color,
    pub status_bar: Color,
    pub help_title: Color,
    pub help_section: Color,
    pub command_mode: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            title: Color::Cyan,
            today: Color::Green,
            holiday: Color::Magenta,
            weekday_header: Color::Yellow,
            weekend: Color::Gray,
            legend_text: Color::White,
            placeholder: Color::DarkGray,
            status_bar: Color::White,
            help_title: Color::Cyan,
            help_section: Color::Yellow,
            command_mode: Color::White,
            error: Color::Red,
            success: Color::Green,
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            title: Color::Rgb(251, 184, 108),
            today: Color::Rgb(184, 187, 38),
            holiday: Color::Rgb(211, 134, 155),
            weekday_header: Color::Rgb(254, 128, 25),
            weekend: Color::Rgb(168, 153, 132),
            legend_text: Color::Rgb(235, 219, 178),
            placeholder: Color::Rgb(146, 131, 116),
            status_bar: Color::Rgb(235, 219, 178),
            help_title: Color::Rgb(251, 184, 108),
            help_section: Color::Rgb(254, 128, 25),
            command_mode: Color::Rgb(235, 219, 178),
            error: Color::Rgb(251, 73, 52),
            success: Color::Rgb(184, 187, 38),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(136, 192, 208),
            today: Color::Rgb(163, 190, 140),
            holiday: Color::Rgb(180, 142, 173),
            weekday_header: Color::Rgb(235, 203, 139),
            weekend: Color::Rgb(129, 161, 193),
            legend_text: Color::Rgb(229, 233, 240),
            placeholder: Color::Rgb(76, 86, 106),
            status_bar: Color::Rgb(216, 222, 233),
            help_title: Color::Rgb(136, 192, 208),
            help_section: Color::Rgb(235, 203, 139),
            command_mode: Color::Rgb(216, 222, 233),
            error: Color::Rgb(191, 97, 106),
            success: Color::Rgb(163, 190, 140),
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            title: Color::Rgb(139, 233, 253),
            today: Color::Rgb(80, 250, 123),
            holiday: Color::Rgb(255, 121, 198),
            weekday_header: Color::Rgb(241, 250, 140),
            weekend: Color::Rgb(189, 147, 249),
            legend_text: Color::Rgb(248, 248, 242),
            placeholder: Color::Rgb(98, 114, 164),
            status_bar: Color::Rgb(248, 248, 242),
            help_title: Color::Rgb(139, 233, 253),
            help_section: Color::Rgb(241, 250, 140),
            command_mode: Color::Rgb(248, 248, 242),
            error: Color::Rgb(255, 85, 85),
            success: Color::Rgb(80, 250, 123),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark".to_string(),
            title: Color::Rgb(38, 139, 210),
            today: Color::Rgb(133, 153, 0),
            holiday: Color::Rgb(211, 54, 130),
            weekday_header: Color::Rgb(181, 137, 0),
            weekend: Color::Rgb(108, 113, 196),
            legend_text: Color::Rgb(147, 161, 161),
            placeholder: Color::Rgb(88, 110, 117),
            status_bar: Color::Rgb(147, 161, 161),
            help_title: Color::Rgb(38, 139, 210),
            help_section: Color::Rgb(181, 137, 0),
            command_mode: Color::Rgb(147, 161, 161),
            error: Color::Rgb(220, 50, 47),
            success: Color::Rgb(133, 153, 0),
        }
    }

    pub fn monokai() -> Self {
        Self {
            name: "monokai".to_string(),
            title: Color::Rgb(102, 217, 239),
            today: Color::Rgb(166, 226, 46),
            holiday: Color::Rgb(249, 38, 114),
            weekday_header: Color::Rgb(230, 219, 116),
            weekend: Color::Rgb(174, 129, 255),
            legend_text: Color::Rgb(248, 248, 240),
            placeholder: Color::Rgb(117, 113, 94),
            status_bar: Color::Rgb(248, 248, 240),
            help_title: Color::Rgb(102, 217, 239),
            help_section: Color::Rgb(230, 219, 116),
            command_mode: Color::Rgb(248, 248, 240),
            error: Color::Rgb(249, 38, 114),
            success: Color::Rgb(166, 226, 46),
        }
    }

    pub fn get_by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_theme()),
            "gruvbox" => Some(Self::gruvbox()),
            "nord" => Some(Self::nord()),
            "dracula" => Some(Self::dracula()),
            "solarized-dark" | "solarized" => Some(Self::solarized_dark()),
            "monokai" => Some(Self::monokai()),
            _ => None,
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "gruvbox", "nord", "dracula", "solarized-dark", "monokai"]
    }

    /// Colour for a holiday's tag, falling back to the theme accent when the
    /// tag is not a `#RRGGBB` value.
    pub fn holiday_color(&self, color_tag: &str) -> Color {
        parse_color_tag(color_tag).unwrap_or(self.holiday)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

pub fn parse_color_tag(tag: &str) -> Option<Color> {
    let hex = tag.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Theme::get_by_name("Nord").map(|t| t.name), Some("nord".to_string()));
        assert_eq!(Theme::get_by_name("solarized").map(|t| t.name), Some("solarized-dark".to_string()));
    }

    #[test]
    fn unknown_theme_is_none() {
        assert!(Theme::get_by_name("neon").is_none());
    }

    #[test]
    fn every_listed_theme_resolves() {
        for name in Theme::available_themes() {
            assert!(Theme::get_by_name(name).is_some(), "{name} should resolve");
        }
    }

    #[test]
    fn parse_hex_color_tag() {
        assert_eq!(parse_color_tag("#003366"), Some(Color::Rgb(0, 51, 102)));
        assert_eq!(parse_color_tag("#FF6B9D"), Some(Color::Rgb(255, 107, 157)));
    }

    #[test]
    fn invalid_tags_fall_back_to_theme_accent() {
        let theme = Theme::default();
        assert_eq!(theme.holiday_color("red"), Color::Magenta);
        assert_eq!(theme.holiday_color("#12345"), Color::Magenta);
        assert_eq!(theme.holiday_color("#zzzzzz"), Color::Magenta);
    }
}
