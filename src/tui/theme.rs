use crate::kernel::services::ports::ThemeSettings;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightTheme {
    pub mark: Style,
    pub accent: Style,
    pub border: Style,
}

impl Default for HighlightTheme {
    fn default() -> Self {
        Self::from_settings(&ThemeSettings::default())
    }
}

impl HighlightTheme {
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let color = |value: &Option<String>| value.as_deref().and_then(parse_color);

        let mut mark = Style::default().add_modifier(Modifier::BOLD);
        if let Some(fg) = color(&settings.highlight_fg) {
            mark = mark.fg(fg);
        }
        if let Some(bg) = color(&settings.highlight_bg) {
            mark = mark.bg(bg);
        }

        let accent = color(&settings.accent_fg)
            .map(|fg| Style::default().fg(fg))
            .unwrap_or_default();
        let border = color(&settings.border)
            .map(|fg| Style::default().fg(fg))
            .unwrap_or_default();

        Self {
            mark,
            accent,
            border,
        }
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let c = match v.to_ascii_lowercase().as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "white" => Color::Indexed(15),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/tui/theme.rs"]
mod tests;
