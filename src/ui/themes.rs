use ratatui::style::Color;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
}

#[derive(Deserialize)]
struct Pal {
    bg: String,
    fg: String,
    accent: String,
    muted: Option<String>,
}

impl Theme {
    pub fn dark() -> Self {
        Self { bg: Color::Rgb(11, 12, 13), fg: Color::Gray, accent: Color::Cyan, muted: Color::DarkGray }
    }

    pub fn light() -> Self {
        Self { bg: Color::White, fg: Color::Black, accent: Color::Blue, muted: Color::Gray }
    }

    /// Parse a `[palette]` table with hex colors; anything else falls back
    /// to the dark theme.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let v: toml::Value = toml::from_str(s)?;
        if let Some(p) = v.get("palette") {
            let p: Pal = p.clone().try_into()?;
            let muted = p.muted.as_deref().map(parse_hex).unwrap_or(Color::DarkGray);
            return Ok(Self { bg: parse_hex(&p.bg), fg: parse_hex(&p.fg), accent: parse_hex(&p.accent), muted });
        }
        Ok(Self::dark())
    }
}

fn parse_hex(s: &str) -> Color {
    let s = s.trim_start_matches('#');
    if s.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&s[0..2], 16),
            u8::from_str_radix(&s[2..4], 16),
            u8::from_str_radix(&s[4..6], 16),
        ) {
            return Color::Rgb(r, g, b);
        }
    }
    Color::Reset
}

/// Loads `themes/<name>.toml` from the user config directory.
pub fn load_custom(name: &str) -> Option<Theme> {
    let dir = crate::app::settings::project_config_dir()?;
    let path = dir.join("themes").join(format!("{}.toml", name));
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("theme file {} unreadable: {}", path.display(), e);
            return None;
        }
    };
    match Theme::from_toml(&text) {
        Ok(theme) => Some(theme),
        Err(e) => {
            tracing::warn!("theme file {} invalid: {}", path.display(), e);
            None
        }
    }
}
